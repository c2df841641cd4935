//! Driving port for record mutations.

use async_trait::async_trait;

use crate::domain::{FormFields, Record, RecordError, RecordId, Stored};

/// Create, update and delete records of type `R`.
#[async_trait]
pub trait RecordCommand<R: Record>: Send + Sync {
    /// Validate `form`; persist and return the new record only if it is valid.
    async fn save(&self, form: &FormFields) -> Result<Stored<R>, RecordError>;

    /// Merge the non-blank values of `partial` into record `id`, re-validate
    /// the result and persist it only if it is valid.
    async fn update(&self, id: RecordId, partial: &FormFields) -> Result<Stored<R>, RecordError>;

    /// Remove record `id`.
    async fn delete(&self, id: RecordId) -> Result<(), RecordError>;
}
