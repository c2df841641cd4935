//! Driving port for reading records.

use async_trait::async_trait;

use crate::domain::{Record, RecordError, RecordId, Stored};

/// Read access to records of type `R`.
#[async_trait]
pub trait RecordQuery<R: Record>: Send + Sync {
    /// Fetch record `id` or fail with [`RecordError::NotFound`].
    async fn fetch(&self, id: RecordId) -> Result<Stored<R>, RecordError>;

    /// Every record ordered by identifier.
    async fn list(&self) -> Result<Vec<Stored<R>>, RecordError>;
}
