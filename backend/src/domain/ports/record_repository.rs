//! Driven port for record persistence.
//!
//! Adapters store already-validated records and assign their identifiers.
//! They never validate; the domain only hands them values that passed the
//! record's validator.

use async_trait::async_trait;

use crate::domain::{Record, RecordId, Stored};

use super::define_port_error;

define_port_error! {
    /// Errors raised by record repository adapters.
    pub enum RecordRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "record store connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } =>
            "record store query failed: {message}",
    }
}

/// Port for create/read/update/delete of one record type by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository<R: Record>: Send + Sync {
    /// Store a new record and return it with its assigned identifier.
    async fn insert(&self, record: &R) -> Result<Stored<R>, RecordRepositoryError>;

    /// Fetch a record, or `None` when the identifier is unknown.
    async fn find_by_id(&self, id: RecordId) -> Result<Option<Stored<R>>, RecordRepositoryError>;

    /// Every stored record ordered by identifier.
    async fn list(&self) -> Result<Vec<Stored<R>>, RecordRepositoryError>;

    /// Replace the values of an existing record.
    ///
    /// Returns `false` when no record has this identifier.
    async fn update(&self, id: RecordId, record: &R) -> Result<bool, RecordRepositoryError>;

    /// Remove a record.
    ///
    /// Returns `false` when no record has this identifier.
    async fn delete(&self, id: RecordId) -> Result<bool, RecordRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn connection_error_formats_message() {
        let error = RecordRepositoryError::connection("refused");
        assert_eq!(error.to_string(), "record store connection failed: refused");
    }

    #[rstest]
    fn query_error_formats_message() {
        let error = RecordRepositoryError::query("syntax");
        assert!(error.to_string().contains("syntax"));
    }
}
