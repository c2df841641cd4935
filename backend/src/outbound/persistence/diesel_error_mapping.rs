//! Translation of pool and Diesel failures into repository errors.

use tracing::debug;

use crate::domain::ports::RecordRepositoryError;

use super::pool::PoolError;

/// Pool failures mean the database is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> RecordRepositoryError {
    debug!(%error, "connection checkout failed");
    RecordRepositoryError::connection(error.message())
}

/// Map Diesel failures, logging the detail and keeping it out of the error.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> RecordRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => RecordRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => RecordRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RecordRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            RecordRepositoryError::query("value rejected by table constraint")
        }
        _ => RecordRepositoryError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let error = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(error, RecordRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn not_found_is_a_query_error() {
        let error = map_diesel_error(diesel::result::Error::NotFound);
        assert_eq!(error, RecordRepositoryError::query("record not found"));
    }

    #[rstest]
    fn rollback_is_reported_generically() {
        let error = map_diesel_error(diesel::result::Error::RollbackTransaction);
        assert_eq!(error, RecordRepositoryError::query("database error"));
    }
}
