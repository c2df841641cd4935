//! Failures of record operations and their mapping onto [`Error`].

use serde_json::json;
use tracing::warn;

use super::ports::RecordRepositoryError;
use super::{Error, FieldErrors, RecordId, RecordKind};

/// Why a record operation did not complete.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// The submission failed validation; nothing was persisted.
    #[error("submission failed validation")]
    Invalid(FieldErrors),
    /// No record of this kind has the identifier.
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: RecordId },
    /// The store failed.
    #[error(transparent)]
    Repository(#[from] RecordRepositoryError),
}

impl RecordError {
    pub fn not_found(kind: RecordKind, id: RecordId) -> Self {
        Self::NotFound { kind, id }
    }

    /// Field errors when this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<RecordError> for Error {
    fn from(value: RecordError) -> Self {
        match value {
            RecordError::Invalid(errors) => Self::invalid_request("submission failed validation")
                .with_details(json!({ "code": "invalid_fields", "fields": errors })),
            RecordError::NotFound { kind, id } => Self::not_found(format!("{kind} {id} not found"))
                .with_details(json!({ "kind": kind, "id": id })),
            RecordError::Repository(RecordRepositoryError::Connection { message }) => {
                // Adapter detail stays in the logs; 503 bodies reach clients.
                warn!(%message, "record store unavailable");
                Self::service_unavailable("record store unavailable")
            }
            RecordError::Repository(RecordRepositoryError::Query { message }) => {
                Self::internal(format!("record store error: {message}"))
            }
        }
    }
}
