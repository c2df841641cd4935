//! Domain primitives, records and services.
//!
//! Purpose: define the clinic's record types, their validators and the
//! service that persists valid submissions. Everything here is transport
//! agnostic; adapters live under `inbound` and `outbound`.
//!
//! Public surface:
//! - [`Record`] and the five record types with their `validate_*` functions.
//! - [`FormFields`] / [`FieldErrors`]: validator input and output.
//! - [`RecordService`]: save/update/fetch/list/delete over a repository.
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.

pub mod error;
mod forms;
pub mod ports;
mod record_error;
mod record_service;
pub mod records;
mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::forms::{FieldErrors, FormFields};
pub use self::record_error::RecordError;
pub use self::record_service::RecordService;
pub use self::records::{
    Client, Dose, Medicine, Price, Product, Provider, Record, RecordId, RecordIdError, RecordKind,
    Specialty, Stored, Vet, messages, validate_client, validate_medicine, validate_product,
    validate_provider, validate_vet,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
