//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod record_command;
mod record_query;
mod record_repository;

pub use record_command::RecordCommand;
pub use record_query::RecordQuery;
#[cfg(test)]
pub use record_repository::MockRecordRepository;
pub use record_repository::{RecordRepository, RecordRepositoryError};
