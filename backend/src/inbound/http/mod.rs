//! HTTP inbound adapter exposing the record endpoints and health probes.

pub mod error;
pub mod health;
pub mod records;
pub mod state;

pub use error::ApiResult;
