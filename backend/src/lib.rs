//! Record-management backend for a veterinary clinic.
//!
//! Layout follows ports and adapters: [`domain`] holds the records, their
//! validators and the record service; [`inbound`] exposes them over HTTP;
//! [`outbound`] stores them in PostgreSQL or in memory.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use middleware::Trace;
