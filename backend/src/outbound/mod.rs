//! Outbound adapters implementing the record repository port.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: process-local store for database-less runs and tests.
//!
//! Adapters only translate between domain records and storage; they hold no
//! business rules.

pub mod memory;
pub mod persistence;
