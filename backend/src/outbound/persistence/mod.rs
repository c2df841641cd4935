//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories are thin translators between Diesel rows and domain
//! records: no validation or business rules live here. Connections come
//! from a `bb8` pool driven by `diesel-async`, and every failure is mapped
//! to `RecordRepositoryError`.
//!
//! ```ignore
//! use vetsoft::outbound::persistence::{DbPool, DieselVetRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/vetsoft")).await?;
//! let vets = DieselVetRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_record_repositories;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_record_repositories::{
    DieselClientRepository, DieselMedicineRepository, DieselProductRepository,
    DieselProviderRepository, DieselVetRepository,
};
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
