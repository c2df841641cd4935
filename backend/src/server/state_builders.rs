//! Builders wiring record services to their storage adapters.

use std::sync::Arc;

use tracing::info;
use vetsoft::inbound::http::state::{HttpState, RecordPorts};
use vetsoft::outbound::persistence::{
    DbPool, DieselClientRepository, DieselMedicineRepository, DieselProductRepository,
    DieselProviderRepository, DieselVetRepository,
};

use super::ServerConfig;

fn build_diesel_state(pool: &DbPool) -> HttpState {
    HttpState {
        clients: RecordPorts::from_repository(Arc::new(DieselClientRepository::new(pool.clone()))),
        vets: RecordPorts::from_repository(Arc::new(DieselVetRepository::new(pool.clone()))),
        medicines: RecordPorts::from_repository(Arc::new(DieselMedicineRepository::new(
            pool.clone(),
        ))),
        products: RecordPorts::from_repository(Arc::new(DieselProductRepository::new(
            pool.clone(),
        ))),
        providers: RecordPorts::from_repository(Arc::new(DieselProviderRepository::new(
            pool.clone(),
        ))),
    }
}

/// PostgreSQL-backed state when a pool is configured, in-memory otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => build_diesel_state(pool),
        None => {
            info!("no database configured; records are kept in memory");
            HttpState::in_memory()
        }
    }
}
