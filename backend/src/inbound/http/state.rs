//! Shared HTTP adapter state.
//!
//! Handlers receive their ports through `web::Data`, so they depend only on
//! the driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{RecordCommand, RecordQuery, RecordRepository};
use crate::domain::{Client, Medicine, Product, Provider, Record, RecordService, Vet};
use crate::outbound::memory::InMemoryRecordRepository;

/// Command and query ports for one record type.
pub struct RecordPorts<R: Record> {
    pub command: Arc<dyn RecordCommand<R>>,
    pub query: Arc<dyn RecordQuery<R>>,
}

impl<R: Record> Clone for RecordPorts<R> {
    fn clone(&self) -> Self {
        Self {
            command: Arc::clone(&self.command),
            query: Arc::clone(&self.query),
        }
    }
}

impl<R: Record> RecordPorts<R> {
    /// Ports backed by a [`RecordService`] over `repository`.
    pub fn from_repository<P>(repository: Arc<P>) -> Self
    where
        P: RecordRepository<R> + 'static,
    {
        let service = Arc::new(RecordService::<R, P>::new(repository));
        Self {
            command: service.clone(),
            query: service,
        }
    }

    /// Ports over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::from_repository(Arc::new(InMemoryRecordRepository::<R>::new()))
    }
}

/// Dependency bundle for the record handlers.
#[derive(Clone)]
pub struct HttpState {
    pub clients: RecordPorts<Client>,
    pub vets: RecordPorts<Vet>,
    pub medicines: RecordPorts<Medicine>,
    pub products: RecordPorts<Product>,
    pub providers: RecordPorts<Provider>,
}

impl HttpState {
    /// State where every record type lives in process memory.
    pub fn in_memory() -> Self {
        Self {
            clients: RecordPorts::in_memory(),
            vets: RecordPorts::in_memory(),
            medicines: RecordPorts::in_memory(),
            products: RecordPorts::in_memory(),
            providers: RecordPorts::in_memory(),
        }
    }
}
