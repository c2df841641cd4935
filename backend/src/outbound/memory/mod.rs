//! Process-local `RecordRepository` used when no database is configured.
//!
//! Records live in a `BTreeMap` behind a mutex, so listing is ordered by
//! identifier. Identifiers come from a counter and are never reused.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{RecordRepository, RecordRepositoryError};
use crate::domain::{Record, RecordId, Stored};

struct Table<R> {
    rows: BTreeMap<RecordId, R>,
    last_id: i64,
}

/// In-memory store for one record type.
pub struct InMemoryRecordRepository<R> {
    table: Mutex<Table<R>>,
}

impl<R> Default for InMemoryRecordRepository<R> {
    fn default() -> Self {
        Self {
            table: Mutex::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl<R> InMemoryRecordRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table<R>>, RecordRepositoryError> {
        self.table
            .lock()
            .map_err(|_: PoisonError<_>| RecordRepositoryError::connection("record store poisoned"))
    }
}

#[async_trait]
impl<R: Record> RecordRepository<R> for InMemoryRecordRepository<R> {
    async fn insert(&self, record: &R) -> Result<Stored<R>, RecordRepositoryError> {
        let mut table = self.lock()?;
        let next = table.last_id + 1;
        let id = RecordId::new(next).map_err(|err| RecordRepositoryError::query(err.to_string()))?;
        table.last_id = next;
        table.rows.insert(id, record.clone());
        Ok(Stored::new(id, record.clone()))
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Stored<R>>, RecordRepositoryError> {
        let table = self.lock()?;
        Ok(table
            .rows
            .get(&id)
            .map(|record| Stored::new(id, record.clone())))
    }

    async fn list(&self) -> Result<Vec<Stored<R>>, RecordRepositoryError> {
        let table = self.lock()?;
        Ok(table
            .rows
            .iter()
            .map(|(id, record)| Stored::new(*id, record.clone()))
            .collect())
    }

    async fn update(&self, id: RecordId, record: &R) -> Result<bool, RecordRepositoryError> {
        let mut table = self.lock()?;
        match table.rows.get_mut(&id) {
            Some(current) => {
                *current = record.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: RecordId) -> Result<bool, RecordRepositoryError> {
        let mut table = self.lock()?;
        Ok(table.rows.remove(&id).is_some())
    }
}
