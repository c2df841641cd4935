//! PostgreSQL-backed `RecordRepository` implementations, one per table.
//!
//! The five tables share the same access pattern, so the adapters are
//! generated by `diesel_record_repository!`. Each invocation names the
//! record type, its table and the row/values structs from `models.rs`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RecordRepository, RecordRepositoryError};
use crate::domain::{Client, Medicine, Product, Provider, RecordId, Stored, Vet};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{
    ClientRow, ClientValues, MedicineRow, MedicineValues, ProductRow, ProductValues, ProviderRow,
    ProviderValues, VetRow, VetValues,
};
use super::pool::DbPool;
use super::schema::{clients, medicines, products, providers, vets};

/// Generate a Diesel repository struct and its `RecordRepository` impl.
///
/// Generated methods acquire a pooled connection, run one statement and
/// convert rows through `into_stored`. Update and delete report whether a
/// row was affected.
macro_rules! diesel_record_repository {
    (
        $(#[$meta:meta])*
        pub struct $repo:ident {
            record: $record:ty,
            table: $table:ident,
            row: $row:ident,
            values: $values:ident $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $repo {
            pool: DbPool,
        }

        impl $repo {
            /// Create a repository over `pool`.
            pub fn new(pool: DbPool) -> Self {
                Self { pool }
            }
        }

        #[async_trait]
        impl RecordRepository<$record> for $repo {
            async fn insert(
                &self,
                record: &$record,
            ) -> Result<Stored<$record>, RecordRepositoryError> {
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let row: $row = diesel::insert_into($table::table)
                    .values($values::from(record))
                    .returning($row::as_returning())
                    .get_result(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                row.into_stored()
            }

            async fn find_by_id(
                &self,
                id: RecordId,
            ) -> Result<Option<Stored<$record>>, RecordRepositoryError> {
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let row: Option<$row> = $table::table
                    .find(id.get())
                    .select($row::as_select())
                    .first(&mut conn)
                    .await
                    .optional()
                    .map_err(map_diesel_error)?;
                row.map($row::into_stored).transpose()
            }

            async fn list(&self) -> Result<Vec<Stored<$record>>, RecordRepositoryError> {
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let rows: Vec<$row> = $table::table
                    .order($table::id.asc())
                    .select($row::as_select())
                    .load(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                rows.into_iter().map($row::into_stored).collect()
            }

            async fn update(
                &self,
                id: RecordId,
                record: &$record,
            ) -> Result<bool, RecordRepositoryError> {
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let affected = diesel::update($table::table.find(id.get()))
                    .set($values::from(record))
                    .execute(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                Ok(affected > 0)
            }

            async fn delete(&self, id: RecordId) -> Result<bool, RecordRepositoryError> {
                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let affected = diesel::delete($table::table.find(id.get()))
                    .execute(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                Ok(affected > 0)
            }
        }
    };
}

diesel_record_repository! {
    /// Clients stored in the `clients` table.
    pub struct DieselClientRepository {
        record: Client,
        table: clients,
        row: ClientRow,
        values: ClientValues,
    }
}

diesel_record_repository! {
    /// Veterinarians stored in the `vets` table.
    pub struct DieselVetRepository {
        record: Vet,
        table: vets,
        row: VetRow,
        values: VetValues,
    }
}

diesel_record_repository! {
    /// Medicines stored in the `medicines` table.
    pub struct DieselMedicineRepository {
        record: Medicine,
        table: medicines,
        row: MedicineRow,
        values: MedicineValues,
    }
}

diesel_record_repository! {
    /// Products stored in the `products` table.
    pub struct DieselProductRepository {
        record: Product,
        table: products,
        row: ProductRow,
        values: ProductValues,
    }
}

diesel_record_repository! {
    /// Providers stored in the `providers` table.
    pub struct DieselProviderRepository {
        record: Provider,
        table: providers,
        row: ProviderRow,
        values: ProviderValues,
    }
}
