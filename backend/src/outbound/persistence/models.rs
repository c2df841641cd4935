//! Internal Diesel row structs for the record tables.
//!
//! Rows never leave the persistence layer. Reads go through
//! `into_stored`, which enforces only the typed invariants: positive ids,
//! known specialties, doses in 1..=10 and positive prices. Free-text
//! columns are trusted as written, since every write borrows from an
//! already-validated record.

use diesel::prelude::*;
use tracing::warn;

use crate::domain::ports::RecordRepositoryError;
use crate::domain::{
    Client, Dose, Medicine, Price, Product, Provider, RecordId, RecordKind, Specialty, Stored, Vet,
};

use super::schema::{clients, medicines, products, providers, vets};

fn corrupt(kind: RecordKind, id: i64, detail: impl std::fmt::Display) -> RecordRepositoryError {
    warn!(%kind, id, %detail, "stored row failed domain checks");
    RecordRepositoryError::query(format!("stored {kind} {id} is invalid: {detail}"))
}

fn record_id(kind: RecordKind, raw: i64) -> Result<RecordId, RecordRepositoryError> {
    RecordId::new(raw).map_err(|err| corrupt(kind, raw, err))
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = clients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ClientRow {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
}

impl ClientRow {
    pub fn into_stored(self) -> Result<Stored<Client>, RecordRepositoryError> {
        let id = record_id(RecordKind::Client, self.id)?;
        Ok(Stored::new(
            id,
            Client {
                name: self.name,
                phone: self.phone,
                email: self.email,
                address: self.address,
            },
        ))
    }
}

/// Values written on insert and update. `address: None` clears the column.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = clients)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ClientValues<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub address: Option<&'a str>,
}

impl<'a> From<&'a Client> for ClientValues<'a> {
    fn from(client: &'a Client) -> Self {
        Self {
            name: &client.name,
            phone: &client.phone,
            email: &client.email,
            address: client.address.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Vets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = vets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct VetRow {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub specialty: String,
}

impl VetRow {
    pub fn into_stored(self) -> Result<Stored<Vet>, RecordRepositoryError> {
        let id = record_id(RecordKind::Vet, self.id)?;
        let specialty = self
            .specialty
            .parse::<Specialty>()
            .map_err(|err| corrupt(RecordKind::Vet, self.id, err))?;
        Ok(Stored::new(
            id,
            Vet {
                name: self.name,
                phone: self.phone,
                email: self.email,
                specialty,
            },
        ))
    }
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = vets)]
pub(crate) struct VetValues<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub specialty: &'static str,
}

impl<'a> From<&'a Vet> for VetValues<'a> {
    fn from(vet: &'a Vet) -> Self {
        Self {
            name: &vet.name,
            phone: &vet.phone,
            email: &vet.email,
            specialty: vet.specialty.as_str(),
        }
    }
}

// ---------------------------------------------------------------------------
// Medicines
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = medicines)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MedicineRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub dose: i16,
}

impl MedicineRow {
    pub fn into_stored(self) -> Result<Stored<Medicine>, RecordRepositoryError> {
        let id = record_id(RecordKind::Medicine, self.id)?;
        let dose = Dose::new(i64::from(self.dose)).ok_or_else(|| {
            corrupt(
                RecordKind::Medicine,
                self.id,
                format_args!("dose {}", self.dose),
            )
        })?;
        Ok(Stored::new(
            id,
            Medicine {
                name: self.name,
                description: self.description,
                dose,
            },
        ))
    }
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = medicines)]
pub(crate) struct MedicineValues<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub dose: i16,
}

impl<'a> From<&'a Medicine> for MedicineValues<'a> {
    fn from(medicine: &'a Medicine) -> Self {
        Self {
            name: &medicine.name,
            description: &medicine.description,
            dose: i16::from(medicine.dose.get()),
        }
    }
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductRow {
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub price: f64,
}

impl ProductRow {
    pub fn into_stored(self) -> Result<Stored<Product>, RecordRepositoryError> {
        let id = record_id(RecordKind::Product, self.id)?;
        let price = Price::new(self.price).ok_or_else(|| {
            corrupt(
                RecordKind::Product,
                self.id,
                format_args!("price {}", self.price),
            )
        })?;
        Ok(Stored::new(
            id,
            Product {
                name: self.name,
                kind: self.kind,
                price,
            },
        ))
    }
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = products)]
pub(crate) struct ProductValues<'a> {
    pub name: &'a str,
    pub kind: &'a str,
    pub price: f64,
}

impl<'a> From<&'a Product> for ProductValues<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: &product.name,
            kind: &product.kind,
            price: product.price.get(),
        }
    }
}

// ---------------------------------------------------------------------------
// Providers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = providers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProviderRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
}

impl ProviderRow {
    pub fn into_stored(self) -> Result<Stored<Provider>, RecordRepositoryError> {
        let id = record_id(RecordKind::Provider, self.id)?;
        Ok(Stored::new(
            id,
            Provider {
                name: self.name,
                email: self.email,
                address: self.address,
            },
        ))
    }
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = providers)]
pub(crate) struct ProviderValues<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub address: &'a str,
}

impl<'a> From<&'a Provider> for ProviderValues<'a> {
    fn from(provider: &'a Provider) -> Self {
        Self {
            name: &provider.name,
            email: &provider.email,
            address: &provider.address,
        }
    }
}
