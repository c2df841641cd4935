//! Clinic records and their validators.
//!
//! Every record type implements [`Record`], which ties it to a pure
//! validator over submitted [`FormFields`] and to the form representation
//! used when merging partial updates. A record value only exists once its
//! validator has accepted the submission, so anything handed to a
//! repository is already valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{FieldErrors, FormFields};

mod client;
pub mod messages;
mod medicine;
mod product;
mod provider;
mod validation;
mod vet;

pub use client::{Client, ORGANISATION_EMAIL_DOMAIN, PHONE_COUNTRY_PREFIX, validate_client};
pub use medicine::{DOSE_MAX, DOSE_MIN, Dose, Medicine, validate_medicine};
pub use product::{Price, Product, validate_product};
pub use provider::{Provider, validate_provider};
pub use vet::{Specialty, UnknownSpecialty, Vet, validate_vet};

/// The five kinds of record the clinic keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Client,
    Vet,
    Medicine,
    Product,
    Provider,
}

impl RecordKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Client,
        Self::Vet,
        Self::Medicine,
        Self::Product,
        Self::Provider,
    ];

    /// Plural path segment used by adapters (`clients`, `vets`, ...).
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Client => "clients",
            Self::Vet => "vets",
            Self::Medicine => "medicines",
            Self::Product => "products",
            Self::Provider => "providers",
        }
    }

    /// Singular, lower-case name used in messages and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Vet => "vet",
            Self::Medicine => "medicine",
            Self::Product => "product",
            Self::Provider => "provider",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation errors returned by [`RecordId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdError {
    #[error("record id must be a positive integer")]
    NotPositive,
    #[error("record id must be numeric")]
    NotNumeric,
}

/// Store-assigned record identifier.
///
/// ## Invariants
/// - Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RecordId(i64);

impl RecordId {
    /// Validate and wrap a raw identifier.
    pub fn new(raw: i64) -> Result<Self, RecordIdError> {
        if raw <= 0 {
            return Err(RecordIdError::NotPositive);
        }
        Ok(Self(raw))
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = RecordIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().parse::<i64>().map_err(|_| RecordIdError::NotNumeric)?;
        Self::new(raw)
    }
}

impl TryFrom<i64> for RecordId {
    type Error = RecordIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

/// A record paired with the identifier the store assigned to it.
///
/// Serialises flat: `{"id": 1, "name": ..., ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stored<R> {
    id: RecordId,
    #[serde(flatten)]
    record: R,
}

impl<R> Stored<R> {
    /// Pair `record` with `id`.
    pub fn new(id: RecordId, record: R) -> Self {
        Self { id, record }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Borrow the record values.
    pub fn record(&self) -> &R {
        &self.record
    }

    /// Discard the identifier.
    pub fn into_record(self) -> R {
        self.record
    }
}

/// Behaviour shared by every clinic record type.
pub trait Record: Clone + fmt::Debug + PartialEq + Serialize + Send + Sync + 'static {
    /// Which kind of record this is.
    const KIND: RecordKind;

    /// Field names accepted from submitted forms.
    const FIELDS: &'static [&'static str];

    /// Validate `form` and build the record.
    ///
    /// Every field is checked; the error mapping lists all failures at once.
    fn from_form(form: &FormFields) -> Result<Self, FieldErrors>;

    /// Render the record back into form values.
    fn to_form(&self) -> FormFields;

    /// Pure validator: the field errors `form` would produce.
    fn validate(form: &FormFields) -> FieldErrors {
        Self::from_form(form).err().unwrap_or_default()
    }

    /// Merge the non-blank values of `partial` over this record and
    /// re-validate the result.
    fn merge(&self, partial: &FormFields) -> Result<Self, FieldErrors> {
        let merged = self.to_form().merged_with(partial, Self::FIELDS);
        Self::from_form(&merged)
    }
}
