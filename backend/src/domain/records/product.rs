//! Products sold at the clinic counter.

use std::fmt;

use serde::Serialize;

use super::validation::{Check, required};
use super::{Record, RecordKind, messages};
use crate::domain::{FieldErrors, FormFields};

const NAME: &str = "name";
const TYPE: &str = "type";
const PRICE: &str = "price";

/// Strictly positive, finite price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Wrap `value` if it is finite and greater than zero.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product on sale, such as food or accessories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) price: Price,
}

impl Product {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product category, submitted as the `type` field.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

fn price(value: &str) -> Check<Price> {
    let raw = required(value, messages::PRICE_REQUIRED)?;
    let parsed = raw
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or(messages::PRICE_NOT_NUMERIC)?;
    Price::new(parsed).ok_or(messages::PRICE_NOT_POSITIVE)
}

impl Record for Product {
    const KIND: RecordKind = RecordKind::Product;
    const FIELDS: &'static [&'static str] = &[NAME, TYPE, PRICE];

    fn from_form(form: &FormFields) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check(NAME, required(form.value(NAME), messages::NAME_REQUIRED));
        let kind = errors.check(TYPE, required(form.value(TYPE), messages::TYPE_REQUIRED));
        let price = errors.check(PRICE, price(form.value(PRICE)));

        match (name, kind, price) {
            (Some(name), Some(kind), Some(price)) => Ok(Self { name, kind, price }),
            _ => Err(errors),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::from_iter([
            (NAME, self.name.clone()),
            (TYPE, self.kind.clone()),
            (PRICE, self.price.to_string()),
        ])
    }
}

/// Validate a product submission.
pub fn validate_product(form: &FormFields) -> FieldErrors {
    Product::validate(form)
}
