//! Suppliers the clinic buys from.

use serde::Serialize;

use super::validation::{email, required};
use super::{Record, RecordKind, messages};
use crate::domain::{FieldErrors, FormFields};

const NAME: &str = "name";
const EMAIL: &str = "email";
const ADDRESS: &str = "address";

/// A supplier of medicines or products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provider {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) address: String,
}

impl Provider {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Record for Provider {
    const KIND: RecordKind = RecordKind::Provider;
    const FIELDS: &'static [&'static str] = &[NAME, EMAIL, ADDRESS];

    fn from_form(form: &FormFields) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check(NAME, required(form.value(NAME), messages::NAME_REQUIRED));
        let email = errors.check(EMAIL, email(form.value(EMAIL)));
        let address = errors.check(
            ADDRESS,
            required(form.value(ADDRESS), messages::ADDRESS_REQUIRED),
        );

        match (name, email, address) {
            (Some(name), Some(email), Some(address)) => Ok(Self {
                name,
                email,
                address,
            }),
            _ => Err(errors),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::from_iter([
            (NAME, self.name.as_str()),
            (EMAIL, self.email.as_str()),
            (ADDRESS, self.address.as_str()),
        ])
    }
}

/// Validate a provider submission.
pub fn validate_provider(form: &FormFields) -> FieldErrors {
    Provider::validate(form)
}
