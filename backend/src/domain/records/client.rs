//! Clinic clients: the pet owners.

use serde::Serialize;

use super::validation::{Check, email_in_domain, person_name, required};
use super::{Record, RecordKind, messages};
use crate::domain::{FieldErrors, FormFields};

/// Every client phone number starts with the Argentine country code.
pub const PHONE_COUNTRY_PREFIX: &str = "54";
/// Clients must register with an address under the clinic's own domain.
pub const ORGANISATION_EMAIL_DOMAIN: &str = "vetsoft.com";

const NAME: &str = "name";
const PHONE: &str = "phone";
const EMAIL: &str = "email";
const ADDRESS: &str = "address";

/// A client of the clinic.
///
/// ## Invariants
/// - `name` holds only letters and spaces.
/// - `phone` holds only ASCII digits and starts with [`PHONE_COUNTRY_PREFIX`].
/// - `email` has a non-empty local part and the [`ORGANISATION_EMAIL_DOMAIN`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    pub(crate) name: String,
    pub(crate) phone: String,
    pub(crate) email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) address: Option<String>,
}

impl Client {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

fn phone(value: &str) -> Check<String> {
    let phone = required(value, messages::PHONE_REQUIRED)?;
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(messages::PHONE_NOT_NUMERIC);
    }
    if !phone.starts_with(PHONE_COUNTRY_PREFIX) {
        return Err(messages::PHONE_MISSING_PREFIX);
    }
    Ok(phone)
}

impl Record for Client {
    const KIND: RecordKind = RecordKind::Client;
    const FIELDS: &'static [&'static str] = &[NAME, PHONE, EMAIL, ADDRESS];

    fn from_form(form: &FormFields) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check(NAME, person_name(form.value(NAME)));
        let phone = errors.check(PHONE, phone(form.value(PHONE)));
        let email = errors.check(
            EMAIL,
            email_in_domain(form.value(EMAIL), ORGANISATION_EMAIL_DOMAIN),
        );
        let address = form.non_blank(ADDRESS).map(str::to_owned);

        match (name, phone, email) {
            (Some(name), Some(phone), Some(email)) => Ok(Self {
                name,
                phone,
                email,
                address,
            }),
            _ => Err(errors),
        }
    }

    fn to_form(&self) -> FormFields {
        let mut form = FormFields::from_iter([
            (NAME, self.name.as_str()),
            (PHONE, self.phone.as_str()),
            (EMAIL, self.email.as_str()),
        ]);
        if let Some(address) = &self.address {
            form.insert(ADDRESS, address.as_str());
        }
        form
    }
}

/// Validate a client submission.
///
/// # Examples
/// ```
/// use vetsoft::domain::{FormFields, validate_client};
///
/// let errors = validate_client(&FormFields::from_iter([
///     ("name", "Juan Sebastian Veron"),
///     ("phone", "54221555232"),
///     ("email", "brujita75@vetsoft.com"),
/// ]));
/// assert!(errors.is_empty());
/// ```
pub fn validate_client(form: &FormFields) -> FieldErrors {
    Client::validate(form)
}
