//! Submitted form values and the field-keyed errors produced by validators.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// String values submitted for a record, keyed by field name.
///
/// Values are stored as received; readers see them trimmed.
///
/// # Examples
/// ```
/// use vetsoft::domain::FormFields;
///
/// let form = FormFields::from_iter([("name", "  Paracetamol ")]);
/// assert_eq!(form.value("name"), "Paracetamol");
/// assert_eq!(form.value("dose"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed value for `field`, or the empty string when absent.
    pub fn value(&self, field: &str) -> &str {
        self.0.get(field).map_or("", |value| value.trim())
    }

    /// Trimmed value for `field`, or `None` when absent or blank.
    pub fn non_blank(&self, field: &str) -> Option<&str> {
        Some(self.value(field)).filter(|value| !value.is_empty())
    }

    /// Set `field` to `value`, replacing any earlier submission.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Overlay the non-blank values of `partial` onto `self`.
    ///
    /// Blank or absent values in `partial` keep the current value. Only
    /// fields listed in `fields` are considered.
    #[must_use]
    pub fn merged_with(mut self, partial: &Self, fields: &[&str]) -> Self {
        for field in fields {
            if let Some(value) = partial.non_blank(field) {
                self.insert(*field, value);
            }
        }
        self
    }

    /// Iterate over the raw submitted pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// User-facing validation messages keyed by field name.
///
/// An absent key means the field is valid; an empty mapping means the whole
/// submission is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// `true` when `field` failed validation.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Record a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Record the outcome of a single field check.
    ///
    /// Returns the checked value on success so callers can assemble the
    /// record once every field has been visited.
    pub fn check<T>(&mut self, field: &str, outcome: Result<T, &'static str>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.insert(field, message);
                None
            }
        }
    }

    /// Names of the failing fields in ascending order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for FieldErrors
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
