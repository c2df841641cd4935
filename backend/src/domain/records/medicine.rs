//! Medicines dispensed by the clinic.

use std::fmt;
use std::num::IntErrorKind;

use serde::Serialize;

use super::validation::{Check, required};
use super::{Record, RecordKind, messages};
use crate::domain::{FieldErrors, FormFields};

const NAME: &str = "name";
const DESCRIPTION: &str = "description";
const DOSE: &str = "dose";

/// Smallest accepted dose.
pub const DOSE_MIN: u8 = 1;
/// Largest accepted dose.
pub const DOSE_MAX: u8 = 10;

/// Whole-unit dose within `DOSE_MIN..=DOSE_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Dose(u8);

impl Dose {
    /// Wrap `value` if it lies within the accepted range.
    #[must_use]
    pub fn new(value: i64) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|dose| (DOSE_MIN..=DOSE_MAX).contains(dose))
            .map(Self)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Dose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A medicine with its recommended dose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Medicine {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) dose: Dose,
}

impl Medicine {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn dose(&self) -> Dose {
        self.dose
    }
}

fn dose(value: &str) -> Check<Dose> {
    let raw = required(value, messages::DOSE_REQUIRED)?;
    let parsed = raw.parse::<i64>().map_err(|err| match err.kind() {
        // Well-formed integers too large for i64 are still out of range.
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => messages::DOSE_OUT_OF_RANGE,
        _ => messages::DOSE_NOT_NUMERIC,
    })?;
    Dose::new(parsed).ok_or(messages::DOSE_OUT_OF_RANGE)
}

impl Record for Medicine {
    const KIND: RecordKind = RecordKind::Medicine;
    const FIELDS: &'static [&'static str] = &[NAME, DESCRIPTION, DOSE];

    fn from_form(form: &FormFields) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check(NAME, required(form.value(NAME), messages::NAME_REQUIRED));
        let description = errors.check(
            DESCRIPTION,
            required(form.value(DESCRIPTION), messages::DESCRIPTION_REQUIRED),
        );
        let dose = errors.check(DOSE, dose(form.value(DOSE)));

        match (name, description, dose) {
            (Some(name), Some(description), Some(dose)) => Ok(Self {
                name,
                description,
                dose,
            }),
            _ => Err(errors),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::from_iter([
            (NAME, self.name.clone()),
            (DESCRIPTION, self.description.clone()),
            (DOSE, self.dose.to_string()),
        ])
    }
}

/// Validate a medicine submission.
pub fn validate_medicine(form: &FormFields) -> FieldErrors {
    Medicine::validate(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn form(dose: &str) -> FormFields {
        FormFields::from_iter([
            ("name", "Paracetamol"),
            ("description", "Analgesico"),
            ("dose", dose),
        ])
    }

    #[rstest]
    #[case("1", 1)]
    #[case("5", 5)]
    #[case(" 10 ", 10)]
    fn accepts_doses_in_range(#[case] raw: &str, #[case] expected: u8) {
        let medicine = Medicine::from_form(&form(raw)).expect("valid medicine");
        assert_eq!(medicine.dose().get(), expected);
    }

    #[rstest]
    #[case("", messages::DOSE_REQUIRED)]
    #[case("0", messages::DOSE_OUT_OF_RANGE)]
    #[case("-4", messages::DOSE_OUT_OF_RANGE)]
    #[case("11", messages::DOSE_OUT_OF_RANGE)]
    #[case("15", messages::DOSE_OUT_OF_RANGE)]
    #[case("99999999999999999999", messages::DOSE_OUT_OF_RANGE)]
    #[case("-99999999999999999999", messages::DOSE_OUT_OF_RANGE)]
    #[case("cinco", messages::DOSE_NOT_NUMERIC)]
    #[case("2.5", messages::DOSE_NOT_NUMERIC)]
    fn rejects_bad_doses(#[case] raw: &str, #[case] message: &str) {
        assert_eq!(
            validate_medicine(&form(raw)),
            FieldErrors::from_iter([("dose", message)])
        );
    }

    #[rstest]
    fn empty_submission_reports_every_field() {
        let errors = validate_medicine(&FormFields::new());

        assert_eq!(errors.get("name"), Some(messages::NAME_REQUIRED));
        assert_eq!(errors.get("description"), Some(messages::DESCRIPTION_REQUIRED));
        assert_eq!(errors.get("dose"), Some(messages::DOSE_REQUIRED));
    }

    #[rstest]
    fn blank_dose_update_keeps_current_dose() {
        let medicine = Medicine::from_form(&form("5")).expect("valid medicine");

        let merged = medicine
            .merge(&FormFields::from_iter([("dose", "")]))
            .expect("merged medicine");

        assert_eq!(merged, medicine);
    }
}
