//! Veterinarians and their specialties.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{Check, email, required};
use super::{Record, RecordKind, messages};
use crate::domain::{FieldErrors, FormFields};

const NAME: &str = "name";
const PHONE: &str = "phone";
const EMAIL: &str = "email";
const SPECIALTY: &str = "specialty";

/// Returned when a specialty label is not one of [`Specialty::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown specialty: {0}")]
pub struct UnknownSpecialty(pub String);

/// Fixed set of veterinary specialties.
///
/// The stored and displayed value is the Spanish label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Specialty {
    #[default]
    None,
    Cardiology,
    SmallAnimalInternalMedicine,
    LargeAnimalInternalMedicine,
    Neurology,
    Oncology,
    Nutrition,
}

impl Specialty {
    /// Every specialty in the order offered to users.
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::Cardiology,
        Self::SmallAnimalInternalMedicine,
        Self::LargeAnimalInternalMedicine,
        Self::Neurology,
        Self::Oncology,
        Self::Nutrition,
    ];

    /// Label stored and shown for this specialty.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "Sin especialidad",
            Self::Cardiology => "Cardiología",
            Self::SmallAnimalInternalMedicine => "Medicina interna de pequeños animales",
            Self::LargeAnimalInternalMedicine => "Medicina interna de grandes animales",
            Self::Neurology => "Neurología",
            Self::Oncology => "Oncología",
            Self::Nutrition => "Nutrición",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = UnknownSpecialty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|specialty| specialty.as_str() == s)
            .ok_or_else(|| UnknownSpecialty(s.to_owned()))
    }
}

impl TryFrom<String> for Specialty {
    type Error = UnknownSpecialty;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Specialty> for String {
    fn from(value: Specialty) -> Self {
        value.as_str().to_owned()
    }
}

/// A veterinarian working at the clinic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vet {
    pub(crate) name: String,
    pub(crate) phone: String,
    pub(crate) email: String,
    pub(crate) specialty: Specialty,
}

impl Vet {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn specialty(&self) -> Specialty {
        self.specialty
    }
}

fn specialty(value: &str) -> Check<Specialty> {
    if value.is_empty() {
        return Ok(Specialty::default());
    }
    value.parse().map_err(|_| messages::SPECIALTY_INVALID)
}

impl Record for Vet {
    const KIND: RecordKind = RecordKind::Vet;
    const FIELDS: &'static [&'static str] = &[NAME, PHONE, EMAIL, SPECIALTY];

    fn from_form(form: &FormFields) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check(NAME, required(form.value(NAME), messages::NAME_REQUIRED));
        let phone = errors.check(PHONE, required(form.value(PHONE), messages::PHONE_REQUIRED));
        let email = errors.check(EMAIL, email(form.value(EMAIL)));
        let specialty = errors.check(SPECIALTY, specialty(form.value(SPECIALTY)));

        match (name, phone, email, specialty) {
            (Some(name), Some(phone), Some(email), Some(specialty)) => Ok(Self {
                name,
                phone,
                email,
                specialty,
            }),
            _ => Err(errors),
        }
    }

    fn to_form(&self) -> FormFields {
        FormFields::from_iter([
            (NAME, self.name.as_str()),
            (PHONE, self.phone.as_str()),
            (EMAIL, self.email.as_str()),
            (SPECIALTY, self.specialty.as_str()),
        ])
    }
}

/// Validate a veterinarian submission.
pub fn validate_vet(form: &FormFields) -> FieldErrors {
    Vet::validate(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn valid_form() -> FormFields {
        FormFields::from_iter([
            ("name", "Mariano Navone"),
            ("phone", "2219870789"),
            ("email", "lanavoneta@gmail.com"),
            ("specialty", "Oncología"),
        ])
    }

    #[rstest]
    fn accepts_valid_submission(valid_form: FormFields) {
        let vet = Vet::from_form(&valid_form).expect("valid vet");
        assert_eq!(vet.specialty(), Specialty::Oncology);
        assert_eq!(vet.email(), "lanavoneta@gmail.com");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn specialty_defaults_when_missing(mut valid_form: FormFields, #[case] raw: Option<&str>) {
        valid_form = valid_form
            .iter()
            .filter(|(field, _)| *field != "specialty")
            .collect();
        if let Some(raw) = raw {
            valid_form.insert("specialty", raw);
        }

        let vet = Vet::from_form(&valid_form).expect("valid vet");

        assert_eq!(vet.specialty(), Specialty::None);
        assert_eq!(vet.specialty().as_str(), "Sin especialidad");
    }

    #[rstest]
    fn rejects_unknown_specialty(mut valid_form: FormFields) {
        valid_form.insert("specialty", "Odontología");
        assert_eq!(
            validate_vet(&valid_form),
            FieldErrors::from_iter([("specialty", messages::SPECIALTY_INVALID)])
        );
    }

    #[rstest]
    fn empty_submission_reports_required_fields() {
        let errors = validate_vet(&FormFields::new());

        assert_eq!(errors.get("name"), Some(messages::NAME_REQUIRED));
        assert_eq!(errors.get("phone"), Some(messages::PHONE_REQUIRED));
        assert_eq!(errors.get("email"), Some(messages::EMAIL_REQUIRED));
        assert!(!errors.contains("specialty"));
    }

    #[rstest]
    #[case("lanavoneta")]
    #[case("@gmail.com")]
    fn rejects_malformed_email(mut valid_form: FormFields, #[case] email: &str) {
        valid_form.insert("email", email);
        assert_eq!(validate_vet(&valid_form).get("email"), Some(messages::EMAIL_INVALID));
    }

    #[rstest]
    fn specialty_labels_round_trip() {
        for specialty in Specialty::ALL {
            assert_eq!(specialty.as_str().parse::<Specialty>(), Ok(specialty));
        }
    }

    #[rstest]
    fn merge_updates_specialty_only(valid_form: FormFields) {
        let vet = Vet::from_form(&valid_form).expect("valid vet");

        let merged = vet
            .merge(&FormFields::from_iter([("specialty", "Cardiología")]))
            .expect("merged vet");

        assert_eq!(merged.specialty(), Specialty::Cardiology);
        assert_eq!(merged.name(), vet.name());
    }
}
