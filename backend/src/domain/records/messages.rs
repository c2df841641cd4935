//! User-facing validation messages.
//!
//! The clinic's interface is in Spanish; these strings are shown verbatim
//! next to the offending form field.

pub const NAME_REQUIRED: &str = "Por favor ingrese un nombre";
pub const NAME_LETTERS_ONLY: &str = "El nombre solo puede contener letras y espacios";

pub const PHONE_REQUIRED: &str = "Por favor ingrese un teléfono";
pub const PHONE_NOT_NUMERIC: &str = "El teléfono debe ser numérico";
pub const PHONE_MISSING_PREFIX: &str = "El teléfono debe comenzar con 54";

pub const EMAIL_REQUIRED: &str = "Por favor ingrese un email";
pub const EMAIL_INVALID: &str = "Por favor ingrese un email valido";
pub const EMAIL_WRONG_DOMAIN: &str = "Por favor ingrese un email terminado en @vetsoft.com";

pub const SPECIALTY_INVALID: &str = "Por favor seleccione una especialidad válida";

pub const DESCRIPTION_REQUIRED: &str = "Por favor ingrese una descripcion";

pub const DOSE_REQUIRED: &str = "Por favor ingrese una dosis";
pub const DOSE_NOT_NUMERIC: &str = "Por favor ingrese una dosis numérica válida";
pub const DOSE_OUT_OF_RANGE: &str = "Por favor ingrese una dosis entre 1 y 10";

pub const TYPE_REQUIRED: &str = "Por favor ingrese un tipo";

pub const PRICE_REQUIRED: &str = "Por favor ingrese un precio";
pub const PRICE_NOT_NUMERIC: &str = "Por favor ingrese un precio válido";
pub const PRICE_NOT_POSITIVE: &str = "Por favor ingrese un precio mayor a cero";

pub const ADDRESS_REQUIRED: &str = "Por favor ingrese una dirección";
