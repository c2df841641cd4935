//! Field checks shared by the record validators.
//!
//! Each check takes a trimmed value and returns either the accepted value or
//! the user-facing message for the field.

use std::sync::OnceLock;

use regex::Regex;

use super::messages;

pub(super) type Check<T> = Result<T, &'static str>;

static PERSON_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn person_name_regex() -> &'static Regex {
    PERSON_NAME_RE.get_or_init(|| {
        // Unicode letters so accented names pass; digits and symbols do not.
        let pattern = r"^[\p{L} ]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("person name regex failed to compile: {error}"))
    })
}

pub(super) fn required(value: &str, message: &'static str) -> Check<String> {
    if value.is_empty() {
        return Err(message);
    }
    Ok(value.to_owned())
}

pub(super) fn person_name(value: &str) -> Check<String> {
    let name = required(value, messages::NAME_REQUIRED)?;
    if !person_name_regex().is_match(&name) {
        return Err(messages::NAME_LETTERS_ONLY);
    }
    Ok(name)
}

/// Split at the first `@`, requiring a non-empty local part.
fn email_parts(email: &str) -> Check<(&str, &str)> {
    match email.split_once('@') {
        Some((local, host)) if !local.is_empty() => Ok((local, host)),
        _ => Err(messages::EMAIL_INVALID),
    }
}

/// Loose email check: present, with `@` and a non-empty local part.
pub(super) fn email(value: &str) -> Check<String> {
    let email = required(value, messages::EMAIL_REQUIRED)?;
    email_parts(&email)?;
    Ok(email)
}

/// Strict email check: a loose email whose domain matches exactly.
pub(super) fn email_in_domain(value: &str, domain: &str) -> Check<String> {
    let email = email(value)?;
    let (_, host) = email_parts(&email)?;
    if !host.eq_ignore_ascii_case(domain) {
        return Err(messages::EMAIL_WRONG_DOMAIN);
    }
    Ok(email)
}
