//! Submission-time checks for the three forms. Each `validate_*` returns a map
//! from the wire field name to a user-facing message; an empty map means the
//! form can be sent.
use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::models::{
    admin_model::AdminForm,
    event_model::{AudienceLabel, EventForm},
    student_model::StudentForm,
};

pub type ValidationErrors = BTreeMap<&'static str, String>;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static ALNUM_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\s]+$").unwrap());
static DESCRIPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\s.,;:()!?¿¡\-]+$").unwrap());

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_EMAIL: &str = "The email address is not valid";
pub const MSG_NUMERIC: &str = "Only numbers are allowed";
pub const MSG_ADULT: &str = "Age must be 18 or older";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";

pub fn msg_min(n: usize) -> String {
    format!("Must have at least {} characters", n)
}

pub fn msg_max(n: usize) -> String {
    format!("Must have at most {} characters", n)
}

pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn min_len(value: &str, n: usize) -> bool {
    value.chars().count() >= n
}

pub fn max_len(value: &str, n: usize) -> bool {
    value.chars().count() <= n
}

/// Finite decimal numbers only; `NaN` and `inf` do not count.
pub fn numeric(value: &str) -> bool {
    parse_number(value).is_some()
}

fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

pub fn email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Accepts `HH:MM` and `HH:MM:SS`.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn check_required(errors: &mut ValidationErrors, field: &'static str, value: &str) -> bool {
    if required(value) {
        true
    } else {
        errors.insert(field, MSG_REQUIRED.to_owned());
        false
    }
}

fn check_email(errors: &mut ValidationErrors, value: &str) {
    if !check_required(errors, "email", value) {
        return;
    }
    if !max_len(value, 40) {
        errors.insert("email", msg_max(40));
    } else if !email(value) {
        errors.insert("email", MSG_EMAIL.to_owned());
    }
}

fn check_passwords(errors: &mut ValidationErrors, password: &str, confirm: &str) {
    let has_password = check_required(errors, "password", password);
    let has_confirm = check_required(errors, "confirmar_password", confirm);
    if has_password && has_confirm && password != confirm {
        errors.insert("confirmar_password", MSG_PASSWORD_MISMATCH.to_owned());
    }
}

fn check_length_range(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) {
    if !check_required(errors, field, value) {
        return;
    }
    if !min_len(value, min) {
        errors.insert(field, msg_min(min));
    } else if !max_len(value, max) {
        errors.insert(field, msg_max(max));
    }
}

fn check_adult_age(errors: &mut ValidationErrors, value: &str) {
    if !check_required(errors, "edad", value) {
        return;
    }
    match parse_number(value) {
        None => {
            errors.insert("edad", MSG_NUMERIC.to_owned());
        }
        Some(age) if age < 18.0 => {
            errors.insert("edad", MSG_ADULT.to_owned());
        }
        Some(_) => {}
    }
}

pub fn validate_admin(form: &AdminForm, editing: bool) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    check_required(&mut errors, "clave_admin", &form.admin_key);
    check_required(&mut errors, "first_name", &form.first_name);
    check_required(&mut errors, "last_name", &form.last_name);
    check_email(&mut errors, &form.email);
    if !editing {
        check_passwords(&mut errors, &form.password, &form.confirm_password);
    }
    check_length_range(&mut errors, "rfc", &form.rfc, 12, 13);
    check_adult_age(&mut errors, &form.age);
    check_required(&mut errors, "telefono", &form.phone);
    check_required(&mut errors, "ocupacion", &form.occupation);

    errors
}

pub fn validate_student(form: &StudentForm, editing: bool) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    check_required(&mut errors, "matricula", &form.enrollment_id);
    check_required(&mut errors, "first_name", &form.first_name);
    check_required(&mut errors, "last_name", &form.last_name);
    check_email(&mut errors, &form.email);
    if !editing {
        check_passwords(&mut errors, &form.password, &form.confirm_password);
    }
    check_length_range(&mut errors, "curp", &form.curp, 18, 18);
    check_length_range(&mut errors, "rfc", &form.rfc, 12, 13);
    check_adult_age(&mut errors, &form.age);
    check_required(&mut errors, "telefono", &form.phone);
    check_required(&mut errors, "fecha_nacimiento", &form.birth_date);
    check_required(&mut errors, "ocupacion", &form.occupation);

    errors
}

/// `today` is the first acceptable event date.
pub fn validate_event(form: &EventForm, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if check_required(&mut errors, "nombre_evento", &form.name)
        && !ALNUM_SPACE_RE.is_match(&form.name)
    {
        errors.insert(
            "nombre_evento",
            "Only letters, numbers and spaces are allowed".to_owned(),
        );
    }

    check_required(&mut errors, "tipo_evento", &form.kind);

    if check_required(&mut errors, "fecha_realizacion", &form.date) {
        match parse_date(&form.date) {
            None => {
                errors.insert(
                    "fecha_realizacion",
                    "The date must have the YYYY-MM-DD format".to_owned(),
                );
            }
            Some(date) if date < today => {
                errors.insert(
                    "fecha_realizacion",
                    "Dates before today cannot be selected".to_owned(),
                );
            }
            Some(_) => {}
        }
    }

    let has_start = check_required(&mut errors, "hora_inicio", &form.start_time);
    let has_end = check_required(&mut errors, "hora_fin", &form.end_time);
    if has_start && has_end {
        let ends_first = match (parse_time(&form.start_time), parse_time(&form.end_time)) {
            (Some(start), Some(end)) => start >= end,
            _ => form.start_time.trim() >= form.end_time.trim(),
        };
        if ends_first {
            errors.insert(
                "hora_fin",
                "The end time must be later than the start time".to_owned(),
            );
        }
    }

    if check_required(&mut errors, "lugar", &form.location)
        && !ALNUM_SPACE_RE.is_match(&form.location)
    {
        errors.insert(
            "lugar",
            "Only alphanumeric characters and spaces are allowed".to_owned(),
        );
    }

    if form.audience.is_empty() {
        errors.insert(
            "publico_objetivo",
            "Select at least one target audience".to_owned(),
        );
    }

    if form.audience.contains(AudienceLabel::Students) && !required(&form.education_program) {
        errors.insert(
            "programa_educativo",
            "Select an education program when the audience includes students".to_owned(),
        );
    }

    check_required(&mut errors, "responsable_evento_id", &form.responsible_id);

    if check_required(&mut errors, "descripcion_breve", &form.description) {
        if !max_len(&form.description, 300) {
            errors.insert("descripcion_breve", msg_max(300));
        } else if !DESCRIPTION_RE.is_match(&form.description) {
            errors.insert(
                "descripcion_breve",
                "Only letters, numbers and basic punctuation are allowed".to_owned(),
            );
        }
    }

    if check_required(&mut errors, "cupo_maximo", &form.capacity) {
        let capacity = form.capacity.trim();
        if !capacity.chars().all(|c| c.is_ascii_digit()) {
            errors.insert(
                "cupo_maximo",
                "Only positive whole numbers are allowed".to_owned(),
            );
        } else if capacity.len() > 3 || capacity.parse::<u32>().map_or(true, |n| n == 0) {
            errors.insert(
                "cupo_maximo",
                "The capacity must be a positive number of at most 3 digits".to_owned(),
            );
        }
    }

    errors
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
