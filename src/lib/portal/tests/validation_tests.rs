use chrono::NaiveDate;

use super::*;
use crate::portal::models::event_model::Audience;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

fn valid_admin() -> AdminForm {
    AdminForm {
        role: "administrador".to_owned(),
        admin_key: "ADM-01".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@uni.mx".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
        phone: "2221234567".to_owned(),
        rfc: "LOAA800101AB1".to_owned(),
        age: "36".to_owned(),
        occupation: "Coordinator".to_owned(),
    }
}

fn valid_student() -> StudentForm {
    StudentForm {
        role: "alumno".to_owned(),
        enrollment_id: "201912345".to_owned(),
        first_name: "Alan".to_owned(),
        last_name: "Turing".to_owned(),
        email: "alan@uni.mx".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
        birth_date: "2001-06-23".to_owned(),
        curp: "TUAA010623HPLRNL09".to_owned(),
        rfc: "TUAA010623AB".to_owned(),
        age: "24".to_owned(),
        phone: "2227654321".to_owned(),
        occupation: "Student".to_owned(),
    }
}

fn valid_event() -> EventForm {
    EventForm {
        name: "Data Science Week".to_owned(),
        kind: "Conferencia".to_owned(),
        date: "2026-03-10".to_owned(),
        start_time: "09:00".to_owned(),
        end_time: "11:30".to_owned(),
        location: "Auditorium 2".to_owned(),
        audience: Audience::from_labels(&[AudienceLabel::Professors]),
        education_program: String::new(),
        responsible_id: "7".to_owned(),
        description: "Talks about data, ML and more!".to_owned(),
        capacity: "120".to_owned(),
    }
}

#[test]
fn valid_forms_have_no_errors() {
    assert!(validate_admin(&valid_admin(), false).is_empty());
    assert!(validate_student(&valid_student(), false).is_empty());
    assert!(validate_event(&valid_event(), today()).is_empty());
}

#[test]
fn empty_admin_form_reports_every_required_field() {
    let errors = validate_admin(&AdminForm::default(), false);
    for field in [
        "clave_admin",
        "first_name",
        "last_name",
        "email",
        "password",
        "confirmar_password",
        "rfc",
        "edad",
        "telefono",
        "ocupacion",
    ] {
        assert_eq!(errors.get(field).map(String::as_str), Some(MSG_REQUIRED), "{field}");
    }
}

#[test]
fn editing_skips_password_checks() {
    let mut admin = valid_admin();
    admin.password.clear();
    admin.confirm_password.clear();
    assert!(validate_admin(&admin, true).is_empty());
    assert!(validate_admin(&admin, false).contains_key("password"));

    let mut student = valid_student();
    student.password.clear();
    student.confirm_password.clear();
    assert!(validate_student(&student, true).is_empty());
}

#[test]
fn mismatching_passwords_are_reported() {
    let mut admin = valid_admin();
    admin.confirm_password = "other".to_owned();
    let errors = validate_admin(&admin, false);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["confirmar_password"], MSG_PASSWORD_MISMATCH);
}

#[test]
fn admin_field_bounds() {
    let mut admin = valid_admin();
    admin.email = format!("{}@uni.mx", "a".repeat(40));
    admin.rfc = "SHORT".to_owned();
    admin.age = "17".to_owned();
    let errors = validate_admin(&admin, false);
    assert_eq!(errors["email"], msg_max(40));
    assert_eq!(errors["rfc"], msg_min(12));
    assert_eq!(errors["edad"], MSG_ADULT);

    admin.email = "not-an-email".to_owned();
    admin.rfc = "ABCDEFGHIJKLMN".to_owned();
    admin.age = "eighteen".to_owned();
    let errors = validate_admin(&admin, false);
    assert_eq!(errors["email"], MSG_EMAIL);
    assert_eq!(errors["rfc"], msg_max(13));
    assert_eq!(errors["edad"], MSG_NUMERIC);
}

#[test]
fn non_finite_ages_are_not_numbers() {
    for age in ["NaN", "inf", "infinity", "-inf", " Infinity "] {
        assert!(!numeric(age), "{age}");

        let admin = AdminForm {
            age: age.to_owned(),
            ..valid_admin()
        };
        assert_eq!(validate_admin(&admin, false)["edad"], MSG_NUMERIC, "{age}");

        let student = StudentForm {
            age: age.to_owned(),
            ..valid_student()
        };
        assert_eq!(validate_student(&student, false)["edad"], MSG_NUMERIC, "{age}");
    }
    assert!(numeric(" 18.5 "));
}

#[test]
fn student_curp_must_be_exactly_18() {
    let mut student = valid_student();
    student.curp = "TUAA010623".to_owned();
    assert_eq!(validate_student(&student, false)["curp"], msg_min(18));
    student.curp = "TUAA010623HPLRNL09X".to_owned();
    assert_eq!(validate_student(&student, false)["curp"], msg_max(18));
}

#[test]
fn empty_student_form_reports_birth_date() {
    let errors = validate_student(&StudentForm::default(), true);
    assert!(errors.contains_key("fecha_nacimiento"));
    assert!(errors.contains_key("matricula"));
    assert!(!errors.contains_key("password"));
}

#[test]
fn event_end_time_must_follow_start_time() {
    let mut event = valid_event();
    event.end_time = "09:00".to_owned();
    assert!(validate_event(&event, today()).contains_key("hora_fin"));
    event.end_time = "08:59".to_owned();
    assert!(validate_event(&event, today()).contains_key("hora_fin"));
    event.end_time = "09:01".to_owned();
    assert!(validate_event(&event, today()).is_empty());
}

#[test]
fn students_audience_requires_education_program() {
    let mut event = valid_event();
    event.audience = Audience::from_labels(&[AudienceLabel::Students, AudienceLabel::Professors]);
    let errors = validate_event(&event, today());
    assert!(errors.contains_key("programa_educativo"));

    event.education_program = "Computer Engineering".to_owned();
    assert!(validate_event(&event, today()).is_empty());
}

#[test]
fn event_audience_must_not_be_empty() {
    let mut event = valid_event();
    event.audience = Audience::default();
    assert!(validate_event(&event, today()).contains_key("publico_objetivo"));
}

#[test]
fn event_date_rules() {
    let mut event = valid_event();
    event.date = "2026-03-09".to_owned();
    assert!(validate_event(&event, today()).contains_key("fecha_realizacion"));
    event.date = "10/03/2026".to_owned();
    assert!(validate_event(&event, today()).contains_key("fecha_realizacion"));
    event.date = "2027-01-01".to_owned();
    assert!(validate_event(&event, today()).is_empty());
}

#[test]
fn event_charsets_and_capacity() {
    let mut event = valid_event();
    event.name = "Week #1".to_owned();
    event.location = "Room-4".to_owned();
    event.description = "Bring <b>snacks</b>".to_owned();
    event.capacity = "1000".to_owned();
    let errors = validate_event(&event, today());
    assert!(errors.contains_key("nombre_evento"));
    assert!(errors.contains_key("lugar"));
    assert!(errors.contains_key("descripcion_breve"));
    assert!(errors.contains_key("cupo_maximo"));

    event = valid_event();
    event.capacity = "0".to_owned();
    assert!(validate_event(&event, today()).contains_key("cupo_maximo"));
    event.capacity = "-5".to_owned();
    assert!(validate_event(&event, today()).contains_key("cupo_maximo"));
    event.description = "x".repeat(301);
    assert_eq!(validate_event(&event, today())["descripcion_breve"], msg_max(300));
}

#[test]
fn empty_event_reports_required_fields() {
    let errors = validate_event(&EventForm::default(), today());
    for field in [
        "nombre_evento",
        "tipo_evento",
        "fecha_realizacion",
        "hora_inicio",
        "hora_fin",
        "lugar",
        "publico_objetivo",
        "responsable_evento_id",
        "descripcion_breve",
        "cupo_maximo",
    ] {
        assert!(errors.contains_key(field), "{field}");
    }
    assert!(!errors.contains_key("programa_educativo"));
}
