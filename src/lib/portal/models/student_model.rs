//! Module with student models compatible with the portal REST API
use serde::{Deserialize, Serialize};

use super::{lenient_string, Account};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StudentForm {
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "matricula", deserialize_with = "lenient_string")]
    pub enrollment_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(rename = "confirmar_password", skip_serializing_if = "String::is_empty")]
    pub confirm_password: String,
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: String,
    pub curp: String,
    pub rfc: String,
    #[serde(rename = "edad", deserialize_with = "lenient_string")]
    pub age: String,
    #[serde(rename = "telefono", deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(rename = "ocupacion")]
    pub occupation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StudentRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub user: Account,
    #[serde(default, rename = "rol", deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(default, rename = "matricula", deserialize_with = "lenient_string")]
    pub enrollment_id: String,
    #[serde(default, rename = "fecha_nacimiento", deserialize_with = "lenient_string")]
    pub birth_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub curp: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rfc: String,
    #[serde(default, rename = "edad", deserialize_with = "lenient_string")]
    pub age: String,
    #[serde(default, rename = "telefono", deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, rename = "ocupacion", deserialize_with = "lenient_string")]
    pub occupation: String,
}

impl StudentRecord {
    pub fn to_form(&self) -> StudentForm {
        StudentForm {
            role: self.role.clone(),
            enrollment_id: self.enrollment_id.clone(),
            first_name: self.user.first_name.clone(),
            last_name: self.user.last_name.clone(),
            email: self.user.email.clone(),
            password: String::new(),
            confirm_password: String::new(),
            birth_date: self.birth_date.clone(),
            curp: self.curp.clone(),
            rfc: self.rfc.clone(),
            age: self.age.clone(),
            phone: self.phone.clone(),
            occupation: self.occupation.clone(),
        }
    }
}
