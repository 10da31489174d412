//! Module with administrator models compatible with the portal REST API
use serde::{Deserialize, Serialize};

use super::{lenient_string, Account};

/// Registration/edit form of an administrator. `AdminForm::default()` is the
/// empty record the register screen starts from.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminForm {
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "clave_admin", deserialize_with = "lenient_string")]
    pub admin_key: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(rename = "confirmar_password", skip_serializing_if = "String::is_empty")]
    pub confirm_password: String,
    #[serde(rename = "telefono", deserialize_with = "lenient_string")]
    pub phone: String,
    pub rfc: String,
    #[serde(rename = "edad", deserialize_with = "lenient_string")]
    pub age: String,
    #[serde(rename = "ocupacion")]
    pub occupation: String,
}

/// Administrator as returned by `/lista-admins/` and `/admin/?id=`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AdminRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub user: Account,
    #[serde(default, rename = "rol", deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(default, rename = "clave_admin", deserialize_with = "lenient_string")]
    pub admin_key: String,
    #[serde(default, rename = "telefono", deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rfc: String,
    #[serde(default, rename = "edad", deserialize_with = "lenient_string")]
    pub age: String,
    #[serde(default, rename = "ocupacion", deserialize_with = "lenient_string")]
    pub occupation: String,
}

impl AdminRecord {
    /// Fills the edit form with the stored values. Passwords are never sent
    /// back by the API, so they stay empty.
    pub fn to_form(&self) -> AdminForm {
        AdminForm {
            role: self.role.clone(),
            admin_key: self.admin_key.clone(),
            first_name: self.user.first_name.clone(),
            last_name: self.user.last_name.clone(),
            email: self.user.email.clone(),
            password: String::new(),
            confirm_password: String::new(),
            phone: self.phone.clone(),
            rfc: self.rfc.clone(),
            age: self.age.clone(),
            occupation: self.occupation.clone(),
        }
    }
}
