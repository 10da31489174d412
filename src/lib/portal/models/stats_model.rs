use serde::{Deserialize, Serialize};

use super::Account;

/// Registered users per role, as returned by `/total-usuarios/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserTotals {
    pub admins: u64,
    #[serde(rename = "maestros")]
    pub teachers: u64,
    #[serde(rename = "alumnos")]
    pub students: u64,
}

/// Teacher entry of `/lista-maestros/`, only used to pick event responsibles.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TeacherRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub user: Account,
}

/// Somebody who can be put in charge of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Responsible {
    pub id: u64,
    pub full_name: String,
    pub kind: &'static str,
}
