use std::{
    error::Error,
    fs::{self, File},
    io::BufReader,
    path::Path,
};

use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Roles the portal knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// Accepts both the Spanish and the English spelling, ignoring case and
    /// surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Role> {
        match normalize_role(raw).as_str() {
            "administrador" | "admin" => Some(Role::Admin),
            "maestro" | "teacher" => Some(Role::Teacher),
            "alumno" | "student" => Some(Role::Student),
            _ => None,
        }
    }
}

pub fn normalize_role(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn is_admin(raw: &str) -> bool {
    Role::parse(raw) == Some(Role::Admin)
}

pub fn is_teacher(raw: &str) -> bool {
    Role::parse(raw) == Some(Role::Teacher)
}

pub fn is_student(raw: &str) -> bool {
    Role::parse(raw) == Some(Role::Student)
}

/// Client-side session: the token attached to every authenticated request,
/// the user's role and their full name. Kept in a JSON file between runs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Session {
    pub token: String,
    pub role: String,
    pub name: String,
}

impl Session {
    pub fn new(token: &str, role: &str, name: &str) -> Self {
        Session {
            token: token.to_owned(),
            role: role.to_owned(),
            name: name.to_owned(),
        }
    }

    /// Reads the session file. No file means nobody is logged in.
    pub fn load(path: &Path) -> Result<Session, Box<dyn Error>> {
        info!(
            "Reading session from {}",
            std::path::absolute(path)?.display()
        );
        if !path.exists() {
            debug!("No session file, starting with an empty session");
            return Ok(Session::default());
        }
        let session_file = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(session_file)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        info!(
            "Writing session for role {:?} to {}",
            self.role,
            std::path::absolute(path)?.display()
        );
        let session_file = File::create(path)?;
        Ok(serde_json::to_writer_pretty(session_file, self)?)
    }

    /// Forgets the session locally.
    pub fn destroy(path: &Path) -> Result<(), Box<dyn Error>> {
        if path.exists() {
            fs::remove_file(path)?;
            info!("Removed session file {}", path.display());
        }
        Ok(())
    }

    /// The token, unless it is missing or empty.
    pub fn session_token(&self) -> Option<&str> {
        let token = self.token.trim();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }

    pub fn role(&self) -> Option<Role> {
        let role = Role::parse(&self.role);
        debug!(
            "Role {:?} (normalized {:?}) -> {:?}",
            self.role,
            normalize_role(&self.role),
            role
        );
        role
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_teacher(&self) -> bool {
        self.role() == Some(Role::Teacher)
    }

    pub fn is_student(&self) -> bool {
        self.role() == Some(Role::Student)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
