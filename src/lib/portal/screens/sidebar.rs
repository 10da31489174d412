use log::{debug, warn};

use super::ScreenError;
use crate::portal::session::{Role, Session};

/// Which navigation groups the current role gets to see.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuVisibility {
    pub admin_items: bool,
    pub teacher_items: bool,
    pub student_items: bool,
    pub home_item: bool,
    pub register_item: bool,
}

impl MenuVisibility {
    pub fn for_role(role: Option<Role>) -> Self {
        let admin = role == Some(Role::Admin);
        let teacher = role == Some(Role::Teacher);
        let student = role == Some(Role::Student);
        MenuVisibility {
            admin_items: admin,
            teacher_items: admin || teacher,
            student_items: admin || teacher || student,
            home_item: admin || teacher,
            register_item: admin || teacher,
        }
    }

    /// A session without role still gets an (empty) menu when it has a token;
    /// without either the user is sent back to log in.
    pub fn load(session: &Session) -> Result<Self, ScreenError> {
        if session.role.trim().is_empty() {
            if session.session_token().is_none() {
                return Err(ScreenError::NotLoggedIn);
            }
            warn!("Session has a token but no role; check the login response");
        }
        let visibility = MenuVisibility::for_role(session.role());
        debug!("Menu for {:?}: {:?}", session.role, visibility);
        Ok(visibility)
    }

    pub fn entries(&self) -> Vec<&'static str> {
        let mut entries = Vec::new();
        if self.home_item {
            entries.push("Home");
        }
        if self.register_item {
            entries.push("Register users");
        }
        if self.admin_items {
            entries.push("Administrators");
        }
        if self.teacher_items {
            entries.push("Teachers");
            entries.push("Students");
        }
        if self.student_items {
            entries.push("Academic events");
        }
        if self.admin_items {
            entries.push("Register event");
            entries.push("Charts");
        }
        entries
    }
}
