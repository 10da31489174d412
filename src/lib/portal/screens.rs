use std::{error::Error, fmt};

use log::debug;

use super::{
    notifier::Notifier, portal_api::ApiError, session::Session, validation::ValidationErrors,
};

pub mod admin_screens;
pub mod dashboard;
pub mod event_form;
pub mod event_list;
pub mod sidebar;
pub mod student_screens;

pub const MSG_FIX_FORM: &str = "Please correct the errors in the form.";

#[derive(Debug)]
pub enum ScreenError {
    /// No session; the user has to log in first.
    NotLoggedIn,
    /// The role may not open the screen or run the action.
    Forbidden,
    Invalid(ValidationErrors),
    /// The user declined a confirmation.
    Cancelled,
    Api(ApiError),
    Io(String),
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::NotLoggedIn => write!(f, "not logged in, run `portal session set` first"),
            ScreenError::Forbidden => write!(f, "your role is not allowed to do this"),
            ScreenError::Invalid(errors) => {
                write!(f, "the form has errors:")?;
                for (field, message) in errors {
                    write!(f, "\n  {}: {}", field, message)?;
                }
                Ok(())
            }
            ScreenError::Cancelled => write!(f, "cancelled"),
            ScreenError::Api(err) => write!(f, "{}", err),
            ScreenError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ScreenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScreenError::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ApiError> for ScreenError {
    fn from(err: ApiError) -> Self {
        ScreenError::Api(err)
    }
}

impl From<serde_json::Error> for ScreenError {
    fn from(err: serde_json::Error) -> Self {
        ScreenError::Io(err.to_string())
    }
}

pub fn require_login(session: &Session) -> Result<(), ScreenError> {
    match session.session_token() {
        Some(_) => Ok(()),
        None => Err(ScreenError::NotLoggedIn),
    }
}

/// Alerts and refuses when `allowed` is false.
pub fn require_permission<N: Notifier>(
    notifier: &N,
    allowed: bool,
    message: &str,
) -> Result<(), ScreenError> {
    if allowed {
        Ok(())
    } else {
        notifier.alert(message);
        Err(ScreenError::Forbidden)
    }
}

pub fn reject_invalid<N: Notifier>(notifier: &N, errors: ValidationErrors) -> Result<(), ScreenError> {
    if errors.is_empty() {
        return Ok(());
    }
    debug!("Validation errors: {:?}", errors);
    notifier.alert(MSG_FIX_FORM);
    Err(ScreenError::Invalid(errors))
}

#[cfg(test)]
#[path = "tests/screens_tests.rs"]
mod tests;
