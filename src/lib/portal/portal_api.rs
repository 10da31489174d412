use std::{error::Error, fmt};

use log::{error, info};
use reqwest::{header::CONTENT_TYPE, Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    models::{
        admin_model::{AdminForm, AdminRecord},
        event_model::{AcademicEvent, EventForm},
        stats_model::{TeacherRecord, UserTotals},
        student_model::{StudentForm, StudentRecord},
        Identified,
    },
    notifier::Notifier,
    session::Session,
};

pub const MSG_MISSING_TOKEN: &str = "No authentication token. Please log in again.";
pub const MSG_UNAUTHORIZED: &str = "ERROR 401: your session expired. Please log in again.";
pub const MSG_FORBIDDEN: &str = "ERROR 403: you do not have permission. Check your session.";

#[derive(Debug)]
pub enum ApiError {
    /// No session token; the request was never sent.
    MissingToken,
    Status(StatusCode),
    Transport(reqwest::Error),
    Decode(serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status(status) => Some(*status),
            ApiError::Transport(err) => err.status(),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingToken => write!(f, "authentication is required for this operation"),
            ApiError::Status(status) => write!(f, "the API answered {}", status),
            ApiError::Transport(err) => write!(f, "could not reach the API: {}", err),
            ApiError::Decode(err) => write!(f, "unexpected API response: {}", err),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Transport(err) => Some(err),
            ApiError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err)
    }
}

/// Alert text for statuses that mean the session is no good.
pub fn status_alert(status: StatusCode) -> Option<&'static str> {
    match status {
        StatusCode::UNAUTHORIZED => Some(MSG_UNAUTHORIZED),
        StatusCode::FORBIDDEN => Some(MSG_FORBIDDEN),
        _ => None,
    }
}

/// A trait, necessary for every entity that talks to the portal API.
/// Registration of administrators and students is public, everything else
/// needs the session token.
#[allow(async_fn_in_trait)]
pub trait PortalApi {
    async fn register_admin(&self, form: &AdminForm) -> Result<Value, ApiError>;
    async fn list_admins(&self) -> Result<Vec<AdminRecord>, ApiError>;
    async fn get_admin(&self, id: u64) -> Result<AdminRecord, ApiError>;
    async fn update_admin(&self, admin: &Identified<AdminForm>) -> Result<Value, ApiError>;
    async fn delete_admin(&self, id: u64) -> Result<Value, ApiError>;
    async fn total_users(&self) -> Result<UserTotals, ApiError>;

    async fn register_student(&self, form: &StudentForm) -> Result<Value, ApiError>;
    async fn list_students(&self) -> Result<Vec<StudentRecord>, ApiError>;
    async fn get_student(&self, id: u64) -> Result<StudentRecord, ApiError>;
    async fn update_student(&self, student: &Identified<StudentForm>) -> Result<Value, ApiError>;
    async fn delete_student(&self, id: u64) -> Result<Value, ApiError>;

    async fn register_event(&self, event: &EventForm) -> Result<Value, ApiError>;
    async fn list_events(&self) -> Result<Vec<AcademicEvent>, ApiError>;
    async fn get_event(&self, id: u64) -> Result<AcademicEvent, ApiError>;
    async fn update_event(&self, event: &AcademicEvent) -> Result<Value, ApiError>;
    async fn delete_event(&self, id: u64) -> Result<Value, ApiError>;

    async fn list_teachers(&self) -> Result<Vec<TeacherRecord>, ApiError>;
}

/// reqwest-backed implementation. Alerts go through `notifier`.
pub struct PortalClient<N> {
    http: Client,
    api_url: String,
    token: Option<String>,
    notifier: N,
}

impl<N: Notifier> PortalClient<N> {
    pub fn new(http: Client, api_url: &str, session: &Session, notifier: N) -> Self {
        PortalClient {
            http,
            api_url: api_url.trim_end_matches('/').to_owned(),
            token: session.session_token().map(str::to_owned),
            notifier,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    fn public(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
    }

    fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let Some(token) = self.token.as_deref() else {
            error!("Refusing to call {} without a session token", path);
            self.notifier.alert(MSG_MISSING_TOKEN);
            return Err(ApiError::MissingToken);
        };
        Ok(self.public(method, path).bearer_auth(token))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        what: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|err| {
            error!("{} failed: {}", what, err);
            ApiError::from(err)
        })?;
        let status = response.status();
        if !status.is_success() {
            error!("{} failed with status {}", what, status);
            if let Some(message) = status_alert(status) {
                self.notifier.alert(message);
            }
            return Err(ApiError::Status(status));
        }
        let raw = response.bytes().await?;
        let body: &[u8] = if raw.is_empty() { b"null" } else { &raw };
        let parsed = serde_json::from_slice(body)?;
        info!("{} succeeded with status {}", what, status);
        Ok(parsed)
    }
}

impl<N: Notifier> PortalApi for PortalClient<N> {
    async fn register_admin(&self, form: &AdminForm) -> Result<Value, ApiError> {
        let request = self.public(Method::POST, "/admin/").json(form);
        self.send("Registering administrator", request).await
    }

    async fn list_admins(&self) -> Result<Vec<AdminRecord>, ApiError> {
        let request = self.authorized(Method::GET, "/lista-admins/")?;
        self.send("Listing administrators", request).await
    }

    async fn get_admin(&self, id: u64) -> Result<AdminRecord, ApiError> {
        let request = self.authorized(Method::GET, "/admin/")?.query(&[("id", id)]);
        self.send("Fetching administrator", request).await
    }

    async fn update_admin(&self, admin: &Identified<AdminForm>) -> Result<Value, ApiError> {
        let request = self.authorized(Method::PUT, "/admin/")?.json(admin);
        self.send("Updating administrator", request).await
    }

    async fn delete_admin(&self, id: u64) -> Result<Value, ApiError> {
        let request = self.authorized(Method::DELETE, "/admin/")?.query(&[("id", id)]);
        self.send("Deleting administrator", request).await
    }

    async fn total_users(&self) -> Result<UserTotals, ApiError> {
        let request = self.authorized(Method::GET, "/total-usuarios/")?;
        self.send("Counting users", request).await
    }

    async fn register_student(&self, form: &StudentForm) -> Result<Value, ApiError> {
        let request = self.public(Method::POST, "/alumnos/").json(form);
        self.send("Registering student", request).await
    }

    async fn list_students(&self) -> Result<Vec<StudentRecord>, ApiError> {
        let request = self.authorized(Method::GET, "/lista-alumnos/")?;
        self.send("Listing students", request).await
    }

    async fn get_student(&self, id: u64) -> Result<StudentRecord, ApiError> {
        let request = self.authorized(Method::GET, "/alumnos/")?.query(&[("id", id)]);
        self.send("Fetching student", request).await
    }

    async fn update_student(&self, student: &Identified<StudentForm>) -> Result<Value, ApiError> {
        let request = self.authorized(Method::PUT, "/alumnos/")?.json(student);
        self.send("Updating student", request).await
    }

    async fn delete_student(&self, id: u64) -> Result<Value, ApiError> {
        let request = self.authorized(Method::DELETE, "/alumnos/")?.query(&[("id", id)]);
        self.send("Deleting student", request).await
    }

    async fn register_event(&self, event: &EventForm) -> Result<Value, ApiError> {
        let request = self
            .authorized(Method::POST, "/eventos-academicos/")?
            .json(event);
        self.send("Registering event", request).await
    }

    async fn list_events(&self) -> Result<Vec<AcademicEvent>, ApiError> {
        let request = self.authorized(Method::GET, "/lista-eventos/")?;
        self.send("Listing events", request).await
    }

    async fn get_event(&self, id: u64) -> Result<AcademicEvent, ApiError> {
        let request = self
            .authorized(Method::GET, "/eventos-academicos/")?
            .query(&[("id", id)]);
        self.send("Fetching event", request).await
    }

    async fn update_event(&self, event: &AcademicEvent) -> Result<Value, ApiError> {
        let request = self
            .authorized(Method::PUT, "/eventos-academicos/")?
            .json(event);
        self.send("Updating event", request).await
    }

    async fn delete_event(&self, id: u64) -> Result<Value, ApiError> {
        let request = self
            .authorized(Method::DELETE, "/eventos-academicos/")?
            .query(&[("id", id)]);
        self.send("Deleting event", request).await
    }

    async fn list_teachers(&self) -> Result<Vec<TeacherRecord>, ApiError> {
        let request = self.authorized(Method::GET, "/lista-maestros/")?;
        self.send("Listing teachers", request).await
    }
}

#[cfg(test)]
#[path = "tests/portal_api_tests.rs"]
mod tests;
