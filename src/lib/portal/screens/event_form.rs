use chrono::NaiveDate;
use futures::future;
use log::{error, info};
use serde_json::Value;

use super::{reject_invalid, require_login, require_permission, ScreenError};
use crate::portal::{
    helpers::{format_date, pending_changes_diff},
    models::{
        event_model::{AcademicEvent, AudienceLabel, EventForm},
        stats_model::Responsible,
        Identified,
    },
    notifier::Notifier,
    portal_api::PortalApi,
    session::Session,
    validation::{parse_date, validate_event},
};

/// Register/edit form for academic events. Administrators only.
pub struct EventFormScreen<'a, A, N> {
    api: &'a A,
    notifier: &'a N,
    today: NaiveDate,
}

/// Copy of the form as the API expects it: the date normalized to
/// `YYYY-MM-DD` and the education program dropped unless students are
/// part of the audience. The audience itself is JSON-encoded on serialization.
pub fn build_event_payload(form: &EventForm) -> EventForm {
    let mut payload = form.clone();
    if let Some(date) = parse_date(&form.date) {
        payload.date = format_date(date);
    }
    if !form.audience.contains(AudienceLabel::Students) {
        payload.education_program.clear();
    }
    payload
}

impl<'a, A: PortalApi, N: Notifier> EventFormScreen<'a, A, N> {
    pub fn open(
        api: &'a A,
        notifier: &'a N,
        session: &Session,
        today: NaiveDate,
    ) -> Result<Self, ScreenError> {
        require_login(session)?;
        require_permission(
            notifier,
            session.is_admin(),
            "You do not have permission to register academic events.",
        )?;
        Ok(EventFormScreen {
            api,
            notifier,
            today,
        })
    }

    /// Administrators first, then teachers. A failing list is logged and skipped.
    pub async fn load_responsibles(&self) -> Vec<Responsible> {
        let (admins, teachers) =
            future::join(self.api.list_admins(), self.api.list_teachers()).await;

        let mut responsibles = Vec::new();
        match admins {
            Ok(admins) => responsibles.extend(admins.into_iter().map(|admin| Responsible {
                id: admin.user.id,
                full_name: format!("{} (Admin)", admin.user.full_name()),
                kind: "administrador",
            })),
            Err(err) => error!("Could not load administrators: {}", err),
        }
        match teachers {
            Ok(teachers) => responsibles.extend(teachers.into_iter().map(|teacher| Responsible {
                id: teacher.user.id,
                full_name: format!("{} (Maestro)", teacher.user.full_name()),
                kind: "maestro",
            })),
            Err(err) => error!("Could not load teachers: {}", err),
        }
        info!("Loaded {} possible responsibles", responsibles.len());
        responsibles
    }

    pub async fn register(&self, form: &EventForm) -> Result<Value, ScreenError> {
        reject_invalid(self.notifier, validate_event(form, self.today))?;
        let payload = build_event_payload(form);
        info!("Registering event {:?}", payload.name);

        match self.api.register_event(&payload).await {
            Ok(response) => {
                self.notifier.alert("Event registered.");
                Ok(response)
            }
            Err(err) => {
                error!("Could not register event: {}", err);
                self.notifier
                    .alert("Error registering the event. Please try again.");
                Err(err.into())
            }
        }
    }

    pub async fn load_event(&self, id: u64) -> Result<AcademicEvent, ScreenError> {
        self.api.get_event(id).await.map_err(|err| {
            error!("Could not fetch event {}: {}", id, err);
            self.notifier.alert("Could not fetch the selected event.");
            err.into()
        })
    }

    /// Validates, shows what is about to change and PUTs after confirmation.
    pub async fn update(&self, id: u64, form: &EventForm) -> Result<Value, ScreenError> {
        reject_invalid(self.notifier, validate_event(form, self.today))?;

        let stored = self.load_event(id).await?;
        let stored = Identified {
            id,
            record: stored.record,
        };
        let pending = Identified {
            id,
            record: build_event_payload(form),
        };
        let diff = pending_changes_diff(&stored, &pending)?;
        let question = if diff.is_empty() {
            "Nothing changed. Send the event anyway?".to_owned()
        } else {
            format!("{}\nAre you sure you want to update this event?", diff)
        };
        if !self.notifier.confirm(&question) {
            return Err(ScreenError::Cancelled);
        }

        match self.api.update_event(&pending).await {
            Ok(response) => {
                self.notifier.alert("Event updated.");
                Ok(response)
            }
            Err(err) => {
                error!("Could not update event {}: {}", id, err);
                self.notifier
                    .alert("Error updating the event. Please try again.");
                Err(err.into())
            }
        }
    }
}
