use log::{error, info, warn};

use super::{require_login, require_permission, ScreenError};
use crate::portal::{
    helpers::{filter_events_by_role, log_all_events, render_table, search_events_by_name},
    modals::{open_delete_modal, open_edit_event_modal, DeleteModalResult, DeleteTarget},
    models::event_model::AcademicEvent,
    notifier::Notifier,
    portal_api::PortalApi,
    session::{Role, Session},
};

pub const EVENT_COLUMNS: [&str; 7] = [
    "nombre_evento",
    "tipo_evento",
    "fecha_realizacion",
    "horario",
    "lugar",
    "publico_objetivo",
    "cupo_maximo",
];

/// Academic events visible to the logged-in user.
pub struct EventListScreen<'a, A, N> {
    api: &'a A,
    notifier: &'a N,
    role: Option<Role>,
    pub columns: Vec<&'static str>,
    pub events: Vec<AcademicEvent>,
}

impl<'a, A: PortalApi, N: Notifier> EventListScreen<'a, A, N> {
    /// Needs a session. Only administrators get the edit and delete columns.
    pub fn open(api: &'a A, notifier: &'a N, session: &Session) -> Result<Self, ScreenError> {
        require_login(session)?;
        let role = session.role();
        info!("Opening event list as {:?} ({:?})", session.name, role);

        let mut columns = EVENT_COLUMNS.to_vec();
        if role == Some(Role::Admin) {
            columns.push("editar");
            columns.push("eliminar");
        }

        Ok(EventListScreen {
            api,
            notifier,
            role,
            columns,
            events: Vec::new(),
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    pub async fn load(&mut self) -> Result<(), ScreenError> {
        match self.api.list_events().await {
            Ok(events) => {
                info!("Fetched {} events", events.len());
                self.events = filter_events_by_role(events, self.role);
                info!("{} events visible to {:?}", self.events.len(), self.role);
                log_all_events(&self.events);
                Ok(())
            }
            Err(err) => {
                error!("Could not fetch events: {}", err);
                self.notifier.alert("Could not fetch the event list.");
                Err(err.into())
            }
        }
    }

    pub fn search(&self, text: &str) -> Vec<AcademicEvent> {
        search_events_by_name(self.events.clone(), text)
    }

    pub fn render(&self, events: &[AcademicEvent]) -> String {
        let rows = events
            .iter()
            .map(|event| {
                let form = &event.record;
                let mut row = vec![
                    form.name.clone(),
                    form.kind.clone(),
                    form.date.clone(),
                    format!("{} - {}", form.start_time, form.end_time),
                    form.location.clone(),
                    form.audience.to_string(),
                    form.capacity.clone(),
                ];
                if self.is_admin() {
                    row.push(format!("events update --id {}", event.id));
                    row.push(format!("events delete --id {}", event.id));
                }
                row
            })
            .collect::<Vec<_>>();
        render_table(&self.columns, &rows)
    }

    pub fn go_register(&self) -> Result<(), ScreenError> {
        require_permission(
            self.notifier,
            self.is_admin(),
            "You do not have permission to register events.",
        )
    }

    /// `Ok(true)` when the user confirmed and the edit form should open.
    pub fn go_edit(&self, id: u64) -> Result<bool, ScreenError> {
        require_permission(
            self.notifier,
            self.is_admin(),
            "You do not have permission to edit events.",
        )?;
        Ok(open_edit_event_modal(self.notifier, id).confirm)
    }

    /// Runs the delete modal and reloads the list when the event is gone.
    /// A failed reload only alerts; the deletion itself already happened.
    pub async fn delete(&mut self, id: u64) -> Result<DeleteModalResult, ScreenError> {
        require_permission(
            self.notifier,
            self.is_admin(),
            "You do not have permission to delete events.",
        )?;
        let result = open_delete_modal(self.api, self.notifier, DeleteTarget::Event, id).await;
        if result.is_delete {
            self.notifier.alert("Event deleted.");
            if let Err(err) = self.load().await {
                warn!("Event {} is gone but the list was not reloaded: {}", id, err);
                self.events.retain(|event| event.id != id);
            }
        } else if result.error {
            self.notifier.alert("There was an error deleting the event.");
        }
        Ok(result)
    }
}
