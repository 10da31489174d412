//! Confirmation dialogs. Each one asks a single question, calls at most one
//! endpoint and closes with a result flag the calling screen acts on.
use log::{error, info};

use super::{notifier::Notifier, portal_api::PortalApi};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditModalResult {
    pub confirm: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteModalResult {
    pub is_delete: bool,
    pub error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Event,
    Admin,
    Student,
}

impl DeleteTarget {
    pub fn noun(&self) -> &'static str {
        match self {
            DeleteTarget::Event => "event",
            DeleteTarget::Admin => "administrator",
            DeleteTarget::Student => "student",
        }
    }
}

/// Only asks; the caller moves on to the edit form when `confirm` is set.
pub fn open_edit_event_modal<N: Notifier>(notifier: &N, id: u64) -> EditModalResult {
    EditModalResult {
        confirm: notifier.confirm(&format!("Do you want to edit event #{}?", id)),
    }
}

pub async fn open_delete_modal<A: PortalApi, N: Notifier>(
    api: &A,
    notifier: &N,
    target: DeleteTarget,
    id: u64,
) -> DeleteModalResult {
    let question = format!(
        "Are you sure you want to delete {} #{}? This cannot be undone.",
        target.noun(),
        id
    );
    if !notifier.confirm(&question) {
        return DeleteModalResult::default();
    }

    let result = match target {
        DeleteTarget::Event => api.delete_event(id).await,
        DeleteTarget::Admin => api.delete_admin(id).await,
        DeleteTarget::Student => api.delete_student(id).await,
    };
    match result {
        Ok(response) => {
            info!("Deleted {} {}: {}", target.noun(), id, response);
            DeleteModalResult {
                is_delete: true,
                error: false,
            }
        }
        Err(err) => {
            error!("Could not delete {} {}: {}", target.noun(), id, err);
            notifier.alert(&format!(
                "Error contacting the API to delete the {}.",
                target.noun()
            ));
            DeleteModalResult {
                is_delete: false,
                error: true,
            }
        }
    }
}
