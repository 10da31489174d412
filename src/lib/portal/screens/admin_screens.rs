use log::{error, info};
use serde_json::Value;

use super::{reject_invalid, require_login, require_permission, ScreenError};
use crate::portal::{
    helpers::{pending_changes_diff, render_table},
    modals::{open_delete_modal, DeleteModalResult, DeleteTarget},
    models::{
        admin_model::{AdminForm, AdminRecord},
        Identified,
    },
    notifier::Notifier,
    portal_api::PortalApi,
    session::Session,
    validation::validate_admin,
};

pub const ADMIN_COLUMNS: [&str; 6] = ["clave_admin", "nombre", "email", "rfc", "telefono", "ocupacion"];

/// Public sign-up of an administrator; no session needed.
pub async fn register_admin<A: PortalApi, N: Notifier>(
    api: &A,
    notifier: &N,
    form: &AdminForm,
) -> Result<Value, ScreenError> {
    reject_invalid(notifier, validate_admin(form, false))?;
    info!("Registering administrator {}", form.email);
    match api.register_admin(form).await {
        Ok(response) => {
            notifier.alert("Administrator registered.");
            Ok(response)
        }
        Err(err) => {
            error!("Could not register administrator: {}", err);
            notifier.alert("Could not register the administrator.");
            Err(err.into())
        }
    }
}

/// Administrator management, reserved to administrators.
pub struct AdminScreens<'a, A, N> {
    api: &'a A,
    notifier: &'a N,
}

impl<'a, A: PortalApi, N: Notifier> AdminScreens<'a, A, N> {
    pub fn open(api: &'a A, notifier: &'a N, session: &Session) -> Result<Self, ScreenError> {
        require_login(session)?;
        require_permission(
            notifier,
            session.is_admin(),
            "Only administrators can manage administrators.",
        )?;
        Ok(AdminScreens { api, notifier })
    }

    pub async fn list(&self) -> Result<Vec<AdminRecord>, ScreenError> {
        self.api.list_admins().await.map_err(|err| {
            error!("Could not fetch administrators: {}", err);
            self.notifier.alert("Could not fetch the administrator list.");
            err.into()
        })
    }

    pub fn render(&self, admins: &[AdminRecord]) -> String {
        let rows = admins
            .iter()
            .map(|admin| {
                vec![
                    admin.admin_key.clone(),
                    admin.user.full_name(),
                    admin.user.email.clone(),
                    admin.rfc.clone(),
                    admin.phone.clone(),
                    admin.occupation.clone(),
                ]
            })
            .collect::<Vec<_>>();
        render_table(&ADMIN_COLUMNS, &rows)
    }

    pub async fn get(&self, id: u64) -> Result<AdminRecord, ScreenError> {
        self.api.get_admin(id).await.map_err(|err| {
            error!("Could not fetch administrator {}: {}", id, err);
            self.notifier.alert("Could not fetch the selected administrator.");
            err.into()
        })
    }

    pub async fn update(&self, id: u64, form: &AdminForm) -> Result<Value, ScreenError> {
        reject_invalid(self.notifier, validate_admin(form, true))?;

        let stored = Identified {
            id,
            record: self.get(id).await?.to_form(),
        };
        let pending = Identified {
            id,
            record: form.clone(),
        };
        let diff = pending_changes_diff(&stored, &pending)?;
        if !self.notifier.confirm(&format!(
            "{}\nAre you sure you want to update this administrator?",
            diff
        )) {
            return Err(ScreenError::Cancelled);
        }

        match self.api.update_admin(&pending).await {
            Ok(response) => {
                self.notifier.alert("Administrator updated.");
                Ok(response)
            }
            Err(err) => {
                error!("Could not update administrator {}: {}", id, err);
                self.notifier.alert("Could not update the administrator.");
                Err(err.into())
            }
        }
    }

    pub async fn delete(&self, id: u64) -> Result<DeleteModalResult, ScreenError> {
        let result = open_delete_modal(self.api, self.notifier, DeleteTarget::Admin, id).await;
        if result.is_delete {
            self.notifier.alert("Administrator deleted.");
        }
        Ok(result)
    }
}
