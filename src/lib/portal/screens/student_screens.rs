use log::{error, info};
use serde_json::Value;

use super::{reject_invalid, require_login, require_permission, ScreenError};
use crate::portal::{
    helpers::{pending_changes_diff, render_table},
    modals::{open_delete_modal, DeleteModalResult, DeleteTarget},
    models::{
        student_model::{StudentForm, StudentRecord},
        Identified,
    },
    notifier::Notifier,
    portal_api::PortalApi,
    session::Session,
    validation::validate_student,
};

pub const STUDENT_COLUMNS: [&str; 6] = ["matricula", "nombre", "email", "curp", "telefono", "edad"];

/// Public sign-up of a student.
pub async fn register_student<A: PortalApi, N: Notifier>(
    api: &A,
    notifier: &N,
    form: &StudentForm,
) -> Result<Value, ScreenError> {
    reject_invalid(notifier, validate_student(form, false))?;
    info!("Registering student {}", form.enrollment_id);
    match api.register_student(form).await {
        Ok(response) => {
            notifier.alert("Student registered.");
            Ok(response)
        }
        Err(err) => {
            error!("Could not register student: {}", err);
            notifier.alert("Could not register the student.");
            Err(err.into())
        }
    }
}

/// Administrators and teachers may browse students; only administrators
/// may change or remove them.
pub struct StudentScreens<'a, A, N> {
    api: &'a A,
    notifier: &'a N,
    can_manage: bool,
}

impl<'a, A: PortalApi, N: Notifier> StudentScreens<'a, A, N> {
    pub fn open(api: &'a A, notifier: &'a N, session: &Session) -> Result<Self, ScreenError> {
        require_login(session)?;
        require_permission(
            notifier,
            session.is_admin() || session.is_teacher(),
            "You do not have permission to see students.",
        )?;
        Ok(StudentScreens {
            api,
            notifier,
            can_manage: session.is_admin(),
        })
    }

    pub async fn list(&self) -> Result<Vec<StudentRecord>, ScreenError> {
        self.api.list_students().await.map_err(|err| {
            error!("Could not fetch students: {}", err);
            self.notifier.alert("Could not fetch the student list.");
            err.into()
        })
    }

    pub fn render(&self, students: &[StudentRecord]) -> String {
        let rows = students
            .iter()
            .map(|student| {
                vec![
                    student.enrollment_id.clone(),
                    student.user.full_name(),
                    student.user.email.clone(),
                    student.curp.clone(),
                    student.phone.clone(),
                    student.age.clone(),
                ]
            })
            .collect::<Vec<_>>();
        render_table(&STUDENT_COLUMNS, &rows)
    }

    pub async fn get(&self, id: u64) -> Result<StudentRecord, ScreenError> {
        self.api.get_student(id).await.map_err(|err| {
            error!("Could not fetch student {}: {}", id, err);
            self.notifier.alert("Could not fetch the selected student.");
            err.into()
        })
    }

    pub async fn update(&self, id: u64, form: &StudentForm) -> Result<Value, ScreenError> {
        require_permission(
            self.notifier,
            self.can_manage,
            "You do not have permission to edit students.",
        )?;
        reject_invalid(self.notifier, validate_student(form, true))?;

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
            "{}\nAre you sure you want to update this student?",
            diff
        )) {
            return Err(ScreenError::Cancelled);
        }

        match self.api.update_student(&pending).await {
            Ok(response) => {
                self.notifier.alert("Student updated.");
                Ok(response)
            }
            Err(err) => {
                error!("Could not update student {}: {}", id, err);
                self.notifier.alert("Could not update the student.");
                Err(err.into())
            }
        }
    }

    pub async fn delete(&self, id: u64) -> Result<DeleteModalResult, ScreenError> {
        require_permission(
            self.notifier,
            self.can_manage,
            "You do not have permission to delete students.",
        )?;
        let result = open_delete_modal(self.api, self.notifier, DeleteTarget::Student, id).await;
        if result.is_delete {
            self.notifier.alert("Student deleted.");
        }
        Ok(result)
    }
}
