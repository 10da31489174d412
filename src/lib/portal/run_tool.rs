use std::error::Error;

use chrono::NaiveDate;
use log::info;
use serde_json::Value;

use super::{
    helpers::{read_json_file, render_table},
    models::{
        admin_model::AdminForm, event_model::EventForm, student_model::StudentForm,
        AdminCommand, Command, Config, EventCommand, SessionCommand, StudentCommand,
    },
    notifier::Notifier,
    portal_api::PortalApi,
    screens::{
        admin_screens::{register_admin, AdminScreens},
        dashboard::load_user_chart,
        event_form::EventFormScreen,
        event_list::EventListScreen,
        require_login,
        sidebar::MenuVisibility,
        student_screens::{register_student, StudentScreens},
        ScreenError,
    },
    session::Session,
};

fn local_error(err: Box<dyn Error>) -> ScreenError {
    ScreenError::Io(err.to_string())
}

fn pretty(value: &Value) -> Result<String, ScreenError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Opens the screen `command` names and returns what it shows.
pub async fn run<A: PortalApi, N: Notifier>(
    api: &A,
    notifier: &N,
    session: &Session,
    config: &Config,
    command: Command,
    today: NaiveDate,
) -> Result<String, ScreenError> {
    info!("Running {:?}", command);
    match command {
        Command::Session(command) => run_session(session, config, command),
        Command::Admins(command) => run_admins(api, notifier, session, command).await,
        Command::Students(command) => run_students(api, notifier, session, command).await,
        Command::Events(command) => run_events(api, notifier, session, command, today).await,
        Command::Stats => Ok(load_user_chart(api, notifier, session).await?.render()),
        Command::Menu => Ok(MenuVisibility::load(session)?.entries().join("\n")),
    }
}

fn run_session(
    session: &Session,
    config: &Config,
    command: SessionCommand,
) -> Result<String, ScreenError> {
    let path = &config.session_json_path;
    match command {
        SessionCommand::Set { token, role, name } => {
            let new_session = Session::new(&token, &role, &name);
            new_session.save(path).map_err(local_error)?;
            Ok(format!("Session stored for {:?} with role {:?}", name, role))
        }
        SessionCommand::Show => match session.session_token() {
            None => Ok("Not logged in".to_owned()),
            Some(_) => Ok(format!(
                "Logged in as {:?} with role {:?}",
                session.name, session.role
            )),
        },
        SessionCommand::Clear => {
            Session::destroy(path).map_err(local_error)?;
            Ok("Session cleared".to_owned())
        }
    }
}

async fn run_admins<A: PortalApi, N: Notifier>(
    api: &A,
    notifier: &N,
    session: &Session,
    command: AdminCommand,
) -> Result<String, ScreenError> {
    match command {
        AdminCommand::Register { file } => {
            let form: AdminForm = read_json_file(&file).map_err(local_error)?;
            pretty(&register_admin(api, notifier, &form).await?)
        }
        AdminCommand::List => {
            let screens = AdminScreens::open(api, notifier, session)?;
            Ok(screens.render(&screens.list().await?))
        }
        AdminCommand::Get { id } => {
            let screens = AdminScreens::open(api, notifier, session)?;
            Ok(serde_json::to_string_pretty(&screens.get(id).await?)?)
        }
        AdminCommand::Update { id, file } => {
            let screens = AdminScreens::open(api, notifier, session)?;
            let form: AdminForm = read_json_file(&file).map_err(local_error)?;
            pretty(&screens.update(id, &form).await?)
        }
        AdminCommand::Delete { id } => {
            let result = AdminScreens::open(api, notifier, session)?.delete(id).await?;
            Ok(format!("Administrator #{} deleted: {}", id, result.is_delete))
        }
    }
}

async fn run_students<A: PortalApi, N: Notifier>(
    api: &A,
    notifier: &N,
    session: &Session,
    command: StudentCommand,
) -> Result<String, ScreenError> {
    match command {
        StudentCommand::Register { file } => {
            let form: StudentForm = read_json_file(&file).map_err(local_error)?;
            pretty(&register_student(api, notifier, &form).await?)
        }
        StudentCommand::List => {
            let screens = StudentScreens::open(api, notifier, session)?;
            Ok(screens.render(&screens.list().await?))
        }
        StudentCommand::Get { id } => {
            let screens = StudentScreens::open(api, notifier, session)?;
            Ok(serde_json::to_string_pretty(&screens.get(id).await?)?)
        }
        StudentCommand::Update { id, file } => {
            let screens = StudentScreens::open(api, notifier, session)?;
            let form: StudentForm = read_json_file(&file).map_err(local_error)?;
            pretty(&screens.update(id, &form).await?)
        }
        StudentCommand::Delete { id } => {
            let result = StudentScreens::open(api, notifier, session)?.delete(id).await?;
            Ok(format!("Student #{} deleted: {}", id, result.is_delete))
        }
    }
}

async fn run_events<A: PortalApi, N: Notifier>(
    api: &A,
    notifier: &N,
    session: &Session,
    command: EventCommand,
    today: NaiveDate,
) -> Result<String, ScreenError> {
    match command {
        EventCommand::Register { file } => {
            EventListScreen::open(api, notifier, session)?.go_register()?;
            let screen = EventFormScreen::open(api, notifier, session, today)?;
            let form: EventForm = read_json_file(&file).map_err(local_error)?;
            pretty(&screen.register(&form).await?)
        }
        EventCommand::List { search } => {
            let mut screen = EventListScreen::open(api, notifier, session)?;
            screen.load().await?;
            let events = screen.search(search.as_deref().unwrap_or_default());
            Ok(screen.render(&events))
        }
        EventCommand::Get { id } => {
            require_login(session)?;
            Ok(serde_json::to_string_pretty(&api.get_event(id).await?)?)
        }
        EventCommand::Update { id, file } => {
            if !EventListScreen::open(api, notifier, session)?.go_edit(id)? {
                return Err(ScreenError::Cancelled);
            }
            let screen = EventFormScreen::open(api, notifier, session, today)?;
            let form: EventForm = read_json_file(&file).map_err(local_error)?;
            pretty(&screen.update(id, &form).await?)
        }
        EventCommand::Delete { id } => {
            let mut screen = EventListScreen::open(api, notifier, session)?;
            let result = screen.delete(id).await?;
            if result.is_delete {
                Ok(format!(
                    "Event #{} deleted, {} events left",
                    id,
                    screen.events.len()
                ))
            } else {
                Ok(format!("Event #{} was not deleted", id))
            }
        }
        EventCommand::Responsibles => {
            let screen = EventFormScreen::open(api, notifier, session, today)?;
            let rows = screen
                .load_responsibles()
                .await
                .into_iter()
                .map(|r| vec![r.id.to_string(), r.full_name, r.kind.to_owned()])
                .collect::<Vec<_>>();
            Ok(render_table(&["id", "nombre", "tipo"], &rows))
        }
    }
}
