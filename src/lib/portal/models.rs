use std::path::PathBuf;

use clap::{command, Parser, Subcommand};
use serde::{de, Deserialize, Deserializer, Serialize};

pub mod admin_model;
pub mod event_model;
pub mod stats_model;
pub mod student_model;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that holds the API address and the session file location.
/// 2. A flag that answers every confirmation prompt with "yes".
/// 3. The screen (subcommand) to open.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    /// Confirm every prompt without asking
    #[arg(long)]
    pub yes: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Manage the local session (token, role, name)
    #[command(subcommand)]
    Session(SessionCommand),
    /// Administrator screens
    #[command(subcommand)]
    Admins(AdminCommand),
    /// Student screens
    #[command(subcommand)]
    Students(StudentCommand),
    /// Academic event screens
    #[command(subcommand)]
    Events(EventCommand),
    /// Registered users per role
    Stats,
    /// Navigation entries visible to the current role
    Menu,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Set {
        #[arg(long)]
        token: String,
        #[arg(long)]
        role: String,
        #[arg(long, default_value = "")]
        name: String,
    },
    Show,
    Clear,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum AdminCommand {
    Register {
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },
    List,
    Get {
        #[arg(long)]
        id: u64,
    },
    Update {
        #[arg(long)]
        id: u64,
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },
    Delete {
        #[arg(long)]
        id: u64,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum StudentCommand {
    Register {
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },
    List,
    Get {
        #[arg(long)]
        id: u64,
    },
    Update {
        #[arg(long)]
        id: u64,
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },
    Delete {
        #[arg(long)]
        id: u64,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum EventCommand {
    Register {
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },
    List {
        /// Only show events whose name contains this text
        #[arg(long)]
        search: Option<String>,
    },
    Get {
        #[arg(long)]
        id: u64,
    },
    Update {
        #[arg(long)]
        id: u64,
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },
    Delete {
        #[arg(long)]
        id: u64,
    },
    /// People that can be put in charge of an event
    Responsibles,
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Base URL of the portal API, without the trailing slash
/// 2. Path to the JSON file that keeps the session between runs
#[derive(Debug, Deserialize)]
pub struct Config {
    pub api_url: String,
    #[serde(default = "default_session_json_path")]
    pub session_json_path: PathBuf,
}

fn default_session_json_path() -> PathBuf {
    PathBuf::from("session.json")
}

/// A record together with the id the API assigned to it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Identified<T> {
    #[serde(default)]
    pub id: u64,
    #[serde(flatten)]
    pub record: T,
}

/// Accepts strings, numbers, booleans and `null` and keeps them as text.
/// The API echoes form fields back with their stored types.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or a number, got {}",
            other
        ))),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Account {
    #[serde(default)]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
}

impl Account {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
#[path = "tests/models_tests.rs"]
mod tests;
