use std::{error::Error, fs::File, io::BufReader, path::Path};

use chrono::NaiveDate;
use log::{debug, info};
use serde::{de::DeserializeOwned, Serialize};
use similar::TextDiff;

use super::{
    models::event_model::{AcademicEvent, AudienceLabel},
    session::Role,
};

/// `YYYY-MM-DD`, the only date format the API accepts.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn log_all_events(events: &[AcademicEvent]) -> () {
    for event in events.iter() {
        debug!(
            "Event {} {:?} on {} for {:?}",
            event.id, event.record.name, event.record.date, event.record.audience
        );
    }
}

/// Which audiences a role is allowed to see. `None` means everything.
fn visible_audiences(role: Option<Role>) -> Option<&'static [AudienceLabel]> {
    match role {
        Some(Role::Admin) => None,
        Some(Role::Teacher) => Some(&[AudienceLabel::Professors, AudienceLabel::GeneralPublic]),
        Some(Role::Student) => Some(&[AudienceLabel::Students, AudienceLabel::GeneralPublic]),
        None => Some(&[]),
    }
}

/// Administrators see every event, teachers the ones aimed at professors or
/// the general public, students the ones aimed at students or the general
/// public. Anybody else sees nothing.
pub fn filter_events_by_role(events: Vec<AcademicEvent>, role: Option<Role>) -> Vec<AcademicEvent> {
    let Some(allowed) = visible_audiences(role) else {
        return events;
    };
    events
        .into_iter()
        .filter(|event| {
            allowed
                .iter()
                .any(|label| event.record.audience.contains(*label))
        })
        .collect()
}

/// Case-insensitive substring match on the event name.
pub fn search_events_by_name(events: Vec<AcademicEvent>, search: &str) -> Vec<AcademicEvent> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return events;
    }
    events
        .into_iter()
        .filter(|event| event.record.name.to_lowercase().contains(&needle))
        .collect()
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    info!("Reading {}", std::path::absolute(path)?.display());
    let file = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(file)?)
}

/// Unified diff between what the API holds and what is about to be sent.
/// Empty when nothing changed.
pub fn pending_changes_diff<T: Serialize>(stored: &T, pending: &T) -> Result<String, serde_json::Error> {
    let stored_json = serde_json::to_string_pretty(stored)?;
    let pending_json = serde_json::to_string_pretty(pending)?;
    let diff = TextDiff::from_lines(&stored_json, &pending_json);
    if diff.ratio() == 1.0 {
        return Ok(String::new());
    }
    Ok(diff
        .unified_diff()
        .header("stored", "pending")
        .to_string())
}

/// Plain-text grid with left-aligned, padded columns.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_owned()
    };

    let mut lines = vec![format_row(headers.to_vec())];
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        lines.push(format_row(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "tests/helpers_tests.rs"]
mod tests;
