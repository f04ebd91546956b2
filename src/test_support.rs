//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::action::Action;
use crate::core::state::App;
use crate::inventory::{ClientError, InventoryClient, InventoryEntry, Status};

/// A call observed by `RecordingClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Upsert(InventoryEntry),
    Delete(String),
}

/// In-memory client that records every call and serves scripted results.
///
/// `list` pops from `list_results`, falling back to an empty inventory;
/// mutations succeed unless `fail_mutations` is set.
#[derive(Default)]
pub struct RecordingClient {
    pub calls: Mutex<Vec<Call>>,
    pub list_results: Mutex<VecDeque<Result<Vec<InventoryEntry>, ClientError>>>,
    pub fail_mutations: Option<ClientError>,
}

impl RecordingClient {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn push_list_result(&self, result: Result<Vec<InventoryEntry>, ClientError>) {
        self.list_results.lock().unwrap().push_back(result);
    }
}

#[async_trait]
impl InventoryClient for RecordingClient {
    async fn list(&self) -> Result<Vec<InventoryEntry>, ClientError> {
        self.calls.lock().unwrap().push(Call::List);
        self.list_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Vec::new()))
    }

    async fn upsert(&self, entry: &InventoryEntry) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(Call::Upsert(entry.clone()));
        match &self.fail_mutations {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    async fn delete(&self, name: &str) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(Call::Delete(name.to_string()));
        match &self.fail_mutations {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

/// Creates a freshly started App (loading, "Initializing...").
pub fn test_app() -> App {
    App::new(Duration::from_secs(30), Duration::from_millis(2000))
}

/// Creates an App that already shows `entries`, idle, with no message.
pub fn viewing_app(entries: Vec<InventoryEntry>) -> App {
    let mut app = test_app();
    app.entries = entries;
    app.selection.clamp(app.entries.len());
    app.is_loading = false;
    app.message = None;
    app
}

pub fn entry(name: &str, status: Status) -> InventoryEntry {
    InventoryEntry {
        name: name.to_string(),
        address: "192.168.1.10".to_string(),
        location: "ams-1".to_string(),
        status,
        last_report: "2024-05-01T10:00:00Z".to_string(),
    }
}

pub fn loaded(result: Result<Vec<InventoryEntry>, ClientError>) -> Action {
    Action::InventoryLoaded {
        result,
        at: chrono::Local::now(),
    }
}

/// Each row of a rendered buffer as a string, one symbol per cell.
pub fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

/// Position of the first cell of `needle` in a rendered buffer.
pub fn find_text(buffer: &ratatui::buffer::Buffer, needle: &str) -> Option<(u16, u16)> {
    buffer_lines(buffer)
        .iter()
        .enumerate()
        .find_map(|(y, line)| {
            line.find(needle).map(|byte_idx| {
                let x = line[..byte_idx].chars().count() as u16;
                (buffer.area.x + x, buffer.area.y + y as u16)
            })
        })
}
