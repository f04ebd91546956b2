//! # Inventory Table Projection
//!
//! Turns the entry list into rows of cells that already carry their semantic
//! style. The renderer only maps classes to colors; it never inspects cell
//! text to decide how to paint it.

use unicode_width::UnicodeWidthChar;

use crate::core::action::Key;
use crate::inventory::{InventoryEntry, Status};

/// Fixed column layout: (title, display width).
pub const COLUMNS: [(&str, u16); 5] = [
    ("Name", 20),
    ("IP Address", 18),
    ("Location", 18),
    ("Status", 12),
    ("Last Report", 35),
];

/// Semantic class of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    Plain,
    Positive,
    Negative,
    Neutral,
}

/// Semantic class of a whole row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    Normal,
    /// Subdued background on alternating rows.
    Striped,
    Selected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub text: String,
    pub class: CellClass,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub cells: Vec<CellView>,
    pub class: RowClass,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<RowView>,
}

pub fn status_class(status: &Status) -> CellClass {
    match status {
        Status::Online => CellClass::Positive,
        Status::Offline => CellClass::Negative,
        _ => CellClass::Neutral,
    }
}

/// Builds the full table for `entries`, one row per entry.
pub fn project(entries: &[InventoryEntry], selected: Option<usize>) -> TableView {
    let rows = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let class = if selected == Some(i) {
                RowClass::Selected
            } else if i % 2 == 1 {
                RowClass::Striped
            } else {
                RowClass::Normal
            };
            let values = [
                (entry.name.as_str(), CellClass::Plain),
                (entry.address.as_str(), CellClass::Plain),
                (entry.location.as_str(), CellClass::Plain),
                (entry.status.as_str(), status_class(&entry.status)),
                (entry.last_report.as_str(), CellClass::Plain),
            ];
            let cells = values
                .iter()
                .zip(COLUMNS)
                .map(|((text, class), (_, width))| CellView {
                    text: truncate_to_width(text, width as usize),
                    class: *class,
                })
                .collect();
            RowView { cells, class }
        })
        .collect();
    TableView { rows }
}

/// Cuts `s` to at most `max_width` terminal columns, marking the cut with '…'.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let width: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// The table cursor. `None` exactly when there is nothing to select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Re-fits the cursor after the list was replaced with `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.index = match (self.index, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
    }

    /// Moves the cursor for a navigation key. Returns `true` if the key was a
    /// navigation key.
    pub fn handle_key(&mut self, key: Key, len: usize, page: usize) -> bool {
        let Some(current) = self.index else {
            return false;
        };
        let last = len.saturating_sub(1);
        let page = page.max(1);
        let next = match key {
            Key::Up | Key::Char('k') => current.saturating_sub(1),
            Key::Down | Key::Char('j') => current + 1,
            Key::PageUp => current.saturating_sub(page),
            Key::PageDown => current + page,
            Key::Home | Key::Char('g') => 0,
            Key::End | Key::Char('G') => last,
            _ => return false,
        };
        self.index = Some(next.min(last));
        true
    }
}
