//! # Application State
//!
//! Everything the session controller owns. No TUI types live here.
//!
//! ```text
//! App
//! ├── mode: Mode                    // Viewing | Wizard | ConfirmingDelete | Help
//! ├── entries: Vec<InventoryEntry>  // last successful fetch, replaced wholesale
//! ├── selection: Selection          // table cursor
//! ├── is_loading: bool              // a fetch or mutation is in flight
//! ├── message: Option<TransientMessage>
//! ├── viewport: Viewport            // last known terminal size
//! ├── refresh_interval: Duration
//! ├── message_timeout: Duration
//! └── should_quit: bool
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::table::Selection;
use crate::core::wizard::Wizard;
use crate::inventory::InventoryEntry;

/// Interaction mode. Exactly one is active; wizard progress only exists
/// inside `Mode::Wizard`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Viewing,
    Wizard(Wizard),
    ConfirmingDelete { target: String },
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Cancel,
    Error,
}

/// The status line shown above the main view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    /// Generation counter; expiry events carry the id they were scheduled for.
    pub id: u64,
    pub text: String,
    pub style: MessageStyle,
    /// True while an expiry timer is armed for this message.
    pub expires: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Rows taken by everything around the table body: title bar (title, spacer,
/// status line), spacer, footer, table borders and column header.
pub const TABLE_CHROME_ROWS: u16 = 3 + 1 + 1 + 2 + 1;

pub struct App {
    pub mode: Mode,
    pub entries: Vec<InventoryEntry>,
    pub selection: Selection,
    pub is_loading: bool,
    pub message: Option<TransientMessage>,
    pub viewport: Viewport,
    pub refresh_interval: Duration,
    pub message_timeout: Duration,
    pub should_quit: bool,
    next_message_id: u64,
}

impl App {
    pub fn new(refresh_interval: Duration, message_timeout: Duration) -> Self {
        let mut app = Self {
            mode: Mode::Viewing,
            entries: Vec::new(),
            selection: Selection::default(),
            is_loading: true,
            message: None,
            viewport: Viewport::default(),
            refresh_interval,
            message_timeout,
            should_quit: false,
            next_message_id: 0,
        };
        app.message = Some(app.new_message(MessageStyle::Info, "Initializing...", false));
        app
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.refresh_interval, config.message_timeout)
    }

    pub fn selected_entry(&self) -> Option<&InventoryEntry> {
        self.selection.index().and_then(|i| self.entries.get(i))
    }

    /// Rows moved by PageUp/PageDown at the current terminal height.
    pub fn page_size(&self) -> usize {
        self.viewport.height.saturating_sub(TABLE_CHROME_ROWS).max(1) as usize
    }

    /// Returns true if the active message has an armed expiry timer.
    pub fn has_pending_expiry(&self) -> bool {
        self.message.as_ref().is_some_and(|m| m.expires)
    }

    pub(crate) fn new_message(
        &mut self,
        style: MessageStyle,
        text: impl Into<String>,
        expires: bool,
    ) -> TransientMessage {
        self.next_message_id += 1;
        TransientMessage {
            id: self.next_message_id,
            text: text.into(),
            style,
            expires,
        }
    }
}
