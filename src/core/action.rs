//! # Actions
//!
//! Everything that can happen in the session becomes an `Action`.
//! User presses `r`? That's `Action::Key(Key::Char('r'))`.
//! The inventory arrives? That's `Action::InventoryLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns the effects the runtime must carry out. No I/O here:
//! network calls and timers are only *described* by `Effect`, and their
//! results come back later as new actions.
//!
//! ```text
//! State + Action  →  update()  →  New State + Vec<Effect>
//! ```

use std::time::Duration;

use chrono::{DateTime, Local};
use log::debug;

use crate::core::state::{App, MessageStyle, Mode};
use crate::core::wizard::{Wizard, WizardOutcome};
use crate::inventory::{ClientError, InventoryEntry};

/// A key press, already stripped of terminal-library details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    /// Ctrl+C.
    Interrupt,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Key(Key),
    Resize { width: u16, height: u16 },
    /// Result of a list call, or of a mutation and the list chained after it.
    InventoryLoaded {
        result: Result<Vec<InventoryEntry>, ClientError>,
        at: DateTime<Local>,
    },
    /// The periodic refresh timer fired.
    RefreshTick,
    /// The expiry timer for message `id` fired.
    MessageExpired(u64),
}

/// Work the runtime performs on behalf of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Quit,
    Fetch,
    /// Create-or-update, then fetch.
    Upsert(InventoryEntry),
    /// Delete by name, then fetch.
    Delete(String),
    /// Arm the periodic refresh timer once; it fires `RefreshTick`.
    ScheduleRefresh(Duration),
    /// Arm the message expiry timer, replacing any pending one.
    ScheduleMessageExpiry { id: u64, after: Duration },
    CancelMessageExpiry,
}

/// Effects to run once at startup: the first fetch and the refresh timer.
pub fn init(app: &App) -> Vec<Effect> {
    vec![Effect::Fetch, Effect::ScheduleRefresh(app.refresh_interval)]
}

pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    let mut effects = Vec::new();
    match action {
        Action::Resize { width, height } => {
            app.viewport.width = width;
            app.viewport.height = height;
        }
        Action::Key(key) => {
            // Any key stops a pending expiry; the message stays until superseded.
            if let Some(message) = app.message.as_mut()
                && message.expires
            {
                message.expires = false;
                effects.push(Effect::CancelMessageExpiry);
            }
            if key == Key::Interrupt {
                quit(app, &mut effects);
                return effects;
            }
            match app.mode {
                Mode::Viewing => update_viewing(app, key, &mut effects),
                Mode::Wizard(_) => update_wizard(app, key, &mut effects),
                Mode::ConfirmingDelete { .. } => update_deleting(app, key, &mut effects),
                Mode::Help => app.mode = Mode::Viewing,
            }
        }
        Action::InventoryLoaded { result, at } => {
            app.is_loading = false;
            match result {
                Ok(entries) => {
                    app.entries = entries;
                    app.selection.clamp(app.entries.len());
                    // Outside Viewing the refresh is silent so open dialogs stay intact.
                    if app.mode == Mode::Viewing {
                        let text = format!("Inventory refreshed at {}", at.format("%H:%M:%S"));
                        set_temp_message(app, MessageStyle::Success, text, &mut effects);
                    }
                }
                Err(e) => set_message(app, MessageStyle::Error, e.to_string(), &mut effects),
            }
        }
        Action::RefreshTick => {
            app.is_loading = true;
            effects.push(Effect::Fetch);
            effects.push(Effect::ScheduleRefresh(app.refresh_interval));
        }
        Action::MessageExpired(id) => {
            if app.message.as_ref().is_some_and(|m| m.id == id && m.expires) {
                app.message = None;
            } else {
                debug!("Ignoring stale expiry for message {id}");
            }
        }
    }
    effects
}

fn update_viewing(app: &mut App, key: Key, effects: &mut Vec<Effect>) {
    match key {
        Key::Char('q') => quit(app, effects),
        Key::Char('r') => {
            app.is_loading = true;
            set_message(app, MessageStyle::Info, "Refreshing data...", effects);
            effects.push(Effect::Fetch);
        }
        Key::Char('a') => {
            clear_message(app, effects);
            app.mode = Mode::Wizard(Wizard::add());
        }
        Key::Char('e') => {
            if let Some(entry) = app.selected_entry().cloned() {
                clear_message(app, effects);
                app.mode = Mode::Wizard(Wizard::edit(entry));
            }
        }
        Key::Char('d') => {
            if let Some(entry) = app.selected_entry() {
                let target = entry.name.clone();
                clear_message(app, effects);
                app.mode = Mode::ConfirmingDelete { target };
            }
        }
        Key::Char('?') => app.mode = Mode::Help,
        other => {
            let len = app.entries.len();
            let page = app.page_size();
            app.selection.handle_key(other, len, page);
        }
    }
}

fn update_wizard(app: &mut App, key: Key, effects: &mut Vec<Effect>) {
    let Mode::Wizard(wizard) = &mut app.mode else {
        return;
    };
    match wizard.handle_key(key) {
        WizardOutcome::Pending => {}
        WizardOutcome::Cancelled => {
            app.mode = Mode::Viewing;
            set_temp_message(app, MessageStyle::Cancel, "Cancelled.", effects);
        }
        WizardOutcome::Submit(entry) => {
            app.mode = Mode::Viewing;
            app.is_loading = true;
            set_temp_message(app, MessageStyle::Success, "Submitting server data...", effects);
            effects.push(Effect::Upsert(entry));
        }
    }
}

fn update_deleting(app: &mut App, key: Key, effects: &mut Vec<Effect>) {
    let Mode::ConfirmingDelete { target } = &app.mode else {
        return;
    };
    match key {
        Key::Char('y' | 'Y') => {
            let target = target.clone();
            app.mode = Mode::Viewing;
            app.is_loading = true;
            let text = format!("Deleting server '{target}'...");
            set_temp_message(app, MessageStyle::Success, text, effects);
            effects.push(Effect::Delete(target));
        }
        Key::Char('n' | 'N') | Key::Esc => {
            app.mode = Mode::Viewing;
            set_temp_message(app, MessageStyle::Cancel, "Deletion cancelled.", effects);
        }
        _ => {}
    }
}

fn quit(app: &mut App, effects: &mut Vec<Effect>) {
    app.should_quit = true;
    effects.push(Effect::Quit);
}

fn cancel_pending_expiry(app: &App, effects: &mut Vec<Effect>) {
    if app.has_pending_expiry() {
        effects.push(Effect::CancelMessageExpiry);
    }
}

/// Installs a message that stays until something replaces it.
fn set_message(
    app: &mut App,
    style: MessageStyle,
    text: impl Into<String>,
    effects: &mut Vec<Effect>,
) {
    cancel_pending_expiry(app, effects);
    app.message = Some(app.new_message(style, text, false));
}

/// Installs a message that clears itself after `message_timeout`.
fn set_temp_message(
    app: &mut App,
    style: MessageStyle,
    text: impl Into<String>,
    effects: &mut Vec<Effect>,
) {
    let message = app.new_message(style, text, true);
    effects.push(Effect::ScheduleMessageExpiry {
        id: message.id,
        after: app.message_timeout,
    });
    app.message = Some(message);
}

fn clear_message(app: &mut App, effects: &mut Vec<Effect>) {
    cancel_pending_expiry(app, effects);
    app.message = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wizard::WizardStep;
    use crate::inventory::Status;
    use crate::test_support::{entry, loaded, test_app, viewing_app};

    fn press(app: &mut App, key: Key) -> Vec<Effect> {
        update(app, Action::Key(key))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, Key::Char(c));
        }
    }

    fn message_text(app: &App) -> Option<&str> {
        app.message.as_ref().map(|m| m.text.as_str())
    }

    #[test]
    fn test_init_fetches_and_arms_refresh() {
        let app = test_app();
        assert_eq!(
            init(&app),
            vec![Effect::Fetch, Effect::ScheduleRefresh(app.refresh_interval)]
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut app = viewing_app(vec![]);
        assert_eq!(press(&mut app, Key::Char('q')), vec![Effect::Quit]);
        assert!(app.should_quit);

        let mut app = viewing_app(vec![]);
        press(&mut app, Key::Char('a'));
        assert_eq!(press(&mut app, Key::Interrupt), vec![Effect::Quit]);
        assert!(app.should_quit);
    }

    #[test]
    fn test_refresh_sets_loading_and_fetches() {
        let mut app = viewing_app(vec![entry("a", Status::Online)]);
        let effects = press(&mut app, Key::Char('r'));
        assert!(app.is_loading);
        assert!(effects.contains(&Effect::Fetch));
        assert_eq!(message_text(&app), Some("Refreshing data..."));
    }

    #[test]
    fn test_successful_fetch_replaces_list_and_clears_loading() {
        let mut app = viewing_app(vec![entry("old-1", Status::Online), entry("old-2", Status::Online)]);
        app.is_loading = true;

        let effects = update(&mut app, loaded(Ok(vec![entry("new", Status::Offline)])));

        assert!(!app.is_loading);
        assert_eq!(app.entries, vec![entry("new", Status::Offline)]);
        assert_eq!(app.selection.index(), Some(0));
        let message = app.message.as_ref().unwrap();
        assert!(message.text.starts_with("Inventory refreshed at "));
        assert_eq!(message.style, MessageStyle::Success);
        assert!(effects.contains(&Effect::ScheduleMessageExpiry {
            id: message.id,
            after: app.message_timeout
        }));
    }

    #[test]
    fn test_failed_fetch_keeps_list_and_shows_persistent_error() {
        let before = vec![entry("a", Status::Online)];
        let mut app = viewing_app(before.clone());
        press(&mut app, Key::Char('r'));

        let effects = update(
            &mut app,
            loaded(Err(ClientError::Remote {
                status: 500,
                body: String::new(),
            })),
        );

        assert_eq!(app.mode, Mode::Viewing);
        assert!(!app.is_loading);
        assert_eq!(app.entries, before);
        let message = app.message.as_ref().unwrap();
        assert_eq!(message.style, MessageStyle::Error);
        assert_eq!(message.text, "API request failed with status code 500");
        assert!(!message.expires);
        assert!(
            !effects
                .iter()
                .any(|e| matches!(e, Effect::ScheduleMessageExpiry { .. }))
        );
    }

    #[test]
    fn test_add_scenario_emits_single_upsert() {
        let mut app = viewing_app(vec![]);
        press(&mut app, Key::Char('a'));
        type_str(&mut app, "edge-1");
        press(&mut app, Key::Enter);
        type_str(&mut app, "10.0.0.1");
        press(&mut app, Key::Enter);
        type_str(&mut app, "dc-1");
        press(&mut app, Key::Enter);
        press(&mut app, Key::Down);
        press(&mut app, Key::Enter);
        let effects = press(&mut app, Key::Char('y'));

        let upserts: Vec<_> = effects
            .iter()
            .filter_map(|e| match e {
                Effect::Upsert(entry) => Some(entry),
                _ => None,
            })
            .collect();
        assert_eq!(upserts.len(), 1);
        assert_eq!(upserts[0].name, "edge-1");
        assert_eq!(upserts[0].address, "10.0.0.1");
        assert_eq!(upserts[0].location, "dc-1");
        assert_eq!(upserts[0].status, Status::Offline);
        assert_eq!(app.mode, Mode::Viewing);
        assert!(app.is_loading);
        assert_eq!(message_text(&app), Some("Submitting server data..."));
    }

    #[test]
    fn test_cancel_at_any_step_restores_prior_state() {
        let before = vec![entry("a", Status::Online), entry("b", Status::Offline)];
        for commits in 0..=4 {
            let mut app = viewing_app(before.clone());
            press(&mut app, Key::Char('e'));
            let mut effects = Vec::new();
            for _ in 0..commits {
                type_str(&mut app, "x");
                effects.extend(press(&mut app, Key::Enter));
            }
            effects.extend(press(&mut app, Key::Esc));

            assert_eq!(app.mode, Mode::Viewing, "after {commits} commits");
            assert_eq!(app.entries, before);
            assert_eq!(message_text(&app), Some("Cancelled."));
            assert_eq!(app.message.as_ref().unwrap().style, MessageStyle::Cancel);
            assert!(!effects.iter().any(|e| matches!(e, Effect::Upsert(_))));
        }
    }

    #[test]
    fn test_confirm_n_cancels_wizard() {
        let mut app = viewing_app(vec![]);
        press(&mut app, Key::Char('a'));
        for _ in 0..4 {
            press(&mut app, Key::Enter);
        }
        let effects = press(&mut app, Key::Char('n'));
        assert_eq!(app.mode, Mode::Viewing);
        assert!(!effects.iter().any(|e| matches!(e, Effect::Upsert(_))));
        assert_eq!(message_text(&app), Some("Cancelled."));
    }

    #[test]
    fn test_edit_and_delete_need_a_selection() {
        let mut app = viewing_app(vec![]);
        press(&mut app, Key::Char('e'));
        assert_eq!(app.mode, Mode::Viewing);
        press(&mut app, Key::Char('d'));
        assert_eq!(app.mode, Mode::Viewing);
    }

    #[test]
    fn test_edit_copies_selected_entry() {
        let mut app = viewing_app(vec![entry("a", Status::Online), entry("b", Status::Offline)]);
        press(&mut app, Key::Down);
        press(&mut app, Key::Char('e'));
        match &app.mode {
            Mode::Wizard(w) => assert_eq!(*w.draft(), entry("b", Status::Offline)),
            other => panic!("Expected wizard, got {other:?}"),
        }
    }

    #[test]
    fn test_delete_confirm_y_emits_delete() {
        let mut app = viewing_app(vec![entry("a", Status::Online), entry("b", Status::Offline)]);
        press(&mut app, Key::Char('j'));
        press(&mut app, Key::Char('d'));
        assert_eq!(
            app.mode,
            Mode::ConfirmingDelete {
                target: "b".to_string()
            }
        );
        let effects = press(&mut app, Key::Char('Y'));
        assert!(effects.contains(&Effect::Delete("b".to_string())));
        assert_eq!(app.mode, Mode::Viewing);
        assert!(app.is_loading);
        assert_eq!(message_text(&app), Some("Deleting server 'b'..."));
    }

    #[test]
    fn test_delete_confirm_n_cancels_without_call() {
        let mut app = viewing_app(vec![entry("a", Status::Online)]);
        press(&mut app, Key::Char('d'));
        press(&mut app, Key::Char('x'));
        assert!(matches!(app.mode, Mode::ConfirmingDelete { .. }));

        let effects = press(&mut app, Key::Char('n'));
        assert_eq!(app.mode, Mode::Viewing);
        assert_eq!(message_text(&app), Some("Deletion cancelled."));
        assert!(!effects.iter().any(|e| matches!(e, Effect::Delete(_))));
    }

    #[test]
    fn test_help_any_key_returns() {
        let mut app = viewing_app(vec![]);
        press(&mut app, Key::Char('?'));
        assert_eq!(app.mode, Mode::Help);
        let effects = press(&mut app, Key::Char('q'));
        assert_eq!(app.mode, Mode::Viewing);
        assert!(!app.should_quit);
        assert!(!effects.contains(&Effect::Quit));
    }

    #[test]
    fn test_navigation_keys_move_selection() {
        let mut app = viewing_app(vec![
            entry("a", Status::Online),
            entry("b", Status::Online),
            entry("c", Status::Online),
        ]);
        press(&mut app, Key::Down);
        press(&mut app, Key::Down);
        press(&mut app, Key::Down);
        assert_eq!(app.selection.index(), Some(2));
        press(&mut app, Key::Home);
        assert_eq!(app.selection.index(), Some(0));
    }

    #[test]
    fn test_resize_updates_viewport_in_any_mode() {
        let mut app = viewing_app(vec![]);
        press(&mut app, Key::Char('a'));
        update(&mut app, Action::Resize { width: 100, height: 30 });
        assert_eq!(app.viewport.width, 100);
        assert_eq!(app.viewport.height, 30);
        assert!(matches!(app.mode, Mode::Wizard(_)));
    }

    #[test]
    fn test_refresh_tick_fetches_and_rearms() {
        let mut app = viewing_app(vec![]);
        let effects = update(&mut app, Action::RefreshTick);
        assert!(app.is_loading);
        assert_eq!(
            effects,
            vec![Effect::Fetch, Effect::ScheduleRefresh(app.refresh_interval)]
        );
    }

    #[test]
    fn test_background_refresh_leaves_wizard_untouched() {
        let mut app = viewing_app(vec![entry("a", Status::Online)]);
        press(&mut app, Key::Char('a'));
        type_str(&mut app, "edge-1");
        press(&mut app, Key::Enter);
        type_str(&mut app, "10.0");
        let wizard_before = app.mode.clone();

        update(&mut app, Action::RefreshTick);
        update(
            &mut app,
            loaded(Ok(vec![entry("a", Status::Offline), entry("z", Status::Online)])),
        );

        assert_eq!(app.mode, wizard_before);
        assert_eq!(app.entries.len(), 2);
        assert!(!app.is_loading);
        assert_eq!(app.message, None);

        type_str(&mut app, ".0.1");
        press(&mut app, Key::Enter);
        match &app.mode {
            Mode::Wizard(w) => {
                assert_eq!(w.draft().name, "edge-1");
                assert_eq!(w.draft().address, "10.0.0.1");
                assert!(matches!(w.step(), WizardStep::Location(_)));
            }
            other => panic!("Expected wizard, got {other:?}"),
        }
    }

    #[test]
    fn test_message_expires_on_matching_id() {
        let mut app = viewing_app(vec![]);
        update(&mut app, loaded(Ok(vec![])));
        let id = app.message.as_ref().unwrap().id;

        update(&mut app, Action::MessageExpired(id));
        assert_eq!(app.message, None);
    }

    #[test]
    fn test_superseded_message_ignores_stale_expiry() {
        let mut app = viewing_app(vec![entry("a", Status::Online)]);
        update(&mut app, loaded(Ok(vec![entry("a", Status::Online)])));
        let first = app.message.as_ref().unwrap().id;

        press(&mut app, Key::Char('d'));
        let effects = press(&mut app, Key::Esc);
        let second = app.message.as_ref().unwrap().id;
        assert_ne!(first, second);
        assert!(effects.contains(&Effect::ScheduleMessageExpiry {
            id: second,
            after: app.message_timeout
        }));

        update(&mut app, Action::MessageExpired(first));
        assert_eq!(message_text(&app), Some("Deletion cancelled."));
        update(&mut app, Action::MessageExpired(second));
        assert_eq!(app.message, None);
    }

    #[test]
    fn test_keypress_cancels_pending_expiry() {
        let mut app = viewing_app(vec![entry("a", Status::Online)]);
        update(&mut app, loaded(Ok(vec![entry("a", Status::Online)])));
        let id = app.message.as_ref().unwrap().id;

        let effects = press(&mut app, Key::Down);
        assert_eq!(effects, vec![Effect::CancelMessageExpiry]);
        assert!(!app.has_pending_expiry());

        // The timer may still deliver; the message must survive it.
        update(&mut app, Action::MessageExpired(id));
        assert!(message_text(&app).unwrap().starts_with("Inventory refreshed"));

        // Nothing pending any more, so no second cancel.
        assert!(press(&mut app, Key::Down).is_empty());
    }

    #[test]
    fn test_error_in_wizard_is_shown_and_wizard_kept() {
        let mut app = viewing_app(vec![]);
        press(&mut app, Key::Char('a'));
        update(&mut app, loaded(Err(ClientError::Transport("refused".to_string()))));
        assert!(matches!(app.mode, Mode::Wizard(_)));
        assert_eq!(app.message.as_ref().unwrap().style, MessageStyle::Error);
    }
}
