//! # Entry Wizard
//!
//! Guided, step-by-step entry of one server:
//!
//! ```text
//! Name ──Enter──▶ Address ──Enter──▶ Location ──Enter──▶ Status ──Enter──▶ Confirm ──y──▶ Submit
//!   │                │                  │                   │                 │
//!   └──── Esc ───────┴──────────────────┴───────────────────┴──── Esc/n ──────┴──▶ Cancelled
//! ```
//!
//! Each text step owns its live `TextField`; the value is trimmed and written
//! into the draft only when Enter commits it. `Submit` is only reachable from
//! `Confirm`, so every field has been committed once before it can fire.

use crate::core::action::Key;
use crate::core::text_field::TextField;
use crate::inventory::{InventoryEntry, Status};

/// Whether the wizard creates a new entry or rewrites an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardKind {
    Add,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    Name(TextField),
    Address(TextField),
    Location(TextField),
    /// Index into `Status::CHOICES`.
    Status { highlighted: usize },
    Confirm,
}

/// What the session controller should do after a key reached the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Still collecting input.
    Pending,
    /// User backed out; the draft is discarded.
    Cancelled,
    /// User confirmed; carries the fully populated entry.
    Submit(InventoryEntry),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    kind: WizardKind,
    draft: InventoryEntry,
    step: WizardStep,
}

impl Wizard {
    pub fn add() -> Self {
        Self {
            kind: WizardKind::Add,
            draft: InventoryEntry::default(),
            step: WizardStep::Name(TextField::default()),
        }
    }

    /// Starts editing a copy of `entry`; each step is seeded with its current value.
    pub fn edit(entry: InventoryEntry) -> Self {
        let step = WizardStep::Name(TextField::with_value(entry.name.clone()));
        Self {
            kind: WizardKind::Edit,
            draft: entry,
            step,
        }
    }

    pub fn kind(&self) -> WizardKind {
        self.kind
    }

    pub fn draft(&self) -> &InventoryEntry {
        &self.draft
    }

    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    /// 1-based position among the four input steps; `None` on the confirm screen.
    pub fn step_number(&self) -> Option<u8> {
        match self.step {
            WizardStep::Name(_) => Some(1),
            WizardStep::Address(_) => Some(2),
            WizardStep::Location(_) => Some(3),
            WizardStep::Status { .. } => Some(4),
            WizardStep::Confirm => None,
        }
    }

    pub fn handle_key(&mut self, key: Key) -> WizardOutcome {
        match &mut self.step {
            WizardStep::Name(field) | WizardStep::Address(field) | WizardStep::Location(field) => {
                match key {
                    Key::Esc => WizardOutcome::Cancelled,
                    Key::Enter => {
                        let value = field.value().trim().to_string();
                        self.commit_text(value);
                        WizardOutcome::Pending
                    }
                    other => {
                        field.handle_key(other);
                        WizardOutcome::Pending
                    }
                }
            }
            WizardStep::Status { highlighted } => {
                match key {
                    Key::Esc => return WizardOutcome::Cancelled,
                    Key::Up | Key::Char('k') => *highlighted = highlighted.saturating_sub(1),
                    Key::Down | Key::Char('j') => {
                        *highlighted = (*highlighted + 1).min(Status::CHOICES.len() - 1)
                    }
                    Key::Enter => {
                        self.draft.status = Status::CHOICES[*highlighted].clone();
                        self.step = WizardStep::Confirm;
                    }
                    _ => {}
                }
                WizardOutcome::Pending
            }
            WizardStep::Confirm => match key {
                Key::Char('y' | 'Y') => WizardOutcome::Submit(self.draft.clone()),
                Key::Char('n' | 'N') | Key::Esc => WizardOutcome::Cancelled,
                _ => WizardOutcome::Pending,
            },
        }
    }

    /// Writes the committed text into the draft and opens the next step.
    fn commit_text(&mut self, value: String) {
        self.step = match self.step {
            WizardStep::Name(_) => {
                self.draft.name = value;
                WizardStep::Address(TextField::with_value(self.draft.address.clone()))
            }
            WizardStep::Address(_) => {
                self.draft.address = value;
                WizardStep::Location(TextField::with_value(self.draft.location.clone()))
            }
            WizardStep::Location(_) => {
                self.draft.location = value;
                let highlighted = Status::CHOICES
                    .iter()
                    .position(|s| *s == self.draft.status)
                    .unwrap_or(0);
                WizardStep::Status { highlighted }
            }
            WizardStep::Status { .. } | WizardStep::Confirm => return,
        };
    }
}
