//! # WizardForm Component
//!
//! One screen per wizard step: a text box for name/address/location, a
//! picker for status, and a summary on the confirm screen. The terminal
//! cursor is placed inside the text box while a text step is active.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::text_field::TextField;
use crate::core::wizard::{Wizard, WizardKind, WizardStep};
use crate::inventory::Status;
use crate::tui::component::Component;
use crate::tui::theme;

const INPUT_WIDTH: u16 = 50;

pub struct WizardForm<'a> {
    pub wizard: &'a Wizard,
}

impl<'a> WizardForm<'a> {
    pub fn new(wizard: &'a Wizard) -> Self {
        Self { wizard }
    }

    fn heading(&self) -> String {
        let verb = match self.wizard.kind() {
            WizardKind::Add => "Adding new server",
            WizardKind::Edit => "Editing server",
        };
        match self.wizard.step_number() {
            Some(n) => format!("{verb} (Step {n} of 4)"),
            None => "Confirm entry?".to_string(),
        }
    }

    fn render_text_step(&self, frame: &mut Frame, area: Rect, label: &str, field: &TextField) {
        let [prompt_area, input_area, _, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(Line::from(format!("Enter {label}:")), prompt_area);

        let input_area = Rect {
            width: input_area.width.min(INPUT_WIDTH),
            ..input_area
        };
        let inner_width = input_area.width.saturating_sub(2) as usize;
        // Scroll horizontally so the cursor cell stays inside the box.
        let column = field.cursor_column();
        let mut skipped_bytes = 0;
        let mut skipped_width = 0;
        for c in field.value()[..field.cursor()].chars() {
            if column - skipped_width < inner_width {
                break;
            }
            skipped_bytes += c.len_utf8();
            skipped_width += c.width().unwrap_or(0);
        }
        let visible = &field.value()[skipped_bytes..];

        frame.render_widget(
            Paragraph::new(visible).block(Block::bordered().border_style(theme::border())),
            input_area,
        );
        frame.set_cursor_position(Position::new(
            input_area.x + 1 + (column - skipped_width) as u16,
            input_area.y + 1,
        ));

        frame.render_widget(
            Line::styled("Press Enter to continue, Esc to cancel.", theme::hint()),
            hint_area,
        );
    }

    fn render_status_step(&self, frame: &mut Frame, area: Rect, highlighted: usize) {
        let mut lines = vec![Line::from("Select a Status:"), Line::default()];
        for (i, status) in Status::CHOICES.iter().enumerate() {
            if i == highlighted {
                lines.push(Line::styled(
                    format!("> {status}"),
                    Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
                ));
            } else {
                lines.push(Line::from(format!("  {status}")));
            }
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            "Use ↑/↓ to choose, Enter to select, Esc to cancel.",
            theme::hint(),
        ));
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_confirm(&self, frame: &mut Frame, area: Rect) {
        let draft = self.wizard.draft();
        let field = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("  {label:<10}"), theme::column_header()),
                Span::raw(value),
            ])
        };
        let lines = vec![
            field("Name:", draft.name.clone()),
            field("IP:", draft.address.clone()),
            field("Location:", draft.location.clone()),
            field("Status:", draft.status.to_string()),
            Line::default(),
            Line::styled(
                "Press 'y' to submit, 'n' or 'Esc' to cancel.",
                theme::hint(),
            ),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Component for WizardForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [heading_area, _, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(Line::styled(self.heading(), theme::header()), heading_area);

        match self.wizard.step() {
            WizardStep::Name(field) => self.render_text_step(frame, body_area, "Name", field),
            WizardStep::Address(field) => {
                self.render_text_step(frame, body_area, "IP Address", field)
            }
            WizardStep::Location(field) => {
                self.render_text_step(frame, body_area, "Location", field)
            }
            WizardStep::Status { highlighted } => {
                self.render_status_step(frame, body_area, *highlighted)
            }
            WizardStep::Confirm => self.render_confirm(frame, body_area),
        }
    }
}
