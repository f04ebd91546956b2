//! Frame composition. Reads `App` and never mutates it.
//!
//! ```text
//! ┌ title bar (title, spacer, status line) ┐
//! │ spacer                                 │
//! │ body: table | wizard | delete prompt   │
//! │ footer key hints                       │
//! └────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::{App, Mode};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HelpOverlay, InventoryTable, TitleBar, WizardForm, title_bar};
use crate::tui::theme;

pub const FOOTER_HINT: &str =
    "'a' add | 'd' delete | 'e' edit | 'r' refresh | '?' help | 'q' quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, _, body_area, footer_area] =
        Layout::vertical([Length(title_bar::HEIGHT), Length(1), Min(0), Length(1)])
            .areas(frame.area());

    TitleBar::new(app.is_loading, tui.spinner_frame, app.message.as_ref())
        .render(frame, title_area);

    match &app.mode {
        Mode::Viewing => {
            draw_table(frame, body_area, app, tui);
            draw_footer(frame, footer_area);
        }
        Mode::Help => {
            draw_table(frame, body_area, app, tui);
            draw_footer(frame, footer_area);
            let area = frame.area();
            HelpOverlay.render(frame, area);
        }
        Mode::Wizard(wizard) => WizardForm::new(wizard).render(frame, body_area),
        Mode::ConfirmingDelete { target } => draw_delete_prompt(frame, body_area, target),
    }
}

fn draw_table(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    InventoryTable {
        entries: &app.entries,
        selection: app.selection,
        state: &mut tui.table_state,
    }
    .render(frame, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    frame.render_widget(Line::styled(FOOTER_HINT, theme::hint()), area);
}

fn draw_delete_prompt(frame: &mut Frame, area: Rect, target: &str) {
    let lines = vec![
        Line::from(vec![
            Span::raw("Are you sure you want to delete '"),
            Span::styled(target.to_string(), theme::header()),
            Span::raw("'?"),
        ]),
        Line::default(),
        Line::styled("Press 'y' to confirm, 'n' or 'Esc' to cancel.", theme::hint()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
