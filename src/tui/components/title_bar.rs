//! # TitleBar Component
//!
//! The header block above the main view:
//!
//! ```text
//! Server Inventory Dashboard
//!
//! ⠹ Loading...                 <- while a request is in flight
//! Inventory refreshed at ...   <- otherwise, the transient message if any
//! ```
//!
//! Purely presentational. The spinner frame is owned by the event loop and
//! passed in as a prop, so the component itself stays stateless.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};

use crate::core::state::TransientMessage;
use crate::tui::component::Component;
use crate::tui::theme;

pub const TITLE: &str = "Server Inventory Dashboard";
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Rows the title bar occupies: title, spacer, status line.
pub const HEIGHT: u16 = 3;

pub struct TitleBar<'a> {
    pub is_loading: bool,
    pub spinner_frame: usize,
    pub message: Option<&'a TransientMessage>,
}

impl<'a> TitleBar<'a> {
    pub fn new(is_loading: bool, spinner_frame: usize, message: Option<&'a TransientMessage>) -> Self {
        Self {
            is_loading,
            spinner_frame,
            message,
        }
    }

    fn status_line(&self) -> Line<'a> {
        if self.is_loading {
            let frame = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            Line::from(vec![
                Span::styled(frame, theme::spinner()),
                Span::raw(" "),
                Span::styled("Loading...", theme::hint()),
            ])
        } else if let Some(message) = self.message {
            Line::styled(message.text.clone(), theme::message(message.style))
        } else {
            Line::default()
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, _, status_area] = Layout::vertical([Constraint::Length(1); 3]).areas(area);

        frame.render_widget(Line::styled(TITLE, theme::header()), title_area);
        frame.render_widget(self.status_line(), status_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::MessageStyle;
    use crate::test_support::buffer_lines;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(mut title_bar: TitleBar) -> Vec<String> {
        let backend = TestBackend::new(60, HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                title_bar.render(f, area);
            })
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_loading_shows_spinner_instead_of_message() {
        let message = TransientMessage {
            id: 1,
            text: "Refreshing data...".to_string(),
            style: MessageStyle::Info,
            expires: false,
        };
        let lines = render(TitleBar::new(true, 2, Some(&message)));

        assert!(lines[0].starts_with(TITLE));
        assert!(lines[2].starts_with("⠹ Loading..."));
        assert!(!lines[2].contains("Refreshing"));
    }

    #[test]
    fn test_idle_shows_message() {
        let message = TransientMessage {
            id: 1,
            text: "Deletion cancelled.".to_string(),
            style: MessageStyle::Cancel,
            expires: true,
        };
        let lines = render(TitleBar::new(false, 0, Some(&message)));
        assert!(lines[2].starts_with("Deletion cancelled."));
    }

    #[test]
    fn test_idle_without_message_is_blank() {
        let lines = render(TitleBar::new(false, 0, None));
        assert!(lines[2].trim().is_empty());
    }
}
