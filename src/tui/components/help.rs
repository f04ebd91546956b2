//! # Help Overlay
//!
//! Key reference drawn over the inventory table. Any key closes it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph};

use crate::tui::component::Component;
use crate::tui::theme;

const BINDINGS: [(&str, &str); 9] = [
    ("↑/k, ↓/j", "Move selection"),
    ("PgUp, PgDn", "Move by a page"),
    ("Home/g, End/G", "Jump to first / last"),
    ("a", "Add a server"),
    ("e", "Edit the selected server"),
    ("d", "Delete the selected server"),
    ("r", "Refresh now"),
    ("?", "Show this help"),
    ("q, Ctrl-C", "Quit"),
];

pub struct HelpOverlay;

impl Component for HelpOverlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 60, area);
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_style(theme::border())
            .title(" Help ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Press any key to close ").centered())
            .padding(Padding::horizontal(1));

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("{keys:<16}"), theme::column_header()),
                    Span::raw(*action),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
