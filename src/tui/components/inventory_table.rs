//! # InventoryTable Component
//!
//! Renders the projected `TableView`. All styling decisions were already
//! made by `core::table::project`; this component only maps classes through
//! the theme. Scrolling is left to ratatui's `TableState`, which keeps the
//! selected row visible.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};

use crate::core::table::{COLUMNS, Selection, project};
use crate::inventory::InventoryEntry;
use crate::tui::component::Component;
use crate::tui::theme;

pub const EMPTY_TEXT: &str = "No servers in inventory. Press 'a' to add one.";

pub struct InventoryTable<'a> {
    pub entries: &'a [InventoryEntry],
    pub selection: Selection,
    pub state: &'a mut TableState,
}

impl Component for InventoryTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.entries.is_empty() {
            frame.render_widget(Paragraph::new(EMPTY_TEXT).style(theme::hint()), area);
            return;
        }

        let view = project(self.entries, self.selection.index());

        let header = Row::new(COLUMNS.iter().map(|(title, _)| Cell::from(*title)))
            .style(theme::column_header());
        let rows = view.rows.into_iter().map(|row| {
            Row::new(
                row.cells
                    .into_iter()
                    .map(|cell| Cell::from(cell.text).style(theme::cell(cell.class))),
            )
            .style(theme::row(row.class))
        });
        let widths = COLUMNS.iter().map(|(_, width)| Constraint::Length(*width));

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .block(Block::bordered().border_style(theme::border()));

        self.state.select(self.selection.index());
        frame.render_stateful_widget(table, area, self.state);
    }
}
