//! Maps the semantic classes produced by the core to concrete terminal
//! styles. This is the only place colors are chosen.

use ratatui::style::{Color, Modifier, Style};

use crate::core::state::MessageStyle;
use crate::core::table::{CellClass, RowClass};

pub const ACCENT: Color = Color::Rgb(0x56, 0x96, 0xE3);

pub fn header() -> Style {
    Style::default().fg(Color::Indexed(3)).add_modifier(Modifier::BOLD)
}

pub fn spinner() -> Style {
    Style::default().fg(Color::Indexed(12))
}

pub fn hint() -> Style {
    Style::default().fg(Color::Indexed(7)).add_modifier(Modifier::ITALIC)
}

pub fn border() -> Style {
    Style::default().fg(Color::Indexed(6))
}

pub fn column_header() -> Style {
    Style::default()
        .fg(Color::Indexed(3))
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn message(style: MessageStyle) -> Style {
    match style {
        MessageStyle::Info => hint(),
        MessageStyle::Success => Style::default().fg(Color::Indexed(10)),
        MessageStyle::Cancel => Style::default().fg(Color::Indexed(11)),
        MessageStyle::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

pub fn cell(class: CellClass) -> Style {
    match class {
        CellClass::Plain => Style::default(),
        CellClass::Positive => Style::default().fg(Color::Indexed(10)),
        CellClass::Negative => Style::default().fg(Color::Indexed(9)),
        CellClass::Neutral => Style::default().fg(Color::Indexed(11)),
    }
}

pub fn row(class: RowClass) -> Style {
    match class {
        RowClass::Normal => Style::default(),
        RowClass::Striped => Style::default().bg(Color::Indexed(236)),
        RowClass::Selected => Style::default()
            .fg(Color::Indexed(229))
            .bg(Color::Indexed(99))
            .add_modifier(Modifier::BOLD),
    }
}
