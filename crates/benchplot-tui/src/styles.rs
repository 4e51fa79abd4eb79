//! Series colors.

use ratatui::style::{Color, Modifier, Style};

/// Colors cycled across series, one per parallelism level.
pub const SERIES_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::Blue,
];

/// Style for the `index`-th series.
#[must_use]
pub fn series_style(index: usize) -> Style {
    Style::default().fg(SERIES_COLORS[index % SERIES_COLORS.len()])
}

#[must_use]
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

#[must_use]
pub fn axis_style() -> Style {
    Style::default().fg(Color::Gray)
}
