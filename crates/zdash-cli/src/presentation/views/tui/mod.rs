//! TUI View Components
//!
//! Ratatui widgets for the interactive dashboard. Each view wraps a
//! reference to a ViewModel and only maps it onto widgets; scroll state
//! and key handling live in `components`.

pub mod chart;
pub mod components;
pub mod screen;
pub mod table;

pub use chart::ChartPanel;
pub use components::{DashboardAction, DashboardComponent, TableComponent};
pub use screen::{FailedView, HelpBarView, LoadingView};
pub use table::ProjectTableWidget;

use crate::presentation::formatters::palette_color;
use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn slice_color(index: usize) -> Color {
    let (r, g, b) = palette_color(index);
    Color::Rgb(r, g, b)
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
