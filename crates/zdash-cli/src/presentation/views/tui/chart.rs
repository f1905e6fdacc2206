//! Chart panel: one bordered block per chart, a colored bar per slice.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::formatters::{filled_cells, format_percent};
use crate::presentation::view_models::ChartViewModel;

use super::slice_color;

pub struct ChartPanel<'a> {
    model: &'a ChartViewModel,
}

impl<'a> ChartPanel<'a> {
    pub fn new(model: &'a ChartViewModel) -> Self {
        Self { model }
    }

    fn lines(&self, inner_width: u16) -> Vec<Line<'a>> {
        if self.model.total == 0 {
            return vec![Line::from(Span::styled(
                "No data",
                Style::default().fg(Color::DarkGray),
            ))];
        }

        let label_width = self
            .model
            .slices
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0);
        let count_width = self.model.total.to_string().len();
        // label, gaps, count and " (100.0%)"
        let fixed = label_width + 2 + 1 + count_width + 9;
        let bar_width = (inner_width as usize).saturating_sub(fixed).max(1);

        self.model
            .slices
            .iter()
            .enumerate()
            .map(|(index, slice)| {
                let filled = filled_cells(slice.count, self.model.total, bar_width);
                Line::from(vec![
                    Span::raw(format!("{:<label_width$}  ", slice.label)),
                    Span::styled("█".repeat(filled), Style::default().fg(slice_color(index))),
                    Span::styled(
                        "░".repeat(bar_width - filled),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(format!(
                        " {:>count_width$} ({})",
                        slice.count,
                        format_percent(slice.percent)
                    )),
                ])
            })
            .collect()
    }
}

impl<'a> Widget for ChartPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.model.title.as_str())
            .borders(Borders::ALL);
        let inner = block.inner(area);
        let lines = self.lines(inner.width);
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
