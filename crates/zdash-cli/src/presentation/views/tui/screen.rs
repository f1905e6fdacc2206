//! Full-screen states other than the ready dashboard, plus the help bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::StatusLevel;

use super::status_level_to_color;

pub struct LoadingView;

impl Widget for LoadingView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new("Loading dashboard...")
            .style(Style::default().fg(status_level_to_color(StatusLevel::Info)))
            .block(Block::default().title("Loading").borders(Borders::ALL))
            .render(area, buf);
    }
}

pub struct FailedView<'a> {
    error: &'a str,
}

impl<'a> FailedView<'a> {
    pub fn new(error: &'a str) -> Self {
        Self { error }
    }
}

impl<'a> Widget for FailedView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(StatusLevel::Error);
        let lines = vec![
            Line::from(Span::styled(
                "Failed to load dashboard",
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(self.error, Style::default().fg(color))),
            Line::from(""),
            Line::from("Press [r] to retry or [q] to quit."),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title("Error")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .render(area, buf);
    }
}

pub struct HelpBarView<'a> {
    status: &'a str,
    level: StatusLevel,
}

impl<'a> HelpBarView<'a> {
    pub fn new(status: &'a str, level: StatusLevel) -> Self {
        Self { status, level }
    }
}

impl<'a> Widget for HelpBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key = Style::default().fg(Color::Yellow);
        let line = Line::from(vec![
            Span::styled(
                self.status,
                Style::default().fg(status_level_to_color(self.level)),
            ),
            Span::raw("  "),
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[r]", key),
            Span::raw("eload "),
            Span::styled("[j/k]", key),
            Span::raw("scroll"),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
