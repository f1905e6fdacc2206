//! Project table widget for the TUI.

use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::presentation::view_models::ProjectTableViewModel;
use crate::presentation::views::table::{HEADERS, row_cells};

pub struct ProjectTableWidget<'a> {
    model: &'a ProjectTableViewModel,
}

impl<'a> ProjectTableWidget<'a> {
    pub fn new(model: &'a ProjectTableViewModel) -> Self {
        Self { model }
    }

    pub fn build_table(&self) -> Table<'a> {
        let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.model.rows.iter().map(|row| {
            let [name, platform, workflow, members, screens, styleguide] = row_cells(row);
            Row::new(vec![
                Cell::from(name),
                Cell::from(platform),
                Cell::from(workflow),
                Cell::from(members),
                Cell::from(screens),
                Cell::from(styleguide),
            ])
        });

        let title = match &self.model.platform_filter {
            Some(platform) => format!("Active Projects ({}) [{}]", self.model.rows.len(), platform),
            None => format!("Active Projects ({})", self.model.rows.len()),
        };

        Table::new(
            rows,
            [
                Constraint::Fill(3),
                Constraint::Length(10),
                Constraint::Fill(2),
                Constraint::Length(17),
                Constraint::Length(17),
                Constraint::Fill(2),
            ],
        )
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ")
    }
}
