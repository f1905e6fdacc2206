use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::{or_placeholder, pad, truncate};
use crate::presentation::view_models::{DisplayOptions, ProjectRowViewModel, ProjectTableViewModel};

pub const HEADERS: [&str; 6] = [
    "Name",
    "Platform",
    "Workflow Status",
    "Number of Members",
    "Number of Screens",
    "Linked Styleguide",
];

const MAX_NAME: usize = 40;
const MAX_TEXT: usize = 24;
const MIN_NAME: usize = 12;
const GAP: &str = "  ";

/// Cell text for one row, in header order
pub fn row_cells(row: &ProjectRowViewModel) -> [String; 6] {
    [
        row.name.clone(),
        row.platform.clone(),
        or_placeholder(row.workflow_status.as_deref()).to_string(),
        row.number_of_members.to_string(),
        row.number_of_screens.to_string(),
        or_placeholder(row.linked_styleguide_name.as_deref()).to_string(),
    ]
}

// --------------------------------------------------------
// Project Table View
// --------------------------------------------------------

pub struct ProjectTableView<'a> {
    data: &'a ProjectTableViewModel,
    options: DisplayOptions,
}

impl<'a> ProjectTableView<'a> {
    pub fn new(data: &'a ProjectTableViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn column_widths(&self, cells: &[[String; 6]]) -> [usize; 6] {
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        widths[0] = widths[0].min(MAX_NAME);
        for idx in [1, 2, 5] {
            widths[idx] = widths[idx].min(MAX_TEXT);
        }

        // Give the name column up whatever does not fit the terminal
        if let Some(columns) = self.options.width {
            let total: usize = widths.iter().sum::<usize>() + GAP.len() * (widths.len() - 1);
            if total > columns {
                let excess = total - columns;
                widths[0] = widths[0].saturating_sub(excess).max(MIN_NAME.min(widths[0]));
            }
        }

        widths
    }

    fn aligned_cells(cells: &[String; 6], widths: &[usize; 6]) -> Vec<String> {
        cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (cell, width))| {
                let text = truncate(cell, *width);
                // Counts are right-aligned under their headers
                if idx == 3 || idx == 4 {
                    format!("{:>width$}", text, width = *width)
                } else {
                    pad(&text, *width)
                }
            })
            .collect()
    }
}

impl<'a> fmt::Display for ProjectTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.rows.is_empty() {
            match &self.data.platform_filter {
                Some(platform) => writeln!(f, "No active projects on platform '{}'.", platform)?,
                None => writeln!(f, "No active projects.")?,
            }
            return Ok(());
        }

        let cells: Vec<[String; 6]> = self.data.rows.iter().map(row_cells).collect();
        let widths = self.column_widths(&cells);

        let mut header = Self::aligned_cells(&HEADERS.map(str::to_string), &widths);
        if self.options.enable_color {
            header = header.iter().map(|h| h.bold().to_string()).collect();
        }
        writeln!(f, "{}", header.join(GAP).trim_end())?;

        let rule_width = widths.iter().sum::<usize>() + GAP.len() * (widths.len() - 1);
        writeln!(f, "{}", "─".repeat(rule_width))?;

        for row in &cells {
            writeln!(f, "{}", Self::aligned_cells(row, &widths).join(GAP).trim_end())?;
        }

        Ok(())
    }
}
