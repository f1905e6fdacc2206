use owo_colors::OwoColorize;
use std::fmt;

use super::chart::ChartView;
use super::table::ProjectTableView;
use crate::presentation::view_models::{DashboardViewModel, DisplayOptions};

// --------------------------------------------------------
// Dashboard View
// --------------------------------------------------------

pub struct DashboardView<'a> {
    data: &'a DashboardViewModel,
    options: DisplayOptions,
}

impl<'a> DashboardView<'a> {
    pub fn new(data: &'a DashboardViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for DashboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = &self.data.summary;
        let line = format!(
            "{} projects ({} active), {} styleguides ({} active)",
            summary.total_projects,
            summary.active_projects,
            summary.total_styleguides,
            summary.active_styleguides
        );
        if self.options.enable_color {
            writeln!(f, "{}", line.dimmed())?;
        } else {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;

        write!(f, "{}", ChartView::new(&self.data.project_types, self.options))?;
        writeln!(f)?;
        write!(f, "{}", ChartView::new(&self.data.linked_styleguides, self.options))?;
        writeln!(f)?;
        write!(f, "{}", ProjectTableView::new(&self.data.projects, self.options))
    }
}

/// Content of a session that is not ready; the badge carries the details
pub enum SessionStateView {
    Loading,
    Failed,
}

impl fmt::Display for SessionStateView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionStateView::Loading => writeln!(f, "Loading..."),
            SessionStateView::Failed => writeln!(f, "No data was loaded."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{
        ChartSliceViewModel, ChartViewModel, ProjectTableViewModel, SummaryViewModel,
    };

    #[test]
    fn test_sections_in_order() {
        let chart = |title: &str| ChartViewModel {
            title: title.to_string(),
            total: 1,
            slices: vec![ChartSliceViewModel {
                label: "web".to_string(),
                count: 1,
                percent: 100.0,
            }],
        };
        let data = DashboardViewModel {
            summary: SummaryViewModel {
                total_projects: 2,
                active_projects: 1,
                total_styleguides: 0,
                active_styleguides: 0,
                unresolved_links: 0,
            },
            project_types: chart("Project Types"),
            linked_styleguides: chart("Projects with Linked Styleguides"),
            projects: ProjectTableViewModel {
                platform_filter: None,
                rows: vec![],
            },
        };

        let text = DashboardView::new(&data, DisplayOptions::default()).to_string();
        assert!(text.starts_with("2 projects (1 active), 0 styleguides (0 active)\n"));
        let types = text.find("Project Types").unwrap();
        let links = text.find("Projects with Linked Styleguides").unwrap();
        let table = text.find("No active projects.").unwrap();
        assert!(types < links && links < table);
    }
}
