use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// Outcome of one load, tagged by `status` in JSON.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SessionViewModel<T>
where
    T: Serialize,
{
    Loading,
    Ready(T),
    Failed { error: String },
}

impl<T: Serialize> SessionViewModel<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            SessionViewModel::Ready(content) => Some(content),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SessionViewModel::Failed { .. })
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardViewModel {
    pub summary: SummaryViewModel,
    pub project_types: ChartViewModel,
    pub linked_styleguides: ChartViewModel,
    pub projects: ProjectTableViewModel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryViewModel {
    pub total_projects: usize,
    pub active_projects: usize,
    pub total_styleguides: usize,
    pub active_styleguides: usize,
    pub unresolved_links: usize,
}

/// Labelled counts drawn as a pie legend (text) or bar panel (TUI)
#[derive(Debug, Clone, Serialize)]
pub struct ChartViewModel {
    pub title: String,
    pub total: usize,
    pub slices: Vec<ChartSliceViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSliceViewModel {
    pub label: String,
    pub count: usize,
    /// Share of `total` in percent, 0 when the chart is empty
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectTableViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_filter: Option<String>,
    pub rows: Vec<ProjectRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRowViewModel {
    pub id: String,
    pub name: String,
    pub platform: String,
    pub workflow_status: Option<String>,
    pub number_of_members: u32,
    pub number_of_screens: u32,
    pub linked_styleguide_id: Option<String>,
    pub linked_styleguide_name: Option<String>,
    pub linked_styleguide_url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl<T> CreateView for SessionViewModel<T>
where
    T: Serialize + CreateView,
{
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::dashboard::SessionStateView;
        match self {
            SessionViewModel::Ready(content) => content.create_view(options),
            SessionViewModel::Loading => Box::new(SessionStateView::Loading),
            SessionViewModel::Failed { .. } => Box::new(SessionStateView::Failed),
        }
    }
}

impl CreateView for DashboardViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::dashboard::DashboardView;
        Box::new(DashboardView::new(self, options))
    }
}

impl CreateView for ChartViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::chart::ChartView;
        Box::new(ChartView::new(self, options))
    }
}

impl CreateView for ProjectTableViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::table::ProjectTableView;
        Box::new(ProjectTableView::new(self, options))
    }
}
