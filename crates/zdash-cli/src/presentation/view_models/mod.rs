pub mod common;
pub mod config;
pub mod dashboard;
pub mod result;

use std::fmt;

pub use common::{DisplayOptions, Guidance, OutputFormat, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use dashboard::{
    ChartSliceViewModel, ChartViewModel, DashboardViewModel, ProjectRowViewModel,
    ProjectTableViewModel, SessionViewModel, SummaryViewModel,
};
pub use result::CommandResultViewModel;

/// Bridge from a ViewModel to the text view that lays it out
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
