pub mod chart;
pub mod config;
pub mod dashboard;
pub mod table;
pub mod tui;

pub use chart::ChartView;
pub use config::{ConfigInitView, ConfigView};
pub use dashboard::{DashboardView, SessionStateView};
pub use table::ProjectTableView;
