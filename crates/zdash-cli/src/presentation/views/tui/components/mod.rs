//! TUI Components
//!
//! Components own UI state (scroll position, selection) and key handling,
//! and render through the views in the parent module.

pub mod dashboard;
pub mod table;

pub use dashboard::{DashboardAction, DashboardComponent};
pub use table::TableComponent;
