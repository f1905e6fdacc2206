mod context;

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod projects;
pub mod tui;

pub use context::HandlerContext;
