pub mod config;
pub mod dashboard;

pub use config::{present_config, present_config_init};
pub use dashboard::{
    present_dashboard, present_linked_styleguides, present_project_types, present_projects,
    present_screen,
};
