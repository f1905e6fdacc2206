use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

/// Resolved settings as `config show` prints them
#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub config_path: Option<String>,
    pub config_file_exists: bool,
    pub workspace_id: String,
    pub api_url: String,
    pub timeout_secs: u64,
    /// Always redacted
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub config_path: String,
    pub overwritten: bool,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigView;
        Box::new(ConfigView::new(self, options))
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigInitView;
        Box::new(ConfigInitView::new(self, options))
    }
}
