use std::fmt;

use crate::presentation::formatters::or_placeholder;
use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel, DisplayOptions};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, _options: DisplayOptions) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let file = match (&self.data.config_path, self.data.config_file_exists) {
            (Some(path), true) => path.clone(),
            (Some(path), false) => format!("{} (not found)", path),
            (None, _) => or_placeholder(None).to_string(),
        };

        writeln!(f, "{:<14} {}", "Config file:", file)?;
        writeln!(f, "{:<14} {}", "Workspace:", self.data.workspace_id)?;
        writeln!(f, "{:<14} {}", "API URL:", self.data.api_url)?;
        writeln!(f, "{:<14} {}s", "Timeout:", self.data.timeout_secs)?;
        writeln!(f, "{:<14} {}", "Access token:", self.data.access_token)
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel, _options: DisplayOptions) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Wrote {}", self.data.config_path)
    }
}
