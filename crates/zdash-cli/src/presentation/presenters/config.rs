use std::path::Path;
use zdash_client::{Config, ConfigFile};

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub fn present_config(
    config: &Config,
    config_path: Option<&Path>,
) -> CommandResultViewModel<ConfigViewModel> {
    let config_file_exists = config_path.is_some_and(Path::exists);

    let content = ConfigViewModel {
        config_path: config_path.map(|p| p.display().to_string()),
        config_file_exists,
        workspace_id: config.workspace_id().to_string(),
        api_url: config.api_url().to_string(),
        timeout_secs: config.timeout().as_secs(),
        access_token: config.redacted_token(),
    };

    let mut result = CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success("Configuration resolved"));

    if !config_file_exists {
        result = result.with_suggestion(
            Guidance::new("Settings came from flags or the environment; persist them with")
                .with_command("zdash config init"),
        );
    }

    result
}

pub fn present_config_init(
    config_path: &Path,
    overwritten: bool,
    written: &ConfigFile,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let label = if overwritten {
        "Config file overwritten"
    } else {
        "Config file created"
    };

    let complete = written.access_token.is_some() && written.workspace_id.is_some();
    let guidance = if complete {
        Guidance::new("Token and workspace id saved; view the dashboard with")
    } else {
        Guidance::new("Add access_token and workspace_id to this file, then run")
    };

    CommandResultViewModel::new(ConfigInitViewModel {
        config_path: config_path.display().to_string(),
        overwritten,
    })
    .with_badge(StatusBadge::success(label))
    .with_suggestion(guidance.with_command("zdash dashboard"))
}
