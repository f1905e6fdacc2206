use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use zdash_types::OrganizationId;

use crate::zeplin::DEFAULT_API_URL;
use crate::{Error, Result};

pub const ENV_ACCESS_TOKEN: &str = "ZEPLIN_ACCESS_TOKEN";
pub const ENV_WORKSPACE_ID: &str = "ZEPLIN_WORKSPACE_ID";
pub const ENV_API_URL: &str = "ZEPLIN_API_URL";
pub const ENV_CONFIG_PATH: &str = "ZDASH_CONFIG";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// On-disk settings (`config.toml`). Every field is optional; flags and
/// environment variables take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Missing file means defaults; a malformed file is an error
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)?;
        Ok(file)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `<config dir>/zdash/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zdash").join("config.toml"))
    }

    /// Starter file written by `zdash config init`. The token and the
    /// workspace id are only written when a flag or the environment gives
    /// them.
    pub fn template() -> Self {
        Self {
            access_token: None,
            workspace_id: None,
            api_url: Some(DEFAULT_API_URL.to_string()),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Template seeded with whatever flags and the environment already give
    pub fn seeded<E>(overrides: &ConfigOverrides, env: E) -> Self
    where
        E: Fn(&str) -> Option<String>,
    {
        let template = Self::template();
        Self {
            access_token: first_present([overrides.access_token.clone(), env(ENV_ACCESS_TOKEN)]),
            workspace_id: first_present([overrides.workspace_id.clone(), env(ENV_WORKSPACE_ID)]),
            api_url: first_present([overrides.api_url.clone(), env(ENV_API_URL)])
                .or(template.api_url),
            timeout_secs: template.timeout_secs,
        }
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<String>,
    pub access_token: Option<String>,
    pub workspace_id: Option<String>,
    pub api_url: Option<String>,
}

/// Fully resolved client settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    access_token: String,
    workspace_id: OrganizationId,
    api_url: String,
    timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_token", &"<redacted>")
            .field("workspace_id", &self.workspace_id)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn new(access_token: impl Into<String>, workspace_id: impl Into<OrganizationId>) -> Self {
        Self {
            access_token: access_token.into(),
            workspace_id: workspace_id.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve from flags, the process environment and the config file
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Merge sources in priority order: flags, environment, config file,
    /// defaults. Fails before any request is made when the token or the
    /// workspace id is missing.
    pub fn resolve<E>(overrides: &ConfigOverrides, env: E) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        let file = match Self::config_path(overrides, &env) {
            Some(path) => ConfigFile::load_from(&path)?,
            None => ConfigFile::default(),
        };

        let access_token = first_present([
            overrides.access_token.clone(),
            env(ENV_ACCESS_TOKEN),
            file.access_token,
        ])
        .ok_or(Error::MissingSetting {
            name: "access token",
            flag: "token",
            env: ENV_ACCESS_TOKEN,
        })?;

        let workspace_id = first_present([
            overrides.workspace_id.clone(),
            env(ENV_WORKSPACE_ID),
            file.workspace_id,
        ])
        .ok_or(Error::MissingSetting {
            name: "workspace id",
            flag: "workspace",
            env: ENV_WORKSPACE_ID,
        })?;

        let api_url = first_present([overrides.api_url.clone(), env(ENV_API_URL), file.api_url])
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be greater than zero".to_string()));
        }

        Ok(Self {
            access_token,
            workspace_id: OrganizationId::new(workspace_id),
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Explicit path (with tilde expansion), then `ZDASH_CONFIG`, then the
    /// platform default
    pub fn config_path<E>(overrides: &ConfigOverrides, env: &E) -> Option<PathBuf>
    where
        E: Fn(&str) -> Option<String>,
    {
        if let Some(path) = &overrides.config_path {
            return Some(expand_tilde(path));
        }

        if let Some(path) = env(ENV_CONFIG_PATH) {
            return Some(expand_tilde(&path));
        }

        ConfigFile::default_path()
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn workspace_id(&self) -> &OrganizationId {
        &self.workspace_id
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Token with everything but the last four characters masked
    pub fn redacted_token(&self) -> String {
        let chars: Vec<char> = self.access_token.chars().collect();
        if chars.len() <= 8 {
            return "****".to_string();
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("****{}", tail)
    }
}

/// First value that is neither blank nor an unfilled `<placeholder>`
fn first_present<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty() && !is_placeholder(value))
}

fn is_placeholder(value: &str) -> bool {
    value.starts_with('<') && value.ends_with('>')
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
