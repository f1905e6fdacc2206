use clap::{Parser, Subcommand};
use zdash_client::ConfigOverrides;

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "zdash")]
#[command(about = "Dashboard for a Zeplin workspace: project types, linked styleguides and active projects", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Config file (default: <config dir>/zdash/config.toml)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Zeplin personal access token")]
    pub token: Option<String>,

    #[arg(long, global = true, help = "Workspace (organization) id")]
    pub workspace: Option<String>,

    #[arg(long, global = true, help = "Base URL of the Zeplin API")]
    pub api_url: Option<String>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            access_token: self.token.clone(),
            workspace_id: self.workspace.clone(),
            api_url: self.api_url.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show both charts and the active project table (default)")]
    Dashboard,

    #[command(about = "List active projects with their linked styleguides")]
    Projects {
        #[arg(long, help = "Write CSV instead of a table")]
        csv: bool,

        #[arg(long, help = "Only show projects on this platform")]
        platform: Option<String>,
    },

    #[command(about = "Show the project types chart (all projects, any status)")]
    Types,

    #[command(about = "Show how many active projects link a styleguide")]
    Links,

    #[command(about = "Open the interactive dashboard")]
    Tui,

    #[command(about = "Manage the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Write a starter config file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },

    #[command(about = "Print the resolved configuration (token redacted)")]
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "zdash",
            "projects",
            "--platform",
            "ios",
            "--format",
            "json",
            "--workspace",
            "ws-1",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert_eq!(cli.config_overrides().workspace_id.as_deref(), Some("ws-1"));
        match cli.command {
            Some(Commands::Projects { csv, platform }) => {
                assert!(!csv);
                assert_eq!(platform.as_deref(), Some("ios"));
            }
            _ => panic!("expected projects command"),
        }
    }

    #[test]
    fn test_no_command_parses() {
        let cli = Cli::try_parse_from(["zdash"]).unwrap();
        assert!(cli.command.is_none());
    }
}
