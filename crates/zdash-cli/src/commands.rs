use anyhow::Result;
use is_terminal::IsTerminal;

use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use crate::logging::init_logging;
use crate::presentation::view_models::DisplayOptions;

pub fn run(cli: Cli) -> Result<()> {
    let overrides = cli.config_overrides();
    let command = cli.command.unwrap_or(Commands::Dashboard);

    init_logging(cli.log_level, matches!(command, Commands::Tui));

    let options = display_options(cli.no_color);
    let ctx = HandlerContext::new(cli.format.into(), options, overrides);
    tracing::debug!(format = %cli.format, color = options.enable_color, "starting");

    match command {
        Commands::Dashboard => handlers::dashboard::handle(&ctx),
        Commands::Projects { csv, platform } => handlers::projects::handle(&ctx, csv, platform),
        Commands::Types => handlers::charts::handle_types(&ctx),
        Commands::Links => handlers::charts::handle_links(&ctx),
        Commands::Tui => handlers::tui::handle(&ctx),
        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::handle_init(&ctx, force),
            ConfigCommand::Show => handlers::config::handle_show(&ctx),
        },
    }
}

/// Color only on a terminal, unless `--no-color` or `NO_COLOR` says otherwise
fn display_options(no_color: bool) -> DisplayOptions {
    let stdout = std::io::stdout();
    let enable_color =
        !no_color && std::env::var_os("NO_COLOR").is_none() && stdout.is_terminal();
    let width = terminal_size::terminal_size().map(|(w, _)| w.0 as usize);

    DisplayOptions {
        enable_color,
        width,
    }
}
