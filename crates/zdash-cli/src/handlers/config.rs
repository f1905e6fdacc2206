use anyhow::Result;
use std::path::PathBuf;
use zdash_client::{Config, ConfigFile, Error};

use super::HandlerContext;
use crate::presentation::presenters;

fn config_path(ctx: &HandlerContext) -> Option<PathBuf> {
    Config::config_path(&ctx.overrides, &|key: &str| std::env::var(key).ok())
}

pub fn handle_init(ctx: &HandlerContext, force: bool) -> Result<()> {
    let path = config_path(ctx).ok_or_else(|| {
        Error::Config("no config directory on this platform; pass --config <path>".to_string())
    })?;

    let exists = path.exists();
    if exists && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ))
        .into());
    }

    let file = ConfigFile::seeded(&ctx.overrides, |key| std::env::var(key).ok());
    file.save_to(&path)?;
    tracing::info!(path = %path.display(), "wrote config file");

    ctx.render(presenters::present_config_init(&path, exists, &file))
}

pub fn handle_show(ctx: &HandlerContext) -> Result<()> {
    let config = ctx.config()?;
    let path = config_path(ctx);
    ctx.render(presenters::present_config(&config, path.as_deref()))
}
