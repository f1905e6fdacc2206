use anyhow::Result;
use serde::Serialize;
use tokio::runtime::Runtime;
use zdash_client::{Config, ConfigOverrides, Pagination, ZeplinClient, load_session};
use zdash_engine::Session;

use crate::AlreadyReported;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, OutputFormat,
};
use crate::presentation::{ConsoleRenderer, Renderer};

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: DisplayOptions,
    pub overrides: ConfigOverrides,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, options: DisplayOptions, overrides: ConfigOverrides) -> Self {
        Self {
            format,
            options,
            overrides,
        }
    }

    /// Render a view model using the configured format and display options
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format, self.options);
        renderer.render(view_model)
    }

    pub fn config(&self) -> Result<Config> {
        Ok(Config::load(&self.overrides)?)
    }

    /// Resolve the config and run one load to completion.
    ///
    /// Configuration problems are returned as errors before anything is
    /// fetched; fetch failures end up in the returned session as `Failed`.
    pub fn load_session(&self) -> Result<Session> {
        let config = self.config()?;
        let client = ZeplinClient::new(&config)?;
        let runtime = runtime()?;

        let mut session = Session::new();
        runtime.block_on(load_session(
            &mut session,
            &client,
            config.workspace_id(),
            Pagination::default(),
        ))?;
        Ok(session)
    }
}

pub fn runtime() -> Result<Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

/// Exit status for a session whose outcome has already been rendered
pub fn finish(session: &Session) -> Result<()> {
    match session.failure() {
        Some(_) => Err(AlreadyReported.into()),
        None => Ok(()),
    }
}
