use anyhow::{Result, anyhow};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use zdash_client::{Config, Pagination, ZeplinClient, load_dashboard};
use zdash_engine::{Dashboard, Session};
use zdash_types::OrganizationId;

use super::HandlerContext;
use super::context::runtime;
use crate::presentation::presenters;
use crate::presentation::view_models::{DashboardViewModel, SessionViewModel};
use crate::presentation::{SessionSource, TuiRenderer};

type LoadTask = JoinHandle<zdash_client::Result<Dashboard>>;

/// Session driven by a background load on a tokio runtime.
///
/// The renderer polls between frames, so the screen stays responsive while
/// pages are being fetched.
struct BackgroundSession {
    runtime: Runtime,
    client: ZeplinClient,
    organization: OrganizationId,
    session: Session,
    pending: Option<LoadTask>,
}

impl BackgroundSession {
    fn start(config: &Config) -> Result<Self> {
        let mut source = Self {
            runtime: runtime()?,
            client: ZeplinClient::new(config)?,
            organization: config.workspace_id().clone(),
            session: Session::new(),
            pending: None,
        };
        source.spawn_load();
        Ok(source)
    }

    fn spawn_load(&mut self) {
        let client = self.client.clone();
        let organization = self.organization.clone();
        self.pending = Some(self.runtime.spawn(async move {
            load_dashboard(&client, &organization, Pagination::default()).await
        }));
    }
}

impl SessionSource for BackgroundSession {
    fn poll(&mut self) -> Result<bool> {
        let Some(task) = self.pending.take_if(|task| task.is_finished()) else {
            return Ok(false);
        };

        match self.runtime.block_on(task) {
            Ok(outcome) => self.session.resolve(outcome)?,
            Err(join_error) => self
                .session
                .resolve::<String>(Err(format!("load task failed: {}", join_error)))?,
        }
        Ok(true)
    }

    fn reload(&mut self) -> Result<()> {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
        self.session = std::mem::take(&mut self.session).reload();
        self.spawn_load();
        Ok(())
    }

    fn screen(&self) -> SessionViewModel<DashboardViewModel> {
        presenters::present_screen(&self.session)
    }
}

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    // Configuration errors surface before the terminal switches screens
    let config = ctx.config()?;
    let mut source = BackgroundSession::start(&config)?;

    TuiRenderer::new().run(&mut source)?;

    match source.session.failure() {
        Some(failure) => Err(anyhow!("Failed to load dashboard: {}", failure.message)),
        None => Ok(()),
    }
}
