//! TUI Renderer for the interactive dashboard
//!
//! Owns the terminal and the UI state. Data comes from a `SessionSource`,
//! which the handler implements on top of the load session; the renderer
//! only ever sees ViewModels.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::presentation::view_models::{DashboardViewModel, SessionViewModel};
use crate::presentation::views::tui::{DashboardAction, DashboardComponent};

const TICK: Duration = Duration::from_millis(100);

/// Where the renderer gets its screens from
pub trait SessionSource {
    /// Advance an in-flight load. Returns true when the screen changed.
    fn poll(&mut self) -> Result<bool>;

    /// Start a fresh load, discarding the current data
    fn reload(&mut self) -> Result<()>;

    fn screen(&self) -> SessionViewModel<DashboardViewModel>;
}

/// Raw mode plus alternate screen, restored on drop so an error or panic
/// never leaves the terminal unusable
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

pub struct TuiRenderer {
    component: DashboardComponent,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            component: DashboardComponent::new(),
        }
    }

    pub fn run<S: SessionSource>(mut self, source: &mut S) -> Result<()> {
        let mut guard = TerminalGuard::enter()?;
        self.event_loop(&mut guard.terminal, source)
    }

    fn event_loop<S: SessionSource>(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        source: &mut S,
    ) -> Result<()> {
        let mut screen = source.screen();

        loop {
            if source.poll()? {
                screen = source.screen();
            }

            terminal.draw(|f| {
                let area = f.area();
                self.component.render(f, area, &screen);
            })?;

            if !event::poll(TICK)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match self.component.handle_input(key, &screen) {
                Some(DashboardAction::Quit) => break,
                Some(DashboardAction::Reload) => {
                    tracing::debug!("reload requested");
                    source.reload()?;
                    screen = source.screen();
                }
                None => {}
            }
        }

        Ok(())
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}
