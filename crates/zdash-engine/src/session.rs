use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::dashboard::Dashboard;

/// Why a session ended up in `Failed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionFailure {
    pub message: String,
}

impl fmt::Display for SessionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone)]
pub enum SessionState {
    /// Fetches are in flight
    Loading,
    /// Both collections loaded
    Ready(Dashboard),
    /// At least one fetch failed; terminal until a manual reload
    Failed(SessionFailure),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Loading => "loading",
            SessionState::Ready(_) => "ready",
            SessionState::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("session already {from}; only a loading session can be resolved")]
pub struct TransitionError {
    pub from: &'static str,
}

/// Lifecycle of one dashboard load: `Loading -> Ready | Failed`.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Loading,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match &self.state {
            SessionState::Ready(dashboard) => Some(dashboard),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&SessionFailure> {
        match &self.state {
            SessionState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Settle a loading session with the outcome of its fetches.
    pub fn resolve<E: fmt::Display>(
        &mut self,
        outcome: Result<Dashboard, E>,
    ) -> Result<(), TransitionError> {
        if !self.is_loading() {
            return Err(TransitionError {
                from: self.state.name(),
            });
        }

        self.state = match outcome {
            Ok(dashboard) => {
                tracing::info!(
                    projects = dashboard.projects().len(),
                    styleguides = dashboard.styleguides().len(),
                    "session ready"
                );
                SessionState::Ready(dashboard)
            }
            Err(err) => {
                tracing::warn!(error = %err, "session failed");
                SessionState::Failed(SessionFailure {
                    message: err.to_string(),
                })
            }
        };
        Ok(())
    }

    /// Start over from `Loading`, dropping whatever was loaded before
    pub fn reload(self) -> Self {
        tracing::debug!(from = self.state.name(), "session reload");
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        let session = Session::new();
        assert!(session.is_loading());
        assert!(session.dashboard().is_none());
        assert!(session.failure().is_none());
    }

    #[test]
    fn test_loading_to_ready() {
        let mut session = Session::new();
        session
            .resolve::<String>(Ok(Dashboard::new(vec![], vec![])))
            .unwrap();

        assert_eq!(session.state().name(), "ready");
        assert!(session.dashboard().is_some());
    }

    #[test]
    fn test_loading_to_failed() {
        let mut session = Session::new();
        session.resolve(Err("connection reset")).unwrap();

        assert_eq!(session.state().name(), "failed");
        assert_eq!(
            session.failure().map(|f| f.message.as_str()),
            Some("connection reset")
        );
    }

    #[test]
    fn test_failed_is_terminal() {
        let mut session = Session::new();
        session.resolve(Err("timeout")).unwrap();

        let err = session
            .resolve::<String>(Ok(Dashboard::new(vec![], vec![])))
            .unwrap_err();
        assert_eq!(err.from, "failed");
        assert!(session.failure().is_some());
    }

    #[test]
    fn test_ready_is_terminal() {
        let mut session = Session::new();
        session
            .resolve::<String>(Ok(Dashboard::new(vec![], vec![])))
            .unwrap();

        assert!(session.resolve(Err("late failure")).is_err());
        assert!(session.dashboard().is_some());
    }

    #[test]
    fn test_reload_returns_to_loading() {
        let mut session = Session::new();
        session.resolve(Err("boom")).unwrap();

        let session = session.reload();
        assert!(session.is_loading());
    }
}
