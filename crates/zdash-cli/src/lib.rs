mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

use std::fmt;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;

/// Marker for failures whose details are already on screen, so `main` only
/// sets the exit status
#[derive(Debug)]
pub struct AlreadyReported;

impl fmt::Display for AlreadyReported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "already reported")
    }
}

impl std::error::Error for AlreadyReported {}

/// 2 when zdash is not configured, 1 for everything else
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<zdash_client::Error>() {
        Some(e) if e.is_config() => 2,
        _ => 1,
    }
}
