use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::types::LogLevel;

/// Crates whose events are shown at the `--log-level` default
const OWN_TARGETS: &[&str] = &["zdash_cli", "zdash_client", "zdash_engine"];

/// Default directive when `RUST_LOG` is not set
pub fn default_directive(level: LogLevel) -> String {
    OWN_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber. Events go to stderr so stdout stays
/// machine-readable; `RUST_LOG` overrides `--log-level`.
///
/// While the interactive dashboard owns the terminal, only `RUST_LOG` can turn
/// logging on, since stray stderr lines would corrupt the screen.
pub fn init_logging(level: LogLevel, interactive: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if interactive {
            EnvFilter::new("off")
        } else {
            EnvFilter::new(default_directive(level))
        }
    });

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // A second init (tests that run handlers in-process) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
