//! Tracing setup for the `slotscan` binary.
//!
//! Logs go to stderr so report output on stdout stays clean for piping.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` overrides `level` when set. With `json`, each event is written
/// as one JSON object per line.
pub fn init_tracing(json: bool, level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    // Exactly one of the two is `Some`; a `None` layer is a no-op.
    let (text, json_lines) = if json {
        (
            None,
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .json(),
            ),
        )
    } else {
        (
            Some(fmt::layer().with_target(false).with_writer(std::io::stderr)),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json_lines)
        .try_init()
        .ok();
}
