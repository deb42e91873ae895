//! Diagnostics logging
//!
//! Fetch failures and discarded responses are reported through the `log`
//! facade and collected by a `tracing-subscriber` fmt subscriber: stderr for
//! one-shot commands, a file while the TUI owns the terminal.

use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

/// Used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVES: &str = "billionaires=info,warn";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub type InitError = Box<dyn Error + Send + Sync + 'static>;

/// Per-target filter built from `RUST_LOG`, e.g. `billionaires=debug,hyper=warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_DIRECTIVES.into())
}

fn timer() -> ChronoLocal {
    ChronoLocal::new(TIMESTAMP_FORMAT.to_string())
}

/// Routes diagnostics to stderr (one-shot commands).
pub fn init_stderr() -> Result<(), InitError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_timer(timer())
        .with_writer(io::stderr)
        .try_init()
}

/// Routes diagnostics to an append-only file (interactive dashboard).
pub fn init_file(path: &Path) -> Result<(), InitError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_timer(timer())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;

    /// Shared in-memory sink so the test can inspect what was written.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(filter: EnvFilter, emit: impl FnOnce()) -> String {
        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, emit);
        String::from_utf8(captured.0.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_directives_apply_per_target() {
        let output = capture(EnvFilter::new("hyper=warn,billionaires=debug"), || {
            tracing::debug!(target: "billionaires::dashboard", "Discarded stale Countries response");
            tracing::debug!(target: "reqwest::connect", "starting new connection");
            tracing::info!(target: "hyper::client", "pooling idle connection");
        });

        assert!(output.contains("Discarded stale Countries response"));
        assert!(!output.contains("starting new connection"));
        assert!(!output.contains("pooling idle connection"));
    }

    #[test]
    fn test_default_directives() {
        let output = capture(EnvFilter::new(DEFAULT_DIRECTIVES), || {
            tracing::debug!(target: "billionaires::api", "GET /statistics");
            tracing::error!(target: "billionaires::dashboard", "Countries panel failed");
            tracing::info!(target: "reqwest::connect", "connected");
            tracing::warn!(target: "hyper::proto", "connection reset");
        });

        assert!(!output.contains("GET /statistics"));
        assert!(output.contains("ERROR"));
        assert!(output.contains("Countries panel failed"));
        assert!(!output.contains("connected"));
        assert!(output.contains("connection reset"));
    }
}
