//! Test logging for the engine crates.
//!
//! Unit tests install it from the engine's `lib.rs`, integration tests from
//! `tests/common`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

const DEFAULT_DIRECTIVES: &str = "warn";

/// Directive added by `DUDO_TRACE_AI=1`: the AI policies log every draw at
/// `trace`.
const AI_TRACE_DIRECTIVE: &str = "dudo_engine::ai=trace";

/// Build the filter directives from an environment source.
///
/// Precedence: `TEST_LOG`, then `RUST_LOG`, then `warn`. `DUDO_TRACE_AI`
/// appends the AI trace directive to whichever base won.
pub fn directives_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    let base = lookup("TEST_LOG")
        .or_else(|| lookup("RUST_LOG"))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string());

    match lookup("DUDO_TRACE_AI").as_deref().map(str::trim) {
        Some("1") | Some("true") => format!("{base},{AI_TRACE_DIRECTIVE}"),
        _ => base,
    }
}

/// Install the test subscriber once per process. Safe to call from every test.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let directives = directives_from(|key| std::env::var(key).ok());
        let filter = EnvFilter::try_new(&directives)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        // Captured per test, no timestamps.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(true)
            .try_init();
    });
}
