use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt};

/// Targets rendered by [`layer`]: the workspace crates plus HTTP request traces.
pub const TARGET_PREFIXES: &[&str] = &[
    "member_qa_backend",
    "api",
    "qa_engine",
    "messages_client",
    "tower_http",
];

/// Workspace crates whose level is raised by [`env_filter_with_level`].
const OWN_CRATES: &[&str] = &["member_qa_backend", "api", "qa_engine", "messages_client"];

/// RFC3339 UTC timer implemented via `chrono`.
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        // Keep timestamps compact: no fractional seconds, Z-suffix
        let s = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

fn is_own_target(target: &str) -> bool {
    TARGET_PREFIXES.iter().any(|p| {
        target
            .strip_prefix(p)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    })
}

/// Formatting layer that renders only events from [`TARGET_PREFIXES`].
///
/// - RFC3339 UTC timestamps
/// - Compact single-line format with `file:line` and target
/// - Span close events (duration of instrumented handlers)
/// - ANSI colors only when stdout is a terminal
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let use_ansi = io::stdout().is_terminal();

    let only_ours = filter::filter_fn(|meta| is_own_target(meta.target()));

    let format = fmt::format()
        .compact()
        .with_timer(ChronoRfc3339Utc)
        .with_level(true)
        .with_target(true)
        .with_source_location(true);

    fmt::layer()
        .with_ansi(use_ansi)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .event_format(format)
        .with_filter(only_ours)
}

/// Level directives (`api=debug`, `qa_engine=debug`, ...) for the workspace crates.
pub fn level_directives(level: Level) -> Vec<Directive> {
    let level = level.as_str().to_lowercase();
    OWN_CRATES
        .iter()
        .filter_map(|krate| format!("{krate}={level}").parse().ok())
        .collect()
}

/// `EnvFilter` from `RUST_LOG` (or `default`), with `level` applied to the
/// workspace crates on top.
pub fn env_filter_with_level(default: &str, level: Level) -> EnvFilter {
    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    level_directives(level)
        .into_iter()
        .fold(base, |f, d| f.add_directive(d))
}
