//! Tracing subscriber setup for hosts embedding gridclip.
//!
//! The crates only emit events: selection transitions at `trace`, export
//! decisions at `debug` and completed copies at `info`. A host that has no
//! subscriber of its own calls [`init`] once at startup. `RUST_LOG` overrides
//! the configured filter.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
};

/// File name prefix of the daily JSON logs
pub const LOG_FILE_PREFIX: &str = "gridclip.log";

type FilteredRegistry = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync>;

/// How events are written to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleFormat {
    #[default]
    Compact,
    Pretty,
    /// Compact lines routed through the test harness output capture
    Test,
    Off,
}

/// What [`init`] installs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directives used when `RUST_LOG` is unset
    pub default_filter: String,
    pub console: ConsoleFormat,
    /// Directory for daily-rotated JSON logs; `None` disables file output
    pub json_dir: Option<PathBuf>,
    /// Emit open/close events for spans (remote row exports are instrumented)
    pub log_spans: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "warn,gridclip_core=info,gridclip_services=info".to_string(),
            console: ConsoleFormat::Compact,
            json_dir: None,
            log_spans: false,
        }
    }
}

impl LoggingConfig {
    /// Every selection transition, captured per test
    pub fn testing() -> Self {
        Self {
            default_filter: "gridclip_core=trace,gridclip_services=trace".to_string(),
            console: ConsoleFormat::Test,
            json_dir: None,
            log_spans: true,
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    /// Also write JSON lines under `dir`
    pub fn with_json_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.json_dir = Some(dir.into());
        self
    }
}

/// Flushes the JSON file writer when dropped.
///
/// Hold it for as long as events should reach the log file.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_writer: Option<WorkerGuard>,
}

/// Install the global subscriber described by `config`.
///
/// Fails if the filter does not parse, the log directory cannot be created,
/// or a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.default_filter)
            .with_context(|| format!("Invalid log filter: {:?}", config.default_filter))?,
    };

    let span_events = if config.log_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let mut layers: Vec<BoxedLayer> = Vec::new();

    match config.console {
        ConsoleFormat::Compact => layers.push(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(span_events.clone())
                .compact()
                .boxed(),
        ),
        ConsoleFormat::Pretty => layers.push(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(span_events.clone())
                .pretty()
                .boxed(),
        ),
        ConsoleFormat::Test => layers.push(
            fmt::layer()
                .with_test_writer()
                .with_span_events(span_events.clone())
                .compact()
                .boxed(),
        ),
        ConsoleFormat::Off => {}
    }

    let mut file_writer = None;
    if let Some(dir) = &config.json_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        layers.push(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_span_events(span_events)
                .json()
                .with_current_span(true)
                .boxed(),
        );
        file_writer = Some(guard);
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(layers)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    tracing::debug!(
        console = ?config.console,
        json_dir = ?config.json_dir,
        "logging initialized"
    );

    Ok(LoggingGuard {
        _file_writer: file_writer,
    })
}
