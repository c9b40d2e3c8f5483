//! Log output for check runs.
//!
//! Nothing is installed unless `LAMREF_LOG` or `RUST_LOG` is set.
//! `LAMREF_LOG` wins when both are present. Setting it to an empty value,
//! `1` or `on` selects [`DEFAULT_DIRECTIVES`]; anything else is read as an
//! `EnvFilter` directive list:
//!
//! ```bash
//! LAMREF_LOG=1 host-tool Foo.java
//! LAMREF_LOG="lamref_checker=trace" LAMREF_LOG_FORMAT=tree host-tool Foo.java
//! ```
//!
//! `LAMREF_LOG_FORMAT` picks `text` (default), `tree` or `json`. Output goes
//! to stderr.

use tracing::Subscriber;
use tracing_subscriber::layer::Layer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Directives used when `LAMREF_LOG` is only switched on.
pub const DEFAULT_DIRECTIVES: &str = "warn,lamref=info,lamref_checker=info,lamref_binder=warn";

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a `LAMREF_LOG_FORMAT` value. Unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Resolved logging setup for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Resolve settings from the raw variable values. `None` when logging is
    /// off.
    pub fn from_vars(
        lamref_log: Option<&str>,
        rust_log: Option<&str>,
        format: Option<&str>,
    ) -> Option<LogSettings> {
        let directives = match (lamref_log, rust_log) {
            (Some(value), _) => match value.trim() {
                "" | "1" | "on" => DEFAULT_DIRECTIVES.to_string(),
                other => other.to_string(),
            },
            (None, Some(value)) => value.trim().to_string(),
            (None, None) => return None,
        };
        Some(LogSettings {
            directives,
            format: format.map(LogFormat::parse).unwrap_or_default(),
        })
    }

    pub fn from_env() -> Option<LogSettings> {
        let lamref_log = std::env::var("LAMREF_LOG").ok();
        let rust_log = std::env::var("RUST_LOG").ok();
        let format = std::env::var("LAMREF_LOG_FORMAT").ok();
        Self::from_vars(lamref_log.as_deref(), rust_log.as_deref(), format.as_deref())
    }

    /// Invalid directives are dropped rather than rejected.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::builder().parse_lossy(&self.directives)
    }
}

fn output_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    match format {
        LogFormat::Text => fmt::layer().with_writer(std::io::stderr).boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Tree => tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_deferred_spans(true)
            .boxed(),
    }
}

/// Install the global subscriber described by `settings`.
///
/// Returns `false` when another global subscriber is already in place.
pub fn init_tracing_with(settings: &LogSettings) -> bool {
    Registry::default()
        .with(settings.filter())
        .with(output_layer(settings.format))
        .try_init()
        .is_ok()
}

/// Install the global subscriber from the environment.
///
/// Returns whether a subscriber was installed by this call.
pub fn init_tracing() -> bool {
    match LogSettings::from_env() {
        Some(settings) => init_tracing_with(&settings),
        None => false,
    }
}
