//! Tracing setup for storagoor.
//!
//! A [`StoragoorTracer`] collects the layers to install (stdout, journald, a rolling log file)
//! and [`Tracer::init`] installs them as the global subscriber.

// re-export tracing crates
pub use tracing;
pub use tracing_subscriber;

pub use formatter::LogFormat;
pub use layers::{FileInfo, FileWorkerGuard};

use layers::Layers;
use tracing_subscriber::{filter::Directive, layer::SubscriberExt, util::SubscriberInitExt};

mod formatter;
mod layers;

/// Installs a global tracing subscriber.
pub trait Tracer {
    /// Initialize the subscriber. Keep the returned guard alive while logging to a file, dropping
    /// it flushes and stops the background writer.
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>>;
}

/// Format, filters and color of a single output layer.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// Creates a new [`LayerInfo`].
    ///
    /// `default_directive` applies when `RUST_LOG` is unset, `filters` is a comma separated list
    /// of extra directives and `color` is `always`, `auto` or `never` (`None` disables ANSI).
    pub fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }
}

impl Default for LayerInfo {
    fn default() -> Self {
        Self {
            format: LogFormat::Terminal,
            default_directive: "info".to_string(),
            filters: String::new(),
            color: Some("always".to_string()),
        }
    }
}

/// The tracer used by the storagoor binary.
#[derive(Debug, Clone, Default)]
pub struct StoragoorTracer {
    stdout: LayerInfo,
    journald: Option<String>,
    file: Option<(LayerInfo, FileInfo)>,
}

impl StoragoorTracer {
    /// A tracer logging to stdout only, at `info`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the stdout layer.
    pub fn with_stdout(mut self, config: LayerInfo) -> Self {
        self.stdout = config;
        self
    }

    /// Also logs to journald, with the given filter.
    pub fn with_journald(mut self, filter: String) -> Self {
        self.journald = Some(filter);
        self
    }

    /// Also logs to a size-rotated file.
    pub fn with_file(mut self, config: LayerInfo, file_info: FileInfo) -> Self {
        self.file = Some((config, file_info));
        self
    }
}

impl Tracer for StoragoorTracer {
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>> {
        let mut layers = Layers::new();

        layers.stdout(
            self.stdout.format,
            self.stdout.default_directive.parse::<Directive>()?,
            &self.stdout.filters,
            self.stdout.color,
        )?;

        if let Some(filter) = self.journald {
            layers.journald(&filter)?;
        }

        let file_guard = match self.file {
            Some((config, file_info)) => {
                Some(layers.file(config.format, &config.filters, file_info)?)
            }
            None => None,
        };

        // a subscriber may already be installed, e.g. by a test harness
        let _ = tracing_subscriber::registry().with(layers.into_inner()).try_init();
        Ok(file_guard)
    }
}
