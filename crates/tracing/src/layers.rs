use std::path::{Path, PathBuf};

use eyre::eyre;
use rolling_file::{RollingConditionBasic, RollingFileAppender};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{filter::Directive, EnvFilter, Layer, Registry};

use crate::formatter::LogFormat;

/// Flushes the file log writer when dropped.
pub type FileWorkerGuard = WorkerGuard;

pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

const STORAGOOR_LOG_FILE_NAME: &str = "storagoor.log";

/// Noisy transport internals, silenced unless a filter re-enables them.
const DEFAULT_ENV_FILTER_DIRECTIVES: [&str; 3] =
    ["hyper::proto::h1=off", "reqwest=off", "alloy_transport_http=off"];

/// The layers to install, in order.
pub(crate) struct Layers {
    inner: Vec<BoxedLayer<Registry>>,
}

impl Layers {
    pub(crate) fn new() -> Self {
        Self { inner: vec![] }
    }

    pub(crate) fn into_inner(self) -> Vec<BoxedLayer<Registry>> {
        self.inner
    }

    pub(crate) fn stdout(
        &mut self,
        format: LogFormat,
        default_directive: Directive,
        filters: &str,
        color: Option<String>,
    ) -> eyre::Result<()> {
        let filter = build_env_filter(Some(default_directive), filters)?;
        self.inner.push(format.apply(filter, color, None));
        Ok(())
    }

    pub(crate) fn journald(&mut self, filter: &str) -> eyre::Result<()> {
        let filter = build_env_filter(None, filter)?;
        let layer = tracing_journald::layer()
            .map_err(|e| eyre!("failed to connect to journald: {e}"))?
            .with_filter(filter)
            .boxed();
        self.inner.push(layer);
        Ok(())
    }

    pub(crate) fn file(
        &mut self,
        format: LogFormat,
        filter: &str,
        file_info: FileInfo,
    ) -> eyre::Result<FileWorkerGuard> {
        let (writer, guard) = file_info.create_log_writer()?;
        let filter = build_env_filter(None, filter)?;
        self.inner.push(format.apply(filter, None, Some(writer)));
        Ok(guard)
    }
}

/// Where and how large the rotated log files are.
#[derive(Debug, Clone)]
pub struct FileInfo {
    dir: PathBuf,
    file_name: String,
    max_size_bytes: u64,
    max_files: usize,
}

impl FileInfo {
    /// Log to `dir/storagoor.log`, rotating after `max_size_bytes` and keeping `max_files`.
    pub fn new(dir: PathBuf, max_size_bytes: u64, max_files: usize) -> Self {
        Self { dir, file_name: STORAGOOR_LOG_FILE_NAME.to_string(), max_size_bytes, max_files }
    }

    fn create_log_dir(&self) -> eyre::Result<&Path> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|e| {
                eyre!("failed to create log directory {}: {e}", self.dir.display())
            })?;
        }
        Ok(&self.dir)
    }

    fn create_log_writer(&self) -> eyre::Result<(NonBlocking, WorkerGuard)> {
        let log_dir = self.create_log_dir()?;
        let appender = RollingFileAppender::new(
            log_dir.join(&self.file_name),
            RollingConditionBasic::new().max_size(self.max_size_bytes),
            self.max_files,
        )
        .map_err(|e| eyre!("failed to open log file: {e}"))?;

        Ok(tracing_appender::non_blocking(appender))
    }
}

/// Builds an [`EnvFilter`] from `RUST_LOG`, the default transport directives and `directives`.
fn build_env_filter(
    default_directive: Option<Directive>,
    directives: &str,
) -> eyre::Result<EnvFilter> {
    let env_filter = match default_directive {
        Some(directive) => EnvFilter::builder().with_default_directive(directive).from_env_lossy(),
        None => EnvFilter::builder().from_env_lossy(),
    };

    DEFAULT_ENV_FILTER_DIRECTIVES
        .into_iter()
        .chain(directives.split(',').map(str::trim).filter(|d| !d.is_empty()))
        .try_fold(env_filter, |env_filter, directive| {
            Ok::<_, eyre::Report>(env_filter.add_directive(directive.parse::<Directive>()?))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_env_filter() {
        assert!(build_env_filter(None, "").is_ok());
        let directive = "debug".parse::<Directive>().expect("invalid directive");
        assert!(build_env_filter(Some(directive), "storagoor=trace, alloy=warn").is_ok());
    }

    #[test]
    fn test_build_env_filter_rejects_bad_directive() {
        assert!(build_env_filter(None, "storagoor=notalevel").is_err());
    }

    #[test]
    fn test_file_info_creates_log_dir() {
        let dir = std::env::temp_dir().join("storagoor_test_logs");
        let _ = std::fs::remove_dir_all(&dir);

        let info = FileInfo::new(dir.clone(), 1024, 2);
        let (_writer, _guard) = info.create_log_writer().expect("failed to create writer");

        assert!(dir.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
