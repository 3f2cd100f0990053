use crate::app::models::Verbosity;
use anyhow::{Context, Result};
use env_logger::{Logger, Target, WriteStyle};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Everything at or above this level reaches the log file.
const FILE_LEVEL: LevelFilter = LevelFilter::Debug;

/// Sends every record to the console logger and the run's log file logger.
struct DualLogger {
    console: Logger,
    file: Logger,
}

impl Log for DualLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.console.enabled(metadata) || self.file.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        self.console.log(record);
        self.file.log(record);
    }

    fn flush(&self) {
        self.console.flush();
        self.file.flush();
    }
}

/// Handle for the logging set up at the start of a run.
#[derive(Debug)]
pub struct LogContext {
    log_file: PathBuf,
}

impl LogContext {
    /// Installs the console and file sinks. Call once, before any conversion work.
    pub fn init(verbosity: Verbosity, log_dir: &Path) -> Result<Self> {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log folder {}", log_dir.display()))?;

        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let log_file = log_dir.join(format!("chalkdust-{stamp}.log"));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

        let console = env_logger::Builder::new()
            .filter_level(LevelFilter::Warn)
            .filter_module(env!("CARGO_CRATE_NAME"), verbosity.level_filter())
            .target(Target::Stdout)
            .format(|buf, record| match record.level() {
                Level::Info => writeln!(buf, "{}", record.args()),
                level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
            })
            .build();

        let file = env_logger::Builder::new()
            .filter_level(LevelFilter::Warn)
            .filter_module(env!("CARGO_CRATE_NAME"), FILE_LEVEL)
            .target(Target::Pipe(Box::new(file)))
            .write_style(WriteStyle::Never)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    record.args()
                )
            })
            .build();

        let max_level = console.filter().max(file.filter());
        log::set_boxed_logger(Box::new(DualLogger { console, file }))
            .context("Logging was already initialized")?;
        log::set_max_level(max_level);

        log::debug!("Logging to {}", log_file.display());
        Ok(Self { log_file })
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Flushes both sinks at the end of a run.
    pub fn finish(self) {
        log::logger().flush();
    }
}
