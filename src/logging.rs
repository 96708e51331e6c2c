//! Debug log backend
//!
//! The TUI owns the terminal, so log records are appended to a file instead
//! of being printed.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

/// Default debug log location
pub const DEFAULT_LOG_FILE: &str = "debug.log";

/// A `log` backend writing one line per record to a file
pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
    start: Instant,
}

impl FileLogger {
    /// Open `path` in append mode
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or opened.
    pub fn open<P: AsRef<Path>>(path: P, level: LevelFilter) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
            level,
            start: Instant::now(),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        if let Ok(mut file) = self.file.lock() {
            // A failed write has nowhere to be reported
            let _ = writeln!(
                file,
                "[{elapsed:>10.3}s {:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install a [`FileLogger`] as the global logger
///
/// # Errors
/// Returns an error if the file cannot be opened or a logger is already set.
pub fn init_file_logger<P: AsRef<Path>>(path: P, level: LevelFilter) -> anyhow::Result<()> {
    let logger = FileLogger::open(path, level)?;
    install(logger, level)?;
    Ok(())
}

fn install(logger: FileLogger, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
