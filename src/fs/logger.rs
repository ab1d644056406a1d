//! A [`log`] backend that writes to the terminal and to the SD card.
//!
//! Each line has the form `LEVEL [uptime] target - message`, for example:
//!
//! ```text
//! INFO [1m 3s 20ms] punchbot::lift - Lift calibrated at 0 deg (punch 500, touch 1500)
//! DEBUG [1m 9s 540ms] punchbot::puncher - Puncher running: true
//! ```
//!
//! The file is truncated every time the logger starts, so it only ever holds
//! the most recent run. Without an SD card the file is skipped and lines
//! still reach the terminal.

use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::Duration,
};

use humantime::format_duration;
use log::{LevelFilter, Metadata, Record, SetLoggerError};

/// File every log line is copied to.
pub const LOG_FILE: &str = "log.txt";

/// Writes log lines to stdout and, when available, [`LOG_FILE`].
pub struct BotLogger {
    file: Mutex<Option<BufWriter<File>>>,
}

impl BotLogger {
    fn open(path: &str) -> Self {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .ok()
            .map(BufWriter::new);

        Self {
            file: Mutex::new(file),
        }
    }

    fn with_file(&self, f: impl FnOnce(&mut BufWriter<File>)) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(writer) = guard.as_mut() {
                f(writer);
            }
        }
    }
}

impl log::Log for BotLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record, uptime());
        print!("{}", line);
        self.with_file(|writer| {
            let _ = writer.write_all(line.as_bytes());
        });
    }

    fn flush(&self) {
        self.with_file(|writer| {
            let _ = writer.flush();
        });
    }
}

static LOGGER: OnceLock<BotLogger> = OnceLock::new();

/// Installs the logger as the global [`log`] backend.
///
/// Messages below `level` are discarded.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| BotLogger::open(LOG_FILE));
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Renders one record, including the trailing newline.
pub fn format_line(record: &Record, uptime: Duration) -> String {
    format!(
        "{} [{}] {} - {}\n",
        record.level(),
        format_duration(uptime),
        record.target(),
        record.args()
    )
}

#[cfg(target_os = "vexos")]
fn uptime() -> Duration { vexide::time::user_uptime() }

// Off the Brain there is no program clock; use a fixed stamp.
#[cfg(not(target_os = "vexos"))]
fn uptime() -> Duration { Duration::from_millis(123432) }
