use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::println;

static LOGGER: SerialLogger = SerialLogger;

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Writes every record to COM1, one line each.
struct SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let lvl = record.level();
        let lvl_color = match lvl {
            Level::Error => "160",
            Level::Warn => "172",
            Level::Info => "47",
            Level::Debug => "25",
            Level::Trace => "103",
        };
        let module = record.module_path().unwrap_or_default();
        println!("\x1b[38;5;{lvl_color}m{lvl:5}\x1b[0m [{module}]: {}", record.args());
    }

    fn flush(&self) {}
}
