#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "NAVAL_BATTLE_LOG";

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Parse a level filter, falling back to `warn` for missing or invalid values.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Initialize logging with a level taken from the `NAVAL_BATTLE_LOG` environment variable.
/// Log lines go to stderr so they do not interleave with the board on stdout.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
