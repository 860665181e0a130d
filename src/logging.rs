#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;
use std::io::Write;

/// Environment variable holding the log level (`error` .. `trace`, or `off`).
pub const LOG_ENV_VAR: &str = "TICTACTOE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    // stdout belongs to the board and to `replay --json`
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr(),
                "{} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level from [`LOG_ENV_VAR`], falling back to `default` when unset or invalid.
pub fn level_from_env(default: LevelFilter) -> LevelFilter {
    env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default)
}

/// Install the stderr logger at `level`. Later calls only adjust the level.
pub fn init_logging(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
