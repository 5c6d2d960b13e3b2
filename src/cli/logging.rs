//! Module setting up the application's logging.

use std::env;

use env_logger::Builder;
use log::{LevelFilter, SetLoggerError};


/// Environment variable with logging directives that override the verbosity.
const LOG_VAR: &'static str = "RUST_LOG";


/// Initialize logging for the application.
///
/// `verbosity` is the count of -v flags passed (negative for -q flags).
pub fn init(verbosity: isize) -> Result<(), SetLoggerError> {
    let level = match verbosity {
        v if v >= 2 => LevelFilter::Trace,
        1 => LevelFilter::Debug,
        0 => LevelFilter::Info,
        -1 => LevelFilter::Warn,
        _ => LevelFilter::Error,
    };

    let mut builder = Builder::new();
    builder.filter(None, level);
    if let Ok(directives) = env::var(LOG_VAR) {
        builder.parse(&directives);
    }
    builder.try_init()
}
