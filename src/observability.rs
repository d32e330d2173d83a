//! Logging setup and structured metric hooks.
//!
//! All library output goes through the `log` facade. `init_logging` wires that
//! facade to `env_logger` for binaries and tests that want to see it; libraries
//! embedding this crate can install their own logger instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Once;

use log::LevelFilter;

use crate::error::Simple8bError;

/// Logs a structured key-value metric line at debug level, only in debug builds.
///
/// The line goes to the `simple8b::metrics` log target so it can be filtered
/// independently, e.g. `RUST_LOG=simple8b::metrics=debug`.
///
/// # Example
/// ```
/// use simple8b::log_metric;
/// let words = 4;
/// log_metric!("event"="encode", "words"=&words);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            $crate::log::debug!(
                target: "simple8b::metrics",
                "SIMPLE8B_METRIC: {{ {} }}",
                parts.join(", ")
            );
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` at `level`, optionally appending to `log_file`.
///
/// Only the first call in a process has any effect; later calls return `Ok(())`.
/// If another logger is already installed this silently leaves it in place.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), Simple8bError> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().append(true).create(true).open(path)?),
        None => None,
    };

    INIT_LOGGER.call_once(move || {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(level);

        // Custom formatter: just print the level, target and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        });

        if let Some(file) = file {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
