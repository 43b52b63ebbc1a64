//! Logger setup (flexi_logger behind the `log` facade).

use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};

use crate::config::LoggingSettings;
use crate::error::Result;

/// Start the global logger.
///
/// `RUST_LOG` overrides `settings.level`. With `settings.directory` set, logs go
/// to rotating files there (warnings are still echoed to stderr); otherwise stderr.
///
/// The returned handle must be kept alive for the lifetime of the program.
pub fn init(settings: &LoggingSettings) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(&settings.level)?;

    let handle = match &settings.directory {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .rotate(
                Criterion::Size(1_000_000),
                Naming::Timestamps,
                Cleanup::KeepLogFiles(3),
            )
            .duplicate_to_stderr(Duplicate::Warn)
            .start()?,
        None => logger.log_to_stderr().start()?,
    };

    Ok(handle)
}
