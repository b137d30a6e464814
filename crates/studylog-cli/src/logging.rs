//! File logging bootstrap.
//!
//! Logs land in `<data_dir>/logs` and rotate by size. The level comes from
//! `STUDYLOG_LOG` (default `warn`). Initialization failures degrade to no
//! logging rather than aborting the CLI.

use std::path::Path;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

const LOG_FILE_BASENAME: &str = "studylog";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Start file logging under the data directory.
///
/// Keep the returned handle alive for the duration of the process; dropping
/// it flushes and stops the logger.
pub fn init(data_dir: &Path) -> Option<LoggerHandle> {
    let spec = std::env::var("STUDYLOG_LOG").unwrap_or_else(|_| "warn".to_string());

    Logger::try_with_str(&spec)
        .ok()?
        .log_to_file(
            FileSpec::default()
                .directory(data_dir.join("logs"))
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()
        .ok()
}
