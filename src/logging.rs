// src/logging.rs

use crate::config::Config;
use crate::errors::ChatResult;
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use std::path::PathBuf;

/// Starts the file logger. The returned handle must stay alive for the
/// lifetime of the process, dropping it flushes and stops logging.
///
/// Output goes to a file because the TUI owns stdout. `RUST_LOG` takes
/// precedence over the configured level.
pub fn init_logging(config: &Config) -> ChatResult<LoggerHandle> {
    let directory = log_directory(config);

    let handle = Logger::try_with_env_or_str(&config.log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(directory)
                .basename("quipbot")
                .suppress_timestamp(),
        )
        .append()
        .write_mode(WriteMode::BufferAndFlush)
        .format(flexi_logger::detailed_format)
        .start()?;

    Ok(handle)
}

fn log_directory(config: &Config) -> PathBuf {
    config.log_dir.clone().unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("quipbot")
            .join("logs")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_log_dir_wins() {
        let mut config = Config::default();
        config.log_dir = Some(PathBuf::from("/tmp/quipbot-test-logs"));
        assert_eq!(
            log_directory(&config),
            PathBuf::from("/tmp/quipbot-test-logs")
        );
    }

    #[test]
    fn default_log_dir_is_namespaced() {
        let dir = log_directory(&Config::default());
        assert!(dir.ends_with("quipbot/logs"));
    }
}
