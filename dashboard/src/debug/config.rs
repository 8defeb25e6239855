//! Logging configuration derived from the application config

use std::path::PathBuf;

use lib_core::config::Config;

/// File name (before the date suffix) of the rolling log.
pub const LOG_FILE_NAME: &str = "dashboard.log";

const DEFAULT_FILTER: &str = "dashboard=info,lib_api=info,lib_auth=info,lib_core=info,warn";
const DEBUG_FILTER: &str = "dashboard=debug,lib_api=debug,lib_auth=debug,lib_core=debug,info";

/// Logging system configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Also write logs to stderr
    pub mirror_stderr: bool,
}

impl LogConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            log_dir: config.log_dir.clone(),
            log_level: if config.debug { DEBUG_FILTER } else { DEFAULT_FILTER }.to_string(),
            mirror_stderr: config.debug,
        }
    }

    /// Log file prefix; the daily appender adds a `.<date>` suffix.
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_raises_level_and_mirrors() {
        let mut config = Config::default();
        let quiet = LogConfig::from_config(&config);
        assert_eq!(quiet.log_level, DEFAULT_FILTER);
        assert!(!quiet.mirror_stderr);

        config.debug = true;
        config.log_dir = PathBuf::from("/tmp/dash-logs");
        let verbose = LogConfig::from_config(&config);
        assert_eq!(verbose.log_level, DEBUG_FILTER);
        assert!(verbose.mirror_stderr);
        assert_eq!(verbose.log_file(), PathBuf::from("/tmp/dash-logs/dashboard.log"));
    }
}
