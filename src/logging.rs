//! Log setup
//!
//! The terminal belongs to the TUI, so log lines go to `poupar.log` in the
//! data directory instead of stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{PouparPaths, Settings};
use crate::error::{PouparError, PouparResult};

/// Environment variable holding a filter directive that overrides settings
pub const LOG_ENV: &str = "POUPAR_LOG";

/// Build the filter from `POUPAR_LOG`, falling back to the configured level
pub fn build_filter(settings: &Settings) -> EnvFilter {
    filter_from(std::env::var(LOG_ENV).ok().as_deref(), &settings.log_level)
}

/// First valid directive of `env_directive`, then `level`, then "info"
fn filter_from(env_directive: Option<&str>, level: &str) -> EnvFilter {
    env_directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the log file
pub fn init(paths: &PouparPaths, settings: &Settings) -> PouparResult<()> {
    paths.ensure_directories()?;

    let log_path = paths.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| {
            PouparError::Io(format!("Failed to open log file {}: {}", log_path.display(), e))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(settings))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| PouparError::Config(format!("Failed to initialise logging: {}", e)))?;

    tracing::debug!(path = %log_path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back_to_info() {
        assert_eq!(filter_from(None, "poupar=loud").to_string(), "info");
    }

    #[test]
    fn test_env_directive_wins_over_settings() {
        assert_eq!(filter_from(Some("debug"), "warn").to_string(), "debug");
    }

    #[test]
    fn test_invalid_env_directive_uses_settings_level() {
        assert_eq!(filter_from(Some("poupar=loud"), "warn").to_string(), "warn");
    }
}
