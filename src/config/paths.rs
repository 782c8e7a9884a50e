//! Path management for MY POUPAR+
//!
//! Provides XDG-compliant path resolution for settings, client storage and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `POUPAR_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/poupar` or `~/.config/poupar`
//! 3. Windows: `%APPDATA%\poupar`

use std::path::PathBuf;

use crate::error::PouparError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "POUPAR_DATA_DIR";

/// Manages all paths used by POUPAR+
#[derive(Debug, Clone)]
pub struct PouparPaths {
    base_dir: PathBuf,
}

impl PouparPaths {
    /// Create a new PouparPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PouparError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PouparPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/poupar/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted client flags (cookie consent, theme)
    pub fn client_storage_file(&self) -> PathBuf {
        self.base_dir.join("client_storage.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("poupar.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PouparError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PouparError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if POUPAR+ has been configured (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PouparError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| PouparError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("poupar"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PouparError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PouparError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("poupar"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PouparPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.client_storage_file(),
            temp_dir.path().join("client_storage.json")
        );
        assert_eq!(paths.log_file(), temp_dir.path().join("poupar.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("poupar");
        let paths = PouparPaths::with_base_dir(base.clone());

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
