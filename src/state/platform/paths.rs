//! Platform-specific path helpers for configuration and data directories.
//!
//! | Platform | Config Dir | Data Dir |
//! |----------|------------|----------|
//! | Linux | `~/.config/subdash` | `~/.local/share/subdash` |
//! | macOS | `~/Library/Application Support/subdash` | Same as config |
//! | Windows | `%APPDATA%/subdash` | `%LOCALAPPDATA%/subdash` |

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "subdash";

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default log file name.
pub const LOG_FILE_NAME: &str = "subdash.log";

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves application directories, creating them on first use.
#[derive(Debug, Clone)]
pub struct AppPaths {
    app_name: String,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    #[must_use]
    pub fn new() -> Self {
        Self::with_app_name(APP_NAME)
    }

    /// Uses a custom directory name (tests use this to stay isolated).
    #[must_use]
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Returns the configuration directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the local data directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::data_local_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find data directory"))?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns a path to `filename` in the configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined or created.
    pub fn config_file(&self, filename: &str) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(filename))
    }

    /// Returns the path to the log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or created.
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(LOG_FILE_NAME))
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Path to `filename` in the default configuration directory.
///
/// # Errors
///
/// Returns an error if the configuration directory cannot be determined or created.
pub fn config_file(filename: &str) -> Result<PathBuf> {
    AppPaths::new().config_file(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(CONFIG_FILE_NAME, "config.json");
        assert!(LOG_FILE_NAME.ends_with(".log"));
    }

    #[test]
    fn test_config_file_is_inside_app_dir() {
        let paths = AppPaths::with_app_name("subdash-paths-test");
        if let Ok(path) = paths.config_file("session.json") {
            assert!(path.ends_with("subdash-paths-test/session.json"));
        }
    }
}
