//! Platform-aware detection of the Unity Circles data directory.
//!
//! Lookup order:
//! 1. UNITY_CIRCLES_DATA_DIR environment variable (explicit override)
//! 2. Platform-specific data directory via `dirs` crate
//! 3. Fallback paths for common configurations
//!
//! Returns Result, never silently falls back to a wrong path.

use crate::error::session::SessionStoreError;

use std::env;
use std::path::PathBuf;

use log::{debug, info, warn};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "UNITY_CIRCLES_DATA_DIR";

/// Directory name under the platform data directory.
const APP_DIR_NAME: &str = "unity-circles";

/// Name of the persisted session file.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Resolved Unity Circles data paths.
#[derive(Debug, Clone)]
pub struct ClientPaths {
    /// Base data directory (e.g., ~/.local/share/unity-circles on Linux).
    pub data_dir: PathBuf,
    /// Path to session.json.
    pub session_file: PathBuf,
    /// How the path was determined.
    pub source: PathSource,
}

impl ClientPaths {
    /// Directory for log files.
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

/// How the path was determined (for debugging/logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// Set via UNITY_CIRCLES_DATA_DIR environment variable.
    EnvVar,
    /// Detected via platform-specific XDG/AppData/Library path.
    PlatformDefault,
    /// Linux fallback (~/.local/share/unity-circles).
    LinuxFallback,
    /// macOS fallback (~/Library/Application Support/unity-circles).
    MacOSFallback,
    /// Windows fallback (%APPDATA%/unity-circles).
    WindowsFallback,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSource::EnvVar => write!(f, "{DATA_DIR_ENV_VAR}"),
            PathSource::PlatformDefault => write!(f, "platform default"),
            PathSource::LinuxFallback => write!(f, "Linux fallback"),
            PathSource::MacOSFallback => write!(f, "macOS fallback"),
            PathSource::WindowsFallback => write!(f, "Windows fallback"),
        }
    }
}

/// Detect the Unity Circles data paths.
///
/// # Errors
/// Returns `SessionStoreError::PathDetection` if no valid path can be
/// determined.
///
/// # Platform Behavior
/// - **Linux**: `$XDG_DATA_HOME/unity-circles` or `~/.local/share/unity-circles`
/// - **macOS**: `~/Library/Application Support/unity-circles`
/// - **Windows**: `%APPDATA%/unity-circles`
pub fn detect_client_paths() -> Result<ClientPaths, SessionStoreError> {
    // 1. Check environment variable override
    if let Ok(custom_dir) = env::var(DATA_DIR_ENV_VAR) {
        let data_dir = PathBuf::from(&custom_dir);
        let session_file = data_dir.join(SESSION_FILE_NAME);

        info!("Using {DATA_DIR_ENV_VAR} override: {:?}", data_dir);

        return Ok(ClientPaths {
            data_dir,
            session_file,
            source: PathSource::EnvVar,
        });
    }

    // 2. Try platform-specific detection via dirs crate
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_DIR_NAME);
        let session_file = app_dir.join(SESSION_FILE_NAME);

        debug!("Platform data dir: {:?}", app_dir);

        return Ok(ClientPaths {
            data_dir: app_dir,
            session_file,
            source: PathSource::PlatformDefault,
        });
    }

    // 3. Platform-specific fallbacks
    #[cfg(target_os = "linux")]
    {
        if let Ok(home) = env::var("HOME") {
            let data_dir = PathBuf::from(home).join(".local/share").join(APP_DIR_NAME);
            let session_file = data_dir.join(SESSION_FILE_NAME);

            warn!("Using Linux fallback path: {:?}", data_dir);

            return Ok(ClientPaths {
                data_dir,
                session_file,
                source: PathSource::LinuxFallback,
            });
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = env::var("HOME") {
            let data_dir = PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR_NAME);
            let session_file = data_dir.join(SESSION_FILE_NAME);

            warn!("Using macOS fallback path: {:?}", data_dir);

            return Ok(ClientPaths {
                data_dir,
                session_file,
                source: PathSource::MacOSFallback,
            });
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = env::var("APPDATA") {
            let data_dir = PathBuf::from(appdata).join(APP_DIR_NAME);
            let session_file = data_dir.join(SESSION_FILE_NAME);

            warn!("Using Windows fallback path: {:?}", data_dir);

            return Ok(ClientPaths {
                data_dir,
                session_file,
                source: PathSource::WindowsFallback,
            });
        }
    }

    Err(SessionStoreError::path_detection(
        "No data directory could be determined (no platform dir, no HOME)",
    ))
}
