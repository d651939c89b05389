//! Path management for pocket-ledger
//!
//! Provides platform-appropriate path resolution for the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `POCKET_LEDGER_DATA_DIR` environment variable (if set)
//! 2. The OS config directory via `directories` (e.g. `~/.config/pocket-ledger`
//!    on Linux, `%APPDATA%\pocket-ledger` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Manages all paths used by pocket-ledger
///
/// Data is laid out per profile: each profile owns a directory under
/// `data/` holding its transaction list and currency preference.
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for all pocket-ledger data
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined for the
    /// current platform.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = if let Ok(custom) = std::env::var("POCKET_LEDGER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory owning a profile's data
    pub fn profile_dir(&self, profile: &str) -> PathBuf {
        self.data_dir().join(profile)
    }

    /// Get the path to a profile's transaction list
    pub fn transactions_file(&self, profile: &str) -> PathBuf {
        self.profile_dir(profile).join("transactions.json")
    }

    /// Get the path to a profile's currency preference
    pub fn currency_file(&self, profile: &str) -> PathBuf {
        self.profile_dir(profile).join("currency.json")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            LedgerError::Config(format!(
                "Failed to create data directory {}: {}",
                self.data_dir().display(),
                e
            ))
        })
    }
}

fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    ProjectDirs::from("", "", "pocket-ledger")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            LedgerError::Config("Could not determine a home directory for this platform".into())
        })
}
