//! Cart engine configuration.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_DATA_DIR` - directory for the file-backed storage slot
//!   (default: `./data`)
//! - `CART_STORAGE_KEY` - name of the durable slot (default: `cartStore`)

use std::path::PathBuf;

use thiserror::Error;

/// Default directory for file-backed storage.
const DEFAULT_DATA_DIR: &str = "./data";

/// The slot key the storefront has always used for the cart.
const DEFAULT_STORAGE_KEY: &str = "cartStore";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured storage key is empty.
    #[error("storage key cannot be empty")]
    EmptyStorageKey,
}

/// Cart engine configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory holding the file-backed storage slots.
    pub data_dir: PathBuf,
    /// Name of the durable slot the cart snapshot lives under.
    pub storage_key: String,
}

impl CartConfig {
    /// Create a configuration with an explicit data directory and slot key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorageKey`] if `storage_key` is empty.
    pub fn new(
        data_dir: impl Into<PathBuf>,
        storage_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let storage_key = storage_key.into();
        if storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(Self {
            data_dir: data_dir.into(),
            storage_key,
        })
    }

    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `CART_STORAGE_KEY` is set to an empty string.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(
            get_env_or_default("CART_DATA_DIR", DEFAULT_DATA_DIR),
            get_env_or_default("CART_STORAGE_KEY", DEFAULT_STORAGE_KEY),
        )
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
