//! POS configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MEDISYNC_DATA_DIR` - Directory for cart snapshots (default: `./data`)
//! - `MEDISYNC_INVENTORY` - Inventory catalog path (default: `<data_dir>/inventory.json`)

use std::path::PathBuf;

/// POS application configuration.
#[derive(Debug, Clone)]
pub struct PosConfig {
    /// Directory holding the persisted cart snapshot.
    pub data_dir: PathBuf,
    /// Path to the medicine inventory catalog.
    pub inventory_path: PathBuf,
}

impl PosConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Every variable has a default, so loading cannot fail.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("MEDISYNC_DATA_DIR", "./data"));
        let inventory_path = std::env::var("MEDISYNC_INVENTORY")
            .map_or_else(|_| data_dir.join("inventory.json"), PathBuf::from);

        Self {
            data_dir,
            inventory_path,
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
