//! Configuration for the plugin
//!
//! A versioned TOML document with two recognized fields, kept under the
//! harness config directory:
//!
//! ```toml
//! Version = "1.1.0"
//! "Mount Pusher To Driver Seat" = false
//! ```
//!
//! Loading fails soft: a missing file produces defaults, missing fields fall
//! back to their defaults, and the file is rewritten after every load so it
//! always reflects the current schema. Stored versions older than the
//! running plugin are migrated on load.

mod loader;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use loader::{configs_dir, plugin_config_path};

use crate::PLUGIN_VERSION;

/// Versions sorting before this baseline lose their custom settings during
/// migration and restart from defaults.
const MIGRATION_BASELINE: &str = "1.0.0";

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write the config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Plugin configuration.
///
/// Field names in the persisted document match the plugin's historical
/// config format, so existing files keep working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version the file was written with.
    ///
    /// Rewritten to [`PLUGIN_VERSION`] after every successful load. A file
    /// with no version at all deserializes as empty, which sorts before the
    /// migration baseline and resets the config.
    #[serde(rename = "Version", default)]
    pub version: String,

    /// Teleport the pushing player into the boat's driver seat after
    /// righting it
    #[serde(rename = "Mount Pusher To Driver Seat", default)]
    pub mount_pusher_to_driver_seat: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: PLUGIN_VERSION.to_string(),
            mount_pusher_to_driver_seat: false,
        }
    }
}

impl Config {
    /// Bring a stored config up to the running plugin version.
    ///
    /// Versions are compared ordinally, matching how the plugin has always
    /// compared them. Pre-baseline versions reset to defaults; anything
    /// newer keeps its fields. Returns `true` when a migration ran.
    fn migrate(&mut self) -> bool {
        if self.version.as_str() >= PLUGIN_VERSION {
            return false;
        }

        tracing::warn!("Config changes detected! Updating...");

        let from = self.version.clone();
        if self.version.as_str() < MIGRATION_BASELINE {
            *self = Self::default();
        }
        self.version = PLUGIN_VERSION.to_string();

        let from_label = if from.is_empty() { "<none>" } else { from.as_str() };
        tracing::warn!(
            "Config update complete! Updated from version {} to {}",
            from_label,
            PLUGIN_VERSION
        );
        true
    }
}

/// Loads and persists the plugin configuration at a fixed path.
///
/// The store is handed a base directory by the hosting harness instead of
/// deriving one from the process environment, so tests and embedders control
/// where files land.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store rooted at the harness base directory
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            path: plugin_config_path(base_dir.as_ref()),
        }
    }

    /// The config file path this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config, creating defaults if the file is missing.
    ///
    /// Stored versions older than the running plugin are migrated, and the
    /// file is rewritten unconditionally so its version stamp and schema are
    /// always current.
    pub fn load(&self) -> ConfigResult<Config> {
        let mut config = if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::debug!("Loaded config from {:?}", self.path);
            config
        } else {
            tracing::info!("No config found, creating default at {:?}", self.path);
            Config::default()
        };

        config.migrate();
        self.save(&config)?;

        Ok(config)
    }

    /// Save the config, creating parent directories if needed
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        std::fs::write(&self.path, content)?;
        tracing::debug!("Saved config to {:?}", self.path);
        Ok(())
    }

    /// Reload the config from disk, picking up external edits
    pub fn reload(&self, config: &mut Config) -> ConfigResult<()> {
        let content = std::fs::read_to_string(&self.path)?;
        *config = toml::from_str(&content)?;
        tracing::debug!("Reloaded config from {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    // Unique base dir per test so parallel tests never share files
    static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn test_base_dir() -> PathBuf {
        let id = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "one_push_boat_test_{}_{}",
            std::process::id(),
            id
        ))
    }

    fn write_config(base: &Path, content: &str) {
        let path = plugin_config_path(base);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_default_version_is_current() {
        let config = Config::default();
        assert_eq!(config.version, PLUGIN_VERSION);
        assert!(!config.mount_pusher_to_driver_seat);
    }

    #[test]
    fn test_first_load_creates_default_file() {
        let base = test_base_dir();
        let store = ConfigStore::new(&base);

        let config = store.load().unwrap();
        assert_eq!(config, Config::default());
        assert!(store.path().exists());

        let on_disk: Config =
            toml::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk, config);

        std::fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_pre_baseline_version_resets_to_defaults() {
        let base = test_base_dir();
        write_config(
            &base,
            "Version = \"0.9.0\"\n\"Mount Pusher To Driver Seat\" = true\n",
        );

        let config = ConfigStore::new(&base).load().unwrap();
        assert_eq!(config.version, PLUGIN_VERSION);
        assert!(!config.mount_pusher_to_driver_seat);

        std::fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_post_baseline_version_keeps_settings() {
        let base = test_base_dir();
        write_config(
            &base,
            "Version = \"1.0.0\"\n\"Mount Pusher To Driver Seat\" = true\n",
        );

        let config = ConfigStore::new(&base).load().unwrap();
        assert_eq!(config.version, PLUGIN_VERSION);
        assert!(config.mount_pusher_to_driver_seat);

        std::fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_current_version_leaves_settings_untouched() {
        let base = test_base_dir();
        write_config(
            &base,
            &format!(
                "Version = \"{}\"\n\"Mount Pusher To Driver Seat\" = true\n",
                PLUGIN_VERSION
            ),
        );

        let config = ConfigStore::new(&base).load().unwrap();
        assert_eq!(config.version, PLUGIN_VERSION);
        assert!(config.mount_pusher_to_driver_seat);

        std::fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_missing_version_field_resets_to_defaults() {
        let base = test_base_dir();
        write_config(&base, "\"Mount Pusher To Driver Seat\" = true\n");

        let config = ConfigStore::new(&base).load().unwrap();
        assert_eq!(config.version, PLUGIN_VERSION);
        assert!(!config.mount_pusher_to_driver_seat);

        std::fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_load_rewrites_version_stamp() {
        let base = test_base_dir();
        write_config(
            &base,
            "Version = \"1.0.5\"\n\"Mount Pusher To Driver Seat\" = true\n",
        );

        let store = ConfigStore::new(&base);
        store.load().unwrap();

        let on_disk: Config =
            toml::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk.version, PLUGIN_VERSION);
        assert!(on_disk.mount_pusher_to_driver_seat);

        std::fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_reload_picks_up_external_edits() {
        let base = test_base_dir();
        let store = ConfigStore::new(&base);
        let mut config = store.load().unwrap();
        assert!(!config.mount_pusher_to_driver_seat);

        write_config(
            &base,
            &format!(
                "Version = \"{}\"\n\"Mount Pusher To Driver Seat\" = true\n",
                PLUGIN_VERSION
            ),
        );
        store.reload(&mut config).unwrap();
        assert!(config.mount_pusher_to_driver_seat);

        std::fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config {
            version: PLUGIN_VERSION.to_string(),
            mount_pusher_to_driver_seat: true,
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("Version"));
        assert!(toml_str.contains("Mount Pusher To Driver Seat"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }
}
