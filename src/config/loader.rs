//! Config path resolution
//!
//! Builds the config file path under a base directory supplied by the
//! hosting harness, keeping the conventional addon layout:
//! `<base>/configs/plugins/{plugin_name}/{plugin_name}.toml`

use std::path::{Path, PathBuf};

use crate::PLUGIN_NAME;

/// Returns the configs directory under the harness base directory
pub fn configs_dir(base_dir: &Path) -> PathBuf {
    base_dir.join("configs")
}

/// Returns the path for this plugin's config file.
///
/// Path: `<base>/configs/plugins/one_push_boat/one_push_boat.toml`
pub fn plugin_config_path(base_dir: &Path) -> PathBuf {
    configs_dir(base_dir)
        .join("plugins")
        .join(PLUGIN_NAME)
        .join(format!("{}.toml", PLUGIN_NAME))
}
