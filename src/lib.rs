//! # One Push Boat
//!
//! A game-server plugin that rights a capsized boat the moment a player
//! pushes it, and optionally seats the pusher at the helm.
//!
//! The hosting harness owns the engine entities and routes its "vehicle
//! push" hook into [`OnePushBoat::on_vehicle_push`]. The handler narrows to
//! capsized boats, levels the hull while preserving its heading, kills the
//! capsize momentum, and — when configured — mounts the pusher into the
//! first driver seat. Everything else falls through to the host's default
//! push physics via [`HookResult::Continue`].
//!
//! ## Configuration File
//!
//! Created on first load at
//! `<base>/configs/plugins/one_push_boat/one_push_boat.toml`:
//!
//! ```toml
//! Version = "1.1.0"
//! "Mount Pusher To Driver Seat" = false
//! ```
//!
//! ## Permissions
//!
//! Usage is gated behind the `@onepushboat/use` capability when the plugin
//! is built with a [`PermissionRegistry`]; with the default [`AllowAll`]
//! policy every player may use it. Denied players get no feedback; the push
//! simply behaves as if the plugin were not installed.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use one_push_boat::{OnePushBoat, PermissionRegistry};
//!
//! let registry = Arc::new(PermissionRegistry::new());
//! let plugin = OnePushBoat::load_with_registry("addons/", Arc::clone(&registry))?;
//!
//! // In the host's vehicle push hook:
//! let result = plugin.on_vehicle_push(Some(&mut boat), Some(&player));
//! if result.is_handled() {
//!     // suppress default push physics for this event
//! }
//! ```

pub mod config;
pub mod entities;
pub mod events;
pub mod permissions;
pub mod righting;

use std::path::Path;
use std::sync::Arc;

pub use config::{Config, ConfigError, ConfigResult, ConfigStore};
pub use entities::{
    find_driver_seat, BoatEntity, DriverSeat, MountPointInfo, MountableHandle, Pusher,
};
pub use events::HookResult;
pub use permissions::{capabilities, AllowAll, PermissionPolicy, PermissionRegistry};
pub use righting::unflip_boat;

/// Plugin name, used for the config file location
pub const PLUGIN_NAME: &str = "one_push_boat";

/// Running plugin version, stamped into the config on every load
pub const PLUGIN_VERSION: &str = "1.1.0";

/// The plugin: configuration plus a permission policy.
///
/// Constructed once by the hosting harness at plugin load and dropped at
/// unload; it holds no other state, and the handler itself is stateless per
/// invocation. The host invokes [`on_vehicle_push`](Self::on_vehicle_push)
/// synchronously from its simulation thread.
pub struct OnePushBoat<P: PermissionPolicy = AllowAll> {
    config: Config,
    permissions: P,
}

impl OnePushBoat<AllowAll> {
    /// Create the plugin with an open permission policy (every player may
    /// use it)
    pub fn new(config: Config) -> Self {
        Self {
            config,
            permissions: AllowAll,
        }
    }

    /// Load the config from disk and create the plugin with an open
    /// permission policy
    pub fn load(base_dir: impl AsRef<Path>) -> ConfigResult<Self> {
        let config = ConfigStore::new(base_dir).load()?;
        tracing::info!("One Push Boat v{} loaded", PLUGIN_VERSION);
        Ok(Self::new(config))
    }
}

impl OnePushBoat<Arc<PermissionRegistry>> {
    /// Load the config from disk and gate usage behind the harness-owned
    /// permission registry.
    ///
    /// Registers the plugin's capabilities with the registry (idempotent).
    pub fn load_with_registry(
        base_dir: impl AsRef<Path>,
        registry: Arc<PermissionRegistry>,
    ) -> ConfigResult<Self> {
        let config = ConfigStore::new(base_dir).load()?;
        tracing::info!("One Push Boat v{} loaded", PLUGIN_VERSION);
        Ok(Self::with_registry(config, registry))
    }

    /// Create the plugin gated behind a harness-owned permission registry,
    /// registering the plugin's capabilities (idempotent)
    pub fn with_registry(config: Config, registry: Arc<PermissionRegistry>) -> Self {
        registry.register_capabilities(capabilities::ALL);
        Self::with_permissions(config, registry)
    }
}

impl<P: PermissionPolicy> OnePushBoat<P> {
    /// Create the plugin with an explicit permission policy.
    ///
    /// Capability registration, if the policy needs any, is the caller's
    /// responsibility; [`Self::with_registry`] does it for the registry
    /// policy.
    pub fn with_permissions(config: Config, permissions: P) -> Self {
        Self {
            config,
            permissions,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle the host's "vehicle push" hook.
    ///
    /// Returns [`HookResult::Handled`] when the push was intercepted (the
    /// host should suppress its default push behavior for this event) and
    /// [`HookResult::Continue`] in every other case: a missing boat or
    /// player reference, a player without the `@onepushboat/use` capability,
    /// or a boat that is not capsized. All declines are silent.
    ///
    /// When mounting is enabled, a boat without a usable driver seat still
    /// gets righted; the mount step is skipped without surfacing an error.
    /// Seat vacancy is never checked here — the host's mount subsystem owns
    /// that invariant.
    pub fn on_vehicle_push(
        &self,
        boat: Option<&mut dyn BoatEntity>,
        player: Option<&dyn Pusher>,
    ) -> HookResult {
        let (Some(boat), Some(player)) = (boat, player) else {
            return HookResult::Continue;
        };

        if !self
            .permissions
            .has_capability(player.steam_id(), capabilities::USE)
        {
            return HookResult::Continue;
        }

        if !boat.is_flipped() {
            return HookResult::Continue;
        }

        righting::unflip_boat(boat);

        if self.config.mount_pusher_to_driver_seat {
            if let Some(seat) = entities::find_driver_seat(boat.mount_points()) {
                boat.mount_player(seat.mountable, player);
            }
        }

        HookResult::Handled
    }
}
