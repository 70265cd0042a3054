//! Permission gate for the push handler
//!
//! The plugin checks one capability, `@onepushboat/use`, before reacting to
//! a push. The check is expressed as an injectable policy so the hosting
//! harness picks the behavior at construction time:
//!
//! - [`AllowAll`] — every player passes (the plugin's original behavior
//!   before it grew a permission check)
//! - [`PermissionRegistry`] — a harness-owned capability registry; players
//!   pass only when the harness has granted them the capability
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use one_push_boat::permissions::{capabilities, PermissionRegistry};
//!
//! let registry = Arc::new(PermissionRegistry::new());
//!
//! // Harness grants capabilities, e.g. from its admin backend on connect
//! fn on_player_connect(registry: &PermissionRegistry, steam_id: u64) {
//!     registry.add_permissions(steam_id, &[capabilities::USE]);
//! }
//!
//! // Harness cleans up on disconnect
//! fn on_player_disconnect(registry: &PermissionRegistry, steam_id: u64) {
//!     registry.clear_permissions(steam_id);
//! }
//! ```

mod registry;
mod types;

use std::sync::Arc;

pub use registry::PermissionRegistry;
pub use types::{capabilities, extract_domain, PermissionData, PERMISSION_PREFIX};

/// Decides whether a player may use the plugin.
///
/// Pure query with no side effects; implementations must fail closed when
/// they cannot answer.
pub trait PermissionPolicy: Send + Sync {
    /// Whether the player holds the named capability
    fn has_capability(&self, steam_id: u64, capability: &str) -> bool;
}

impl<P: PermissionPolicy + ?Sized> PermissionPolicy for &P {
    fn has_capability(&self, steam_id: u64, capability: &str) -> bool {
        (**self).has_capability(steam_id, capability)
    }
}

impl<P: PermissionPolicy + ?Sized> PermissionPolicy for Arc<P> {
    fn has_capability(&self, steam_id: u64, capability: &str) -> bool {
        (**self).has_capability(steam_id, capability)
    }
}

/// Policy that admits every player, matching the legacy plugin behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl PermissionPolicy for AllowAll {
    fn has_capability(&self, _steam_id: u64, _capability: &str) -> bool {
        true
    }
}
