//! Capability and grant registry
//!
//! Stores which capability names exist and which players hold them. The
//! plugin registers its capability names at load; the hosting harness
//! populates grants (e.g., from its admin backend on player connect) and
//! clears them on disconnect.

use std::collections::HashSet;

use dashmap::{DashMap, DashSet};

use super::types::PermissionData;
use super::PermissionPolicy;

/// Registry of known capabilities and per-player grants, keyed by SteamID64.
///
/// Owned by the hosting harness and shared with the plugin, not a process
/// global. All queries fail closed: an unknown player, an unregistered
/// capability, or an absent grant all deny.
#[derive(Debug, Default)]
pub struct PermissionRegistry {
    capabilities: DashSet<String>,
    grants: DashMap<u64, PermissionData>,
}

impl PermissionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability name, making it queryable.
    ///
    /// Idempotent; returns `true` only when the name was newly registered.
    pub fn register_capability(&self, name: &str) -> bool {
        let inserted = self.capabilities.insert(name.to_string());
        if inserted {
            tracing::debug!("Registered capability {}", name);
        }
        inserted
    }

    /// Register several capability names at once
    pub fn register_capabilities(&self, names: &[&str]) {
        for name in names {
            self.register_capability(name);
        }
    }

    /// Check whether a capability name has been registered
    pub fn is_capability_registered(&self, name: &str) -> bool {
        self.capabilities.contains(name)
    }

    /// Add capability grant(s) to a player, creating the entry if needed
    pub fn add_permissions(&self, steam_id: u64, permissions: &[&str]) {
        self.grants.entry(steam_id).or_default().add(permissions);
    }

    /// Remove capability grant(s) from a player; no-op for unknown players
    pub fn remove_permissions(&self, steam_id: u64, permissions: &[&str]) {
        if let Some(mut data) = self.grants.get_mut(&steam_id) {
            data.remove(permissions);
        }
    }

    /// Replace all grants for a player
    pub fn set_permissions(&self, steam_id: u64, permissions: &[&str]) {
        let mut data = PermissionData::new();
        data.add(permissions);
        self.grants.insert(steam_id, data);
    }

    /// Remove a player from the registry entirely
    pub fn clear_permissions(&self, steam_id: u64) {
        self.grants.remove(&steam_id);
    }

    /// Check whether a player has any grants recorded
    pub fn is_registered(&self, steam_id: u64) -> bool {
        self.grants.contains_key(&steam_id)
    }

    /// Get all grants for a player
    pub fn get_permissions(&self, steam_id: u64) -> HashSet<String> {
        self.grants
            .get(&steam_id)
            .map(|data| data.permissions.clone())
            .unwrap_or_default()
    }

    /// Check whether a player holds a registered capability.
    ///
    /// Denies when the capability was never registered, even if a matching
    /// grant string is present.
    pub fn has_capability(&self, steam_id: u64, capability: &str) -> bool {
        if !self.capabilities.contains(capability) {
            return false;
        }

        self.grants
            .get(&steam_id)
            .map(|data| data.has(capability))
            .unwrap_or(false)
    }
}

impl PermissionPolicy for PermissionRegistry {
    fn has_capability(&self, steam_id: u64, capability: &str) -> bool {
        PermissionRegistry::has_capability(self, steam_id, capability)
    }
}
