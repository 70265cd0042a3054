//! Permission types and constants

use std::collections::HashSet;

/// Permission prefix character for capability strings
pub const PERMISSION_PREFIX: char = '@';

/// Capability strings owned by this plugin.
///
/// Capabilities use the `@domain/flag` format; the domain for this plugin is
/// `onepushboat`.
pub mod capabilities {
    /// Allows a player to right a capsized boat with one push
    pub const USE: &str = "@onepushboat/use";

    /// Every capability this plugin registers at startup
    pub const ALL: &[&str] = &[USE];
}

/// Capability grants for a single player
#[derive(Debug, Clone, Default)]
pub struct PermissionData {
    /// Set of capability strings (e.g., "@onepushboat/use")
    pub permissions: HashSet<String>,
}

impl PermissionData {
    /// Create empty permission data
    pub fn new() -> Self {
        Self::default()
    }

    /// Add capabilities to this data
    pub fn add(&mut self, permissions: &[&str]) {
        for perm in permissions {
            self.permissions.insert((*perm).to_string());
        }
    }

    /// Remove capabilities from this data
    pub fn remove(&mut self, permissions: &[&str]) {
        for perm in permissions {
            self.permissions.remove(*perm);
        }
    }

    /// Check for a specific capability.
    ///
    /// Also honors domain-wide grants: `@domain/root` and `@domain/*` grant
    /// every `@domain/...` capability.
    pub fn has(&self, permission: &str) -> bool {
        if self.permissions.contains(permission) {
            return true;
        }

        if let Some(domain) = extract_domain(permission) {
            let root_flag = format!("@{}/root", domain);
            let wildcard_flag = format!("@{}/*", domain);
            if self.permissions.contains(&root_flag) || self.permissions.contains(&wildcard_flag) {
                return true;
            }
        }

        false
    }

    /// Check if empty (no capabilities granted)
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

/// Extract domain from a capability string
///
/// `@domain/flag` -> `Some("domain")`
/// `invalid` -> `None`
pub fn extract_domain(permission: &str) -> Option<&str> {
    if permission.starts_with(PERMISSION_PREFIX) {
        permission[1..].split('/').next()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("@onepushboat/use"), Some("onepushboat"));
        assert_eq!(extract_domain("invalid"), None);
        assert_eq!(extract_domain(""), None);
    }

    #[test]
    fn test_permission_data_basic() {
        let mut data = PermissionData::new();
        assert!(data.is_empty());

        data.add(&[capabilities::USE]);
        assert!(!data.is_empty());
        assert!(data.has(capabilities::USE));
        assert!(!data.has("@onepushboat/other"));

        data.remove(&[capabilities::USE]);
        assert!(!data.has(capabilities::USE));
    }

    #[test]
    fn test_root_flag_grants_domain() {
        let mut data = PermissionData::new();
        data.add(&["@onepushboat/root"]);

        assert!(data.has(capabilities::USE));
        assert!(!data.has("@other/use"));
    }

    #[test]
    fn test_wildcard_flag_grants_domain() {
        let mut data = PermissionData::new();
        data.add(&["@onepushboat/*"]);

        assert!(data.has(capabilities::USE));
        assert!(!data.has("@other/use"));
    }
}
