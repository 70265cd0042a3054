//! Player seam for the host engine

/// The acting player behind a push interaction.
///
/// The host engine owns the player entity; the plugin only needs a stable
/// identity for the permission check and for the mount call.
pub trait Pusher {
    /// The player's 64-bit Steam ID
    fn steam_id(&self) -> u64;
}
