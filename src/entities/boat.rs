//! Boat entity seam for the host engine
//!
//! The host engine owns boat entities outright; the plugin mutates an
//! existing boat's orientation and motion through this trait but never
//! creates or destroys one.

use glam::{Quat, Vec3};

use super::mount::{MountPointInfo, MountableHandle};
use super::player::Pusher;

/// A pushable boat entity, as exposed by the host engine.
pub trait BoatEntity {
    /// Current world orientation
    fn rotation(&self) -> Quat;

    /// Overwrite the world orientation
    fn set_rotation(&mut self, rotation: Quat);

    /// Linear velocity of the boat's rigid body
    fn velocity(&self) -> Vec3;

    fn set_velocity(&mut self, velocity: Vec3);

    /// Angular velocity of the boat's rigid body
    fn angular_velocity(&self) -> Vec3;

    fn set_angular_velocity(&mut self, velocity: Vec3);

    /// Whether the host engine considers the boat capsized.
    ///
    /// The flipped state is derived from orientation by the host; the plugin
    /// treats it as an opaque predicate.
    fn is_flipped(&self) -> bool;

    /// The boat's ordered mount point sequence
    fn mount_points(&self) -> &[MountPointInfo];

    /// Attach a player to a mountable sub-entity.
    ///
    /// Vacancy is not verified by the caller; the host's mount subsystem is
    /// assumed to reject or resolve occupied seats itself.
    fn mount_player(&mut self, mountable: MountableHandle, player: &dyn Pusher);
}
