//! Boat righting operation

use glam::{EulerRot, Quat, Vec3};

use crate::entities::BoatEntity;

/// Right a capsized boat: keep its heading, level everything else, and kill
/// its motion.
///
/// The orientation is rebuilt from the yaw component alone so pitch and roll
/// go to zero while the heading survives. Both rigid body velocity vectors
/// are zeroed so the boat settles where it is instead of carrying the
/// capsize momentum into the corrected pose.
///
/// This is an unconditional corrective action; the flipped check belongs to
/// the caller.
pub fn unflip_boat(boat: &mut dyn BoatEntity) {
    let (yaw, _pitch, _roll) = boat.rotation().to_euler(EulerRot::YXZ);
    boat.set_rotation(Quat::from_rotation_y(yaw));
    boat.set_velocity(Vec3::ZERO);
    boat.set_angular_velocity(Vec3::ZERO);
}
