//! Entity model: the seams between the plugin and the host engine
//!
//! Boats, players, and mount points are external entities owned by the host.
//! This module defines the traits and handle types the hosting harness
//! implements to expose them, plus driver seat retrieval.

pub mod boat;
pub mod mount;
pub mod player;

pub use boat::BoatEntity;
pub use mount::{find_driver_seat, DriverSeat, MountPointInfo, MountableHandle};
pub use player::Pusher;
