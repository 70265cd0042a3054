//! Vehicle mount points and driver seat retrieval
//!
//! A vehicle exposes an ordered sequence of mount points. Each slot carries a
//! "driver" flag and, when the seat is usable, a handle to the mountable
//! sub-entity a player attaches to. The plugin only reads this sequence to
//! locate the first driver slot; attaching itself goes through
//! [`BoatEntity::mount_player`](super::BoatEntity::mount_player).

use std::fmt;

/// Invalid handle sentinel value
pub const INVALID_MOUNTABLE_HANDLE: u32 = 0xFFFFFFFF;

/// An opaque handle to a mountable sub-entity owned by the host engine.
///
/// The plugin never dereferences the handle; it only forwards it back to the
/// host when mounting a player. Resolution and lifetime are the host's
/// concern.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountableHandle(u32);

impl MountableHandle {
    /// Create a handle from a raw host-engine value
    #[inline]
    pub const fn from_raw(value: u32) -> Self {
        Self(value)
    }

    /// Create an invalid handle
    #[inline]
    pub const fn invalid() -> Self {
        Self(INVALID_MOUNTABLE_HANDLE)
    }

    /// Get the raw handle value
    #[inline]
    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Check if this handle is not the invalid sentinel
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 != INVALID_MOUNTABLE_HANDLE
    }
}

impl fmt::Debug for MountableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "MountableHandle({})", self.0)
        } else {
            write!(f, "MountableHandle(invalid)")
        }
    }
}

/// One entry in a vehicle's ordered mount point sequence
#[derive(Debug, Clone, Copy)]
pub struct MountPointInfo {
    /// Whether this slot is the driver seat
    pub is_driver: bool,
    /// Mountable sub-entity for this slot, absent when the seat is unusable
    pub mountable: Option<MountableHandle>,
}

/// A located driver seat: its position in the mount point sequence and the
/// mountable to attach the player to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverSeat {
    /// Index into the vehicle's mount point sequence
    pub index: usize,
    /// The seat's mountable sub-entity
    pub mountable: MountableHandle,
}

/// Scan a vehicle's mount points from index 0 and return the first driver
/// slot that has a mountable present.
///
/// Returns `None` when no such slot exists. Seat vacancy is NOT checked here;
/// the host engine's mount subsystem owns that invariant.
pub fn find_driver_seat(mount_points: &[MountPointInfo]) -> Option<DriverSeat> {
    mount_points
        .iter()
        .enumerate()
        .find(|(_, point)| point.is_driver && point.mountable.is_some())
        .and_then(|(index, point)| {
            point.mountable.map(|mountable| DriverSeat { index, mountable })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(is_driver: bool, mountable: Option<u32>) -> MountPointInfo {
        MountPointInfo {
            is_driver,
            mountable: mountable.map(MountableHandle::from_raw),
        }
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(find_driver_seat(&[]), None);
    }

    #[test]
    fn test_no_driver_slots() {
        let points = [seat(false, Some(1)), seat(false, Some(2))];
        assert_eq!(find_driver_seat(&points), None);
    }

    #[test]
    fn test_driver_without_mountable_is_skipped() {
        let points = [seat(true, None)];
        assert_eq!(find_driver_seat(&points), None);
    }

    #[test]
    fn test_first_driver_seat_wins() {
        let points = [seat(false, Some(10)), seat(true, Some(11)), seat(true, Some(12))];
        let found = find_driver_seat(&points).unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.mountable, MountableHandle::from_raw(11));
    }

    #[test]
    fn test_driver_without_mountable_does_not_shadow_later_seat() {
        let points = [seat(true, None), seat(true, Some(7))];
        let found = find_driver_seat(&points).unwrap();
        assert_eq!(found.index, 1);
    }

    #[test]
    fn test_handle_validity() {
        assert!(MountableHandle::from_raw(0).is_valid());
        assert!(!MountableHandle::invalid().is_valid());
        assert_eq!(MountableHandle::invalid().raw(), INVALID_MOUNTABLE_HANDLE);
    }
}
