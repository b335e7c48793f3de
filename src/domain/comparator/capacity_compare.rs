use crate::domain::room::Room;

use std::cmp::Ordering;

/// Compares rooms by seating capacity, largest room first.
pub struct CapacityCompare;

impl CapacityCompare {
    pub fn new() -> Self {
        Self
    }

    /// Returns `Ordering::Less`, if room1 seats more people than room2
    ///         `Ordering::Greater`, if room1 seats fewer people than room2
    pub fn compare(&self, room1: &Room, room2: &Room) -> Ordering {
        room2.capacity().cmp(&room1.capacity())
    }
}
