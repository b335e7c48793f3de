use crate::domain::room::Room;

use std::cmp::Ordering;

/// Compares rooms by the number of available slots, most available first.
pub struct AvailabilityCompare;

impl AvailabilityCompare {
    pub fn new() -> Self {
        Self
    }

    /// Returns `Ordering::Less`, if room1 has more available slots than room2
    ///         `Ordering::Greater`, if room1 has fewer available slots than room2
    pub fn compare(&self, room1: &Room, room2: &Room) -> Ordering {
        room2.available_slot_count().cmp(&room1.available_slot_count())
    }
}
