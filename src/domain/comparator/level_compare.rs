use crate::domain::room::Room;

use std::cmp::Ordering;

/// Compares rooms by floor, lowest level first.
pub struct LevelCompare;

impl LevelCompare {
    pub fn new() -> Self {
        Self
    }

    /// Returns `Ordering::Less`, if room1 is on a lower level than room2
    ///         `Ordering::Greater`, if room1 is on a higher level than room2
    ///
    /// Note: rooms on the same level compare `Ordering::Equal` and keep their relative order under a stable sort.
    pub fn compare(&self, room1: &Room, room2: &Room) -> Ordering {
        room1.level().cmp(&room2.level())
    }
}
