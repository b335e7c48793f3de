pub mod availability_compare;
pub mod capacity_compare;
pub mod level_compare;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::comparator::{availability_compare::AvailabilityCompare, capacity_compare::CapacityCompare, level_compare::LevelCompare};
use crate::domain::room::Room;
use crate::error::ConfigError;

/// The orderings a room list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    /// Ascending by floor.
    Level,
    /// Descending by seating capacity.
    Capacity,
    /// Descending by number of available slots.
    Availability,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 3] = [SortCriterion::Level, SortCriterion::Capacity, SortCriterion::Availability];

    pub fn compare(&self, room1: &Room, room2: &Room) -> Ordering {
        match self {
            SortCriterion::Level => LevelCompare::new().compare(room1, room2),
            SortCriterion::Capacity => CapacityCompare::new().compare(room1, room2),
            SortCriterion::Availability => AvailabilityCompare::new().compare(room1, room2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::Level => "level",
            SortCriterion::Capacity => "capacity",
            SortCriterion::Availability => "availability",
        }
    }
}

impl FromStr for SortCriterion {
    type Err = ConfigError;

    fn from_str(criterion: &str) -> Result<SortCriterion, Self::Err> {
        match criterion {
            "level" => Ok(SortCriterion::Level),
            "capacity" => Ok(SortCriterion::Capacity),
            "availability" => Ok(SortCriterion::Availability),
            _ => Err(ConfigError::UnknownSortCriterion(criterion.to_string())),
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
