use std::fmt;

use crate::api::room_dto::RoomDto;
use crate::domain::availability::AvailabilityIndex;
use crate::domain::time_label::TimeLabel;
use crate::error::{DataError, LookupError};

/// A bookable room as loaded from the data source. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    capacity: u32,
    level: i32,
    availability: AvailabilityIndex,
}

impl Room {
    pub fn new(name: impl Into<String>, capacity: u32, level: i32, availability: AvailabilityIndex) -> Self {
        Self { name: name.into(), capacity, level, availability }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn availability(&self) -> &AvailabilityIndex {
        &self.availability
    }

    pub fn available_slot_count(&self) -> usize {
        self.availability.available_count()
    }

    pub fn is_available_at(&self, label: TimeLabel) -> Result<bool, LookupError> {
        self.availability.is_available_at(&self.name, label)
    }

    pub fn to_dto(&self) -> RoomDto {
        RoomDto { name: self.name.clone(), capacity: self.capacity, level: self.level, availability: self.availability.to_raw() }
    }
}

impl TryFrom<RoomDto> for Room {
    type Error = DataError;

    fn try_from(dto: RoomDto) -> Result<Self, Self::Error> {
        let availability = AvailabilityIndex::normalize(&dto.name, &dto.availability)?;
        Ok(Room { name: dto.name, capacity: dto.capacity, level: dto.level, availability })
    }
}

/// Summary line of a room as shown in the room list.
impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Capacity: {} | Level: {} | Available Slots: {}",
            self.name,
            self.capacity,
            self.level,
            self.available_slot_count()
        )
    }
}
