use crate::domain::comparator::SortCriterion;
use crate::domain::room::Room;
use crate::domain::time_label::TimeLabel;
use crate::error::{DataError, LoadError, LookupError};
use crate::loader::parser::{parse_rooms, validate_catalog};
use crate::loader::source::RoomSource;

/// The in-memory collection of all rooms after a successful load.
///
/// Order is significant only as the result of the last applied sort; a fresh
/// load keeps the order of the data source. Contents are only ever replaced as
/// a whole, so a failed load leaves the previous rooms untouched.
#[derive(Debug, Clone, Default)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
    last_sort: Option<SortCriterion>,
}

impl RoomCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from already constructed rooms, enforcing unique names and a shared slot set.
    pub fn from_rooms(rooms: Vec<Room>) -> Result<Self, DataError> {
        validate_catalog(&rooms)?;
        Ok(Self { rooms, last_sort: None })
    }

    /// Fetches and decodes the room list from `source` without touching any catalog.
    pub async fn fetch_rooms(source: &dyn RoomSource) -> Result<Vec<Room>, LoadError> {
        let body = source.fetch().await?;
        parse_rooms(body)
    }

    /// Performs a single fetch from `source` and, on success, replaces the catalog contents.
    ///
    /// On failure the catalog keeps its previous contents and the error is returned
    /// to the caller without retrying.
    pub async fn load(&mut self, source: &dyn RoomSource) -> Result<&Self, LoadError> {
        let rooms = Self::fetch_rooms(source).await?;
        log::info!("Loaded {} rooms from '{}'.", rooms.len(), source.describe());

        self.replace(rooms);
        Ok(self)
    }

    pub(crate) fn replace(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms;
        self.last_sort = None;
    }

    /// Reorders the catalog in place. The sort is stable: rooms that compare equal
    /// under `criterion` keep their relative order from before the call.
    pub fn sort_by(&mut self, criterion: SortCriterion) -> &Self {
        self.rooms.sort_by(|room1, room2| criterion.compare(room1, room2));
        self.last_sort = Some(criterion);

        log::debug!("Sorted {} rooms by {}.", self.rooms.len(), criterion);
        self
    }

    pub fn available_slot_count(room: &Room) -> usize {
        room.available_slot_count()
    }

    /// Strict availability lookup: a label that is not one of the room's slots is a
    /// `LookupError::UnknownTimeKey` rather than "not available".
    pub fn is_available_at(room: &Room, label: TimeLabel) -> Result<bool, LookupError> {
        room.is_available_at(label)
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.name() == name)
    }

    /// Availability of the room called `name` at `label`.
    pub fn is_room_available_at(&self, name: &str, label: TimeLabel) -> Result<bool, LookupError> {
        let room = self.room(name).ok_or_else(|| LookupError::UnknownRoom(name.to_string()))?;
        Self::is_available_at(room, label)
    }

    /// The slot labels shared by every room, in chronological order.
    pub fn time_slots(&self) -> Vec<TimeLabel> {
        self.rooms.first().map(|room| room.availability().labels().collect()).unwrap_or_default()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn last_sort(&self) -> Option<SortCriterion> {
        self.last_sort
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
