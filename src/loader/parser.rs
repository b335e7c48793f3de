use serde_json::Value;
use std::collections::HashSet;

use crate::api::room_dto::RoomDto;
use crate::domain::room::Room;
use crate::error::{DataError, LoadError};

/// Parses the raw bytes of a room-availability document into validated rooms.
///
/// Errors are reported as:
/// - `LoadError::Parse` if the body is not JSON at all, including bodies that are not valid UTF-8.
/// - `LoadError::Schema` if the JSON is not an array, or an element is not a room object.
/// - `LoadError::Data` if a room has malformed flags or time keys, or the catalog is inconsistent
///   (see [`validate_catalog`]).
pub fn parse_rooms(body: impl AsRef<[u8]>) -> Result<Vec<Room>, LoadError> {
    let document: Value = serde_json::from_slice(body.as_ref()).map_err(LoadError::Parse)?;

    let items = match document {
        Value::Array(items) => items,
        other => return Err(LoadError::Schema(format!("expected a JSON array of rooms, found {}", json_kind(&other)))),
    };

    let mut rooms = Vec::with_capacity(items.len());

    for (position, item) in items.into_iter().enumerate() {
        let dto: RoomDto = serde_json::from_value(item).map_err(|e| LoadError::Schema(format!("room at index {}: {}", position, e)))?;
        rooms.push(Room::try_from(dto)?);
    }

    validate_catalog(&rooms)?;

    Ok(rooms)
}

/// Checks catalog-wide invariants: room names are unique and every room
/// exposes the same set of time slots as the first room.
pub fn validate_catalog(rooms: &[Room]) -> Result<(), DataError> {
    let mut names = HashSet::with_capacity(rooms.len());

    for room in rooms {
        if !names.insert(room.name()) {
            return Err(DataError::DuplicateRoom(room.name().to_string()));
        }
    }

    let Some(reference) = rooms.first() else {
        return Ok(());
    };

    for room in &rooms[1..] {
        if !room.availability().same_slots_as(reference.availability()) {
            return Err(DataError::KeyMismatch {
                room: room.name().to_string(),
                expected: reference.availability().labels().map(|label| label.to_string()).collect(),
                found: room.availability().labels().map(|label| label.to_string()).collect(),
            });
        }
    }

    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_room_array() {
        let body = r#"[
            {"name": "A", "capacity": 5, "level": 2, "availability": {"08:00": "1", "08:30": "0"}},
            {"name": "B", "capacity": 10, "level": 1, "availability": {"08:00": "0", "08:30": "0"}}
        ]"#;

        let rooms = parse_rooms(body).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].name(), "A");
        assert_eq!(rooms[1].available_slot_count(), 0);
    }

    #[test]
    fn empty_array_is_an_empty_catalog() {
        assert!(parse_rooms("[]").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(parse_rooms("<html>oops</html>"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let body = b"[{\"name\": \"Room \xFF\", \"capacity\": 4, \"level\": 1, \"availability\": {\"08:00\": \"1\"}}]";
        assert!(matches!(parse_rooms(&body[..]), Err(LoadError::Parse(_))));
    }

    #[test]
    fn non_array_is_a_schema_error() {
        match parse_rooms(r#"{"rooms": []}"#) {
            Err(LoadError::Schema(reason)) => assert!(reason.contains("an object"), "{reason}"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn element_missing_fields_is_a_schema_error() {
        match parse_rooms(r#"[{"name": "A", "level": 1, "availability": {}}]"#) {
            Err(LoadError::Schema(reason)) => assert!(reason.contains("index 0"), "{reason}"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn negative_capacity_is_a_schema_error() {
        let body = r#"[{"name": "A", "capacity": -1, "level": 1, "availability": {}}]"#;
        assert!(matches!(parse_rooms(body), Err(LoadError::Schema(_))));
    }

    #[test]
    fn mismatched_slots_are_rejected() {
        let body = r#"[
            {"name": "A", "capacity": 5, "level": 2, "availability": {"08:00": "1"}},
            {"name": "B", "capacity": 10, "level": 1, "availability": {"09:00": "0"}}
        ]"#;

        match parse_rooms(body) {
            Err(LoadError::Data(DataError::KeyMismatch { room, expected, found })) => {
                assert_eq!(room, "B");
                assert_eq!(expected, vec!["08:00"]);
                assert_eq!(found, vec!["09:00"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let body = r#"[
            {"name": "A", "capacity": 5, "level": 2, "availability": {"08:00": "1"}},
            {"name": "A", "capacity": 10, "level": 1, "availability": {"08:00": "0"}}
        ]"#;

        assert!(matches!(parse_rooms(body), Err(LoadError::Data(DataError::DuplicateRoom(name))) if name == "A"));
    }

    #[test]
    fn malformed_flag_is_a_data_error() {
        let body = r#"[{"name": "A", "capacity": 5, "level": 2, "availability": {"08:00": "Y"}}]"#;
        assert!(matches!(parse_rooms(body), Err(LoadError::Data(DataError::MalformedFlag { .. }))));
    }
}
