use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

/// Wire shape of a single room record in the availability dataset.
///
/// Availability values are kept as raw JSON so the domain layer decides which
/// tokens count as available (`"1"`) or unavailable (`"0"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDto {
    pub name: String,

    #[serde(deserialize_with = "number_or_numeric_string")]
    pub capacity: u32,

    #[serde(deserialize_with = "number_or_numeric_string")]
    pub level: i32,

    pub availability: BTreeMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

/// The published dataset writes `capacity` and `level` as quoted numbers (`"6"`), other
/// producers use plain JSON integers. Both are accepted; anything else is rejected.
fn number_or_numeric_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match NumberOrString::<T>::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text.trim().parse::<T>().map_err(|e| de::Error::custom(format!("invalid number '{}': {}", text, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_quoted_and_plain_numbers() {
        let quoted: RoomDto =
            serde_json::from_value(json!({"name": "A", "capacity": "6", "level": "7", "availability": {}})).unwrap();
        let plain: RoomDto = serde_json::from_value(json!({"name": "A", "capacity": 6, "level": 7, "availability": {}})).unwrap();

        assert_eq!(quoted, plain);
        assert_eq!(quoted.capacity, 6);
        assert_eq!(quoted.level, 7);
    }

    #[test]
    fn serializes_plain_numbers() {
        let dto = RoomDto { name: "A".to_string(), capacity: 6, level: -1, availability: BTreeMap::new() };
        assert_eq!(serde_json::to_value(&dto).unwrap(), json!({"name": "A", "capacity": 6, "level": -1, "availability": {}}));
    }

    #[test]
    fn rejects_non_numeric_text() {
        let result = serde_json::from_value::<RoomDto>(json!({"name": "A", "capacity": "six", "level": 1, "availability": {}}));
        assert!(result.is_err());

        let result = serde_json::from_value::<RoomDto>(json!({"name": "A", "capacity": "-2", "level": 1, "availability": {}}));
        assert!(result.is_err());
    }
}
