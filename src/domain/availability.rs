use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::time_label::TimeLabel;
use crate::error::{DataError, LookupError};

pub const AVAILABLE_TOKEN: &str = "1";
pub const UNAVAILABLE_TOKEN: &str = "0";

/// Per-room availability: one boolean flag per time slot, iterated chronologically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityIndex {
    slots: BTreeMap<TimeLabel, bool>,
}

impl AvailabilityIndex {
    /// Converts the source representation into the boolean domain.
    ///
    /// Recognized tokens are the strings `"1"`/`"0"`, the JSON integers `1`/`0`
    /// and JSON booleans. Anything else is a `DataError::MalformedFlag`; keys that
    /// are not `HH:MM` labels are a `DataError::MalformedTimeKey`.
    ///
    /// * `room`: name of the owning room, used only for error reporting.
    pub fn normalize(room: &str, raw: &BTreeMap<String, Value>) -> Result<Self, DataError> {
        let mut slots = BTreeMap::new();

        for (key, value) in raw {
            let label = TimeLabel::parse(key).map_err(|_| DataError::MalformedTimeKey { room: room.to_string(), key: key.clone() })?;

            let flag = parse_flag(value).ok_or_else(|| DataError::MalformedFlag {
                room: room.to_string(),
                slot: key.clone(),
                value: value.to_string(),
            })?;

            slots.insert(label, flag);
        }

        Ok(Self { slots })
    }

    /// Re-serializes the index using the `"1"`/`"0"` token set of the data source.
    pub fn to_raw(&self) -> BTreeMap<String, Value> {
        self.slots
            .iter()
            .map(|(label, available)| {
                let token = if *available { AVAILABLE_TOKEN } else { UNAVAILABLE_TOKEN };
                (label.to_string(), Value::String(token.to_string()))
            })
            .collect()
    }

    pub fn available_count(&self) -> usize {
        self.slots.values().filter(|available| **available).count()
    }

    /// Lenient lookup: `None` when the slot is not part of this index.
    pub fn get(&self, label: TimeLabel) -> Option<bool> {
        self.slots.get(&label).copied()
    }

    /// Strict lookup used by the catalog. Unknown slots are a `LookupError::UnknownTimeKey`.
    ///
    /// * `room`: name of the owning room, used only for error reporting.
    pub fn is_available_at(&self, room: &str, label: TimeLabel) -> Result<bool, LookupError> {
        self.get(label).ok_or_else(|| LookupError::UnknownTimeKey { room: room.to_string(), slot: label.to_string() })
    }

    pub fn slots(&self) -> impl Iterator<Item = (TimeLabel, bool)> + '_ {
        self.slots.iter().map(|(label, available)| (*label, *available))
    }

    pub fn labels(&self) -> impl Iterator<Item = TimeLabel> + '_ {
        self.slots.keys().copied()
    }

    pub fn same_slots_as(&self, other: &AvailabilityIndex) -> bool {
        self.slots.len() == other.slots.len() && self.labels().eq(other.labels())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

fn parse_flag(value: &Value) -> Option<bool> {
    match value {
        Value::String(token) if token == AVAILABLE_TOKEN => Some(true),
        Value::String(token) if token == UNAVAILABLE_TOKEN => Some(false),
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_u64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}
