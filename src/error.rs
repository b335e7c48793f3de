use thiserror::Error;

/// Failures while fetching or decoding the room dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to reach room data source '{source_name}': {reason}")]
    Transport { source_name: String, reason: String },

    #[error("Room data source '{source_name}' answered with HTTP status {status}")]
    HttpStatus { source_name: String, status: u16 },

    #[error("Room data is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Room data has an unexpected shape: {0}")]
    Schema(String),

    #[error("Room data failed validation: {0}")]
    Data(#[from] DataError),

    #[error("A room catalog load is already in progress")]
    AlreadyLoading,
}

/// Structural problems inside otherwise well-formed room records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("Room '{room}' has malformed availability flag {value} at slot '{slot}'")]
    MalformedFlag { room: String, slot: String, value: String },

    #[error("Room '{room}' has malformed time key '{key}' (expected HH:MM)")]
    MalformedTimeKey { room: String, key: String },

    #[error("Room '{room}' uses time slots {found:?}, but the catalog uses {expected:?}")]
    KeyMismatch { room: String, expected: Vec<String>, found: Vec<String> },

    #[error("Room name '{0}' appears more than once")]
    DuplicateRoom(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Room '{room}' has no time slot '{slot}'")]
    UnknownTimeKey { room: String, slot: String },

    #[error("No room named '{0}' in the catalog")]
    UnknownRoom(String),

    #[error("Invalid time label '{0}' (expected HH:MM, 24-hour, zero padded)")]
    InvalidTimeLabel(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable '{name}' has invalid value '{value}'")]
    InvalidValue { name: String, value: String },

    #[error("Unknown sort criterion: '{0}'")]
    UnknownSortCriterion(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
