pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

pub use crate::domain::availability::AvailabilityIndex;
pub use crate::domain::catalog::RoomCatalog;
pub use crate::domain::comparator::SortCriterion;
pub use crate::domain::room::Room;
pub use crate::domain::room_store::{LoadState, RoomStore};
pub use crate::domain::scanner::{CodeHandler, ScanOutcome, ScanState, Scanner};
pub use crate::domain::time_label::TimeLabel;
pub use crate::error::{DataError, Error, LoadError, LookupError, Result};
pub use crate::loader::source::{FileRoomSource, HttpRoomSource, RoomSource};

use crate::config::Settings;

/// Loads a catalog from the configured HTTP endpoint in a single attempt.
pub async fn load_catalog(settings: &Settings) -> Result<RoomCatalog> {
    let source = HttpRoomSource::from_settings(settings)?;
    let mut catalog = RoomCatalog::new();
    catalog.load(&source).await?;

    Ok(catalog)
}
