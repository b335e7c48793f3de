use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::catalog::RoomCatalog;
use crate::domain::comparator::SortCriterion;
use crate::domain::room::Room;
use crate::domain::time_label::TimeLabel;
use crate::error::{LoadError, LookupError};
use crate::loader::source::RoomSource;

/// Lifecycle of the store's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No load has been requested yet; the catalog is empty.
    Idle,
    /// A fetch is in flight. The catalog still shows the previous contents.
    Loading,
    /// The last load succeeded.
    Loaded,
    /// The last load failed; the catalog kept whatever it held before.
    Failed,
}

#[derive(Debug)]
struct StoreInner {
    catalog: RoomCatalog,
    state: LoadState,
}

/// Shared data store handed to every consumer of the room list.
///
/// The catalog inside is the single source of truth. At most one load runs at a
/// time: a second `load` while one is pending is rejected with
/// `LoadError::AlreadyLoading`. The fetch runs without holding the lock and the
/// catalog is swapped in one write once the whole response has been parsed.
#[derive(Debug, Clone)]
pub struct RoomStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl Default for RoomStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomStore {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(StoreInner { catalog: RoomCatalog::new(), state: LoadState::Idle })) }
    }

    /// Loads the catalog from `source`.
    ///
    /// # Returns
    /// The number of rooms now in the catalog, or the load error. On error the
    /// previous catalog contents are retained.
    pub async fn load(&self, source: &dyn RoomSource) -> Result<usize, LoadError> {
        let mut ticket = self.begin_load()?;

        let result = RoomCatalog::fetch_rooms(source).await;

        let mut guard = self.write();
        ticket.finished = true;

        match result {
            Ok(rooms) => {
                let count = rooms.len();
                guard.catalog.replace(rooms);
                guard.state = LoadState::Loaded;
                log::info!("Room store now holds {} rooms from '{}'.", count, source.describe());
                Ok(count)
            }
            Err(e) => {
                guard.state = LoadState::Failed;
                Err(e)
            }
        }
    }

    fn begin_load(&self) -> Result<LoadTicket<'_>, LoadError> {
        let mut guard = self.write();

        if guard.state == LoadState::Loading {
            log::debug!("Rejected room load request: another load is still pending.");
            return Err(LoadError::AlreadyLoading);
        }

        let previous = guard.state;
        guard.state = LoadState::Loading;

        Ok(LoadTicket { store: self, previous, finished: false })
    }

    pub fn state(&self) -> LoadState {
        self.read().state
    }

    pub fn is_loading(&self) -> bool {
        self.state() == LoadState::Loading
    }

    pub fn sort_by(&self, criterion: SortCriterion) {
        self.write().catalog.sort_by(criterion);
    }

    /// Snapshot of the rooms in their current order.
    pub fn rooms(&self) -> Vec<Room> {
        self.read().catalog.rooms().to_vec()
    }

    /// Snapshot of the whole catalog.
    pub fn catalog(&self) -> RoomCatalog {
        self.read().catalog.clone()
    }

    pub fn room(&self, name: &str) -> Option<Room> {
        self.read().catalog.room(name).cloned()
    }

    pub fn is_available_at(&self, name: &str, label: TimeLabel) -> Result<bool, LookupError> {
        self.read().catalog.is_room_available_at(name, label)
    }

    pub fn len(&self) -> usize {
        self.read().catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().catalog.is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Marks a load as in flight. If the load future is dropped before it finishes,
/// the store falls back to the state it had before the load began.
struct LoadTicket<'a> {
    store: &'a RoomStore,
    previous: LoadState,
    finished: bool,
}

impl Drop for LoadTicket<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.store.write().state = self.previous;
        }
    }
}
