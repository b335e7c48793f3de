
use std::sync::Arc;
use std::time::Duration;

use room_viewer::{LoadError, LoadState, LookupError, RoomStore, SortCriterion, TimeLabel};
use source_mock::{GatedSource, MockSource, SCENARIO_ROOMS};

async fn wait_for_state(store: &RoomStore, state: LoadState) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while store.state() != state {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("store never reached the expected state");
}

#[tokio::test]
async fn load_populates_store() {
    let store = RoomStore::new();
    assert_eq!(store.state(), LoadState::Idle);
    assert!(store.is_empty());

    assert_eq!(store.load(&MockSource::body(SCENARIO_ROOMS)).await.unwrap(), 2);

    assert_eq!(store.state(), LoadState::Loaded);
    assert_eq!(store.len(), 2);
    assert_eq!(store.is_available_at("A", TimeLabel::parse("08:00").unwrap()), Ok(true));
    assert_eq!(store.room("B").map(|room| room.capacity()), Some(10));
}

#[tokio::test]
async fn clones_share_the_same_catalog() {
    let store = RoomStore::new();
    let view = store.clone();

    store.load(&MockSource::body(SCENARIO_ROOMS)).await.unwrap();
    store.sort_by(SortCriterion::Level);

    let names: Vec<String> = view.rooms().iter().map(|room| room.name().to_string()).collect();
    assert_eq!(names, vec!["B", "A"]);
    assert_eq!(view.catalog().last_sort(), Some(SortCriterion::Level));
}

#[tokio::test]
async fn failed_load_keeps_previous_catalog() {
    let store = RoomStore::new();
    store.load(&MockSource::body(SCENARIO_ROOMS)).await.unwrap();
    let before = store.rooms();

    let result = store.load(&MockSource::status(503)).await;

    assert!(matches!(result, Err(LoadError::HttpStatus { status: 503, .. })));
    assert_eq!(store.state(), LoadState::Failed);
    assert_eq!(store.rooms(), before);

    // A failed store can be loaded again.
    assert_eq!(store.load(&MockSource::body(SCENARIO_ROOMS)).await.unwrap(), 2);
    assert_eq!(store.state(), LoadState::Loaded);
}

#[tokio::test]
async fn second_load_while_pending_is_rejected() {
    let store = RoomStore::new();
    let source = Arc::new(GatedSource::new(SCENARIO_ROOMS));

    let pending = {
        let store = store.clone();
        let source = Arc::clone(&source);
        tokio::spawn(async move { store.load(source.as_ref()).await })
    };

    wait_for_state(&store, LoadState::Loading).await;
    assert!(store.is_loading());

    let second = MockSource::body("[]");
    assert!(matches!(store.load(&second).await, Err(LoadError::AlreadyLoading)));
    assert_eq!(second.fetches(), 0);
    assert!(store.is_empty());

    source.release();
    assert_eq!(pending.await.unwrap().unwrap(), 2);
    assert_eq!(store.state(), LoadState::Loaded);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn dropped_load_restores_previous_state() {
    let store = RoomStore::new();
    store.load(&MockSource::body(SCENARIO_ROOMS)).await.unwrap();

    let source = GatedSource::new("[]");
    let abandoned = tokio::time::timeout(Duration::from_millis(50), store.load(&source)).await;

    assert!(abandoned.is_err());
    assert_eq!(store.state(), LoadState::Loaded);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn lookups_on_an_empty_store_report_unknown_room() {
    let store = RoomStore::new();
    assert_eq!(
        store.is_available_at("A", TimeLabel::parse("08:00").unwrap()),
        Err(LookupError::UnknownRoom("A".to_string()))
    );
}
