//! GoalStore running on the SQLite adapter, including restarts.

use rust_decimal_macros::dec;
use sparksave_core::{GoalServiceTrait, GoalStore, GoalUpdate, NewGoal};
use sparksave_storage_sqlite::SqliteKeyValueStore;
use std::sync::Arc;
use tempfile::tempdir;

fn open_store(db_path: &str) -> GoalStore {
    let storage = SqliteKeyValueStore::open(db_path).unwrap();
    let store = GoalStore::new(Arc::new(storage));
    store.initialize().unwrap();
    store
}

#[test]
fn test_first_start_seeds_and_persists_demo_goal() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("sparksave.db");
    let db_path = db_path.to_str().unwrap();

    let first = open_store(db_path);
    let seeded = first.get_goals();
    assert_eq!(seeded.len(), 1);
    assert_eq!(seeded[0].name, "Emergency Fund");
    drop(first);

    // second start loads the same seed instead of creating another
    let second = open_store(db_path);
    assert_eq!(second.get_goals(), seeded);
}

#[test]
fn test_mutations_survive_restart() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("sparksave.db");
    let db_path = db_path.to_str().unwrap();

    let store = open_store(db_path);
    let bike = store
        .add_goal(NewGoal::new("Bike", dec!(8000), dec!(0), "commute"))
        .unwrap();
    store.contribute(bike.id, dec!(8000)).unwrap();
    let trip = store
        .add_goal(NewGoal::new("Trip", dec!(20000), dec!(500), ""))
        .unwrap();
    store
        .update_goal(trip.id, GoalUpdate::new("Island trip", dec!(25000), "summer"))
        .unwrap();
    let expected = store.get_goals();
    drop(store);

    let reopened = open_store(db_path);
    assert_eq!(reopened.get_goals(), expected);
    let bike = reopened.get_goal(bike.id).unwrap();
    assert!(bike.completed_at.is_some());
    assert_eq!(reopened.get_goal(trip.id).unwrap().name, "Island trip");
}

#[test]
fn test_clear_then_restart_reseeds() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("sparksave.db");
    let db_path = db_path.to_str().unwrap();

    let store = open_store(db_path);
    store
        .add_goal(NewGoal::new("Watch", dec!(1000), dec!(0), ""))
        .unwrap();
    store.clear_all_goals().unwrap();
    assert!(store.get_goals().is_empty());
    drop(store);

    let reopened = open_store(db_path);
    assert_eq!(reopened.get_goals().len(), 1);
    assert_eq!(reopened.get_goals()[0].name, "Emergency Fund");
}
