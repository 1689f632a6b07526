//! Integration tests for file-backed goal persistence.
//!
//! T032: Goals survive reopening the store

use repchart::goals::{decode_goals, GoalForm, GoalRepository, GoalStore, GOALS_KEY};
use repchart::storage::{FileStore, KeyValueStore};
use repchart::ExerciseGoals;
use tempfile::TempDir;

#[test]
fn test_goals_survive_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = GoalStore::new(FileStore::new(dir.path()));
        store.put("Bench Press", ExerciseGoals::new(185.0, 8, 0)).unwrap();
        store.put("Plank", ExerciseGoals::new(0.0, 0, 5)).unwrap();
    }

    let store = GoalStore::new(FileStore::new(dir.path()));
    assert_eq!(store.get("Bench Press"), Some(ExerciseGoals::new(185.0, 8, 0)));
    assert_eq!(store.goals_for("Plank").duration, 5);
    assert_eq!(store.goals_for("Deadlift"), ExerciseGoals::default());
}

#[test]
fn test_stored_blob_is_name_keyed_json() {
    let dir = TempDir::new().unwrap();
    let mut store = GoalStore::new(FileStore::new(dir.path()));
    store.put("Pushups", ExerciseGoals::new(50.0, 20, 90)).unwrap();

    let bytes = store.store().get(GOALS_KEY).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"Pushups": {"weight": 50.0, "reps": 20, "duration": 90}})
    );
    assert_eq!(decode_goals(&bytes).unwrap().len(), 1);
}

#[test]
fn test_corrupt_file_reads_as_no_goals() {
    let dir = TempDir::new().unwrap();
    let mut kv = FileStore::new(dir.path());
    kv.set(GOALS_KEY, b"{\"Pushups\": 12").unwrap();

    let mut store = GoalStore::new(kv);
    assert!(store.get("Pushups").is_none());

    let form = GoalForm::new(Some("Pushups"), ExerciseGoals::new(40.0, 15, 0));
    form.save(&mut store).unwrap();
    assert_eq!(store.goals_for("Pushups").reps, 15);
}
