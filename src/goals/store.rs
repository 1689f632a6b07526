//! Goal persistence.
//!
//! T031: GoalRepository over a single JSON blob
//!
//! All goals live in one JSON object keyed by exercise display name, stored
//! under a fixed key. A blob that is missing or fails to decode reads as "no
//! goals yet"; the next save replaces it.

use std::collections::BTreeMap;

use thiserror::Error;

use super::types::{ExerciseGoals, GoalSet};
use crate::storage::kv::{KeyValueStore, StorageError};

/// Key the goal blob is stored under.
pub const GOALS_KEY: &str = "exerciseGoals";

/// Read/write access to per-exercise goals.
pub trait GoalRepository {
    /// Goals for an exercise, if any were saved.
    fn get(&self, exercise_name: &str) -> Option<ExerciseGoals>;

    /// Save goals for an exercise, replacing previous ones.
    fn put(&mut self, exercise_name: &str, goals: ExerciseGoals) -> Result<(), GoalStoreError>;

    /// Goals for an exercise, zero when absent.
    fn goals_for(&self, exercise_name: &str) -> ExerciseGoals {
        self.get(exercise_name).unwrap_or_default()
    }
}

/// Serialize a goal set to its stored form.
pub fn encode_goals(goals: &GoalSet) -> Result<Vec<u8>, GoalStoreError> {
    Ok(serde_json::to_vec(goals)?)
}

/// Parse a stored goal set.
pub fn decode_goals(bytes: &[u8]) -> Result<GoalSet, GoalStoreError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Goal repository backed by a key-value store.
#[derive(Debug, Clone)]
pub struct GoalStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> GoalStore<S> {
    /// Create a goal store using the default key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, GOALS_KEY)
    }

    /// Create a goal store using a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Underlying key-value store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read every saved goal. Missing or undecodable blobs read as empty.
    pub fn load_all(&self) -> GoalSet {
        self.store
            .get(&self.key)
            .and_then(|bytes| decode_goals(&bytes).ok())
            .unwrap_or_default()
    }
}

impl<S: KeyValueStore> GoalRepository for GoalStore<S> {
    fn get(&self, exercise_name: &str) -> Option<ExerciseGoals> {
        self.load_all().get(exercise_name).copied()
    }

    fn put(&mut self, exercise_name: &str, goals: ExerciseGoals) -> Result<(), GoalStoreError> {
        let mut all = self.load_all();
        all.insert(exercise_name.to_string(), goals);

        let bytes = encode_goals(&all)?;
        self.store.set(&self.key, &bytes)?;

        tracing::info!(
            "Saved goals for '{}' (weight {}, reps {}, duration {})",
            exercise_name,
            goals.weight,
            goals.reps,
            goals.duration
        );
        Ok(())
    }
}

impl GoalRepository for GoalSet {
    fn get(&self, exercise_name: &str) -> Option<ExerciseGoals> {
        BTreeMap::get(self, exercise_name).copied()
    }

    fn put(&mut self, exercise_name: &str, goals: ExerciseGoals) -> Result<(), GoalStoreError> {
        self.insert(exercise_name.to_string(), goals);
        Ok(())
    }
}

/// Goal persistence errors.
#[derive(Debug, Error)]
pub enum GoalStoreError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
