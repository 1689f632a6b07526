//! Storage module for configuration and key-value blobs.

pub mod config;
pub mod kv;

pub use config::{AppConfig, ChartSettings, ConfigError, GoalSettings, Units};
pub use kv::{FileStore, KeyValueStore, MemoryStore, StorageError};
