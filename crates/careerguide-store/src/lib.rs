//! careerguide-store: persisted state and configuration.
//!
//! Keeps the signed-in profile, per-user liked items, and the latest quiz
//! result in a single JSON state file, and loads the tool's configuration.

pub mod config;
pub mod error;
pub mod kv;
pub mod records;

pub use config::{load_config, load_config_from, CareerGuideConfig};
pub use error::StoreError;
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use records::{AppStore, QuizRecord};
