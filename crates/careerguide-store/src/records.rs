//! Typed access to the profile, likes, and quiz results.
//!
//! Key layout: `user` holds the signed-in profile, `likes_{name}` the liked
//! items of that user, and `quiz_{name}` their most recent quiz result. Likes
//! and quiz results survive logout so signing in again under the same name
//! restores them.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use careerguide_core::engine::{QuizAnswers, QuizSession, Recommendation};
use careerguide_core::likes::LikedItems;
use careerguide_core::model::Profile;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

pub const USER_KEY: &str = "user";

pub fn likes_key(name: &str) -> String {
    format!("likes_{name}")
}

pub fn quiz_key(name: &str) -> String {
    format!("quiz_{name}")
}

/// A completed quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub id: Uuid,
    pub completed_at: DateTime<Utc>,
    /// Class level the quiz was started from, if any.
    #[serde(default)]
    pub class_level: Option<String>,
    pub answers: QuizAnswers,
    pub recommendation: Recommendation,
}

impl QuizRecord {
    /// Snapshot a finished session. Returns `None` while it is still running.
    pub fn from_session(
        session: &QuizSession<'_>,
        class_level: Option<String>,
        completed_at: DateTime<Utc>,
    ) -> Option<Self> {
        let recommendation = *session.recommendation()?;
        Some(Self {
            id: session.id(),
            completed_at,
            class_level,
            answers: session.answers()?.clone(),
            recommendation,
        })
    }
}

/// Application records on top of any [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct AppStore<S> {
    kv: S,
}

impl<S: KeyValueStore> AppStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn inner(&self) -> &S {
        &self.kv
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.kv.get(key)? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|source| StoreError::Corrupt {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value).map_err(|source| StoreError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.kv.set(key, value)
    }

    pub fn load_profile(&self) -> Result<Option<Profile>, StoreError> {
        self.load(USER_KEY)
    }

    pub fn save_profile(&mut self, profile: &Profile) -> Result<(), StoreError> {
        self.save(USER_KEY, profile)?;
        tracing::info!(user = %profile.name, "profile saved");
        Ok(())
    }

    pub fn clear_profile(&mut self) -> Result<(), StoreError> {
        self.kv.remove(USER_KEY)
    }

    /// Liked items for a user. Missing or unreadable data yields an empty set.
    pub fn load_likes(&self, name: &str) -> Result<LikedItems, StoreError> {
        match self.load(&likes_key(name)) {
            Ok(likes) => Ok(likes.unwrap_or_default()),
            Err(StoreError::Corrupt { key, source }) => {
                tracing::warn!(%key, error = %source, "ignoring unreadable likes");
                Ok(LikedItems::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn save_likes(&mut self, name: &str, likes: &LikedItems) -> Result<(), StoreError> {
        self.save(&likes_key(name), likes)
    }

    pub fn save_quiz_record(&mut self, name: &str, record: &QuizRecord) -> Result<(), StoreError> {
        self.save(&quiz_key(name), record)?;
        tracing::info!(user = name, attempt = %record.id, "quiz result saved");
        Ok(())
    }

    /// The last quiz result for a user. Unreadable records are treated as absent.
    pub fn load_quiz_record(&self, name: &str) -> Result<Option<QuizRecord>, StoreError> {
        match self.load(&quiz_key(name)) {
            Err(StoreError::Corrupt { key, source }) => {
                tracing::warn!(%key, error = %source, "ignoring unreadable quiz result");
                Ok(None)
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerguide_core::catalog::Catalog;
    use careerguide_core::likes::LikeKind;
    use careerguide_core::model::{Category, Gender, Stream};
    use serde_json::json;

    use crate::kv::{JsonFileStore, MemoryStore};

    fn asha() -> Profile {
        Profile::new("Asha", "Pune", Gender::Female, Category::Sc).unwrap()
    }

    #[test]
    fn profile_roundtrip_and_clear() {
        let mut store = AppStore::new(MemoryStore::new());
        assert!(store.load_profile().unwrap().is_none());

        store.save_profile(&asha()).unwrap();
        assert_eq!(store.load_profile().unwrap(), Some(asha()));

        store.clear_profile().unwrap();
        assert!(store.load_profile().unwrap().is_none());
    }

    #[test]
    fn profile_uses_documented_layout() {
        let mut store = AppStore::new(MemoryStore::new());
        store.save_profile(&asha()).unwrap();
        assert_eq!(
            store.inner().get(USER_KEY).unwrap(),
            Some(json!({
                "name": "Asha",
                "location": "Pune",
                "gender": "female",
                "category": "sc"
            }))
        );
    }

    #[test]
    fn legacy_profile_with_caste_field() {
        let mut kv = MemoryStore::new();
        kv.set(
            USER_KEY,
            json!({"name": "Ravi", "location": "Patna", "gender": "male", "caste": "obc"}),
        )
        .unwrap();
        let store = AppStore::new(kv);
        let profile = store.load_profile().unwrap().unwrap();
        assert_eq!(profile.category, Category::Obc);
    }

    #[test]
    fn corrupt_profile_is_an_error() {
        let mut kv = MemoryStore::new();
        kv.set(USER_KEY, json!({"name": 3})).unwrap();
        let store = AppStore::new(kv);
        assert!(matches!(
            store.load_profile(),
            Err(StoreError::Corrupt { ref key, .. }) if key == USER_KEY
        ));
    }

    #[test]
    fn likes_are_per_user_and_survive_logout() {
        let mut store = AppStore::new(MemoryStore::new());
        assert!(store.load_likes("Asha").unwrap().is_empty());

        let mut likes = LikedItems::default();
        likes.toggle(LikeKind::Colleges, "du");
        store.save_profile(&asha()).unwrap();
        store.save_likes("Asha", &likes).unwrap();
        store.clear_profile().unwrap();

        assert_eq!(store.load_likes("Asha").unwrap(), likes);
        assert!(store.load_likes("Ravi").unwrap().is_empty());
    }

    #[test]
    fn unreadable_likes_become_empty() {
        let mut kv = MemoryStore::new();
        kv.set(&likes_key("Asha"), json!("garbage")).unwrap();
        let store = AppStore::new(kv);
        assert!(store.load_likes("Asha").unwrap().is_empty());
    }

    #[test]
    fn quiz_record_roundtrip_on_disk() {
        let catalog = Catalog::builtin().unwrap();
        let values = [
            "business",
            "economics",
            "financial",
            "team",
            "office",
            "entrepreneurship",
        ];
        let (session, rec) = QuizSession::run(&catalog.questions, &values).unwrap();
        assert_eq!(rec.primary_stream, Stream::Commerce);

        let record = QuizRecord::from_session(&session, Some("12th-commerce".into()), Utc::now())
            .unwrap();
        assert_eq!(record.id, session.id());
        assert_eq!(record.answers.len(), 6);

        let dir = tempfile::tempdir().unwrap();
        let mut store = AppStore::new(JsonFileStore::in_dir(dir.path()));
        assert!(store.load_quiz_record("Asha").unwrap().is_none());
        store.save_quiz_record("Asha", &record).unwrap();

        let reopened = AppStore::new(JsonFileStore::in_dir(dir.path()));
        assert_eq!(reopened.load_quiz_record("Asha").unwrap(), Some(record));
    }

    #[test]
    fn unfinished_session_has_no_record() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = QuizSession::new(&catalog.questions);
        assert!(QuizRecord::from_session(&session, None, Utc::now()).is_none());
        session.start().unwrap();
        assert!(QuizRecord::from_session(&session, None, Utc::now()).is_none());
    }
}
