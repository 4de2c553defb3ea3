//! In-process practice session storage.
//!
//! Contents live only as long as the process.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::PracticeSession;
use crate::domain::ports::{PracticeSessionRepository, PracticeSessionRepositoryError};

/// Session repository backed by a `HashMap` behind an async `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryPracticeSessionRepository {
    sessions: RwLock<HashMap<Uuid, PracticeSession>>,
}

impl InMemoryPracticeSessionRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PracticeSessionRepository for InMemoryPracticeSessionRepository {
    async fn save(&self, session: &PracticeSession) -> Result<(), PracticeSessionRepositoryError> {
        self.sessions
            .write()
            .await
            .insert(session.id(), session.clone());
        Ok(())
    }

    async fn replace_existing(
        &self,
        session: &PracticeSession,
    ) -> Result<bool, PracticeSessionRepositoryError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&session.id()) {
            Some(stored) => {
                *stored = session.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_id(
        &self,
        session_id: &Uuid,
    ) -> Result<Option<PracticeSession>, PracticeSessionRepositoryError> {
        Ok(self.sessions.read().await.get(session_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<PracticeSession>, PracticeSessionRepositoryError> {
        Ok(self.sessions.read().await.values().cloned().collect())
    }

    async fn delete(&self, session_id: &Uuid) -> Result<bool, PracticeSessionRepositoryError> {
        Ok(self.sessions.write().await.remove(session_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::Utc;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::{PracticeSessionChanges, PracticeSessionDraft, Rating};

    #[fixture]
    fn session() -> PracticeSession {
        PracticeSession::new(PracticeSessionDraft {
            id: Uuid::new_v4(),
            name: "Ear training".to_owned(),
            description: None,
            notes: None,
            focus_area: Some("Ear Training".to_owned()),
            mood: Rating::Three,
            focus: Rating::Three,
            duration_seconds: 420,
            date: Utc::now(),
        })
        .expect("valid session")
    }

    #[rstest]
    #[tokio::test]
    async fn save_then_find_returns_session(session: PracticeSession) {
        let repo = InMemoryPracticeSessionRepository::new();
        repo.save(&session).await.expect("save succeeds");

        let found = repo.find_by_id(&session.id()).await.expect("lookup succeeds");

        assert_eq!(found, Some(session));
    }

    #[rstest]
    #[tokio::test]
    async fn save_replaces_existing_entry(session: PracticeSession) {
        let repo = InMemoryPracticeSessionRepository::new();
        repo.save(&session).await.expect("save succeeds");
        let updated = session
            .apply(PracticeSessionChanges {
                duration_seconds: Some(480),
                ..PracticeSessionChanges::default()
            })
            .expect("valid update");
        repo.save(&updated).await.expect("save succeeds");

        let listed = repo.list_all().await.expect("list succeeds");

        assert_eq!(listed, vec![updated]);
    }

    #[rstest]
    #[tokio::test]
    async fn replace_existing_skips_deleted_ids(session: PracticeSession) {
        let repo = InMemoryPracticeSessionRepository::new();
        repo.save(&session).await.expect("save succeeds");
        let renamed = session
            .apply(PracticeSessionChanges {
                name: Some("Intervals".to_owned()),
                ..PracticeSessionChanges::default()
            })
            .expect("valid update");

        assert!(repo.replace_existing(&renamed).await.expect("replace succeeds"));
        assert!(repo.delete(&session.id()).await.expect("delete succeeds"));
        assert!(!repo.replace_existing(&renamed).await.expect("replace succeeds"));
        assert!(repo.list_all().await.expect("list succeeds").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_once(session: PracticeSession) {
        let repo = InMemoryPracticeSessionRepository::new();
        repo.save(&session).await.expect("save succeeds");

        assert!(repo.delete(&session.id()).await.expect("delete succeeds"));
        assert!(!repo.delete(&session.id()).await.expect("delete succeeds"));
        assert!(repo.list_all().await.expect("list succeeds").is_empty());
    }
}
