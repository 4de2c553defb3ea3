//! Port for practice session persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::PracticeSession;

use super::define_port_error;

define_port_error! {
    /// Errors raised by practice session repository adapters.
    pub enum PracticeSessionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "practice session repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "practice session repository query failed: {message}",
    }
}

/// Port for storing, reading and deleting practice sessions.
///
/// Each call is atomic with respect to the others.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PracticeSessionRepository: Send + Sync {
    /// Insert a session or replace the stored session with the same id.
    async fn save(&self, session: &PracticeSession) -> Result<(), PracticeSessionRepositoryError>;

    /// Overwrite a stored session, returning `false` when its id is gone.
    ///
    /// Never inserts, so an edit racing a delete cannot bring the row back.
    async fn replace_existing(
        &self,
        session: &PracticeSession,
    ) -> Result<bool, PracticeSessionRepositoryError>;

    /// Find a session by id.
    async fn find_by_id(
        &self,
        session_id: &Uuid,
    ) -> Result<Option<PracticeSession>, PracticeSessionRepositoryError>;

    /// Read every stored session in no particular order.
    async fn list_all(&self) -> Result<Vec<PracticeSession>, PracticeSessionRepositoryError>;

    /// Remove a session, returning `true` when it existed.
    async fn delete(&self, session_id: &Uuid) -> Result<bool, PracticeSessionRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePracticeSessionRepository;

#[async_trait]
impl PracticeSessionRepository for FixturePracticeSessionRepository {
    async fn save(&self, _session: &PracticeSession) -> Result<(), PracticeSessionRepositoryError> {
        Ok(())
    }

    async fn replace_existing(
        &self,
        _session: &PracticeSession,
    ) -> Result<bool, PracticeSessionRepositoryError> {
        Ok(false)
    }

    async fn find_by_id(
        &self,
        _session_id: &Uuid,
    ) -> Result<Option<PracticeSession>, PracticeSessionRepositoryError> {
        Ok(None)
    }

    async fn list_all(&self) -> Result<Vec<PracticeSession>, PracticeSessionRepositoryError> {
        Ok(Vec::new())
    }

    async fn delete(&self, _session_id: &Uuid) -> Result<bool, PracticeSessionRepositoryError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_find_returns_none() {
        let repo = FixturePracticeSessionRepository;
        let found = repo
            .find_by_id(&Uuid::new_v4())
            .await
            .expect("fixture lookup succeeds");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_delete_reports_missing() {
        let repo = FixturePracticeSessionRepository;
        let removed = repo
            .delete(&Uuid::new_v4())
            .await
            .expect("fixture delete succeeds");
        assert!(!removed);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_replace_reports_missing() {
        let repo = FixturePracticeSessionRepository;
        let session = PracticeSession::new(crate::domain::PracticeSessionDraft {
            id: Uuid::new_v4(),
            name: "Sight reading".to_owned(),
            description: None,
            notes: None,
            focus_area: None,
            mood: crate::domain::Rating::Three,
            focus: crate::domain::Rating::Three,
            duration_seconds: 60,
            date: chrono::Utc::now(),
        })
        .expect("valid session");
        let replaced = repo
            .replace_existing(&session)
            .await
            .expect("fixture replace succeeds");
        assert!(!replaced);
    }

    #[rstest]
    fn connection_error_formats_message() {
        let err = PracticeSessionRepositoryError::connection("pool closed");
        assert_eq!(
            err.to_string(),
            "practice session repository connection failed: pool closed"
        );
    }
}
