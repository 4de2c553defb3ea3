//! Port for the singleton goals record.

use async_trait::async_trait;

use crate::domain::{GoalTargets, PracticeGoals};

use super::define_port_error;

define_port_error! {
    /// Errors raised by goals repository adapters.
    pub enum PracticeGoalsRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "goals repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "goals repository query failed: {message}",
    }
}

/// Port for reading and replacing the goals record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PracticeGoalsRepository: Send + Sync {
    /// Read the current goals record.
    async fn load(&self) -> Result<PracticeGoals, PracticeGoalsRepositoryError>;

    /// Replace the goals record wholesale.
    async fn replace(&self, goals: &PracticeGoals) -> Result<(), PracticeGoalsRepositoryError>;
}

/// Fixture implementation that always reports the default targets.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePracticeGoalsRepository;

#[async_trait]
impl PracticeGoalsRepository for FixturePracticeGoalsRepository {
    async fn load(&self) -> Result<PracticeGoals, PracticeGoalsRepositoryError> {
        Ok(PracticeGoals::new(uuid::Uuid::nil(), GoalTargets::default()))
    }

    async fn replace(&self, _goals: &PracticeGoals) -> Result<(), PracticeGoalsRepositoryError> {
        Ok(())
    }
}
