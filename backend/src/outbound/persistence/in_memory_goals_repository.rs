//! In-process storage for the singleton goals record.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{PracticeGoalsRepository, PracticeGoalsRepositoryError};
use crate::domain::{GoalTargets, PracticeGoals};

/// Goals repository holding exactly one record.
#[derive(Debug)]
pub struct InMemoryGoalsRepository {
    goals: RwLock<PracticeGoals>,
}

impl InMemoryGoalsRepository {
    /// Creates a repository seeded with `targets` under a fresh id.
    pub fn new(targets: GoalTargets) -> Self {
        Self {
            goals: RwLock::new(PracticeGoals::with_fresh_id(targets)),
        }
    }
}

impl Default for InMemoryGoalsRepository {
    fn default() -> Self {
        Self::new(GoalTargets::default())
    }
}

#[async_trait]
impl PracticeGoalsRepository for InMemoryGoalsRepository {
    async fn load(&self) -> Result<PracticeGoals, PracticeGoalsRepositoryError> {
        Ok(*self.goals.read().await)
    }

    async fn replace(&self, goals: &PracticeGoals) -> Result<(), PracticeGoalsRepositoryError> {
        *self.goals.write().await = *goals;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[tokio::test]
    async fn default_repository_holds_default_targets() {
        let repo = InMemoryGoalsRepository::default();
        let goals = repo.load().await.expect("load succeeds");
        assert_eq!(goals.targets(), &GoalTargets::default());
    }

    #[tokio::test]
    async fn replace_swaps_whole_record() {
        let repo = InMemoryGoalsRepository::default();
        let before = repo.load().await.expect("load succeeds");
        let replacement =
            PracticeGoals::with_fresh_id(GoalTargets::new(10, 70, 300).expect("valid targets"));

        repo.replace(&replacement).await.expect("replace succeeds");
        let after = repo.load().await.expect("load succeeds");

        assert_eq!(after, replacement);
        assert_ne!(after.id(), before.id());
    }
}
