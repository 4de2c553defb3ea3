//! Goals domain service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    GetPracticeGoalsResponse, PracticeGoalsCommand, PracticeGoalsQuery, PracticeGoalsRepository,
    PracticeGoalsRepositoryError, ReplacePracticeGoalsRequest, ReplacePracticeGoalsResponse,
};
use crate::domain::{Error, PracticeGoals};

pub(crate) fn map_goals_repository_error(error: PracticeGoalsRepositoryError) -> Error {
    warn!(%error, "goals repository call failed");
    match error {
        PracticeGoalsRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("goals repository unavailable: {message}"))
        }
        PracticeGoalsRepositoryError::Query { message } => {
            Error::internal(format!("goals repository error: {message}"))
        }
    }
}

/// Goals service implementing the goals command and query ports.
#[derive(Clone)]
pub struct PracticeGoalsService<R> {
    goals_repo: Arc<R>,
}

impl<R> PracticeGoalsService<R> {
    pub fn new(goals_repo: Arc<R>) -> Self {
        Self { goals_repo }
    }
}

#[async_trait]
impl<R> PracticeGoalsCommand for PracticeGoalsService<R>
where
    R: PracticeGoalsRepository,
{
    async fn replace_goals(
        &self,
        request: ReplacePracticeGoalsRequest,
    ) -> Result<ReplacePracticeGoalsResponse, Error> {
        let goals = PracticeGoals::with_fresh_id(request.targets);
        self.goals_repo
            .replace(&goals)
            .await
            .map_err(map_goals_repository_error)?;

        info!(goals_id = %goals.id(), "practice goals replaced");
        Ok(ReplacePracticeGoalsResponse {
            goals: goals.into(),
        })
    }
}

#[async_trait]
impl<R> PracticeGoalsQuery for PracticeGoalsService<R>
where
    R: PracticeGoalsRepository,
{
    async fn get_goals(&self) -> Result<GetPracticeGoalsResponse, Error> {
        let goals = self
            .goals_repo
            .load()
            .await
            .map_err(map_goals_repository_error)?;
        Ok(GetPracticeGoalsResponse {
            goals: goals.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;
    use uuid::Uuid;

    use super::*;
    use crate::domain::ports::MockPracticeGoalsRepository;
    use crate::domain::{ErrorCode, GoalTargets};

    #[tokio::test]
    async fn replace_goals_stores_targets_under_fresh_id() {
        let previous_id = Uuid::new_v4();
        let targets = GoalTargets::new(15, 100, 400).expect("valid targets");

        let mut repo = MockPracticeGoalsRepository::new();
        repo.expect_replace()
            .times(1)
            .withf(move |goals| goals.id() != previous_id && goals.targets() == &targets)
            .return_once(|_| Ok(()));

        let response = PracticeGoalsService::new(Arc::new(repo))
            .replace_goals(ReplacePracticeGoalsRequest { targets })
            .await
            .expect("replace succeeds");

        assert_ne!(response.goals.id, previous_id);
        assert_eq!(response.goals.daily_minutes, 15);
        assert_eq!(response.goals.weekly_minutes, 100);
        assert_eq!(response.goals.monthly_minutes, 400);
    }

    #[tokio::test]
    async fn get_goals_returns_stored_record() {
        let stored = PracticeGoals::new(Uuid::new_v4(), GoalTargets::default());
        let mut repo = MockPracticeGoalsRepository::new();
        repo.expect_load().times(1).return_once(move || Ok(stored));

        let response = PracticeGoalsService::new(Arc::new(repo))
            .get_goals()
            .await
            .expect("load succeeds");

        assert_eq!(response.goals.id, stored.id());
        assert_eq!(response.goals.daily_minutes, 30);
    }

    #[rstest]
    #[case(PracticeGoalsRepositoryError::connection("down"), ErrorCode::ServiceUnavailable)]
    #[case(PracticeGoalsRepositoryError::query("broken"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn repository_errors_are_mapped(
        #[case] repo_error: PracticeGoalsRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockPracticeGoalsRepository::new();
        repo.expect_load()
            .times(1)
            .return_once(move || Err(repo_error));

        let error = PracticeGoalsService::new(Arc::new(repo))
            .get_goals()
            .await
            .expect_err("load fails");

        assert_eq!(error.code(), expected);
    }
}
