//! Practice goals HTTP handlers.
//!
//! ```text
//! GET  /api/goals
//! POST /api/goals
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{PracticeGoalsPayload, ReplacePracticeGoalsRequest};
use crate::domain::{Error, GoalPeriod, GoalTargets, goal_minutes};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, ValidationIssues};

/// Replacement goal targets in minutes.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalsRequestBody {
    #[schema(minimum = 1, example = 30)]
    pub daily_minutes: Option<i64>,
    #[schema(minimum = 1, example = 210)]
    pub weekly_minutes: Option<i64>,
    #[schema(minimum = 1, example = 900)]
    pub monthly_minutes: Option<i64>,
}

/// Current goals record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalsResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub daily_minutes: u32,
    pub weekly_minutes: u32,
    pub monthly_minutes: u32,
}

impl From<PracticeGoalsPayload> for GoalsResponseBody {
    fn from(value: PracticeGoalsPayload) -> Self {
        Self {
            id: value.id.to_string(),
            daily_minutes: value.daily_minutes,
            weekly_minutes: value.weekly_minutes,
            monthly_minutes: value.monthly_minutes,
        }
    }
}

fn target(
    issues: &mut ValidationIssues,
    field: FieldName,
    period: GoalPeriod,
    value: Option<i64>,
) -> Option<u32> {
    let Some(value) = value else {
        issues.missing(field);
        return None;
    };
    issues.check(field, goal_minutes(period, value))
}

fn parse_goals_body(body: GoalsRequestBody) -> Result<GoalTargets, Error> {
    let mut issues = ValidationIssues::default();
    let daily = target(
        &mut issues,
        FieldName::new("dailyMinutes"),
        GoalPeriod::Daily,
        body.daily_minutes,
    );
    let weekly = target(
        &mut issues,
        FieldName::new("weeklyMinutes"),
        GoalPeriod::Weekly,
        body.weekly_minutes,
    );
    let monthly = target(
        &mut issues,
        FieldName::new("monthlyMinutes"),
        GoalPeriod::Monthly,
        body.monthly_minutes,
    );

    issues.finish(|| {
        GoalTargets::new(
            i64::from(daily?),
            i64::from(weekly?),
            i64::from(monthly?),
        )
        .ok()
    })
}

/// Return the current goals.
#[utoipa::path(
    get,
    path = "/api/goals",
    responses(
        (status = 200, description = "Current goals", body = GoalsResponseBody),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["goals"],
    operation_id = "getGoals"
)]
#[get("/goals")]
pub async fn get_goals(state: web::Data<HttpState>) -> ApiResult<web::Json<GoalsResponseBody>> {
    let response = state.goals_query.get_goals().await?;
    Ok(web::Json(GoalsResponseBody::from(response.goals)))
}

/// Replace the goals record; a fresh id is assigned.
#[utoipa::path(
    post,
    path = "/api/goals",
    request_body = GoalsRequestBody,
    responses(
        (status = 200, description = "Goals replaced", body = GoalsResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["goals"],
    operation_id = "replaceGoals"
)]
#[post("/goals")]
pub async fn replace_goals(
    state: web::Data<HttpState>,
    payload: web::Json<GoalsRequestBody>,
) -> ApiResult<web::Json<GoalsResponseBody>> {
    let targets = parse_goals_body(payload.into_inner())?;
    let response = state
        .goals
        .replace_goals(ReplacePracticeGoalsRequest { targets })
        .await?;
    Ok(web::Json(GoalsResponseBody::from(response.goals)))
}
