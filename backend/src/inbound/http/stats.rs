//! Practice statistics HTTP handler.
//!
//! ```text
//! GET /api/stats?days=30
//! ```
//!
//! The handler is a thin read over [`crate::domain::ports::PracticeStatsQuery`];
//! all figures are computed in the domain. Averages are returned at full
//! precision alongside the labels of their nearest rating level.

use actix_web::{get, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{PracticeStatsRequest, PracticeStatsResponse};
use crate::domain::{
    Achievements, Error, GoalProgress, GoalProgressReport, PracticeStats, Rating, RatingCount,
    focus_label_for_average, mood_label_for_average,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Query string accepted by the stats endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatsQuery {
    /// Trailing window in days; defaults to 30.
    #[param(minimum = 1, maximum = 3650)]
    pub days: Option<u32>,
}

/// Statistics snapshot plus progress against the current goals.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponseBody {
    pub stats: PracticeStatsBody,
    pub goal_progress: GoalProgressReportBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PracticeStatsBody {
    pub window_days: u32,
    pub total_sessions: u32,
    pub total_seconds: u64,
    pub avg_per_session: f64,
    pub avg_per_day: f64,
    pub days_with_practice: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub avg_mood: f64,
    /// Empty when no session falls inside the window.
    pub avg_mood_label: String,
    pub avg_focus: f64,
    pub avg_focus_label: String,
    pub focus_areas: Vec<FocusAreaCountBody>,
    pub mood_distribution: Vec<RatingCountBody>,
    pub focus_distribution: Vec<RatingCountBody>,
    pub trend: Vec<TrendPointBody>,
    pub practice_days: Vec<PracticeDayBody>,
    pub achievements: AchievementsBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FocusAreaCountBody {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingCountBody {
    #[schema(minimum = 1, maximum = 5)]
    pub rating: u8,
    pub label: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendPointBody {
    #[schema(format = "date", example = "2026-03-09")]
    pub date: String,
    pub minutes: u64,
    pub mood: Option<f64>,
    pub focus: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PracticeDayBody {
    #[schema(format = "date", example = "2026-03-09")]
    pub date: String,
    pub seconds: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AchievementsBody {
    pub seven_day_streak: bool,
    pub thirty_sessions: bool,
    pub ten_hours: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressReportBody {
    pub daily: GoalProgressBody,
    pub weekly: GoalProgressBody,
    pub monthly: GoalProgressBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressBody {
    pub practiced_minutes: u64,
    pub target_minutes: u32,
    /// Capped at 100.
    pub percent: f64,
    pub remaining_minutes: u64,
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn rating_counts(
    counts: Vec<RatingCount>,
    label: fn(Rating) -> &'static str,
) -> Vec<RatingCountBody> {
    counts
        .into_iter()
        .map(|entry| RatingCountBody {
            rating: entry.rating.value(),
            label: label(entry.rating).to_owned(),
            count: entry.count,
        })
        .collect()
}

impl From<Achievements> for AchievementsBody {
    fn from(value: Achievements) -> Self {
        Self {
            seven_day_streak: value.seven_day_streak,
            thirty_sessions: value.thirty_sessions,
            ten_hours: value.ten_hours,
        }
    }
}

impl From<PracticeStats> for PracticeStatsBody {
    fn from(value: PracticeStats) -> Self {
        Self {
            window_days: value.window_days,
            total_sessions: value.total_sessions,
            total_seconds: value.total_seconds,
            avg_per_session: value.avg_seconds_per_session,
            avg_per_day: value.avg_seconds_per_day,
            days_with_practice: value.days_with_practice,
            current_streak: value.current_streak,
            longest_streak: value.longest_streak,
            avg_mood: value.avg_mood,
            avg_mood_label: mood_label_for_average(value.avg_mood).to_owned(),
            avg_focus: value.avg_focus,
            avg_focus_label: focus_label_for_average(value.avg_focus).to_owned(),
            focus_areas: value
                .focus_areas
                .into_iter()
                .map(|entry| FocusAreaCountBody {
                    name: entry.name,
                    count: entry.count,
                })
                .collect(),
            mood_distribution: rating_counts(value.mood_distribution, Rating::mood_label),
            focus_distribution: rating_counts(value.focus_distribution, Rating::focus_label),
            trend: value
                .trend
                .into_iter()
                .map(|point| TrendPointBody {
                    date: format_date(point.date),
                    minutes: point.minutes,
                    mood: point.mood,
                    focus: point.focus,
                })
                .collect(),
            practice_days: value
                .practice_days
                .into_iter()
                .map(|day| PracticeDayBody {
                    date: format_date(day.date),
                    seconds: day.seconds,
                })
                .collect(),
            achievements: value.achievements.into(),
        }
    }
}

impl From<GoalProgress> for GoalProgressBody {
    fn from(value: GoalProgress) -> Self {
        Self {
            practiced_minutes: value.practiced_minutes,
            target_minutes: value.target_minutes,
            percent: value.percent,
            remaining_minutes: value.remaining_minutes,
        }
    }
}

impl From<GoalProgressReport> for GoalProgressReportBody {
    fn from(value: GoalProgressReport) -> Self {
        Self {
            daily: value.daily.into(),
            weekly: value.weekly.into(),
            monthly: value.monthly.into(),
        }
    }
}

impl From<PracticeStatsResponse> for StatsResponseBody {
    fn from(value: PracticeStatsResponse) -> Self {
        Self {
            stats: value.stats.into(),
            goal_progress: value.goal_progress.into(),
        }
    }
}

fn parse_stats_query(query: StatsQuery) -> Result<PracticeStatsRequest, Error> {
    PracticeStatsRequest {
        window_days: query
            .days
            .unwrap_or(PracticeStatsRequest::DEFAULT_WINDOW_DAYS),
    }
    .validate()
}

/// Compute practice statistics over a trailing window of days.
#[utoipa::path(
    get,
    path = "/api/stats",
    params(StatsQuery),
    responses(
        (status = 200, description = "Statistics snapshot", body = StatsResponseBody),
        (status = 400, description = "Invalid window", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["stats"],
    operation_id = "getStats"
)]
#[get("/stats")]
pub async fn get_stats(
    state: web::Data<HttpState>,
    query: web::Query<StatsQuery>,
) -> ApiResult<web::Json<StatsResponseBody>> {
    let request = parse_stats_query(query.into_inner())?;
    let response = state.stats.get_stats(request).await?;
    Ok(web::Json(StatsResponseBody::from(response)))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::inbound::http::test_utils::{in_memory_state, test_app};

    #[actix_web::test]
    async fn empty_store_yields_zeroed_window() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/stats").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: StatsResponseBody = actix_test::read_body_json(response).await;
        assert_eq!(body.stats.window_days, 30);
        assert_eq!(body.stats.total_sessions, 0);
        assert_eq!(body.stats.trend.len(), 30);
        assert!(body.stats.trend.iter().all(|point| point.minutes == 0));
        assert_eq!(body.stats.mood_distribution.len(), 5);
        assert_eq!(body.stats.avg_mood_label, "");
        assert_eq!(body.goal_progress.daily.target_minutes, 30);
        assert_eq!(body.goal_progress.daily.remaining_minutes, 30);
    }

    #[actix_web::test]
    async fn stats_reflect_created_sessions() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        for (mood, duration) in [(4, 600), (5, 1_230)] {
            let response = actix_test::call_service(
                &app,
                actix_test::TestRequest::post()
                    .uri("/api/sessions")
                    .set_json(json!({
                        "name": "Scales",
                        "focusArea": "Technique",
                        "mood": mood,
                        "focus": 4,
                        "duration": duration
                    }))
                    .to_request(),
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let body: Value = actix_test::read_body_json(
            actix_test::call_service(
                &app,
                actix_test::TestRequest::get()
                    .uri("/api/stats?days=7")
                    .to_request(),
            )
            .await,
        )
        .await;

        let stats = &body["stats"];
        assert_eq!(stats["totalSessions"], 2);
        assert_eq!(stats["totalSeconds"], 1_830);
        assert_eq!(stats["avgPerSession"], 915.0);
        assert_eq!(stats["daysWithPractice"], 1);
        assert_eq!(stats["currentStreak"], 1);
        assert_eq!(stats["avgMood"], 4.5);
        assert_eq!(stats["avgFocusLabel"], "Focused");
        assert_eq!(stats["focusAreas"], json!([{ "name": "Technique", "count": 2 }]));
        assert_eq!(stats["trend"].as_array().map(Vec::len), Some(7));
        assert_eq!(stats["trend"][6]["minutes"], 31);
        assert_eq!(body["goalProgress"]["daily"]["practicedMinutes"], 31);
        assert_eq!(body["goalProgress"]["daily"]["percent"], 100.0);
    }

    #[rstest]
    #[case::zero("/api/stats?days=0", "out_of_range")]
    #[case::too_large("/api/stats?days=3651", "out_of_range")]
    #[case::negative("/api/stats?days=-3", "invalid_type")]
    #[case::not_a_number("/api/stats?days=week", "invalid_type")]
    #[actix_web::test]
    async fn invalid_windows_are_rejected(#[case] uri: &str, #[case] code: &str) {
        let app = actix_test::init_service(test_app(in_memory_state())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri(uri).to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["issues"][0]["code"], code);
    }
}
