//! Domain primitives, services and ports.
//!
//! Purpose: define the practice-tracking entities, the pure statistics and
//! timer logic, and the services implementing the driving ports. Nothing here
//! depends on actix-web or on a concrete storage engine.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - PracticeSession, PracticeGoals, Rating: stored entities.
//! - compute_practice_stats, compute_goal_progress: pure aggregators.
//! - PracticeTimer, TimerSession: the session timer.

pub mod error;
pub mod ports;
pub mod practice;
pub mod stats;
pub mod timer;

mod goals_service;
mod practice_session_service;
mod stats_service;
mod trace_id;

#[cfg(test)]
pub(crate) mod fixture_clock;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::goals_service::PracticeGoalsService;
pub use self::practice::{
    FOCUS_AREA_PRESETS, GoalPeriod, GoalTargets, PracticeGoals, PracticeSession,
    PracticeSessionChanges, PracticeSessionDraft, PracticeValidationError, Rating,
    duration_from_seconds, focus_label_for_average, goal_minutes, mood_label_for_average,
    rating_from_value,
};
pub use self::practice_session_service::PracticeSessionService;
pub use self::stats::{
    Achievements, FocusAreaCount, GoalProgress, GoalProgressReport, PracticeDay, PracticeStats,
    RatingCount, TrendPoint, compute_goal_progress, compute_practice_stats,
};
pub use self::stats_service::PracticeStatsService;
pub use self::timer::{
    PracticeTimer, SessionMetadata, TimerError, TimerSession, TimerState, default_session_name,
    format_hms,
};
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use practice_tracker::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such session"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
