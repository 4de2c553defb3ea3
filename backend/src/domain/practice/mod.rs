//! Practice session and goal domain types.
//!
//! A practice session records one timed practice interval together with the
//! musician's self-reported mood and focus. Goals hold the singleton target
//! minutes per day, week, and month.

use std::fmt;

mod goals;
mod rating;
mod session;
mod validation;

pub use goals::{GoalPeriod, GoalTargets, PracticeGoals};
pub use rating::{Rating, focus_label_for_average, mood_label_for_average};
pub use session::{PracticeSession, PracticeSessionChanges, PracticeSessionDraft};
pub use validation::{duration_from_seconds, goal_minutes, rating_from_value};

/// Focus areas offered by the timer when saving a session.
pub const FOCUS_AREA_PRESETS: [&str; 8] = [
    "Scales & Exercises",
    "Sight Reading",
    "Repertoire",
    "Technique",
    "Music Theory",
    "Improvisation",
    "Ear Training",
    "Other",
];

/// Validation errors raised by practice constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PracticeValidationError {
    BlankName,
    RatingOutOfRange { value: i64 },
    NegativeDuration { value: i64 },
    DurationTooLarge { value: i64 },
    NonPositiveGoal { period: GoalPeriod, value: i64 },
    GoalTooLarge { period: GoalPeriod, value: i64 },
}

impl PracticeValidationError {
    /// Stable machine-readable code used in validation issue lists.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BlankName => "blank_field",
            Self::RatingOutOfRange { .. }
            | Self::DurationTooLarge { .. }
            | Self::GoalTooLarge { .. } => "out_of_range",
            Self::NegativeDuration { .. } => "negative_value",
            Self::NonPositiveGoal { .. } => "not_positive",
        }
    }
}

impl fmt::Display for PracticeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankName => write!(f, "session name must not be blank"),
            Self::RatingOutOfRange { value } => {
                write!(f, "rating must be between 1 and 5 (got {value})")
            }
            Self::NegativeDuration { value } => {
                write!(f, "duration must be non-negative (got {value})")
            }
            Self::DurationTooLarge { value } => {
                write!(f, "duration exceeds the supported maximum (got {value})")
            }
            Self::NonPositiveGoal { period, value } => {
                write!(f, "{period} goal minutes must be positive (got {value})")
            }
            Self::GoalTooLarge { period, value } => {
                write!(f, "{period} goal minutes exceed the supported maximum (got {value})")
            }
        }
    }
}

impl std::error::Error for PracticeValidationError {}
