//! Practice session validation and conversion helpers.

use super::{GoalPeriod, PracticeSession, PracticeSessionDraft, PracticeValidationError, Rating};

impl TryFrom<PracticeSessionDraft> for PracticeSession {
    type Error = PracticeValidationError;

    fn try_from(value: PracticeSessionDraft) -> Result<Self, Self::Error> {
        let name = value.name.trim();
        if name.is_empty() {
            return Err(PracticeValidationError::BlankName);
        }

        Ok(Self {
            id: value.id,
            name: name.to_owned(),
            description: normalise_optional_text(value.description),
            notes: normalise_optional_text(value.notes),
            focus_area: normalise_optional_text(value.focus_area),
            mood: value.mood,
            focus: value.focus,
            duration_seconds: value.duration_seconds,
            date: value.date,
        })
    }
}

/// Parses a raw rating value.
pub fn rating_from_value(value: i64) -> Result<Rating, PracticeValidationError> {
    Rating::try_from(value)
}

/// Parses a raw duration in seconds.
///
/// # Examples
///
/// ```
/// use practice_tracker::domain::duration_from_seconds;
///
/// assert_eq!(duration_from_seconds(90), Ok(90));
/// assert!(duration_from_seconds(-1).is_err());
/// ```
pub fn duration_from_seconds(value: i64) -> Result<u32, PracticeValidationError> {
    if value < 0 {
        return Err(PracticeValidationError::NegativeDuration { value });
    }
    u32::try_from(value).map_err(|_| PracticeValidationError::DurationTooLarge { value })
}

/// Parses raw goal minutes for `period`.
pub fn goal_minutes(period: GoalPeriod, value: i64) -> Result<u32, PracticeValidationError> {
    if value <= 0 {
        return Err(PracticeValidationError::NonPositiveGoal { period, value });
    }
    u32::try_from(value).map_err(|_| PracticeValidationError::GoalTooLarge { period, value })
}

fn normalise_optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|text| {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    })
}
