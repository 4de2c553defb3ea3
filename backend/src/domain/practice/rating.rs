//! Self-reported mood and focus ratings.

use serde::{Deserialize, Serialize};

use super::PracticeValidationError;

/// A rating on the closed 1..=5 scale used for mood and focus.
///
/// Serialised as its integer value.
///
/// # Examples
///
/// ```
/// use practice_tracker::domain::Rating;
///
/// let rating = Rating::try_from(4_i64)?;
/// assert_eq!(rating.value(), 4);
/// assert_eq!(rating.mood_label(), "Good");
/// # Ok::<(), practice_tracker::domain::PracticeValidationError>(())
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub enum Rating {
    One,
    Two,
    #[default]
    Three,
    Four,
    Five,
}

impl Rating {
    /// Every rating level in ascending order.
    pub const ALL: [Self; 5] = [Self::One, Self::Two, Self::Three, Self::Four, Self::Five];

    /// Returns the integer value of the rating.
    pub const fn value(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Human-readable mood label.
    pub const fn mood_label(self) -> &'static str {
        match self {
            Self::One => "Frustrated",
            Self::Two => "Tired",
            Self::Three => "Neutral",
            Self::Four => "Good",
            Self::Five => "Great",
        }
    }

    /// Human-readable focus label.
    pub const fn focus_label(self) -> &'static str {
        match self {
            Self::One => "Very Distracted",
            Self::Two => "Somewhat Distracted",
            Self::Three => "Neutral",
            Self::Four => "Focused",
            Self::Five => "Deeply Focused",
        }
    }

    /// Nearest rating to an averaged value, or `None` outside 1..=5.
    pub fn nearest(average: f64) -> Option<Self> {
        if !average.is_finite() {
            return None;
        }
        let rounded = average.round();
        Self::ALL
            .into_iter()
            .find(|rating| f64::from(rating.value()) == rounded)
    }
}

impl TryFrom<i64> for Rating {
    type Error = PracticeValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            _ => Err(PracticeValidationError::RatingOutOfRange { value }),
        }
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.value()
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Mood label for an averaged rating; empty when no level applies.
pub fn mood_label_for_average(average: f64) -> &'static str {
    Rating::nearest(average).map_or("", Rating::mood_label)
}

/// Focus label for an averaged rating; empty when no level applies.
pub fn focus_label_for_average(average: f64) -> &'static str {
    Rating::nearest(average).map_or("", Rating::focus_label)
}
