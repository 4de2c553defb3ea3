//! Practice goal targets.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PracticeValidationError, goal_minutes};

/// Calendar period a goal target applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl GoalPeriod {
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// Number of calendar days ending today covered by the period.
    pub const fn days(self) -> u32 {
        match self {
            Self::Daily => 1,
            Self::Weekly => 7,
            Self::Monthly => 30,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for GoalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated target minutes for each goal period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalTargets {
    daily_minutes: u32,
    weekly_minutes: u32,
    monthly_minutes: u32,
}

impl GoalTargets {
    pub const DEFAULT_DAILY_MINUTES: u32 = 30;
    pub const DEFAULT_WEEKLY_MINUTES: u32 = 210;
    pub const DEFAULT_MONTHLY_MINUTES: u32 = 900;

    /// Validates raw minute values; every target must be positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use practice_tracker::domain::GoalTargets;
    ///
    /// let targets = GoalTargets::new(45, 300, 1200)?;
    /// assert_eq!(targets.weekly_minutes(), 300);
    /// assert!(GoalTargets::new(0, 300, 1200).is_err());
    /// # Ok::<(), practice_tracker::domain::PracticeValidationError>(())
    /// ```
    pub fn new(daily: i64, weekly: i64, monthly: i64) -> Result<Self, PracticeValidationError> {
        Ok(Self {
            daily_minutes: goal_minutes(GoalPeriod::Daily, daily)?,
            weekly_minutes: goal_minutes(GoalPeriod::Weekly, weekly)?,
            monthly_minutes: goal_minutes(GoalPeriod::Monthly, monthly)?,
        })
    }

    pub fn daily_minutes(&self) -> u32 {
        self.daily_minutes
    }

    pub fn weekly_minutes(&self) -> u32 {
        self.weekly_minutes
    }

    pub fn monthly_minutes(&self) -> u32 {
        self.monthly_minutes
    }

    /// Target minutes for the given period.
    pub fn for_period(&self, period: GoalPeriod) -> u32 {
        match period {
            GoalPeriod::Daily => self.daily_minutes,
            GoalPeriod::Weekly => self.weekly_minutes,
            GoalPeriod::Monthly => self.monthly_minutes,
        }
    }
}

impl Default for GoalTargets {
    fn default() -> Self {
        Self {
            daily_minutes: Self::DEFAULT_DAILY_MINUTES,
            weekly_minutes: Self::DEFAULT_WEEKLY_MINUTES,
            monthly_minutes: Self::DEFAULT_MONTHLY_MINUTES,
        }
    }
}

/// The singleton goals record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeGoals {
    id: Uuid,
    targets: GoalTargets,
}

impl PracticeGoals {
    pub fn new(id: Uuid, targets: GoalTargets) -> Self {
        Self { id, targets }
    }

    /// Builds a record with a fresh identifier.
    pub fn with_fresh_id(targets: GoalTargets) -> Self {
        Self::new(Uuid::new_v4(), targets)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn targets(&self) -> &GoalTargets {
        &self.targets
    }
}
