//! Practice session timer.
//!
//! [`PracticeTimer`] is the synchronous stopwatch state machine counting
//! whole seconds. [`TimerSession`] wraps it with the recurring one-second
//! tick task and hands finished sessions to the session command port.

use chrono::NaiveDate;

use crate::domain::{Error, Rating};

mod driver;
mod format;

pub use driver::TimerSession;
pub use format::format_hms;

/// Lifecycle of the practice timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Idle,
    Running,
    Paused,
    /// A save is in flight; counting is frozen until it finishes.
    Saving,
}

impl TimerState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Saving => "saving",
        }
    }
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by timer operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimerError {
    #[error("timer is already running")]
    AlreadyRunning,
    #[error("timer is not running")]
    NotRunning,
    #[error("no practice time to save")]
    NothingToSave,
    #[error("a save is already in progress")]
    SaveInProgress,
    #[error("failed to save practice session: {0}")]
    Persistence(#[source] Error),
}

/// Whole-second stopwatch with free-form notes.
///
/// # Examples
///
/// ```
/// use practice_tracker::domain::{PracticeTimer, TimerState};
///
/// let mut timer = PracticeTimer::default();
/// timer.start()?;
/// timer.tick();
/// timer.tick();
/// timer.pause()?;
/// assert_eq!(timer.elapsed_seconds(), 2);
/// assert_eq!(timer.state(), TimerState::Paused);
/// # Ok::<(), practice_tracker::domain::TimerError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeTimer {
    state: TimerState,
    elapsed_seconds: u32,
    notes: String,
}

impl PracticeTimer {
    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn notes(&self) -> &str {
        self.notes.as_str()
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Starts or resumes counting.
    pub fn start(&mut self) -> Result<(), TimerError> {
        match self.state {
            TimerState::Running => Err(TimerError::AlreadyRunning),
            TimerState::Saving => Err(TimerError::SaveInProgress),
            TimerState::Idle | TimerState::Paused => {
                self.state = TimerState::Running;
                Ok(())
            }
        }
    }

    /// Stops counting and keeps the elapsed seconds.
    pub fn pause(&mut self) -> Result<(), TimerError> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                Ok(())
            }
            TimerState::Saving => Err(TimerError::SaveInProgress),
            TimerState::Idle | TimerState::Paused => Err(TimerError::NotRunning),
        }
    }

    /// Returns to idle with no elapsed time and no notes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Adds one second while running; returns whether time was added.
    pub fn tick(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        true
    }

    /// Freezes the timer for a save and returns the state to restore if it fails.
    pub(crate) fn begin_save(&mut self) -> Result<TimerState, TimerError> {
        if self.state == TimerState::Saving {
            return Err(TimerError::SaveInProgress);
        }
        if self.elapsed_seconds == 0 {
            return Err(TimerError::NothingToSave);
        }
        let previous = self.state;
        self.state = TimerState::Saving;
        Ok(previous)
    }

    /// Clears the timer after a stored save. Returns `false` when a reset
    /// already ended the save.
    pub(crate) fn complete_save(&mut self) -> bool {
        if self.state != TimerState::Saving {
            return false;
        }
        self.reset();
        true
    }

    /// Returns to `previous` after a failed save, keeping elapsed time and
    /// notes. Returns `false` when a reset already ended the save.
    pub(crate) fn abandon_save(&mut self, previous: TimerState) -> bool {
        if self.state != TimerState::Saving {
            return false;
        }
        self.state = previous;
        true
    }
}

/// User-provided details attached to a saved session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionMetadata {
    /// Falls back to [`default_session_name`] when absent or blank.
    pub name: Option<String>,
    pub description: Option<String>,
    pub focus_area: Option<String>,
    pub mood: Rating,
    pub focus: Rating,
}

/// Session name used when the user leaves the name empty.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use practice_tracker::domain::default_session_name;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date");
/// assert_eq!(default_session_name(date), "Practice Session - 2026-03-09");
/// ```
pub fn default_session_name(date: NaiveDate) -> String {
    format!("Practice Session - {}", date.format("%Y-%m-%d"))
}
