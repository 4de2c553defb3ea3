//! Practice session entity and partial updates.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{PracticeValidationError, Rating};

/// Input payload for [`PracticeSession::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeSessionDraft {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub focus_area: Option<String>,
    pub mood: Rating,
    pub focus: Rating,
    pub duration_seconds: u32,
    pub date: DateTime<Utc>,
}

/// A stored practice session.
///
/// ## Invariants
/// - `name` is trimmed and non-empty.
/// - Optional text fields are trimmed; blank values are stored as `None`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use practice_tracker::domain::{PracticeSession, PracticeSessionDraft, Rating};
/// use uuid::Uuid;
///
/// let session = PracticeSession::new(PracticeSessionDraft {
///     id: Uuid::new_v4(),
///     name: "  Scales ".to_owned(),
///     description: None,
///     notes: Some("   ".to_owned()),
///     focus_area: Some("Technique".to_owned()),
///     mood: Rating::Four,
///     focus: Rating::Three,
///     duration_seconds: 600,
///     date: Utc::now(),
/// })?;
/// assert_eq!(session.name(), "Scales");
/// assert_eq!(session.notes(), None);
/// # Ok::<(), practice_tracker::domain::PracticeValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeSession {
    pub(super) id: Uuid,
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) notes: Option<String>,
    pub(super) focus_area: Option<String>,
    pub(super) mood: Rating,
    pub(super) focus: Rating,
    pub(super) duration_seconds: u32,
    pub(super) date: DateTime<Utc>,
}

impl PracticeSession {
    /// Creates a validated practice session.
    pub fn new(draft: PracticeSessionDraft) -> Result<Self, PracticeValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn focus_area(&self) -> Option<&str> {
        self.focus_area.as_deref()
    }

    pub fn mood(&self) -> Rating {
        self.mood
    }

    pub fn focus(&self) -> Rating {
        self.focus
    }

    /// Practised time in whole seconds.
    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Creation timestamp.
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Applies a partial update and re-validates the merged session.
    ///
    /// The id and date never change.
    pub fn apply(&self, changes: PracticeSessionChanges) -> Result<Self, PracticeValidationError> {
        let PracticeSessionChanges {
            name,
            description,
            notes,
            focus_area,
            mood,
            focus,
            duration_seconds,
        } = changes;

        Self::new(PracticeSessionDraft {
            id: self.id,
            name: name.unwrap_or_else(|| self.name.clone()),
            description: description.unwrap_or_else(|| self.description.clone()),
            notes: notes.unwrap_or_else(|| self.notes.clone()),
            focus_area: focus_area.unwrap_or_else(|| self.focus_area.clone()),
            mood: mood.unwrap_or(self.mood),
            focus: focus.unwrap_or(self.focus),
            duration_seconds: duration_seconds.unwrap_or(self.duration_seconds),
            date: self.date,
        })
    }

    /// Converts back into a draft, e.g. for rebuilding in tests.
    pub fn into_draft(self) -> PracticeSessionDraft {
        PracticeSessionDraft {
            id: self.id,
            name: self.name,
            description: self.description,
            notes: self.notes,
            focus_area: self.focus_area,
            mood: self.mood,
            focus: self.focus,
            duration_seconds: self.duration_seconds,
            date: self.date,
        }
    }
}

/// Partial update for a practice session.
///
/// Outer `None` keeps the stored value. For nullable text fields
/// `Some(None)` clears the stored value. Serialises as a `PATCH` body:
/// kept fields are omitted and cleared fields are sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSessionChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_area: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<Rating>,
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
}

impl PracticeSessionChanges {
    /// Returns `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
