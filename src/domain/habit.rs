/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a tracked
/// recurring activity, along with the draft type submitted by the add/edit
/// form and the normalization rules applied to it.

use serde::{Deserialize, Serialize};
use crate::domain::{ColorTag, DomainError, Frequency, HabitId, HistoryEntry};

/// A habit represents something the user wants to do regularly
///
/// This is the core entity in the system. Each habit tracks a numeric goal
/// per period (day or week), the progress accumulated within the current
/// period, and a streak of consecutively completed periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier, assigned by the store at creation
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read 30 Mins")
    pub name: String,
    /// Target count for the tracking period, always >= 1
    pub goal: u32,
    /// Count accumulated within the current period, starts at 0
    pub current_progress: u32,
    /// Whether the habit is tracked per day or per week
    pub frequency: Frequency,
    /// Free-text label for grouping ("General" when left blank)
    pub category: String,
    /// Consecutive completed periods, never decremented by the core
    pub streak: u32,
    /// Append-only record of tracked periods, one entry per period
    pub history: Vec<HistoryEntry>,
    /// Opaque display swatch, uninterpreted by the core
    pub color: ColorTag,
}

/// The editable fields of a habit, as submitted by the add/edit form
///
/// Both add and edit take a draft: add builds a brand-new record from it,
/// edit replaces the editable fields of an existing record while keeping
/// id, progress, streak, and history intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitDraft {
    pub name: String,
    pub goal: u32,
    pub frequency: Frequency,
    pub category: String,
    pub color: ColorTag,
}

impl HabitDraft {
    pub fn new(
        name: impl Into<String>,
        goal: u32,
        frequency: Frequency,
        category: impl Into<String>,
        color: ColorTag,
    ) -> Self {
        Self {
            name: name.into(),
            goal,
            frequency,
            category: category.into(),
            color,
        }
    }
}

impl Habit {
    /// Create a new habit from a draft with validation
    ///
    /// This is the constructor used by the store's add operation. The draft
    /// is normalized first; a name that is empty after trimming rejects the
    /// whole draft. Progress, streak, and history start at their zero values.
    pub fn new(id: HabitId, draft: &HabitDraft) -> Result<Self, DomainError> {
        let (name, goal, category) = normalize_draft(draft)?;

        Ok(Self {
            id,
            name,
            goal,
            current_progress: 0,
            frequency: draft.frequency,
            category,
            streak: 0,
            history: Vec::new(),
            color: draft.color.clone(),
        })
    }

    /// Create a habit from existing field values (used when seeding data)
    ///
    /// This constructor assumes the values are already well-formed and is
    /// mainly used to rebuild records from a known-good data set.
    pub fn from_existing(
        id: HabitId,
        name: String,
        goal: u32,
        current_progress: u32,
        frequency: Frequency,
        category: String,
        streak: u32,
        history: Vec<HistoryEntry>,
        color: ColorTag,
    ) -> Self {
        Self {
            id,
            name,
            goal,
            current_progress,
            frequency,
            category,
            streak,
            history,
            color,
        }
    }

    /// Build a replacement record with the draft's editable fields applied
    ///
    /// Id, current progress, streak, and history are preserved; the draft is
    /// normalized with the same rules as creation, so an invalid draft leaves
    /// the original record untouched.
    pub fn with_draft(&self, draft: &HabitDraft) -> Result<Self, DomainError> {
        let (name, goal, category) = normalize_draft(draft)?;

        Ok(Self {
            id: self.id,
            name,
            goal,
            current_progress: self.current_progress,
            frequency: draft.frequency,
            category,
            streak: self.streak,
            history: self.history.clone(),
            color: draft.color.clone(),
        })
    }

    /// Check whether the habit reached its goal for the current period
    ///
    /// This is the gate the dashboard uses to disable the complete button.
    pub fn is_complete(&self) -> bool {
        self.current_progress >= self.goal
    }

    /// Progress toward the goal as a percentage, capped at 100
    ///
    /// A zero goal yields 0 rather than dividing (goals are clamped to >= 1
    /// on every mutation path, so this only matters for data built outside
    /// the store).
    pub fn progress_percent(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        (f64::from(self.current_progress) / f64::from(self.goal) * 100.0).min(100.0)
    }

    /// Progress toward the goal as a ratio, uncapped
    ///
    /// Used by the overall completion rate; a zero goal contributes 0.
    pub fn completion_ratio(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        f64::from(self.current_progress) / f64::from(self.goal)
    }
}

/// Apply the normalization policy to a draft
///
/// Name is trimmed and must be non-empty afterwards; goal is clamped to a
/// minimum of 1; category is trimmed and defaults to "General" when blank.
fn normalize_draft(draft: &HabitDraft) -> Result<(String, u32, String), DomainError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidHabitName(
            "Habit name cannot be empty".to_string(),
        ));
    }

    let goal = draft.goal.max(1);

    let category = draft.category.trim();
    let category = if category.is_empty() {
        "General".to_string()
    } else {
        category.to_string()
    };

    Ok((name.to_string(), goal, category))
}
