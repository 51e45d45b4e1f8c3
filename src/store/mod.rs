/// Store layer owning the canonical habit list
///
/// This module provides the only sanctioned mutation operations over the
/// ordered list of habits. Every operation is synchronous, never panics for
/// well-formed input, and builds a new list value rather than mutating the
/// previous snapshot, so observers can detect changes by comparing lists.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{DomainError, Habit, HabitDraft, HabitId};

/// Errors reported by store operations
///
/// All of these are recoverable outcomes for the caller to surface (or not);
/// none of them leaves the store in a changed state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The draft could not be normalized into a valid record
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    /// No habit with the given id exists in the store
    #[error("Habit not found: {id}")]
    NotFound { id: HabitId },

    /// The habit already reached its goal for the current period
    #[error("Habit already complete: {id}")]
    AlreadyComplete { id: HabitId },
}

/// Notification that a habit just reached its goal
///
/// Fired exactly once per completion call that crosses the goal threshold,
/// and never otherwise. The presentation layer consumes it to trigger its
/// celebratory effect; the event itself carries no positional detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub habit_id: HabitId,
    pub name: String,
    /// The streak value after the completion was recorded
    pub streak: u32,
}

/// Owner of the ordered habit list and the id counter
///
/// The presentation layer holds a single long-lived instance and routes
/// every mutation through it. Ordering is insertion order; views that need
/// a different order re-sort their own snapshot.
#[derive(Debug, Clone)]
pub struct HabitStore {
    habits: Vec<Habit>,
    next_id: u64,
}

impl HabitStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            habits: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store seeded with an existing habit list
    ///
    /// The id counter resumes past the largest seeded id so newly added
    /// habits can never collide with seeded ones.
    pub fn with_habits(habits: Vec<Habit>) -> Self {
        let next_id = habits
            .iter()
            .map(|h| h.id.value())
            .max()
            .map_or(1, |max| max + 1);

        Self { habits, next_id }
    }

    /// The current habit list, in insertion order
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// An owned copy of the current habit list
    pub fn snapshot(&self) -> Vec<Habit> {
        self.habits.clone()
    }

    /// Look up a habit by id
    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Add a new habit built from the draft
    ///
    /// The draft is re-validated here even though the form validates first;
    /// a rejected draft leaves the list untouched. On success the new record
    /// is appended at the end of a fresh list and the new list is returned.
    pub fn add_habit(&mut self, draft: &HabitDraft) -> Result<&[Habit], StoreError> {
        let habit = Habit::new(HabitId(self.next_id), draft)?;
        self.next_id += 1;

        info!(id = %habit.id, name = %habit.name, "added habit");

        let mut next = self.habits.clone();
        next.push(habit);
        self.habits = next;

        Ok(&self.habits)
    }

    /// Replace the editable fields of an existing habit
    ///
    /// Id, current progress, streak, history, and list position are all
    /// preserved. Unknown ids report `NotFound` without changing the list.
    pub fn edit_habit(&mut self, id: HabitId, draft: &HabitDraft) -> Result<&[Habit], StoreError> {
        let index = self.index_of(id)?;
        let replacement = self.habits[index].with_draft(draft)?;

        debug!(id = %id, name = %replacement.name, "edited habit");

        let mut next = self.habits.clone();
        next[index] = replacement;
        self.habits = next;

        Ok(&self.habits)
    }

    /// Remove the habit with the given id
    pub fn delete_habit(&mut self, id: HabitId) -> Result<&[Habit], StoreError> {
        let index = self.index_of(id)?;

        info!(id = %id, name = %self.habits[index].name, "deleted habit");

        let mut next = self.habits.clone();
        next.remove(index);
        self.habits = next;

        Ok(&self.habits)
    }

    /// Record one completion for the habit with the given id
    ///
    /// Progress increments by exactly 1. If the increment makes progress
    /// reach the goal for the first time, the streak increments too and a
    /// `CompletionEvent` is returned; otherwise the result is `Ok(None)`.
    /// A habit already at or past its goal reports `AlreadyComplete` and
    /// the list stays unchanged, mirroring the disabled complete button.
    pub fn record_completion(
        &mut self,
        id: HabitId,
    ) -> Result<Option<CompletionEvent>, StoreError> {
        let index = self.index_of(id)?;

        if self.habits[index].is_complete() {
            return Err(StoreError::AlreadyComplete { id });
        }

        let mut next = self.habits.clone();
        let habit = &mut next[index];
        habit.current_progress += 1;

        let just_completed = habit.current_progress >= habit.goal;
        if just_completed {
            habit.streak += 1;
        }

        debug!(
            id = %id,
            progress = habit.current_progress,
            goal = habit.goal,
            completed = just_completed,
            "recorded completion"
        );

        let event = just_completed.then(|| CompletionEvent {
            habit_id: habit.id,
            name: habit.name.clone(),
            streak: habit.streak,
        });

        self.habits = next;
        Ok(event)
    }

    fn index_of(&self, id: HabitId) -> Result<usize, StoreError> {
        self.habits
            .iter()
            .position(|h| h.id == id)
            .ok_or(StoreError::NotFound { id })
    }
}

impl Default for HabitStore {
    fn default() -> Self {
        Self::new()
    }
}
