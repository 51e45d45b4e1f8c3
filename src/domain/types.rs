/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like HabitId, Frequency, and
/// ColorTag that are used by Habit and the store/stats layers.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use std::fmt;

/// Unique identifier for a habit
///
/// This is a wrapper around a plain integer to provide type safety - you
/// can't accidentally pass an arbitrary number where a habit id is expected.
/// Ids are assigned by the store and are unique for the store's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HabitId(pub u64);

impl HabitId {
    /// Get the raw integer value of this id
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How often a habit is tracked
///
/// The frequency determines the tracking period (one day or one week) and
/// how the dashboard groups habit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Tracked once per day
    Daily,
    /// Tracked once per week
    Weekly,
}

impl Frequency {
    /// Parse a frequency from its lowercase string form
    pub fn parse(s: &str) -> Result<Self, crate::domain::DomainError> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            other => Err(crate::domain::DomainError::InvalidFrequency(format!(
                "Invalid frequency '{}'. Valid options: daily, weekly",
                other
            ))),
        }
    }

    /// Get the display name for this frequency
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opaque display swatch for a habit
///
/// The tag carries a presentation-layer color class (e.g. "bg-blue-500").
/// The core never interprets it - mapping the tag to an actual color is the
/// presentation layer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTag(pub String);

impl ColorTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ColorTag {
    fn default() -> Self {
        Self("bg-blue-500".to_string())
    }
}

/// A single tracked period in a habit's history
///
/// History is append-only: one entry per tracked period recording whether
/// the habit was completed. Statistics do not consume it yet - it is kept
/// for future history-based streak and consistency computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The day the period was tracked for
    pub date: NaiveDate,
    /// Whether the habit reached its goal that period
    pub completed: bool,
}

impl HistoryEntry {
    pub fn new(date: NaiveDate, completed: bool) -> Self {
        Self { date, completed }
    }
}
