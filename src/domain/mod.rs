/// Domain module containing core data types and validation rules
///
/// This module defines the core entities (Habit, User) and the value types
/// they are built from. These types represent the fundamental concepts in
/// the habit tracking dashboard.

pub mod habit;
pub mod types;
pub mod user;

// Re-export public types for easy access
pub use habit::*;
pub use types::*;
pub use user::*;

use thiserror::Error;

/// Errors that can occur during domain validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),
}
