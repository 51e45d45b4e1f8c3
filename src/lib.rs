/// Public library interface for the habit tracking dashboard core
///
/// This module exports the habit store, the statistics engine, and the
/// dashboard facade that wires them together for the presentation layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Internal modules
mod domain;
mod seed;
mod stats;
mod store;

// Re-export public modules and types
pub use domain::*;
pub use seed::{mock_habits, mock_user};
pub use stats::{
    ConsistencyPoint, FixedMetric, HeatmapCell, MetricSource, RandomMetric, StatsEngine, Summary,
};
pub use store::{CompletionEvent, HabitStore, StoreError};

/// Errors that can occur while driving the dashboard
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything a render pass needs, derived from one habit list snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub user: User,
    pub summary: Summary,
    pub daily_habits: Vec<Habit>,
    pub weekly_habits: Vec<Habit>,
    pub streak_ranking: Vec<Habit>,
    pub consistency: Vec<ConsistencyPoint>,
    pub insights: Vec<String>,
}

/// The single long-lived owner of the dashboard's state
///
/// The presentation layer holds one instance and routes every user action
/// through it: a mutation on the store, then a recomputation through the
/// engine, then a render of the returned view.
pub struct Dashboard {
    store: HabitStore,
    engine: StatsEngine,
    user: User,
}

impl Dashboard {
    /// Create a dashboard over the given parts
    pub fn new(store: HabitStore, engine: StatsEngine, user: User) -> Self {
        Self {
            store,
            engine,
            user,
        }
    }

    /// Create a dashboard seeded with the demo data set
    pub fn with_mock_data() -> Self {
        let store = HabitStore::with_habits(seed::mock_habits());
        tracing::info!(habits = store.len(), "seeded dashboard with mock data");

        Self::new(store, StatsEngine::new(), seed::mock_user())
    }

    /// Get a reference to the habit store
    pub fn store(&self) -> &HabitStore {
        &self.store
    }

    /// Get a mutable reference to the habit store (the mutation path)
    pub fn store_mut(&mut self) -> &mut HabitStore {
        &mut self.store
    }

    /// Get a reference to the statistics engine
    pub fn engine(&self) -> &StatsEngine {
        &self.engine
    }

    /// Get a reference to the user profile
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Record a completion and hand back the completion notification, if any
    pub fn complete_habit(&mut self, id: HabitId) -> Result<Option<CompletionEvent>, StoreError> {
        self.store.record_completion(id)
    }

    /// Render the current dashboard view as pretty-printed JSON
    pub fn overview_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(&self.overview())?)
    }

    /// Recompute the full dashboard view from the current habit list
    pub fn overview(&self) -> DashboardView {
        let habits = self.store.habits();
        let (daily_habits, weekly_habits) = self.engine.partition_by_frequency(habits);

        DashboardView {
            user: self.user.clone(),
            summary: self.engine.compute_summary(habits),
            daily_habits,
            weekly_habits,
            streak_ranking: self.engine.rank_by_streak(habits),
            consistency: self.engine.build_consistency_series(habits),
            insights: self.engine.generate_insights(habits),
        }
    }
}
