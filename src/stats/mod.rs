/// Statistics engine for deriving dashboard views
///
/// This module computes every derived number the dashboard shows: the
/// summary tiles, the streak ranking, the daily/weekly grouping, and the
/// chart-ready series. All computations are pure functions of the habit
/// list snapshot they are given - no side effects, no hidden state - except
/// the demo metrics, which are isolated behind `MetricSource`.

pub mod metric;

pub use metric::{FixedMetric, MetricSource, RandomMetric};

use serde::{Deserialize, Serialize};

use crate::domain::{Frequency, Habit};

/// Names longer than this are truncated for chart labels
const LABEL_MAX: usize = 15;
/// Truncated labels keep this many characters before the ellipsis
const LABEL_KEEP: usize = 12;

/// The dashboard's summary tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of habits in the list
    pub total_habits: usize,
    /// Habits whose progress reached their goal this period
    pub completed_today: usize,
    /// Largest streak across all habits, 0 for an empty list
    pub longest_streak: u32,
    /// Rounded average progress-to-goal ratio, clamped to [0, 100]
    pub overall_completion_rate: u32,
}

/// One bar of the consistency chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyPoint {
    /// Habit name, truncated for chart display
    pub label: String,
    /// Consistency score in [0, 100]
    pub consistency: f64,
}

/// One day cell of the monthly activity heatmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    /// Day of the month, starting at 1
    pub day: u32,
    /// Activity intensity in 0..=4
    pub intensity: u8,
    /// Marker for the current day
    pub is_today: bool,
}

/// Engine computing derived statistics from habit list snapshots
///
/// The engine holds nothing but the metric source; every operation takes
/// the habit list as an argument and leaves it untouched.
pub struct StatsEngine {
    metric: Box<dyn MetricSource>,
}

impl StatsEngine {
    /// Create an engine with the demo metric source
    pub fn new() -> Self {
        Self::with_metric(Box::new(RandomMetric))
    }

    /// Create an engine with an injected metric source
    ///
    /// Tests pass a `FixedMetric` here; a future history-based source plugs
    /// in the same way.
    pub fn with_metric(metric: Box<dyn MetricSource>) -> Self {
        Self { metric }
    }

    /// Compute the summary tiles for a habit list
    ///
    /// The completion rate averages each habit's progress-to-goal ratio,
    /// scales to percent, rounds, and clamps to [0, 100]. Goals are >= 1 by
    /// invariant; a zero goal slipping in from outside contributes a zero
    /// ratio instead of dividing.
    pub fn compute_summary(&self, habits: &[Habit]) -> Summary {
        let total_habits = habits.len();
        let completed_today = habits.iter().filter(|h| h.is_complete()).count();
        let longest_streak = habits.iter().map(|h| h.streak).max().unwrap_or(0);

        let overall_completion_rate = if total_habits == 0 {
            0
        } else {
            let average: f64 = habits.iter().map(Habit::completion_ratio).sum::<f64>()
                / total_habits as f64;
            (average * 100.0).round().clamp(0.0, 100.0) as u32
        };

        Summary {
            total_habits,
            completed_today,
            longest_streak,
            overall_completion_rate,
        }
    }

    /// Habits with an active streak, best first
    ///
    /// Only habits with `streak > 0` appear. The sort is stable, so habits
    /// with equal streaks keep their original relative order.
    pub fn rank_by_streak(&self, habits: &[Habit]) -> Vec<Habit> {
        let mut ranked: Vec<Habit> = habits.iter().filter(|h| h.streak > 0).cloned().collect();
        ranked.sort_by(|a, b| b.streak.cmp(&a.streak));
        ranked
    }

    /// Split a habit list into its daily and weekly groups
    ///
    /// Original relative order is preserved within each group.
    pub fn partition_by_frequency(&self, habits: &[Habit]) -> (Vec<Habit>, Vec<Habit>) {
        habits
            .iter()
            .cloned()
            .partition(|h| h.frequency == Frequency::Daily)
    }

    /// Build the consistency chart series, one point per habit
    ///
    /// Labels are the habit names, truncated for chart display. The score
    /// comes from the metric source and is clamped into [0, 100].
    pub fn build_consistency_series(&self, habits: &[Habit]) -> Vec<ConsistencyPoint> {
        habits
            .iter()
            .map(|habit| ConsistencyPoint {
                label: chart_label(&habit.name),
                consistency: self.metric.consistency(habit).clamp(0.0, 100.0),
            })
            .collect()
    }

    /// Build the monthly activity heatmap, one cell per day
    ///
    /// `today` marks the current day of the month; pass 0 (or any day not
    /// in the month) when no marker should be set.
    pub fn build_month_heatmap(&self, days_in_month: u32, today: u32) -> Vec<HeatmapCell> {
        (1..=days_in_month)
            .map(|day| HeatmapCell {
                day,
                intensity: self.metric.heatmap_intensity(day).min(4),
                is_today: day == today,
            })
            .collect()
    }

    /// Generate the dashboard's quick insight lines
    pub fn generate_insights(&self, habits: &[Habit]) -> Vec<String> {
        if habits.is_empty() {
            return vec!["Start by creating your first habit to track!".to_string()];
        }

        let summary = self.compute_summary(habits);
        vec![
            format!(
                "🌟 Your longest streak is {} days! Keep it up!",
                summary.longest_streak
            ),
            "💡 Focus on completing your daily habits to build consistency.".to_string(),
            format!(
                "📊 {} of {} habits completed today.",
                summary.completed_today, summary.total_habits
            ),
        ]
    }
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate a habit name for chart display
///
/// Names over 15 characters become their first 12 characters plus an
/// ellipsis; shorter names are kept whole.
fn chart_label(name: &str) -> String {
    if name.chars().count() > LABEL_MAX {
        let head: String = name.chars().take(LABEL_KEEP).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}
