/// Placeholder metric source for demo statistics
///
/// The consistency chart and the activity heatmap need per-habit and
/// per-day numbers that a real implementation would derive from habit
/// history. That computation does not exist yet, so every such number is
/// drawn through this trait instead of being inlined. Swapping in a real
/// history-based source touches only implementations of this trait - the
/// engine and its callers stay unchanged.

use crate::domain::Habit;

/// Source of the demo metrics the statistics views chart
///
/// This trait allows us to swap the randomized demo numbers for a real
/// history-based computation in the future while keeping the same
/// interface, and lets tests inject a deterministic source.
pub trait MetricSource {
    /// Consistency score for a habit, in [0, 100]
    fn consistency(&self, habit: &Habit) -> f64;

    /// Activity intensity for a day of the month, in 0..=4
    fn heatmap_intensity(&self, day: u32) -> u8;
}

/// The demo default: uniformly random numbers
///
/// Matches what the dashboard ships with today; the chart footer even tells
/// the user the data is randomly generated.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomMetric;

impl MetricSource for RandomMetric {
    fn consistency(&self, _habit: &Habit) -> f64 {
        use rand::Rng;
        let mut rng = rand::rng();
        rng.random_range(0.0..=100.0)
    }

    fn heatmap_intensity(&self, _day: u32) -> u8 {
        use rand::Rng;
        let mut rng = rand::rng();
        rng.random_range(0..5)
    }
}

/// A deterministic source returning fixed values
///
/// Used by tests and anywhere reproducible output matters.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetric {
    pub consistency: f64,
    pub intensity: u8,
}

impl FixedMetric {
    pub fn new(consistency: f64, intensity: u8) -> Self {
        Self {
            consistency,
            intensity,
        }
    }
}

impl MetricSource for FixedMetric {
    fn consistency(&self, _habit: &Habit) -> f64 {
        self.consistency
    }

    fn heatmap_intensity(&self, _day: u32) -> u8 {
        self.intensity
    }
}
