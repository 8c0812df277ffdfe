use std::sync::Arc;

use super::{baseline::BaselineTable, expected::expected_strokes};
use crate::domain::{LieCategory, Shot};

/// Rounds to two decimal places, the precision strokes gained are stored with.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scores strokes against a shared baseline table.
#[derive(Debug, Clone)]
pub struct StrokesGainedCalculator {
    table: Arc<BaselineTable>,
}

impl Default for StrokesGainedCalculator {
    fn default() -> Self {
        Self::new(BaselineTable::shared())
    }
}

impl StrokesGainedCalculator {
    pub fn new(table: Arc<BaselineTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &BaselineTable {
        &self.table
    }

    pub fn expected_strokes(&self, lie: LieCategory, distance: f64) -> f64 {
        expected_strokes(&self.table, lie, distance)
    }

    /// Strokes gained by `shot` given where the ball ended up.
    ///
    /// `next` is the shot played from the resting position, or `None` when the ball was
    /// holed (zero strokes remain). Positive values beat the baseline.
    pub fn strokes_gained(&self, shot: &Shot, next: Option<&Shot>) -> f64 {
        let before = self.expected_strokes(shot.lie, shot.distance_to_hole);
        let after = next
            .map(|next| self.expected_strokes(next.lie, next.distance_to_hole))
            .unwrap_or(0.0);
        round_to_hundredths(before - (1.0 + after))
    }
}
