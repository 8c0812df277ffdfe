//! Strokes-gained engine: baseline curves, unit normalization, and per-shot scoring.

pub mod baseline;
pub mod expected;
pub mod gained;
pub mod units;

pub use baseline::{BaselineTable, ControlPoint};
pub use expected::expected_strokes;
pub use gained::{round_to_hundredths, StrokesGainedCalculator};
pub use units::{format_distance, to_canonical, to_display};
