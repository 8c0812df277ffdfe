use tracing::warn;

use super::baseline::{BaselineTable, ControlPoint};
use crate::domain::LieCategory;

/// Expected strokes to hole out from `distance` canonical yards on `lie`.
///
/// Distances outside the curve clamp to its end points; anything in between is
/// interpolated linearly. A lie the table has no curve for yields `0.0` after a warning.
pub fn expected_strokes(table: &BaselineTable, lie: LieCategory, distance: f64) -> f64 {
    match table.curve(lie) {
        Some(points) if !points.is_empty() => interpolate(points, distance),
        _ => {
            warn!(%lie, distance, "no baseline data for lie; expected strokes defaulted to 0");
            0.0
        }
    }
}

fn interpolate(points: &[ControlPoint], distance: f64) -> f64 {
    let first = points[0];
    let last = points[points.len() - 1];
    if distance <= first.distance {
        return first.expected_strokes;
    }
    if distance >= last.distance {
        return last.expected_strokes;
    }
    // first index whose distance is >= the query; the bracket is [upper - 1, upper]
    let upper = points.partition_point(|point| point.distance < distance);
    let (lo, hi) = (points[upper - 1], points[upper]);
    lo.expected_strokes
        + (distance - lo.distance) / (hi.distance - lo.distance)
            * (hi.expected_strokes - lo.expected_strokes)
}
