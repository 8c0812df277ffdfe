//! Expected-strokes-to-finish baseline.
//!
//! Each lie owns a sparse curve of control points sorted by canonical distance. The
//! built-in curves are constructed once per process and shared behind an [`Arc`]; custom
//! curves can be loaded from JSON through [`BaselineTable::from_json_str`].

use std::{collections::BTreeMap, fs, path::Path, sync::Arc};

use once_cell::sync::Lazy;
use tracing::warn;

use super::units;
use crate::{
    domain::LieCategory,
    errors::{CoreError, Result},
};

/// Minimum number of points a curve needs to be interpolated.
const MIN_CONTROL_POINTS: usize = 2;

/// Built-in curves as (distance in the lie's display unit, expected strokes).
const BUILTIN_CURVES: [(LieCategory, &[(f64, f64)]); 6] = [
    (
        LieCategory::Tee,
        &[
            (50.0, 2.2),
            (100.0, 2.5),
            (150.0, 2.8),
            (200.0, 3.0),
            (250.0, 3.3),
            (300.0, 3.65),
            (350.0, 3.9),
            (400.0, 4.1),
            (450.0, 4.3),
        ],
    ),
    (
        LieCategory::Fairway,
        &[
            (10.0, 0.5),
            (25.0, 1.0),
            (50.0, 1.5),
            (75.0, 1.8),
            (100.0, 2.1),
            (125.0, 2.3),
            (150.0, 2.5),
            (175.0, 2.7),
            (200.0, 2.9),
        ],
    ),
    (
        LieCategory::Rough,
        &[
            (10.0, 0.8),
            (25.0, 1.3),
            (50.0, 1.8),
            (75.0, 2.1),
            (100.0, 2.4),
            (125.0, 2.6),
            (150.0, 2.8),
            (175.0, 3.0),
            (200.0, 3.2),
        ],
    ),
    (
        LieCategory::Sand,
        &[
            (5.0, 0.7),
            (10.0, 1.0),
            (25.0, 1.5),
            (50.0, 2.0),
            (75.0, 2.3),
            (100.0, 2.6),
        ],
    ),
    (
        LieCategory::Recovery,
        &[
            (10.0, 1.3),
            (25.0, 1.7),
            (50.0, 2.1),
            (75.0, 2.4),
            (100.0, 2.7),
            (150.0, 3.0),
        ],
    ),
    (
        LieCategory::Green,
        &[
            (0.33, 1.0),
            (1.0, 1.1),
            (2.0, 1.3),
            (3.0, 1.5),
            (5.0, 1.7),
            (7.0, 1.9),
            (10.0, 2.0),
            (15.0, 2.3),
            (20.0, 2.5),
        ],
    ),
];

static BUILTIN: Lazy<Arc<BaselineTable>> = Lazy::new(|| {
    let curves = BUILTIN_CURVES
        .iter()
        .map(|(lie, points)| (*lie, points.to_vec()))
        .collect();
    match BaselineTable::from_display_points(curves) {
        Ok(table) => Arc::new(table),
        Err(err) => {
            warn!(error = %err, "built-in baseline rejected; falling back to an empty table");
            Arc::new(BaselineTable::default())
        }
    }
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Canonical distance (yards).
    pub distance: f64,
    pub expected_strokes: f64,
}

/// Immutable lie → curve mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaselineTable {
    curves: BTreeMap<LieCategory, Vec<ControlPoint>>,
}

impl BaselineTable {
    /// The process-wide built-in table.
    pub fn shared() -> Arc<BaselineTable> {
        Arc::clone(&BUILTIN)
    }

    /// Builds a table from points expressed in each lie's display unit.
    ///
    /// Green distances are given in feet and converted to canonical yards here, so the
    /// resulting curves can be queried with stored shot distances directly.
    pub fn from_display_points(curves: BTreeMap<LieCategory, Vec<(f64, f64)>>) -> Result<Self> {
        let mut table = BTreeMap::new();
        for (lie, raw) in curves {
            let mut points = Vec::with_capacity(raw.len());
            for (distance, expected_strokes) in raw {
                if !distance.is_finite() || distance < 0.0 || !expected_strokes.is_finite() {
                    return Err(CoreError::Config(format!(
                        "{lie} baseline has an invalid point ({distance}, {expected_strokes})"
                    )));
                }
                points.push(ControlPoint {
                    distance: units::to_canonical(lie, distance),
                    expected_strokes,
                });
            }
            points.sort_by(|a, b| a.distance.total_cmp(&b.distance));
            validate_curve(lie, &points)?;
            table.insert(lie, points);
        }
        for lie in LieCategory::ALL {
            if !table.contains_key(&lie) {
                warn!(%lie, "baseline table has no curve for lie");
            }
        }
        Ok(Self { curves: table })
    }

    /// Parses `{ "Tee": [[450, 4.3], ...], ... }` with green distances in feet.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let curves: BTreeMap<LieCategory, Vec<(f64, f64)>> = serde_json::from_str(json)
            .map_err(|err| CoreError::Config(format!("invalid baseline table: {err}")))?;
        Self::from_display_points(curves)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|err| {
            CoreError::Config(format!("cannot read baseline {}: {err}", path.display()))
        })?;
        Self::from_json_str(&data)
    }

    /// Control points for `lie`, ascending by canonical distance.
    pub fn curve(&self, lie: LieCategory) -> Option<&[ControlPoint]> {
        self.curves.get(&lie).map(Vec::as_slice)
    }

    pub fn lies(&self) -> impl Iterator<Item = LieCategory> + '_ {
        self.curves.keys().copied()
    }
}

fn validate_curve(lie: LieCategory, points: &[ControlPoint]) -> Result<()> {
    if points.len() < MIN_CONTROL_POINTS {
        return Err(CoreError::Config(format!(
            "{lie} baseline needs at least {MIN_CONTROL_POINTS} control points"
        )));
    }
    for pair in points.windows(2) {
        if pair[1].distance <= pair[0].distance {
            return Err(CoreError::Config(format!(
                "{lie} baseline repeats distance {}",
                pair[0].distance
            )));
        }
        if pair[1].expected_strokes < pair[0].expected_strokes {
            return Err(CoreError::Config(format!(
                "{lie} baseline expects fewer strokes from {} than from {}",
                pair[1].distance, pair[0].distance
            )));
        }
    }
    Ok(())
}
