//! Conversion between the unit a distance is entered in and canonical yards.
//!
//! Every distance stored on a [`Shot`](crate::domain::Shot) is canonical. Values typed by
//! the user are in the display unit of the lie they describe (feet on the green, yards
//! elsewhere) and must pass through [`to_canonical`] before they reach the ledger.

use crate::domain::LieCategory;

/// Converts a distance entered for `lie` into canonical yards.
pub fn to_canonical(lie: LieCategory, display_value: f64) -> f64 {
    display_value / lie.display_unit().per_canonical()
}

/// Converts canonical yards into the display unit for `lie`.
pub fn to_display(lie: LieCategory, canonical_value: f64) -> f64 {
    canonical_value * lie.display_unit().per_canonical()
}

/// Renders a canonical distance the way it is shown next to a shot, e.g. `100 yds` or `12 ft`.
pub fn format_distance(lie: LieCategory, canonical_value: f64) -> String {
    let unit = lie.display_unit();
    format!(
        "{:.0} {}",
        to_display(lie, canonical_value).round(),
        unit.abbreviation()
    )
}
