//! Validation of raw form input before it reaches a [`ShotLedger`](super::ShotLedger).

use crate::{
    domain::LieCategory,
    errors::{CoreError, Result},
};

/// Parses a distance typed by the user. Empty, non-numeric and negative values are rejected.
pub fn parse_distance(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("please enter a distance".into()));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CoreError::Validation(format!("`{}` is not a valid distance", trimmed)))?;
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "`{}` is not a valid distance",
            trimmed
        )));
    }
    if value < 0.0 {
        return Err(CoreError::Validation("distance cannot be negative".into()));
    }
    Ok(value)
}

/// A shot as entered: the selected lie and the distance in that lie's display unit.
#[derive(Debug, Clone, Default)]
pub struct ShotEntry {
    pub lie: Option<LieCategory>,
    pub distance: String,
}

impl ShotEntry {
    pub fn new(lie: LieCategory, distance: impl Into<String>) -> Self {
        Self {
            lie: Some(lie),
            distance: distance.into(),
        }
    }

    pub fn validate(&self) -> Result<(LieCategory, f64)> {
        let lie = self
            .lie
            .ok_or_else(|| CoreError::Validation("please select a lie".into()))?;
        Ok((lie, parse_distance(&self.distance)?))
    }
}

/// Hole data as entered: the selected par and the hole length in yards.
#[derive(Debug, Clone, Default)]
pub struct HoleEntry {
    pub par: Option<u8>,
    pub distance: String,
}

impl HoleEntry {
    pub fn new(par: u8, distance: impl Into<String>) -> Self {
        Self {
            par: Some(par),
            distance: distance.into(),
        }
    }

    pub fn validate(&self) -> Result<(u8, f64)> {
        let distance = parse_distance(&self.distance)?;
        if distance <= 0.0 {
            return Err(CoreError::Validation(
                "hole distance must be greater than zero".into(),
            ));
        }
        let par = self
            .par
            .ok_or_else(|| CoreError::Validation("please select par for this hole".into()))?;
        Ok((par, distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_distance("100").unwrap(), 100.0);
        assert_eq!(parse_distance(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_distance("0").unwrap(), 0.0);
    }

    #[test]
    fn rejects_empty_text_and_negative_input() {
        for raw in ["", "   ", "abc", "-3", "NaN", "inf"] {
            let err = parse_distance(raw).expect_err(raw);
            assert!(matches!(err, CoreError::Validation(_)), "{raw}: {err:?}");
        }
    }

    #[test]
    fn shot_entry_requires_a_lie() {
        let entry = ShotEntry {
            lie: None,
            distance: "120".into(),
        };
        let err = entry.validate().expect_err("lie missing");
        assert!(matches!(err, CoreError::Validation(ref message) if message.contains("lie")));
        assert_eq!(
            ShotEntry::new(LieCategory::Rough, "120").validate().unwrap(),
            (LieCategory::Rough, 120.0)
        );
    }

    #[test]
    fn hole_entry_requires_par_and_positive_distance() {
        assert!(HoleEntry::new(4, "0").validate().is_err());
        let missing_par = HoleEntry {
            par: None,
            distance: "380".into(),
        };
        assert!(matches!(
            missing_par.validate(),
            Err(CoreError::Validation(ref message)) if message.contains("par")
        ));
        assert_eq!(HoleEntry::new(4, "380").validate().unwrap(), (4, 380.0));
    }
}
