use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CoreError, Result};

pub const HOLES_PER_ROUND: u8 = 18;
const DEFAULT_PAR: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TeeColor {
    Red,
    White,
    Blue,
    Gold,
}

impl fmt::Display for TeeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TeeColor::Red => "Red",
            TeeColor::White => "White",
            TeeColor::Blue => "Blue",
            TeeColor::Gold => "Gold",
        };
        f.write_str(name)
    }
}

/// Scorecard entry for one hole from one set of tees. Distance is canonical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub number: u8,
    pub par: u8,
    pub distance: f64,
}

impl Hole {
    /// A hole whose distance has never been entered.
    pub fn placeholder(number: u8) -> Self {
        Self {
            number,
            par: DEFAULT_PAR,
            distance: 0.0,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.distance > 0.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub tee_colors: Vec<TeeColor>,
    #[serde(default)]
    pub holes: BTreeMap<TeeColor, Vec<Hole>>,
}

impl Course {
    pub fn new(name: impl Into<String>, tee_colors: Vec<TeeColor>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::Validation("course name is required".into()));
        }
        if tee_colors.is_empty() {
            return Err(CoreError::Validation(
                "select at least one set of tees".into(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            tee_colors,
            holes: BTreeMap::new(),
        })
    }

    /// Configured hole data for `number`, if any has been entered for these tees.
    pub fn hole(&self, tee: TeeColor, number: u8) -> Option<&Hole> {
        self.holes
            .get(&tee)?
            .iter()
            .find(|hole| hole.number == number && hole.is_configured())
    }

    /// Sum of par over the whole card for `tee`, or `None` when these tees have no card.
    pub fn total_par(&self, tee: TeeColor) -> Option<u32> {
        self.holes
            .get(&tee)
            .map(|card| card.iter().map(|hole| u32::from(hole.par)).sum())
    }

    /// Writes a hole into the card for `tee`, creating a blank 18-hole card first if needed.
    pub fn set_hole(&mut self, tee: TeeColor, hole: Hole) -> Result<()> {
        if hole.number == 0 || hole.number > HOLES_PER_ROUND {
            return Err(CoreError::Validation(format!(
                "hole number {} is outside 1..={}",
                hole.number, HOLES_PER_ROUND
            )));
        }
        let card = self
            .holes
            .entry(tee)
            .or_insert_with(|| (1..=HOLES_PER_ROUND).map(Hole::placeholder).collect());
        match card.iter_mut().find(|entry| entry.number == hole.number) {
            Some(entry) => *entry = hole,
            None => {
                card.push(hole);
                card.sort_by_key(|entry| entry.number);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_course_requires_name_and_tees() {
        assert!(Course::new("  ", vec![TeeColor::White]).is_err());
        assert!(Course::new("Pebble", Vec::new()).is_err());
        let course = Course::new(" Pebble ", vec![TeeColor::White]).unwrap();
        assert_eq!(course.name, "Pebble");
    }

    #[test]
    fn set_hole_creates_full_card() {
        let mut course = Course::new("Links", vec![TeeColor::Blue]).unwrap();
        course
            .set_hole(
                TeeColor::Blue,
                Hole {
                    number: 7,
                    par: 3,
                    distance: 165.0,
                },
            )
            .unwrap();
        let card = &course.holes[&TeeColor::Blue];
        assert_eq!(card.len(), usize::from(HOLES_PER_ROUND));
        assert_eq!(course.hole(TeeColor::Blue, 7).map(|h| h.par), Some(3));
        assert!(course.hole(TeeColor::Blue, 8).is_none(), "placeholder is not configured");
        assert!(course.hole(TeeColor::Red, 7).is_none());
    }

    #[test]
    fn set_hole_rejects_out_of_range_numbers() {
        let mut course = Course::new("Links", vec![TeeColor::Blue]).unwrap();
        let err = course
            .set_hole(TeeColor::Blue, Hole::placeholder(19))
            .expect_err("19 is not a hole");
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
