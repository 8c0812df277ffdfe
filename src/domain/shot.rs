use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::lie::LieCategory;

/// One stroke attempt. All distances are canonical (yards).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub id: Uuid,
    pub hole_number: u8,
    /// 1-based position within the hole.
    pub shot_number: u32,
    pub lie: LieCategory,
    pub distance_to_hole: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_traveled: Option<f64>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes_gained: Option<f64>,
}

impl Shot {
    /// Creates an open shot with nothing derived yet.
    pub fn new(hole_number: u8, shot_number: u32, lie: LieCategory, distance_to_hole: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            hole_number,
            shot_number,
            lie,
            distance_to_hole,
            distance_traveled: None,
            completed: false,
            strokes_gained: None,
        }
    }

    /// Closes the shot out after the ball came to rest `remaining` yards from the hole.
    pub fn close_out(&mut self, remaining: f64) {
        self.distance_traveled = Some((self.distance_to_hole - remaining).max(0.0));
        self.completed = true;
    }

    /// Closes the shot out as holed.
    pub fn hole_out(&mut self) {
        self.distance_traveled = Some(self.distance_to_hole);
        self.completed = true;
    }

    /// Returns the shot to the open state, dropping everything derived from a successor.
    pub fn reopen(&mut self) {
        self.distance_traveled = None;
        self.completed = false;
        self.strokes_gained = None;
    }
}
