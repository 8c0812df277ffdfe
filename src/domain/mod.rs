//! Golf domain records: lies, shots, courses, and rounds.

pub mod course;
pub mod lie;
pub mod round;
pub mod shot;

pub use course::{Course, Hole, TeeColor, HOLES_PER_ROUND};
pub use lie::{DistanceUnit, LieCategory};
pub use round::{Round, RoundSummary};
pub use shot::Shot;
