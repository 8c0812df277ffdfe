//! Per-hole shot ledger and the input validation in front of it.

pub mod input;
pub mod shot_ledger;

pub use input::{parse_distance, HoleEntry, ShotEntry};
pub use shot_ledger::{HoleSetup, HoleState, ShotLedger, PAR_OPTIONS};
