//! Services that connect the shot ledger to stored rounds and courses.

pub mod hole_session;
pub mod round_store;

pub use hole_session::{HoleSession, NextHole};
pub use round_store::{RoundStore, DEFAULT_RECENT_LIMIT};
