#![doc(test(attr(deny(warnings))))]

//! Bit by Bit core: a shot-by-shot golf ledger that scores every stroke as
//! strokes gained against a PGA-style baseline and keeps rounds persisted.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod strokes;
pub mod utils;

use std::sync::Once;

pub use crate::config::{Config, ConfigManager};
pub use crate::core::{HoleSession, NextHole, RoundStore};
pub use crate::domain::{Course, Hole, LieCategory, Round, RoundSummary, Shot, TeeColor};
pub use crate::errors::{CoreError, Result};
pub use crate::ledger::{HoleEntry, HoleState, ShotEntry, ShotLedger};
pub use crate::strokes::{BaselineTable, StrokesGainedCalculator};

static INIT: Once = Once::new();

/// Initializes global tracing with the default filter and emits a startup info log.
pub fn init() {
    init_with(&Config::default());
}

/// Same as [`init`], layering the configured log filter on top of the default.
pub fn init_with(config: &Config) {
    INIT.call_once(|| {
        utils::init_tracing(config.log_filter.as_deref());
        let build = utils::build_info::current();
        tracing::info!(
            version = build.version,
            git = build.git_hash,
            profile = build.profile,
            "bitbybit core initialized"
        );
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
