use tracing::{info, warn};
use uuid::Uuid;

use super::round_store::RoundStore;
use crate::{
    domain::{Course, Hole, Round, RoundSummary, Shot, HOLES_PER_ROUND},
    errors::{CoreError, Result},
    ledger::{HoleEntry, HoleSetup, ShotEntry, ShotLedger},
    strokes::StrokesGainedCalculator,
};

/// Where play goes after a completed hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextHole {
    Hole(u8),
    Summary,
}

/// Facade that binds one hole's [`ShotLedger`] to its round and keeps the round stored.
///
/// Every successful ledger mutation is flushed right away. When the flush fails the
/// in-memory ledger is kept as is, the session is marked dirty and the storage error is
/// returned; call [`HoleSession::flush`] to retry.
pub struct HoleSession<'a> {
    store: &'a RoundStore,
    round: Round,
    course: Option<Course>,
    ledger: ShotLedger,
    dirty: bool,
}

impl<'a> HoleSession<'a> {
    pub fn open(
        store: &'a RoundStore,
        round_id: Uuid,
        hole_number: u8,
        calculator: StrokesGainedCalculator,
    ) -> Result<Self> {
        if hole_number == 0 || hole_number > HOLES_PER_ROUND {
            return Err(CoreError::Validation(format!(
                "hole number {} is outside 1..={}",
                hole_number, HOLES_PER_ROUND
            )));
        }
        let round = store.round(round_id)?;
        let course = match store.course(round.course_id) {
            Ok(course) => Some(course),
            Err(CoreError::NotFound(_)) => {
                warn!(round = %round.id, course = %round.course_id, "round references a missing course");
                None
            }
            Err(err) => return Err(err),
        };
        let setup = course
            .as_ref()
            .and_then(|course| course.hole(round.tee_color, hole_number))
            .map(|hole| HoleSetup::new(hole.par, hole.distance))
            .transpose()?;
        let ledger = ShotLedger::restore(
            hole_number,
            setup,
            round.shots_for_hole(hole_number),
            calculator,
        )?;
        info!(
            round = %round.id,
            hole = hole_number,
            state = ?ledger.state(),
            "hole opened"
        );
        Ok(Self {
            store,
            round,
            course,
            ledger,
            dirty: false,
        })
    }

    pub fn ledger(&self) -> &ShotLedger {
        &self.ledger
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    /// True when the last flush failed and the stored round is behind the ledger.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Sets par and length for the hole and records them on the course card.
    pub fn set_hole_data(&mut self, entry: &HoleEntry) -> Result<()> {
        let (par, distance) = entry.validate()?;
        self.ledger.set_hole(par, distance)?;
        let tee = self.round.tee_color;
        let hole = Hole {
            number: self.ledger.hole_number(),
            par,
            distance,
        };
        let course_saved = match self.course.as_mut() {
            Some(course) => match course.set_hole(tee, hole) {
                Ok(()) => self.store.save_course(course),
                Err(err) => Err(err),
            },
            None => Ok(()),
        };
        if let Err(err) = &course_saved {
            warn!(error = %err, "failed to record hole data on the course");
        }
        let flushed = self.flush();
        course_saved.and(flushed)
    }

    pub fn add_shot(&mut self, entry: &ShotEntry) -> Result<()> {
        let (lie, distance) = entry.validate()?;
        self.ledger.add_shot(lie, distance)?;
        self.flush()
    }

    /// Edits shot `index` (0-based).
    pub fn edit_shot(&mut self, index: usize, entry: &ShotEntry) -> Result<()> {
        let (lie, distance) = entry.validate()?;
        self.ledger.edit_shot(index, lie, distance)?;
        self.flush()
    }

    pub fn remove_last_shot(&mut self) -> Result<Shot> {
        let removed = self.ledger.remove_last_shot()?;
        self.flush()?;
        Ok(removed)
    }

    pub fn complete_hole(&mut self) -> Result<()> {
        self.ledger.complete_hole()?;
        self.flush()
    }

    /// Merges the hole's shots into the round and saves it.
    pub fn flush(&mut self) -> Result<()> {
        self.round
            .merge_hole_shots(self.ledger.hole_number(), self.ledger.shots().to_vec());
        match self.store.save_round(&self.round) {
            Ok(()) => {
                self.dirty = false;
                info!(
                    round = %self.round.id,
                    hole = self.ledger.hole_number(),
                    total_strokes = self.round.total_strokes,
                    "round saved"
                );
                Ok(())
            }
            Err(err) => {
                self.dirty = true;
                warn!(
                    round = %self.round.id,
                    hole = self.ledger.hole_number(),
                    error = %err,
                    "round save failed; ledger kept in memory"
                );
                Err(err)
            }
        }
    }

    /// The next stop once this hole is finished.
    pub fn next_hole(&self) -> Result<NextHole> {
        if !self.ledger.is_completed() {
            return Err(CoreError::Precondition(
                "complete the current hole first".into(),
            ));
        }
        let current = self.ledger.hole_number();
        if current >= HOLES_PER_ROUND {
            Ok(NextHole::Summary)
        } else {
            Ok(NextHole::Hole(current + 1))
        }
    }

    pub fn previous_hole(&self) -> Option<u8> {
        let current = self.ledger.hole_number();
        (current > 1).then(|| current - 1)
    }

    /// Marks the round completed, saves it and returns its summary.
    pub fn finish_round(&mut self) -> Result<RoundSummary> {
        self.round.mark_completed();
        self.flush()?;
        let summary = self.round.summary(self.course.as_ref());
        info!(
            round = %self.round.id,
            strokes = self.round.total_strokes,
            score = %summary.score_vs_par_label(),
            "round finished"
        );
        Ok(summary)
    }
}
