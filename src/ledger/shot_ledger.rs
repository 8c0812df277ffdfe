use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    domain::{LieCategory, Shot},
    errors::{CoreError, Result},
    strokes::{units, StrokesGainedCalculator},
};

/// Par values a hole can be configured with.
pub const PAR_OPTIONS: [u8; 3] = [3, 4, 5];

/// Lifecycle of one hole's ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoleState {
    NoHoleData,
    AwaitingFirstShot,
    InProgress,
    Completed,
}

/// Par and canonical length of the hole being played.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleSetup {
    pub par: u8,
    pub distance: f64,
}

impl HoleSetup {
    pub fn new(par: u8, distance: f64) -> Result<Self> {
        if !PAR_OPTIONS.contains(&par) {
            return Err(CoreError::Validation(format!(
                "par must be one of {:?}, got {}",
                PAR_OPTIONS, par
            )));
        }
        if !distance.is_finite() || distance <= 0.0 {
            return Err(CoreError::Validation(
                "hole distance must be greater than zero".into(),
            ));
        }
        Ok(Self { par, distance })
    }
}

/// Ordered shots of a single hole plus the rules that keep them consistent.
///
/// Every mutation validates first and only then touches the shots, so a rejected call
/// leaves the ledger exactly as it was. After each successful mutation the distances are
/// re-chained and strokes gained recomputed for the whole hole.
#[derive(Debug, Clone)]
pub struct ShotLedger {
    hole_number: u8,
    setup: Option<HoleSetup>,
    shots: Vec<Shot>,
    completed: bool,
    calculator: StrokesGainedCalculator,
}

impl ShotLedger {
    pub fn new(hole_number: u8, calculator: StrokesGainedCalculator) -> Self {
        Self {
            hole_number,
            setup: None,
            shots: Vec::new(),
            completed: false,
            calculator,
        }
    }

    /// Rebuilds a ledger from previously persisted shots.
    ///
    /// Persisted shots that break the ledger rules are reported as [`CoreError::Storage`].
    ///
    /// The hole counts as completed when its last shot is. When hole data is known but no
    /// shot was recorded yet, the tee shot is created just like [`ShotLedger::set_hole`] does.
    pub fn restore(
        hole_number: u8,
        setup: Option<HoleSetup>,
        mut shots: Vec<Shot>,
        calculator: StrokesGainedCalculator,
    ) -> Result<Self> {
        shots.sort_by_key(|shot| shot.shot_number);
        for (index, shot) in shots.iter().enumerate() {
            if shot.shot_number as usize != index + 1 {
                return Err(CoreError::Storage(format!(
                    "hole {} shots are not numbered 1..={}",
                    hole_number,
                    shots.len()
                )));
            }
            if index + 1 < shots.len() && !shot.completed {
                return Err(CoreError::Storage(format!(
                    "hole {} has open shot {} before the last shot",
                    hole_number, shot.shot_number
                )));
            }
        }
        if let Some(first) = shots.first() {
            if first.lie != LieCategory::Tee {
                return Err(CoreError::Storage(format!(
                    "hole {} does not start from the tee",
                    hole_number
                )));
            }
        }

        let completed = shots.last().map(|shot| shot.completed).unwrap_or(false);
        let mut ledger = Self {
            hole_number,
            setup,
            shots,
            completed,
            calculator,
        };
        if ledger.shots.is_empty() {
            if let Some(setup) = setup {
                ledger
                    .shots
                    .push(Shot::new(hole_number, 1, LieCategory::Tee, setup.distance));
            }
        }
        ledger.recompute();
        debug!(
            hole = hole_number,
            shots = ledger.shots.len(),
            state = ?ledger.state(),
            "shot ledger restored"
        );
        Ok(ledger)
    }

    pub fn hole_number(&self) -> u8 {
        self.hole_number
    }

    pub fn setup(&self) -> Option<HoleSetup> {
        self.setup
    }

    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    pub fn into_shots(self) -> Vec<Shot> {
        self.shots
    }

    pub fn calculator(&self) -> &StrokesGainedCalculator {
        &self.calculator
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The shot still waiting for a result, if the hole is not finished.
    pub fn open_shot(&self) -> Option<&Shot> {
        self.shots.last().filter(|shot| !shot.completed)
    }

    pub fn state(&self) -> HoleState {
        if self.shots.is_empty() {
            HoleState::NoHoleData
        } else if self.completed {
            HoleState::Completed
        } else if self.shots.len() == 1 {
            HoleState::AwaitingFirstShot
        } else {
            HoleState::InProgress
        }
    }

    /// Sets par and length. The first call creates the tee shot; later calls move it.
    pub fn set_hole(&mut self, par: u8, distance: f64) -> Result<()> {
        let setup = HoleSetup::new(par, distance)?;
        self.setup = Some(setup);
        if self.shots.is_empty() {
            self.shots
                .push(Shot::new(self.hole_number, 1, LieCategory::Tee, distance));
            debug!(hole = self.hole_number, par, distance, "hole data set");
        } else if self.shots[0].distance_to_hole != distance {
            self.shots[0].distance_to_hole = distance;
            self.rechain(0);
            debug!(hole = self.hole_number, par, distance, "hole distance changed");
        }
        self.recompute();
        Ok(())
    }

    /// Records where the previous stroke finished: `display_distance` from the hole in the
    /// display unit of `lie`.
    pub fn add_shot(&mut self, lie: LieCategory, display_distance: f64) -> Result<&Shot> {
        match self.state() {
            HoleState::NoHoleData => {
                return Err(CoreError::Precondition(
                    "set hole data before adding shots".into(),
                ))
            }
            HoleState::Completed => {
                return Err(CoreError::Precondition(format!(
                    "hole {} is already completed",
                    self.hole_number
                )))
            }
            HoleState::AwaitingFirstShot | HoleState::InProgress => {}
        }
        validate_display_distance(lie, display_distance)?;

        let distance = units::to_canonical(lie, display_distance);
        if let Some(previous) = self.shots.last_mut() {
            previous.close_out(distance);
        }
        let shot_number = self.shots.len() as u32 + 1;
        self.shots
            .push(Shot::new(self.hole_number, shot_number, lie, distance));
        self.recompute();
        debug!(
            hole = self.hole_number,
            shot = shot_number,
            %lie,
            distance = %units::format_distance(lie, distance),
            "shot added"
        );
        Ok(&self.shots[self.shots.len() - 1])
    }

    /// Drops the trailing shot and reopens the one before it. The tee shot cannot be removed.
    pub fn remove_last_shot(&mut self) -> Result<Shot> {
        if self.shots.len() <= 1 {
            return Err(CoreError::Precondition("cannot remove the first shot".into()));
        }
        let removed = self.shots.remove(self.shots.len() - 1);
        if let Some(last) = self.shots.last_mut() {
            last.reopen();
        }
        self.completed = false;
        self.recompute();
        debug!(
            hole = self.hole_number,
            shot = removed.shot_number,
            "last shot removed"
        );
        Ok(removed)
    }

    /// Changes the lie and distance of shot `index` (0-based). The tee shot keeps its lie.
    pub fn edit_shot(
        &mut self,
        index: usize,
        lie: LieCategory,
        display_distance: f64,
    ) -> Result<&Shot> {
        if index >= self.shots.len() {
            return Err(CoreError::Precondition(format!(
                "hole {} has no shot {}",
                self.hole_number,
                index + 1
            )));
        }
        let lie = if index == 0 {
            if lie != LieCategory::Tee {
                debug!(hole = self.hole_number, requested = %lie, "tee shot lie is fixed");
            }
            LieCategory::Tee
        } else {
            lie
        };
        validate_display_distance(lie, display_distance)?;
        let distance = units::to_canonical(lie, display_distance);
        let shot = &mut self.shots[index];
        shot.lie = lie;
        shot.distance_to_hole = distance;
        self.rechain(index);
        self.recompute();
        debug!(
            hole = self.hole_number,
            shot = index + 1,
            %lie,
            distance = %units::format_distance(lie, distance),
            "shot edited"
        );
        Ok(&self.shots[index])
    }

    /// Holes out from the trailing shot's position.
    pub fn complete_hole(&mut self) -> Result<&Shot> {
        let Some(last) = self.shots.last_mut() else {
            return Err(CoreError::Precondition("no shots to complete".into()));
        };
        last.hole_out();
        self.completed = true;
        self.recompute();
        debug!(
            hole = self.hole_number,
            strokes = self.shots.len(),
            "hole completed"
        );
        Ok(&self.shots[self.shots.len() - 1])
    }

    /// Re-derives distance traveled for the shot at `index` and the one before it.
    fn rechain(&mut self, index: usize) {
        let distance = self.shots[index].distance_to_hole;
        if index > 0 {
            self.shots[index - 1].close_out(distance);
        }
        if let Some(next) = self.shots.get(index + 1).map(|shot| shot.distance_to_hole) {
            self.shots[index].close_out(next);
        } else if self.completed {
            self.shots[index].hole_out();
        }
    }

    fn recompute(&mut self) {
        let last = self.shots.len().saturating_sub(1);
        for index in 0..self.shots.len() {
            let gained = if index < last {
                Some(
                    self.calculator
                        .strokes_gained(&self.shots[index], Some(&self.shots[index + 1])),
                )
            } else if self.completed {
                Some(self.calculator.strokes_gained(&self.shots[index], None))
            } else {
                None
            };
            let shot = &mut self.shots[index];
            shot.hole_number = self.hole_number;
            shot.shot_number = index as u32 + 1;
            shot.strokes_gained = gained;
        }
    }
}

fn validate_display_distance(lie: LieCategory, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{} distance must be a non-negative number of {}, got {}",
            lie,
            lie.display_unit().label(),
            value
        )));
    }
    Ok(())
}
