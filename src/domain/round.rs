use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    course::{Course, TeeColor},
    lie::LieCategory,
    shot::Shot,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub course_id: Uuid,
    pub tee_color: TeeColor,
    #[serde(default)]
    pub shots: Vec<Shot>,
    #[serde(default)]
    pub total_strokes: u32,
    #[serde(default)]
    pub completed: bool,
}

/// Score statistics shown once a round is finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub total_strokes: u32,
    pub shots_by_lie: BTreeMap<LieCategory, u32>,
    /// Strokes minus the par of the played tees' card; `None` without a card.
    #[serde(default)]
    pub score_vs_par: Option<i32>,
}

impl RoundSummary {
    /// `Even`, `+N` or `-N`, and `N/A` when par is unknown.
    pub fn score_vs_par_label(&self) -> String {
        match self.score_vs_par {
            None => "N/A".to_string(),
            Some(0) => "Even".to_string(),
            Some(diff) if diff > 0 => format!("+{}", diff),
            Some(diff) => diff.to_string(),
        }
    }
}

impl Round {
    pub fn start(course_id: Uuid, tee_color: TeeColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            course_id,
            tee_color,
            shots: Vec::new(),
            total_strokes: 0,
            completed: false,
        }
    }

    /// Shots recorded on `hole_number`, in sequence order.
    pub fn shots_for_hole(&self, hole_number: u8) -> Vec<Shot> {
        let mut shots: Vec<Shot> = self
            .shots
            .iter()
            .filter(|shot| shot.hole_number == hole_number)
            .cloned()
            .collect();
        shots.sort_by_key(|shot| shot.shot_number);
        shots
    }

    /// Replaces every shot of `hole_number` with `shots` and recounts the strokes.
    pub fn merge_hole_shots(&mut self, hole_number: u8, shots: Vec<Shot>) {
        self.shots.retain(|shot| shot.hole_number != hole_number);
        self.shots.extend(shots.into_iter().map(|mut shot| {
            shot.hole_number = hole_number;
            shot
        }));
        self.shots.sort_by_key(|shot| (shot.hole_number, shot.shot_number));
        self.total_strokes = self.shots.len() as u32;
    }

    /// Hole numbers with at least one recorded shot.
    pub fn holes_played(&self) -> Vec<u8> {
        let holes: BTreeSet<u8> = self.shots.iter().map(|shot| shot.hole_number).collect();
        holes.into_iter().collect()
    }

    /// Totals for the round. `course` supplies par for the score against par.
    pub fn summary(&self, course: Option<&Course>) -> RoundSummary {
        let mut shots_by_lie: BTreeMap<LieCategory, u32> =
            LieCategory::ALL.into_iter().map(|lie| (lie, 0)).collect();
        for shot in &self.shots {
            *shots_by_lie.entry(shot.lie).or_insert(0) += 1;
        }
        let score_vs_par = course
            .and_then(|course| course.total_par(self.tee_color))
            .map(|par| self.total_strokes as i32 - par as i32);
        RoundSummary {
            total_strokes: self.total_strokes,
            shots_by_lie,
            score_vs_par,
        }
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot(hole: u8, number: u32, lie: LieCategory, distance: f64) -> Shot {
        Shot::new(hole, number, lie, distance)
    }

    #[test]
    fn merge_replaces_only_the_target_hole() {
        let mut round = Round::start(Uuid::new_v4(), TeeColor::White);
        round.merge_hole_shots(
            1,
            vec![
                shot(1, 1, LieCategory::Tee, 350.0),
                shot(1, 2, LieCategory::Fairway, 100.0),
            ],
        );
        round.merge_hole_shots(2, vec![shot(2, 1, LieCategory::Tee, 160.0)]);
        assert_eq!(round.total_strokes, 3);

        round.merge_hole_shots(
            1,
            vec![
                shot(1, 1, LieCategory::Tee, 350.0),
                shot(1, 2, LieCategory::Fairway, 100.0),
                shot(1, 3, LieCategory::Green, 5.0),
            ],
        );
        assert_eq!(round.total_strokes, 4);
        assert_eq!(round.shots_for_hole(1).len(), 3);
        assert_eq!(round.shots_for_hole(2).len(), 1);
        assert_eq!(round.holes_played(), vec![1, 2]);
    }

    #[test]
    fn summary_counts_every_lie() {
        let mut round = Round::start(Uuid::new_v4(), TeeColor::Red);
        round.merge_hole_shots(
            4,
            vec![
                shot(4, 1, LieCategory::Tee, 400.0),
                shot(4, 2, LieCategory::Rough, 150.0),
                shot(4, 3, LieCategory::Green, 8.0),
                shot(4, 4, LieCategory::Green, 1.0),
            ],
        );
        let summary = round.summary(None);
        assert_eq!(summary.total_strokes, 4);
        assert_eq!(summary.shots_by_lie.len(), LieCategory::ALL.len());
        assert_eq!(summary.shots_by_lie[&LieCategory::Green], 2);
        assert_eq!(summary.shots_by_lie[&LieCategory::Sand], 0);
        assert_eq!(summary.score_vs_par, None);
        assert_eq!(summary.score_vs_par_label(), "N/A");
    }

    fn round_with_strokes(tee: TeeColor, strokes: u32) -> Round {
        let mut round = Round::start(Uuid::new_v4(), tee);
        let shots = (1..=strokes)
            .map(|number| {
                let lie = if number == 1 {
                    LieCategory::Tee
                } else {
                    LieCategory::Green
                };
                shot(1, number, lie, 5.0)
            })
            .collect();
        round.merge_hole_shots(1, shots);
        round
    }

    #[test]
    fn score_vs_par_uses_the_played_tees_card() {
        let mut course = Course::new("Links", vec![TeeColor::White, TeeColor::Gold]).unwrap();
        course
            .set_hole(
                TeeColor::White,
                crate::domain::Hole {
                    number: 1,
                    par: 3,
                    distance: 150.0,
                },
            )
            .unwrap();
        // hole 1 par 3 plus 17 blank par 4 holes
        assert_eq!(course.total_par(TeeColor::White), Some(71));
        assert_eq!(course.total_par(TeeColor::Gold), None);

        let even = round_with_strokes(TeeColor::White, 71).summary(Some(&course));
        assert_eq!(even.score_vs_par, Some(0));
        assert_eq!(even.score_vs_par_label(), "Even");

        let over = round_with_strokes(TeeColor::White, 74).summary(Some(&course));
        assert_eq!(over.score_vs_par, Some(3));
        assert_eq!(over.score_vs_par_label(), "+3");

        let under = round_with_strokes(TeeColor::White, 69).summary(Some(&course));
        assert_eq!(under.score_vs_par, Some(-2));
        assert_eq!(under.score_vs_par_label(), "-2");

        let no_card = round_with_strokes(TeeColor::Gold, 70).summary(Some(&course));
        assert_eq!(no_card.score_vs_par, None);
        assert_eq!(no_card.score_vs_par_label(), "N/A");
    }
}
