//! Typed access to the rounds and courses kept in a [`KeyValueStore`].

use std::cmp::Reverse;

use tracing::info;
use uuid::Uuid;

use crate::{
    domain::{Course, Round, TeeColor},
    errors::{CoreError, Result},
    storage::{KeyValueStore, KeyValueStoreExt, COURSES_KEY, ROUNDS_KEY},
};

/// Number of rounds listed by [`RoundStore::recent_rounds`] unless configured otherwise.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Repository over the two persisted collections: courses and rounds.
pub struct RoundStore {
    storage: Box<dyn KeyValueStore>,
    recent_limit: usize,
}

impl RoundStore {
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    pub fn recent_limit(&self) -> usize {
        self.recent_limit
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    pub fn rounds(&self) -> Result<Vec<Round>> {
        Ok(self
            .storage
            .load_json::<Vec<Round>>(ROUNDS_KEY)?
            .unwrap_or_default())
    }

    pub fn round(&self, id: Uuid) -> Result<Round> {
        self.rounds()?
            .into_iter()
            .find(|round| round.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("round {}", id)))
    }

    /// Inserts the round or replaces the stored round with the same id.
    pub fn save_round(&self, round: &Round) -> Result<()> {
        let mut rounds = self.rounds()?;
        match rounds.iter_mut().find(|existing| existing.id == round.id) {
            Some(existing) => *existing = round.clone(),
            None => rounds.push(round.clone()),
        }
        self.storage.save_json(ROUNDS_KEY, &rounds)
    }

    /// Most recent rounds first, at most [`RoundStore::recent_limit`] of them.
    pub fn recent_rounds(&self) -> Result<Vec<Round>> {
        let mut rounds = self.rounds()?;
        rounds.sort_by_key(|round| Reverse(round.date));
        rounds.truncate(self.recent_limit);
        Ok(rounds)
    }

    /// Creates and stores a new round on `course_id` played from `tee`.
    pub fn start_round(&self, course_id: Uuid, tee: TeeColor) -> Result<Round> {
        let course = self.course(course_id)?;
        if !course.tee_colors.contains(&tee) {
            return Err(CoreError::Validation(format!(
                "{} has no {} tees",
                course.name, tee
            )));
        }
        let round = Round::start(course_id, tee);
        self.save_round(&round)?;
        info!(round = %round.id, course = %course.name, %tee, "round started");
        Ok(round)
    }

    pub fn courses(&self) -> Result<Vec<Course>> {
        Ok(self
            .storage
            .load_json::<Vec<Course>>(COURSES_KEY)?
            .unwrap_or_default())
    }

    pub fn course(&self, id: Uuid) -> Result<Course> {
        self.courses()?
            .into_iter()
            .find(|course| course.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("course {}", id)))
    }

    /// Inserts the course or replaces the stored course with the same id.
    pub fn save_course(&self, course: &Course) -> Result<()> {
        let mut courses = self.courses()?;
        match courses.iter_mut().find(|existing| existing.id == course.id) {
            Some(existing) => *existing = course.clone(),
            None => courses.push(course.clone()),
        }
        self.storage.save_json(COURSES_KEY, &courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::Duration;

    fn store() -> RoundStore {
        RoundStore::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn empty_store_has_no_rounds_or_courses() {
        let store = store();
        assert!(store.rounds().unwrap().is_empty());
        assert!(store.courses().unwrap().is_empty());
        assert!(matches!(
            store.round(Uuid::new_v4()),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn save_round_upserts_by_id() {
        let store = store();
        let mut round = Round::start(Uuid::new_v4(), TeeColor::White);
        store.save_round(&round).unwrap();
        round.total_strokes = 5;
        store.save_round(&round).unwrap();

        let rounds = store.rounds().unwrap();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].total_strokes, 5);
    }

    #[test]
    fn recent_rounds_are_newest_first() {
        let store = store().with_recent_limit(1);
        let course = Uuid::new_v4();
        let mut old = Round::start(course, TeeColor::Red);
        old.date -= Duration::days(3);
        let new = Round::start(course, TeeColor::Red);
        store.save_round(&old).unwrap();
        store.save_round(&new).unwrap();

        let recent = store.recent_rounds().unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, new.id);
    }

    #[test]
    fn start_round_requires_known_course_and_tee() {
        let store = store();
        assert!(matches!(
            store.start_round(Uuid::new_v4(), TeeColor::Blue),
            Err(CoreError::NotFound(_))
        ));

        let course = Course::new("Municipal", vec![TeeColor::White]).unwrap();
        store.save_course(&course).unwrap();
        assert!(matches!(
            store.start_round(course.id, TeeColor::Gold),
            Err(CoreError::Validation(_))
        ));
        let round = store.start_round(course.id, TeeColor::White).unwrap();
        assert_eq!(store.round(round.id).unwrap().course_id, course.id);
    }
}
