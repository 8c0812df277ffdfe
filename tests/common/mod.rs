#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use bitbybit_core::{
    config::ConfigManager,
    core::RoundStore,
    domain::{Course, Hole, Round, TeeColor},
    storage::JsonFileStore,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Fresh directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Store and config manager backed by an isolated directory.
pub fn setup_test_env() -> (RoundStore, ConfigManager) {
    let base = temp_base();
    let storage = JsonFileStore::new(base.join("store")).expect("create json store");
    let store = RoundStore::new(Box::new(storage));
    let config_manager =
        ConfigManager::with_base_dir(base).expect("create config manager for temp dir");
    (store, config_manager)
}

/// A white-tee course whose first three holes are configured.
pub fn sample_course() -> Course {
    let mut course = Course::new("Pine Valley Muni", vec![TeeColor::White, TeeColor::Blue])
        .expect("valid course");
    for (number, par, distance) in [(1, 4, 350.0), (2, 3, 160.0), (3, 5, 510.0)] {
        course
            .set_hole(
                TeeColor::White,
                Hole {
                    number,
                    par,
                    distance,
                },
            )
            .expect("valid hole");
    }
    course
}

/// Saves [`sample_course`] and starts a white-tee round on it.
pub fn seeded_round(store: &RoundStore) -> (Course, Round) {
    let course = sample_course();
    store.save_course(&course).expect("save course");
    let round = store
        .start_round(course.id, TeeColor::White)
        .expect("start round");
    (course, round)
}
