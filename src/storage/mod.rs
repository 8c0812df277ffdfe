pub mod json_backend;
pub mod memory;

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::{CoreError, Result};

/// Key under which the course list is stored.
pub const COURSES_KEY: &str = "bit_by_bit_courses";
/// Key under which the round list is stored.
pub const ROUNDS_KEY: &str = "bit_by_bit_rounds";

/// Abstraction over string-keyed persistence backends.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
    /// Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}

/// Typed JSON helpers available on every [`KeyValueStore`].
pub trait KeyValueStoreExt {
    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;
    fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {
    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.load(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|err| CoreError::Storage(format!("corrupt value under `{key}`: {err}"))),
            None => Ok(None),
        }
    }

    fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.save(key, &json)
    }
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
