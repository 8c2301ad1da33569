//! Persistence stores for saved games.
//!
//! The engine writes its state through the [`Store`] trait after every
//! mutating operation and reads it back once on construction. Store
//! failures are never fatal to the game.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::PersistenceError;

/// A key/value byte store.
pub trait Store {
    /// Loads the bytes stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError>;

    /// Stores `bytes` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), PersistenceError>;

    /// Removes the value stored under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

impl<S: Store + ?Sized> Store for &mut S {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), PersistenceError> {
        (**self).save(key, bytes)
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        (**self).remove(key)
    }
}

/// An in-memory store, useful for tests and hosts without persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the raw bytes stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Returns whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), PersistenceError> {
        self.entries.insert(String::from(key), bytes.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(feature = "std")]
mod file {
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::Store;
    use crate::error::PersistenceError;

    /// A store that keeps each key in its own file inside a directory.
    ///
    /// The directory is created on the first save.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        /// Creates a store rooted at `dir`.
        #[must_use]
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        /// Returns the directory backing the store.
        #[must_use]
        pub fn dir(&self) -> &Path {
            &self.dir
        }

        /// Returns the file holding `key`.
        #[must_use]
        pub fn path_for(&self, key: &str) -> PathBuf {
            let file: alloc::string::String = key
                .chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                        c
                    } else {
                        '_'
                    }
                })
                .collect();
            self.dir.join(file).with_extension("json")
        }
    }

    fn unavailable(err: &std::io::Error) -> PersistenceError {
        PersistenceError::Unavailable(err.to_string())
    }

    impl Store for FileStore {
        fn load(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
            match fs::read(self.path_for(key)) {
                Ok(bytes) => Ok(Some(bytes)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(unavailable(&err)),
            }
        }

        fn save(&mut self, key: &str, bytes: &[u8]) -> Result<(), PersistenceError> {
            fs::create_dir_all(&self.dir).map_err(|err| unavailable(&err))?;
            fs::write(self.path_for(key), bytes).map_err(|err| unavailable(&err))
        }

        fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
            match fs::remove_file(self.path_for(key)) {
                Err(err) if err.kind() != ErrorKind::NotFound => Err(unavailable(&err)),
                _ => Ok(()),
            }
        }
    }
}

#[cfg(feature = "std")]
pub use file::FileStore;
