// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashMap,
          fmt::{Debug, Formatter},
          path::PathBuf};

use kv::Store;

use crate::{KVBucket, config_folder, get_from_bucket, insert_into_bucket,
            load_or_create_bucket_from_store, load_or_create_store, remove_from_bucket};

/// Abstraction for string valued, whole record persistence, for dependency injection.
/// It has the same semantics as a browser's `localStorage`: a key maps to one text
/// value, which is read and written as a whole.
///
/// Implemented by [`KvPositionStorage`] (on disk) and [`InMemoryPositionStorage`].
pub trait PositionStorage {
    /// # Errors
    ///
    /// Returns an error if the backing store can't be read.
    fn try_get_item(&mut self, key: &str) -> miette::Result<Option<String>>;

    /// # Errors
    ///
    /// Returns an error if the backing store can't be written.
    fn try_set_item(&mut self, key: &str, value: &str) -> miette::Result<()>;

    /// Removing a key that isn't there is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store can't be written.
    fn try_remove_item(&mut self, key: &str) -> miette::Result<()>;
}

/// [`PositionStorage`] backed by an embedded [kv] store on disk, so a position saved in
/// one session is there in the next.
pub struct KvPositionStorage {
    db_folder_path: PathBuf,
    _store: Store,
    bucket: KVBucket<'static, String>,
}

impl Debug for KvPositionStorage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvPositionStorage")
            .field("db_folder_path", &self.db_folder_path)
            .finish_non_exhaustive()
    }
}

impl KvPositionStorage {
    /// Opens (or creates) the store in `db_folder_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store or its bucket can't be created.
    pub fn try_open(db_folder_path: impl Into<PathBuf>) -> miette::Result<Self> {
        let db_folder_path: PathBuf = db_folder_path.into();
        let path_str = db_folder_path.to_string_lossy().to_string();
        let store = load_or_create_store(&path_str)?;
        let bucket = load_or_create_bucket_from_store(&store, None)?;
        Ok(Self {
            db_folder_path,
            _store: store,
            bucket,
        })
    }

    /// Opens the store in the user's config folder, see
    /// [`config_folder::try_get_store_folder_path`].
    ///
    /// # Errors
    ///
    /// Returns an error if the config folder can't be found or created, or the store
    /// can't be opened.
    pub fn try_open_in_config_folder() -> miette::Result<Self> {
        let db_folder_path = config_folder::try_create()?;
        Self::try_open(db_folder_path)
    }

    #[must_use]
    pub fn db_folder_path(&self) -> &PathBuf { &self.db_folder_path }
}

impl PositionStorage for KvPositionStorage {
    fn try_get_item(&mut self, key: &str) -> miette::Result<Option<String>> {
        get_from_bucket(&self.bucket, key.to_string())
    }

    fn try_set_item(&mut self, key: &str, value: &str) -> miette::Result<()> {
        insert_into_bucket(&self.bucket, key.to_string(), value)
    }

    fn try_remove_item(&mut self, key: &str) -> miette::Result<()> {
        remove_from_bucket(&self.bucket, key.to_string()).map(|_| ())
    }
}

/// [`PositionStorage`] that lives only as long as the value does. Used in tests, and by
/// hosts that don't want anything written to disk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InMemoryPositionStorage {
    pub items: HashMap<String, String>,
}

impl InMemoryPositionStorage {
    /// Storage that already holds `value` under `key`.
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut it = Self::default();
        it.items.insert(key.to_string(), value.to_string());
        it
    }
}

impl PositionStorage for InMemoryPositionStorage {
    fn try_get_item(&mut self, key: &str) -> miette::Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn try_set_item(&mut self, key: &str, value: &str) -> miette::Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn try_remove_item(&mut self, key: &str) -> miette::Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::try_create_temp_dir;

    #[test]
    fn test_in_memory_round_trip() {
        let mut storage = InMemoryPositionStorage::default();
        assert_eq!(storage.try_get_item("keyboardPosition").unwrap(), None);

        storage.try_set_item("keyboardPosition", "{}").unwrap();
        assert_eq!(
            storage.try_get_item("keyboardPosition").unwrap(),
            Some("{}".to_string())
        );

        storage.try_remove_item("keyboardPosition").unwrap();
        storage.try_remove_item("keyboardPosition").unwrap();
        assert_eq!(storage.try_get_item("keyboardPosition").unwrap(), None);
    }

    #[serial]
    #[test]
    fn test_kv_storage_round_trip() {
        let root_temp_dir = try_create_temp_dir().unwrap();
        let db_folder = root_temp_dir.join("position_db");

        let mut storage = KvPositionStorage::try_open(&db_folder).unwrap();
        assert_eq!(storage.db_folder_path(), &db_folder);
        assert_eq!(storage.try_get_item("keyboardPosition").unwrap(), None);

        storage
            .try_set_item("keyboardPosition", r#"{"bottom":"1px","left":"2px"}"#)
            .unwrap();
        assert_eq!(
            storage.try_get_item("keyboardPosition").unwrap(),
            Some(r#"{"bottom":"1px","left":"2px"}"#.to_string())
        );

        storage.try_remove_item("keyboardPosition").unwrap();
        assert_eq!(storage.try_get_item("keyboardPosition").unwrap(), None);
        // Removing what isn't there is fine.
        storage.try_remove_item("keyboardPosition").unwrap();
    }
}
