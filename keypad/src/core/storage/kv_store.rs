// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Thin wrapper around the [kv] crate, an embedded key/value store built on
//! [sled](https://github.com/spacejam/sled). There are only a handful of functions:
//! - [`load_or_create_store`]
//! - [`load_or_create_bucket_from_store`]
//! - [`insert_into_bucket`]
//! - [`get_from_bucket`]
//! - [`remove_from_bucket`]
//!
//! Values are UTF-8 text stored as raw bytes. Callers decide what the text means, which
//! keeps a corrupt record from failing inside [kv]. Decoding happens one layer up (see
//! [`crate::OverlayPositionStore`]) where a bad record can be treated as missing.
//!
//! Errors are fine grained, using [miette] and [thiserror] (see [`kv_error`]).

use std::fmt::{Debug, Display};

use kv::{Config, Raw, Store};
use miette::{Context, IntoDiagnostic};

use crate::DEBUG_KEYPAD_STORAGE;

/// Convenience type alias for the [`kv::Bucket`] type.
/// 1. A [`kv::Bucket`] is created from a [Store].
/// 2. A [`kv::Bucket`] is given a name, and there may be many [`kv::Bucket`]s in a
///    [Store].
/// 3. `KeyT` is not serialized. Values are [Raw] bytes holding UTF-8 text.
pub type KVBucket<'a, KeyT> = kv::Bucket<'a, KeyT, Raw>;

/// Name of the bucket the key/value pairs live in, unless the caller picks one.
pub const DEFAULT_BUCKET_NAME: &str = "overlay";

/// Create the db folder if it doesn't exist. Otherwise load it from the folder on disk.
///
/// # Errors
///
/// Returns an error if:
/// - The database folder cannot be created
/// - The store cannot be opened due to I/O errors or permission issues
/// - The database is locked by another process
#[tracing::instrument]
pub fn load_or_create_store(db_folder_path: &str) -> miette::Result<Store> {
    let cfg = Config::new(db_folder_path);

    let store =
        Store::new(cfg)
            .into_diagnostic()
            .wrap_err(KvErrorCouldNot::CreateDbFolder {
                db_folder_path: db_folder_path.to_string(),
            })?;

    DEBUG_KEYPAD_STORAGE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📑 load or create a store",
            db_folder_path = %db_folder_path
        );
    });

    Ok(store)
}

/// A [`kv::Bucket`] provides typed access to a section of the key/value [Store].
///
/// # Errors
///
/// Returns an error if the bucket cannot be created in the store.
#[tracing::instrument(skip(store))]
pub fn load_or_create_bucket_from_store<'a, KeyT: for<'k> kv::Key<'k>>(
    store: &Store,
    maybe_bucket_name: Option<&String>,
) -> miette::Result<KVBucket<'a, KeyT>> {
    let bucket_name = maybe_bucket_name
        .cloned()
        .unwrap_or_else(|| DEFAULT_BUCKET_NAME.to_string());

    let bucket: KVBucket<'_, KeyT> = store
        .bucket(Some(&bucket_name))
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::CreateBucketFromStore {
            bucket_name: bucket_name.clone(),
        })?;

    DEBUG_KEYPAD_STORAGE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📦 Load or create bucket from store",
            bucket_name = %bucket_name
        );
    });

    Ok(bucket)
}

/// # Errors
///
/// Returns an error if the key/value pair cannot be saved to the bucket.
#[tracing::instrument(skip(bucket))]
pub fn insert_into_bucket<KeyT: Debug + Display + for<'k> kv::Key<'k>>(
    bucket: &KVBucket<'_, KeyT>,
    key: KeyT,
    value: &str,
) -> miette::Result<()> {
    bucket
        .set(&key, &Raw::from(value.as_bytes()))
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::SaveKeyValuePairToBucket)?;

    DEBUG_KEYPAD_STORAGE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🔽 Save key / value pair to bucket",
            key = %key,
            value = %value
        );
    });

    Ok(())
}

/// # Errors
///
/// Returns an error if:
/// - The bucket can't be read
/// - The stored bytes are not UTF-8
#[tracing::instrument(skip(bucket))]
pub fn get_from_bucket<KeyT: Debug + Display + for<'k> kv::Key<'k>>(
    bucket: &KVBucket<'_, KeyT>,
    key: KeyT,
) -> miette::Result<Option<String>> {
    let maybe_raw: Option<Raw> = bucket
        .get(&key)
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::LoadKeyValuePairFromBucket)?;

    let it = match maybe_raw {
        Some(raw) => Some(
            String::from_utf8(raw.to_vec())
                .into_diagnostic()
                .wrap_err(KvErrorCouldNot::DecodeValueAsUtf8 {
                    key: key.to_string(),
                })?,
        ),
        None => None,
    };

    DEBUG_KEYPAD_STORAGE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🔼 Load key / value pair from bucket",
            key = %key,
            value = ?it
        );
    });

    Ok(it)
}

/// # Errors
///
/// Returns an error if the removal fails, or the removed bytes are not UTF-8.
#[tracing::instrument(skip(bucket))]
pub fn remove_from_bucket<KeyT: Debug + Display + for<'k> kv::Key<'k>>(
    bucket: &KVBucket<'_, KeyT>,
    key: KeyT,
) -> miette::Result<Option<String>> {
    let maybe_raw: Option<Raw> = bucket
        .remove(&key)
        .into_diagnostic()
        .wrap_err(KvErrorCouldNot::RemoveKeyValuePairFromBucket)?;

    let it = match maybe_raw {
        Some(raw) => Some(
            String::from_utf8(raw.to_vec())
                .into_diagnostic()
                .wrap_err(KvErrorCouldNot::DecodeValueAsUtf8 {
                    key: key.to_string(),
                })?,
        ),
        None => None,
    };

    DEBUG_KEYPAD_STORAGE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "❌ Delete key / value pair from bucket",
            key = %key,
            value = ?it
        );
    });

    Ok(it)
}

pub mod kv_error {
    #[derive(thiserror::Error, Debug, miette::Diagnostic)]
    pub enum KvErrorCouldNot {
        #[error("📑 Could not create db folder: '{db_folder_path}' on disk")]
        CreateDbFolder { db_folder_path: String },

        #[error("📦 Could not create bucket from store: '{bucket_name}'")]
        CreateBucketFromStore { bucket_name: String },

        #[error("🔽 Could not save key/value pair to bucket")]
        SaveKeyValuePairToBucket,

        #[error("🔼 Could not load key/value pair from bucket")]
        LoadKeyValuePairFromBucket,

        #[error("❌ Could not remove key/value pair from bucket")]
        RemoveKeyValuePairFromBucket,

        #[error("🔤 Could not decode value for key '{key}' as UTF-8")]
        DecodeValueAsUtf8 { key: String },
    }
}
use kv_error::KvErrorCouldNot;

#[cfg(test)]
mod kv_tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::try_create_temp_dir;

    fn perform_db_operations() -> miette::Result<()> {
        let bucket_name = "bucket".to_string();

        // Setup temp dir (this will be dropped when `dir` is out of scope).
        let root_temp_dir = try_create_temp_dir()?;
        let path_buf = root_temp_dir.join("db_folder");

        let path_str = path_buf.as_path().to_string_lossy().to_string();
        let store = load_or_create_store(&path_str)?;
        assert!(path_buf.is_dir());

        let bucket: KVBucket<'_, String> =
            load_or_create_bucket_from_store(&store, Some(&bucket_name))?;

        assert_eq!(get_from_bucket(&bucket, "keyboardPosition".to_string())?, None);

        insert_into_bucket(
            &bucket,
            "keyboardPosition".to_string(),
            r#"{"bottom":"14px","left":"14px"}"#,
        )?;
        assert_eq!(
            get_from_bucket(&bucket, "keyboardPosition".to_string())?,
            Some(r#"{"bottom":"14px","left":"14px"}"#.to_string())
        );

        // Last write wins.
        insert_into_bucket(
            &bucket,
            "keyboardPosition".to_string(),
            r#"{"bottom":"20px","left":"30px"}"#,
        )?;
        assert_eq!(
            get_from_bucket(&bucket, "keyboardPosition".to_string())?,
            Some(r#"{"bottom":"20px","left":"30px"}"#.to_string())
        );

        assert_eq!(
            remove_from_bucket(&bucket, "keyboardPosition".to_string())?,
            Some(r#"{"bottom":"20px","left":"30px"}"#.to_string())
        );
        assert_eq!(get_from_bucket(&bucket, "keyboardPosition".to_string())?, None);
        assert_eq!(remove_from_bucket(&bucket, "keyboardPosition".to_string())?, None);

        Ok(())
    }

    fn perform_db_operations_error_conditions() -> miette::Result<()> {
        let bucket_name = "bucket".to_string();

        let root_temp_dir = try_create_temp_dir()?;
        let path_buf = root_temp_dir.join("db_folder");

        let path_str = path_buf.as_path().to_string_lossy().to_string();
        let store = load_or_create_store(&path_str)?;
        let bucket: KVBucket<'_, String> =
            load_or_create_bucket_from_store(&store, Some(&bucket_name))?;

        insert_into_bucket(&bucket, "foo".to_string(), "bar")?;

        // Access a bucket that no longer exists.
        store.drop_bucket(bucket_name).into_diagnostic()?;

        let result = insert_into_bucket(&bucket, "foo".to_string(), "bar");
        match result {
            Err(e) => {
                assert_eq!(e.to_string(), "🔽 Could not save key/value pair to bucket");
            }
            _ => panic!("Expected an error, but got None"),
        }

        let result = get_from_bucket(&bucket, "foo".to_string());
        match result {
            Err(e) => {
                assert_eq!(
                    e.to_string(),
                    "🔼 Could not load key/value pair from bucket"
                );
            }
            _ => panic!("Expected an error, but got None"),
        }

        Ok(())
    }

    fn perform_non_utf8_value() -> miette::Result<()> {
        let root_temp_dir = try_create_temp_dir()?;
        let path_str = root_temp_dir
            .join("db_folder")
            .as_path()
            .to_string_lossy()
            .to_string();
        let store = load_or_create_store(&path_str)?;
        let bucket: KVBucket<'_, String> = load_or_create_bucket_from_store(&store, None)?;

        bucket
            .set(&"bad".to_string(), &Raw::from(&[0xff_u8, 0xfe][..]))
            .into_diagnostic()?;

        match get_from_bucket(&bucket, "bad".to_string()) {
            Err(e) => {
                assert_eq!(e.to_string(), "🔤 Could not decode value for key 'bad' as UTF-8");
            }
            _ => panic!("Expected an error, but got None"),
        }

        Ok(())
    }

    /// Run this test in serial, not parallel.
    #[serial]
    #[test]
    fn test_kv_operations() {
        let result = perform_db_operations();
        assert!(result.is_ok(), "{result:?}");
    }

    /// Run this test in serial, not parallel.
    #[serial]
    #[test]
    fn test_kv_errors() {
        let result = perform_db_operations_error_conditions();
        assert!(result.is_ok(), "{result:?}");
    }

    /// Run this test in serial, not parallel.
    #[serial]
    #[test]
    fn test_kv_non_utf8_value() {
        let result = perform_non_utf8_value();
        assert!(result.is_ok(), "{result:?}");
    }
}
