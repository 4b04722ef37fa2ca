// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{ops::Deref, path::Path};

use miette::IntoDiagnostic;
use rand::Rng;

/// Temporary folder that is deleted when dropped.
#[derive(Debug)]
pub struct TempDir {
    pub inner: std::path::PathBuf,
}

/// Create a temporary directory with a random name under the OS temp folder.
///
/// # Errors
///
/// Returns an error if the folder can't be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let suffix: u64 = rand::rng().random();
    let new_temp_dir = std::env::temp_dir().join(format!("soft_keypad_{suffix:016x}"));
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

impl Drop for TempDir {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

impl Deref for TempDir {
    type Target = std::path::PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl AsRef<Path> for TempDir {
    fn as_ref(&self) -> &Path { &self.inner }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_is_removed_on_drop() {
        let temp_dir = try_create_temp_dir().unwrap();
        let copy_of_path = temp_dir.inner.clone();
        assert!(copy_of_path.exists());

        drop(temp_dir);
        assert!(!copy_of_path.exists());
    }
}
