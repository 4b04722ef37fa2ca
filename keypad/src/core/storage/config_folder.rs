// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          fs::{self},
          path::PathBuf};

use dirs::config_dir;

use crate::DEBUG_KEYPAD_STORAGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPaths {
    TopLevelFolderName,
    PositionStoreFolderName,
}

impl Display for ConfigPaths {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let path = match self {
            ConfigPaths::TopLevelFolderName => "soft-keypad",
            ConfigPaths::PositionStoreFolderName => "position_store",
        };
        write!(f, "{path}")
    }
}

/// This is where the on disk position store lives, eg:
/// `~/.config/soft-keypad/position_store` on Linux.
#[must_use]
pub fn try_get_store_folder_path() -> Option<PathBuf> {
    let home_config_folder_path = config_dir()?;
    Some(
        home_config_folder_path
            .join(ConfigPaths::TopLevelFolderName.to_string())
            .join(ConfigPaths::PositionStoreFolderName.to_string()),
    )
}

/// Creates the store folder (and its parents) if needed, and returns its path.
///
/// # Errors
///
/// Returns an error if the OS config folder can't be determined, or the folder can't be
/// created.
pub fn try_create() -> miette::Result<PathBuf> {
    let Some(store_folder_path) = try_get_store_folder_path() else {
        // % is Display, ? is Debug.
        tracing::error!(message = "Could not access config folder.", error = "None");
        return Err(ConfigFolderErrorCouldNot::AccessConfigFolder.into());
    };

    match fs::create_dir_all(&store_folder_path) {
        Ok(()) => {
            DEBUG_KEYPAD_STORAGE.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "Successfully created config folder.",
                    config_folder = ?store_folder_path
                );
            });
            Ok(store_folder_path)
        }
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not create config folder.",
                error = ?error
            );
            Err(ConfigFolderErrorCouldNot::CreateConfigFolder {
                path: store_folder_path.display().to_string(),
            }
            .into())
        }
    }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum ConfigFolderErrorCouldNot {
    #[error("📂 Could not access the OS config folder")]
    AccessConfigFolder,

    #[error("📂 Could not create config folder: '{path}'")]
    CreateConfigFolder { path: String },
}
