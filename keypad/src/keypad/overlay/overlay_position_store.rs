// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_KEYPAD_MOD, OverlayBounds, OverlayPosition, PositionStorage, Viewport};

/// Reads and writes the overlay anchor as one JSON record under `storage_key`.
///
/// Loading never fails. A record that is missing, unreadable, malformed, or outside
/// [`OverlayBounds`] resolves to `default_position`. Saving is not bounds checked, so a
/// drag can store an anchor that the next load will reject.
#[derive(Debug)]
pub struct OverlayPositionStore<S: PositionStorage> {
    storage: S,
    storage_key: String,
    default_position: OverlayPosition,
    bounds: OverlayBounds,
}

impl<S: PositionStorage> OverlayPositionStore<S> {
    pub fn new(
        storage: S,
        storage_key: impl Into<String>,
        default_position: OverlayPosition,
        bounds: OverlayBounds,
    ) -> Self {
        Self {
            storage,
            storage_key: storage_key.into(),
            default_position,
            bounds,
        }
    }

    pub fn load(&mut self, viewport: Viewport) -> OverlayPosition {
        let json = match self.storage.try_get_item(&self.storage_key) {
            Ok(Some(json)) => json,
            Ok(None) => {
                DEBUG_KEYPAD_MOD.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "📌 No stored overlay position, using default",
                        storage_key = %self.storage_key
                    );
                });
                return self.default_position;
            }
            Err(report) => {
                // % is Display, ? is Debug.
                tracing::error!(
                    message = "📌 Could not read stored overlay position, using default",
                    error = ?report
                );
                return self.default_position;
            }
        };

        let position = match OverlayPosition::try_from_json(&json) {
            Ok(it) => it,
            Err(report) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "📌 Malformed stored overlay position, using default",
                    json = %json,
                    error = ?report
                );
                return self.default_position;
            }
        };

        if let Err(error) = self.bounds.check(&position, viewport) {
            DEBUG_KEYPAD_MOD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "📌 Stored overlay position out of bounds, using default",
                    error = %error
                );
            });
            return self.default_position;
        }

        position
    }

    /// Writes `position` as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the record can't be serialized or written.
    pub fn save(&mut self, position: &OverlayPosition) -> miette::Result<()> {
        let json = position.try_to_json()?;
        self.storage.try_set_item(&self.storage_key, &json)
    }

    /// Removes the stored record, so the next load returns the default anchor, which is
    /// also returned here.
    ///
    /// # Errors
    ///
    /// Returns an error if the record can't be removed.
    pub fn reset(&mut self) -> miette::Result<OverlayPosition> {
        self.storage.try_remove_item(&self.storage_key)?;
        DEBUG_KEYPAD_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📌 Stored overlay position removed",
                storage_key = %self.storage_key
            );
        });
        Ok(self.default_position)
    }

    #[must_use]
    pub fn storage(&self) -> &S { &self.storage }
}
