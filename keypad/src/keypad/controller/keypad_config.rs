// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{DisabledKeySet, OverlayBounds, OverlayPosition, PixelSize, Viewport};

/// Storage key of the persisted overlay anchor.
pub const DEFAULT_STORAGE_KEY: &str = "keyboardPosition";

/// Settings for one [`crate::KeypadController`]. Every field has a default, so a host can
/// pass `{}` or just `{"disableKeyBoardValue": ["-"]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypadConfig {
    /// Labels of the keys to render inert, eg: `["-", "."]`.
    #[serde(rename = "disableKeyBoardValue")]
    pub disable_key_board_value: Vec<String>,
    pub storage_key: String,
    /// Used when nothing usable is stored.
    pub default_position: OverlayPosition,
    pub bounds: OverlayBounds,
    /// Rendered size of the overlay card. Drags center it on the finger, and hit tests
    /// use it.
    pub overlay_size: PixelSize,
    /// Used until the host reports the real viewport.
    pub viewport: Viewport,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            disable_key_board_value: vec![],
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_position: OverlayPosition::default(),
            bounds: OverlayBounds::default(),
            overlay_size: PixelSize::new(360.0, 280.0),
            viewport: Viewport::default(),
        }
    }
}

impl KeypadConfig {
    #[must_use]
    pub fn disabled_keys(&self) -> DisabledKeySet {
        DisabledKeySet::from_labels(self.disable_key_board_value.iter().map(String::as_str))
    }
}
