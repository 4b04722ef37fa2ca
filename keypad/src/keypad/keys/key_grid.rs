// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Renderer facing description of the overlay. The host draws whatever it likes from
//! this; only the order, glyphs, relative glyph size, and disabled flags are fixed.

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::{DisabledKeySet, KeypadKey};

/// Number of key columns in the grid.
pub const KEY_GRID_COLUMNS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GlyphSize {
    /// 18px.
    Regular,
    /// 32px. Only used by `-`, which is hard to see at the regular size.
    Large,
}

impl GlyphSize {
    #[must_use]
    pub fn for_key(key: KeypadKey) -> Self {
        match key {
            KeypadKey::Minus => GlyphSize::Large,
            _ => GlyphSize::Regular,
        }
    }

    #[must_use]
    pub fn as_px(self) -> u16 {
        match self {
            GlyphSize::Regular => 18,
            GlyphSize::Large => 32,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct KeyCell {
    pub key: KeypadKey,
    pub glyph: &'static str,
    pub glyph_size: GlyphSize,
    pub is_disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KeyGrid {
    pub cells: Vec<KeyCell>,
}

impl KeyGrid {
    #[must_use]
    pub fn new(disabled_keys: &DisabledKeySet) -> Self {
        let cells = KeypadKey::iter()
            .map(|key| KeyCell {
                key,
                glyph: key.glyph(),
                glyph_size: GlyphSize::for_key(key),
                is_disabled: disabled_keys.contains(key),
            })
            .collect();
        Self { cells }
    }

    /// Cells grouped into rows of [`KEY_GRID_COLUMNS`].
    pub fn rows(&self) -> impl Iterator<Item = &[KeyCell]> {
        self.cells.chunks(KEY_GRID_COLUMNS)
    }
}
