// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// The 14 keys of the keypad. Declaration order is display order (left to right, top to
/// bottom, 3 columns), and [`KeypadKey::iter`] yields them in that order.
///
/// The string form of each key is its label, which is also what callers use to name keys
/// in `disableKeyBoardValue`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum KeypadKey {
    #[strum(serialize = "C")]
    #[serde(rename = "C")]
    Clear,
    #[strum(serialize = "backSpace")]
    #[serde(rename = "backSpace")]
    BackSpace,
    #[strum(serialize = "7")]
    #[serde(rename = "7")]
    Digit7,
    #[strum(serialize = "8")]
    #[serde(rename = "8")]
    Digit8,
    #[strum(serialize = "9")]
    #[serde(rename = "9")]
    Digit9,
    #[strum(serialize = "4")]
    #[serde(rename = "4")]
    Digit4,
    #[strum(serialize = "5")]
    #[serde(rename = "5")]
    Digit5,
    #[strum(serialize = "6")]
    #[serde(rename = "6")]
    Digit6,
    #[strum(serialize = "1")]
    #[serde(rename = "1")]
    Digit1,
    #[strum(serialize = "2")]
    #[serde(rename = "2")]
    Digit2,
    #[strum(serialize = "3")]
    #[serde(rename = "3")]
    Digit3,
    #[strum(serialize = "-")]
    #[serde(rename = "-")]
    Minus,
    #[strum(serialize = "0")]
    #[serde(rename = "0")]
    Digit0,
    #[strum(serialize = ".")]
    #[serde(rename = ".")]
    Dot,
}

/// Control keys edit the value without inserting their label. Literal keys insert their
/// label at the caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Control,
    Literal,
}

/// Glyph shown for [`KeypadKey::BackSpace`].
pub const BACKSPACE_GLYPH: &str = "--";

impl KeypadKey {
    #[must_use]
    pub fn kind(self) -> KeyKind {
        match self {
            KeypadKey::Clear | KeypadKey::BackSpace => KeyKind::Control,
            _ => KeyKind::Literal,
        }
    }

    #[must_use]
    pub fn is_literal(self) -> bool { self.kind() == KeyKind::Literal }

    /// The key's label. For literal keys this is the exact text that gets inserted.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            KeypadKey::Clear => "C",
            KeypadKey::BackSpace => "backSpace",
            KeypadKey::Digit7 => "7",
            KeypadKey::Digit8 => "8",
            KeypadKey::Digit9 => "9",
            KeypadKey::Digit4 => "4",
            KeypadKey::Digit5 => "5",
            KeypadKey::Digit6 => "6",
            KeypadKey::Digit1 => "1",
            KeypadKey::Digit2 => "2",
            KeypadKey::Digit3 => "3",
            KeypadKey::Minus => "-",
            KeypadKey::Digit0 => "0",
            KeypadKey::Dot => ".",
        }
    }

    /// What the key cap shows. Only [`KeypadKey::BackSpace`] differs from its label.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            KeypadKey::BackSpace => BACKSPACE_GLYPH,
            it => it.label(),
        }
    }

    /// Labels of all literal keys, in display order.
    pub fn literal_labels() -> impl Iterator<Item = &'static str> {
        KeypadKey::iter()
            .filter(|it| it.is_literal())
            .map(KeypadKey::label)
    }
}
