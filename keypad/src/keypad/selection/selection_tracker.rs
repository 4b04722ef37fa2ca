// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{KeyKind, KeypadKey, SelectionRange, byte_offset_of_char};

/// Candidate result of a key press. It is only a proposal: the controller commits it
/// only if the grammar accepts `new_value`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEdit {
    pub new_value: String,
    pub new_caret: usize,
}

/// Computes what a key press does to the value around the caret.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionTracker;

impl SelectionTracker {
    /// The value is split at the caret into "before" and "after". A selected range is
    /// removed first, and its start becomes the caret. Then:
    /// - `backSpace` drops the last character of "before".
    /// - `C` empties both halves.
    /// - A literal key inserts its label between the halves, and the caret moves forward
    ///   by exactly one. This is one step per key press, not per inserted character. All
    ///   labels are single characters today, so the two agree.
    #[must_use]
    pub fn apply_key(value: &str, selection: SelectionRange, key: KeypadKey) -> KeyEdit {
        let selection = selection.clamp_to(value.chars().count());
        let caret = selection.start;

        let mut before = value[..byte_offset_of_char(value, selection.start)].to_string();
        let mut after = &value[byte_offset_of_char(value, selection.end)..];
        let mut middle = "";

        let new_caret = match (key, key.kind()) {
            (KeypadKey::BackSpace, _) => {
                before.pop();
                before.chars().count()
            }
            (KeypadKey::Clear, _) => {
                before.clear();
                after = "";
                0
            }
            (_, KeyKind::Literal) => {
                middle = key.label();
                caret + 1
            }
            (_, KeyKind::Control) => caret,
        };

        KeyEdit {
            new_value: format!("{before}{middle}{after}"),
            new_caret,
        }
    }
}
