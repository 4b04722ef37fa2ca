// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::SelectionRange;

/// Payload of [`EditableField::on_change`]. It has the `{target: {value}}` shape that
/// form code expects from a change event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub target: ChangeTarget,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeTarget {
    pub value: String,
}

impl ChangeEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            target: ChangeTarget {
                value: value.into(),
            },
        }
    }
}

/// The text field the keypad is bound to. Implemented by the host, which owns the real
/// widget.
pub trait EditableField {
    /// Live caret or selection, as character offsets into the rendered text.
    fn selection_range(&self) -> SelectionRange;

    /// Tells the owner of the field that its value changed.
    fn on_change(&mut self, event: &ChangeEvent);

    /// Shows `value` in the field. Replacing the text may move the caret.
    fn render_value(&mut self, value: &str);

    fn set_selection_range(&mut self, start: usize, end: usize);

    fn focus(&mut self);
}
