// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{EditOrigin, KeypadKey, PixelPoint};

/// Everything the host forwards to [`crate::KeypadController::handle_event`]. Positions
/// are in viewport coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum KeypadInputEvent {
    /// The field gained focus.
    FieldFocus,
    /// The field's own input, eg: typing, a cut, or a paste. `value` is the text the field
    /// would hold if the edit went through.
    FieldInput {
        #[serde(default)]
        origin: EditOrigin,
        value: String,
    },
    /// A press on one of the overlay's keys.
    KeyPress { key: KeypadKey },
    /// One drag sample. Only the first contact is used.
    TouchMove { contacts: Vec<PixelPoint> },
    /// A pointer-down or click anywhere on the page.
    PointerDown { target: PixelPoint },
}

/// Tells the host what became of an event. If it was consumed, does the field or the
/// overlay need a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventPropagation {
    /// Handled and state changed. Render, then call
    /// [`crate::KeypadController::commit_render`].
    ConsumedRender,
    /// Handled with no visible change.
    Consumed,
    /// Not for the keypad. The host should handle it as usual.
    Propagate,
}
