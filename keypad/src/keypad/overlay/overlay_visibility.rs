// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

/// Whether the overlay is on screen. There's no terminal state: the machine runs for as
/// long as the controller is mounted.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Default, Display, AsRefStr, Serialize, Deserialize,
)]
pub enum OverlayVisibility {
    #[default]
    Hidden,
    Visible,
}

/// The only inputs that move [`OverlayVisibility`]. Key presses and drags are not here
/// because they never change it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityEvent {
    FieldFocus,
    OutsideInteraction,
}

impl OverlayVisibility {
    #[must_use]
    pub fn next(self, event: VisibilityEvent) -> Self {
        match event {
            VisibilityEvent::FieldFocus => OverlayVisibility::Visible,
            VisibilityEvent::OutsideInteraction => OverlayVisibility::Hidden,
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool { self == OverlayVisibility::Visible }
}
