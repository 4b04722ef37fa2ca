// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # soft_keypad
//!
//! Headless controller for a numeric on-screen keypad overlay that is bound to a single
//! text field. It is meant for touch devices where a physical keyboard is not available.
//! The host owns the widgets and the event loop; this crate owns the state:
//!
//! - What text is allowed to reach the field ([`ValidationGrammar`]).
//! - How a key press edits the value around the caret or a selection
//!   ([`SelectionTracker`]).
//! - Where the overlay sits, how dragging moves it, and how that anchor is persisted and
//!   re-validated ([`DragPositioner`], [`OverlayPositionStore`]).
//! - When the overlay is shown or hidden ([`OverlayVisibility`],
//!   [`OutsideInteractionWatcher`]).
//!
//! [`KeypadController`] ties all of these together.
//!
//! # Driving the controller
//!
//! ```no_run
//! use soft_keypad::{EventPropagation, InMemoryPositionStorage, KeypadConfig,
//!                   KeypadController, KeypadInputEvent, KeypadKey, RecordingField};
//!
//! let mut controller = KeypadController::new(
//!     RecordingField::default(),
//!     InMemoryPositionStorage::default(),
//!     KeypadConfig::default(),
//!     "12",
//! );
//! controller.mount();
//!
//! controller.handle_event(KeypadInputEvent::FieldFocus);
//! let propagation = controller.handle_event(KeypadInputEvent::KeyPress {
//!     key: KeypadKey::Digit3,
//! });
//! if propagation == EventPropagation::ConsumedRender {
//!     // Reflect the value in the field, then let the deferred caret restore run.
//!     controller.commit_render();
//! }
//! ```
//!
//! # Two phase edits
//!
//! Replacing a field's whole value moves its caret to the end of the text. So every
//! accepted keypad edit is applied in two phases:
//! 1. The value and caret are committed to the controller, and the field's change
//!    notification fires.
//! 2. [`KeypadController::commit_render`] pushes the value into the field and only then
//!    drains the queued caret restore.
//!
//! # Persistence
//!
//! The overlay anchor is stored as JSON under the `"keyboardPosition"` key of a
//! [`PositionStorage`]. [`KvPositionStorage`] keeps it in an embedded [kv] store on disk,
//! and [`InMemoryPositionStorage`] keeps it in memory.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod core;
pub mod keypad;

// Re-export.
pub use crate::core::*;
pub use crate::keypad::*;
