// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Enables debug logging of key presses, edits, visibility changes, and listener
/// (de)registration.
pub const DEBUG_KEYPAD_MOD: bool = true;

/// Enables debug logging of every drag sample. Drags produce a lot of samples, so this is
/// off by default.
pub const DEBUG_KEYPAD_DRAG: bool = false;

/// Enables debug logging in the key/value store and config folder code.
pub const DEBUG_KEYPAD_STORAGE: bool = true;

// Attach sources.
pub mod controller;
pub mod grammar;
pub mod keys;
pub mod overlay;
pub mod replay;
pub mod selection;
pub mod subscription;

// Re-export.
pub use controller::*;
pub use grammar::*;
pub use keys::*;
pub use overlay::*;
pub use replay::*;
pub use selection::*;
pub use subscription::*;
