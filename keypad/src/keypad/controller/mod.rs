// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod deferred_tasks;
pub mod edit_origin;
pub mod editable_field;
pub mod keypad_config;
pub mod keypad_controller;
pub mod keypad_event;
pub mod recording_field;

// Re-export.
pub use deferred_tasks::*;
pub use edit_origin::*;
pub use editable_field::*;
pub use keypad_config::*;
pub use keypad_controller::*;
pub use keypad_event::*;
pub use recording_field::*;
