// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod disabled_key_set;
pub mod key_grid;
pub mod keypad_key;

// Re-export.
pub use disabled_key_set::*;
pub use key_grid::*;
pub use keypad_key::*;
