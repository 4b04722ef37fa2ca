// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod replay_script;

// Re-export.
pub use replay_script::*;
