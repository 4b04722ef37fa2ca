// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod temp_dir;

// Re-export.
pub use temp_dir::*;
