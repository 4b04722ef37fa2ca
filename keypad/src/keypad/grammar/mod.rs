// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod validation_grammar;

// Re-export.
pub use validation_grammar::*;
