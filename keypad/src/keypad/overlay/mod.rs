// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod drag_positioner;
pub mod outside_interaction_watcher;
pub mod overlay_position;
pub mod overlay_position_store;
pub mod overlay_visibility;

// Re-export.
pub use drag_positioner::*;
pub use outside_interaction_watcher::*;
pub use overlay_position::*;
pub use overlay_position_store::*;
pub use overlay_visibility::*;
