// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod config_folder;
pub mod kv_store;
pub mod position_storage;

// Re-export.
pub use kv_store::*;
pub use position_storage::*;
