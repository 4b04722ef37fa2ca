// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Result of a hit test against a region. Used instead of a bare `bool` so call sites
/// read as what they check.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Default)]
pub enum ContainsResult {
    #[default]
    DoesNotContain,
    DoesContain,
}

impl From<bool> for ContainsResult {
    fn from(it: bool) -> Self {
        if it {
            ContainsResult::DoesContain
        } else {
            ContainsResult::DoesNotContain
        }
    }
}
