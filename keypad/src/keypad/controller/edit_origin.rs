// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Where an edit came from. The origin picks which rule applies to it, see
/// [`EditOrigin::gate`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Default,
    AsRefStr,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum EditOrigin {
    /// A press on one of the overlay's keys.
    #[strum(serialize = "keypad")]
    #[serde(rename = "keypad")]
    Keypad,
    /// Typing or deleting inside the field itself.
    #[default]
    #[strum(serialize = "native")]
    #[serde(rename = "native")]
    Native,
    /// The user cut (part of) the field's text.
    #[strum(serialize = "deleteByCut")]
    #[serde(rename = "deleteByCut")]
    DeleteByCut,
    /// The user pasted into the field.
    #[strum(serialize = "insertFromPaste")]
    #[serde(rename = "insertFromPaste")]
    InsertFromPaste,
}

/// What happens to an edit before it can be committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditGate {
    /// Committed only if the grammar accepts the candidate.
    Validate,
    /// The value becomes empty, whatever the candidate was. Not validated.
    ForceEmpty,
    /// Dropped without touching state or notifying the field.
    Ignore,
}

impl EditOrigin {
    #[must_use]
    pub fn gate(self) -> EditGate {
        match self {
            EditOrigin::Keypad | EditOrigin::Native => EditGate::Validate,
            EditOrigin::DeleteByCut => EditGate::ForceEmpty,
            EditOrigin::InsertFromPaste => EditGate::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(EditOrigin::Keypad, EditGate::Validate)]
    #[test_case(EditOrigin::Native, EditGate::Validate)]
    #[test_case(EditOrigin::DeleteByCut, EditGate::ForceEmpty)]
    #[test_case(EditOrigin::InsertFromPaste, EditGate::Ignore)]
    fn test_gate(origin: EditOrigin, expected: EditGate) {
        assert_eq!(origin.gate(), expected);
    }

    #[test]
    fn test_string_form() {
        assert_eq!("insertFromPaste".parse::<EditOrigin>(), Ok(EditOrigin::InsertFromPaste));
        assert_eq!(EditOrigin::DeleteByCut.to_string(), "deleteByCut");
    }
}
