// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

use crate::{DEBUG_KEYPAD_MOD, KeypadKey};

/// Keys that render inert: pressing them does nothing. This has no effect on what the
/// grammar accepts, a disabled `-` can still arrive by other means.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisabledKeySet {
    keys: SmallVec<[KeypadKey; 4]>,
}

impl DisabledKeySet {
    /// Builds the set from key labels, eg: `["-", "."]`. Labels that don't name one of
    /// the 14 keys are skipped.
    pub fn from_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut it = Self::default();
        for label in labels {
            match label.parse::<KeypadKey>() {
                Ok(key) => it.insert(key),
                Err(_) => {
                    DEBUG_KEYPAD_MOD.then(|| {
                        // % is Display, ? is Debug.
                        tracing::debug!(
                            message = "🔒 Ignoring unknown disabled key label",
                            label = %label
                        );
                    });
                }
            }
        }
        it
    }

    pub fn insert(&mut self, key: KeypadKey) {
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
    }

    #[must_use]
    pub fn contains(&self, key: KeypadKey) -> bool { self.keys.contains(&key) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.keys.is_empty() }

    #[must_use]
    pub fn len(&self) -> usize { self.keys.len() }
}

impl FromIterator<KeypadKey> for DisabledKeySet {
    fn from_iter<I: IntoIterator<Item = KeypadKey>>(iter: I) -> Self {
        let mut it = Self::default();
        for key in iter {
            it.insert(key);
        }
        it
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_labels_skips_unknown_and_duplicates() {
        let set = DisabledKeySet::from_labels(["-", ".", "x", "-", "backSpace"]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(KeypadKey::Minus));
        assert!(set.contains(KeypadKey::Dot));
        assert!(set.contains(KeypadKey::BackSpace));
        assert!(!set.contains(KeypadKey::Digit1));
    }

    #[test]
    fn test_default_is_empty() {
        let set = DisabledKeySet::default();
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_iter() {
        let set: DisabledKeySet = [KeypadKey::Clear, KeypadKey::Clear].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
