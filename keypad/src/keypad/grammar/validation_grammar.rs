// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decides which strings the field is allowed to hold.
//!
//! A string is accepted when it can be split into a sequence of zero or more literal key
//! labels, eg: `"-12.5"` is `"-" "1" "2" "." "5"`. Labels are matched as whole tokens
//! rather than as a set of characters, so a label that is longer than one character
//! would only be accepted as a unit.
//!
//! The check is a tokenizer over the known label set, not a pattern assembled from
//! labels at runtime. Labels are never interpreted, so no label can change the meaning
//! of the check.

use smallvec::SmallVec;

use crate::KeypadKey;

/// Tokens produced by [`ValidationGrammar::tokenize`].
pub type TokenList = SmallVec<[&'static str; 16]>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationGrammar {
    /// Sorted longest first.
    literal_tokens: SmallVec<[&'static str; 12]>,
}

impl Default for ValidationGrammar {
    /// The grammar of the 14 key keypad: the labels of all its literal keys.
    fn default() -> Self { Self::new(KeypadKey::literal_labels()) }
}

impl ValidationGrammar {
    /// Builds a grammar from the given tokens. Empty tokens are dropped, since they
    /// would match anywhere without consuming input.
    pub fn new(tokens: impl IntoIterator<Item = &'static str>) -> Self {
        let mut literal_tokens: SmallVec<[&'static str; 12]> = SmallVec::new();
        for token in tokens {
            if !token.is_empty() && !literal_tokens.contains(&token) {
                literal_tokens.push(token);
            }
        }
        literal_tokens.sort_by_key(|token| std::cmp::Reverse(token.len()));
        Self { literal_tokens }
    }

    #[must_use]
    pub fn tokens(&self) -> &[&'static str] { &self.literal_tokens }

    /// `true` when `candidate` is a concatenation of zero or more tokens.
    #[must_use]
    pub fn accepts(&self, candidate: &str) -> bool { self.tokenize(candidate).is_some() }

    /// Splits `candidate` into tokens. Returns `None` when no split exists.
    ///
    /// Each byte offset records which token reached it first, scanning offsets left to
    /// right. This visits every offset once, so a token set where one token is a prefix
    /// of another never needs backtracking.
    #[must_use]
    pub fn tokenize(&self, candidate: &str) -> Option<TokenList> {
        let len = candidate.len();

        // reached_by[offset] = (offset the token started at, index of the token).
        let mut reached_by: Vec<Option<(usize, usize)>> = vec![None; len + 1];
        let mut is_reachable = vec![false; len + 1];
        is_reachable[0] = true;

        for offset in 0..len {
            if !is_reachable[offset] {
                continue;
            }
            let rest = &candidate.as_bytes()[offset..];
            for (token_index, token) in self.literal_tokens.iter().enumerate() {
                if rest.starts_with(token.as_bytes()) {
                    let next = offset + token.len();
                    if !is_reachable[next] {
                        is_reachable[next] = true;
                        reached_by[next] = Some((offset, token_index));
                    }
                }
            }
        }

        if !is_reachable[len] {
            return None;
        }

        // Walk back from the end to recover the tokens.
        let mut tokens = TokenList::new();
        let mut offset = len;
        while let Some((start, token_index)) = reached_by[offset] {
            tokens.push(self.literal_tokens[token_index]);
            offset = start;
        }
        tokens.reverse();
        Some(tokens)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(""; "empty")]
    #[test_case("0"; "single digit")]
    #[test_case("123"; "digits")]
    #[test_case("-12.5"; "signed decimal")]
    #[test_case("--.."; "repeated symbols")]
    #[test_case("7894561230-."; "every literal")]
    fn test_accepts_literal_concatenations(candidate: &str) {
        assert!(ValidationGrammar::default().accepts(candidate));
    }

    #[test_case("a"; "letter")]
    #[test_case("12a"; "trailing letter")]
    #[test_case(" 1"; "leading space")]
    #[test_case("1,5"; "comma")]
    #[test_case("+1"; "plus sign")]
    #[test_case("C"; "clear label")]
    #[test_case("backSpace"; "backspace label")]
    #[test_case("\u{ff11}"; "fullwidth digit")]
    fn test_rejects_other_characters(candidate: &str) {
        assert!(!ValidationGrammar::default().accepts(candidate));
    }

    #[test]
    fn test_tokenize_single_char_tokens() {
        let tokens = ValidationGrammar::default().tokenize("-1.0").unwrap();
        assert_eq!(tokens.as_slice(), &["-", "1", ".", "0"]);
    }

    #[test]
    fn test_multi_char_tokens_compose_as_units() {
        let grammar = ValidationGrammar::new(["00", "1"]);
        assert!(grammar.accepts("001"));
        assert!(grammar.accepts("100"));
        // A lone "0" is not a token.
        assert!(!grammar.accepts("0"));
        assert!(!grammar.accepts("1000"));
        assert_eq!(grammar.tokenize("1001").unwrap().as_slice(), &["1", "00", "1"]);
    }

    #[test]
    fn test_overlapping_tokens_need_no_backtracking() {
        // "ab" is a dead end, "a" + "bc" is the only split.
        let grammar = ValidationGrammar::new(["a", "ab", "bc"]);
        assert!(grammar.accepts("abc"));
        assert!(!grammar.accepts("abcc"));
        assert_eq!(grammar.tokenize("abc").unwrap().as_slice(), &["a", "bc"]);
    }

    #[test]
    fn test_empty_and_duplicate_tokens_are_dropped() {
        let grammar = ValidationGrammar::new(["", "1", "1"]);
        assert_eq!(grammar.tokens(), &["1"]);
        assert!(!grammar.accepts("2"));
    }

    #[test]
    fn test_default_tokens_are_literal_labels() {
        let grammar = ValidationGrammar::default();
        assert_eq!(grammar.tokens().len(), 12);
        for key in <KeypadKey as strum::IntoEnumIterator>::iter() {
            assert_eq!(grammar.accepts(key.label()), key.is_literal());
        }
    }
}
