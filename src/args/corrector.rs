//! Slot corrector — recovers from languages and words typed in the wrong place.
//!
//! Only a single misplaced token is guaranteed to be repaired. With several,
//! the outcome is deterministic but not meaningful; words never end up in a
//! language slot because only language-shaped tokens are pulled back.

use crate::args::mode::TranslationMode;
use crate::args::slots::Slots;
use crate::args::token::Token;

/// Heuristic language-code check: one to three lowercase latin letters.
pub fn is_likely_language_code(token: &str) -> bool {
    !token.is_empty() && token.chars().count() <= 3 && token.chars().all(|c| c.is_ascii_lowercase())
}

/// What the corrector moved out of the language slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Correction {
    pub moved_from_from: bool,
    pub moved_from_to: bool,
}

impl Correction {
    pub fn is_noop(&self) -> bool {
        !self.moved_from_from && !self.moved_from_to
    }

    /// A word sat among the targets, so the language read as the source was
    /// the target.
    pub fn source_was_target(&self) -> bool {
        self.moved_from_to
    }

    /// In single mode the real source was typed before the word.
    pub fn source_typed_first(&self, mode: TranslationMode) -> bool {
        self.moved_from_to && mode == TranslationMode::Single
    }

    /// The source slot was vacated and the layout has the source in front of
    /// the words.
    pub fn should_reclaim_source(&self, mode: TranslationMode) -> bool {
        self.moved_from_from && mode != TranslationMode::MultiWord
    }
}

/// Move word-shaped tokens out of the language slots and rebalance.
pub fn correct(slots: &mut Slots, mode: TranslationMode) -> Correction {
    let mut correction = Correction::default();

    if let Some(from) = slots.from_lang.take() {
        if is_likely_language_code(from.as_str()) {
            slots.from_lang = Some(from);
        } else {
            slots.insert_word(from);
            correction.moved_from_from = true;
        }
    }

    let (langs, words): (Vec<Token>, Vec<Token>) = std::mem::take(&mut slots.to_langs)
        .into_iter()
        .partition(|token| is_likely_language_code(token.as_str()));
    slots.to_langs = langs;
    correction.moved_from_to = !words.is_empty();
    for word in words {
        slots.insert_word(word);
    }

    if correction.source_was_target() {
        let mut candidates: Vec<Token> = slots.from_lang.take().into_iter().collect();
        if correction.source_typed_first(mode) {
            candidates.extend(take_leading_language(slots));
        }
        let mut candidates = candidates.into_iter();
        slots.to_langs.extend(candidates.next());
        slots.from_lang = candidates.next();
    }

    if correction.should_reclaim_source(mode) && slots.from_lang.is_none() {
        slots.from_lang = take_leading_language(slots);
    }

    if !correction.is_noop() {
        tracing::debug!(
            moved_from_from = correction.moved_from_from,
            moved_from_to = correction.moved_from_to,
            "corrected misplaced arguments"
        );
    }

    correction
}

fn take_leading_language(slots: &mut Slots) -> Option<Token> {
    match slots.words.first() {
        Some(first) if is_likely_language_code(first.as_str()) => Some(slots.words.remove(0)),
        _ => None,
    }
}
