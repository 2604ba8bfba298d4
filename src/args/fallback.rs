//! Config fallback — fill empty language slots from the saved languages.

use crate::args::mode::TranslationMode;
use crate::args::slots::Slots;
use crate::args::token::Token;
use crate::config::Configuration;

/// What the fallback filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fallback {
    pub from_filled: bool,
    pub to_filled: usize,
}

/// How many target languages the fallback may supply for `mode`.
///
/// Single-target modes take one; the others take up to the configured limit,
/// where a limit of 0 means every saved language.
pub fn target_capacity(mode: TranslationMode, config: &impl Configuration) -> usize {
    if mode.has_single_target() {
        return 1;
    }
    match config.language_limit() {
        0 => usize::MAX,
        limit => limit,
    }
}

/// Fill `from_lang` then `to_langs` if empty. Filled slots never overlap.
pub fn fill(slots: &mut Slots, mode: TranslationMode, config: &impl Configuration) -> Fallback {
    let mut fallback = Fallback::default();
    let saved = config.saved_languages();

    if slots.from_lang.is_none() {
        slots.from_lang = saved
            .iter()
            .find(|lang| !slots.to_langs.iter().any(|to| to.as_str() == lang.as_str()))
            .map(|lang| Token::saved(lang.as_str()));
        fallback.from_filled = slots.from_lang.is_some();
    }

    if slots.to_langs.is_empty() {
        let from = slots.from_lang.as_ref().map(Token::as_str);
        let targets: Vec<Token> = saved
            .iter()
            .filter(|lang| Some(lang.as_str()) != from)
            .take(target_capacity(mode, config))
            .map(|lang| Token::saved(lang.as_str()))
            .collect();
        fallback.to_filled = targets.len();
        slots.to_langs = targets;
    }

    if fallback.from_filled || fallback.to_filled > 0 {
        tracing::debug!(
            from_filled = fallback.from_filled,
            to_filled = fallback.to_filled,
            "filled languages from saved list"
        );
    }

    fallback
}
