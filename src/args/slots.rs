//! Slot assigner — positional residue → words / from-language / to-languages.

use serde::Serialize;

use crate::args::extractor::ExtractedFlags;
use crate::args::mode::TranslationMode;
use crate::args::registry::FlagName;
use crate::args::token::{texts, Token};

/// The three semantic destinations of a translation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Slots {
    pub words: Vec<Token>,
    pub from_lang: Option<Token>,
    pub to_langs: Vec<Token>,
}

impl Slots {
    pub fn words(&self) -> Vec<&str> {
        texts(&self.words)
    }

    pub fn from_lang(&self) -> Option<&str> {
        self.from_lang.as_ref().map(Token::as_str)
    }

    pub fn to_langs(&self) -> Vec<&str> {
        texts(&self.to_langs)
    }

    /// Swap source and target. Meant for single-target modes.
    pub fn reverse(&mut self) {
        let from = self.from_lang.take();
        self.from_lang = self.to_langs.pop();
        self.to_langs.extend(from);
    }

    /// Insert into `words` keeping command-line order.
    pub(crate) fn insert_word(&mut self, token: Token) {
        let index = self
            .words
            .iter()
            .position(|word| word.position() > token.position())
            .unwrap_or(self.words.len());
        self.words.insert(index, token);
    }
}

/// Slots plus the tokens the mode's layout had no place for.
#[derive(Debug, Clone, Default)]
pub struct Assignment {
    pub slots: Slots,
    pub unused: Vec<Token>,
}

/// Lay the residue out according to the mode's positional convention.
///
/// | mode       | residue layout                     | flag arguments       |
/// |------------|------------------------------------|----------------------|
/// | single     | word from to                       | none                 |
/// | multi-lang | word from to...                    | to, if none positional |
/// | multi-word | from to word...                    | words, if none positional |
/// | double     | from                               | `-m` → to, `-w` → words |
///
/// Missing positions are left empty for the later stages.
pub fn assign(mode: TranslationMode, residual: &[Token], flags: &ExtractedFlags) -> Assignment {
    let mut residual = residual.iter().cloned();
    let mut assignment = Assignment::default();
    let slots = &mut assignment.slots;

    match mode {
        TranslationMode::Single => {
            slots.words.extend(residual.next());
            slots.from_lang = residual.next();
            slots.to_langs.extend(residual.next());
        }
        TranslationMode::MultiLang => {
            slots.words.extend(residual.next());
            slots.from_lang = residual.next();
            slots.to_langs.extend(residual.by_ref());
            let flagged = flags.arguments(FlagName::MultiLang);
            if slots.to_langs.is_empty() {
                slots.to_langs.extend_from_slice(flagged);
            } else {
                assignment.unused.extend_from_slice(flagged);
            }
        }
        TranslationMode::MultiWord => {
            slots.from_lang = residual.next();
            slots.to_langs.extend(residual.next());
            slots.words.extend(residual.by_ref());
            let flagged = flags.arguments(FlagName::MultiWord);
            if slots.words.is_empty() {
                slots.words.extend_from_slice(flagged);
            } else {
                assignment.unused.extend_from_slice(flagged);
            }
        }
        TranslationMode::Double => {
            slots.from_lang = residual.next();
            slots.to_langs.extend_from_slice(flags.arguments(FlagName::MultiLang));
            slots.words.extend_from_slice(flags.arguments(FlagName::MultiWord));
        }
    }

    assignment.unused.extend(residual);
    assignment.unused.sort_by_key(Token::position);
    assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::extractor::{extract, Extraction};
    use crate::args::registry::FlagTable;

    fn extraction(args: &[&str]) -> Extraction {
        let tokens: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        extract(&tokens, &FlagTable::builtin())
    }

    fn assign_args(mode: TranslationMode, args: &[&str]) -> Assignment {
        let extraction = extraction(args);
        assign(mode, &extraction.residual, &extraction.flags)
    }

    #[test]
    fn reverse_swaps_source_and_target() {
        let mut slots = assign_args(TranslationMode::Single, &["żal", "de", "pl"]).slots;
        slots.reverse();
        assert_eq!(slots.from_lang(), Some("pl"));
        assert_eq!(slots.to_langs(), vec!["de"]);
        assert_eq!(slots.words(), vec!["żal"]);
    }

    #[test]
    fn single_layout_is_word_from_to() {
        let slots = assign_args(TranslationMode::Single, &["suchen", "de", "pl"]).slots;
        assert_eq!(slots.words(), vec!["suchen"]);
        assert_eq!(slots.from_lang(), Some("de"));
        assert_eq!(slots.to_langs(), vec!["pl"]);
    }

    #[test]
    fn single_layout_leaves_missing_positions_empty() {
        let slots = assign_args(TranslationMode::Single, &["suchen"]).slots;
        assert_eq!(slots.words(), vec!["suchen"]);
        assert_eq!(slots.from_lang(), None);
        assert!(slots.to_langs.is_empty());
    }

    #[test]
    fn single_layout_reports_extra_tokens() {
        let assignment = assign_args(TranslationMode::Single, &["suchen", "de", "pl", "fr"]);
        assert_eq!(texts(&assignment.unused), vec!["fr"]);
    }

    #[test]
    fn multi_lang_takes_positional_targets() {
        let slots = assign_args(TranslationMode::MultiLang, &["suchen", "de", "pl", "fr"]).slots;
        assert_eq!(slots.to_langs(), vec!["pl", "fr"]);
    }

    #[test]
    fn multi_lang_falls_back_to_flag_arguments() {
        let slots = assign_args(TranslationMode::MultiLang, &["suchen", "de", "-m", "pl", "fr"]).slots;
        assert_eq!(slots.words(), vec!["suchen"]);
        assert_eq!(slots.from_lang(), Some("de"));
        assert_eq!(slots.to_langs(), vec!["pl", "fr"]);
    }

    #[test]
    fn multi_lang_flag_arguments_unused_when_positional_targets_exist() {
        let assignment = assign_args(TranslationMode::MultiLang, &["suchen", "de", "pl", "-m", "fr"]);
        assert_eq!(assignment.slots.to_langs(), vec!["pl"]);
        assert_eq!(texts(&assignment.unused), vec!["fr"]);
    }

    #[test]
    fn multi_word_layout_is_from_to_words() {
        let slots = assign_args(
            TranslationMode::MultiWord,
            &["de", "pl", "schlafen", "Herr", "nicht"],
        )
        .slots;
        assert_eq!(slots.from_lang(), Some("de"));
        assert_eq!(slots.to_langs(), vec!["pl"]);
        assert_eq!(slots.words(), vec!["schlafen", "Herr", "nicht"]);
    }

    #[test]
    fn multi_word_falls_back_to_flag_arguments() {
        let slots = assign_args(TranslationMode::MultiWord, &["de", "pl", "-w", "schlafen", "Herr"]).slots;
        assert_eq!(slots.words(), vec!["schlafen", "Herr"]);
    }

    #[test]
    fn double_uses_both_flags() {
        let slots = assign_args(TranslationMode::Double, &["de", "-m", "pl", "fr", "-w", "Herr", "nicht"]).slots;
        assert_eq!(slots.from_lang(), Some("de"));
        assert_eq!(slots.to_langs(), vec!["pl", "fr"]);
        assert_eq!(slots.words(), vec!["Herr", "nicht"]);
    }

    #[test]
    fn double_reports_extra_positionals() {
        let assignment = assign_args(TranslationMode::Double, &["de", "oops", "-m", "pl", "-w", "Herr"]);
        assert_eq!(texts(&assignment.unused), vec!["oops"]);
    }

    #[test]
    fn insert_word_keeps_command_line_order() {
        let mut slots = Slots {
            words: vec![Token::argument("nehmen", 3), Token::argument("krank", 4)],
            ..Slots::default()
        };
        slots.insert_word(Token::argument("suchen", 1));
        assert_eq!(slots.words(), vec!["suchen", "nehmen", "krank"]);
    }
}
