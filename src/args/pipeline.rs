//! Pipeline — ties all argument resolution stages together.

use serde::Serialize;

use crate::args::corrector::correct;
use crate::args::error::ParsingError;
use crate::args::extractor::{extract, ExtractedFlags, FlagOccurrence};
use crate::args::fallback::fill;
use crate::args::mode::{resolve_mode, TranslationMode};
use crate::args::preprocess::adjust_tokens;
use crate::args::registry::{FlagCategory, FlagName, FlagTable};
use crate::args::slots::{assign, Slots};
use crate::config::Configuration;
use crate::layout::LayoutAdjuster;

/// Fully resolved command line.
#[derive(Debug, Clone)]
pub struct ResolvedArguments {
    /// Active translation mode.
    pub mode: TranslationMode,
    /// Words and languages; empty when no translation was requested.
    pub slots: Slots,
    /// Directives that change settings (flags given with arguments).
    pub configurational: ExtractedFlags,
    /// Directives that only show information.
    pub display: ExtractedFlags,
    /// Warnings produced during resolution (unknown flags, ignored tokens).
    pub warnings: Vec<String>,
}

impl ResolvedArguments {
    pub fn is_translation_requested(&self) -> bool {
        !self.slots.words.is_empty()
    }

    /// Source then targets, as used by the translation.
    pub fn languages(&self) -> Vec<&str> {
        self.slots
            .from_lang()
            .into_iter()
            .chain(self.slots.to_langs())
            .collect()
    }

    /// Serializable view of the translation request.
    pub fn request(&self) -> TranslationRequest<'_> {
        TranslationRequest {
            mode: self.mode,
            from_lang: self.slots.from_lang(),
            to_langs: self.slots.to_langs(),
            words: self.slots.words(),
        }
    }
}

/// What the translation layer receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationRequest<'a> {
    pub mode: TranslationMode,
    pub from_lang: Option<&'a str>,
    pub to_langs: Vec<&'a str>,
    pub words: Vec<&'a str>,
}

/// Resolve raw user tokens.
///
/// This is the main entry point for argument resolution.
///
/// # Arguments
///
/// * `raw_tokens` - Command-line tokens after the program name and wrapper options
/// * `config` - Saved languages, limit and default mode
/// * `adjuster` - Layout adjustment applied to every token first
///
/// # Returns
///
/// The mode, the filled slots and the directives, or the first error.
pub fn resolve(
    raw_tokens: &[String],
    config: &impl Configuration,
    adjuster: &dyn LayoutAdjuster,
) -> Result<ResolvedArguments, ParsingError> {
    let table = FlagTable::builtin();

    // Stage 1: Adjust layout
    let tokens = adjust_tokens(raw_tokens, adjuster);

    // Stage 2: Extract flags
    let extraction = extract(&tokens, &table);
    let mut warnings = extraction.warnings;

    // Stage 3: Resolve mode
    let mode = resolve_mode(&extraction.flags, config)?;

    // Stage 4: Split directives
    let category = |name: FlagName| table.spec(name).map(|spec| spec.category);
    let configurational = extraction.flags.subset(|name, occurrence| {
        category(name) == Some(FlagCategory::Configurational) && !occurrence.arguments.is_empty()
    });
    let display = extraction.flags.subset(|name, occurrence| match category(name) {
        Some(FlagCategory::Displayable) => true,
        Some(FlagCategory::Configurational) => occurrence.arguments.is_empty(),
        _ => false,
    });

    let has_directives = !configurational.is_empty() || !display.is_empty();
    let has_translation_input = !extraction.residual.is_empty()
        || extraction
            .flags
            .iter()
            .any(|(name, occurrence)| is_mode_flag_with_arguments(name, occurrence));

    tracing::debug!(
        %mode,
        residual = extraction.residual.len(),
        flags = extraction.flags.len(),
        "extracted arguments"
    );

    if has_directives && !has_translation_input {
        return Ok(ResolvedArguments {
            mode,
            slots: Slots::default(),
            configurational,
            display,
            warnings,
        });
    }

    // Stage 5: Assign slots
    let assignment = assign(mode, &extraction.residual, &extraction.flags);
    warnings.extend(
        assignment
            .unused
            .iter()
            .map(|token| format!("{}: no place for this argument in {} mode, ignored", token, mode)),
    );
    let mut slots = assignment.slots;

    // Stage 6: Correct misplaced tokens
    correct(&mut slots, mode);

    // Stage 7: Fill from saved languages
    fill(&mut slots, mode, config);

    // Stage 8: Reverse
    if extraction.flags.contains(FlagName::Reverse) {
        if mode == TranslationMode::Single {
            slots.reverse();
        } else {
            warnings.push(format!("--reverse: only used in single mode, ignored in {} mode", mode));
        }
    }

    if slots.words.is_empty() {
        return Err(ParsingError::NoWord);
    }

    Ok(ResolvedArguments {
        mode,
        slots,
        configurational,
        display,
        warnings,
    })
}

fn is_mode_flag_with_arguments(name: FlagName, occurrence: &FlagOccurrence) -> bool {
    TranslationMode::from_flag(name).is_some() && !occurrence.arguments.is_empty()
}
