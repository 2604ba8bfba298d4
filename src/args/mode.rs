//! Mode resolver — extracted flags → the one active translation mode.

use serde::{Deserialize, Serialize};

use crate::args::error::ParsingError;
use crate::args::extractor::ExtractedFlags;
use crate::args::registry::FlagName;
use crate::config::Configuration;

/// How words and languages are combined into translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslationMode {
    /// One word, one target language.
    #[default]
    Single,
    /// One word, several target languages.
    MultiLang,
    /// Several words, one target language.
    MultiWord,
    /// Several words, several target languages (`-m` and `-w` together).
    Double,
}

impl TranslationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MultiLang => "multi-lang",
            Self::MultiWord => "multi-word",
            Self::Double => "double",
        }
    }

    /// Mode selected by a translational flag on its own.
    pub fn from_flag(name: FlagName) -> Option<Self> {
        match name {
            FlagName::Single => Some(Self::Single),
            FlagName::MultiLang => Some(Self::MultiLang),
            FlagName::MultiWord => Some(Self::MultiWord),
            _ => None,
        }
    }

    /// Whether the mode translates into exactly one language.
    pub fn has_single_target(&self) -> bool {
        match self {
            Self::Single | Self::MultiWord => true,
            Self::MultiLang | Self::Double => false,
        }
    }
}

impl std::fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const MODE_FLAGS: [FlagName; 3] = [FlagName::Single, FlagName::MultiLang, FlagName::MultiWord];

/// Determine the active mode.
///
/// `single` excludes the other two; `multi-lang` with `multi-word` is
/// [`TranslationMode::Double`]. Without a mode flag the configured default
/// applies.
pub fn resolve_mode(
    flags: &ExtractedFlags,
    config: &impl Configuration,
) -> Result<TranslationMode, ParsingError> {
    let explicit: Vec<FlagName> = MODE_FLAGS
        .into_iter()
        .filter(|&name| flags.contains(name))
        .collect();

    match explicit.as_slice() {
        [] => Ok(config.default_mode()),
        [only] => Ok(TranslationMode::from_flag(*only).unwrap_or_default()),
        several if several.contains(&FlagName::Single) => Err(ParsingError::ModeConflict {
            flags: several.to_vec(),
        }),
        _ => Ok(TranslationMode::Double),
    }
}
