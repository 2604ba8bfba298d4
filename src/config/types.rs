use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::args::TranslationMode;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Translation defaults and the recently used languages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Mode used when no mode flag is given (default: single).
    #[serde(default)]
    pub default_mode: TranslationMode,
    /// How many saved languages multi-lang falls back to, 0 for all (default: 3).
    #[serde(default = "default_language_limit")]
    pub language_limit: usize,
    /// Saved languages, most recently used first.
    #[serde(default)]
    pub saved_languages: Vec<String>,
}

/// Which layout adjustment runs on the tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMethod {
    #[default]
    None,
    /// Whole-token replacement.
    Native,
    /// Per-character replacement.
    Keyboard,
}

impl LayoutMethod {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "native" => Some(Self::Native),
            "keyboard" => Some(Self::Keyboard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Native => "native",
            Self::Keyboard => "keyboard",
        }
    }
}

/// Layout adjustment settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub method: LayoutMethod,
    /// Language whose tables are used (e.g., "uk", "ru").
    #[serde(default)]
    pub lang: String,
    /// Extra whole-token replacements for `native`, per language.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub native: BTreeMap<String, BTreeMap<String, String>>,
    /// Extra whole-token replacements for `keyboard`, per language.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub keyboard: BTreeMap<String, BTreeMap<String, String>>,
}

impl LayoutConfig {
    /// Custom tables for `method`, keyed by language.
    pub fn tables_for(&self, method: LayoutMethod) -> &BTreeMap<String, BTreeMap<String, String>> {
        static EMPTY: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        match method {
            LayoutMethod::None => &EMPTY,
            LayoutMethod::Native => &self.native,
            LayoutMethod::Keyboard => &self.keyboard,
        }
    }
}

fn default_language_limit() -> usize {
    3
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            default_mode: TranslationMode::default(),
            language_limit: default_language_limit(),
            saved_languages: Vec::new(),
        }
    }
}
