pub mod loader;
pub mod store;
pub mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{Config, LayoutConfig, LayoutMethod, TranslationConfig};

use crate::args::TranslationMode;

/// Settings the argument resolver reads, plus the one update it triggers.
pub trait Configuration {
    /// Saved languages, most recently used first.
    fn saved_languages(&self) -> &[String];

    /// How many saved languages multi-lang falls back to; 0 means all.
    fn language_limit(&self) -> usize;

    /// Mode used when no mode flag is given.
    fn default_mode(&self) -> TranslationMode;

    /// Move the given languages to the front, keeping their order.
    ///
    /// Languages that are not saved are ignored.
    fn promote_languages_to_front(&mut self, langs: &[&str]);
}

impl Configuration for Config {
    fn saved_languages(&self) -> &[String] {
        &self.translation.saved_languages
    }

    fn language_limit(&self) -> usize {
        self.translation.language_limit
    }

    fn default_mode(&self) -> TranslationMode {
        self.translation.default_mode
    }

    fn promote_languages_to_front(&mut self, langs: &[&str]) {
        let saved = &mut self.translation.saved_languages;
        for lang in langs.iter().rev() {
            if let Some(index) = saved.iter().position(|s| s == lang) {
                let promoted = saved.remove(index);
                saved.insert(0, promoted);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(saved: &[&str]) -> Config {
        let mut config = Config::default();
        config.translation.saved_languages = saved.iter().map(|s| s.to_string()).collect();
        config
    }

    #[test]
    fn promote_keeps_given_order() {
        let mut config = config_with(&["fr", "es", "de", "pl"]);
        config.promote_languages_to_front(&["de", "pl"]);
        assert_eq!(config.saved_languages(), ["de", "pl", "fr", "es"]);
    }

    #[test]
    fn promote_ignores_unsaved_languages() {
        let mut config = config_with(&["fr", "de"]);
        config.promote_languages_to_front(&["it", "de"]);
        assert_eq!(config.saved_languages(), ["de", "fr"]);
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.default_mode(), TranslationMode::Single);
        assert_eq!(config.language_limit(), 3);
        assert!(config.saved_languages().is_empty());
        assert_eq!(config.layout.method, LayoutMethod::None);
    }
}
