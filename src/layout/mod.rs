//! Layout adjusters — remap tokens typed in a non-latin script or keyboard layout.
//!
//! Both methods replace whole tokens found in a table; they differ only in
//! which table is used. `native` maps language codes written in the native
//! script (`пл` → `pl`), `keyboard` maps what the same keys produce with a
//! non-latin layout active (`зд` → `pl`). The tables are data from the config
//! file; this module only applies them.

use std::collections::{BTreeMap, HashMap};

use crate::config::{LayoutConfig, LayoutMethod};

/// Per-token rewrite applied before any flag resolution.
pub trait LayoutAdjuster {
    /// Returns the name of this adjuster for logging.
    fn name(&self) -> &'static str;

    /// Adjusted token. Unmapped tokens come back unchanged.
    fn adjust(&self, token: &str) -> String;
}

/// Leaves every token as typed.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityAdjuster;

impl LayoutAdjuster for IdentityAdjuster {
    fn name(&self) -> &'static str {
        "none"
    }

    fn adjust(&self, token: &str) -> String {
        token.to_string()
    }
}

/// Whole-token lookup in a replacement table.
#[derive(Debug, Clone)]
pub struct TableAdjuster {
    method: LayoutMethod,
    table: HashMap<String, String>,
}

impl TableAdjuster {
    pub fn new(method: LayoutMethod, table: &BTreeMap<String, String>) -> Self {
        let table = table
            .iter()
            .map(|(from, to)| (from.clone(), to.clone()))
            .collect();
        Self { method, table }
    }

    /// Number of mapped tokens.
    pub fn entries(&self) -> usize {
        self.table.len()
    }
}

impl LayoutAdjuster for TableAdjuster {
    fn name(&self) -> &'static str {
        self.method.as_str()
    }

    fn adjust(&self, token: &str) -> String {
        self.table
            .get(token)
            .cloned()
            .unwrap_or_else(|| token.to_string())
    }
}

/// Build the adjuster selected by the config.
///
/// A method without any table for the configured language acts as identity.
pub fn adjuster_from_config(layout: &LayoutConfig) -> Box<dyn LayoutAdjuster> {
    if layout.method == LayoutMethod::None {
        return Box::new(IdentityAdjuster);
    }

    let table = layout
        .tables_for(layout.method)
        .get(&layout.lang)
        .filter(|table| !table.is_empty());
    let Some(table) = table else {
        tracing::warn!(
            method = layout.method.as_str(),
            lang = %layout.lang,
            "no layout table for language, tokens are not adjusted"
        );
        return Box::new(IdentityAdjuster);
    };

    let adjuster = TableAdjuster::new(layout.method, table);
    tracing::debug!(method = layout.method.as_str(), lang = %layout.lang, entries = adjuster.entries(), "layout adjuster ready");
    Box::new(adjuster)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Ukrainian tables: codes in Cyrillic for native, the same keys with
    /// the Ukrainian keyboard layout for keyboard.
    fn uk_layout(method: LayoutMethod) -> LayoutConfig {
        let mut layout = LayoutConfig {
            method,
            lang: "uk".to_string(),
            ..LayoutConfig::default()
        };
        layout
            .native
            .insert("uk".to_string(), table(&[("пл", "pl"), ("де", "de"), ("-м", "-m")]));
        layout
            .keyboard
            .insert("uk".to_string(), table(&[("зд", "pl"), ("ву", "de"), ("-ь", "-m")]));
        layout
    }

    #[test]
    fn replaces_whole_tokens_only() {
        let adjuster = TableAdjuster::new(LayoutMethod::Native, &table(&[("пл", "pl"), ("-м", "-m")]));
        assert_eq!(adjuster.adjust("пл"), "pl");
        assert_eq!(adjuster.adjust("-м"), "-m");
        assert_eq!(adjuster.adjust("плюс"), "плюс");
    }

    #[test]
    fn keyboard_leaves_unmapped_words_alone() {
        let adjuster = adjuster_from_config(&uk_layout(LayoutMethod::Keyboard));
        assert_eq!(adjuster.name(), "keyboard");
        assert_eq!(adjuster.adjust("ву"), "de");
        assert_eq!(adjuster.adjust("-ь"), "-m");
        assert_eq!(adjuster.adjust("привіт"), "привіт");
        assert_eq!(adjuster.adjust("світло"), "світло");
    }

    #[test]
    fn native_and_keyboard_use_different_tables() {
        let native = adjuster_from_config(&uk_layout(LayoutMethod::Native));
        let keyboard = adjuster_from_config(&uk_layout(LayoutMethod::Keyboard));
        assert_eq!(native.name(), "native");
        assert_eq!(native.adjust("пл"), "pl");
        assert_eq!(native.adjust("зд"), "зд");
        assert_eq!(keyboard.adjust("зд"), "pl");
        assert_eq!(keyboard.adjust("пл"), "пл");
    }

    #[test]
    fn language_without_table_is_identity() {
        let mut layout = uk_layout(LayoutMethod::Keyboard);
        layout.lang = "ru".to_string();
        let adjuster = adjuster_from_config(&layout);
        assert_eq!(adjuster.name(), "none");
        assert_eq!(adjuster.adjust("зд"), "зд");
    }

    #[test]
    fn none_method_is_identity() {
        let adjuster = adjuster_from_config(&uk_layout(LayoutMethod::None));
        assert_eq!(adjuster.name(), "none");
        assert_eq!(adjuster.adjust("пл"), "пл");
    }
}
