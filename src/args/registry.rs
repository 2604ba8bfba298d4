//! Flag registry — single source of truth for all flags.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

/// Canonical identity of a flag, independent of how it was spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlagName {
    Single,
    MultiLang,
    MultiWord,
    Limit,
    Langs,
    Last,
    Last1,
    Last2,
    DefaultMode,
    AddLang,
    RemoveLang,
    LayoutMethod,
    LayoutLang,
    Reverse,
    Settings,
    Help,
}

impl FlagName {
    /// Stable canonical name, also used as the settings label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::MultiLang => "multi-lang",
            Self::MultiWord => "multi-word",
            Self::Limit => "limit",
            Self::Langs => "langs",
            Self::Last => "last",
            Self::Last1 => "last1",
            Self::Last2 => "last2",
            Self::DefaultMode => "default-mode",
            Self::AddLang => "add-lang",
            Self::RemoveLang => "remove-lang",
            Self::LayoutMethod => "layout-adjustment-method",
            Self::LayoutLang => "layout-adjustment-lang",
            Self::Reverse => "reverse",
            Self::Settings => "settings",
            Self::Help => "help",
        }
    }

    /// All variants, in help order.
    pub fn all() -> &'static [FlagName] {
        &[
            Self::Single,
            Self::MultiLang,
            Self::MultiWord,
            Self::Limit,
            Self::Langs,
            Self::Last,
            Self::Last1,
            Self::Last2,
            Self::DefaultMode,
            Self::AddLang,
            Self::RemoveLang,
            Self::LayoutMethod,
            Self::LayoutLang,
            Self::Reverse,
            Self::Settings,
            Self::Help,
        ]
    }

    /// Parse from a canonical name. Flag spellings are not accepted here.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|name| name.as_str() == s)
    }
}

impl std::fmt::Display for FlagName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many tokens a flag consumes after itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// Up to `n` tokens; fewer near the end of input or before another flag.
    Fixed(usize),
    /// Every token up to the next flag-shaped token.
    Variadic,
}

/// What a flag is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagCategory {
    /// Selects the translation mode.
    Translational,
    /// Changes a persisted setting when given arguments.
    Configurational,
    /// Shows information, never changes anything.
    Displayable,
    /// Changes how the resolved request is shaped.
    Functional,
}

/// A single flag definition.
#[derive(Debug, Clone)]
pub struct FlagSpec {
    pub name: FlagName,
    /// Every accepted spelling, short form first.
    pub aliases: &'static [&'static str],
    pub arity: FlagArity,
    pub category: FlagCategory,
    /// Human-readable description (for help text).
    pub description: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("alias '{alias}' is registered for both {first} and {second}")]
    DuplicateAlias {
        alias: &'static str,
        first: FlagName,
        second: FlagName,
    },
}

/// Build the complete flag registry.
pub fn flag_registry() -> Vec<FlagSpec> {
    vec![
        // === Translation modes ===
        FlagSpec {
            name: FlagName::Single,
            aliases: &["-s", "--single"],
            arity: FlagArity::Fixed(0),
            category: FlagCategory::Translational,
            description: "Translate one word into one language",
        },
        FlagSpec {
            name: FlagName::MultiLang,
            aliases: &["-m", "--multi-lang"],
            arity: FlagArity::Variadic,
            category: FlagCategory::Translational,
            description: "Translate one word into several languages",
        },
        FlagSpec {
            name: FlagName::MultiWord,
            aliases: &["-w", "--multi-word"],
            arity: FlagArity::Variadic,
            category: FlagCategory::Translational,
            description: "Translate several words into one language",
        },
        // === Settings ===
        FlagSpec {
            name: FlagName::Limit,
            aliases: &["-l", "--limit"],
            arity: FlagArity::Fixed(1),
            category: FlagCategory::Configurational,
            description: "Set (or show) how many saved languages multi-lang uses, 0 for all",
        },
        FlagSpec {
            name: FlagName::DefaultMode,
            aliases: &["-dm", "--default-mode"],
            arity: FlagArity::Fixed(1),
            category: FlagCategory::Configurational,
            description: "Set (or show) the mode used when none is given",
        },
        FlagSpec {
            name: FlagName::AddLang,
            aliases: &["-al", "--add-lang"],
            arity: FlagArity::Variadic,
            category: FlagCategory::Configurational,
            description: "Add languages to the saved list",
        },
        FlagSpec {
            name: FlagName::RemoveLang,
            aliases: &["-rl", "--remove-lang"],
            arity: FlagArity::Variadic,
            category: FlagCategory::Configurational,
            description: "Remove languages from the saved list",
        },
        FlagSpec {
            name: FlagName::LayoutMethod,
            aliases: &["-lam", "--layout-adjustment-method"],
            arity: FlagArity::Fixed(1),
            category: FlagCategory::Configurational,
            description: "Set (or show) how tokens are adjusted: none, native or keyboard",
        },
        FlagSpec {
            name: FlagName::LayoutLang,
            aliases: &["-lal", "--layout-adjustment-lang"],
            arity: FlagArity::Fixed(1),
            category: FlagCategory::Configurational,
            description: "Set (or show) the language whose layout tables are used",
        },
        // === Modifiers ===
        FlagSpec {
            name: FlagName::Reverse,
            aliases: &["-r", "--reverse"],
            arity: FlagArity::Fixed(0),
            category: FlagCategory::Functional,
            description: "Swap source and target language (single mode)",
        },
        // === Display ===
        FlagSpec {
            name: FlagName::Langs,
            aliases: &["-ll", "--langs"],
            arity: FlagArity::Fixed(0),
            category: FlagCategory::Displayable,
            description: "Show saved languages, most recent first",
        },
        FlagSpec {
            name: FlagName::Last,
            aliases: &["--last"],
            arity: FlagArity::Fixed(1),
            category: FlagCategory::Displayable,
            description: "Show the n-th most recently used language",
        },
        FlagSpec {
            name: FlagName::Last1,
            aliases: &["-1", "--last1"],
            arity: FlagArity::Fixed(0),
            category: FlagCategory::Displayable,
            description: "Show the most recently used language",
        },
        FlagSpec {
            name: FlagName::Last2,
            aliases: &["-2", "--last2"],
            arity: FlagArity::Fixed(0),
            category: FlagCategory::Displayable,
            description: "Show the second most recently used language",
        },
        FlagSpec {
            name: FlagName::Settings,
            aliases: &["-ss", "--settings"],
            arity: FlagArity::Fixed(0),
            category: FlagCategory::Displayable,
            description: "Show all settings",
        },
        FlagSpec {
            name: FlagName::Help,
            aliases: &["-h", "--help"],
            arity: FlagArity::Fixed(0),
            category: FlagCategory::Displayable,
            description: "Show help",
        },
    ]
}

/// Alias lookup over a set of flag definitions.
#[derive(Debug, Clone)]
pub struct FlagTable {
    specs: Vec<FlagSpec>,
    by_alias: HashMap<&'static str, usize>,
}

impl FlagTable {
    /// Build a table, rejecting aliases claimed by more than one flag.
    pub fn new(specs: Vec<FlagSpec>) -> Result<Self, RegistryError> {
        let mut by_alias: HashMap<&'static str, usize> = HashMap::new();
        for (index, spec) in specs.iter().enumerate() {
            for &alias in spec.aliases {
                if let Some(&previous) = by_alias.get(alias) {
                    return Err(RegistryError::DuplicateAlias {
                        alias,
                        first: specs[previous].name,
                        second: spec.name,
                    });
                }
                by_alias.insert(alias, index);
            }
        }
        Ok(Self { specs, by_alias })
    }

    /// The built-in vocabulary.
    ///
    /// # Panics
    ///
    /// Panics if two built-in flags share an alias.
    pub fn builtin() -> Self {
        match Self::new(flag_registry()) {
            Ok(table) => table,
            Err(err) => panic!("built-in flag registry is inconsistent: {}", err),
        }
    }

    pub fn resolve_alias(&self, token: &str) -> Option<&FlagSpec> {
        self.by_alias.get(token).map(|&index| &self.specs[index])
    }

    pub fn spec(&self, name: FlagName) -> Option<&FlagSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Arity of a canonical flag. Flags missing from the table take nothing.
    pub fn arity_of(&self, name: FlagName) -> FlagArity {
        self.spec(name)
            .map_or(FlagArity::Fixed(0), |spec| spec.arity)
    }

    /// Definitions in registration order.
    pub fn specs(&self) -> &[FlagSpec] {
        &self.specs
    }
}

impl Default for FlagTable {
    fn default() -> Self {
        Self::builtin()
    }
}
