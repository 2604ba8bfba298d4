//! Flag extractor — raw tokens → flags with their arguments + positional residue.

use std::collections::BTreeMap;

use crate::args::registry::{FlagArity, FlagName, FlagTable};
use crate::args::token::{texts, Token};

/// Everything one flag collected over the whole command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOccurrence {
    /// Token index of the first appearance.
    pub position: usize,
    /// Arguments of every appearance, in command-line order.
    pub arguments: Vec<Token>,
}

impl FlagOccurrence {
    pub fn values(&self) -> Vec<&str> {
        texts(&self.arguments)
    }
}

/// Flags found on the command line, keyed by canonical name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFlags {
    flags: BTreeMap<FlagName, FlagOccurrence>,
}

impl ExtractedFlags {
    pub fn get(&self, name: FlagName) -> Option<&FlagOccurrence> {
        self.flags.get(&name)
    }

    pub fn contains(&self, name: FlagName) -> bool {
        self.flags.contains_key(&name)
    }

    /// Arguments collected for `name`; empty when the flag is absent.
    pub fn arguments(&self, name: FlagName) -> &[Token] {
        self.flags
            .get(&name)
            .map_or(&[], |occurrence| occurrence.arguments.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Flags in order of first appearance on the command line.
    pub fn iter(&self) -> impl Iterator<Item = (FlagName, &FlagOccurrence)> {
        let mut entries: Vec<_> = self.flags.iter().map(|(name, occ)| (*name, occ)).collect();
        entries.sort_by_key(|(_, occurrence)| occurrence.position);
        entries.into_iter()
    }

    /// Copy of the flags accepted by `keep`.
    pub fn subset(&self, mut keep: impl FnMut(FlagName, &FlagOccurrence) -> bool) -> Self {
        let flags = self
            .flags
            .iter()
            .filter(|(name, occurrence)| keep(**name, occurrence))
            .map(|(name, occurrence)| (*name, occurrence.clone()))
            .collect();
        Self { flags }
    }

    fn entry(&mut self, name: FlagName, position: usize) -> &mut FlagOccurrence {
        self.flags.entry(name).or_insert_with(|| FlagOccurrence {
            position,
            arguments: Vec::new(),
        })
    }
}

/// Result of extracting flags from raw tokens.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub flags: ExtractedFlags,
    /// Positional tokens, in order.
    pub residual: Vec<Token>,
    /// Warnings produced during extraction (e.g., unknown flags).
    pub warnings: Vec<String>,
}

/// A `-`-prefixed token other than a lone dash.
pub fn is_flag_shaped(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

/// Extract flags against the table.
///
/// A flag never consumes another flag-shaped token, known or not. Unknown
/// flag-shaped tokens stay in the residue as plain words.
pub fn extract(tokens: &[String], table: &FlagTable) -> Extraction {
    let mut extraction = Extraction::default();
    let mut iter = tokens.iter().enumerate().peekable();

    while let Some((position, token)) = iter.next() {
        if !is_flag_shaped(token) {
            extraction.residual.push(Token::argument(token.as_str(), position));
            continue;
        }

        let Some(spec) = table.resolve_alias(token) else {
            extraction
                .warnings
                .push(format!("{}: unknown flag, treated as a word", token));
            extraction.residual.push(Token::argument(token.as_str(), position));
            continue;
        };

        let limit = match spec.arity {
            FlagArity::Fixed(n) => n,
            FlagArity::Variadic => usize::MAX,
        };

        let occurrence = extraction.flags.entry(spec.name, position);
        let mut taken = 0;
        while taken < limit {
            let Some((arg_position, arg)) = iter.next_if(|(_, next)| !is_flag_shaped(next)) else {
                break;
            };
            occurrence
                .arguments
                .push(Token::argument(arg.as_str(), arg_position));
            taken += 1;
        }
    }

    extraction
}
