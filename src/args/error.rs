use thiserror::Error;

use crate::args::registry::FlagName;

/// Errors that can occur while resolving arguments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParsingError {
    #[error("translation modes ({}) cannot be used at once", spellings(.flags))]
    ModeConflict { flags: Vec<FlagName> },

    #[error("no word to translate")]
    NoWord,
}

fn spellings(flags: &[FlagName]) -> String {
    flags
        .iter()
        .map(|name| format!("--{}", name.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}
