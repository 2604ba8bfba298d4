//! Tokens with provenance.

use serde::Serialize;

/// Where a slot value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Typed on the command line, at this index of the adjusted token list.
    Argument(usize),
    /// Filled in from the saved languages.
    Saved,
}

/// A single value together with its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub origin: Origin,
}

impl Token {
    pub fn argument(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Argument(position),
        }
    }

    pub fn saved(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Saved,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Position on the command line. Saved values sort after every argument.
    pub fn position(&self) -> usize {
        match self.origin {
            Origin::Argument(position) => position,
            Origin::Saved => usize::MAX,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.origin == Origin::Saved
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

/// Texts of a token slice, in order.
pub fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(Token::as_str).collect()
}
