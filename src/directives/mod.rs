//! Directives: flags that change or show settings instead of translating.

mod apply;
mod display;

pub use apply::{apply_directives, parse_mode};
pub use display::{help_text, render_display, settings_text};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectiveError {
    #[error("invalid language limit '{value}': expected a number, 0 for all")]
    InvalidLimit { value: String },

    #[error("invalid mode '{value}': expected s, m or w (single, multi-lang, multi-word)")]
    InvalidMode { value: String },

    #[error("invalid layout adjustment method '{value}': expected none, native or keyboard")]
    InvalidLayoutMethod { value: String },

    #[error("invalid layout adjustment language '{value}'")]
    InvalidLayoutLang { value: String },

    #[error("invalid position '{value}': expected a number from 1")]
    InvalidPosition { value: String },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
