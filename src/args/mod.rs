//! Argument resolution pipeline for `trans`.
//!
//! ```text
//! Raw tokens → Adjust → Extract → Mode → Assign → Correct → Fallback → Reverse → ResolvedArguments
//! ```
//!
//! Each stage is a plain function that can be unit-tested independently.

mod corrector;
mod error;
mod extractor;
mod fallback;
mod mode;
mod pipeline;
mod preprocess;
mod registry;
mod slots;
mod token;

pub use corrector::{correct, is_likely_language_code, Correction};
pub use error::ParsingError;
pub use extractor::{extract, is_flag_shaped, ExtractedFlags, Extraction, FlagOccurrence};
pub use fallback::{fill, target_capacity, Fallback};
pub use mode::{resolve_mode, TranslationMode};
pub use pipeline::{resolve, ResolvedArguments, TranslationRequest};
pub use preprocess::adjust_tokens;
pub use registry::{flag_registry, FlagArity, FlagCategory, FlagName, FlagSpec, FlagTable, RegistryError};
pub use slots::{assign, Assignment, Slots};
pub use token::{texts, Origin, Token};
