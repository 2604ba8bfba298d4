//! Configurational directives — change the settings snapshot.

use crate::args::{ExtractedFlags, FlagName, FlagTable, TranslationMode};
use crate::config::{Config, LayoutMethod};
use crate::directives::DirectiveError;

/// Parse a mode as typed after `--default-mode`.
///
/// Accepts canonical names (`multi-lang`), short letters (`m`) and flag
/// spellings (`-m`, `--multi-lang`).
pub fn parse_mode(value: &str) -> Option<TranslationMode> {
    if let Some(name) = FlagName::parse(value) {
        return TranslationMode::from_flag(name);
    }
    let spelled = if value.starts_with('-') {
        value.to_string()
    } else if value.chars().count() < 3 {
        format!("-{}", value)
    } else {
        format!("--{}", value)
    };
    FlagTable::builtin()
        .resolve_alias(&spelled)
        .and_then(|spec| TranslationMode::from_flag(spec.name))
}

/// Apply every configurational directive, in command-line order.
///
/// Returns notices for requests that changed nothing (adding a saved
/// language, removing an unknown one).
pub fn apply_directives(
    flags: &ExtractedFlags,
    config: &mut Config,
) -> Result<Vec<String>, DirectiveError> {
    let mut notices = Vec::new();

    for (name, occurrence) in flags.iter() {
        let values = occurrence.values();
        match name {
            FlagName::Limit => {
                let value = values.first().copied().unwrap_or_default();
                let limit = value.parse::<usize>().map_err(|_| DirectiveError::InvalidLimit {
                    value: value.to_string(),
                })?;
                config.translation.language_limit = limit;
                tracing::info!(limit, "language limit changed");
            }
            FlagName::DefaultMode => {
                let value = values.first().copied().unwrap_or_default();
                let mode = parse_mode(value).ok_or_else(|| DirectiveError::InvalidMode {
                    value: value.to_string(),
                })?;
                config.translation.default_mode = mode;
                tracing::info!(%mode, "default mode changed");
            }
            FlagName::AddLang => {
                let saved = &mut config.translation.saved_languages;
                for lang in values {
                    if saved.iter().any(|s| s == lang) {
                        notices.push(format!("Language '{}' is already saved", lang));
                    } else {
                        saved.push(lang.to_string());
                        tracing::info!(lang, "language added");
                    }
                }
            }
            FlagName::RemoveLang => {
                let saved = &mut config.translation.saved_languages;
                for lang in values {
                    match saved.iter().position(|s| s == lang) {
                        Some(index) => {
                            saved.remove(index);
                            tracing::info!(lang, "language removed");
                        }
                        None => notices.push(format!("Language '{}' is not saved", lang)),
                    }
                }
            }
            FlagName::LayoutMethod => {
                let value = values.first().copied().unwrap_or_default();
                let method = LayoutMethod::parse(value).ok_or_else(|| {
                    DirectiveError::InvalidLayoutMethod {
                        value: value.to_string(),
                    }
                })?;
                config.layout.method = method;
                tracing::info!(method = method.as_str(), "layout method changed");
            }
            FlagName::LayoutLang => {
                let lang = values.first().copied().unwrap_or_default();
                if lang.trim().is_empty() {
                    return Err(DirectiveError::InvalidLayoutLang {
                        value: lang.to_string(),
                    });
                }
                config.layout.lang = lang.to_string();
                tracing::info!(lang, "layout language changed");
            }
            other => tracing::debug!(flag = %other, "not a configurational directive, skipped"),
        }
    }

    Ok(notices)
}
