//! Display directives: print settings and help, change nothing.

use std::fmt::Write as _;
use std::io::Write;

use crate::args::{ExtractedFlags, FlagArity, FlagName, FlagTable};
use crate::config::Config;
use crate::directives::DirectiveError;

const NONE: &str = "(none)";

/// Write every display directive to `out`, in command-line order.
pub fn render_display(
    flags: &ExtractedFlags,
    config: &Config,
    out: &mut impl Write,
) -> Result<(), DirectiveError> {
    let translation = &config.translation;

    for (name, occurrence) in flags.iter() {
        match name {
            FlagName::Langs | FlagName::AddLang | FlagName::RemoveLang => {
                writeln!(out, "langs: {}", saved_languages(config))?;
            }
            FlagName::Limit => writeln!(out, "limit: {}", translation.language_limit)?,
            FlagName::DefaultMode => writeln!(out, "default-mode: {}", translation.default_mode)?,
            FlagName::LayoutMethod => writeln!(out, "layout-method: {}", config.layout.method.as_str())?,
            FlagName::LayoutLang => writeln!(out, "layout-lang: {}", layout_lang(config))?,
            FlagName::Last => {
                let position = match occurrence.values().first() {
                    Some(value) => parse_position(value)?,
                    None => 1,
                };
                writeln!(out, "last {}: {}", position, nth_language(config, position))?;
            }
            FlagName::Last1 => writeln!(out, "last1: {}", nth_language(config, 1))?,
            FlagName::Last2 => writeln!(out, "last2: {}", nth_language(config, 2))?,
            FlagName::Settings => out.write_all(settings_text(config).as_bytes())?,
            FlagName::Help => out.write_all(help_text().as_bytes())?,
            other => tracing::debug!(flag = %other, "not a display directive, skipped"),
        }
    }

    Ok(())
}

fn parse_position(value: &str) -> Result<usize, DirectiveError> {
    match value.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(DirectiveError::InvalidPosition {
            value: value.to_string(),
        }),
    }
}

fn nth_language(config: &Config, position: usize) -> &str {
    config
        .translation
        .saved_languages
        .get(position - 1)
        .map_or(NONE, String::as_str)
}

fn saved_languages(config: &Config) -> String {
    let saved = &config.translation.saved_languages;
    if saved.is_empty() {
        NONE.to_string()
    } else {
        saved.join(", ")
    }
}

fn layout_lang(config: &Config) -> &str {
    match config.layout.lang.as_str() {
        "" => NONE,
        lang => lang,
    }
}

/// Every setting, one per line.
pub fn settings_text(config: &Config) -> String {
    let translation = &config.translation;
    let layout = &config.layout;
    let mut text = String::new();
    let _ = writeln!(text, "default-mode: {}", translation.default_mode);
    let _ = writeln!(text, "limit: {}", translation.language_limit);
    let _ = writeln!(text, "langs: {}", saved_languages(config));
    let _ = writeln!(text, "layout-method: {}", layout.method.as_str());
    let _ = writeln!(text, "layout-lang: {}", layout_lang(config));
    text
}

/// Usage per mode followed by the flag table.
pub fn help_text() -> String {
    let table = FlagTable::builtin();
    let mut text = String::from(
        "Usage:\n\
         \x20 trans [-s] <word> [from] [to]\n\
         \x20 trans -m <word> [from] [to...]\n\
         \x20 trans <word> [from] -m <to...>\n\
         \x20 trans -w [from] [to] <word...>\n\
         \x20 trans [from] -m <to...> -w <word...>\n\
         \n\
         Missing languages are taken from the saved list, most recent first.\n\
         \n\
         Flags:\n",
    );

    let rows: Vec<(String, &str)> = table
        .specs()
        .iter()
        .map(|spec| {
            let mut spelling = spec.aliases.join(", ");
            if spec.arity != FlagArity::Fixed(0) {
                spelling.push_str(" <value>");
            }
            (spelling, spec.description)
        })
        .collect();
    let width = rows.iter().map(|(spelling, _)| spelling.len()).max().unwrap_or(0);
    for (spelling, description) in rows {
        let _ = writeln!(text, "  {:width$}  {}", spelling, description, width = width);
    }
    text
}
