use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Parser;
use trans::args::{resolve, ResolvedArguments};
use trans::cli::Cli;
use trans::config::{Config, ConfigStore, Configuration};
use trans::directives::{apply_directives, render_display};
use trans::layout::adjuster_from_config;
use trans::logging::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "trans failed");
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = cli.config_file.unwrap_or_else(Config::config_path);
    let mut store = ConfigStore::open(path)?;
    tracing::debug!(path = %store.path().display(), "settings loaded");

    let mut resolved = resolve_with(&cli.tokens, store.config())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !resolved.configurational.is_empty() {
        let notices = apply_directives(&resolved.configurational, store.config_mut())?;
        store.config().validate()?;
        save(&mut store)?;
        for notice in notices {
            writeln!(out, "{}", notice)?;
        }
        // Languages and layout just changed; the request sees the new settings.
        resolved = resolve_with(&cli.tokens, store.config())?;
    }

    for warning in &resolved.warnings {
        tracing::warn!("{}", warning);
        eprintln!("Warning: {}", warning);
    }

    render_display(&resolved.display, store.config(), &mut out)?;

    if resolved.is_translation_requested() {
        print_request(&resolved, cli.json, &mut out)?;
        let languages = resolved.languages();
        store.config_mut().promote_languages_to_front(&languages);
    }

    save(&mut store)
}

fn resolve_with(tokens: &[String], config: &Config) -> Result<ResolvedArguments> {
    let adjuster = adjuster_from_config(&config.layout);
    Ok(resolve(tokens, config, adjuster.as_ref())?)
}

fn save(store: &mut ConfigStore) -> Result<()> {
    if store.save()? {
        tracing::info!(path = %store.path().display(), "settings saved");
    }
    Ok(())
}

fn print_request(resolved: &ResolvedArguments, json: bool, out: &mut impl Write) -> Result<()> {
    let request = resolved.request();
    let Some(from) = request.from_lang else {
        bail!(
            "no source language for '{}': name it or save languages with --add-lang",
            request.words.join(" ")
        );
    };
    if request.to_langs.is_empty() {
        bail!(
            "no target language for '{}': name it or save languages with --add-lang",
            request.words.join(" ")
        );
    }

    if json {
        serde_json::to_writer(&mut *out, &request)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{} ({} -> {}): {}",
            request.mode,
            from,
            request.to_langs.join(", "),
            request.words.join(" ")
        )?;
    }
    Ok(())
}
