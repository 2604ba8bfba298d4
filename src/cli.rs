use std::path::PathBuf;

use clap::Parser;

/// Command line of the `trans` binary.
///
/// Only the wrapper options belong to clap. Everything else, including
/// `-h`, `-s` or `--last`, is handed to the argument resolver untouched.
#[derive(Parser, Debug)]
#[command(name = "trans", about = "Translate words between languages")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Read and write settings at this path instead of the default one.
    #[arg(long = "config-file", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Print the resolved translation request as JSON.
    #[arg(long)]
    pub json: bool,

    /// Words, languages and flags to resolve.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}
