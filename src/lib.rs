pub mod args;
pub mod cli;
pub mod config;
pub mod directives;
pub mod layout;
pub mod logging;
