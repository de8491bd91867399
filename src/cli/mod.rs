//! CLI layer: argument parsing and the interactive shell

pub mod args;
pub mod error;
pub mod output;
pub mod shell;

pub use args::Cli;
pub use error::{CliError, CliResult};
pub use shell::{MenuChoice, Shell};
