//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Course catalog planner: load courses with prerequisites and browse them
#[derive(Parser, Debug)]
#[command(name = "course-planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Course file, one `ID,Name[,Prereq...]` per line (default: courses2.txt)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Debug logging to stderr, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}
