//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::engine::DEFAULT_ENGINE;

#[derive(Parser, Debug)]
#[command(name = "runscript")]
#[command(author, version, about = "Run a script file through an embedded scripting engine", long_about = None)]
pub struct Args {
    /// Path to the script file
    #[arg(required_unless_present_any = ["list_engines", "repl"])]
    pub file: Option<PathBuf>,

    /// Name of the engine to evaluate the script with
    #[arg(long, value_name = "NAME", default_value = DEFAULT_ENGINE)]
    pub engine: String,

    /// Print registered engine names and exit
    #[arg(long)]
    pub list_engines: bool,

    /// Start an interactive prompt instead of running a file
    #[arg(long, conflicts_with = "file")]
    pub repl: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
