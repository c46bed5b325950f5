//! Script loading and execution
//!
//! Handles reading script files and handing them to an engine.

pub mod loader;
pub mod runner;

pub use loader::{load_script, read_script, LoadOutcome, ScriptText};
pub use runner::{ExecutionContext, ScriptResult, ScriptRunner};
