//! runscript - run a script file through an embedded scripting engine
//!
//! A script file is read line by line, its lines are joined without
//! separators, and the result is evaluated by an engine looked up by name.
//! Read failures and evaluation failures never change the exit status.
//!
//! # Example
//!
//! ```no_run
//! use runscript::{EngineRegistry, ExecutionContext, ScriptRunner};
//!
//! let registry = EngineRegistry::default();
//! let runner = ScriptRunner::new(&registry, ExecutionContext::default());
//! let result = runner.run_file(std::path::Path::new("hello.js"));
//! if let Err(e) = &result.evaluation {
//!     eprintln!("{}", e);
//! }
//! ```

pub mod cli;
pub mod engine;
pub mod error;
pub mod output;
pub mod repl;
pub mod script;

pub use engine::{Engine, EngineProvider, EngineRegistry, EvalOutcome, JavaScriptEngine};
pub use error::{Result, RunscriptError};
pub use output::format_trace;
pub use script::{load_script, ExecutionContext, LoadOutcome, ScriptResult, ScriptRunner, ScriptText};
