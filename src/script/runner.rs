//! Script runner: load a file, look up an engine, evaluate

use std::io;
use std::path::Path;

use crate::engine::{EngineProvider, EvalOutcome, DEFAULT_ENGINE};
use crate::error::Result;
use crate::script::loader::{load_script, ScriptText};

/// Options for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Name of the engine to request from the provider
    pub engine: String,
    /// Print progress notes on stderr
    pub verbose: bool,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            verbose: false,
        }
    }
}

/// Result of running a script file
#[derive(Debug)]
pub struct ScriptResult {
    /// Text handed to the engine
    pub script: ScriptText,
    /// Read failure that was ignored while loading
    pub load_error: Option<io::Error>,
    /// Engine lookup and evaluation result
    pub evaluation: Result<EvalOutcome>,
}

impl ScriptResult {
    /// Whether the engine evaluated the script without error
    pub fn success(&self) -> bool {
        self.evaluation.is_ok()
    }
}

/// Runs scripts against engines from a provider
pub struct ScriptRunner<'a> {
    provider: &'a dyn EngineProvider,
    exec_ctx: ExecutionContext,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(provider: &'a dyn EngineProvider, exec_ctx: ExecutionContext) -> Self {
        Self { provider, exec_ctx }
    }

    /// Load and run a script file. Read failures never stop evaluation.
    pub fn run_file(&self, path: &Path) -> ScriptResult {
        let (script, load_error) = load_script(path).into_parts();

        if self.exec_ctx.verbose {
            if let Some(ref e) = load_error {
                eprintln!("runscript: ignoring read error for {}: {}", path.display(), e);
            }
            eprintln!(
                "runscript: loaded {} bytes from {}",
                script.len(),
                path.display()
            );
        }

        let evaluation = self.run_script(script.as_str());

        ScriptResult {
            script,
            load_error,
            evaluation,
        }
    }

    /// Evaluate text with a fresh engine
    pub fn run_script(&self, source: &str) -> Result<EvalOutcome> {
        let mut engine = self.provider.engine_by_name(&self.exec_ctx.engine)?;

        if self.exec_ctx.verbose {
            eprintln!(
                "runscript: evaluating with engine '{}' ({})",
                self.exec_ctx.engine,
                engine.name()
            );
        }

        engine.eval(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Engine, EngineRegistry};
    use crate::error::RunscriptError;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every source it is asked to evaluate; fails on "fail"
    struct RecordingEngine {
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl Engine for RecordingEngine {
        fn name(&self) -> &str {
            "recording"
        }

        fn eval(&mut self, source: &str) -> Result<EvalOutcome> {
            self.seen.borrow_mut().push(source.to_string());
            if source.contains("fail") {
                return Err(RunscriptError::EvaluationError {
                    engine: "recording".to_string(),
                    message: "asked to fail".to_string(),
                });
            }
            Ok(EvalOutcome {
                value: Some(source.len().to_string()),
            })
        }
    }

    fn recording_registry() -> (EngineRegistry, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = EngineRegistry::new();
        let shared = Rc::clone(&seen);
        registry.register(&[DEFAULT_ENGINE], move || {
            Ok(Box::new(RecordingEngine {
                seen: Rc::clone(&shared),
            }))
        });
        (registry, seen)
    }

    #[test]
    fn test_default_context() {
        let ctx = ExecutionContext::default();
        assert_eq!(ctx.engine, "js");
        assert!(!ctx.verbose);
    }

    #[test]
    fn test_run_file_passes_concatenated_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two_lines.js");
        std::fs::write(&path, "var x = 1\nx + 1\n").unwrap();

        let (registry, seen) = recording_registry();
        let runner = ScriptRunner::new(&registry, ExecutionContext::default());
        let result = runner.run_file(&path);

        assert!(result.success());
        assert!(result.load_error.is_none());
        assert_eq!(*seen.borrow(), vec!["var x = 1x + 1".to_string()]);
    }

    #[test]
    fn test_missing_file_still_evaluates_empty_text() {
        let (registry, seen) = recording_registry();
        let runner = ScriptRunner::new(&registry, ExecutionContext::default());
        let result = runner.run_file(Path::new("/no/such/script.js"));

        assert!(result.load_error.is_some());
        assert!(result.success());
        assert_eq!(*seen.borrow(), vec![String::new()]);
    }

    #[test]
    fn test_evaluation_error_is_reported() {
        let (registry, _) = recording_registry();
        let runner = ScriptRunner::new(&registry, ExecutionContext::default());
        let result = runner.run_script("please fail");
        assert!(matches!(
            result,
            Err(RunscriptError::EvaluationError { .. })
        ));
    }

    #[test]
    fn test_unknown_engine() {
        let (registry, seen) = recording_registry();
        let ctx = ExecutionContext {
            engine: "cobol".to_string(),
            verbose: false,
        };
        let runner = ScriptRunner::new(&registry, ctx);
        let result = runner.run_script("anything");
        assert!(matches!(result, Err(RunscriptError::EngineNotFound(ref n)) if n == "cobol"));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_each_run_gets_fresh_engine() {
        let registry = EngineRegistry::default();
        let runner = ScriptRunner::new(&registry, ExecutionContext::default());
        runner.run_script("var leaked = 1;").unwrap();
        let result = runner.run_script("typeof leaked === 'undefined'").unwrap();
        assert_eq!(result.value.as_deref(), Some("true"));
    }
}
