//! Diagnostic traces for failed runs

use std::path::Path;

use crate::error::RunscriptError;

/// Render a failure the way it is printed on stderr
///
/// ```text
/// runscript: EvaluationError: SyntaxError: ...
///     at js (script.js)
/// ```
pub fn format_trace(error: &RunscriptError, script: &Path) -> String {
    let mut out = format!("runscript: {}: {}", error.kind(), error);

    match error {
        RunscriptError::EvaluationError { engine, .. } => {
            out.push_str(&format!("\n    at {} ({})", engine, script.display()));
        }
        _ => {
            out.push_str(&format!("\n    at {}", script.display()));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_evaluation_trace() {
        let err = RunscriptError::EvaluationError {
            engine: "js".to_string(),
            message: "SyntaxError: unexpected token".to_string(),
        };
        let trace = format_trace(&err, &PathBuf::from("broken.js"));
        let lines: Vec<&str> = trace.lines().collect();
        assert_eq!(
            lines[0],
            "runscript: EvaluationError: SyntaxError: unexpected token"
        );
        assert_eq!(lines[1], "    at js (broken.js)");
    }

    #[test]
    fn test_engine_not_found_trace() {
        let err = RunscriptError::EngineNotFound("ruby".to_string());
        let trace = format_trace(&err, &PathBuf::from("a.rb"));
        assert!(trace.starts_with("runscript: EngineNotFound: "));
        assert!(trace.contains("'ruby'"));
        assert!(trace.ends_with("    at a.rb"));
    }
}
