//! Error types for runscript

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunscriptError {
    #[error("No script engine registered under the name '{0}'")]
    EngineNotFound(String),

    #[error("{message}")]
    EvaluationError { engine: String, message: String },

    #[error("Execution error: {0}")]
    ExecutionError(String),
}

impl RunscriptError {
    /// Short name of the error kind, used as the first word of a trace
    pub fn kind(&self) -> &'static str {
        match self {
            RunscriptError::EngineNotFound(_) => "EngineNotFound",
            RunscriptError::EvaluationError { .. } => "EvaluationError",
            RunscriptError::ExecutionError(_) => "ExecutionError",
        }
    }
}

pub type Result<T> = std::result::Result<T, RunscriptError>;
