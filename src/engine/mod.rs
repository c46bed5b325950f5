//! Script engines and the registry that hands them out by name

pub mod javascript;
pub mod registry;

pub use javascript::JavaScriptEngine;
pub use registry::{EngineFactory, EngineRegistry, DEFAULT_ENGINE};

use crate::error::Result;

/// Result of a successful evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalOutcome {
    /// Completion value rendered by the engine, `None` when it is undefined
    pub value: Option<String>,
}

/// An engine that accepts script text and executes it
pub trait Engine {
    /// Name the engine reports about itself
    fn name(&self) -> &str;

    /// Evaluate `source`, failing with `EvaluationError` on malformed or
    /// throwing scripts
    fn eval(&mut self, source: &str) -> Result<EvalOutcome>;
}

/// Lookup facility mapping a name to a fresh engine instance
pub trait EngineProvider {
    /// Fails with `EngineNotFound` when nothing is registered under `name`
    fn engine_by_name(&self, name: &str) -> Result<Box<dyn Engine>>;
}
