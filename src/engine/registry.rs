//! Engine registry
//!
//! The EngineRegistry maps names to engine factories. Every lookup builds a
//! fresh engine, so scripts never share global state.

use std::collections::HashMap;
use std::rc::Rc;

use super::{Engine, EngineProvider, JavaScriptEngine};
use crate::error::{Result, RunscriptError};

/// Engine name used when none is given
pub const DEFAULT_ENGINE: &str = "js";

/// Names the JavaScript engine answers to
const JAVASCRIPT_NAMES: &[&str] = &[
    "js",
    "JS",
    "javascript",
    "JavaScript",
    "ecmascript",
    "ECMAScript",
    "boa",
];

/// Builds a new engine instance
pub type EngineFactory = Rc<dyn Fn() -> Result<Box<dyn Engine>>>;

/// Name-keyed collection of engine factories
pub struct EngineRegistry {
    factories: HashMap<String, EngineFactory>,
}

impl EngineRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory under each of `names`, replacing earlier entries
    pub fn register<F>(&mut self, names: &[&str], factory: F)
    where
        F: Fn() -> Result<Box<dyn Engine>> + 'static,
    {
        let factory: EngineFactory = Rc::new(factory);
        for name in names {
            self.factories.insert(name.to_string(), Rc::clone(&factory));
        }
    }

    /// Check if an engine is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// All registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(JAVASCRIPT_NAMES, || {
            Ok(Box::new(JavaScriptEngine::new()?) as Box<dyn Engine>)
        });
        registry
    }
}

impl EngineProvider for EngineRegistry {
    fn engine_by_name(&self, name: &str) -> Result<Box<dyn Engine>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RunscriptError::EngineNotFound(name.to_string()))?;
        factory()
    }
}
