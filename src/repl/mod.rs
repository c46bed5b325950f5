//! REPL module for interactive mode

#[cfg(feature = "repl")]
pub mod interactive;

#[cfg(feature = "repl")]
pub use interactive::run_repl;

#[cfg(not(feature = "repl"))]
pub fn run_repl(
    _provider: &dyn crate::engine::EngineProvider,
    _ctx: &crate::script::ExecutionContext,
) -> crate::error::Result<()> {
    Err(crate::error::RunscriptError::ExecutionError(
        "REPL not enabled. Rebuild with --features repl".to_string(),
    ))
}

#[cfg(all(test, not(feature = "repl")))]
mod tests {
    use super::*;
    use crate::engine::EngineRegistry;
    use crate::script::ExecutionContext;

    #[test]
    fn test_repl_disabled() {
        let registry = EngineRegistry::default();
        let result = run_repl(&registry, &ExecutionContext::default());
        assert!(result.is_err());
    }
}
