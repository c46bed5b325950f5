//! JavaScript engine backed by Boa

use boa_engine::{js_string, property::Attribute, Context, Source};
use boa_runtime::Console;

use super::{Engine, EvalOutcome};
use crate::error::{Result, RunscriptError};

const ENGINE_NAME: &str = "js";

/// Deepest bracket nesting handed to the parser. Boa parses recursively, so
/// deeper input would exhaust the stack instead of raising an error.
pub const MAX_NESTING_DEPTH: usize = 512;

/// A Boa context with the `console` global installed
pub struct JavaScriptEngine {
    context: Context,
}

impl JavaScriptEngine {
    pub fn new() -> Result<Self> {
        let mut context = Context::default();
        let console = Console::init(&mut context);
        context
            .register_global_property(js_string!("console"), console, Attribute::all())
            .map_err(|e| RunscriptError::ExecutionError(format!("install console: {}", e)))?;
        Ok(Self { context })
    }
}

impl Engine for JavaScriptEngine {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn eval(&mut self, source: &str) -> Result<EvalOutcome> {
        let depth = bracket_depth(source);
        if depth.max > MAX_NESTING_DEPTH {
            return Err(RunscriptError::EvaluationError {
                engine: ENGINE_NAME.to_string(),
                message: format!(
                    "SyntaxError: brackets nested {} levels deep, limit is {}",
                    depth.max, MAX_NESTING_DEPTH
                ),
            });
        }

        let result = self.context.eval(Source::from_bytes(source));

        // Promise reactions queued by the script
        self.context.run_jobs();

        let value = result.map_err(|e| RunscriptError::EvaluationError {
            engine: ENGINE_NAME.to_string(),
            message: e.to_string(),
        })?;

        let value = if value.is_undefined() {
            None
        } else {
            Some(value.display().to_string())
        };

        Ok(EvalOutcome { value })
    }
}

/// Bracket nesting of a piece of source text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BracketDepth {
    /// Open brackets minus closed ones at the end of the text
    pub net: i64,
    /// Deepest nesting reached anywhere in the text
    pub max: usize,
}

/// Measure bracket nesting, skipping quoted strings and comments
pub fn bracket_depth(source: &str) -> BracketDepth {
    let mut depth = BracketDepth::default();
    let mut quote: Option<char> = None;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            match c {
                '\\' => {
                    chars.next();
                }
                c if c == q => quote = None,
                _ => {}
            }
            continue;
        }

        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '/' if chars.peek() == Some(&'/') => {
                while chars.next_if(|&next| next != '\n').is_some() {}
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = ' ';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            '{' | '(' | '[' => {
                depth.net += 1;
                if depth.net > 0 {
                    depth.max = depth.max.max(depth.net as usize);
                }
            }
            '}' | ')' | ']' => depth.net -= 1,
            _ => {}
        }
    }

    depth
}
