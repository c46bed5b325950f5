//! Interactive REPL implementation

use crate::engine::javascript::bracket_depth;
use crate::engine::EngineProvider;
use crate::error::{Result, RunscriptError};
use crate::script::ExecutionContext;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub fn run_repl(provider: &dyn EngineProvider, ctx: &ExecutionContext) -> Result<()> {
    let mut rl = DefaultEditor::new().map_err(|e| RunscriptError::ExecutionError(e.to_string()))?;

    // One engine for the whole session so definitions carry over
    let mut engine = provider.engine_by_name(&ctx.engine)?;

    println!(
        "runscript v{} - {} engine",
        env!("CARGO_PKG_VERSION"),
        engine.name()
    );
    println!("Type '.help' for commands, '.exit' to quit\n");

    // Buffer for input whose brackets are not yet closed
    let mut input_buffer = String::new();
    let mut depth = 0i64;

    loop {
        let prompt = if depth > 0 {
            format!("{}...> ", "  ".repeat(depth as usize))
        } else {
            format!("{}> ", ctx.engine)
        };

        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if depth == 0 {
                    match trimmed {
                        "" => continue,
                        ".exit" | ".quit" => {
                            println!("Goodbye!");
                            break;
                        }
                        ".help" => {
                            print_help();
                            continue;
                        }
                        ".clear" => {
                            print!("\x1B[2J\x1B[1;1H");
                            continue;
                        }
                        _ => {}
                    }
                }

                let _ = rl.add_history_entry(trimmed);

                if !input_buffer.is_empty() {
                    input_buffer.push('\n');
                }
                input_buffer.push_str(&line);
                depth = bracket_depth(&input_buffer).net;

                if depth > 0 {
                    continue;
                }

                let source = std::mem::take(&mut input_buffer);
                depth = 0;

                match engine.eval(&source) {
                    Ok(outcome) => {
                        if let Some(value) = outcome.value {
                            println!("{}", value);
                        }
                    }
                    Err(e) => eprintln!("{}: {}", e.kind(), e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                if depth > 0 {
                    println!("^C (input cancelled)");
                    input_buffer.clear();
                    depth = 0;
                } else {
                    println!("^C");
                }
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"
REPL Commands
=============
  .help           - Show this help
  .clear          - Clear screen
  .exit, .quit    - Exit REPL

Input with unclosed brackets continues on the next line.
Ctrl+C cancels pending input, Ctrl+D exits.
"#
    );
}
