//! runscript CLI - evaluate a script file with an embedded engine

use anyhow::Context;
use clap::Parser;
use runscript::cli::Args;
use runscript::{format_trace, EngineRegistry, ExecutionContext, ScriptRunner};

/// Stack for the thread that parses and evaluates scripts
const RUN_STACK_SIZE: usize = 256 * 1024 * 1024;

fn main() {
    let args = Args::parse();

    let outcome = std::thread::Builder::new()
        .name("runscript".to_string())
        .stack_size(RUN_STACK_SIZE)
        .spawn(move || run(args))
        .context("failed to spawn script thread")
        .and_then(|handle| {
            handle
                .join()
                .map_err(|_| anyhow::anyhow!("script thread panicked"))?
        });

    if let Err(e) = outcome {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let registry = EngineRegistry::default();

    if args.list_engines {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let ctx = ExecutionContext {
        engine: args.engine,
        verbose: args.verbose,
    };

    if args.repl {
        return runscript::repl::run_repl(&registry, &ctx).context("failed to start REPL");
    }

    let Some(file) = args.file else {
        anyhow::bail!("no script file given");
    };

    let runner = ScriptRunner::new(&registry, ctx);
    let result = runner.run_file(&file);

    // Failures are reported but never change the exit status
    if let Err(ref e) = result.evaluation {
        eprintln!("{}", format_trace(e, &file));
    }

    if args.verbose {
        eprintln!(
            "runscript: finished {} ({})",
            file.display(),
            if result.success() { "ok" } else { "failed" }
        );
    }

    Ok(())
}
