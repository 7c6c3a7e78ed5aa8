//! Rill CLI
//!
//! Main entry point for the `rill` command. Reads a program from a file or
//! standard input, evaluates it, and forwards its printed output. A runtime
//! error writes one `<line>: RUNTIME ERROR <message>` line to standard
//! error and exits with status 1.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use miette::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "rill")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "The Rill scripting language interpreter", long_about = None)]
struct Cli {
    /// Program file; reads standard input when omitted
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print an intermediate form instead of evaluating
    #[arg(long, value_enum)]
    emit: Option<EmitType>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum EmitType {
    /// Token stream
    Tokens,
    /// Program tree (JSON)
    Ast,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let source = read_source(cli.input.as_deref())?;

    let tokens = rill::lexer::lex(&source)?;
    tracing::debug!("Lexed {} tokens", tokens.len());

    if cli.emit == Some(EmitType::Tokens) {
        println!(
            "{:?}",
            tokens.iter().map(|t| &t.kind).collect::<Vec<_>>()
        );
        return Ok(());
    }

    let program = rill::parser::parse(&tokens, &source)?;

    if cli.emit == Some(EmitType::Ast) {
        match &program {
            Some(root) => {
                let json = serde_json::to_string_pretty(root)
                    .map_err(|e| miette::miette!("Failed to serialize tree: {}", e))?;
                println!("{}", json);
            }
            None => println!("(empty program)"),
        }
        return Ok(());
    }

    let Some(root) = program else {
        return Ok(());
    };

    let mut interpreter = rill::interp::Interpreter::new();
    if let Err(err) = interpreter.run(&root) {
        eprintln!("{}", err);
        std::process::exit(1);
    }

    Ok(())
}

fn read_source(input: Option<&std::path::Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e)),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| miette::miette!("Failed to read standard input: {}", e))?;
            Ok(source)
        }
    }
}
