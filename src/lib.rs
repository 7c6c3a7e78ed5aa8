//! Rill: a tiny imperative scripting language
//!
//! Integer, string, and boolean expressions, assignment, conditional
//! execution, and printing, over a single global variable environment.
//! Types are resolved entirely at evaluation time; the first semantic
//! violation halts the run.
//!
//! # Architecture
//!
//! ```text
//! Source → Lexer → Parser → Tree → Interpreter
//! ```
//!
//! # Example
//!
//! ```text
//! x = 2 + 3;
//! print x;
//! if (x > 4) print "big";
//! ```

pub mod ast;
pub mod common;
pub mod diagnostics;
pub mod interp;
pub mod lexer;
pub mod parser;

// Re-export diagnostics for convenience
pub use diagnostics::{RuntimeError, RuntimeErrorKind, SourceFile, SyntaxError};

// Re-exports for convenience
pub use ast::Node;
pub use interp::{Environment, Interpreter, Value};

/// Interpreter version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse source code to a program tree
///
/// Returns `None` for an empty program.
pub fn parse(source: &str) -> miette::Result<Option<Node>> {
    let tokens = lexer::lex(source)?;
    parser::parse(&tokens, source)
}

/// Parse and evaluate a program, returning its printed output lines
///
/// Runtime failures surface with the plain `<line>: RUNTIME ERROR <message>`
/// rendering described in [`diagnostics`].
pub fn interpret(source: &str) -> miette::Result<Vec<String>> {
    let Some(root) = parse(source)? else {
        return Ok(Vec::new());
    };
    let mut interpreter = interp::Interpreter::new();
    interpreter.run(&root)?;
    Ok(interpreter.output().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
