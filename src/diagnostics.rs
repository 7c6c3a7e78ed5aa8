//! Diagnostic reporting
//!
//! Syntax errors carry source locations and render through miette. Runtime
//! errors use the fixed `<line>: RUNTIME ERROR <message>` form on standard
//! error, so they deliberately stay outside miette's fancy rendering.

use crate::common::Span;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::sync::Arc;
use thiserror::Error;

/// Source file for error reporting
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub content: Arc<str>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Arc::from(content.into()),
        }
    }

    pub fn to_named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.name.clone(), self.content.to_string())
    }
}

/// Convert our Span to miette's SourceSpan
impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

/// Lexing or parsing diagnostic
#[derive(Error, Debug, Diagnostic)]
pub enum SyntaxError {
    #[error("Unrecognized character")]
    #[diagnostic(code(lex::unrecognized_character))]
    UnrecognizedCharacter {
        #[label("not a token of the language")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unexpected token: expected {expected}, found {found}")]
    #[diagnostic(code(parse::unexpected_token))]
    UnexpectedToken {
        expected: String,
        found: String,
        #[label("unexpected token here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unexpected token {found} at start of statement")]
    #[diagnostic(
        code(parse::unexpected_statement),
        help("statements are `print <expr>;`, `if (<expr>) <stmt>`, or `<expr>;`")
    )]
    UnexpectedStatement {
        found: String,
        #[label("expected a statement")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unexpected end of file")]
    #[diagnostic(code(parse::unexpected_eof))]
    UnexpectedEof {
        #[label("expected more tokens")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },
}

/// Fatal evaluation error
///
/// Rendered exactly as `<line>: RUNTIME ERROR <message>`. The line is the
/// most recently visited statement's line, not necessarily the innermost
/// failing expression's.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("{line}: RUNTIME ERROR {kind}")]
pub struct RuntimeError {
    pub line: usize,
    pub kind: RuntimeErrorKind,
}

impl RuntimeError {
    pub fn new(line: usize, kind: RuntimeErrorKind) -> Self {
        Self { line, kind }
    }
}

/// The semantic violations the evaluator can hit
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    #[error("Cannot add these two values")]
    CannotAdd,

    #[error("Cannot subtract these two values")]
    CannotSubtract,

    #[error("Cannot multiply these two values")]
    CannotMultiply,

    #[error("Cannot multiply a negative integer and a string")]
    NegativeRepeatInt,

    #[error("Cannot multiply a string by a negative integer")]
    NegativeRepeatString,

    #[error("Invalid logic, this is not a statement")]
    InvalidLogic,

    #[error("Cannot divide these two values")]
    CannotDivide,

    #[error("Cannot divide by 0")]
    DivideByZero,

    #[error("Cannot use the less than sign for these two values")]
    CannotLess,

    #[error("Cannot use the less than or equal to sign of these two values")]
    CannotLessEqual,

    #[error("Cannot use the greater than sign for these two values")]
    CannotGreater,

    #[error("Cannot use the greater than or equal to sign for these two values")]
    CannotGreaterEqual,

    #[error("Cannot compare the equality of these two values")]
    CannotEqual,

    #[error("Cannot compare the inequality of these two values")]
    CannotNotEqual,

    // The original emitted the `||` wording for both logical operators
    #[error("first operand of || is not boolean typed")]
    OperandNotBoolean,

    #[error("if expression is not boolean typed")]
    ConditionNotBoolean,

    #[error("Left hand side must be an identifier")]
    AssignTargetNotIdent,

    #[error("No identifier found")]
    IdentifierNotFound,
}
