//! Lexer for the Rill language
//!
//! Turns source text into a token vector terminated by an `Eof` token.
//! Tokens remember the 1-based line they start on; the interpreter's
//! diagnostics are line-oriented, so the line is computed here once from a
//! table of line-start offsets.

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::common::Span;
use crate::diagnostics::{SourceFile, SyntaxError};
use logos::Logos;
use miette::Result;

/// Lex source text into tokens
pub fn lex(source: &str) -> Result<Vec<Token>> {
    let line_starts = line_starts(source);
    let line_of = |offset: usize| line_starts.partition_point(|&start| start <= offset);

    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::new(range.start, range.end);
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                span,
                line: line_of(span.start),
                text: lexer.slice().to_string(),
            }),
            Err(()) => {
                let src = SourceFile::new("<input>", source).to_named_source();
                return Err(SyntaxError::UnrecognizedCharacter {
                    span: span.into(),
                    src,
                }
                .into());
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::new(source.len(), source.len()),
        line: line_of(source.len().saturating_sub(1)).max(1),
        text: String::new(),
    });

    Ok(tokens)
}

/// Byte offsets at which each source line begins
fn line_starts(source: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(source.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}
