//! Parser for the Rill language
//!
//! A recursive descent parser that produces the program tree from a token
//! stream. Statement sequences come out as the right-threaded `StmtList`
//! chain the interpreter walks. The assignment target is parsed as an
//! arbitrary expression; whether it is actually an identifier is checked at
//! evaluation time, not here.

use crate::ast::{BinaryOp, Node, NodeKind};
use crate::diagnostics::{SourceFile, SyntaxError};
use crate::lexer::{Token, TokenKind};
use miette::{NamedSource, Result};

/// Parse a token stream into a program tree
///
/// Returns `None` for an empty program.
pub fn parse(tokens: &[Token], source: &str) -> Result<Option<Node>> {
    let mut parser = Parser::new(tokens, source);
    let program = parser.parse_program()?;
    Ok(program)
}

/// Parser state
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    source: SourceFile,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], source: &str) -> Self {
        Self {
            tokens,
            pos: 0,
            source: SourceFile::new("<input>", source),
        }
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("token stream should have at least EOF")
        })
    }

    fn peek(&self) -> TokenKind {
        self.current().kind
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    fn advance(&mut self) -> &Token {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[self.pos.saturating_sub(1)]
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&Token, SyntaxError> {
        if self.at(kind) {
            Ok(self.advance())
        } else if self.at(TokenKind::Eof) {
            Err(SyntaxError::UnexpectedEof {
                span: self.current().span.into(),
                src: self.named_source(),
            })
        } else {
            Err(SyntaxError::UnexpectedToken {
                expected: kind.as_str().to_string(),
                found: self.peek().as_str().to_string(),
                span: self.current().span.into(),
                src: self.named_source(),
            })
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        self.source.to_named_source()
    }

    // ==================== PROGRAM ====================

    /// program := stmt* EOF
    ///
    /// Each statement becomes the `first` child of a `StmtList` whose `rest`
    /// is the chain for the remaining statements.
    fn parse_program(&mut self) -> Result<Option<Node>> {
        if self.at(TokenKind::Eof) {
            return Ok(None);
        }

        let first = self.parse_stmt()?;
        let rest = self.parse_program()?;

        Ok(Some(Node::new(
            0,
            NodeKind::StmtList {
                first: Box::new(first),
                rest: rest.map(Box::new),
            },
        )))
    }

    // ==================== STATEMENTS ====================

    fn parse_stmt(&mut self) -> Result<Node> {
        match self.peek() {
            TokenKind::If => self.parse_if(),
            TokenKind::Print => self.parse_print(),
            TokenKind::IntLit
            | TokenKind::Minus
            | TokenKind::StringLit
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Ident
            | TokenKind::LParen => {
                let expr = self.parse_expr()?;
                self.expect(TokenKind::Semi)?;
                Ok(expr)
            }
            _ => Err(SyntaxError::UnexpectedStatement {
                found: self.peek().as_str().to_string(),
                span: self.current().span.into(),
                src: self.named_source(),
            }
            .into()),
        }
    }

    /// if := 'if' '(' expr ')' stmt
    fn parse_if(&mut self) -> Result<Node> {
        let line = self.current().line;
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_stmt()?;

        Ok(Node::new(
            line,
            NodeKind::If {
                condition: Box::new(condition),
                body: Box::new(body),
            },
        ))
    }

    /// print := 'print' expr ';'
    fn parse_print(&mut self) -> Result<Node> {
        let line = self.current().line;
        self.expect(TokenKind::Print)?;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::Semi)?;

        Ok(Node::new(
            line,
            NodeKind::Print {
                expr: Box::new(expr),
            },
        ))
    }

    // ==================== EXPRESSIONS ====================

    /// expr := binary ('=' expr)?
    ///
    /// Assignment is right-associative and accepts any expression on the
    /// left; the identifier check happens at evaluation time.
    fn parse_expr(&mut self) -> Result<Node> {
        let left = self.parse_binary(0)?;

        if self.at(TokenKind::Eq) {
            let line = self.current().line;
            self.advance();
            let value = self.parse_expr()?;
            return Ok(Node::new(
                line,
                NodeKind::Assign {
                    target: Box::new(left),
                    value: Box::new(value),
                },
            ));
        }

        Ok(left)
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<Node> {
        let mut left = self.parse_primary()?;

        while let Some((op, prec)) = self.binary_op_info() {
            if prec < min_prec {
                break;
            }

            let line = self.current().line;
            self.advance();
            // All binary operators are left-associative
            let right = self.parse_binary(prec + 1)?;

            left = Node::new(
                line,
                NodeKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
            );
        }

        Ok(left)
    }

    fn binary_op_info(&self) -> Option<(BinaryOp, u8)> {
        let (op, prec) = match self.peek() {
            TokenKind::PipePipe => (BinaryOp::Or, 1),
            TokenKind::AmpAmp => (BinaryOp::And, 2),
            TokenKind::EqEq => (BinaryOp::Eq, 3),
            TokenKind::Ne => (BinaryOp::Ne, 3),
            TokenKind::Lt => (BinaryOp::Lt, 4),
            TokenKind::Le => (BinaryOp::Le, 4),
            TokenKind::Gt => (BinaryOp::Gt, 4),
            TokenKind::Ge => (BinaryOp::Ge, 4),
            TokenKind::Plus => (BinaryOp::Add, 5),
            TokenKind::Minus => (BinaryOp::Sub, 5),
            TokenKind::Star => (BinaryOp::Mul, 6),
            TokenKind::Slash => (BinaryOp::Div, 6),
            _ => return None,
        };
        Some((op, prec))
    }

    fn parse_primary(&mut self) -> Result<Node> {
        match self.peek() {
            TokenKind::IntLit => {
                let tok = self.advance();
                let line = tok.line;
                let value: i64 = tok.text.parse().unwrap_or(0);
                Ok(Node::new(line, NodeKind::IntConst(value)))
            }

            // A '-' directly before an integer literal is a negative
            // constant; the tree has no unary operator node.
            TokenKind::Minus => {
                self.advance();
                let tok = self.expect(TokenKind::IntLit)?;
                let line = tok.line;
                let value: i64 = tok.text.parse().unwrap_or(0);
                Ok(Node::new(line, NodeKind::IntConst(-value)))
            }

            TokenKind::StringLit => {
                let tok = self.advance();
                let line = tok.line;
                // Remove quotes
                let value = tok.text[1..tok.text.len() - 1].to_string();
                Ok(Node::new(line, NodeKind::StrConst(value)))
            }

            TokenKind::True => {
                let line = self.advance().line;
                Ok(Node::new(line, NodeKind::BoolConst(true)))
            }

            TokenKind::False => {
                let line = self.advance().line;
                Ok(Node::new(line, NodeKind::BoolConst(false)))
            }

            TokenKind::Ident => {
                let tok = self.advance();
                let line = tok.line;
                let name = tok.text.clone();
                Ok(Node::new(line, NodeKind::Ident(name)))
            }

            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }

            _ => Err(SyntaxError::UnexpectedToken {
                expected: "<expression>".to_string(),
                found: self.peek().as_str().to_string(),
                span: self.current().span.into(),
                src: self.named_source(),
            }
            .into()),
        }
    }
}
