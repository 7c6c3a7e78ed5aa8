//! Abstract syntax tree for the Rill language
//!
//! This module defines the tree produced by the parser and walked by the
//! interpreter. Each node carries the 1-based source line it came from;
//! statement lists carry line 0 since they never appear in diagnostics.

use serde::{Deserialize, Serialize};

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinaryOp {
    /// Source spelling of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        }
    }
}

/// One node of the program tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub line: usize,
    pub kind: NodeKind,
}

/// Node kinds
///
/// Statement sequencing is the right-threaded `StmtList` chain: `rest` is
/// either another `StmtList` or absent, so the statement sequence is a
/// singly linked list expressed through the tree shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    StmtList {
        first: Box<Node>,
        rest: Option<Box<Node>>,
    },
    If {
        condition: Box<Node>,
        body: Box<Node>,
    },
    Assign {
        target: Box<Node>,
        value: Box<Node>,
    },
    Print {
        expr: Box<Node>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    IntConst(i64),
    BoolConst(bool),
    StrConst(String),
    Ident(String),
}

impl Node {
    pub fn new(line: usize, kind: NodeKind) -> Self {
        Self { line, kind }
    }

    /// Capability query used by assignment: the stored name for identifier
    /// nodes, `None` for every other kind
    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Ident(name) => Some(name),
            _ => None,
        }
    }
}
