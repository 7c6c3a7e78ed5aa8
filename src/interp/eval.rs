//! Tree-walking evaluator
//!
//! Walks the program tree depth-first, threading the mutable environment
//! through every node. The first semantic violation wins: evaluation stops
//! immediately and the environment keeps whatever partial state it had.
//! Recursion depth equals tree depth, so pathologically nested programs
//! exhaust the call stack; that limit is inherited, not guarded.

use crate::ast::{BinaryOp, Node, NodeKind};
use crate::diagnostics::{RuntimeError, RuntimeErrorKind};

use super::env::Environment;
use super::value::Value;

/// Tree-walking interpreter
pub struct Interpreter {
    /// Variable environment
    env: Environment,
    /// Most recently visited statement's line, used for diagnostics
    line: usize,
    /// Output buffer mirroring stdout, for testing
    output: Vec<String>,
}

impl Interpreter {
    /// Create a new interpreter with an empty environment
    pub fn new() -> Self {
        Interpreter {
            env: Environment::new(),
            line: 0,
            output: Vec::new(),
        }
    }

    /// Get captured output (for testing)
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Get the variable environment
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Evaluate a program tree to completion
    pub fn run(&mut self, root: &Node) -> Result<Value, RuntimeError> {
        tracing::debug!("evaluating program tree");
        self.eval(root)
    }

    fn eval(&mut self, node: &Node) -> Result<Value, RuntimeError> {
        match &node.kind {
            NodeKind::StmtList { first, rest } => {
                self.eval(first)?;
                if let Some(rest) = rest {
                    self.eval(rest)?;
                }
                Ok(Value::Uninit)
            }

            NodeKind::If { condition, body } => {
                self.line = node.line;
                let cond = self.eval(condition)?;
                if !cond.is_bool() {
                    return Err(self.fail(RuntimeErrorKind::ConditionNotBoolean));
                }
                if cond.is_true() {
                    self.eval(body)
                } else {
                    Ok(Value::Uninit)
                }
            }

            NodeKind::Assign { target, value } => {
                self.line = node.line;
                let Some(name) = target.as_ident() else {
                    return Err(self.fail(RuntimeErrorKind::AssignTargetNotIdent));
                };
                let name = name.to_string();
                let stored = self.eval(value)?;
                self.env.set(name, stored);
                // The node's own result is a second evaluation of the
                // right-hand side; its side effects run again.
                self.eval(value)
            }

            NodeKind::Print { expr } => {
                self.line = node.line;
                let value = self.eval(expr)?;
                let text = value.to_string();
                println!("{}", text);
                self.output.push(text);
                Ok(Value::Uninit)
            }

            NodeKind::Binary { op, left, right } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                self.apply(*op, &lhs, &rhs)
            }

            NodeKind::IntConst(n) => Ok(Value::Int(*n)),
            NodeKind::BoolConst(b) => Ok(Value::Bool(*b)),
            NodeKind::StrConst(s) => Ok(Value::Str(s.clone())),

            NodeKind::Ident(name) => match self.env.get(name) {
                Some(value) => Ok(value),
                None => Err(self.fail(RuntimeErrorKind::IdentifierNotFound)),
            },
        }
    }

    fn apply(&self, op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value, RuntimeError> {
        let result = match op {
            BinaryOp::Add => lhs.add(rhs),
            BinaryOp::Sub => lhs.sub(rhs),
            BinaryOp::Mul => lhs.mul(rhs),
            BinaryOp::Div => lhs.div(rhs),
            BinaryOp::And => lhs.and(rhs),
            BinaryOp::Or => lhs.or(rhs),
            BinaryOp::Eq => lhs.equal(rhs),
            BinaryOp::Ne => lhs.not_equal(rhs),
            BinaryOp::Lt => lhs.lt(rhs),
            BinaryOp::Le => lhs.le(rhs),
            BinaryOp::Gt => lhs.gt(rhs),
            BinaryOp::Ge => lhs.ge(rhs),
        };
        result.map_err(|kind| self.fail(kind))
    }

    fn fail(&self, kind: RuntimeErrorKind) -> RuntimeError {
        RuntimeError::new(self.line, kind)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
