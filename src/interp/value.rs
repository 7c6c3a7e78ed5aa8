//! Runtime values for the interpreter
//!
//! Every expression evaluates to a [`Value`]. Operators construct a new
//! value or report the semantic violation; they never mutate their
//! operands. The type compatibility rules per operator live here, so this
//! module carries most of the language's semantics.

use std::fmt;

use crate::diagnostics::RuntimeErrorKind;

/// Runtime value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),
    /// Boolean
    Bool(bool),
    /// String
    Str(String),
    /// Result of statement execution; never read by a program
    Uninit,
}

impl Value {
    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Str(_) => "string",
            Value::Uninit => "uninitialized",
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// True only for `Bool(true)`; any other value counts as false.
    /// The `||` rule depends on this: its non-boolean operand, when the
    /// other operand is boolean, contributes false rather than failing.
    pub fn is_true(&self) -> bool {
        matches!(self, Value::Bool(true))
    }

    /// Try to get as integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    // ==================== OPERATORS ====================

    /// `+`: integer sum or string concatenation
    pub fn add(&self, other: &Value) -> Result<Value, RuntimeErrorKind> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
            _ => Err(RuntimeErrorKind::CannotAdd),
        }
    }

    /// `-`: integer difference
    pub fn sub(&self, other: &Value) -> Result<Value, RuntimeErrorKind> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a - b)),
            _ => Err(RuntimeErrorKind::CannotSubtract),
        }
    }

    /// `*`: integer product, string repetition (count must be >= 0), or
    /// boolean negation when the integer operand is exactly -1
    pub fn mul(&self, other: &Value) -> Result<Value, RuntimeErrorKind> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a * b)),
            (Value::Int(n), Value::Str(s)) => {
                if *n >= 0 {
                    Ok(Value::Str(s.repeat(*n as usize)))
                } else {
                    Err(RuntimeErrorKind::NegativeRepeatInt)
                }
            }
            (Value::Str(s), Value::Int(n)) => {
                if *n >= 0 {
                    Ok(Value::Str(s.repeat(*n as usize)))
                } else {
                    Err(RuntimeErrorKind::NegativeRepeatString)
                }
            }
            (Value::Int(n), Value::Bool(b)) => {
                if *n == -1 {
                    Ok(Value::Bool(!b))
                } else {
                    Err(RuntimeErrorKind::InvalidLogic)
                }
            }
            _ => Err(RuntimeErrorKind::CannotMultiply),
        }
    }

    /// `/`: truncating integer quotient; divisor must be nonzero
    pub fn div(&self, other: &Value) -> Result<Value, RuntimeErrorKind> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => {
                if *b != 0 {
                    Ok(Value::Int(a / b))
                } else {
                    Err(RuntimeErrorKind::DivideByZero)
                }
            }
            _ => Err(RuntimeErrorKind::CannotDivide),
        }
    }

    /// `<`: integer or lexicographic string comparison
    pub fn lt(&self, other: &Value) -> Result<Value, RuntimeErrorKind> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a < b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Bool(a < b)),
            _ => Err(RuntimeErrorKind::CannotLess),
        }
    }

    /// `<=`
    pub fn le(&self, other: &Value) -> Result<Value, RuntimeErrorKind> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a <= b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Bool(a <= b)),
            _ => Err(RuntimeErrorKind::CannotLessEqual),
        }
    }

    /// `>`
    pub fn gt(&self, other: &Value) -> Result<Value, RuntimeErrorKind> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a > b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Bool(a > b)),
            _ => Err(RuntimeErrorKind::CannotGreater),
        }
    }

    /// `>=`
    pub fn ge(&self, other: &Value) -> Result<Value, RuntimeErrorKind> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a >= b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Bool(a >= b)),
            _ => Err(RuntimeErrorKind::CannotGreaterEqual),
        }
    }

    /// `==`: both operands must have the same type
    pub fn equal(&self, other: &Value) -> Result<Value, RuntimeErrorKind> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a == b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Bool(a == b)),
            (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(a == b)),
            _ => Err(RuntimeErrorKind::CannotEqual),
        }
    }

    /// `!=`: both operands must have the same type
    pub fn not_equal(&self, other: &Value) -> Result<Value, RuntimeErrorKind> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a != b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Bool(a != b)),
            (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(a != b)),
            _ => Err(RuntimeErrorKind::CannotNotEqual),
        }
    }

    /// `&&`: both operands must be boolean
    pub fn and(&self, other: &Value) -> Result<Value, RuntimeErrorKind> {
        if self.is_bool() && other.is_bool() {
            Ok(Value::Bool(self.is_true() && other.is_true()))
        } else {
            Err(RuntimeErrorKind::OperandNotBoolean)
        }
    }

    /// `||`: accepted when *either* operand is boolean; the non-boolean
    /// operand counts as false. Asymmetric with `&&` on purpose.
    pub fn or(&self, other: &Value) -> Result<Value, RuntimeErrorKind> {
        if self.is_bool() || other.is_bool() {
            Ok(Value::Bool(self.is_true() || other.is_true()))
        } else {
            Err(RuntimeErrorKind::OperandNotBoolean)
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Value::Str(s) => write!(f, "{}", s),
            Value::Uninit => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Value {
        Value::Int(n)
    }

    fn s(text: &str) -> Value {
        Value::Str(text.to_string())
    }

    #[test]
    fn test_add() {
        assert_eq!(int(2).add(&int(3)), Ok(int(5)));
        assert_eq!(s("foo").add(&s("bar")), Ok(s("foobar")));
        assert_eq!(int(1).add(&s("x")), Err(RuntimeErrorKind::CannotAdd));
        assert_eq!(
            Value::Bool(true).add(&Value::Bool(true)),
            Err(RuntimeErrorKind::CannotAdd)
        );
    }

    #[test]
    fn test_sub_is_integer_only() {
        assert_eq!(int(5).sub(&int(8)), Ok(int(-3)));
        assert_eq!(s("a").sub(&s("a")), Err(RuntimeErrorKind::CannotSubtract));
    }

    #[test]
    fn test_mul_repeat_both_orders() {
        assert_eq!(int(3).mul(&s("ab")), Ok(s("ababab")));
        assert_eq!(s("ab").mul(&int(3)), Ok(s("ababab")));
        assert_eq!(int(0).mul(&s("ab")), Ok(s("")));
    }

    #[test]
    fn test_mul_negative_repeat() {
        assert_eq!(
            int(-1).mul(&s("ab")),
            Err(RuntimeErrorKind::NegativeRepeatInt)
        );
        assert_eq!(
            s("ab").mul(&int(-1)),
            Err(RuntimeErrorKind::NegativeRepeatString)
        );
    }

    #[test]
    fn test_mul_boolean_negation() {
        assert_eq!(int(-1).mul(&Value::Bool(true)), Ok(Value::Bool(false)));
        assert_eq!(int(-1).mul(&Value::Bool(false)), Ok(Value::Bool(true)));
        assert_eq!(
            int(2).mul(&Value::Bool(true)),
            Err(RuntimeErrorKind::InvalidLogic)
        );
        // bool * int is not defined, even for -1
        assert_eq!(
            Value::Bool(true).mul(&int(-1)),
            Err(RuntimeErrorKind::CannotMultiply)
        );
    }

    #[test]
    fn test_div() {
        assert_eq!(int(7).div(&int(2)), Ok(int(3)));
        assert_eq!(int(-7).div(&int(2)), Ok(int(-3)));
        assert_eq!(int(7).div(&int(0)), Err(RuntimeErrorKind::DivideByZero));
        assert_eq!(s("a").div(&int(1)), Err(RuntimeErrorKind::CannotDivide));
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(int(1).lt(&int(2)), Ok(Value::Bool(true)));
        assert_eq!(s("abc").lt(&s("abd")), Ok(Value::Bool(true)));
        assert_eq!(s("b").ge(&s("a")), Ok(Value::Bool(true)));
        assert_eq!(int(1).lt(&s("2")), Err(RuntimeErrorKind::CannotLess));
        assert_eq!(int(1).le(&s("2")), Err(RuntimeErrorKind::CannotLessEqual));
        assert_eq!(int(1).gt(&s("2")), Err(RuntimeErrorKind::CannotGreater));
        assert_eq!(
            int(1).ge(&s("2")),
            Err(RuntimeErrorKind::CannotGreaterEqual)
        );
    }

    #[test]
    fn test_equality_rejects_cross_type() {
        assert_eq!(int(1).equal(&int(1)), Ok(Value::Bool(true)));
        assert_eq!(
            Value::Bool(true).equal(&Value::Bool(true)),
            Ok(Value::Bool(true))
        );
        assert_eq!(int(1).equal(&s("1")), Err(RuntimeErrorKind::CannotEqual));
        assert_eq!(
            int(1).not_equal(&Value::Bool(true)),
            Err(RuntimeErrorKind::CannotNotEqual)
        );
    }

    #[test]
    fn test_and_requires_both_boolean() {
        assert_eq!(
            Value::Bool(true).and(&Value::Bool(false)),
            Ok(Value::Bool(false))
        );
        assert_eq!(
            int(5).and(&Value::Bool(true)),
            Err(RuntimeErrorKind::OperandNotBoolean)
        );
        assert_eq!(
            Value::Bool(true).and(&int(5)),
            Err(RuntimeErrorKind::OperandNotBoolean)
        );
    }

    #[test]
    fn test_or_accepts_one_boolean() {
        // The non-boolean operand counts as false
        assert_eq!(int(5).or(&Value::Bool(true)), Ok(Value::Bool(true)));
        assert_eq!(int(5).or(&Value::Bool(false)), Ok(Value::Bool(false)));
        assert_eq!(Value::Bool(true).or(&int(5)), Ok(Value::Bool(true)));
        assert_eq!(int(5).or(&int(6)), Err(RuntimeErrorKind::OperandNotBoolean));
    }

    #[test]
    fn test_display() {
        assert_eq!(int(42).to_string(), "42");
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Bool(false).to_string(), "False");
        assert_eq!(s("hi").to_string(), "hi");
        assert_eq!(Value::Uninit.to_string(), "");
    }
}
