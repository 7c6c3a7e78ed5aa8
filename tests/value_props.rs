//! Property tests for the value operator contracts

use proptest::prelude::*;

use rill::diagnostics::RuntimeErrorKind;
use rill::interp::Value;

// Ranges keep the arithmetic away from i64 overflow; the operators use
// plain integer arithmetic like the source language's.
const INT: std::ops::Range<i64> = -1_000_000..1_000_000;

proptest! {
    #[test]
    fn add_is_integer_sum(a in INT, b in INT) {
        prop_assert_eq!(Value::Int(a).add(&Value::Int(b)), Ok(Value::Int(a + b)));
    }

    #[test]
    fn sub_is_integer_difference(a in INT, b in INT) {
        prop_assert_eq!(Value::Int(a).sub(&Value::Int(b)), Ok(Value::Int(a - b)));
    }

    #[test]
    fn mul_is_integer_product(a in -1000i64..1000, b in -1000i64..1000) {
        prop_assert_eq!(Value::Int(a).mul(&Value::Int(b)), Ok(Value::Int(a * b)));
    }

    #[test]
    fn div_truncates(a in INT, b in INT) {
        prop_assume!(b != 0);
        prop_assert_eq!(Value::Int(a).div(&Value::Int(b)), Ok(Value::Int(a / b)));
    }

    #[test]
    fn div_by_zero_is_fatal_for_any_dividend(a in INT) {
        prop_assert_eq!(
            Value::Int(a).div(&Value::Int(0)),
            Err(RuntimeErrorKind::DivideByZero)
        );
    }

    #[test]
    fn concat_appends(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        let expected = format!("{a}{b}");
        prop_assert_eq!(
            Value::Str(a).add(&Value::Str(b)),
            Ok(Value::Str(expected))
        );
    }

    #[test]
    fn string_comparisons_are_lexicographic(a in "[a-z]{0,8}", b in "[a-z]{0,8}") {
        prop_assert_eq!(
            Value::Str(a.clone()).lt(&Value::Str(b.clone())),
            Ok(Value::Bool(a < b))
        );
        prop_assert_eq!(
            Value::Str(a.clone()).le(&Value::Str(b.clone())),
            Ok(Value::Bool(a <= b))
        );
        prop_assert_eq!(
            Value::Str(a.clone()).gt(&Value::Str(b.clone())),
            Ok(Value::Bool(a > b))
        );
        prop_assert_eq!(
            Value::Str(a.clone()).ge(&Value::Str(b.clone())),
            Ok(Value::Bool(a >= b))
        );
    }

    #[test]
    fn repetition_matches_in_both_operand_orders(s in "[a-z]{0,6}", n in 0i64..32) {
        let expected = s.repeat(n as usize);
        prop_assert_eq!(
            Value::Int(n).mul(&Value::Str(s.clone())),
            Ok(Value::Str(expected.clone()))
        );
        prop_assert_eq!(
            Value::Str(s).mul(&Value::Int(n)),
            Ok(Value::Str(expected))
        );
    }

    #[test]
    fn negative_repetition_is_fatal(s in "[a-z]{0,6}", n in -1000i64..0) {
        prop_assert_eq!(
            Value::Int(n).mul(&Value::Str(s.clone())),
            Err(RuntimeErrorKind::NegativeRepeatInt)
        );
        prop_assert_eq!(
            Value::Str(s).mul(&Value::Int(n)),
            Err(RuntimeErrorKind::NegativeRepeatString)
        );
    }

    #[test]
    fn only_minus_one_negates_a_boolean(n in INT, b in any::<bool>()) {
        let result = Value::Int(n).mul(&Value::Bool(b));
        if n == -1 {
            prop_assert_eq!(result, Ok(Value::Bool(!b)));
        } else {
            prop_assert_eq!(result, Err(RuntimeErrorKind::InvalidLogic));
        }
    }

    #[test]
    fn cross_type_equality_is_fatal(n in INT, s in "[a-z]{0,6}", b in any::<bool>()) {
        prop_assert_eq!(
            Value::Int(n).equal(&Value::Str(s.clone())),
            Err(RuntimeErrorKind::CannotEqual)
        );
        prop_assert_eq!(
            Value::Str(s).equal(&Value::Bool(b)),
            Err(RuntimeErrorKind::CannotEqual)
        );
        prop_assert_eq!(
            Value::Bool(b).equal(&Value::Int(n)),
            Err(RuntimeErrorKind::CannotEqual)
        );
    }

    #[test]
    fn integer_comparisons_agree_with_native_order(a in INT, b in INT) {
        prop_assert_eq!(Value::Int(a).lt(&Value::Int(b)), Ok(Value::Bool(a < b)));
        prop_assert_eq!(Value::Int(a).ge(&Value::Int(b)), Ok(Value::Bool(a >= b)));
    }
}
