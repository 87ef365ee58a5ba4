//! Property tests for evaluation laws that hold for every input.

use crate::{evaluate, Environment, Value};
use proptest::prelude::*;

fn atom() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::int),
        any::<bool>().prop_map(Value::Bool),
        "[a-z][a-z0-9_]{0,7}".prop_map(|s| Value::symbol(&s)),
        "[ -~]{0,12}".prop_map(Value::string),
    ]
}

fn ast() -> impl Strategy<Value = Value> {
    atom().prop_recursive(4, 32, 5, |inner| {
        proptest::collection::vec(inner, 0..5).prop_map(Value::list)
    })
}

fn quoted(value: Value) -> Value {
    Value::list(vec![Value::symbol("quote"), value])
}

fn binary(op: &str, a: i64, b: i64) -> Value {
    Value::list(vec![Value::symbol(op), Value::int(a), Value::int(b)])
}

proptest! {
    #[test]
    fn integers_self_evaluate(n in any::<i64>()) {
        let result = evaluate(&Value::int(n), &Environment::new());
        prop_assert_eq!(result.ok(), Some(Value::int(n)));
    }

    #[test]
    fn strings_self_evaluate(s in ".{0,16}") {
        let result = evaluate(&Value::string(s.clone()), &Environment::new());
        prop_assert_eq!(result.ok(), Some(Value::string(s)));
    }

    #[test]
    fn quote_is_identity(value in ast()) {
        let result = evaluate(&quoted(value.clone()), &Environment::new());
        prop_assert_eq!(result.ok(), Some(value));
    }

    #[test]
    fn floor_division_law(
        a in -1_000_000_000_000i64..1_000_000_000_000,
        b in (-1_000_000i64..1_000_000).prop_filter("non-zero", |b| *b != 0),
    ) {
        // a == b * (a / b) + (a mod b)
        let env = Environment::new();
        let law = Value::list(vec![
            Value::symbol("+"),
            Value::list(vec![Value::symbol("*"), Value::int(b), binary("/", a, b)]),
            binary("mod", a, b),
        ]);
        prop_assert_eq!(evaluate(&law, &env).ok(), Some(Value::int(a)));
    }

    #[test]
    fn modulo_has_divisor_sign(
        a in any::<i64>(),
        b in any::<i64>().prop_filter("non-zero", |b| *b != 0),
    ) {
        let result = evaluate(&binary("mod", a, b), &Environment::new());
        let r = result.ok().and_then(|v| v.as_int()).map(diy_value::ScalarInt::raw);
        prop_assert!(r.is_some());
        let r = r.unwrap_or_default();
        prop_assert!(r == 0 || (r < 0) == (b < 0));
        prop_assert!(r.unsigned_abs() < b.unsigned_abs());
    }

    #[test]
    fn gt_matches_integer_order(a in any::<i64>(), b in any::<i64>()) {
        let result = evaluate(&binary(">", a, b), &Environment::new());
        prop_assert_eq!(result.ok(), Some(Value::Bool(a > b)));
    }
}
