use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages_match_kinds() {
    let cases = [
        (undefined_symbol(Symbol::intern("x")), "undefined symbol: x"),
        (already_defined(Symbol::intern("x")), "x is already defined"),
        (
            invalid_lambda("parameters must be a list"),
            "invalid lambda: parameters must be a list",
        ),
        (
            invalid_define("first operand must be a symbol"),
            "invalid define: first operand must be a symbol",
        ),
        (empty_application(), "cannot evaluate empty list"),
        (not_callable(&Value::int(1)), "1 is not a function"),
        (unsupported_operator(Symbol::intern("^")), "operator ^ not supported"),
        (division_by_zero(), "division by zero"),
        (modulo_by_zero(), "modulo by zero"),
        (integer_overflow("*"), "integer overflow in *"),
        (
            stack_overflow(10),
            "maximum recursion depth exceeded (limit: 10)",
        ),
        (
            budget_exceeded(6, 5),
            "evaluation budget exceeded: 6 calls (budget: 5)",
        ),
    ];
    for (err, expected) in cases {
        assert_eq!(err.message, expected);
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.kind.to_string(), expected);
    }
}

#[test]
fn arity_messages() {
    assert_eq!(arity_error("", 2, 1).message, "expected 2 arguments, got 1");
    assert_eq!(arity_error("head", 1, 0).message, "head expects 1 argument, got 0");
    assert_eq!(
        arity_error("add", 2, 3).kind,
        EvalErrorKind::ArityError {
            name: "add".to_string(),
            expected: 2,
            got: 3,
        }
    );
}

#[test]
fn type_error_renders_the_operand() {
    let got = Value::list(vec![Value::int(1), Value::symbol("a")]);
    let err = type_error(Symbol::intern("+"), "an integer", &got);
    assert_eq!(err.message, "+ expects an integer, got (1 a)");
}

#[test]
fn backtrace_attaches_once() {
    let inner = EvalBacktrace::new(vec![
        BacktraceFrame {
            name: "fact".to_string(),
        },
        BacktraceFrame {
            name: "<lambda>".to_string(),
        },
    ]);
    let outer = EvalBacktrace::new(vec![BacktraceFrame {
        name: "<lambda>".to_string(),
    }]);
    let err = division_by_zero()
        .with_backtrace(inner.clone())
        .with_backtrace(outer);
    assert_eq!(err.backtrace, Some(inner));
}

#[test]
fn empty_backtrace_is_not_attached() {
    let err = division_by_zero().with_backtrace(EvalBacktrace::default());
    assert!(err.backtrace.is_none());
}

#[test]
fn backtrace_display() {
    let bt = EvalBacktrace::new(vec![
        BacktraceFrame {
            name: "f".to_string(),
        },
        BacktraceFrame {
            name: "g".to_string(),
        },
    ]);
    assert_eq!(bt.len(), 2);
    assert_eq!(bt.frames()[0].name, "f");
    assert_eq!(bt.to_string(), "backtrace:\n  0: f\n  1: g\n");
    assert_eq!(EvalBacktrace::default().to_string(), "");
}

#[test]
fn from_kind_conversion() {
    let err: EvalError = EvalErrorKind::EmptyApplication.into();
    assert_eq!(err.message, "cannot evaluate empty list");
    assert!(err.backtrace.is_none());
}

#[test]
fn operands_are_rendered_truncated() {
    let long = Value::list((0..1000).map(Value::int).collect());
    let err = type_error(Symbol::ADD, "an integer", &long);
    assert!(err.message.starts_with("+ expects an integer, got (0 1 2 "));
    assert!(err.message.ends_with(" ...)"));
    assert!(err.message.len() < 400);

    let mut deep = Value::nil();
    for _ in 0..1000 {
        deep = Value::list(vec![deep]);
    }
    let err = not_callable(&deep);
    assert!(err.message.contains("(...)"));
    assert!(err.message.len() < 200);
}
