//! Closure creation, capture and application.

use super::{error_kind, run, run_program};
use crate::{evaluate, Environment, EvalErrorKind, Symbol, Value};
use pretty_assertions::assert_eq;

#[test]
fn immediate_application() {
    assert_eq!(
        run(&sexp!(((lambda (x) (+ x 1)) 5))).unwrap(),
        Value::int(6)
    );
}

#[test]
fn zero_parameter_closure() {
    assert_eq!(run(&sexp!(((lambda () 42)))).unwrap(), Value::int(42));
}

#[test]
fn make_adder_captures_lexically() {
    let program = [
        sexp!((define make_adder (lambda (x) (lambda (y) (+ x y))))),
        sexp!(((make_adder 3) 4)),
    ];
    assert_eq!(run_program(&program).unwrap(), Value::int(7));
}

#[test]
fn captured_binding_is_independent_of_later_frames() {
    let env = Environment::new();
    evaluate(&sexp!((define make_adder (lambda (x) (lambda (y) (+ x y))))), &env).unwrap();
    evaluate(&sexp!((define add3 (make_adder 3))), &env).unwrap();
    // A call-site binding of `x` does not leak into the closure.
    let ast = sexp!(((lambda (x) (add3 1)) 100));
    assert_eq!(evaluate(&ast, &env).unwrap(), Value::int(4));
}

#[test]
fn arguments_are_evaluated_in_caller_env() {
    let env = Environment::from_bindings([(Symbol::intern("y"), Value::int(10))]);
    let ast = sexp!(((lambda (x) x) (+ y 1)));
    assert_eq!(evaluate(&ast, &env).unwrap(), Value::int(11));
}

#[test]
fn parameters_shadow_outer_bindings() {
    let env = Environment::from_bindings([(Symbol::intern("x"), Value::int(1))]);
    assert_eq!(
        evaluate(&sexp!(((lambda (x) x) 2)), &env).unwrap(),
        Value::int(2)
    );
    assert_eq!(evaluate(&sexp!(x), &env).unwrap(), Value::int(1));
}

#[test]
fn application_does_not_touch_callers_frame() {
    let env = Environment::new();
    evaluate(&sexp!(((lambda (z) z) 1)), &env).unwrap();
    assert!(!env.contains(Symbol::intern("z")));
}

#[test]
fn define_inside_body_stays_local() {
    let env = Environment::new();
    let ast = sexp!(((lambda (x) (define inner x)) 5));
    assert_eq!(evaluate(&ast, &env).unwrap(), sexp!(inner));
    assert!(!env.contains(Symbol::intern("inner")));
}

#[test]
fn recursive_definition() {
    let program = [
        sexp!((define fact (lambda (n) (if (eq n 0) 1 (* n (fact (- n 1))))))),
        sexp!((fact 10)),
    ];
    assert_eq!(run_program(&program).unwrap(), Value::int(3_628_800));
}

#[test]
fn mutual_recursion() {
    let program = [
        sexp!((define is_even (lambda (n) (if (eq n 0) true (is_odd (- n 1)))))),
        sexp!((define is_odd (lambda (n) (if (eq n 0) false (is_even (- n 1)))))),
        sexp!((is_even 10)),
    ];
    assert_eq!(run_program(&program).unwrap(), Value::Bool(true));
}

#[test]
fn higher_order_functions() {
    let program = [
        sexp!((define map (lambda (f xs)
            (if (empty xs)
                (quote ())
                (cons (f (head xs)) (map f (tail xs))))))),
        sexp!((map (lambda (x) (* x x)) (quote (1 2 3)))),
    ];
    assert_eq!(run_program(&program).unwrap(), sexp!((1 4 9)));
}

#[test]
fn closure_value_is_self_evaluating() {
    let closure = run(&sexp!((lambda (x) x))).unwrap();
    assert_eq!(run(&closure).unwrap(), closure);
    let ast = Value::list(vec![closure, Value::int(9)]);
    assert_eq!(run(&ast).unwrap(), Value::int(9));
}

#[test]
fn arity_mismatch() {
    let env = Environment::new();
    evaluate(&sexp!((define add (lambda (a b) (+ a b)))), &env).unwrap();
    let few = evaluate(&sexp!((add 1)), &env).unwrap_err();
    assert_eq!(
        few.kind,
        EvalErrorKind::ArityError {
            name: "add".to_string(),
            expected: 2,
            got: 1
        }
    );
    assert_eq!(few.message, "add expects 2 arguments, got 1");
    assert!(matches!(
        error_kind(evaluate(&sexp!((add 1 2 3)), &env)),
        EvalErrorKind::ArityError { expected: 2, got: 3, .. }
    ));
}

#[test]
fn anonymous_arity_mismatch() {
    let err = run(&sexp!(((lambda (x) x)))).unwrap_err();
    assert_eq!(err.message, "expected 1 argument, got 0");
}

#[test]
fn arity_is_checked_before_arguments() {
    let env = Environment::new();
    evaluate(&sexp!((define one (lambda (a) a))), &env).unwrap();
    assert!(matches!(
        error_kind(evaluate(&sexp!((one undefined_a undefined_b)), &env)),
        EvalErrorKind::ArityError { .. }
    ));
}
