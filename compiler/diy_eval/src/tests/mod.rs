//! Evaluator test suites.
//!
//! ASTs are written with `sexp!`: parenthesised groups become lists,
//! identifiers become symbols, literals become atoms. Symbols containing `-`
//! are written with `_` instead, and negative numbers go through
//! `Value::int` directly.

use crate::{evaluate, evaluate_program, Environment, EvalErrorKind, EvalResult, Value};

macro_rules! sexp {
    (($($item:tt)*)) => { $crate::Value::list(vec![$(sexp!($item)),*]) };
    (+) => { $crate::Value::symbol("+") };
    (-) => { $crate::Value::symbol("-") };
    (*) => { $crate::Value::symbol("*") };
    (/) => { $crate::Value::symbol("/") };
    (>) => { $crate::Value::symbol(">") };
    ($lit:literal) => { $crate::tests::Atom::into_value($lit) };
    ($name:ident) => { $crate::Value::symbol(stringify!($name)) };
}

pub(crate) trait Atom {
    fn into_value(self) -> Value;
}

impl Atom for i32 {
    fn into_value(self) -> Value {
        Value::int(i64::from(self))
    }
}

impl Atom for i64 {
    fn into_value(self) -> Value {
        Value::int(self)
    }
}

impl Atom for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl Atom for &str {
    fn into_value(self) -> Value {
        Value::string(self)
    }
}

/// Evaluate in a fresh root environment.
pub(crate) fn run(ast: &Value) -> EvalResult {
    evaluate(ast, &Environment::new())
}

/// Evaluate a program in a fresh root environment.
pub(crate) fn run_program(forms: &[Value]) -> EvalResult {
    evaluate_program(forms, &Environment::new())
}

/// The kind of the error `result` failed with.
pub(crate) fn error_kind(result: EvalResult) -> EvalErrorKind {
    match result {
        Ok(value) => panic!("expected an error, got {value}"),
        Err(err) => err.kind,
    }
}

#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod closure_tests;
mod property_tests;
