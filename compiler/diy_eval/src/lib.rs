#![deny(clippy::arithmetic_side_effects)]
//! DIY Eval - evaluator for DIY Lisp.
//!
//! Takes an already-parsed [`Value`] AST and an [`Environment`] and produces
//! a value or an [`EvalError`]. Parsing and printing live outside this crate.
//!
//! # Architecture
//!
//! - `Interpreter`: recursive evaluation, special-form handlers, closure
//!   application
//! - `SpecialForm`: keyword dispatch table resolved from the head symbol
//! - `evaluate_binary`: checked integer operators
//! - `CallStack`: application depth limit and error backtraces
//! - `EvalMode`: unbounded interpretation or a call budget
//!
//! # Example
//!
//! ```
//! use diy_eval::{evaluate, Environment, Value};
//!
//! // ((lambda (x) (+ x 1)) 5)
//! let ast = Value::list(vec![
//!     Value::list(vec![
//!         Value::symbol("lambda"),
//!         Value::list(vec![Value::symbol("x")]),
//!         Value::list(vec![Value::symbol("+"), Value::symbol("x"), Value::int(1)]),
//!     ]),
//!     Value::int(5),
//! ]);
//! assert_eq!(evaluate(&ast, &Environment::new()).ok(), Some(Value::int(6)));
//! ```

mod diagnostics;
mod eval_mode;
mod interpreter;
mod operators;
mod special_form;

use std::sync::Once;

pub use diagnostics::{CallFrame, CallStack, BACKTRACE_LIMIT};
pub use eval_mode::{EvalMode, ModeState, DEFAULT_MAX_CALL_DEPTH};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, BinaryOp};
pub use special_form::SpecialForm;

pub use diy_value::{
    BacktraceFrame, Closure, Environment, EvalBacktrace, EvalError, EvalErrorKind, EvalResult,
    Symbol, Value,
};

/// Evaluate `ast` in `env` with a fresh `Interpret`-mode interpreter.
///
/// Top-level `define`s bind into `env` itself.
pub fn evaluate(ast: &Value, env: &Environment) -> EvalResult {
    InterpreterBuilder::new().env(env.clone()).build().eval(ast)
}

/// Evaluate top-level forms in order against one root frame, returning the
/// value of the last one (`#f` for an empty program).
pub fn evaluate_program(forms: &[Value], env: &Environment) -> EvalResult {
    InterpreterBuilder::new()
        .env(env.clone())
        .build()
        .eval_program(forms)
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or a global subscriber already
/// exists. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

#[cfg(test)]
mod tests;
