//! DIY Value - the data model shared by the evaluator and its hosts.
//!
//! - [`Value`]: the tagged union that doubles as the AST. Lists are forms,
//!   leading symbols are operators, everything else is a literal.
//! - [`Environment`]: a frame of symbol bindings, shared by every closure
//!   created in it and copied (never mutated) when extended.
//! - [`Closure`]: parameters, body and the captured frame.
//! - [`EvalError`]: the single error type every evaluation step returns.
//!
//! Heap-backed values (`Str`, `List`, `Closure`) can only be built through
//! the factory methods on `Value`, so nothing outside this crate can alias a
//! list mutably.

mod environment;
pub mod errors;
mod value;

pub use environment::Environment;
pub use errors::{
    already_defined, arity_error, budget_exceeded, division_by_zero, empty_application,
    integer_overflow, invalid_define, invalid_lambda, modulo_by_zero, not_callable,
    stack_overflow, type_error, undefined_symbol, unsupported_operator, BacktraceFrame,
    EvalBacktrace, EvalError, EvalErrorKind, EvalResult,
};
pub use value::{
    Closure, Heap, Params, ScalarInt, Truncated, Value, DISPLAY_DEPTH_LIMIT, DISPLAY_LENGTH_LIMIT,
};

pub use diy_ir::Symbol;
