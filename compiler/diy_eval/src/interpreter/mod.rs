//! Tree-walking interpreter for DIY Lisp.
//!
//! # Evaluation rules
//!
//! - A Symbol evaluates to its binding in the current environment.
//! - A List is a form: special-form keywords in head position are handled by
//!   fixed rules (`special_forms.rs`); a closure head is applied, and any
//!   other head is evaluated and the form dispatched again with the result
//!   in head position (`function_call.rs`).
//! - Integers, booleans, strings and closures evaluate to themselves.
//!
//! Every recursive step runs inside `ensure_sufficient_stack`, so deep
//! programs grow the native stack instead of crashing. Closure applications
//! are tracked on a [`CallStack`] whose depth limit comes from the
//! [`EvalMode`].

mod builder;
mod function_call;
mod special_forms;

pub use builder::InterpreterBuilder;

use diy_stack::ensure_sufficient_stack;
use diy_value::{empty_application, Environment, EvalResult, Value};

use crate::diagnostics::CallStack;
use crate::eval_mode::{EvalMode, ModeState};

/// Evaluator state for one root environment.
///
/// `define` at top level binds into the root environment, so a REPL keeps a
/// single `Interpreter` alive and feeds it successive forms.
pub struct Interpreter {
    env: Environment,
    mode: EvalMode,
    mode_state: ModeState,
    call_stack: CallStack,
}

impl Interpreter {
    /// Interpreter over a fresh root environment in `Interpret` mode.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The root environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn mode(&self) -> &EvalMode {
        &self.mode
    }

    /// Closure applications made so far, across every call to `eval`.
    pub fn calls_made(&self) -> usize {
        self.mode_state.calls()
    }

    /// Closure applications currently in progress.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Evaluate `ast` in the root environment.
    pub fn eval(&mut self, ast: &Value) -> EvalResult {
        let env = self.env.clone();
        self.eval_in(ast, &env)
    }

    /// Evaluate top-level forms in order, returning the last value.
    ///
    /// An empty program evaluates to `#f`. The first error stops the run;
    /// definitions made before it stay in the root environment.
    pub fn eval_program(&mut self, forms: &[Value]) -> EvalResult {
        let mut last = Value::Bool(false);
        for form in forms {
            last = self.eval(form)?;
        }
        Ok(last)
    }

    /// Evaluate `ast` in `env`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn eval_in(&mut self, ast: &Value, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(ast, env))
    }

    fn eval_inner(&mut self, ast: &Value, env: &Environment) -> EvalResult {
        match ast {
            Value::Symbol(symbol) => env.lookup(*symbol),
            Value::List(items) => self.eval_list(items, env),
            Value::Int(_) | Value::Bool(_) | Value::Str(_) | Value::Closure(_) => Ok(ast.clone()),
        }
    }

    fn eval_list(&mut self, items: &[Value], env: &Environment) -> EvalResult {
        let Some((first, rest)) = items.split_first() else {
            return Err(empty_application());
        };
        self.eval_form(first, rest, env)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
