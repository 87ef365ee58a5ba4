//! Evaluation errors.
//!
//! Every failure is an [`EvalError`]: a structured [`EvalErrorKind`], the
//! rendered message, and (once it has crossed a closure application) a
//! backtrace. Errors are never recovered from inside the evaluator; the
//! host driver reports them and moves on to its next input.
//!
//! Build errors with the `#[cold]` factory functions below rather than by
//! hand, so `message` always matches `kind`.

use std::fmt;

use crate::{Symbol, Value};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Environment
    #[error("undefined symbol: {name}")]
    UndefinedSymbol { name: Symbol },
    #[error("{name} is already defined")]
    AlreadyDefined { name: Symbol },

    // Special-form misuse
    #[error("invalid lambda: {reason}")]
    InvalidLambda { reason: String },
    #[error("invalid define: {reason}")]
    InvalidDefine { reason: String },
    #[error("{}", arity_message(name, *expected, *got))]
    ArityError {
        name: String,
        expected: usize,
        got: usize,
    },

    // Operand kinds
    #[error("{form} expects {expected}, got {got}")]
    TypeError {
        form: Symbol,
        expected: &'static str,
        got: String,
    },

    // Application
    #[error("cannot evaluate empty list")]
    EmptyApplication,
    #[error("{value} is not a function")]
    NotCallable { value: String },
    #[error("operator {operator} not supported")]
    UnsupportedOperator { operator: Symbol },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Resource limits
    #[error("maximum recursion depth exceeded (limit: {depth})")]
    StackOverflow { depth: usize },
    #[error("evaluation budget exceeded: {calls} calls (budget: {budget})")]
    BudgetExceeded { budget: u32, calls: usize },
}

fn arity_message(name: &str, expected: usize, got: usize) -> String {
    let arg_word = if expected == 1 {
        "argument"
    } else {
        "arguments"
    };
    if name.is_empty() {
        format!("expected {expected} {arg_word}, got {got}")
    } else {
        format!("{name} expects {expected} {arg_word}, got {got}")
    }
}

/// One active closure application at the point an error was raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// The symbol the closure was called through, or `<lambda>`.
    pub name: String,
}

/// Snapshot of the interpreter's call stack, innermost call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {}", frame.name)?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured category, for matching.
    pub kind: EvalErrorKind,
    /// Human-readable message; always `kind.to_string()`.
    pub message: String,
    /// Closure applications active when the error was raised.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            backtrace: None,
        }
    }

    /// Attach a backtrace. An existing one is kept: the innermost capture
    /// already holds every outer frame.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        if self.backtrace.is_none() && !backtrace.is_empty() {
            self.backtrace = Some(backtrace);
        }
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

// Environment Errors

#[cold]
pub fn undefined_symbol(name: Symbol) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedSymbol { name })
}

#[cold]
pub fn already_defined(name: Symbol) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AlreadyDefined { name })
}

// Special Form Errors

#[cold]
pub fn invalid_lambda(reason: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidLambda {
        reason: reason.into(),
    })
}

#[cold]
pub fn invalid_define(reason: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidDefine {
        reason: reason.into(),
    })
}

/// Wrong number of operands. `name` is the form or function name, or empty.
#[cold]
pub fn arity_error(name: impl Into<String>, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityError {
        name: name.into(),
        expected,
        got,
    })
}

/// `form` received `got` where it needs `expected` (e.g. "a non-empty list").
#[cold]
pub fn type_error(form: Symbol, expected: &'static str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeError {
        form,
        expected,
        got: got.truncated().to_string(),
    })
}

// Application Errors

#[cold]
pub fn empty_application() -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyApplication)
}

#[cold]
pub fn not_callable(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        value: value.truncated().to_string(),
    })
}

#[cold]
pub fn unsupported_operator(operator: Symbol) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperator { operator })
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

// Resource Errors

#[cold]
pub fn stack_overflow(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

#[cold]
pub fn budget_exceeded(calls: usize, budget: u32) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BudgetExceeded { budget, calls })
}

#[cfg(test)]
mod tests;
