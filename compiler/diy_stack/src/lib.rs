//! Stack growth for the recursive evaluator.
//!
//! `evaluate` recurses once per nested form and once per closure body, so a
//! deeply nested AST or a deep (non-tail) recursion in user code walks the
//! host stack. Wrapping each recursive step in [`ensure_sufficient_stack`]
//! moves the evaluation onto a freshly allocated segment whenever the
//! remaining stack drops under the red zone.
//!
//! Growth alone never fails, so unbounded recursion is stopped one layer up:
//! the interpreter's call-depth limit turns it into an ordinary evaluation
//! error instead of an out-of-memory abort.
//!
//! On `wasm32` the guard is a passthrough.

/// Remaining stack below which a new segment is allocated (100KB).
pub const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
pub const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn eval(&mut self, ast: &Value) -> EvalResult {
///     ensure_sufficient_stack(|| self.eval_inner(ast))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Remaining stack space in bytes, if the platform can report it.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
