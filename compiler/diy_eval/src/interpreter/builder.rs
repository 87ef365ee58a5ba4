//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::diagnostics::CallStack;
use crate::eval_mode::{EvalMode, ModeState};
use diy_value::Environment;

/// Builder for [`Interpreter`].
///
/// Defaults to `EvalMode::Interpret` over a fresh root environment.
#[derive(Default)]
#[must_use]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    mode: EvalMode,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate against `env` instead of a fresh root frame.
    ///
    /// The interpreter shares the frame with the caller, so top-level
    /// definitions are visible through every clone of `env`.
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn build(self) -> Interpreter {
        let call_stack = CallStack::new(self.mode.max_call_depth());
        let mode_state = ModeState::new(&self.mode);
        Interpreter {
            env: self.env.unwrap_or_default(),
            mode: self.mode,
            mode_state,
            call_stack,
        }
    }
}
