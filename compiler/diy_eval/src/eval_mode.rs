//! Evaluation modes.
//!
//! The mode decides how much work one interpreter may do: how deep closure
//! applications may nest, and whether applications are counted against a
//! budget. Hosts that need bounded execution (a sandbox, a request handler)
//! pick `Bounded`; the REPL runs in `Interpret`.

use diy_value::{budget_exceeded, EvalError};

/// Application depth allowed in [`EvalMode::Interpret`].
///
/// The stack itself grows on demand, so this only exists to turn runaway
/// recursion into an error before it eats the heap.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Evaluation mode for an [`Interpreter`](crate::Interpreter).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Unbudgeted evaluation with the default depth limit.
    #[default]
    Interpret,
    /// Depth-limited, and limited to `budget` closure applications in total.
    Bounded { max_depth: usize, budget: u32 },
}

impl EvalMode {
    /// Maximum nesting of closure applications.
    #[inline]
    pub fn max_call_depth(&self) -> usize {
        match self {
            Self::Interpret => DEFAULT_MAX_CALL_DEPTH,
            Self::Bounded { max_depth, .. } => *max_depth,
        }
    }

    /// Total closure applications allowed, or `None` for unlimited.
    #[inline]
    pub fn budget(&self) -> Option<u32> {
        match self {
            Self::Interpret => None,
            Self::Bounded { budget, .. } => Some(*budget),
        }
    }
}

/// Per-interpreter counters that back the mode's policies.
#[derive(Clone, Debug, Default)]
pub struct ModeState {
    calls: usize,
    budget: Option<u32>,
}

impl ModeState {
    pub fn new(mode: &EvalMode) -> Self {
        Self {
            calls: 0,
            budget: mode.budget(),
        }
    }

    /// Closure applications counted so far.
    #[inline]
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Count one application, failing once the budget is used up.
    pub fn count_call(&mut self) -> Result<(), EvalError> {
        self.calls = self.calls.saturating_add(1);
        if let Some(budget) = self.budget {
            if self.calls > usize::try_from(budget).unwrap_or(usize::MAX) {
                tracing::warn!(calls = self.calls, budget, "evaluation budget exceeded");
                return Err(budget_exceeded(self.calls, budget));
            }
        }
        Ok(())
    }
}
