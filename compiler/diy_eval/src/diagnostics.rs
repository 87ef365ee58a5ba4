//! Call-stack tracking for closure applications.
//!
//! Each application pushes a [`CallFrame`]; the depth check lives in
//! [`CallStack::push`]. When an error escapes a closure body the stack is
//! snapshotted into an [`EvalBacktrace`] and attached to the error.

use diy_ir::Symbol;
use diy_value::{stack_overflow, BacktraceFrame, EvalBacktrace, EvalError};

/// Innermost frames kept in a captured backtrace.
pub const BACKTRACE_LIMIT: usize = 64;

/// A single active closure application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Symbol the closure was reached through; `None` for a lambda applied
    /// in place.
    pub name: Option<Symbol>,
}

impl CallFrame {
    pub fn display_name(self) -> &'static str {
        self.name.map_or("<lambda>", Symbol::as_str)
    }
}

/// Live call stack for one interpreter.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, checking the depth limit.
    ///
    /// The frame is not pushed on overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if self.frames.len() >= self.max_depth {
            tracing::warn!(
                limit = self.max_depth,
                callee = frame.display_name(),
                "recursion limit exceeded"
            );
            return Err(stack_overflow(self.max_depth));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Snapshot the stack, most recent call first, keeping at most
    /// [`BACKTRACE_LIMIT`] frames.
    pub fn capture(&self) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .take(BACKTRACE_LIMIT)
            .map(|f| BacktraceFrame {
                name: f.display_name().to_string(),
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a snapshot of this stack to `err`, unless the error already
    /// carries one or the stack is empty.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() || err.backtrace.is_some() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}
