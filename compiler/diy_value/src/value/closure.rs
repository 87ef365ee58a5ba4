//! User-defined functions.

use std::fmt;

use smallvec::SmallVec;

use super::Value;
use crate::{Environment, Symbol};

/// Parameter list of a closure. Most functions take a handful of arguments.
pub type Params = SmallVec<[Symbol; 4]>;

/// A function value created by `lambda`.
///
/// Holds the frame it was created in, not a snapshot of it: a closure defined
/// at the top level sees names the top level defines later, which is how a
/// function can call itself by name.
pub struct Closure {
    env: Environment,
    params: Params,
    body: Value,
}

impl Closure {
    pub(super) fn new(env: Environment, params: Params, body: Value) -> Self {
        Closure { env, params, body }
    }

    /// The frame captured at creation.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn params(&self) -> &[Symbol] {
        &self.params
    }

    #[inline]
    pub fn body(&self) -> &Value {
        &self.body
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

// The captured frame usually contains this closure, so it is left out.
impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}
