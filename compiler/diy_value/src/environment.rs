//! Symbol bindings for evaluation.
//!
//! A frame is a flat map. `extend` copies the receiver's bindings into a new
//! frame instead of linking to it as a parent, so lookups never walk a chain
//! and a child can never write into the frame it came from.
//!
//! Frames are shared: the REPL root, and every closure created while
//! evaluating in a frame, hold the same frame. `set` is the only mutation and
//! it only ever adds a new key, so all holders see a `define` made after they
//! captured the frame.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::errors::{already_defined, undefined_symbol, EvalError};
use crate::{Symbol, Value};

type Bindings = FxHashMap<Symbol, Value>;

/// One frame of bindings. Cloning shares the frame.
#[derive(Clone, Default)]
pub struct Environment {
    frame: Arc<RwLock<Bindings>>,
}

impl Environment {
    /// An empty root frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// A root frame holding `bindings`. Later duplicates win.
    pub fn from_bindings(bindings: impl IntoIterator<Item = (Symbol, Value)>) -> Self {
        Self::from_map(bindings.into_iter().collect())
    }

    fn from_map(bindings: Bindings) -> Self {
        Environment {
            frame: Arc::new(RwLock::new(bindings)),
        }
    }

    /// The value bound to `symbol`.
    pub fn lookup(&self, symbol: Symbol) -> Result<Value, EvalError> {
        self.frame
            .read()
            .get(&symbol)
            .cloned()
            .ok_or_else(|| undefined_symbol(symbol))
    }

    /// A new frame with this frame's bindings overlaid by `bindings`.
    ///
    /// `self` is left untouched; the two frames are independent from here on.
    #[must_use]
    pub fn extend(&self, bindings: impl IntoIterator<Item = (Symbol, Value)>) -> Environment {
        let mut copy = self.frame.read().clone();
        copy.extend(bindings);
        Self::from_map(copy)
    }

    /// Bind `symbol` in this frame.
    ///
    /// Fails with `AlreadyDefined` if this frame already binds it. Bindings
    /// this frame copied from the frame it was extended from count too.
    pub fn set(&self, symbol: Symbol, value: Value) -> Result<(), EvalError> {
        let mut frame = self.frame.write();
        if frame.contains_key(&symbol) {
            return Err(already_defined(symbol));
        }
        frame.insert(symbol, value);
        Ok(())
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.frame.read().contains_key(&symbol)
    }

    /// Number of bindings visible from this frame.
    pub fn len(&self) -> usize {
        self.frame.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.read().is_empty()
    }

    /// `true` if both handles refer to the same frame.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Arc::ptr_eq(&self.frame, &other.frame)
    }
}

// Values can hold closures over this very frame, so only names are printed.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&'static str> = self
            .frame
            .read()
            .keys()
            .copied()
            .map(Symbol::as_str)
            .collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("bindings", &names)
            .finish()
    }
}
