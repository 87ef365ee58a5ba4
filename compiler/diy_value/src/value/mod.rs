//! Runtime values, which are also the AST.
//!
//! # Construction
//!
//! Heap-backed variants can only be created through factory methods:
//!
//! ```text
//! let s = Value::string("hello");
//! let form = Value::list(vec![Value::symbol("+"), Value::int(1), Value::int(2)]);
//! ```
//!
//! `Heap::new` is private to this module, so `Value::List(Heap::new(..))`
//! does not compile outside it.
//!
//! # Equality
//!
//! `PartialEq` is structural (lists element-wise, closures by identity) and
//! exists for hosts and tests. The language's own `eq` is [`Value::atom_eq`],
//! which is never true for lists.

mod closure;
mod heap;
mod scalar_int;

use std::fmt;

use diy_stack::ensure_sufficient_stack;

use crate::{Environment, Symbol};

pub use closure::{Closure, Params};
pub use heap::Heap;
pub use scalar_int::ScalarInt;

/// A DIY Lisp value.
#[derive(Clone)]
pub enum Value {
    /// Integer (checked arithmetic only).
    Int(ScalarInt),
    /// `#t` / `#f`.
    Bool(bool),
    /// Interned identifier. Evaluates to its binding.
    Symbol(Symbol),
    /// String literal.
    Str(Heap<String>),
    /// Immutable list. As an AST node, a form.
    List(Heap<Vec<Value>>),
    /// Function created by `lambda`.
    Closure(Heap<Closure>),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(ScalarInt::new(n))
    }

    /// Intern `name` and wrap it as a symbol value.
    #[inline]
    pub fn symbol(name: &str) -> Self {
        Value::Symbol(Symbol::intern(name))
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// The empty list.
    #[inline]
    pub fn nil() -> Self {
        Value::list(Vec::new())
    }

    /// A new list with `head` in front of `items`. `items` is copied, never
    /// modified.
    pub fn cons(head: Value, items: &[Value]) -> Self {
        let mut out = Vec::with_capacity(items.len().saturating_add(1));
        out.push(head);
        out.extend_from_slice(items);
        Value::list(out)
    }

    pub fn closure(env: Environment, params: impl Into<Params>, body: Value) -> Self {
        Value::Closure(Heap::new(Closure::new(env, params.into(), body)))
    }
}

// Value Methods

impl Value {
    /// Atoms are everything except lists and closures.
    #[inline]
    pub fn is_atom(&self) -> bool {
        !matches!(self, Value::List(_) | Value::Closure(_))
    }

    /// Only `#f` is false. `0`, `""` and `()` are all true.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }

    /// The `eq` special form: two atoms of the same kind and value.
    pub fn atom_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => false,
        }
    }

    pub fn as_int(&self) -> Option<ScalarInt> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<Symbol> {
        match self {
            Value::Symbol(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_closure(&self) -> Option<&Closure> {
        match self {
            Value::Closure(c) => Some(c),
            _ => None,
        }
    }

    /// Kind name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Symbol(_) => "symbol",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Closure(_) => "closure",
        }
    }
}

// Bounded Rendering

/// Nesting depth past which [`Value::truncated`] prints `(...)`.
pub const DISPLAY_DEPTH_LIMIT: usize = 32;

/// List elements [`Value::truncated`] prints before eliding the rest.
pub const DISPLAY_LENGTH_LIMIT: usize = 64;

impl Value {
    /// S-expression rendering with nesting and length capped.
    ///
    /// Error messages embed operands through this, so a deep or huge list
    /// costs a bounded amount of stack and text.
    pub fn truncated(&self) -> Truncated<'_> {
        Truncated {
            value: self,
            depth: 0,
        }
    }
}

/// `Display` adapter returned by [`Value::truncated`].
#[derive(Clone, Copy)]
pub struct Truncated<'a> {
    value: &'a Value,
    depth: usize,
}

impl fmt::Display for Truncated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Value::List(items) = self.value else {
            return write!(f, "{}", self.value);
        };
        if self.depth >= DISPLAY_DEPTH_LIMIT {
            return write!(f, "(...)");
        }
        write!(f, "(")?;
        for (i, item) in items.iter().take(DISPLAY_LENGTH_LIMIT).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let nested = Truncated {
                value: item,
                depth: self.depth.saturating_add(1),
            };
            write!(f, "{nested}")?;
        }
        if items.len() > DISPLAY_LENGTH_LIMIT {
            write!(f, " ...")?;
        }
        write!(f, ")")
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Symbol(s) => write!(f, "Symbol({s})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => {
                ensure_sufficient_stack(|| write!(f, "List({:?})", &**items))
            }
            Value::Closure(c) => write!(f, "Closure/{}", c.arity()),
        }
    }
}

/// Full S-expression rendering. Strings are quoted and escaped.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(true) => write!(f, "#t"),
            Value::Bool(false) => write!(f, "#f"),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::Str(s) => write!(f, "{:?}", &**s),
            Value::List(items) => ensure_sufficient_stack(|| {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }),
            Value::Closure(c) => write!(f, "<closure/{}>", c.arity()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Heap::ptr_eq(a, b),
            _ => self.atom_eq(other),
        }
    }
}

impl Eq for Value {}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}
