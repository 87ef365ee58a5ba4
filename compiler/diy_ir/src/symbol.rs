//! Interned symbol handle.

use std::fmt;

use crate::interner::SymbolInterner;

/// An interned identifier.
///
/// Two symbols are equal iff they were interned from the same text. The text
/// itself lives in the global interner for the life of the process.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Symbol(u32);

impl Symbol {
    /// Pre-interned empty string.
    pub const EMPTY: Symbol = Symbol(0);

    pub const LAMBDA: Symbol = Symbol(1);
    pub const CONS: Symbol = Symbol(2);
    pub const HEAD: Symbol = Symbol(3);
    pub const TAIL: Symbol = Symbol(4);
    pub const EMPTY_P: Symbol = Symbol(5);
    pub const DEFINE: Symbol = Symbol(6);
    pub const QUOTE: Symbol = Symbol(7);
    pub const ATOM: Symbol = Symbol(8);
    pub const IF: Symbol = Symbol(9);
    pub const COND: Symbol = Symbol(10);
    pub const EQ: Symbol = Symbol(11);
    pub const ADD: Symbol = Symbol(12);
    pub const SUB: Symbol = Symbol(13);
    pub const MUL: Symbol = Symbol(14);
    pub const DIV: Symbol = Symbol(15);
    pub const MOD: Symbol = Symbol(16);
    pub const GT: Symbol = Symbol(17);

    /// Text of the pre-interned symbols, indexed by their raw value.
    ///
    /// The order here fixes the values of the constants above.
    pub(crate) const PRE_INTERNED: &'static [&'static str] = &[
        "", "lambda", "cons", "head", "tail", "empty", "define", "quote", "atom", "if", "cond",
        "eq", "+", "-", "*", "/", "mod", ">",
    ];

    /// Intern `text` in the global interner.
    ///
    /// # Panics
    /// Panics if the interner exceeds `u32::MAX` entries. Use
    /// [`SymbolInterner::try_intern`] for the fallible form.
    #[inline]
    pub fn intern(text: &str) -> Self {
        SymbolInterner::global().intern(text)
    }

    /// The text this symbol was interned from.
    #[inline]
    pub fn as_str(self) -> &'static str {
        SymbolInterner::global().lookup(self)
    }

    #[inline]
    pub(crate) const fn from_index(index: u32) -> Self {
        Symbol(index)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw handle value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Symbol::intern(text)
    }
}
