//! String interner backing [`Symbol`].
//!
//! One global instance serves the whole process. Interned text is leaked, so
//! lookups hand out `&'static str` without holding the lock.

use std::sync::OnceLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Symbol;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// More than `u32::MAX` distinct symbols.
    #[error("symbol interner exceeded capacity: {count} symbols, max is {}", u32::MAX)]
    Overflow { count: usize },
}

#[derive(Default)]
struct InternTable {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// Thread-safe string interner.
pub struct SymbolInterner {
    table: RwLock<InternTable>,
}

static GLOBAL: OnceLock<SymbolInterner> = OnceLock::new();

impl SymbolInterner {
    /// Create an interner holding only the pre-interned keywords.
    pub fn new() -> Self {
        let mut table = InternTable::default();
        for (index, text) in (0u32..).zip(Symbol::PRE_INTERNED.iter().copied()) {
            table.map.insert(text, index);
            table.strings.push(text);
        }
        Self {
            table: RwLock::new(table),
        }
    }

    /// The process-wide interner used by [`Symbol::intern`].
    pub fn global() -> &'static SymbolInterner {
        GLOBAL.get_or_init(SymbolInterner::new)
    }

    /// Intern `text`, returning its symbol or an error on overflow.
    pub fn try_intern(&self, text: &str) -> Result<Symbol, InternError> {
        if let Some(&index) = self.table.read().map.get(text) {
            return Ok(Symbol::from_index(index));
        }

        let mut table = self.table.write();
        // Another writer may have won the race between the two locks.
        if let Some(&index) = table.map.get(text) {
            return Ok(Symbol::from_index(index));
        }

        let index = u32::try_from(table.strings.len()).map_err(|_| InternError::Overflow {
            count: table.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        table.strings.push(leaked);
        table.map.insert(leaked, index);
        Ok(Symbol::from_index(index))
    }

    /// Intern `text`.
    ///
    /// # Panics
    /// Panics if the interner exceeds `u32::MAX` entries.
    #[inline]
    pub fn intern(&self, text: &str) -> Symbol {
        self.try_intern(text).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Text for `symbol`. Symbols from another interner resolve to `""`.
    pub fn lookup(&self, symbol: Symbol) -> &'static str {
        self.table
            .read()
            .strings
            .get(symbol.index())
            .copied()
            .unwrap_or("")
    }

    /// Number of interned strings, including the pre-interned keywords.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Always `false`: the keyword table is interned at construction.
    pub fn is_empty(&self) -> bool {
        self.table.read().strings.is_empty()
    }
}

impl Default for SymbolInterner {
    fn default() -> Self {
        Self::new()
    }
}
