//! DIY IR - symbols shared by every stage that handles S-expressions.
//!
//! A [`Symbol`] is a 32-bit handle into the process-wide [`SymbolInterner`].
//! Equality and hashing are integer operations, which matters for the
//! evaluator: every list node compares its head against the special-form
//! keywords, and every variable reference hashes a symbol into a frame.
//!
//! The special-form keywords are interned first, in a fixed order, so their
//! symbols are compile-time constants (`Symbol::LAMBDA`, `Symbol::IF`, ...).

mod interner;
mod symbol;

pub use interner::{InternError, SymbolInterner};
pub use symbol::Symbol;
