//! Keyword dispatch table.
//!
//! A List whose head is one of the pre-interned keyword symbols is a special
//! form. Keywords are fixed syntax: the lookup happens on the unevaluated
//! head, before any environment lookup, so a `define` of the same name can
//! never shadow one.

use diy_ir::Symbol;

use crate::operators::BinaryOp;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialForm {
    Lambda,
    Cons,
    Head,
    Tail,
    Empty,
    Define,
    Quote,
    Atom,
    If,
    Cond,
    Eq,
    Binary(BinaryOp),
}

impl SpecialForm {
    /// Resolve a head symbol, or `None` if it names no special form.
    pub fn from_symbol(symbol: Symbol) -> Option<Self> {
        let form = match symbol {
            Symbol::LAMBDA => SpecialForm::Lambda,
            Symbol::CONS => SpecialForm::Cons,
            Symbol::HEAD => SpecialForm::Head,
            Symbol::TAIL => SpecialForm::Tail,
            Symbol::EMPTY_P => SpecialForm::Empty,
            Symbol::DEFINE => SpecialForm::Define,
            Symbol::QUOTE => SpecialForm::Quote,
            Symbol::ATOM => SpecialForm::Atom,
            Symbol::IF => SpecialForm::If,
            Symbol::COND => SpecialForm::Cond,
            Symbol::EQ => SpecialForm::Eq,
            other => return BinaryOp::try_from(other).ok().map(SpecialForm::Binary),
        };
        Some(form)
    }

    pub fn symbol(self) -> Symbol {
        match self {
            SpecialForm::Lambda => Symbol::LAMBDA,
            SpecialForm::Cons => Symbol::CONS,
            SpecialForm::Head => Symbol::HEAD,
            SpecialForm::Tail => Symbol::TAIL,
            SpecialForm::Empty => Symbol::EMPTY_P,
            SpecialForm::Define => Symbol::DEFINE,
            SpecialForm::Quote => Symbol::QUOTE,
            SpecialForm::Atom => Symbol::ATOM,
            SpecialForm::If => Symbol::IF,
            SpecialForm::Cond => Symbol::COND,
            SpecialForm::Eq => Symbol::EQ,
            SpecialForm::Binary(op) => op.symbol(),
        }
    }

    /// Exact operand count, for forms that check it generically.
    ///
    /// `lambda` and `define` report malformed shapes through their own
    /// error kinds and return `None`.
    pub fn operand_count(self) -> Option<usize> {
        match self {
            SpecialForm::Lambda | SpecialForm::Define => None,
            SpecialForm::Head
            | SpecialForm::Tail
            | SpecialForm::Empty
            | SpecialForm::Quote
            | SpecialForm::Atom
            | SpecialForm::Cond => Some(1),
            SpecialForm::Cons | SpecialForm::Eq | SpecialForm::Binary(_) => Some(2),
            SpecialForm::If => Some(3),
        }
    }
}
