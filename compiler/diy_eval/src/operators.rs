//! Integer operators.
//!
//! `+ - * / mod >` take exactly two integers. Arithmetic is checked: overflow
//! is an error rather than a wrap. `/` and `mod` round towards negative
//! infinity, so `mod` takes the sign of the divisor.

use diy_ir::Symbol;
use diy_value::{
    division_by_zero, integer_overflow, modulo_by_zero, type_error, unsupported_operator,
    EvalError, EvalResult, ScalarInt, Value,
};

/// A binary integer operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Gt,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 6] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
        BinaryOp::Gt,
    ];

    /// The keyword this operator is written as.
    pub fn symbol(self) -> Symbol {
        match self {
            BinaryOp::Add => Symbol::ADD,
            BinaryOp::Sub => Symbol::SUB,
            BinaryOp::Mul => Symbol::MUL,
            BinaryOp::Div => Symbol::DIV,
            BinaryOp::Mod => Symbol::MOD,
            BinaryOp::Gt => Symbol::GT,
        }
    }

    fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "addition",
            BinaryOp::Sub => "subtraction",
            BinaryOp::Mul => "multiplication",
            BinaryOp::Div => "division",
            BinaryOp::Mod => "modulo",
            BinaryOp::Gt => "comparison",
        }
    }
}

impl TryFrom<Symbol> for BinaryOp {
    type Error = EvalError;

    fn try_from(symbol: Symbol) -> Result<Self, Self::Error> {
        match symbol {
            Symbol::ADD => Ok(BinaryOp::Add),
            Symbol::SUB => Ok(BinaryOp::Sub),
            Symbol::MUL => Ok(BinaryOp::Mul),
            Symbol::DIV => Ok(BinaryOp::Div),
            Symbol::MOD => Ok(BinaryOp::Mod),
            Symbol::GT => Ok(BinaryOp::Gt),
            other => Err(unsupported_operator(other)),
        }
    }
}

/// Apply `op` to two already-evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    let a = expect_int(op, left)?;
    let b = expect_int(op, right)?;
    eval_int_binary(a, b, op)
}

fn expect_int(op: BinaryOp, value: &Value) -> Result<ScalarInt, EvalError> {
    value
        .as_int()
        .ok_or_else(|| type_error(op.symbol(), "an integer", value))
}

#[inline]
fn checked_arith(result: Option<ScalarInt>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

fn eval_int_binary(a: ScalarInt, b: ScalarInt, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), op.name()),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), op.name()),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), op.name()),
        BinaryOp::Div => {
            if b.is_zero() {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_floor_div(b), op.name())
            }
        }
        BinaryOp::Mod => {
            if b.is_zero() {
                Err(modulo_by_zero())
            } else {
                checked_arith(a.checked_floor_mod(b), op.name())
            }
        }
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
    }
}
