//! Special-form evaluation.

use diy_ir::Symbol;
use diy_value::{
    arity_error, invalid_define, invalid_lambda, type_error, Environment, EvalError, EvalResult,
    Heap, Params, Value,
};

use super::Interpreter;
use crate::operators::{evaluate_binary, BinaryOp};
use crate::special_form::SpecialForm;

impl Interpreter {
    pub(super) fn eval_special_form(
        &mut self,
        form: SpecialForm,
        rest: &[Value],
        env: &Environment,
    ) -> EvalResult {
        if let Some(expected) = form.operand_count() {
            if rest.len() != expected {
                return Err(arity_error(form.symbol().as_str(), expected, rest.len()));
            }
        }
        match form {
            SpecialForm::Lambda => create_closure(rest, env),
            SpecialForm::Cons => self.eval_cons(&rest[0], &rest[1], env),
            SpecialForm::Head => {
                let list = self.eval_non_empty_list(Symbol::HEAD, &rest[0], env)?;
                Ok(list[0].clone())
            }
            SpecialForm::Tail => {
                let list = self.eval_non_empty_list(Symbol::TAIL, &rest[0], env)?;
                Ok(Value::list(list[1..].to_vec()))
            }
            SpecialForm::Empty => {
                let value = self.eval_in(&rest[0], env)?;
                match value.as_list() {
                    Some(items) => Ok(Value::Bool(items.is_empty())),
                    None => Err(type_error(Symbol::EMPTY_P, "a list", &value)),
                }
            }
            SpecialForm::Define => self.eval_define(rest, env),
            SpecialForm::Quote => Ok(rest[0].clone()),
            SpecialForm::Atom => Ok(Value::Bool(self.eval_in(&rest[0], env)?.is_atom())),
            SpecialForm::If => {
                if self.eval_in(&rest[0], env)?.is_truthy() {
                    self.eval_in(&rest[1], env)
                } else {
                    self.eval_in(&rest[2], env)
                }
            }
            SpecialForm::Cond => self.eval_cond(&rest[0], env),
            SpecialForm::Eq => {
                let left = self.eval_in(&rest[0], env)?;
                let right = self.eval_in(&rest[1], env)?;
                Ok(Value::Bool(left.atom_eq(&right)))
            }
            SpecialForm::Binary(op) => self.eval_binary(op, &rest[0], &rest[1], env),
        }
    }

    /// `(cons x xs)`: the list operand is evaluated first, then the element.
    fn eval_cons(&mut self, elem: &Value, list: &Value, env: &Environment) -> EvalResult {
        let list = self.eval_in(list, env)?;
        let Some(items) = list.as_list() else {
            return Err(type_error(Symbol::CONS, "a list as its second operand", &list));
        };
        let head = self.eval_in(elem, env)?;
        Ok(Value::cons(head, items))
    }

    fn eval_non_empty_list(
        &mut self,
        form: Symbol,
        operand: &Value,
        env: &Environment,
    ) -> Result<Heap<Vec<Value>>, EvalError> {
        match self.eval_in(operand, env)? {
            Value::List(items) if !items.is_empty() => Ok(items),
            other => Err(type_error(form, "a non-empty list", &other)),
        }
    }

    fn eval_define(&mut self, rest: &[Value], env: &Environment) -> EvalResult {
        let [name, value] = rest else {
            return Err(invalid_define(format!(
                "expected a name and a value, got {} operands",
                rest.len()
            )));
        };
        let Some(symbol) = name.as_symbol() else {
            return Err(invalid_define(format!("{} is not a symbol", name.truncated())));
        };
        let value = self.eval_in(value, env)?;
        tracing::debug!(name = symbol.as_str(), kind = value.type_name(), "define");
        env.set(symbol, value)?;
        Ok(Value::Symbol(symbol))
    }

    fn eval_cond(&mut self, clauses: &Value, env: &Environment) -> EvalResult {
        const CLAUSES: &str = "a list of (predicate consequent) pairs";
        let Some(clauses) = clauses.as_list() else {
            return Err(type_error(Symbol::COND, CLAUSES, clauses));
        };
        for clause in clauses {
            let Some([predicate, consequent]) = clause.as_list() else {
                return Err(type_error(Symbol::COND, CLAUSES, clause));
            };
            if self.eval_in(predicate, env)?.is_truthy() {
                return self.eval_in(consequent, env);
            }
        }
        Ok(Value::Bool(false))
    }

    fn eval_binary(
        &mut self,
        op: BinaryOp,
        left: &Value,
        right: &Value,
        env: &Environment,
    ) -> EvalResult {
        let left = self.eval_in(left, env)?;
        let right = self.eval_in(right, env)?;
        evaluate_binary(op, &left, &right)
    }
}

/// `(lambda (params...) body)`: capture `env` without evaluating the body.
fn create_closure(rest: &[Value], env: &Environment) -> EvalResult {
    let [params, body] = rest else {
        return Err(invalid_lambda(format!(
            "expected a parameter list and a body, got {} operands",
            rest.len()
        )));
    };
    let Some(items) = params.as_list() else {
        return Err(invalid_lambda(format!(
            "parameters must be a list, got {}",
            params.truncated()
        )));
    };
    let params = items
        .iter()
        .map(|param| {
            param
                .as_symbol()
                .ok_or_else(|| {
                    invalid_lambda(format!("parameter {} is not a symbol", param.truncated()))
                })
        })
        .collect::<Result<Params, EvalError>>()?;
    Ok(Value::closure(env.clone(), params, body.clone()))
}
