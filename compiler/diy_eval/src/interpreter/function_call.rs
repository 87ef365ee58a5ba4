//! Form dispatch and closure application.

use diy_ir::Symbol;
use diy_value::{
    arity_error, not_callable, stack_overflow, Closure, Environment, EvalResult, Value,
};

use super::Interpreter;
use crate::diagnostics::CallFrame;
use crate::special_form::SpecialForm;

impl Interpreter {
    /// Dispatch the form `(first rest...)`.
    ///
    /// A keyword head runs its special form and a closure head is applied.
    /// Any other Symbol or List head is evaluated and the form is dispatched
    /// again with the result as its head, so `((quote +) 1 2)` is `(+ 1 2)`.
    /// Re-dispatches count toward the call-depth limit, which stops a head
    /// such as `x` bound to `(quote x)` that never settles.
    pub(super) fn eval_form(
        &mut self,
        first: &Value,
        rest: &[Value],
        env: &Environment,
    ) -> EvalResult {
        let limit = self.call_stack.max_depth();
        let mut head = first.clone();
        let mut name = None;
        let mut hops: usize = 0;
        loop {
            match &head {
                Value::Symbol(symbol) => {
                    if let Some(form) = SpecialForm::from_symbol(*symbol) {
                        return self.eval_special_form(form, rest, env);
                    }
                    name = Some(*symbol);
                }
                Value::List(_) => name = None,
                Value::Closure(closure) => return self.eval_call(closure, name, rest, env),
                Value::Int(_) | Value::Bool(_) | Value::Str(_) => {
                    return Err(not_callable(&head));
                }
            }
            if hops >= limit {
                tracing::warn!(
                    limit,
                    head = %head.truncated(),
                    "head re-dispatch did not settle"
                );
                return Err(stack_overflow(limit));
            }
            hops = hops.saturating_add(1);
            head = self.eval_in(&head, env)?;
        }
    }

    /// Evaluate the arguments in the caller's `env`, then the body in the
    /// closure's captured environment extended with the parameters.
    #[tracing::instrument(level = "debug", skip_all)]
    fn eval_call(
        &mut self,
        closure: &Closure,
        name: Option<Symbol>,
        args: &[Value],
        env: &Environment,
    ) -> EvalResult {
        let frame = CallFrame { name };
        if args.len() != closure.arity() {
            let name = name.map_or("", Symbol::as_str);
            return Err(arity_error(name, closure.arity(), args.len()));
        }

        let values = args
            .iter()
            .map(|arg| self.eval_in(arg, env))
            .collect::<Result<Vec<_>, _>>()?;

        self.mode_state.count_call()?;
        self.call_stack.push(frame)?;
        tracing::debug!(
            callee = frame.display_name(),
            arity = closure.arity(),
            depth = self.call_stack.depth(),
            "apply"
        );

        let call_env = closure
            .env()
            .extend(closure.params().iter().copied().zip(values));
        let result = self
            .eval_in(closure.body(), &call_env)
            .map_err(|err| self.call_stack.attach_backtrace(err));
        self.call_stack.pop();
        result
    }
}
