//! Function application.

use super::{Completion, Interpreter};
use crate::errors::{arity_mismatch, not_a_function, recursion_limit_exceeded};
use crate::{ControlAction, Environment, EvalResult, FunctionValue, Value};

impl Interpreter<'_> {
    /// Call `callee` with evaluated arguments. A body that produced no
    /// value returns `null`.
    pub fn apply(&self, callee: &Value, args: &[Value]) -> EvalResult {
        Ok(self.call(callee, args)?.unwrap_or(Value::Null))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(depth = self.call_depth))]
    pub(super) fn call(&self, callee: &Value, args: &[Value]) -> EvalResult<Completion> {
        match callee {
            Value::Function(function) => self.call_function(function, args),
            Value::Builtin(builtin) => {
                tracing::trace!(%builtin, argc = args.len(), "calling builtin");
                Ok(Some(builtin.call(args, self.interner, &self.print_handler)?))
            }
            other => Err(not_a_function(other).into()),
        }
    }

    fn call_function(&self, function: &FunctionValue, args: &[Value]) -> EvalResult<Completion> {
        if function.params.len() != args.len() {
            return Err(arity_mismatch(function.params.len(), args.len()).into());
        }
        if let Some(limit) = self.max_call_depth {
            if self.call_depth >= limit {
                return Err(recursion_limit_exceeded(limit).into());
            }
        }

        let env = Environment::new_enclosed(&function.env);
        for (&param, arg) in function.params.iter().zip(args) {
            env.set(param, arg.clone());
        }

        let frame = self.frame(
            function.arena.clone(),
            env,
            self.call_depth.saturating_add(1),
        );
        match frame.eval_block(function.body) {
            Ok(completion) => Ok(completion),
            Err(ControlAction::Return(value)) => Ok(Some(value)),
            Err(error @ ControlAction::Error(_)) => Err(error),
        }
    }
}
