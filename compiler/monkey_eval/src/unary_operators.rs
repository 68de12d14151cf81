//! Prefix operators.

use crate::errors::{integer_overflow, unknown_prefix_operator};
use crate::{EvalError, Value};
use monkey_ir::UnaryOp;

/// Apply a prefix operator to an evaluated operand.
///
/// `!` negates truthiness and accepts any value. `-` needs an integer.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> Result<Value, EvalError> {
    match op {
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
        UnaryOp::Neg => match operand {
            Value::Int(n) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or_else(|| integer_overflow(format!("-{n}"))),
            other => Err(unknown_prefix_operator(op, other)),
        },
    }
}
