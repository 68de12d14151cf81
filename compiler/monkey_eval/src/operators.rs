//! Binary and index operators.
//!
//! The value set is closed, so dispatch is a match on operand pairs. Integer
//! arithmetic is checked: overflow and division by zero become errors.

use crate::errors::{
    division_by_zero, index_not_supported, integer_overflow, type_mismatch,
    unknown_infix_operator, unusable_as_hash_key,
};
use crate::{EvalError, Value};
use monkey_ir::BinaryOp;

/// Apply `op` to two evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => match op {
            BinaryOp::Add => {
                let mut joined = String::with_capacity(a.len().saturating_add(b.len()));
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::string(joined))
            }
            BinaryOp::Eq => Ok(Value::Bool(**a == **b)),
            BinaryOp::NotEq => Ok(Value::Bool(**a != **b)),
            _ => Err(unknown_infix_operator(left, op, right)),
        },
        (Value::Bool(a), Value::Bool(b)) => eval_equality(a == b, left, op, right),
        (Value::Null, Value::Null) => eval_equality(true, left, op, right),
        (Value::Array(a), Value::Array(b)) => eval_equality(a.ptr_eq(b), left, op, right),
        (Value::Hash(a), Value::Hash(b)) => eval_equality(a.ptr_eq(b), left, op, right),
        (Value::Function(a), Value::Function(b)) => eval_equality(a.ptr_eq(b), left, op, right),
        (Value::Builtin(a), Value::Builtin(b)) => eval_equality(a == b, left, op, right),
        _ => Err(type_mismatch(left, op, right)),
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> Result<Value, EvalError> {
    let overflow = || integer_overflow(format!("{a} {op} {b}"));
    match op {
        BinaryOp::Add => a.checked_add(b).map(Value::Int).ok_or_else(overflow),
        BinaryOp::Sub => a.checked_sub(b).map(Value::Int).ok_or_else(overflow),
        BinaryOp::Mul => a.checked_mul(b).map(Value::Int).ok_or_else(overflow),
        // Truncates toward zero.
        BinaryOp::Div if b == 0 => Err(division_by_zero()),
        BinaryOp::Div => a.checked_div(b).map(Value::Int).ok_or_else(overflow),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
    }
}

/// `==` / `!=` given whether the operands are the same value; any other
/// operator is unknown for the pair.
fn eval_equality(
    same: bool,
    left: &Value,
    op: BinaryOp,
    right: &Value,
) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(same)),
        BinaryOp::NotEq => Ok(Value::Bool(!same)),
        _ => Err(unknown_infix_operator(left, op, right)),
    }
}

/// `collection[index]`.
///
/// Out-of-range array indices and missing hash keys yield `null`.
pub fn evaluate_index(collection: &Value, index: &Value) -> Result<Value, EvalError> {
    match (collection, index) {
        (Value::Array(elements), Value::Int(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(Value::Null)),
        (Value::Array(_), other) => Err(index_not_supported(format!(
            "ARRAY[{}]",
            other.type_name()
        ))),
        (Value::Hash(map), key) => {
            let hash_key = key.hash_key().ok_or_else(|| unusable_as_hash_key(key))?;
            Ok(map
                .get(&hash_key)
                .map_or(Value::Null, |pair| pair.value.clone()))
        }
        (other, _) => Err(index_not_supported(other.type_name().to_string())),
    }
}
