//! Runtime errors and control flow.
//!
//! Evaluation steps return [`EvalResult`]. The `Err` side is a
//! [`ControlAction`]: either a `return` unwinding to the nearest function
//! boundary, or an [`EvalError`] that keeps propagating to the top.
//! Factory functions below build every error the evaluator can raise.

use crate::Value;
use monkey_ir::{BinaryOp, Span, UnaryOp};
use thiserror::Error;

/// Result of one evaluation step.
pub type EvalResult<T = Value> = Result<T, ControlAction>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Operators
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: BinaryOp,
        right: &'static str,
    },
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator { op: UnaryOp, operand: &'static str },
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        op: BinaryOp,
        right: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow: {expr}")]
    IntegerOverflow { expr: String },

    // Names and access
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },
    #[error("unusable as hash key: {type_name}")]
    UnusableAsHashKey { type_name: &'static str },
    #[error("index operator not supported: {target}")]
    IndexNotSupported { target: String },

    // Calls
    #[error("not a function: {type_name}")]
    NotAFunction { type_name: &'static str },
    #[error("wrong number of arguments: want={expected}, got={got}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("maximum recursion depth exceeded ({limit})")]
    RecursionLimit { limit: usize },

    // Builtins
    #[error("wrong number of arguments. got={got}, want={expected}")]
    BuiltinArity { expected: usize, got: usize },
    #[error("argument to `{builtin}` must be {expected}, got {got}")]
    BuiltinArgument {
        builtin: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    #[error("argument to `{builtin}` not supported, got {got}")]
    BuiltinUnsupported {
        builtin: &'static str,
        got: &'static str,
    },
}

/// A runtime error and, when known, the span of the expression that raised it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach a span unless one is already set; the innermost span wins.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    /// Rendering of the error as a runtime value: `ERROR: <message>`.
    pub fn inspect(&self) -> String {
        format!("ERROR: {}", self.kind)
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

/// Why evaluation of a block stopped early.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    /// `return` with its value; unwrapped at the enclosing call.
    Return(Value),
    /// A runtime error; never unwrapped.
    Error(EvalError),
}

impl ControlAction {
    /// Attach a span to an error; returns pass through.
    #[must_use]
    pub fn with_span_if_error(self, span: Span) -> Self {
        match self {
            ControlAction::Error(e) => ControlAction::Error(e.with_span(span)),
            other @ ControlAction::Return(_) => other,
        }
    }
}

impl From<EvalError> for ControlAction {
    fn from(error: EvalError) -> Self {
        ControlAction::Error(error)
    }
}

// Factory functions

pub fn type_mismatch(left: &Value, op: BinaryOp, right: &Value) -> EvalError {
    EvalErrorKind::TypeMismatch {
        left: left.type_name(),
        op,
        right: right.type_name(),
    }
    .into()
}

pub fn unknown_prefix_operator(op: UnaryOp, operand: &Value) -> EvalError {
    EvalErrorKind::UnknownPrefixOperator {
        op,
        operand: operand.type_name(),
    }
    .into()
}

pub fn unknown_infix_operator(left: &Value, op: BinaryOp, right: &Value) -> EvalError {
    EvalErrorKind::UnknownInfixOperator {
        left: left.type_name(),
        op,
        right: right.type_name(),
    }
    .into()
}

pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

pub fn integer_overflow(expr: String) -> EvalError {
    EvalErrorKind::IntegerOverflow { expr }.into()
}

pub fn identifier_not_found(name: &str) -> EvalError {
    EvalErrorKind::IdentifierNotFound {
        name: name.to_string(),
    }
    .into()
}

pub fn unusable_as_hash_key(key: &Value) -> EvalError {
    EvalErrorKind::UnusableAsHashKey {
        type_name: key.type_name(),
    }
    .into()
}

pub fn index_not_supported(target: String) -> EvalError {
    EvalErrorKind::IndexNotSupported { target }.into()
}

pub fn not_a_function(callee: &Value) -> EvalError {
    EvalErrorKind::NotAFunction {
        type_name: callee.type_name(),
    }
    .into()
}

pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch { expected, got }.into()
}

pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalErrorKind::RecursionLimit { limit }.into()
}

pub fn builtin_arity(expected: usize, got: usize) -> EvalError {
    EvalErrorKind::BuiltinArity { expected, got }.into()
}

pub fn builtin_argument(builtin: &'static str, expected: &'static str, got: &Value) -> EvalError {
    EvalErrorKind::BuiltinArgument {
        builtin,
        expected,
        got: got.type_name(),
    }
    .into()
}

pub fn builtin_unsupported(builtin: &'static str, got: &Value) -> EvalError {
    EvalErrorKind::BuiltinUnsupported {
        builtin,
        got: got.type_name(),
    }
    .into()
}
