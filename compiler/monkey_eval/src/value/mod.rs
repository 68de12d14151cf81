//! Runtime values.
//!
//! Heap-backed variants hold a [`Heap`], whose constructor is private to
//! this module; use the factory methods (`Value::string`, `Value::array`, ...)
//! to build them.
//!
//! Values are immutable once built. Builtins like `push` return new arrays.

mod hash;
mod heap;

pub use hash::{HashKey, HashPair, HashTag, HashValue};
pub use heap::Heap;

use crate::{Builtin, Environment};
use monkey_ir::{Block, BlockDisplay, Name, SharedArena, StringInterner};
use std::fmt;

/// A user-defined function: parameters, body, and the scope it closes over.
///
/// The body lives in the arena of the program that defined the function;
/// holding the arena keeps it valid after that program is gone.
pub struct FunctionValue {
    pub params: Vec<Name>,
    pub body: Block,
    pub arena: SharedArena,
    pub env: Environment,
}

impl fmt::Debug for FunctionValue {
    // The captured scope may contain this very function; don't walk it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("params", &self.params)
            .field("body", &self.body.span)
            .finish_non_exhaustive()
    }
}

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Null,
    Str(Heap<String>),
    Array(Heap<Vec<Value>>),
    Hash(Heap<HashValue>),
    Function(Heap<FunctionValue>),
    Builtin(Builtin),
}

impl Value {
    // Factories

    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Heap::new(elements))
    }

    #[inline]
    pub fn hash(map: HashValue) -> Self {
        Value::Hash(Heap::new(map))
    }

    pub fn function(
        params: Vec<Name>,
        body: Block,
        arena: SharedArena,
        env: Environment,
    ) -> Self {
        Value::Function(Heap::new(FunctionValue {
            params,
            body,
            arena,
            env,
        }))
    }

    // Queries

    /// Upper-case type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "INTEGER",
            Value::Bool(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Str(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
        }
    }

    /// Only `false` and `null` are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Null)
    }

    /// Key for use in a hash; `None` for unhashable variants.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Int(n) => Some(HashKey::integer(*n)),
            Value::Bool(b) => Some(HashKey::boolean(*b)),
            Value::Str(s) => Some(HashKey::string(s)),
            _ => None,
        }
    }

    /// Display adapter producing the `inspect` rendering.
    ///
    /// Function rendering needs the interner to spell parameter names and
    /// the body.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            interner,
        }
    }

    pub fn inspect(&self, interner: &StringInterner) -> String {
        self.display(interner).to_string()
    }
}

/// Structural equality for data, identity for functions.
///
/// This is the host-side comparison used by tests and hash entries. The
/// language's own `==` lives in the operator module.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::Array(a), Value::Array(b)) => **a == **b,
            (Value::Hash(a), Value::Hash(b)) => **a == **b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

/// `inspect` rendering of a value.
pub struct ValueDisplay<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Str(s) => f.write_str(s),
            Value::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element.display(self.interner))?;
                }
                f.write_str("]")
            }
            Value::Hash(map) => {
                f.write_str("{")?;
                for (i, pair) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(
                        f,
                        "{}: {}",
                        pair.key.display(self.interner),
                        pair.value.display(self.interner)
                    )?;
                }
                f.write_str("}")
            }
            Value::Function(func) => {
                f.write_str("fn(")?;
                for (i, param) in func.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(self.interner.lookup(*param))?;
                }
                write!(
                    f,
                    ") {}",
                    BlockDisplay::new(&func.arena, func.body, self.interner)
                )
            }
            Value::Builtin(_) => f.write_str("builtin function"),
        }
    }
}
