//! Native functions reachable by name from every program.
//!
//! Builtins are found only after the environment chain misses, so a user
//! `let len = ...` shadows the native `len`.

use crate::errors::{builtin_argument, builtin_arity, builtin_unsupported};
use crate::{EvalError, PrintHandlerImpl, Value};
use monkey_ir::StringInterner;
use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    Len,
    First,
    Last,
    Rest,
    Push,
    Puts,
}

impl Builtin {
    /// Every builtin, in the order they are looked up.
    pub const ALL: [Builtin; 6] = [
        Builtin::Len,
        Builtin::First,
        Builtin::Last,
        Builtin::Rest,
        Builtin::Push,
        Builtin::Puts,
    ];

    /// The builtin bound to `name`, if any. Only consulted after the
    /// environment chain, so user bindings shadow builtins.
    pub fn from_name(name: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    /// Name the builtin is called by in source.
    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Len => "len",
            Builtin::First => "first",
            Builtin::Last => "last",
            Builtin::Rest => "rest",
            Builtin::Push => "push",
            Builtin::Puts => "puts",
        }
    }

    /// Run the builtin on already-evaluated arguments.
    ///
    /// `puts` writes through `print` and returns `null`; the others are
    /// pure. Wrong argument counts or types come back as errors.
    pub fn call(
        self,
        args: &[Value],
        interner: &StringInterner,
        print: &PrintHandlerImpl,
    ) -> Result<Value, EvalError> {
        match self {
            Builtin::Len => len(args),
            Builtin::First => {
                let elements = array_arg(self, args)?;
                Ok(elements.first().cloned().unwrap_or(Value::Null))
            }
            Builtin::Last => {
                let elements = array_arg(self, args)?;
                Ok(elements.last().cloned().unwrap_or(Value::Null))
            }
            Builtin::Rest => {
                let elements = array_arg(self, args)?;
                Ok(match elements.split_first() {
                    Some((_, rest)) => Value::array(rest.to_vec()),
                    None => Value::Null,
                })
            }
            Builtin::Push => push(args),
            Builtin::Puts => {
                for arg in args {
                    print.write_line(&arg.inspect(interner));
                }
                Ok(Value::Null)
            }
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn expect_arity(args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(builtin_arity(expected, args.len()))
    }
}

/// The single array argument of `first`, `last` and `rest`.
fn array_arg(builtin: Builtin, args: &[Value]) -> Result<&[Value], EvalError> {
    expect_arity(args, 1)?;
    match &args[0] {
        Value::Array(elements) => Ok(elements.as_slice()),
        other => Err(builtin_argument(builtin.name(), "ARRAY", other)),
    }
}

fn len(args: &[Value]) -> Result<Value, EvalError> {
    expect_arity(args, 1)?;
    let n = match &args[0] {
        Value::Str(s) => s.len(),
        Value::Array(elements) => elements.len(),
        other => return Err(builtin_unsupported("len", other)),
    };
    Ok(Value::int(i64::try_from(n).unwrap_or(i64::MAX)))
}

fn push(args: &[Value]) -> Result<Value, EvalError> {
    expect_arity(args, 2)?;
    match &args[0] {
        Value::Array(elements) => {
            let mut extended = Vec::with_capacity(elements.len().saturating_add(1));
            extended.extend(elements.iter().cloned());
            extended.push(args[1].clone());
            Ok(Value::array(extended))
        }
        other => Err(builtin_argument("push", "ARRAY", other)),
    }
}
