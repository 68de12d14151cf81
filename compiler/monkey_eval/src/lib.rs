#![deny(clippy::arithmetic_side_effects)]
//! Tree-walking evaluator for Monkey.
//!
//! # Architecture
//!
//! - [`Value`]: the closed set of runtime values, with [`HashKey`] for the
//!   hashable ones
//! - [`Environment`]: chained, reference-counted scopes; closures keep their
//!   defining scope alive
//! - [`Interpreter`]: walks the AST, threading `return` and runtime errors
//!   through [`ControlAction`] instead of sentinel values
//! - `evaluate_binary` / `evaluate_unary`: operator semantics on values
//! - [`Builtin`]: `len`, `first`, `last`, `rest`, `push`, `puts`
//!
//! [`eval`] runs a parsed program against an environment in one call.

mod builtins;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use builtins::Builtin;
pub use environment::{new_enclosed_environment, new_environment, Environment, LocalScope, Scope};
pub use errors::{ControlAction, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Completion, Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_index};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{FunctionValue, HashKey, HashPair, HashTag, HashValue, Heap, Value, ValueDisplay};

use monkey_ir::{Program, StringInterner};

/// Evaluate `program` in `env`.
///
/// Bindings made by top-level `let`s land in `env`, so calling this again
/// with the same environment continues the session. A top-level `return`
/// ends evaluation with its value. Output from `puts` goes to stdout.
pub fn eval(
    program: &Program,
    env: &Environment,
    interner: &StringInterner,
) -> Result<Value, EvalError> {
    InterpreterBuilder::new(interner, program.arena.clone())
        .environment(env.clone())
        .build()
        .eval_program(program)
}

#[cfg(test)]
mod tests;
