//! End-to-end evaluator tests: source text in, inspected value out.
//!
//! - `expression_tests`: literals, operators, conditionals
//! - `control_tests`: `let`, `return`, closures, recursion limits
//! - `collection_tests`: arrays, hashes, builtins
//! - `error_tests`: runtime error messages and propagation

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod control_tests;
mod error_tests;
mod expression_tests;

use crate::{buffer_handler, eval, new_environment, EvalError, InterpreterBuilder, Value};
use monkey_ir::{Program, StringInterner};

pub(crate) fn parse_program(source: &str, interner: &StringInterner) -> Program {
    let tokens = monkey_lexer::tokenize(source, interner);
    let output = monkey_parse::parse(&tokens, interner);
    assert!(
        !output.has_errors(),
        "unexpected parse errors for {source:?}: {:?}",
        output.error_messages()
    );
    output.program
}

/// Evaluate `source` in a fresh environment.
pub(crate) fn run(source: &str) -> Result<Value, EvalError> {
    let interner = StringInterner::new();
    let program = parse_program(source, &interner);
    eval(&program, &new_environment(), &interner)
}

/// What the REPL would print: the value's rendering or `ERROR: ...`.
pub(crate) fn inspect(source: &str) -> String {
    let interner = StringInterner::new();
    let program = parse_program(source, &interner);
    match eval(&program, &new_environment(), &interner) {
        Ok(value) => value.inspect(&interner),
        Err(error) => error.inspect(),
    }
}

/// Evaluate `source` and return the captured `puts` output with the result.
pub(crate) fn run_captured(source: &str) -> (Result<Value, EvalError>, String) {
    let interner = StringInterner::new();
    let program = parse_program(source, &interner);
    let output = buffer_handler();
    let result = InterpreterBuilder::new(&interner, program.arena.clone())
        .print_handler(output.clone())
        .build()
        .eval_program(&program);
    (result, output.output())
}

pub(crate) fn error_message(source: &str) -> String {
    match run(source) {
        Ok(value) => panic!("expected an error from {source:?}, got {value:?}"),
        Err(error) => error.to_string(),
    }
}
