//! One interpreter session: an interner and a top-level environment that
//! persist across every line or file evaluated through them.

use monkey_eval::{
    buffer_handler, new_environment, Environment, InterpreterBuilder, SharedPrintHandler,
};
use monkey_ir::StringInterner;

/// What evaluating one chunk of source produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// The source did not parse; nothing was evaluated.
    SyntaxErrors(Vec<String>),
    /// Inspected result value.
    Value(String),
    /// Inspected runtime error, `ERROR: ...`.
    RuntimeError(String),
    /// Nothing to show: the source produced no value, e.g. it was empty or
    /// ended with a `let`.
    Silent,
}

pub struct Session {
    interner: StringInterner,
    env: Environment,
    print_handler: SharedPrintHandler,
    max_call_depth: Option<usize>,
}

impl Session {
    /// A session whose `puts` output is buffered until the caller drains it.
    pub fn new() -> Self {
        Self::with_print_handler(buffer_handler())
    }

    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        Session {
            interner: StringInterner::new(),
            env: new_environment(),
            print_handler,
            max_call_depth: None,
        }
    }

    #[must_use]
    pub fn max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Parse and evaluate `source` against the session environment.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn eval_source(&self, source: &str) -> LineOutcome {
        let tokens = monkey_lexer::tokenize(source, &self.interner);
        let output = monkey_parse::parse(&tokens, &self.interner);
        if output.has_errors() {
            tracing::debug!(count = output.errors.len(), "syntax errors");
            return LineOutcome::SyntaxErrors(output.error_messages());
        }

        let program = output.program;
        let result = InterpreterBuilder::new(&self.interner, program.arena.clone())
            .environment(self.env.clone())
            .print_handler(self.print_handler.clone())
            .max_call_depth(self.max_call_depth)
            .build()
            .eval_program_completion(&program);

        match result {
            Err(error) => LineOutcome::RuntimeError(error.inspect()),
            Ok(None) => LineOutcome::Silent,
            Ok(Some(value)) => LineOutcome::Value(value.inspect(&self.interner)),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
