//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::Interpreter;
use crate::{stdout_handler, Environment, SharedPrintHandler};
use monkey_ir::{SharedArena, StringInterner};

/// Builder for [`Interpreter`]s.
///
/// Defaults: a fresh environment, output to stdout, no call-depth limit.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: SharedArena,
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: SharedArena) -> Self {
        Self {
            interner,
            arena,
            env: None,
            print_handler: None,
            max_call_depth: None,
        }
    }

    /// Evaluate in `env`; top-level `let`s write into it.
    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Where `puts` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit nested user-function calls. `None` leaves depth bounded only
    /// by memory.
    #[must_use]
    pub fn max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env: self.env.unwrap_or_default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_depth: 0,
            max_call_depth: self.max_call_depth,
        }
    }
}
