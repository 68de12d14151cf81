//! Driver for the Monkey interpreter.
//!
//! - [`repl`]: line-at-a-time interactive session over any reader/writer
//! - [`run`]: evaluate a whole source file once
//! - [`cli`]: command-line argument handling
//! - [`init_tracing`]: opt-in diagnostics via `MONKEY_LOG`

pub mod cli;
pub mod repl;
pub mod run;
mod session;
mod tracing_setup;

pub use session::{LineOutcome, Session};
pub use tracing_setup::init_tracing;
