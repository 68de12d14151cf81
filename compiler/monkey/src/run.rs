//! Whole-file evaluation.
//!
//! A file runs like one long REPL line, except that its final value is not
//! printed: only `puts` output reaches stdout. Syntax and runtime errors go
//! to the error stream and make the run fail.

use crate::{repl, LineOutcome, Session};
use std::io::{self, Write};
use std::path::Path;

/// Evaluate `source`. Returns `Ok(false)` if it failed to parse or raised
/// a runtime error.
pub fn run_source<W: Write, E: Write>(
    source: &str,
    session: &Session,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool> {
    let outcome = session.eval_source(source);
    out.write_all(session.print_handler().take_output().as_bytes())?;
    match &outcome {
        LineOutcome::Value(_) | LineOutcome::Silent => Ok(true),
        LineOutcome::SyntaxErrors(_) | LineOutcome::RuntimeError(_) => {
            repl::write_outcome(err, &outcome)?;
            Ok(false)
        }
    }
}

/// Read `path` and evaluate it with stdout and stderr as the streams.
pub fn run_file(path: &Path, session: &Session) -> io::Result<bool> {
    let source = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "running file");
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_source(&source, session, &mut stdout.lock(), &mut stderr.lock())
}
