//! Interactive read-eval-print loop.

use crate::{LineOutcome, Session};
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = ">> ";

pub fn greeting(user: &str) -> String {
    format!("Hello {user}! This is the Monkey programming language!\nFeel free to type in commands\n")
}

/// Run the loop until `input` is exhausted.
///
/// Each line is parsed and evaluated against the session's environment.
/// Syntax errors are written one per line, tab-indented; `puts` output
/// appears before the line's result.
pub fn start<R: BufRead, W: Write>(input: R, output: &mut W, session: &Session) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let outcome = session.eval_source(&line?);
        output.write_all(session.print_handler().take_output().as_bytes())?;
        write_outcome(output, &outcome)?;
    }
}

/// Write an outcome the way the REPL shows it.
pub fn write_outcome<W: Write>(output: &mut W, outcome: &LineOutcome) -> io::Result<()> {
    match outcome {
        LineOutcome::SyntaxErrors(messages) => {
            for message in messages {
                writeln!(output, "\t{message}")?;
            }
            Ok(())
        }
        LineOutcome::Value(text) | LineOutcome::RuntimeError(text) => writeln!(output, "{text}"),
        LineOutcome::Silent => Ok(()),
    }
}
