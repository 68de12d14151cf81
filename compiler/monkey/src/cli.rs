//! Command-line arguments.

use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: monkey [options] [file]

With no file, starts an interactive session.

Options:
  --max-depth=<n>   Fail calls nested deeper than <n> (default: unlimited)
  -h, --help        Show this message

Environment:
  MONKEY_LOG        Tracing filter, e.g. MONKEY_LOG=monkey_eval=debug";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Repl,
    Run(PathBuf),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub max_call_depth: Option<usize>,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Options, String>
where
    I: IntoIterator<Item = String>,
{
    let mut file = None;
    let mut max_call_depth = None;

    for arg in args {
        if arg == "-h" || arg == "--help" {
            return Ok(Options {
                command: Command::Help,
                max_call_depth,
            });
        }
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            let depth = value
                .parse::<usize>()
                .map_err(|_| format!("invalid value for --max-depth: {value:?}"))?;
            max_call_depth = Some(depth);
        } else if arg.starts_with('-') {
            return Err(format!("unknown option: {arg}"));
        } else if file.is_some() {
            return Err(format!("unexpected argument: {arg}"));
        } else {
            file = Some(PathBuf::from(arg));
        }
    }

    Ok(Options {
        command: file.map_or(Command::Repl, Command::Run),
        max_call_depth,
    })
}
