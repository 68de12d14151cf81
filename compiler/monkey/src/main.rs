//! Monkey interpreter CLI.

use monkey::cli::{self, Command};
use monkey::{repl, run, Session};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    monkey::init_tracing();

    let options = match cli::parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };

    match options.command {
        Command::Help => {
            println!("{}", cli::USAGE);
            ExitCode::SUCCESS
        }
        Command::Repl => {
            let session = Session::new().max_call_depth(options.max_call_depth);
            let mut stdout = io::stdout().lock();
            let result = stdout
                .write_all(repl::greeting(&current_user()).as_bytes())
                .and_then(|()| repl::start(io::stdin().lock(), &mut stdout, &session));
            match result {
                Ok(()) => ExitCode::SUCCESS,
                Err(error) => {
                    eprintln!("error: {error}");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Run(path) => {
            let session = Session::with_print_handler(monkey_eval::stdout_handler())
                .max_call_depth(options.max_call_depth);
            match run::run_file(&path, &session) {
                Ok(true) => ExitCode::SUCCESS,
                Ok(false) => ExitCode::FAILURE,
                Err(error) => {
                    eprintln!("error: cannot read {}: {error}", path.display());
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string())
}
