mod cli;
mod repl;
mod rlpl;
mod rppl;

use std::{path::{Path, PathBuf}, process::ExitCode, time::Instant};

use clap::Parser;
use cli::{print_finished, print_running, print_warning, print_writing, report};
use scm_core::{
    environment::prelude::builtins,
    eval::prelude::Interpreter,
    lexer::prelude::lex,
    parser::prelude::parse,
    utils::prelude::Error,
};
use serde::Serialize;

const LEX_OUT: &str = "lex.out.json";
const PARSE_OUT: &str = "parse.out.json";

#[derive(Parser)]
#[command(version, about = "Interpreter for a small Scheme dialect")]
enum Command {
    /// Lexes, parses and evaluates a source file
    Run {
        /// Path of source file
        path: PathBuf,
        /// Write the token stream to lex.out.json
        #[arg(short = 'L', long, default_value_t = false)]
        lex_out: bool,
        /// Write the syntax tree to parse.out.json
        #[arg(short = 'P', long, default_value_t = false)]
        parse_out: bool,
    },
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl,
    /// Runs Read Eval Print Loop
    Repl,
}

fn main() -> ExitCode {
    cli::init_tracing();

    let result = match Command::parse() {
        Command::Run { path, lex_out, parse_out } => run(path, lex_out, parse_out),
        Command::Rlpl => rlpl::start().map_err(|err| Error::StdIo { err: err.kind() }),
        Command::Rppl => rppl::start().map_err(|err| Error::StdIo { err: err.kind() }),
        Command::Repl => repl::start().map_err(|err| Error::StdIo { err: err.kind() }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(path: PathBuf, lex_out: bool, parse_out: bool) -> Result<(), Error> {
    print_running(&path.display().to_string());
    let start = Instant::now();

    let src = std::fs::read_to_string(&path).map_err(|err| Error::StdIo { err: err.kind() })?;

    let tokens = lex(&src).map_err(|error| Error::Lex {
        path: path.clone(),
        src: src.clone(),
        error,
    })?;

    if lex_out {
        write_intermediate(Path::new(LEX_OUT), &tokens);
    }

    let root = parse(tokens).map_err(|error| Error::Parse {
        path: path.clone(),
        src: src.clone(),
        error,
    })?;

    if parse_out {
        write_intermediate(Path::new(PARSE_OUT), &root);
    }

    Interpreter::new(builtins(), std::io::stdout().lock())
        .evaluate(&root)
        .map_err(|error| Error::Eval { path, src, error })?;

    print_finished(start.elapsed());

    Ok(())
}

/// Dumps a pipeline stage as pretty JSON. A failed dump is reported but does not stop the run.
fn write_intermediate(out: &Path, value: &impl Serialize) {
    print_writing(&out.display().to_string());

    let written = serde_json::to_string_pretty(value)
        .map_err(|err| err.to_string())
        .and_then(|json| std::fs::write(out, json).map_err(|err| err.to_string()));

    if let Err(err) = written {
        tracing::warn!(path = %out.display(), %err, "failed to write intermediate results");
        print_warning(&format!("could not write {}: {err}", out.display()));
    }
}
