//! CLI entrypoint for the Bython transcoder.
//!
//! The binary delegates to [`bython_cli::run`], which loads configuration,
//! parses the remaining arguments, transcodes the input and writes the result.

use std::io::{self, StderrLock, StdinLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdin: StdinLock<'static> = io::stdin().lock();
    let mut stdout: StdoutLock<'static> = io::stdout().lock();
    let mut stderr: StderrLock<'static> = io::stderr().lock();
    bython_cli::run(std::env::args_os(), &mut stdin, &mut stdout, &mut stderr)
}
