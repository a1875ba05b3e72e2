//! Command-line runtime for the `bython` transcoder.
//!
//! The runtime splits configuration flags from the command line, loads
//! layered configuration, installs telemetry, transcodes one source and
//! writes the result. It is exercised both from the binary entrypoint and from
//! tests where configuration loading and IO streams are substituted.

use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::process::ExitCode;

use bython_config::Config;
use bython_syntax::Bython;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;

mod cli;
mod config;
mod errors;
mod files;
mod telemetry;

use cli::Cli;
use config::split_config_arguments;
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
pub(crate) use errors::AppError;

/// Log target for CLI events.
const CLI_TARGET: &str = "bython_cli";

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, R: BufRead, W: Write, E: Write> {
    pub(crate) stdin: &'a mut R,
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
}

impl<'a, R: BufRead, W: Write, E: Write> IoStreams<'a, R, W, E> {
    pub(crate) const fn new(stdin: &'a mut R, stdout: &'a mut W, stderr: &'a mut E) -> Self {
        Self {
            stdin,
            stdout,
            stderr,
        }
    }
}

/// Outcome of argument parsing.
enum Parsed {
    /// Arguments describe a transcoding run.
    Run(Cli),
    /// Help or version text to print before exiting successfully.
    Informational(String),
}

struct CliRunner<'a, 'io, R: BufRead, W: Write, E: Write, L: ConfigLoader> {
    io: &'a mut IoStreams<'io, R, W, E>,
    loader: &'a L,
}

impl<'a, 'io, R, W, E, L> CliRunner<'a, 'io, R, W, E, L>
where
    R: BufRead,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    const fn new(io: &'a mut IoStreams<'io, R, W, E>, loader: &'a L) -> Self {
        Self { io, loader }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        let args: Vec<OsString> = args.into_iter().collect();
        match self.try_run(&args) {
            Ok(exit_code) => exit_code,
            Err(error) => {
                let _ = writeln!(self.io.stderr, "{error}");
                ExitCode::FAILURE
            }
        }
    }

    fn try_run(&mut self, args: &[OsString]) -> Result<ExitCode, AppError> {
        let split = split_config_arguments(args);
        let cli = match parse_cli(&split.cli_arguments)? {
            Parsed::Run(cli) => cli,
            Parsed::Informational(text) => {
                self.write_stdout(&text)?;
                return Ok(ExitCode::SUCCESS);
            }
        };

        let config = self.loader.load(&split.config_arguments)?;
        telemetry::initialise(&config)?;
        let output = self.transcode(&cli, &config)?;

        match cli.output_path() {
            Some(path) => {
                files::write_output(path, &output)
                    .map_err(|source| AppError::write_output(path, source))?;
                debug!(target: CLI_TARGET, %path, bytes = output.len(), "wrote output file");
            }
            None => self.write_stdout(&output)?,
        }
        Ok(ExitCode::SUCCESS)
    }

    fn transcode(&mut self, cli: &Cli, config: &Config) -> Result<String, AppError> {
        let mut bython = Bython::new(config.indent_width()?);
        let output = match cli.input_path() {
            Some(path) => {
                debug!(target: CLI_TARGET, %path, "reading source file");
                let source = files::read_source(path)
                    .map_err(|source| AppError::read_input(path, source))?;
                bython.transcode_str(&source)?
            }
            None => {
                debug!(target: CLI_TARGET, "reading source from stdin");
                bython.transcode_reader(&mut *self.io.stdin)?
            }
        };
        Ok(output)
    }

    fn write_stdout(&mut self, text: &str) -> Result<(), AppError> {
        self.io
            .stdout
            .write_all(text.as_bytes())
            .and_then(|()| self.io.stdout.flush())
            .map_err(AppError::WriteStdout)
    }
}

fn parse_cli(arguments: &[OsString]) -> Result<Parsed, AppError> {
    match Cli::try_parse_from(arguments) {
        Ok(cli) => Ok(Parsed::Run(cli)),
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            Ok(Parsed::Informational(error.render().to_string()))
        }
        Err(error) => Err(AppError::CliUsage(error)),
    }
}

/// Runs the CLI using the provided arguments and IO handles.
///
/// Returns [`ExitCode::SUCCESS`] when the input was transcoded and written,
/// and [`ExitCode::FAILURE`] after printing the error to `stderr` otherwise.
/// Output files are only created once transcoding has succeeded.
#[must_use]
pub fn run<I, R, W, E>(args: I, stdin: &mut R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut io = IoStreams::new(stdin, stdout, stderr);
    run_with_loader(args, &mut io, &OrthoConfigLoader)
}

pub(crate) fn run_with_loader<I, R, W, E, L>(
    args: I,
    io: &mut IoStreams<'_, R, W, E>,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    CliRunner::new(io, loader).run(args)
}

#[cfg(test)]
mod tests;
