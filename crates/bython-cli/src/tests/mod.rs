//! Unit tests for the CLI runtime with substituted configuration and IO.

use std::cell::RefCell;
use std::ffi::OsString;
use std::process::ExitCode;

use bython_config::Config;
use camino::Utf8PathBuf;
use insta::assert_snapshot;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use crate::{AppError, ConfigLoader, IoStreams, run_with_loader};

const BRACE_SOURCE: &str = "def greet(name) {\n    print(name);\n}\n";
const MIXED_SOURCE: &str = "def one() {\n}\ndef two():\n    pass\n";

/// Loader returning a fixed configuration and recording what it was given.
struct StubLoader {
    config: Config,
    seen: RefCell<Vec<OsString>>,
}

impl StubLoader {
    fn with_indent(indent_size: usize) -> Self {
        Self {
            config: Config {
                indent_size,
                ..Config::default()
            },
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl ConfigLoader for StubLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        self.seen.borrow_mut().extend_from_slice(args);
        Ok(self.config.clone())
    }
}

/// Captured result of one CLI invocation.
struct Outcome {
    exit: ExitCode,
    stdout: String,
    stderr: String,
}

fn invoke(loader: &StubLoader, args: &[&str], stdin: &str) -> Outcome {
    let mut input = stdin.as_bytes();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let mut io = IoStreams::new(&mut input, &mut stdout, &mut stderr);
    let arguments = std::iter::once("bython")
        .chain(args.iter().copied())
        .map(OsString::from);

    let exit = run_with_loader(arguments, &mut io, loader);

    Outcome {
        exit,
        stdout: String::from_utf8(stdout).expect("stdout utf8"),
        stderr: String::from_utf8(stderr).expect("stderr utf8"),
    }
}

#[fixture]
fn loader() -> StubLoader {
    StubLoader::with_indent(2)
}

#[fixture]
fn workdir() -> TempDir {
    TempDir::new().expect("temp dir")
}

fn path_in(dir: &TempDir, name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join(name))
        .unwrap_or_else(|path| panic!("non UTF-8 temp path: {}", path.display()))
}

#[rstest]
#[case(&[])]
#[case(&["-"])]
fn stdin_is_transcoded_to_stdout(loader: StubLoader, #[case] args: &[&str]) {
    let outcome = invoke(&loader, args, BRACE_SOURCE);

    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(outcome.stdout, "def greet(name):\n  print(name)\n");
    assert!(outcome.stderr.is_empty(), "{}", outcome.stderr);
}

#[rstest]
fn files_are_read_and_written(loader: StubLoader, workdir: TempDir) {
    let input = path_in(&workdir, "greet.by");
    let output = path_in(&workdir, "greet.py");
    std::fs::write(&input, BRACE_SOURCE).expect("write input");

    let outcome = invoke(&loader, &[input.as_str(), "-o", output.as_str()], "");

    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert!(outcome.stdout.is_empty());
    assert_eq!(
        std::fs::read_to_string(&output).expect("read output"),
        "def greet(name):\n  print(name)\n"
    );
}

#[rstest]
fn mixed_syntax_fails_without_writing_output(loader: StubLoader, workdir: TempDir) {
    let output = path_in(&workdir, "mixed.py");

    let outcome = invoke(&loader, &["--output", output.as_str()], MIXED_SOURCE);

    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert_snapshot!(
        outcome.stderr.trim_end(),
        @"mixed syntax detected: colon-style block found at line 3, but brace-style block was established at line 1"
    );
    assert!(!output.exists(), "output must not be created on failure");
}

#[test]
fn zero_indent_is_rejected() {
    let loader = StubLoader::with_indent(0);

    let outcome = invoke(&loader, &[], BRACE_SOURCE);

    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert_snapshot!(
        outcome.stderr.trim_end(),
        @"invalid indent size: indent width must be a positive integer"
    );
}

#[rstest]
fn missing_input_file_is_reported(loader: StubLoader, workdir: TempDir) {
    let input = path_in(&workdir, "absent.by");

    let outcome = invoke(&loader, &[input.as_str()], "");

    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert!(
        outcome.stderr.starts_with(&format!("failed to read {input}:")),
        "{}",
        outcome.stderr
    );
}

#[rstest]
fn config_flags_reach_the_loader_only(loader: StubLoader) {
    let outcome = invoke(
        &loader,
        &["--indent-size", "2", "--log-format=compact", "-"],
        "x = 1;\n",
    );

    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert_eq!(outcome.stdout, "x = 1\n");
    let seen: Vec<String> = loader
        .seen
        .borrow()
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        seen,
        ["bython", "--indent-size", "2", "--log-format=compact"]
    );
}

#[rstest]
fn unknown_flags_are_usage_errors(loader: StubLoader) {
    let outcome = invoke(&loader, &["--frobnicate"], "");

    assert_eq!(outcome.exit, ExitCode::FAILURE);
    assert!(outcome.stderr.contains("--frobnicate"), "{}", outcome.stderr);
    assert!(loader.seen.borrow().is_empty(), "config must not load");
}

#[rstest]
fn help_is_printed_to_stdout(loader: StubLoader) {
    let outcome = invoke(&loader, &["--help"], "");

    assert_eq!(outcome.exit, ExitCode::SUCCESS);
    assert!(outcome.stdout.contains("Usage: bython"), "{}", outcome.stdout);
    assert!(outcome.stdout.contains("--output"));
}
