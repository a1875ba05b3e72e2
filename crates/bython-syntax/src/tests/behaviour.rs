//! Behaviour-driven development (BDD) step definitions for bython-syntax scenarios.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::{Bython, IndentWidth, TranscodeError};

// =============================================================================
// Test World
// =============================================================================

/// State shared across BDD steps.
#[derive(Default)]
struct TestWorld {
    /// Indent width for the run.
    width: Option<IndentWidth>,
    /// Source handed to the transcoder.
    source: Option<String>,
    /// Outcome of the transcoding run.
    result: Option<Result<String, TranscodeError>>,
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

/// Strips the surrounding quotes and expands `\n` and `\"` escapes.
fn unquote(text: &str) -> String {
    text.trim()
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
        .replace("\\\"", "\"")
        .replace("\\n", "\n")
}

// =============================================================================
// Given Steps
// =============================================================================

#[given("an indent width of {width}")]
fn given_indent_width(world: &RefCell<TestWorld>, width: String) {
    let columns: usize = width.trim().parse().expect("numeric width");
    world.borrow_mut().width = Some(IndentWidth::try_from(columns).expect("non-zero width"));
}

#[given("the source {source}")]
fn given_source(world: &RefCell<TestWorld>, source: String) {
    world.borrow_mut().source = Some(unquote(&source));
}

// =============================================================================
// When Steps
// =============================================================================

#[when("the source is transcoded")]
fn when_transcoded(world: &RefCell<TestWorld>) {
    let mut w = world.borrow_mut();
    let width = w.width.unwrap_or_default();
    let source = w.source.clone().expect("source should be set");
    w.result = Some(Bython::new(width).transcode_str(&source));
}

// =============================================================================
// Then Steps
// =============================================================================

#[then("the output is {expected}")]
fn then_output_is(world: &RefCell<TestWorld>, expected: String) {
    let w = world.borrow();
    let output = match w.result.as_ref().expect("result") {
        Ok(output) => output,
        Err(error) => panic!("expected success, got {error}"),
    };
    assert_eq!(output, &unquote(&expected));
}

#[then("transcoding fails mentioning {fragment}")]
fn then_fails_mentioning(world: &RefCell<TestWorld>, fragment: String) {
    let w = world.borrow();
    let error = match w.result.as_ref().expect("result") {
        Ok(output) => panic!("expected failure, got output {output:?}"),
        Err(error) => error.to_string(),
    };
    assert!(error.starts_with("mixed syntax detected"), "{error}");
    let needle = unquote(&fragment);
    assert!(error.contains(&needle), "{error:?} should mention {needle:?}");
}

// =============================================================================
// Scenario Bindings
// =============================================================================

#[scenario(
    path = "tests/features/bython_syntax.feature",
    name = "If/else blocks become indentation"
)]
fn if_else_blocks(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/bython_syntax.feature",
    name = "Set literals keep their braces"
)]
fn set_literals(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/bython_syntax.feature",
    name = "F-string expressions are left alone"
)]
fn f_string_expressions(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/bython_syntax.feature",
    name = "Colon style followed by brace style is rejected"
)]
fn colon_then_brace_rejected(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/bython_syntax.feature",
    name = "Brace style followed by colon style is rejected"
)]
fn brace_then_colon_rejected(world: RefCell<TestWorld>) {
    let _ = world;
}
