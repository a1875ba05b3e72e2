//! Pluggable per-line source checks run ahead of transcoding.

use crate::detector::StyleDetector;
use crate::error::TranscodeError;

/// A stateful check fed every source line before it is transcoded.
pub trait StyleCheck: Send {
    /// Inspects one line; `line_number` is one-based.
    ///
    /// # Errors
    ///
    /// Returns an error when the line violates the check. The run is aborted
    /// and no output is produced.
    fn check_line(&mut self, line: &str, line_number: usize) -> Result<(), TranscodeError>;

    /// Clears any state carried between lines.
    fn reset(&mut self);
}

/// Ordered collection of checks; the first failure wins.
pub struct StyleChecks {
    checks: Vec<Box<dyn StyleCheck>>,
}

impl StyleChecks {
    /// Creates a registry with no checks.
    #[must_use]
    pub const fn empty() -> Self {
        Self { checks: Vec::new() }
    }

    /// Appends a check.
    #[must_use]
    pub fn with_check(mut self, check: impl StyleCheck + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Runs every check on a line, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by a registered check.
    pub fn check_line(&mut self, line: &str, line_number: usize) -> Result<(), TranscodeError> {
        self.checks
            .iter_mut()
            .try_for_each(|check| check.check_line(line, line_number))
    }

    /// Resets every registered check.
    pub fn reset(&mut self) {
        self.checks.iter_mut().for_each(|check| check.reset());
    }

    /// Returns the number of registered checks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true when no checks are registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for StyleChecks {
    /// The mixed-style detector alone.
    fn default() -> Self {
        Self::empty().with_check(StyleDetector::new())
    }
}

impl std::fmt::Debug for StyleChecks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleChecks")
            .field("checks", &self.checks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlockStyle;

    /// Rejects any line containing a fixed needle.
    struct Forbid(&'static str);

    impl StyleCheck for Forbid {
        fn check_line(&mut self, line: &str, line_number: usize) -> Result<(), TranscodeError> {
            if line.contains(self.0) {
                Err(TranscodeError::mixed_syntax(
                    BlockStyle::Brace,
                    line_number,
                    BlockStyle::Colon,
                    0,
                ))
            } else {
                Ok(())
            }
        }

        fn reset(&mut self) {}
    }

    #[test]
    fn default_registry_holds_the_style_detector() {
        let checks = StyleChecks::default();
        assert_eq!(checks.len(), 1);
        assert!(StyleChecks::empty().is_empty());
    }

    #[test]
    fn first_failing_check_wins() {
        let mut checks = StyleChecks::empty()
            .with_check(Forbid("goto"))
            .with_check(StyleDetector::new());
        assert!(checks.check_line("x = 1", 1).is_ok());
        let error = checks.check_line("goto end", 2).expect_err("forbidden");
        assert_eq!(error.line(), Some(2));
    }

    #[test]
    fn reset_reaches_every_check() {
        let mut checks = StyleChecks::default();
        checks.check_line("def a() {", 1).expect("brace");
        checks.reset();
        assert!(checks.check_line("def b():", 1).is_ok());
    }
}
