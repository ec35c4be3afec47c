//! Operation output

use super::error::{ErrorKind, PlayerError};
use std::fmt;

/// Output of a single player operation: the lines to show the user and,
/// when the operation failed, the cause.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
    failure: Option<PlayerError>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-line successful report
    pub fn line(text: impl Into<String>) -> Self {
        let mut report = Self::new();
        report.push(text);
        report
    }

    /// Failed report rendered as `{prefix}: {reason}`
    pub fn failed(prefix: &str, error: PlayerError) -> Self {
        Self::line(format!("{}: {}", prefix, error)).with_failure(error)
    }

    pub(crate) fn push(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub(crate) fn with_failure(mut self, error: PlayerError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }

    pub fn failure(&self) -> Option<&PlayerError> {
        self.failure.as_ref()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.failure.as_ref().map(PlayerError::kind)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
