//! Scanner warnings with colored terminal output.
//!
//! Provides deduplication so a stylesheet full of the same malformed construct
//! reports it once instead of once per occurrence. Each [`WarningLog`] belongs
//! to one input, so unrelated inputs never silence each other.

use std::collections::HashSet;

use owo_colors::{OwoColorize, Stream};

/// Warnings already printed for one input.
#[derive(Debug, Clone)]
pub struct WarningLog {
    /// Component named in every line, e.g. `"CSS"`
    component: &'static str,
    /// Messages printed so far
    seen: HashSet<String>,
}

impl WarningLog {
    /// Create an empty log for `component`.
    #[must_use]
    pub fn new(component: &'static str) -> Self {
        Self {
            component,
            seen: HashSet::new(),
        }
    }

    /// Warn about malformed input (prints once per unique message)
    ///
    /// # Example
    /// ```
    /// use lemur_common::warning::WarningLog;
    ///
    /// let mut log = WarningLog::new("CSS");
    /// log.warn_once("unterminated string");
    /// log.warn_once("unterminated string");
    /// assert_eq!(log.len(), 1);
    /// ```
    pub fn warn_once(&mut self, message: &str) {
        if self.record(message) {
            eprintln!("{}", self.render(message));
        }
    }

    /// Format a warning line, yellow only when colors are enabled for stderr.
    fn render(&self, message: &str) -> String {
        let line = format!("[lemur {}] ⚠ {message}", self.component);
        line.if_supports_color(Stream::Stderr, |text| text.yellow())
            .to_string()
    }

    /// Returns true if `message` has been reported.
    #[must_use]
    pub fn contains(&self, message: &str) -> bool {
        self.seen.contains(message)
    }

    /// Number of distinct messages reported.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns true if nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Record a warning and report whether it was new.
    fn record(&mut self, message: &str) -> bool {
        if self.seen.contains(message) {
            return false;
        }
        self.seen.insert(message.to_string())
    }
}
