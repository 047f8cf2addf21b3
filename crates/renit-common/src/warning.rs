//! Parser warnings with deduplication.
//!
//! Avoids spamming the same warning for every occurrence in a template.
//! Each parse owns its own [`WarningLog`], so nothing is shared between
//! parses and the log is dropped with the parse that filled it.

use std::collections::HashSet;

/// Warnings already emitted during one run.
#[derive(Debug, Default)]
pub struct WarningLog {
    seen: HashSet<String>,
}

impl WarningLog {
    /// An empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Warn about a recoverable problem (emitted once per unique message)
    ///
    /// The warning is forwarded as a `tracing::warn!` event with the component
    /// attached as a field. Returns `true` when this call emitted the warning.
    ///
    /// # Example
    /// ```
    /// use renit_common::warning::WarningLog;
    ///
    /// let mut log = WarningLog::new();
    /// assert!(log.warn_once("Parser", "closing tag </p> matches no open element"));
    /// assert!(!log.warn_once("Parser", "closing tag </p> matches no open element"));
    /// ```
    pub fn warn_once(&mut self, component: &str, message: &str) -> bool {
        let should_emit = self.seen.insert(format!("[{component}] {message}"));
        if should_emit {
            tracing::warn!(component, "{message}");
        }
        should_emit
    }
}
