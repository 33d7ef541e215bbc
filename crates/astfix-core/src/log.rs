//! Log sink used by the tree algorithms.
//!
//! The checker, fixer and reconstructor never write to the console
//! directly. They report through a [`LogSink`] handed to them by the caller:
//! the CLI passes a [`TracingSink`], tests pass a [`MemorySink`] and assert on
//! the recorded sequence.

use crate::node::AstNode;

/// Level of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Per-node traversal detail.
    Debug,
    /// Progress and applied fixes.
    Info,
    /// Warning-level rule findings.
    Warn,
    /// Error-level rule findings.
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Destination for log lines.
pub trait LogSink {
    /// Records one line at the given level.
    fn log(&mut self, level: Level, message: &str);

    /// Shorthand for [`Level::Debug`].
    fn debug(&mut self, message: &str) {
        self.log(Level::Debug, message);
    }

    /// Shorthand for [`Level::Info`].
    fn info(&mut self, message: &str) {
        self.log(Level::Info, message);
    }

    /// Shorthand for [`Level::Warn`].
    fn warn(&mut self, message: &str) {
        self.log(Level::Warn, message);
    }

    /// Shorthand for [`Level::Error`].
    fn error(&mut self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// Forwards log lines to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&mut self, level: Level, message: &str) {
        match level {
            Level::Debug => tracing::debug!("{message}"),
            Level::Info => tracing::info!("{message}"),
            Level::Warn => tracing::warn!("{message}"),
            Level::Error => tracing::error!("{message}"),
        }
    }
}

/// Keeps every log line in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Recorded lines in emission order.
    pub lines: Vec<(Level, String)>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded at exactly `level`.
    #[must_use]
    pub fn at(&self, level: Level) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    /// Number of lines recorded at exactly `level`.
    #[must_use]
    pub fn count(&self, level: Level) -> usize {
        self.lines.iter().filter(|(l, _)| *l == level).count()
    }
}

impl LogSink for MemorySink {
    fn log(&mut self, level: Level, message: &str) {
        self.lines.push((level, message.to_owned()));
    }
}

/// Formats the per-node traversal line.
///
/// The line is indented two spaces per depth level, newlines in the node
/// text are flattened to spaces, and the text is cut to `limit` characters
/// when a limit is given.
#[must_use]
pub fn node_line(node: &AstNode, depth: usize, limit: Option<usize>) -> String {
    let indent = "  ".repeat(depth);
    let flat = node.text().replace('\n', " ");
    let text: String = match limit {
        Some(n) => flat.chars().take(n).collect(),
        None => flat,
    };
    format!("{indent}Kind: {}, Text: {text}", node.kind())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_line_truncates_and_flattens() {
        let node = AstNode::new("ClassDeclaration", "class Dog extends Animal {\n  bark() {}\n}");
        assert_eq!(
            node_line(&node, 2, Some(20)),
            "    Kind: ClassDeclaration, Text: class Dog extends An"
        );
        assert_eq!(
            node_line(&node, 0, None),
            "Kind: ClassDeclaration, Text: class Dog extends Animal {   bark() {} }"
        );
    }

    #[test]
    fn node_line_counts_characters_not_bytes() {
        let node = AstNode::new("StringLiteral", "'ワンワン！'");
        assert_eq!(node_line(&node, 0, Some(3)), "Kind: StringLiteral, Text: 'ワン");
    }

    #[test]
    fn memory_sink_filters_by_level() {
        let mut sink = MemorySink::new();
        sink.debug("a");
        sink.warn("b");
        sink.debug("c");
        assert_eq!(sink.at(Level::Debug), vec!["a", "c"]);
        assert_eq!(sink.count(Level::Warn), 1);
        assert_eq!(sink.count(Level::Error), 0);
    }
}
