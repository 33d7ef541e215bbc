//! In-place rewrite traversal.

use astfix_core::{node_line, AstNode, Config, FixRuleBox, LogSink};

use crate::presets::fix_rules;

/// Walks a tree in pre-order, rewriting node text with every enabled
/// [`FixRule`](astfix_core::FixRule).
///
/// Rules run on a node before its children are visited, in registry
/// order. Only `text` changes; kinds and structure are left alone.
pub struct Fixer<'a> {
    config: &'a Config,
    rules: Vec<FixRuleBox>,
    sink: &'a mut dyn LogSink,
    applied: usize,
}

impl<'a> Fixer<'a> {
    /// Creates a fixer running the built-in rules.
    #[must_use]
    pub fn new(config: &'a Config, sink: &'a mut dyn LogSink) -> Self {
        Self::with_rules(config, sink, fix_rules())
    }

    /// Creates a fixer running `rules`.
    #[must_use]
    pub fn with_rules(
        config: &'a Config,
        sink: &'a mut dyn LogSink,
        rules: Vec<FixRuleBox>,
    ) -> Self {
        Self {
            config,
            rules,
            sink,
            applied: 0,
        }
    }

    /// Fixes `node` and its descendants in place and returns `node`.
    ///
    /// `root` must be the root of the tree `node` belongs to.
    pub fn fix<'n>(&mut self, node: &'n AstNode, depth: usize, root: &AstNode) -> &'n AstNode {
        if self.config.verbosity.is_debug() {
            self.sink.debug(&node_line(node, depth, None));
        }

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                continue;
            }
            if let Some(text) = rule.fix(node, root) {
                node.set_text(text);
                self.applied += 1;
                self.sink
                    .info(&format!("[{}] {}", rule.name(), rule.message()));
            }
        }

        for child in node.children() {
            self.fix(child, depth + 1, root);
        }
        node
    }

    /// Number of rewrites applied so far.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.applied
    }
}

/// Fixes `node` and its descendants with the built-in rules.
///
/// Call with `node` and `root` both set to the tree root to fix a whole file.
pub fn fix<'n>(
    node: &'n AstNode,
    depth: usize,
    config: &Config,
    root: &AstNode,
    sink: &mut dyn LogSink,
) -> &'n AstNode {
    Fixer::new(config, sink).fix(node, depth, root)
}
