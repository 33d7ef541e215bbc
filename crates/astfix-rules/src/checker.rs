//! Read-only rule traversal.

use std::path::PathBuf;

use astfix_core::{
    node_line, AstNode, Config, FileContext, LintRuleBox, Location, LogSink, RuleLevel, Suggestion,
    Verdict, Violation,
};

use crate::presets::lint_rules;

/// Characters of node text shown in the per-node debug line.
const DEBUG_TEXT_LIMIT: usize = 20;

/// Walks a tree in pre-order, applying every enabled [`LintRule`](astfix_core::LintRule).
///
/// Findings are logged at their configured level and collected as
/// [`Violation`]s. Attach a [`FileContext`] to get real line/column
/// locations.
pub struct Checker<'a> {
    config: &'a Config,
    rules: Vec<LintRuleBox>,
    sink: &'a mut dyn LogSink,
    file: Option<&'a FileContext<'a>>,
    violations: Vec<Violation>,
}

impl<'a> Checker<'a> {
    /// Creates a checker running the built-in rules.
    #[must_use]
    pub fn new(config: &'a Config, sink: &'a mut dyn LogSink) -> Self {
        Self::with_rules(config, sink, lint_rules())
    }

    /// Creates a checker running `rules`.
    #[must_use]
    pub fn with_rules(
        config: &'a Config,
        sink: &'a mut dyn LogSink,
        rules: Vec<LintRuleBox>,
    ) -> Self {
        Self {
            config,
            rules,
            sink,
            file: None,
            violations: Vec::new(),
        }
    }

    /// Attaches the file the tree was parsed from.
    #[must_use]
    pub fn with_file(mut self, file: &'a FileContext<'a>) -> Self {
        self.file = Some(file);
        self
    }

    /// Checks `node` and its descendants.
    ///
    /// Returns true if `node` or any descendant violates an enabled rule.
    /// When a rule halts on a node, its children are not visited.
    pub fn check(&mut self, node: &AstNode, depth: usize) -> bool {
        if self.config.verbosity.is_debug() {
            self.sink
                .debug(&node_line(node, depth, Some(DEBUG_TEXT_LIMIT)));
        }

        let mut has_violation = false;
        for index in 0..self.rules.len() {
            let level = self.config.level(self.rules[index].name());
            if !level.is_enabled() {
                continue;
            }
            match self.rules[index].check(node) {
                Verdict::Clean => {}
                Verdict::Violated(message) => {
                    self.report(index, level, node, &message);
                    has_violation = true;
                }
                Verdict::Halt => return has_violation,
            }
        }

        for child in node.children() {
            if self.check(child, depth + 1) {
                has_violation = true;
            }
        }
        has_violation
    }

    fn report(&mut self, index: usize, level: RuleLevel, node: &AstNode, message: &str) {
        let Some(severity) = level.severity() else {
            return;
        };
        let rule = &self.rules[index];
        let location = match self.file {
            Some(file) => file.location(node.span()),
            None => Location::new(PathBuf::new(), 1, 1)
                .with_span(node.span().start, node.span().len()),
        };

        let line = if self.file.is_some() {
            format!(
                "{}:{}:{}: [{}] {message}",
                location.file.display(),
                location.line,
                location.column,
                rule.name()
            )
        } else {
            format!("[{}] {message}", rule.name())
        };

        let mut violation = Violation::new(rule.code(), rule.name(), severity, location, message);
        if let Some(hint) = rule.suggestion() {
            violation = violation.with_suggestion(Suggestion::new(hint));
        }
        self.violations.push(violation);

        match level {
            RuleLevel::Error => self.sink.error(&line),
            RuleLevel::Warn => self.sink.warn(&line),
            RuleLevel::Off => {}
        }
    }

    /// Violations found so far.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the checker, returning the violations found.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// Checks `node` and its descendants with the built-in rules.
///
/// Returns true if any enabled rule is violated. `depth` only indents the
/// debug lines.
pub fn check(node: &AstNode, depth: usize, config: &Config, sink: &mut dyn LogSink) -> bool {
    Checker::new(config, sink).check(node, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use astfix_core::{kind, Level, MemorySink, Severity, Verbosity};

    fn derived_class(first_call: &str) -> AstNode {
        let call = AstNode::new(kind::CALL_EXPRESSION, first_call);
        let statement = AstNode::new(kind::EXPRESSION_STATEMENT, format!("{first_call};"))
            .with_child(call);
        let body = AstNode::new(kind::BLOCK, "{}").with_child(statement);
        let ctor = AstNode::new(kind::CONSTRUCTOR, "constructor() {}").with_child(body);
        AstNode::new(kind::CLASS_DECLARATION, "class Dog extends Animal {}").with_children(vec![
            AstNode::new(kind::IDENTIFIER, "Dog"),
            AstNode::new(kind::HERITAGE_CLAUSE, "extends Animal"),
            ctor,
        ])
    }

    fn file(children: Vec<AstNode>) -> AstNode {
        AstNode::new(kind::SOURCE_FILE, "").with_children(children)
    }

    fn config(level: RuleLevel) -> Config {
        Config::new().with_rule("call-super-in-constructor", level)
    }

    #[test]
    fn clean_class_reports_nothing() {
        let root = file(vec![derived_class("super(name)")]);
        let mut sink = MemorySink::new();
        assert!(!check(&root, 0, &config(RuleLevel::Error), &mut sink));
        assert!(sink.lines.is_empty());
    }

    #[test]
    fn violation_logs_error_once() {
        let root = file(vec![derived_class("init()")]);
        let mut sink = MemorySink::new();
        assert!(check(&root, 0, &config(RuleLevel::Error), &mut sink));
        assert_eq!(sink.count(Level::Error), 1);
        assert_eq!(sink.count(Level::Warn), 0);
        assert_eq!(
            sink.at(Level::Error),
            vec!["[call-super-in-constructor] Constructor should call super() but does not"]
        );
    }

    #[test]
    fn violation_logs_warning_when_warn() {
        let root = file(vec![derived_class("init()")]);
        let mut sink = MemorySink::new();
        assert!(check(&root, 0, &config(RuleLevel::Warn), &mut sink));
        assert_eq!(sink.count(Level::Warn), 1);
        assert_eq!(sink.count(Level::Error), 0);
    }

    #[test]
    fn off_suppresses_check() {
        let root = file(vec![derived_class("init()")]);
        let mut sink = MemorySink::new();
        assert!(!check(&root, 0, &config(RuleLevel::Off), &mut sink));
        assert!(!check(&root, 0, &Config::new(), &mut sink));
        assert!(sink.lines.is_empty());
    }

    #[test]
    fn violations_propagate_from_nested_classes() {
        let outer = AstNode::new(kind::BLOCK, "{}").with_child(derived_class("init()"));
        let root = file(vec![derived_class("super()"), outer]);
        let mut sink = MemorySink::new();
        assert!(check(&root, 0, &config(RuleLevel::Error), &mut sink));
    }

    #[test]
    fn halt_skips_descendants() {
        // A derived class without a constructor hides a violating nested class.
        let nested = derived_class("init()");
        let holder = AstNode::new(kind::PROPERTY_DECLARATION, "inner = class {}").with_child(nested);
        let class = AstNode::new(kind::CLASS_DECLARATION, "class A extends B {}").with_children(vec![
            AstNode::new(kind::HERITAGE_CLAUSE, "extends B"),
            holder,
        ]);
        let root = file(vec![class]);

        let cfg = config(RuleLevel::Error).with_verbosity(Verbosity::Debug);
        let mut sink = MemorySink::new();
        assert!(!check(&root, 0, &cfg, &mut sink));
        assert_eq!(sink.count(Level::Error), 0);
        // Only the file and the halted class were visited.
        assert_eq!(sink.count(Level::Debug), 2);
    }

    #[test]
    fn debug_lines_are_pre_order_and_truncated() {
        let root = file(vec![derived_class("super()")]);
        let cfg = config(RuleLevel::Off).with_verbosity(Verbosity::Debug);
        let mut sink = MemorySink::new();
        check(&root, 0, &cfg, &mut sink);

        let lines = sink.at(Level::Debug);
        assert_eq!(lines.len(), root.node_count());
        assert_eq!(lines[0], "Kind: SourceFile, Text: ");
        assert_eq!(lines[1], "  Kind: ClassDeclaration, Text: class Dog extends An");
        assert_eq!(lines[2], "    Kind: Identifier, Text: Dog");
        assert!(lines[4].starts_with("    Kind: Constructor"));
        assert!(lines[5].starts_with("      Kind: Block"));
    }

    #[test]
    fn normal_verbosity_emits_no_debug_lines() {
        let root = file(vec![derived_class("super()")]);
        let mut sink = MemorySink::new();
        check(&root, 0, &config(RuleLevel::Error), &mut sink);
        assert_eq!(sink.count(Level::Debug), 0);
    }

    #[test]
    fn collects_violations_with_file_locations() {
        use astfix_core::Span;
        use std::path::Path;

        let source = "\nclass Dog extends Animal {}";
        let class = derived_class("init()").with_span(Span::new(1, source.len()));
        let root = file(vec![class]);
        let ctx = FileContext::new(Path::new("/p/dog.ts"), source, Path::new("/p"));

        let cfg = config(RuleLevel::Warn);
        let mut sink = MemorySink::new();
        let mut checker = Checker::new(&cfg, &mut sink).with_file(&ctx);
        assert!(checker.check(&root, 0));

        let violations = checker.into_violations();
        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.code, "TS001");
        assert_eq!(v.severity, Severity::Warning);
        assert_eq!((v.location.line, v.location.column), (2, 1));
        assert!(v.suggestion.is_some());
        assert_eq!(
            sink.at(Level::Warn),
            vec!["dog.ts:2:1: [call-super-in-constructor] Constructor should call super() but does not"]
        );
    }
}
