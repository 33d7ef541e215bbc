//! End-to-end tests: parse, check or fix, then render.

use std::path::Path;

use astfix_codegen::{render, RenderError};
use astfix_core::{kind, AstNode, Config, Level, MemorySink, RuleLevel, Verbosity};
use astfix_rules::{check, fix};
use astfix_ts::TypeScriptParser;

fn parse(source: &str) -> AstNode {
    TypeScriptParser::new()
        .parse(source, Path::new("input.ts"))
        .unwrap()
}

fn fix_config() -> Config {
    Config::new()
        .with_rule("use-let-never-reassigned", RuleLevel::Warn)
        .with_rule("double-quotes", RuleLevel::Warn)
}

fn check_config(level: RuleLevel) -> Config {
    Config::new().with_rule("call-super-in-constructor", level)
}

fn fix_source(source: &str) -> AstNode {
    let root = parse(source);
    fix(&root, 0, &fix_config(), &root, &mut MemorySink::new());
    root
}

fn declaration_lists(root: &AstNode) -> Vec<String> {
    root.walk()
        .filter(|n| n.is(kind::VARIABLE_DECLARATION_LIST))
        .map(AstNode::text_owned)
        .collect()
}

const DERIVED_WITH_SUPER: &str = "\
class Dog extends Animal {
    constructor(name: string) {
        super(name);
    }
}
";

const DERIVED_WITHOUT_SUPER: &str = "\
class Dog extends Animal {
    constructor(name: string) {
        this.name = name;
    }
}
";

#[test]
fn super_call_passes_check() {
    let root = parse(DERIVED_WITH_SUPER);
    let mut sink = MemorySink::new();
    assert!(!check(&root, 0, &check_config(RuleLevel::Error), &mut sink));
    assert!(sink.lines.is_empty());
}

#[test]
fn missing_super_call_is_reported_once_at_configured_level() {
    let root = parse(DERIVED_WITHOUT_SUPER);

    let mut sink = MemorySink::new();
    assert!(check(&root, 0, &check_config(RuleLevel::Error), &mut sink));
    assert_eq!(sink.count(Level::Error), 1);
    assert_eq!(sink.lines.len(), 1);

    let mut sink = MemorySink::new();
    assert!(check(&root, 0, &check_config(RuleLevel::Warn), &mut sink));
    assert_eq!(sink.count(Level::Warn), 1);
    assert_eq!(sink.lines.len(), 1);

    let mut sink = MemorySink::new();
    assert!(!check(&root, 0, &check_config(RuleLevel::Off), &mut sink));
    assert!(sink.lines.is_empty());
}

#[test]
fn other_first_call_is_reported() {
    let source = "\
class Dog extends Animal {
    constructor() {
        console.log('init');
        super();
    }
}
";
    let mut sink = MemorySink::new();
    assert!(check(&parse(source), 0, &check_config(RuleLevel::Error), &mut sink));
}

#[test]
fn base_classes_and_empty_constructors_pass() {
    let base = "class Animal {\n    constructor() {\n        init();\n    }\n}\n";
    let empty = "class Dog extends Animal {\n    constructor() {}\n}\n";
    for source in [base, empty] {
        let mut sink = MemorySink::new();
        assert!(!check(&parse(source), 0, &check_config(RuleLevel::Error), &mut sink));
    }
}

#[test]
fn round_trip_greeting() {
    let root = fix_source("let greeting: string = \"Hello, World\";");
    insta::assert_snapshot!(render(&root).unwrap(), @"const greeting: string = 'Hello, World';");
}

#[test]
fn reassigned_let_is_kept() {
    let root = fix_source("let x = 1; x = 2;");
    assert_eq!(declaration_lists(&root), vec!["let x = 1"]);
}

#[test]
fn never_reassigned_let_becomes_const() {
    let root = fix_source("let x = 1; console.log(x);");
    assert_eq!(declaration_lists(&root), vec!["const x = 1"]);
}

#[test]
fn loop_counter_is_kept() {
    let root = fix_source("let i = 0;\nwhile (i < 3) {\n    i++;\n}\nlet done = true;\n");
    assert_eq!(declaration_lists(&root), vec!["let i = 0", "const done = true"]);
}

#[test]
fn destructuring_let_is_kept() {
    let root = fix_source("let { a } = o;\na = 2;\n");
    assert_eq!(declaration_lists(&root), vec!["let { a } = o"]);

    let root = fix_source("let [a, b] = pair;\nb = 3;\n");
    assert_eq!(declaration_lists(&root), vec!["let [a, b] = pair"]);
}

#[test]
fn uninitialized_let_is_kept() {
    let root = fix_source("let x;\nlet y: string;\nconsole.log(x, y);\n");
    assert_eq!(declaration_lists(&root), vec!["let x", "let y: string"]);
}

#[test]
fn compound_assignment_keeps_let() {
    let root = fix_source("let total = 0;\ntotal += 5;\n");
    assert_eq!(declaration_lists(&root), vec!["let total = 0"]);
}

#[test]
fn fixing_twice_is_idempotent() {
    let source = "let a = \"it's\";\nlet b = 'ok';\nb = a;\nconsole.log(\"done\");\n";
    let root = parse(source);
    let config = fix_config();

    fix(&root, 0, &config, &root, &mut MemorySink::new());
    let first: Vec<String> = root.walk().map(AstNode::text_owned).collect();

    let mut sink = MemorySink::new();
    fix(&root, 0, &config, &root, &mut sink);
    let second: Vec<String> = root.walk().map(AstNode::text_owned).collect();

    assert_eq!(first, second);
    assert_eq!(sink.count(Level::Info), 0);
    assert_eq!(declaration_lists(&root), vec!["const a = \"it's\"", "let b = 'ok'"]);
}

#[test]
fn escaped_quotes_survive_round_trip() {
    let root = fix_source("const a = \"it's\";\n");
    assert_eq!(render(&root).unwrap(), "const a = 'it\\'s';\n");
}

#[test]
fn numeric_literal_fails_render() {
    let root = fix_source("let x = 1; console.log(x);");
    assert_eq!(
        render(&root),
        Err(RenderError::UnsupportedLiteral {
            kind: kind::NUMERIC_LITERAL.to_string()
        })
    );
}

#[test]
fn literal_arguments_fail_as_unsupported_literals() {
    for source in ["console.log(1);", "let x = 'a';\nx = true;\n"] {
        let err = render(&fix_source(source)).unwrap_err();
        assert!(
            matches!(err, RenderError::UnsupportedLiteral { .. }),
            "{source}: {err:?}"
        );
    }
}

#[test]
fn expression_statements_round_trip() {
    let root = fix_source("let msg = \"hi\";\nconsole.log(msg);\n");
    insta::assert_snapshot!(render(&root).unwrap(), @r"
    const msg = 'hi';
    console.log(msg);
    ");
}

#[test]
fn traversals_visit_parents_first() {
    let root = parse(DERIVED_WITH_SUPER);
    let expected: Vec<String> = root.walk().map(|n| n.kind().to_owned()).collect();
    let kind_of = |line: &str| {
        line.trim_start()
            .trim_start_matches("Kind: ")
            .split(',')
            .next()
            .unwrap_or_default()
            .to_owned()
    };

    let config = check_config(RuleLevel::Error).with_verbosity(Verbosity::Debug);
    let mut sink = MemorySink::new();
    check(&root, 0, &config, &mut sink);
    let checked: Vec<String> = sink.at(Level::Debug).into_iter().map(kind_of).collect();
    assert_eq!(checked, expected);

    let config = fix_config().with_verbosity(Verbosity::Debug);
    let mut sink = MemorySink::new();
    fix(&root, 0, &config, &root, &mut sink);
    let fixed: Vec<String> = sink.at(Level::Debug).into_iter().map(kind_of).collect();
    assert_eq!(fixed, expected);
}
