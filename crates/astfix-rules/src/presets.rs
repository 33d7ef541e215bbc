//! Rule registries.

use crate::{CallSuperInConstructor, DoubleQuotes, UseLetNeverReassigned};
use astfix_core::{FixRuleBox, LintRuleBox};

/// Which pipeline stage a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStage {
    /// Read-only check run by `astfix lint`.
    Check,
    /// Rewrite applied by `astfix format`.
    Fix,
}

impl std::fmt::Display for RuleStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Check => write!(f, "check"),
            Self::Fix => write!(f, "fix"),
        }
    }
}

/// Summary of a built-in rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInfo {
    /// Rule code.
    pub code: &'static str,
    /// Rule name, used as the config key.
    pub name: &'static str,
    /// What the rule does.
    pub description: &'static str,
    /// Stage the rule runs in.
    pub stage: RuleStage,
}

/// Returns every check rule, in evaluation order.
#[must_use]
pub fn lint_rules() -> Vec<LintRuleBox> {
    vec![Box::new(CallSuperInConstructor::new())]
}

/// Returns every fix rule, in evaluation order.
///
/// Declaration fixes run before literal fixes on the same node.
#[must_use]
pub fn fix_rules() -> Vec<FixRuleBox> {
    vec![
        Box::new(UseLetNeverReassigned::new()),
        Box::new(DoubleQuotes::new()),
    ]
}

/// Describes every built-in rule.
#[must_use]
pub fn rule_catalog() -> Vec<RuleInfo> {
    let checks = lint_rules().into_iter().map(|r| RuleInfo {
        code: r.code(),
        name: r.name(),
        description: r.description(),
        stage: RuleStage::Check,
    });
    let fixes = fix_rules().into_iter().map(|r| RuleInfo {
        code: r.code(),
        name: r.name(),
        description: r.description(),
        stage: RuleStage::Fix,
    });
    checks.chain(fixes).collect()
}

/// Names of every built-in rule, for config validation.
#[must_use]
pub fn rule_names() -> Vec<&'static str> {
    rule_catalog().into_iter().map(|info| info.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_all_rules() {
        let codes: Vec<_> = rule_catalog().iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["TS001", "TS101", "TS102"]);
    }

    #[test]
    fn names_are_unique() {
        let mut names = rule_names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"double-quotes"));
    }

    #[test]
    fn fix_order() {
        let names: Vec<_> = fix_rules().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["use-let-never-reassigned", "double-quotes"]);
    }
}
