//! List rules command implementation.

use astfix_rules::rule_catalog;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<28} {:<7} Description", "Code", "Name", "Stage");
    println!("{}", "-".repeat(80));

    for rule in rule_catalog() {
        println!(
            "{:<8} {:<28} {:<7} {}",
            rule.code, rule.name, rule.stage, rule.description
        );
    }

    println!("\nLevels: error, warn, off (rules not listed in the config are off)");
    println!("Check rules run with `astfix lint`, fix rules with `astfix format`.");
}
