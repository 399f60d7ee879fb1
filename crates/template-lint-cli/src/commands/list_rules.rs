//! List rules command implementation.

use crate::PLUGINS;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<32} {:<15} Description", "Plugin", "Name");
    println!("{}", "-".repeat(80));

    for plugin in PLUGINS {
        for rule in plugin.rules {
            println!("{:<32} {:<15} {}", plugin.name, rule.name, rule.description);
        }
    }

    println!("\nEnable rules in .template-lintrc.json, e.g.:");
    println!(r#"  {{ "rules": {{ "denylist": {{ "attributes": [{{ "name": "class", "values": "^test__" }}] }} }} }}"#);
}
