//! Colored progress lines.

use crate::models::ResourceGroup;
use colored::Colorize;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Printed when a resource group has no `admin_groups`.
pub const ADMIN_GROUPS_HELP: &str = r#"
    No role assignments configured, expected yaml structure:
    admin_groups:
      - name: <AD-Group-or-User-object-id>
        roles:
          - "Contributor"
          - "Reader"
      - name: <AD-Group-or-User-object-id>
        roles:
           ....
    It should be configured per resource group in the team config yaml.
    "#;

pub fn print_realm(name: &str) {
    println!("\nRealm: {}", name.cyan());
}

pub fn print_success(msg: &str) {
    println!("{}", msg.green());
}

pub fn print_warning(msg: &str) {
    println!("{}", msg.yellow());
}

pub fn print_error(msg: &str) {
    println!("{}", msg.red());
}

/// `{k1: v1, k2: v2}`, keys sorted.
pub fn format_tags(tags: &BTreeMap<String, String>) -> String {
    format!(
        "{{{}}}",
        tags.iter().map(|(k, v)| format!("{k}: {v}")).join(", ")
    )
}

pub fn print_resource_group(group: &ResourceGroup) {
    println!("\tName: {}", group.name.as_deref().unwrap_or("None"));
    println!("\tId: {}", group.id.as_deref().unwrap_or("None"));
    println!("\tLocation: {}", group.location);
    println!("\tTags: {}", format_tags(&group.tags));
}
