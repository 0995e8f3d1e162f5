//! List command implementation

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use soxrun_recipe::{Operation, ParamPlacement};

/// One row of `soxrun list --json`.
#[derive(Debug, Serialize)]
pub struct ListEntry {
    pub name: &'static str,
    pub alias: &'static str,
    pub tag: &'static str,
    pub params: &'static str,
    pub placement: ParamPlacement,
    pub description: &'static str,
}

/// Returns the registry as list entries, in registry order.
pub fn entries() -> Vec<ListEntry> {
    Operation::ALL
        .iter()
        .map(|op| {
            let recipe = op.recipe();
            ListEntry {
                name: op.as_str(),
                alias: op.alias(),
                tag: recipe.tag,
                params: recipe.params,
                placement: recipe.placement,
                description: recipe.description,
            }
        })
        .collect()
}

/// Run the list command
pub fn run(json: bool) -> Result<ExitCode> {
    let entries = entries();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Operations:".bold());
    for entry in &entries {
        let alias = if entry.alias == entry.name {
            String::new()
        } else {
            format!("({})", entry.alias)
        };
        println!(
            "  {} {} {:<8} {}",
            format!("{:<18}", entry.name).cyan(),
            format!("{:<16}", alias).dimmed(),
            entry.tag,
            entry.description
        );
    }

    Ok(ExitCode::SUCCESS)
}
