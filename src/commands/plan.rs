//! `sitepack plan` - assemble and print the build plan

use std::path::Path;

use anyhow::{Context, Result};

use sitepack::BuildPlan;

pub fn cmd_plan(root: &Path, json: bool) -> Result<()> {
    let plan = BuildPlan::assemble(root)
        .with_context(|| format!("failed to assemble build plan for {}", root.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Build plan for {}", root.display());
    if plan.is_empty() {
        println!("  no pages discovered (empty plan)");
    } else {
        println!("  {} page(s):", plan.page_count());
        for (key, entry) in &plan.entries {
            println!("    {key} <- {}", entry.input.display());
        }
    }
    println!(
        "  {} asset rule(s), {} static copy target(s)",
        plan.rules.len(),
        plan.static_copies.len()
    );
    println!("  script bundle: {}", plan.layout.script_bundle);

    Ok(())
}
