//! `sitepack deploy` - synchronize the build output to a remote

use std::path::Path;

use anyhow::{Context, Result};

use sitepack::deploy::{self, DeployMode, SyncOptions};

pub fn cmd_deploy(
    root: &Path,
    mode: DeployMode,
    dry_run: bool,
    force_upload: bool,
    json: bool,
) -> Result<()> {
    let options = SyncOptions {
        dry_run,
        force_upload,
        ..SyncOptions::default()
    };

    if !json {
        println!("Deploying ({mode})...");
    }

    let report = deploy::run(root, mode, &options)
        .with_context(|| format!("deploy failed for mode '{mode}'"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.dry_run {
        println!("Dry run: {} file(s) staged, nothing uploaded", report.staged.len());
        for path in &report.staged {
            println!("  {}", path.display());
        }
    } else {
        println!(
            "Deploy complete: {} file(s) via {}",
            report.staged.len(),
            report.tool.unwrap_or("unknown")
        );
    }

    Ok(())
}
