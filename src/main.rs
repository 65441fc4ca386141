//! Sitepack CLI - build-plan assembler and deploy tool
//!
//! Usage: sitepack <COMMAND>
//!
//! Commands:
//!   plan    Assemble the declarative build plan for the bundler
//!   deploy  Synchronize the build output to a remote server

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use sitepack::DeployMode;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { root } => commands::cmd_plan(&root, cli.json),
        Commands::Deploy {
            demo,
            prod,
            root,
            dry_run,
            force_upload,
        } => {
            let mode = DeployMode::from_flags(demo, prod);
            commands::cmd_deploy(&root, mode, dry_run, force_upload, cli.json)
        }
    }
}
