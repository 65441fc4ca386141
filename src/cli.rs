use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sitepack - build-plan assembler and deploy tool for static sites
#[derive(Parser, Debug)]
#[command(name = "sitepack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble the declarative build plan for the bundler
    Plan {
        /// Source tree root
        #[arg(long, default_value = "src")]
        root: PathBuf,
    },

    /// Synchronize the build output to a remote server
    Deploy {
        /// Deploy to the demo target (the default)
        #[arg(long, conflicts_with = "prod")]
        demo: bool,

        /// Deploy to the production target
        #[arg(long, conflicts_with = "demo")]
        prod: bool,

        /// Project root holding .env.local and dist/
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Stage and report without uploading
        #[arg(long)]
        dry_run: bool,

        /// Re-upload all files instead of an incremental transfer
        #[arg(long)]
        force_upload: bool,
    },
}
