//! One-shot deploy procedure
//!
//! Linear, no branching recovery: load the environment file, resolve
//! the mode, synchronize `dist/` to the remote directory, report. A
//! failed run is simply re-run from scratch.

pub mod config;
pub mod env_file;
pub mod sync;

use std::path::Path;

use crate::error::SitepackResult;

pub use config::{DeployConfig, DeployMode, SyncOptions, EXCLUDE_PATTERNS, LOCAL_DIR};
pub use env_file::{EnvFile, ENV_FILE};
pub use sync::{detect_strategy, synchronize, SyncReport, TransferStrategy};

/// Run the whole deploy procedure for a project root.
///
/// Reads `.env.local`, builds the mode-scoped configuration, and
/// synchronizes the build output to the remote. Returns the report on
/// success; any failure propagates to the caller (non-zero exit).
pub fn run(
    project_root: &Path,
    mode: DeployMode,
    options: &SyncOptions,
) -> SitepackResult<SyncReport> {
    let env = EnvFile::load(project_root)?;
    let config = DeployConfig::from_env(mode, &env, project_root);
    synchronize(&config, options)
}
