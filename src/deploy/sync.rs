//! Remote synchronization
//!
//! Stages the local output directory into a temporary root with the
//! exclusion patterns applied, then mirrors it to the remote directory
//! over SSH using a pluggable transfer strategy (rsync preferred, scp
//! fallback). One linear pass: no retry, no resume.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use ignore::gitignore::GitignoreBuilder;
use ignore::WalkBuilder;
use serde::Serialize;
use tempfile::TempDir;

use crate::error::{SitepackError, SitepackResult};

use super::config::{DeployConfig, SyncOptions, DEFAULT_PORT};

/// Result of one synchronization run
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Files staged for upload, relative to the local directory
    pub staged: Vec<PathBuf>,
    /// Transfer tool used, absent on a dry run
    pub tool: Option<&'static str>,
    pub dry_run: bool,
}

/// Strategy for mirroring the staging root to the remote
pub trait TransferStrategy {
    /// Tool name, for reporting
    fn name(&self) -> &'static str;

    /// Whether the tool is present on this system
    fn is_available(&self) -> bool;

    /// Mirror `staging_root` to `config.remote_dir` on the remote host
    fn transfer(
        &self,
        staging_root: &Path,
        config: &DeployConfig,
        options: &SyncOptions,
    ) -> SitepackResult<()>;
}

/// Transfer via rsync: incremental by default, deletes remote files
/// that fell out of the local tree (mirror semantics).
pub struct RsyncTransfer;

/// Transfer via scp: full re-upload, no remote deletion. Fallback for
/// systems without rsync.
pub struct ScpTransfer;

/// Pick the best available transfer strategy
pub fn detect_strategy() -> Option<Box<dyn TransferStrategy>> {
    let rsync = RsyncTransfer;
    if rsync.is_available() {
        return Some(Box::new(rsync));
    }
    let scp = ScpTransfer;
    if scp.is_available() {
        return Some(Box::new(scp));
    }
    None
}

/// Synchronize the local output directory to the remote.
///
/// Stages first so exclusions never reach the wire; a dry run stops
/// after staging and reports what would have been uploaded.
pub fn synchronize(config: &DeployConfig, options: &SyncOptions) -> SitepackResult<SyncReport> {
    if !config.local_dir.is_dir() {
        return Err(SitepackError::LocalDirNotFound {
            path: config.local_dir.clone(),
        });
    }

    let staging = TempDir::new()?;
    let staged = stage_files(&config.local_dir, staging.path(), &options.exclude)?;

    if options.dry_run {
        return Ok(SyncReport {
            staged,
            tool: None,
            dry_run: true,
        });
    }

    let strategy = detect_strategy().ok_or(SitepackError::TransferUnavailable)?;
    execute_transfer(&*strategy, staging.path(), staged, config, options)
}

/// Run the strategy and fold the outcome into a report. Any transfer
/// error propagates unchanged so the caller sees the underlying cause.
fn execute_transfer(
    strategy: &dyn TransferStrategy,
    staging_root: &Path,
    staged: Vec<PathBuf>,
    config: &DeployConfig,
    options: &SyncOptions,
) -> SitepackResult<SyncReport> {
    strategy.transfer(staging_root, config, options)?;
    Ok(SyncReport {
        staged,
        tool: Some(strategy.name()),
        dry_run: false,
    })
}

/// Copy the local directory into the staging root, skipping excluded
/// paths. Returns the staged relative paths, sorted.
fn stage_files(
    local_dir: &Path,
    staging_root: &Path,
    exclude: &[String],
) -> SitepackResult<Vec<PathBuf>> {
    let mut builder = GitignoreBuilder::new(local_dir);
    for pattern in exclude {
        builder
            .add_line(None, pattern)
            .map_err(|e| SitepackError::InvalidExclusion {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
    }
    let matcher = builder
        .build()
        .map_err(|e| SitepackError::InvalidExclusion {
            pattern: exclude.join(", "),
            message: e.to_string(),
        })?;

    let mut staged = Vec::new();

    let walk = WalkBuilder::new(local_dir)
        .standard_filters(false)
        .build();

    for result in walk {
        let entry = result.map_err(|e| SitepackError::Discovery {
            message: e.to_string(),
        })?;
        let path = entry.path();
        if path == local_dir {
            continue;
        }

        let relative = path
            .strip_prefix(local_dir)
            .expect("walk yields paths under its root");
        let is_dir = entry
            .file_type()
            .map(|ft| ft.is_dir())
            .unwrap_or(false);

        if matcher
            .matched_path_or_any_parents(relative, is_dir)
            .is_ignore()
        {
            continue;
        }
        if is_dir {
            continue;
        }

        let target = staging_root.join(relative);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(path, &target)?;
        staged.push(relative.to_path_buf());
    }

    staged.sort();
    Ok(staged)
}

/// Check whether a command runs at all (used for tool detection)
fn command_available(tool: &str, probe_arg: &str) -> bool {
    Command::new(tool)
        .arg(probe_arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Wrap a transfer command with sshpass when a password is configured
/// and sshpass is installed; otherwise auth falls back to the agent or
/// an interactive prompt on the inherited stdin.
fn auth_command(tool: &str, config: &DeployConfig) -> Command {
    if let Some(password) = &config.password {
        if command_available("sshpass", "-V") {
            let mut cmd = Command::new("sshpass");
            cmd.arg("-p").arg(password).arg(tool);
            return cmd;
        }
    }
    Command::new(tool)
}

fn run_transfer(mut cmd: Command, tool: &'static str) -> SitepackResult<()> {
    let status = cmd
        .stdin(Stdio::inherit()) // allow password input
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| SitepackError::TransferFailed {
            tool,
            message: e.to_string(),
        })?;

    if !status.success() {
        return Err(SitepackError::TransferFailed {
            tool,
            message: match status.code() {
                Some(code) => format!("exit code {code}"),
                None => "terminated by signal".to_string(),
            },
        });
    }
    Ok(())
}

impl RsyncTransfer {
    fn check_available() -> bool {
        command_available("rsync", "--version")
    }
}

impl TransferStrategy for RsyncTransfer {
    fn name(&self) -> &'static str {
        "rsync"
    }

    fn is_available(&self) -> bool {
        Self::check_available()
    }

    fn transfer(
        &self,
        staging_root: &Path,
        config: &DeployConfig,
        options: &SyncOptions,
    ) -> SitepackResult<()> {
        let mut cmd = auth_command("rsync", config);
        cmd.args(["-az", "--delete"]);
        if options.force_upload {
            cmd.arg("--ignore-times");
        }
        if config.port != DEFAULT_PORT {
            cmd.args(["-e", &format!("ssh -p {}", config.port)]);
        }
        // trailing slash: copy directory contents, not the directory
        cmd.arg(format!("{}/", staging_root.display()));
        cmd.arg(format!("{}:{}/", config.ssh_target(), config.remote_dir));

        run_transfer(cmd, "rsync")
    }
}

impl ScpTransfer {
    fn check_available() -> bool {
        // scp has no --version; ssh shipping alongside it is the probe
        command_available("ssh", "-V")
    }
}

impl TransferStrategy for ScpTransfer {
    fn name(&self) -> &'static str {
        "scp"
    }

    fn is_available(&self) -> bool {
        Self::check_available()
    }

    fn transfer(
        &self,
        staging_root: &Path,
        config: &DeployConfig,
        _options: &SyncOptions,
    ) -> SitepackResult<()> {
        let mut cmd = auth_command("scp", config);
        cmd.arg("-r");
        if config.port != DEFAULT_PORT {
            cmd.args(["-P", &config.port.to_string()]);
        }
        cmd.arg(format!("{}/.", staging_root.display()));
        cmd.arg(format!("{}:{}/", config.ssh_target(), config.remote_dir));

        run_transfer(cmd, "scp")
    }
}
