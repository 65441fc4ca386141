//! Deploy configuration
//!
//! Connection parameters are an explicit immutable value built once per
//! invocation. Credential lookup branches on the mode enum instead of
//! interpolating variable names, so a typo in a key can't silently
//! select the wrong credential set.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::env_file::EnvFile;

/// Default SSH port
pub const DEFAULT_PORT: u16 = 22;

/// Local directory synchronized to the remote (the build output)
pub const LOCAL_DIR: &str = "dist";

/// Exclusion patterns applied on every deploy, regardless of mode:
/// the dependency directory, test-spec files, and the environment file.
pub const EXCLUDE_PATTERNS: &[&str] = &["node_modules", "src/**/*.spec.ts", ".env"];

/// Deploy target selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployMode {
    /// Staging target (the documented default)
    #[default]
    Demo,
    /// Production target
    Prod,
}

impl DeployMode {
    /// Resolve the mode from the CLI flags.
    ///
    /// Neither flag set means demo. Both flags set is rejected by the
    /// CLI parser before this runs.
    pub fn from_flags(demo: bool, prod: bool) -> Self {
        debug_assert!(!(demo && prod));
        if prod {
            Self::Prod
        } else {
            Self::Demo
        }
    }
}

impl fmt::Display for DeployMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Demo => write!(f, "demo"),
            Self::Prod => write!(f, "prod"),
        }
    }
}

/// Connection parameters plus the local/remote directory pair.
///
/// Missing variables become empty/None fields rather than early errors;
/// the connection failure downstream names the real problem.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub mode: DeployMode,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    /// SSH agent socket, when an agent is running
    pub agent_socket: Option<String>,
    pub local_dir: PathBuf,
    pub remote_dir: String,
}

impl DeployConfig {
    /// Build the configuration for a mode from environment variables.
    ///
    /// Demo reads the `FTP_DEMO_*` family, prod the `FTP_PROD_*`
    /// family; `SSH_AUTH_SOCK` is ambient and mode-independent. An
    /// optional `FTP_<MODE>_PORT` overrides the default SSH port;
    /// unset or unparsable values fall back to 22.
    pub fn from_env(mode: DeployMode, env: &EnvFile, project_root: &std::path::Path) -> Self {
        let (host, user, password, remote_dir, port) = match mode {
            DeployMode::Demo => (
                env.get("FTP_DEMO_HOST"),
                env.get("FTP_DEMO_USER"),
                env.get("FTP_DEMO_PASSWORD"),
                env.get("FTP_DEMO_DEST"),
                env.get("FTP_DEMO_PORT"),
            ),
            DeployMode::Prod => (
                env.get("FTP_PROD_HOST"),
                env.get("FTP_PROD_USER"),
                env.get("FTP_PROD_PASSWORD"),
                env.get("FTP_PROD_DEST"),
                env.get("FTP_PROD_PORT"),
            ),
        };

        Self {
            mode,
            host: host.unwrap_or_default(),
            port: port
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            user: user.unwrap_or_default(),
            password,
            agent_socket: env.get("SSH_AUTH_SOCK"),
            local_dir: project_root.join(LOCAL_DIR),
            remote_dir: remote_dir.unwrap_or_default(),
        }
    }

    /// `user@host` target string for the transfer tools
    pub fn ssh_target(&self) -> String {
        if self.user.is_empty() {
            self.host.clone()
        } else {
            format!("{}@{}", self.user, self.host)
        }
    }
}

/// Synchronization options, uniform across modes
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Stage and report only, no network transfer
    pub dry_run: bool,
    /// Re-upload everything instead of an incremental transfer
    pub force_upload: bool,
    /// Exclusion patterns (gitignore semantics)
    pub exclude: Vec<String>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            force_upload: false,
            exclude: EXCLUDE_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const DEMO_ENV: &str = "\
FTP_DEMO_HOST=demo.example.com
FTP_DEMO_USER=demo-user
FTP_DEMO_PASSWORD=demo-pass
FTP_DEMO_DEST=/var/www/demo
FTP_PROD_HOST=prod.example.com
FTP_PROD_USER=prod-user
FTP_PROD_PASSWORD=prod-pass
FTP_PROD_DEST=/var/www/prod
";

    #[test]
    fn default_mode_is_demo() {
        assert_eq!(DeployMode::default(), DeployMode::Demo);
        assert_eq!(DeployMode::from_flags(false, false), DeployMode::Demo);
    }

    #[test]
    fn flags_select_mode() {
        assert_eq!(DeployMode::from_flags(true, false), DeployMode::Demo);
        assert_eq!(DeployMode::from_flags(false, true), DeployMode::Prod);
    }

    #[test]
    fn demo_mode_reads_demo_family() {
        let env = EnvFile::from_content(DEMO_ENV);
        let config = DeployConfig::from_env(DeployMode::Demo, &env, Path::new("/site"));

        assert_eq!(config.host, "demo.example.com");
        assert_eq!(config.user, "demo-user");
        assert_eq!(config.password.as_deref(), Some("demo-pass"));
        assert_eq!(config.remote_dir, "/var/www/demo");
        assert_eq!(config.port, 22);
        assert_eq!(config.local_dir, Path::new("/site/dist"));
    }

    #[test]
    fn prod_mode_reads_prod_family() {
        let env = EnvFile::from_content(DEMO_ENV);
        let config = DeployConfig::from_env(DeployMode::Prod, &env, Path::new("/site"));

        assert_eq!(config.host, "prod.example.com");
        assert_eq!(config.user, "prod-user");
        assert_eq!(config.password.as_deref(), Some("prod-pass"));
        assert_eq!(config.remote_dir, "/var/www/prod");
    }

    #[test]
    fn missing_variables_become_empty_fields() {
        let env = EnvFile::from_content("");
        let config = DeployConfig::from_env(DeployMode::Prod, &env, Path::new("."));
        assert!(config.host.is_empty());
        assert!(config.user.is_empty());
        assert!(config.password.is_none());
        assert!(config.remote_dir.is_empty());
    }

    #[test]
    fn port_variable_overrides_default() {
        let env = EnvFile::from_content("FTP_PROD_HOST=h\nFTP_PROD_PORT=2222\n");
        let config = DeployConfig::from_env(DeployMode::Prod, &env, Path::new("."));
        assert_eq!(config.port, 2222);

        // other mode's port does not leak across
        let demo = DeployConfig::from_env(DeployMode::Demo, &env, Path::new("."));
        assert_eq!(demo.port, DEFAULT_PORT);
    }

    #[test]
    fn unparsable_port_falls_back_to_default() {
        let env = EnvFile::from_content("FTP_DEMO_PORT=not-a-port\n");
        let config = DeployConfig::from_env(DeployMode::Demo, &env, Path::new("."));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn ssh_target_formats() {
        let env = EnvFile::from_content(DEMO_ENV);
        let config = DeployConfig::from_env(DeployMode::Demo, &env, Path::new("."));
        assert_eq!(config.ssh_target(), "demo-user@demo.example.com");
    }

    #[test]
    fn exclusions_are_the_fixed_three_patterns() {
        let options = SyncOptions::default();
        assert_eq!(
            options.exclude,
            vec!["node_modules", "src/**/*.spec.ts", ".env"]
        );
        assert!(!options.dry_run);
        assert!(!options.force_upload);
    }

    #[test]
    fn mode_display() {
        assert_eq!(DeployMode::Demo.to_string(), "demo");
        assert_eq!(DeployMode::Prod.to_string(), "prod");
    }
}
