//! Local environment file
//!
//! Reads `.env.local` style files: one `KEY=VALUE` per line, `#`
//! comments and blank lines skipped, optional surrounding quotes on
//! values stripped. Values already present in the process environment
//! take precedence over file values.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::SitepackResult;

/// File name of the untracked local environment file
pub const ENV_FILE: &str = ".env.local";

/// Variables loaded from a local environment file
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    vars: HashMap<String, String>,
}

impl EnvFile {
    /// Load `.env.local` from the project root.
    ///
    /// A missing file yields an empty set; required variables are not
    /// validated here - a later connection failure surfaces any gap.
    pub fn load(project_root: &Path) -> SitepackResult<Self> {
        let path = project_root.join(ENV_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(Self::from_content(&content))
    }

    /// Parse variables from string content.
    pub fn from_content(content: &str) -> Self {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some((key, value)) = trimmed.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            vars.insert(key.to_string(), unquote(value.trim()).to_string());
        }

        Self { vars }
    }

    /// Look up a variable, preferring the process environment over the
    /// file so ambient overrides keep working.
    pub fn get(&self, key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .or_else(|| self.vars.get(key).cloned())
    }

    /// Number of variables loaded from the file
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True when no variables were loaded from the file
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Strip one matching pair of surrounding single or double quotes
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let env = EnvFile::load(dir.path()).unwrap();
        assert!(env.is_empty());
    }

    #[test]
    fn parses_key_value_lines() {
        let env = EnvFile::from_content("FTP_DEMO_HOST=demo.example.com\nFTP_DEMO_USER=web\n");
        assert_eq!(env.len(), 2);
        assert_eq!(env.get("FTP_DEMO_HOST").unwrap(), "demo.example.com");
        assert_eq!(env.get("FTP_DEMO_USER").unwrap(), "web");
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let env = EnvFile::from_content("# credentials\n\nFTP_DEMO_HOST=h\n# end\n");
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn strips_surrounding_quotes() {
        let env = EnvFile::from_content("A=\"quoted\"\nB='single'\nC=un\"touched\n");
        assert_eq!(env.get("A").unwrap(), "quoted");
        assert_eq!(env.get("B").unwrap(), "single");
        assert_eq!(env.get("C").unwrap(), "un\"touched");
    }

    #[test]
    fn first_equals_splits() {
        let env = EnvFile::from_content("URL=https://x.test/?a=1\n");
        assert_eq!(env.get("URL").unwrap(), "https://x.test/?a=1");
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let env = EnvFile::from_content("JUSTAWORD\n=novalue\nOK=yes\n");
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("OK").unwrap(), "yes");
    }

    #[test]
    fn process_environment_wins_over_file() {
        let key = "SITEPACK_ENV_FILE_TEST";
        std::env::set_var(key, "from-process");
        let env = EnvFile::from_content(&format!("{key}=from-file\n"));
        assert_eq!(env.get(key).unwrap(), "from-process");
        std::env::remove_var(key);
    }

    #[test]
    fn loads_from_project_root() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(ENV_FILE), "FTP_PROD_HOST=prod.example.com\n").unwrap();
        let env = EnvFile::load(dir.path()).unwrap();
        assert_eq!(env.get("FTP_PROD_HOST").unwrap(), "prod.example.com");
    }
}
