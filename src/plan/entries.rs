//! Page entry discovery
//!
//! Enumerates template pages beneath the source root and derives each
//! page's entry key. Keys are relative paths with the `.html` extension
//! removed; the BTreeMap keeps enumeration stable across runs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{SitepackError, SitepackResult};

/// Discover all `*.html` pages beneath `source_root`.
///
/// Returns a map from entry key to absolute input path. Zero pages is
/// not an error; any unreadable path aborts discovery so a broken tree
/// fails loudly instead of producing a partial site.
pub fn discover_pages(source_root: &Path) -> SitepackResult<BTreeMap<String, PathBuf>> {
    if !source_root.is_dir() {
        return Err(SitepackError::SourceRootNotFound {
            path: source_root.to_path_buf(),
        });
    }

    let mut entries = BTreeMap::new();

    let walk = WalkBuilder::new(source_root)
        .standard_filters(false)
        .hidden(true)
        .build();

    for result in walk {
        let entry = result.map_err(|e| SitepackError::Discovery {
            message: e.to_string(),
        })?;

        let is_file = entry
            .file_type()
            .map(|ft| ft.is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }

        let key = entry_key(source_root, path)?;
        let absolute = path.canonicalize()?;
        entries.insert(key, absolute);
    }

    Ok(entries)
}

/// Derive the entry key for a page: its path relative to the source
/// root, with the `.html` extension stripped and `/` separators.
fn entry_key(source_root: &Path, page: &Path) -> SitepackResult<String> {
    let relative = page
        .strip_prefix(source_root)
        .map_err(|_| SitepackError::Discovery {
            message: format!("page {} is outside the source root", page.display()),
        })?;

    let without_ext = relative.with_extension("");
    let key = without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    Ok(key)
}
