//! Build plan assembly
//!
//! Combines page discovery, template contexts, asset rules, and the
//! output naming policy into one declarative, serializable plan. The
//! plan is consumed by an external bundling engine; assembling it
//! performs no writes.

pub mod assets;
pub mod context;
pub mod entries;
pub mod naming;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::SitepackResult;

pub use assets::{default_rules, default_static_copies, AssetRule, StaticCopy, Transform};
pub use context::{load_global_context, load_page_context, merge_context, TemplateContext};
pub use entries::discover_pages;
pub use naming::{classify, chunk_path, output_path, AssetCategory, SCRIPT_BUNDLE};

/// One page entry: input path plus its merged template context.
///
/// Created at plan-assembly time, immutable thereafter, consumed once
/// per build.
#[derive(Debug, Clone, Serialize)]
pub struct PageEntry {
    /// Absolute input file path for the bundler's multi-entry input
    pub input: PathBuf,
    /// Page context shallow-merged over the global context
    pub context: TemplateContext,
}

/// Fixed output layout: top-level buckets and the script bundle path
#[derive(Debug, Clone, Serialize)]
pub struct OutputLayout {
    pub images_bucket: &'static str,
    pub fonts_bucket: &'static str,
    pub data_bucket: &'static str,
    pub script_bundle: &'static str,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            images_bucket: "images",
            fonts_bucket: "fonts",
            data_bucket: "data",
            script_bundle: SCRIPT_BUNDLE,
        }
    }
}

/// A declarative build plan for the external bundling engine
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    /// Entry key -> page entry, stable-sorted by key
    pub entries: BTreeMap<String, PageEntry>,
    /// Image transformation rules
    pub rules: Vec<AssetRule>,
    /// Verbatim copy targets
    pub static_copies: Vec<StaticCopy>,
    /// Output buckets and bundle path
    pub layout: OutputLayout,
}

impl BuildPlan {
    /// Assemble the plan for a source tree.
    ///
    /// Discovers every template page, merges each page's context over
    /// the shared global context, and attaches the default asset rules
    /// and output layout. An empty tree yields an empty (valid) plan;
    /// any unreadable input aborts the whole assembly.
    pub fn assemble(source_root: &Path) -> SitepackResult<Self> {
        let pages = discover_pages(source_root)?;
        let global = load_global_context(source_root)?;

        let mut entries = BTreeMap::new();
        for (key, input) in pages {
            let page = load_page_context(source_root, &key)?;
            let context = merge_context(&page, &global);
            entries.insert(key, PageEntry { input, context });
        }

        Ok(Self {
            entries,
            rules: default_rules(),
            static_copies: default_static_copies(),
            layout: OutputLayout::default(),
        })
    }

    /// Number of page entries in the plan
    pub fn page_count(&self) -> usize {
        self.entries.len()
    }

    /// True when the source tree contained no pages
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
