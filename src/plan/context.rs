//! Template context loading and merging
//!
//! Each page renders with the shallow merge of its page-specific context
//! over the shared global context. Contexts are plain JSON objects read
//! from the `stores/` directory at plan-assembly time and immutable after.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{SitepackError, SitepackResult};

/// A template context: string keys to arbitrary JSON values
pub type TemplateContext = Map<String, Value>;

/// Relative path of the shared global context within the source root
const GLOBAL_CONTEXT: &str = "stores/context.json";

/// Directory of per-page contexts, keyed by entry key
const PAGE_CONTEXT_DIR: &str = "stores/pages";

/// Shallow-merge `page` over `global`: page keys win on collision.
///
/// Idempotent - merging the result over `global` again is a no-op,
/// since the page-side keys already take precedence.
pub fn merge_context(page: &TemplateContext, global: &TemplateContext) -> TemplateContext {
    let mut merged = global.clone();
    for (key, value) in page {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Load the shared global context from the source root.
///
/// A missing file yields the empty context.
pub fn load_global_context(source_root: &Path) -> SitepackResult<TemplateContext> {
    load_context_file(&source_root.join(GLOBAL_CONTEXT))
}

/// Load the page-specific context for an entry key.
///
/// Looks for `stores/pages/<key>.json`; a missing file yields the empty
/// context. Nested entry keys map to nested store paths.
pub fn load_page_context(source_root: &Path, entry_key: &str) -> SitepackResult<TemplateContext> {
    let file = source_root
        .join(PAGE_CONTEXT_DIR)
        .join(format!("{entry_key}.json"));
    load_context_file(&file)
}

fn load_context_file(file: &Path) -> SitepackResult<TemplateContext> {
    if !file.exists() {
        return Ok(TemplateContext::new());
    }

    let content = fs::read_to_string(file)?;
    let value: Value =
        serde_json::from_str(&content).map_err(|e| SitepackError::InvalidContext {
            file: file.to_path_buf(),
            message: e.to_string(),
        })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(SitepackError::ContextNotObject {
            file: file.to_path_buf(),
        }),
    }
}
