//! Output naming policy
//!
//! Pure classification of bundler-emitted assets into output buckets.
//! Must stay total and deterministic: every asset name the bundler can
//! emit maps to exactly one destination fragment.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Image extensions routed to the `images/` bucket (case-insensitive)
const IMAGE_EXTENSIONS: &[&str] = &[
    "webp", "jpg", "jpeg", "svg", "gif", "tiff", "png", "ico", "avif",
];

/// Font extensions routed to the `fonts/` bucket (case-insensitive)
const FONT_EXTENSIONS: &[&str] = &["woff", "woff2"];

/// Source folder segment stripped from image locations so the output
/// tree preserves the directory layout beneath it
const IMAGE_SOURCE_PREFIX: &str = "assets/images/";

/// Destination path of the consolidated script bundle
pub const SCRIPT_BUNDLE: &str = "js/main.js";

/// Asset category derived by extension sniffing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Images,
    Fonts,
    Other,
}

impl AssetCategory {
    /// Top-level output bucket for this category, if it has one
    pub fn bucket(self) -> Option<&'static str> {
        match self {
            Self::Images => Some("images"),
            Self::Fonts => Some("fonts"),
            Self::Other => None,
        }
    }
}

/// Classify an asset name by its extension, case-insensitively.
///
/// Names without an extension fall through to `Other`.
pub fn classify(name: &str) -> AssetCategory {
    let Some(ext) = Path::new(name).extension().and_then(|e| e.to_str()) else {
        return AssetCategory::Other;
    };
    let ext = ext.to_ascii_lowercase();

    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        AssetCategory::Images
    } else if FONT_EXTENSIONS.contains(&ext.as_str()) {
        AssetCategory::Fonts
    } else {
        AssetCategory::Other
    }
}

/// Compute the destination path fragment for an emitted asset.
///
/// `name` is the asset's declared file name; `original_location` is its
/// path in the source tree, used to preserve image subdirectories by
/// stripping the fixed `assets/images/` segment.
pub fn output_path(name: &str, original_location: &str) -> String {
    match classify(name) {
        AssetCategory::Images => {
            let relative = original_location
                .strip_prefix(IMAGE_SOURCE_PREFIX)
                .unwrap_or(original_location);
            let prefix = relative
                .rfind('/')
                .map(|i| &relative[..=i])
                .unwrap_or_default();
            format!("images/{prefix}{name}")
        }
        AssetCategory::Fonts => format!("fonts/{name}"),
        AssetCategory::Other => name.to_string(),
    }
}

/// Destination path for a secondary script chunk
pub fn chunk_path(name: &str) -> String {
    format!("js/{name}.js")
}
