//! Asset transformation rules
//!
//! A rule pairs a file pattern with transformation options. The default
//! set reproduces the site's image pipeline: lossy compression for
//! raster formats, lossless for webp/avif, multipass SVG optimization,
//! and a verbatim copy of the JSON data files.

use serde::{Deserialize, Serialize};

/// Default quality for lossy raster compression
const RASTER_QUALITY: u8 = 80;

/// Transformation options for one asset rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum Transform {
    /// Lossy compression at a fixed quality
    Lossy { quality: u8 },
    /// Lossless re-encode
    Lossless,
    /// Re-encode with format defaults (no tunable knobs)
    Passthrough,
    /// SVG-specific optimization
    Svg {
        multipass: bool,
        keep_view_box: bool,
        keep_ids: bool,
    },
}

/// A (file-pattern, transformation-options) pair.
///
/// Patterns are extension globs; rule sets are disjoint by construction
/// and no rule mutates another's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRule {
    pub pattern: String,
    pub transform: Transform,
}

impl AssetRule {
    fn new(pattern: &str, transform: Transform) -> Self {
        Self {
            pattern: pattern.to_string(),
            transform,
        }
    }
}

/// A static-copy target: files matching `src` are copied verbatim into
/// the `dest` bucket of the output tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCopy {
    pub src: String,
    pub dest: String,
}

/// The default image transformation rule set
pub fn default_rules() -> Vec<AssetRule> {
    vec![
        AssetRule::new(
            "**/*.{png,jpg,jpeg,tiff}",
            Transform::Lossy {
                quality: RASTER_QUALITY,
            },
        ),
        AssetRule::new("**/*.{webp,avif}", Transform::Lossless),
        // gif has no lossless knob, re-encode with defaults
        AssetRule::new("**/*.gif", Transform::Passthrough),
        AssetRule::new(
            "**/*.svg",
            Transform::Svg {
                multipass: true,
                keep_view_box: true,
                keep_ids: true,
            },
        ),
    ]
}

/// The default static-copy targets
pub fn default_static_copies() -> Vec<StaticCopy> {
    vec![StaticCopy {
        src: "assets/data/*.json".to_string(),
        dest: "data".to_string(),
    }]
}
