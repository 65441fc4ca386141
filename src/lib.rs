//! Sitepack - build-plan assembler and deploy tool for static sites
//!
//! Two independent procedures share this crate: assembling a
//! declarative build plan (page entries, template contexts, asset
//! transformation rules, output naming) for an external bundling
//! engine, and a one-shot synchronization of the build output to a
//! remote server over SSH.

pub mod deploy;
pub mod error;
pub mod plan;

// Re-exports for convenience
pub use deploy::{DeployConfig, DeployMode, EnvFile, SyncOptions, SyncReport};
pub use error::{SitepackError, SitepackResult};
pub use plan::{classify, merge_context, AssetCategory, BuildPlan, PageEntry, TemplateContext};
