//! Command implementations for the CLI binary

mod deploy;
mod plan;

pub use deploy::cmd_deploy;
pub use plan::cmd_plan;
