pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
pub use config::toml_config::AuditorConfig;
#[cfg(feature = "cli")]
pub use config::{Cli, Command};

pub use crate::core::{
    condition_guard::ConditionGuard, engine::AuditEngine, gap_audit::GapAuditor,
    indexer::InventoryIndex, matcher::CategoryMatcher, pipeline::StorePipeline,
};
pub use utils::error::{AuditError, Result};
