pub mod condition_guard;
pub mod engine;
pub mod gap_audit;
pub mod indexer;
pub mod matcher;
pub mod pipeline;
pub mod range_set;
pub mod remark;
pub mod report;

pub use crate::domain::model::{
    AuditInput, AuditMode, AuditReport, AuditResult, CategoryProfile, Condition, ConflictResult,
    PartCatalog, Unit,
};
pub use crate::domain::ports::{CatalogLookup, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
