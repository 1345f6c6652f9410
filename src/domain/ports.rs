use crate::domain::model::{AuditInput, AuditReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
    /// File names (not paths) directly inside `dir`; empty when the directory is missing.
    fn list_files(&self, dir: &str)
        -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn modified(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Option<DateTime<Local>>> + Send;
}

/// Part id to human readable description.
pub trait CatalogLookup {
    fn describe(&self, part_id: &str) -> Option<&str>;
}

pub trait ConfigProvider: Send + Sync {
    fn store_xml(&self) -> &str;
    fn parts_catalog(&self) -> Option<&str>;
    fn profile_dir(&self) -> &str;
    fn active_profile(&self) -> Option<&str>;
    fn stale_after_days(&self) -> i64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<AuditInput>;
    async fn transform(&self, input: AuditInput) -> Result<AuditReport>;
    async fn load(&self, report: AuditReport) -> Result<String>;
}
