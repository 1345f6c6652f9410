use crate::adapters::catalog::parse_parts_catalog;
use crate::adapters::profiles::ProfileStore;
use crate::adapters::store_xml::parse_inventory;
use crate::core::condition_guard::ConditionGuard;
use crate::core::gap_audit::GapAuditor;
use crate::core::indexer::InventoryIndex;
use crate::core::report::render_text;
use crate::core::{AuditInput, AuditMode, AuditReport, ConfigProvider, PartCatalog, Pipeline, Storage};
use crate::utils::error::{AuditError, Result};
use crate::utils::file_age::FileAge;
use crate::utils::validation::profile_warnings;

/// Audits the store inventory export against the active category profile.
pub struct StorePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    mode: AuditMode,
    profile: Option<String>,
    json: bool,
}

impl<S: Storage, C: ConfigProvider> StorePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            mode: AuditMode::default(),
            profile: None,
            json: false,
        }
    }

    pub fn with_mode(mut self, mode: AuditMode) -> Self {
        self.mode = mode;
        self
    }

    /// Audit this profile instead of the configured one.
    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    async fn load_catalog(&self) -> PartCatalog {
        let Some(path) = self.config.parts_catalog() else {
            return PartCatalog::default();
        };
        if !self.storage.exists(path).await {
            tracing::debug!("No parts catalog at {}, using export names", path);
            return PartCatalog::default();
        }

        let parsed = match self.storage.read_file(path).await {
            Ok(data) => parse_parts_catalog(&data),
            Err(e) => Err(e),
        };
        match parsed {
            Ok(catalog) => {
                tracing::debug!("Loaded {} catalog entries from {}", catalog.len(), path);
                catalog
            }
            Err(e) => {
                tracing::warn!("Parts catalog {} unreadable, using export names: {}", path, e);
                PartCatalog::default()
            }
        }
    }

    async fn resolve_profile(&self, store: &ProfileStore<'_, S>) -> Result<String> {
        if let Some(name) = self.profile.as_deref().or(self.config.active_profile()) {
            return Ok(name.to_string());
        }
        let names = store.list().await?;
        Ok(names
            .into_iter()
            .next()
            .unwrap_or_else(|| crate::adapters::profiles::DEFAULT_PROFILE_NAME.to_string()))
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for StorePipeline<S, C> {
    async fn extract(&self) -> Result<AuditInput> {
        let source = self.config.store_xml().to_string();
        if !self.storage.exists(&source).await {
            return Err(AuditError::InventoryNotFound { path: source });
        }

        let data = self.storage.read_file(&source).await?;
        let units = parse_inventory(&String::from_utf8_lossy(&data))?;
        let inventory_age = self.storage.modified(&source).await.map(FileAge::since);
        let catalog = self.load_catalog().await;

        let store = ProfileStore::new(&self.storage, self.config.profile_dir());
        let profile_name = self.resolve_profile(&store).await?;
        let categories = store.load(&profile_name).await?;
        for warning in profile_warnings(&categories) {
            tracing::warn!("Profile '{}': {}", profile_name, warning);
        }

        Ok(AuditInput {
            source,
            units,
            catalog,
            profile_name,
            categories,
            inventory_age,
        })
    }

    async fn transform(&self, input: AuditInput) -> Result<AuditReport> {
        let index = InventoryIndex::build(&input.units, &input.catalog);

        let gaps = self
            .mode
            .runs_gaps()
            .then(|| GapAuditor::new().run(&input.categories, index.remarks()));
        let conflicts = self
            .mode
            .runs_conditions()
            .then(|| ConditionGuard::new().detect(&index));

        Ok(AuditReport {
            source: input.source,
            profile: input.profile_name,
            inventory_age: input.inventory_age,
            units_indexed: index.len(),
            gaps,
            conflicts,
        })
    }

    async fn load(&self, report: AuditReport) -> Result<String> {
        if self.json {
            return Ok(serde_json::to_string_pretty(&report)?);
        }
        Ok(render_text(&report, self.config.stale_after_days()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use crate::config::toml_config::AuditorConfig;
    use crate::domain::model::CategoryProfile;
    use tempfile::TempDir;

    const STORE_XML: &str = r#"<INVENTORY>
<ITEM><ITEMID>3001</ITEMID><ITEMNAME>Brick 2 x 4</ITEMNAME><QTY>5</QTY><CONDITION>N</CONDITION><REMARKS>C1-1</REMARKS></ITEM>
<ITEM><ITEMID>3002</ITEMID><QTY>2</QTY><CONDITION>U</CONDITION><REMARKS>C1-2</REMARKS></ITEM>
<ITEM><ITEMID>3003</ITEMID><QTY>1</QTY><CONDITION>N</CONDITION></ITEM>
</INVENTORY>"#;

    async fn pipeline_in(temp_dir: &TempDir, mode: AuditMode) -> StorePipeline<LocalStorage, AuditorConfig> {
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        storage.write_file("store.xml", STORE_XML.as_bytes()).await.unwrap();
        ProfileStore::new(&storage, "lego_profiles")
            .save("Shop", &[CategoryProfile::prefixed("Cases", "C", 1, 2, 2)])
            .await
            .unwrap();
        StorePipeline::new(storage, AuditorConfig::default()).with_mode(mode)
    }

    #[tokio::test]
    async fn test_extract_transform_load() {
        let temp_dir = TempDir::new().unwrap();
        let pipeline = pipeline_in(&temp_dir, AuditMode::All).await;

        let input = pipeline.extract().await.unwrap();
        assert_eq!(input.profile_name, "Shop");
        assert_eq!(input.units.len(), 3);
        assert!(input.inventory_age.is_some());
        assert!(input.catalog.is_empty());

        let report = pipeline.transform(input).await.unwrap();
        assert_eq!(report.units_indexed, 2);

        let gaps = report.gaps.as_ref().unwrap();
        assert_eq!(gaps[0].fill_ratio, 0.5);
        assert_eq!(gaps[0].missing[0].label, "C002");

        let conflicts = report.conflicts.as_ref().unwrap();
        assert_eq!(conflicts.conflicts[0].container, "C1");

        let text = pipeline.load(report).await.unwrap();
        assert!(text.contains("Cases: 50%"));
        assert!(text.contains("🔴 Conflict: C1"));
    }

    #[tokio::test]
    async fn test_mode_limits_analyses() {
        let temp_dir = TempDir::new().unwrap();
        let pipeline = pipeline_in(&temp_dir, AuditMode::Conditions).await;

        let input = pipeline.extract().await.unwrap();
        let report = pipeline.transform(input).await.unwrap();
        assert!(report.gaps.is_none());
        assert!(report.conflicts.is_some());
    }

    #[tokio::test]
    async fn test_missing_inventory_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        let pipeline = StorePipeline::new(storage, AuditorConfig::default());

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, AuditError::InventoryNotFound { .. }));
    }

    #[tokio::test]
    async fn test_json_output() {
        let temp_dir = TempDir::new().unwrap();
        let pipeline = pipeline_in(&temp_dir, AuditMode::Gaps).await.with_json(true);

        let input = pipeline.extract().await.unwrap();
        let report = pipeline.transform(input).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&pipeline.load(report).await.unwrap()).unwrap();

        assert_eq!(json["profile"], "Shop");
        assert_eq!(json["gaps"][0]["missing"][0]["ranges"][0], "01-02");
        assert!(json["conflicts"].is_null());
    }
}
