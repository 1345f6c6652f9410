use serde::Serialize;

use crate::domain::model::CategoryProfile;
use crate::domain::ports::Storage;
use crate::utils::error::{AuditError, Result};

pub const DEFAULT_PROFILE_NAME: &str = "Default_Store";

/// Category set used when a profile has never been saved.
pub fn default_categories() -> Vec<CategoryProfile> {
    vec![CategoryProfile::wall("Wall Drawers", 1, 100)]
}

/// Named category profiles kept as `<dir>/<name>.json`.
pub struct ProfileStore<'a, S: Storage> {
    storage: &'a S,
    directory: String,
}

impl<'a, S: Storage> ProfileStore<'a, S> {
    pub fn new(storage: &'a S, directory: impl Into<String>) -> Self {
        Self {
            storage,
            directory: directory.into(),
        }
    }

    fn path_for(&self, name: &str) -> String {
        format!("{}/{}.json", self.directory, name)
    }

    /// Sorted profile names, or just the default one when none are saved.
    pub async fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .storage
            .list_files(&self.directory)
            .await?
            .into_iter()
            .filter_map(|file| file.strip_suffix(".json").map(str::to_string))
            .collect();

        if names.is_empty() {
            return Ok(vec![DEFAULT_PROFILE_NAME.to_string()]);
        }
        names.sort();
        Ok(names)
    }

    pub async fn load(&self, name: &str) -> Result<Vec<CategoryProfile>> {
        let path = self.path_for(name);
        if !self.storage.exists(&path).await {
            tracing::info!("Profile '{}' not saved yet, using defaults", name);
            return Ok(default_categories());
        }

        let data = self.storage.read_file(&path).await?;
        serde_json::from_slice(&data).map_err(|e| AuditError::ProfileError {
            name: name.to_string(),
            message: e.to_string(),
        })
    }

    /// Writes the profile as JSON indented with four spaces.
    pub async fn save(&self, name: &str, categories: &[CategoryProfile]) -> Result<()> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        categories.serialize(&mut serializer)?;

        self.storage.write_file(&self.path_for(name), &buffer).await?;
        tracing::info!("Saved profile '{}' with {} categories", name, categories.len());
        Ok(())
    }
}
