use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AuditError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditorConfig {
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub profiles: ProfilesConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
    #[serde(default = "default_store_xml")]
    pub store_xml: String,
    #[serde(default = "default_parts_catalog")]
    pub parts_catalog: Option<String>,
    #[serde(default = "default_colors_csv")]
    pub colors_csv: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesConfig {
    #[serde(default = "default_profile_dir")]
    pub directory: String,
    pub active: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_stale_after_days")]
    pub stale_after_days: i64,
}

fn default_base_dir() -> String {
    ".".to_string()
}

fn default_store_xml() -> String {
    "store.xml".to_string()
}

fn default_parts_catalog() -> Option<String> {
    Some("parts.txt".to_string())
}

fn default_colors_csv() -> String {
    "bricklink_colors.csv".to_string()
}

fn default_profile_dir() -> String {
    "lego_profiles".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_stale_after_days() -> i64 {
    1
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            store_xml: default_store_xml(),
            parts_catalog: default_parts_catalog(),
            colors_csv: default_colors_csv(),
        }
    }
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            directory: default_profile_dir(),
            active: None,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            stale_after_days: default_stale_after_days(),
        }
    }
}

pub const REPORT_FORMATS: [&str; 2] = ["text", "json"];

impl AuditorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AuditError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path`, or the built-in defaults when the file does not exist.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.as_ref().display());
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AuditError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INVENTORY_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        use crate::utils::validation::{validate_one_of, validate_path, validate_positive_number};

        validate_path("inventory.base_dir", &self.inventory.base_dir)?;
        validate_path("inventory.store_xml", &self.inventory.store_xml)?;
        if let Some(catalog) = &self.inventory.parts_catalog {
            validate_path("inventory.parts_catalog", catalog)?;
        }
        validate_path("inventory.colors_csv", &self.inventory.colors_csv)?;
        validate_path("profiles.directory", &self.profiles.directory)?;
        validate_one_of("report.format", &self.report.format, &REPORT_FORMATS)?;
        validate_positive_number("report.stale_after_days", self.report.stale_after_days, 1)?;

        Ok(())
    }

    pub fn base_dir(&self) -> &str {
        &self.inventory.base_dir
    }

    pub fn wants_json(&self) -> bool {
        self.report.format == "json"
    }
}

impl ConfigProvider for AuditorConfig {
    fn store_xml(&self) -> &str {
        &self.inventory.store_xml
    }

    fn parts_catalog(&self) -> Option<&str> {
        self.inventory.parts_catalog.as_deref()
    }

    fn profile_dir(&self) -> &str {
        &self.profiles.directory
    }

    fn active_profile(&self) -> Option<&str> {
        self.profiles.active.as_deref()
    }

    fn stale_after_days(&self) -> i64 {
        self.report.stale_after_days
    }
}

impl Validate for AuditorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
