use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::ports::CatalogLookup;
use crate::utils::file_age::FileAge;

/// Stock condition of a stored unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Condition {
    New,
    Used,
    Unknown,
}

impl Condition {
    /// Normalizes an export condition code. Anything other than N/U (or the
    /// spelled-out words) is `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "N" | "NEW" => Condition::New,
            "U" | "USED" => Condition::Used,
            _ => Condition::Unknown,
        }
    }
}

/// One stored lot as read from the inventory export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    /// Raw item name from the export, used when the catalog has no entry.
    pub name: Option<String>,
    pub condition: Condition,
    pub quantity: u32,
    pub remark: Option<String>,
}

impl Unit {
    pub fn new(id: impl Into<String>, condition: Condition, quantity: u32, remark: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: None,
            condition,
            quantity,
            remark: remark.map(str::to_string),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Trimmed remark, `None` when absent or blank.
    pub fn location(&self) -> Option<&str> {
        self.remark
            .as_deref()
            .map(str::trim)
            .filter(|remark| !remark.is_empty())
    }
}

/// In-memory part catalog, injected into indexing instead of living in a global.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartCatalog {
    entries: HashMap<String, String>,
}

impl PartCatalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for PartCatalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl CatalogLookup for PartCatalog {
    fn describe(&self, part_id: &str) -> Option<&str> {
        self.entries.get(part_id).map(String::as_str)
    }
}

fn default_capacity() -> i64 {
    1
}

/// Most container numbers one category may govern.
pub const MAX_CATEGORY_SPAN: u64 = 100_000;

/// Most slots one container may declare.
pub const MAX_SLOT_CAPACITY: u32 = 10_000;

/// A configured group of containers audited together.
///
/// Field names on disk follow the profile files (`cap`, `is_wall`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    pub name: String,
    #[serde(default)]
    pub prefix: String,
    pub start: i64,
    pub end: i64,
    #[serde(rename = "cap", default = "default_capacity")]
    pub capacity: i64,
    #[serde(rename = "is_wall", default)]
    pub is_wall_mode: bool,
}

impl CategoryProfile {
    pub fn prefixed(name: &str, prefix: &str, start: i64, end: i64, capacity: i64) -> Self {
        Self {
            name: name.to_string(),
            prefix: prefix.to_string(),
            start,
            end,
            capacity,
            is_wall_mode: false,
        }
    }

    pub fn wall(name: &str, start: i64, end: i64) -> Self {
        Self {
            name: name.to_string(),
            prefix: String::new(),
            start,
            end,
            capacity: 1,
            is_wall_mode: true,
        }
    }

    /// Number of container numbers governed, 0 when `end < start` or the
    /// range is wider than [`MAX_CATEGORY_SPAN`].
    pub fn range_len(&self) -> u64 {
        if self.end < self.start {
            return 0;
        }
        let len = self.end.abs_diff(self.start).saturating_add(1);
        if len > MAX_CATEGORY_SPAN {
            0
        } else {
            len
        }
    }

    /// Slots per container. Non-positive capacities and capacities above
    /// [`MAX_SLOT_CAPACITY`] are treated as 0.
    pub fn slot_capacity(&self) -> u32 {
        if self.capacity < 1 || self.capacity > MAX_SLOT_CAPACITY as i64 {
            0
        } else {
            self.capacity as u32
        }
    }

    /// True when the range or capacity is past the limits an audit will walk.
    pub fn is_oversized(&self) -> bool {
        (self.end >= self.start && self.end.abs_diff(self.start) >= MAX_CATEGORY_SPAN)
            || self.capacity > MAX_SLOT_CAPACITY as i64
    }

    pub fn total_slots(&self) -> u64 {
        self.range_len().saturating_mul(self.slot_capacity() as u64)
    }

    /// Display label for a container number: prefix plus 3 digits, or 4 digits on the wall.
    pub fn label(&self, number: u32) -> String {
        if self.is_wall_mode {
            format!("{:04}", number)
        } else {
            format!("{}{:03}", self.prefix, number)
        }
    }
}

/// A unit as listed under its container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitRecord {
    pub id: String,
    pub description: String,
    pub condition: Condition,
    pub quantity: u32,
    /// Hole/slot detail taken from the remark, `Main` when none.
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingContainer {
    pub number: u32,
    pub label: String,
    pub missing_slots: Vec<u32>,
    pub ranges: Vec<String>,
}

/// Gap audit outcome for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditResult {
    pub name: String,
    pub missing: Vec<MissingContainer>,
    pub filled_slots: u64,
    pub total_slots: u64,
    pub fill_ratio: f64,
}

impl AuditResult {
    /// Whole percentage, rounded down.
    pub fn percent(&self) -> u32 {
        (self.fill_ratio * 100.0).floor() as u32
    }

    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerConflict {
    pub container: String,
    pub new_units: Vec<UnitRecord>,
    pub used_units: Vec<UnitRecord>,
    pub unknown_units: Vec<UnitRecord>,
}

impl ContainerConflict {
    pub fn new_quantity(&self) -> u64 {
        self.new_units.iter().map(|unit| unit.quantity as u64).sum()
    }

    pub fn used_quantity(&self) -> u64 {
        self.used_units.iter().map(|unit| unit.quantity as u64).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConflictResult {
    pub conflicts: Vec<ContainerConflict>,
}

impl ConflictResult {
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditMode {
    Gaps,
    Conditions,
    #[default]
    All,
}

impl AuditMode {
    pub fn runs_gaps(&self) -> bool {
        matches!(self, AuditMode::Gaps | AuditMode::All)
    }

    pub fn runs_conditions(&self) -> bool {
        matches!(self, AuditMode::Conditions | AuditMode::All)
    }
}

/// Everything extracted from the collaborators for one audit run.
#[derive(Debug, Clone)]
pub struct AuditInput {
    pub source: String,
    pub units: Vec<Unit>,
    pub catalog: PartCatalog,
    pub profile_name: String,
    pub categories: Vec<CategoryProfile>,
    pub inventory_age: Option<FileAge>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub source: String,
    pub profile: String,
    pub inventory_age: Option<FileAge>,
    pub units_indexed: usize,
    pub gaps: Option<Vec<AuditResult>>,
    pub conflicts: Option<ConflictResult>,
}
