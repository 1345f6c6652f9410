use std::collections::{BTreeMap, BTreeSet};

use crate::core::remark::{extract_container_id, extract_detail};
use crate::domain::model::{Condition, Unit, UnitRecord};
use crate::domain::ports::CatalogLookup;

/// What a single raw container id holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerEntry {
    pub conditions: BTreeSet<Condition>,
    pub units: Vec<UnitRecord>,
}

/// Per-container view of the inventory, keyed by the raw id cut from each remark.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryIndex {
    containers: BTreeMap<String, ContainerEntry>,
    remarks: Vec<String>,
}

impl InventoryIndex {
    /// Indexes every unit that carries a remark. Descriptions come from
    /// `catalog`, falling back to the export name and then the part id.
    pub fn build<C: CatalogLookup + ?Sized>(units: &[Unit], catalog: &C) -> Self {
        let mut index = Self::default();
        let mut skipped = 0usize;

        for unit in units {
            let Some(remark) = unit.location() else {
                skipped += 1;
                continue;
            };

            let description = catalog
                .describe(&unit.id)
                .map(str::to_string)
                .or_else(|| unit.name.clone())
                .unwrap_or_else(|| unit.id.clone());

            let entry = index
                .containers
                .entry(extract_container_id(remark).to_string())
                .or_default();
            entry.conditions.insert(unit.condition);
            entry.units.push(UnitRecord {
                id: unit.id.clone(),
                description,
                condition: unit.condition,
                quantity: unit.quantity,
                location: extract_detail(remark).to_string(),
            });
            index.remarks.push(remark.to_string());
        }

        tracing::debug!(
            "Indexed {} units into {} containers ({} without remark)",
            index.remarks.len(),
            index.containers.len(),
            skipped
        );
        index
    }

    /// Trimmed remarks of all indexed units, in input order.
    pub fn remarks(&self) -> &[String] {
        &self.remarks
    }

    pub fn containers(&self) -> impl Iterator<Item = (&str, &ContainerEntry)> {
        self.containers.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    pub fn container(&self, id: &str) -> Option<&ContainerEntry> {
        self.containers.get(id)
    }

    pub fn len(&self) -> usize {
        self.remarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remarks.is_empty()
    }
}
