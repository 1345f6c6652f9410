use crate::core::indexer::InventoryIndex;
use crate::domain::model::{Condition, ConflictResult, ContainerConflict};

/// Flags containers that hold stock of more than one condition.
///
/// Works on raw container ids from the index, so it is independent of any
/// category configuration. `Unknown` is its own condition: paired with New
/// or Used it is a conflict, and such units are listed separately.
#[derive(Debug, Default)]
pub struct ConditionGuard;

impl ConditionGuard {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, index: &InventoryIndex) -> ConflictResult {
        let conflicts: Vec<ContainerConflict> = index
            .containers()
            .filter(|(_, entry)| entry.conditions.len() > 1)
            .map(|(container, entry)| {
                let with = |condition: Condition| {
                    entry
                        .units
                        .iter()
                        .filter(|unit| unit.condition == condition)
                        .cloned()
                        .collect::<Vec<_>>()
                };
                ContainerConflict {
                    container: container.to_string(),
                    new_units: with(Condition::New),
                    used_units: with(Condition::Used),
                    unknown_units: with(Condition::Unknown),
                }
            })
            .collect();

        if !conflicts.is_empty() {
            tracing::info!("Found {} mixed containers", conflicts.len());
        }
        ConflictResult { conflicts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PartCatalog, Unit};

    fn detect(units: &[Unit]) -> ConflictResult {
        let index = InventoryIndex::build(units, &PartCatalog::default());
        ConditionGuard::new().detect(&index)
    }

    #[test]
    fn test_mixed_container_is_reported() {
        let result = detect(&[
            Unit::new("3001", Condition::New, 6, Some("A1-1")),
            Unit::new("3001", Condition::Used, 2, Some("A1-2")),
            Unit::new("3002", Condition::New, 3, Some("A1-3")),
        ]);

        assert_eq!(result.conflicts.len(), 1);
        let conflict = &result.conflicts[0];
        assert_eq!(conflict.container, "A1");
        assert_eq!(conflict.new_units.len(), 2);
        assert_eq!(conflict.used_units.len(), 1);
        assert_eq!(conflict.new_quantity(), 9);
        assert_eq!(conflict.used_quantity(), 2);
    }

    #[test]
    fn test_single_condition_is_clean() {
        let result = detect(&[
            Unit::new("3001", Condition::New, 1, Some("A1-1")),
            Unit::new("3002", Condition::New, 1, Some("A1-2")),
            Unit::new("3003", Condition::Used, 1, Some("B1")),
        ]);
        assert!(result.is_clean());
    }

    #[test]
    fn test_unknown_paired_with_known_condition_conflicts() {
        let result = detect(&[
            Unit::new("3001", Condition::Used, 1, Some("C4")),
            Unit::new("3002", Condition::Unknown, 1, Some("C4-2")),
        ]);

        assert_eq!(result.conflicts.len(), 1);
        assert!(result.conflicts[0].new_units.is_empty());
        assert_eq!(result.conflicts[0].used_units.len(), 1);
        assert_eq!(result.conflicts[0].unknown_units.len(), 1);
    }

    #[test]
    fn test_conflicts_sorted_by_container_id() {
        let result = detect(&[
            Unit::new("1", Condition::New, 1, Some("B2")),
            Unit::new("2", Condition::Used, 1, Some("B2")),
            Unit::new("3", Condition::New, 1, Some("A9")),
            Unit::new("4", Condition::Used, 1, Some("A9")),
            Unit::new("5", Condition::New, 1, Some("10")),
            Unit::new("6", Condition::Used, 1, Some("10/2")),
        ]);

        let ids: Vec<&str> = result.conflicts.iter().map(|c| c.container.as_str()).collect();
        assert_eq!(ids, vec!["10", "A9", "B2"]);
    }

    #[test]
    fn test_empty_corpus_has_no_conflicts() {
        assert!(detect(&[]).is_clean());
    }
}
