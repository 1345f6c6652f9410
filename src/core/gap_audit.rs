use std::collections::BTreeSet;

use crate::core::matcher::{CategoryMatcher, Occupancy};
use crate::core::range_set::format_range_list;
use crate::domain::model::{AuditResult, CategoryProfile, MissingContainer};

/// Compares a category's occupancy with its declared range and capacity.
///
/// Slots above capacity count neither as filled nor as missing. Degenerate
/// profiles (`end < start`, capacity below 1, or a range or capacity past
/// the category limits) produce an empty 0% result.
pub fn audit_category(profile: &CategoryProfile, occupancy: &Occupancy) -> AuditResult {
    let capacity = profile.slot_capacity();
    let total_slots = profile.total_slots();
    let empty = BTreeSet::new();

    let mut filled_slots = 0u64;
    let mut missing = Vec::new();

    if total_slots > 0 {
        for n in profile.start..=profile.end {
            // Negative or oversized numbers can never be matched.
            let number = u32::try_from(n).ok();
            let occupied = number
                .and_then(|number| occupancy.get(&number))
                .unwrap_or(&empty);

            filled_slots += occupied.range(1..=capacity).count() as u64;

            let gaps: Vec<u32> = (1..=capacity).filter(|slot| !occupied.contains(slot)).collect();
            if gaps.is_empty() {
                continue;
            }
            let Some(number) = number else {
                continue;
            };
            missing.push(MissingContainer {
                number,
                label: profile.label(number),
                ranges: format_range_list(gaps.iter().copied()),
                missing_slots: gaps,
            });
        }
    }

    let fill_ratio = if total_slots == 0 {
        0.0
    } else {
        filled_slots as f64 / total_slots as f64
    };

    AuditResult {
        name: profile.name.clone(),
        missing,
        filled_slots,
        total_slots,
        fill_ratio,
    }
}

/// Runs the gap audit for every configured category over one remark corpus.
#[derive(Debug, Default)]
pub struct GapAuditor;

impl GapAuditor {
    pub fn new() -> Self {
        Self
    }

    /// One result per category, in configuration order.
    pub fn run<S: AsRef<str>>(&self, categories: &[CategoryProfile], remarks: &[S]) -> Vec<AuditResult> {
        categories
            .iter()
            .map(|profile| {
                let occupancy = match CategoryMatcher::compile(profile) {
                    Ok(matcher) => matcher.scan(remarks),
                    Err(e) => {
                        tracing::warn!(
                            "Category '{}' prefix could not be compiled, auditing as empty: {}",
                            profile.name,
                            e
                        );
                        Occupancy::new()
                    }
                };
                let result = audit_category(profile, &occupancy);
                tracing::debug!(
                    "Category '{}': {}/{} slots filled, {} containers with gaps",
                    result.name,
                    result.filled_slots,
                    result.total_slots,
                    result.missing.len()
                );
                result
            })
            .collect()
    }
}
