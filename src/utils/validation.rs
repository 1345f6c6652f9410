use crate::domain::model::{CategoryProfile, MAX_CATEGORY_SPAN, MAX_SLOT_CAPACITY};
use crate::utils::error::{AuditError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(AuditError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AuditError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: i64, min_value: i64) -> Result<()> {
    if value < min_value {
        return Err(AuditError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(AuditError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// Problems in a category profile that are worth telling the user about.
///
/// These never stop an audit: a profile being edited is still audited, and
/// degenerate categories simply report 0%.
pub fn profile_warnings(categories: &[CategoryProfile]) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for category in categories {
        let name = category.name.trim();
        if name.is_empty() {
            warnings.push("A category has an empty name".to_string());
        } else if !seen.insert(name) {
            warnings.push(format!("Category name '{}' is used more than once", name));
        }
        if category.end < category.start {
            warnings.push(format!(
                "Category '{}' ends ({}) before it starts ({})",
                name, category.end, category.start
            ));
        }
        if category.capacity < 1 {
            warnings.push(format!(
                "Category '{}' has capacity {}; it will always report 0%",
                name, category.capacity
            ));
        }
        if category.is_oversized() {
            warnings.push(format!(
                "Category '{}' is larger than {} containers of {} slots; it will always report 0%",
                name, MAX_CATEGORY_SPAN, MAX_SLOT_CAPACITY
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("inventory.store_xml", "store.xml").is_ok());
        assert!(validate_path("inventory.store_xml", "  ").is_err());
        assert!(validate_path("inventory.store_xml", "a\0b").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("report.stale_after_days", 5, 1).is_ok());
        assert!(validate_positive_number("report.stale_after_days", 0, 1).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("report.format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("report.format", "xml", &["text", "json"]).is_err());
    }

    #[test]
    fn test_profile_warnings() {
        let categories = vec![
            CategoryProfile::prefixed("Cases", "C", 1, 10, 12),
            CategoryProfile::prefixed("Cases", "D", 1, 10, 12),
            CategoryProfile::prefixed("Backwards", "E", 9, 1, 0),
            CategoryProfile::wall("Wall", 1, 100),
        ];

        let warnings = profile_warnings(&categories);
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("'Cases' is used more than once"));
        assert!(warnings[1].contains("ends (1) before it starts (9)"));
        assert!(warnings[2].contains("capacity 0"));

        assert!(profile_warnings(&categories[3..]).is_empty());
    }

    #[test]
    fn test_profile_warnings_flag_oversized_categories() {
        let categories = vec![
            CategoryProfile::prefixed("Typo", "A", 1, 50_000_000, 12),
            CategoryProfile::prefixed("Deep", "B", 1, 10, 300_000_000),
        ];

        let warnings = profile_warnings(&categories);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("Category 'Typo' is larger than"));
        assert!(warnings[1].starts_with("Category 'Deep' is larger than"));
    }
}
