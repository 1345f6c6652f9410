use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;

use crate::core::range_set::parse_range_expression;
use crate::domain::model::CategoryProfile;
use crate::utils::error::Result;

/// Container number -> occupied slot numbers for one category.
pub type Occupancy = BTreeMap<u32, BTreeSet<u32>>;

/// Remark matcher for one category, compiled once and reused for every scan.
#[derive(Debug, Clone)]
pub enum CategoryMatcher {
    /// `<prefix><digits>[-<sub-range>]` at the start of a remark or after a
    /// separator (whitespace, `,` `;` `:` `/` `\` or `(`).
    PrefixNumeric { prefix: String, pattern: Regex },
    /// Any standalone 4-digit number; wall bins have a single slot.
    WallFourDigit { pattern: Regex },
}

impl CategoryMatcher {
    pub fn compile(profile: &CategoryProfile) -> Result<Self> {
        if profile.is_wall_mode {
            return Ok(CategoryMatcher::WallFourDigit {
                pattern: Regex::new(r"\b([0-9]{4})\b")?,
            });
        }

        // The prefix is literal text from the profile, never pattern syntax.
        let pattern = Regex::new(&format!(
            r"(?:^|[\s,;:/\\(])({})([0-9]+)(?:-([0-9/\\-]+))?",
            regex::escape(&profile.prefix)
        ))?;
        Ok(CategoryMatcher::PrefixNumeric {
            prefix: profile.prefix.clone(),
            pattern,
        })
    }

    /// Collects occupancy from every remark. Numbers outside the category's
    /// range are kept; the gap audit only walks the declared range.
    pub fn scan<S: AsRef<str>>(&self, remarks: &[S]) -> Occupancy {
        let mut occupancy = Occupancy::new();
        for remark in remarks {
            self.scan_remark(remark.as_ref(), &mut occupancy);
        }
        occupancy
    }

    fn scan_remark(&self, remark: &str, occupancy: &mut Occupancy) {
        match self {
            CategoryMatcher::WallFourDigit { pattern } => {
                for caps in pattern.captures_iter(remark) {
                    if let Ok(number) = caps[1].parse::<u32>() {
                        occupancy.entry(number).or_default().insert(1);
                    }
                }
            }
            CategoryMatcher::PrefixNumeric { prefix, pattern } => {
                for caps in pattern.captures_iter(remark) {
                    let Ok(number) = caps[2].parse::<u32>() else {
                        tracing::debug!("Container number too large in remark '{}'", remark);
                        continue;
                    };
                    let slots = occupancy.entry(number).or_default();
                    match caps.get(3) {
                        Some(sub_range) => {
                            let parsed = parse_range_expression(sub_range.as_str());
                            if parsed.is_empty() {
                                tracing::warn!(
                                    "Remark '{}' has no usable slot after {}{}",
                                    remark,
                                    prefix,
                                    number
                                );
                            }
                            slots.extend(parsed);
                        }
                        None => {
                            slots.insert(1);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(values: &[u32]) -> BTreeSet<u32> {
        values.iter().copied().collect()
    }

    fn scan(profile: &CategoryProfile, remarks: &[&str]) -> Occupancy {
        CategoryMatcher::compile(profile).unwrap().scan(remarks)
    }

    #[test]
    fn test_bare_number_defaults_to_first_slot() {
        let profile = CategoryProfile::prefixed("Drawers", "", 1, 100, 4);
        let occupancy = scan(&profile, &["42"]);
        assert_eq!(occupancy.get(&42), Some(&slots(&[1])));
    }

    #[test]
    fn test_sub_ranges_are_unioned() {
        let profile = CategoryProfile::prefixed("Cases", "C", 1, 20, 12);
        let occupancy = scan(&profile, &["C07-1-3", "C07-5/6", "C7-12", "C08"]);

        assert_eq!(occupancy.get(&7), Some(&slots(&[1, 2, 3, 5, 6, 12])));
        assert_eq!(occupancy.get(&8), Some(&slots(&[1])));
    }

    #[test]
    fn test_prefix_must_start_a_token() {
        let profile = CategoryProfile::prefixed("Boxes", "B", 1, 50, 1);
        let occupancy = scan(&profile, &["AB12", "B3 and B4", "x,B5"]);

        assert_eq!(occupancy.keys().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_prefix_after_path_and_bracket_separators() {
        let profile = CategoryProfile::prefixed("Drawers", "A", 1, 50, 4);
        let occupancy = scan(&profile, &["Shelf/A12", "(A13)", "Rack:A14-2", "Back\\A15", "BA16"]);

        assert_eq!(occupancy.keys().copied().collect::<Vec<_>>(), vec![12, 13, 14, 15]);
        assert_eq!(occupancy.get(&14), Some(&slots(&[2])));
    }

    #[test]
    fn test_prefix_is_matched_literally() {
        let profile = CategoryProfile::prefixed("Dotted", "D.", 1, 50, 1);
        let occupancy = scan(&profile, &["DX9", "D.9"]);

        assert_eq!(occupancy.keys().copied().collect::<Vec<_>>(), vec![9]);
    }

    #[test]
    fn test_unusable_sub_range_records_container_without_slots() {
        let profile = CategoryProfile::prefixed("Cases", "C", 1, 20, 4);
        let occupancy = scan(&profile, &["C3--"]);
        assert_eq!(occupancy.get(&3), Some(&BTreeSet::new()));
    }

    #[test]
    fn test_wall_mode_normalizes_leading_zeros() {
        let profile = CategoryProfile::wall("Wall", 1, 2000);
        let occupancy = scan(&profile, &["Box 0451 extra", "12345", "0452-3", "A0453"]);

        assert_eq!(occupancy.keys().copied().collect::<Vec<_>>(), vec![451, 452]);
        assert_eq!(occupancy.get(&451), Some(&slots(&[1])));
    }

    #[test]
    fn test_out_of_range_numbers_are_still_recorded() {
        let profile = CategoryProfile::prefixed("Drawers", "A", 1, 10, 1);
        let occupancy = scan(&profile, &["A99"]);
        assert!(occupancy.contains_key(&99));
    }
}
