//! Compact slot range expressions such as `1-5,10,12/14`.

use std::collections::BTreeSet;

/// Widest range a single token may describe; anything larger is a typo.
pub const MAX_RANGE_SPAN: u32 = 10_000;

/// Parses a hand-typed range expression into the set of slot numbers it names.
///
/// `/` and `\` are read as range hyphens, tokens are separated by commas or
/// whitespace. Tokens that do not parse (no digits, non-numeric sides,
/// reversed or oversized ranges) are skipped; slot 0 is never produced.
pub fn parse_range_expression(expr: &str) -> BTreeSet<u32> {
    let normalized = expr.replace(['/', '\\'], "-");
    let mut slots = BTreeSet::new();

    for token in normalized.split(|c: char| c == ',' || c.is_whitespace()) {
        let token = token.trim();
        if token.is_empty() || !token.chars().any(|c| c.is_ascii_digit()) {
            continue;
        }

        match parse_token(token) {
            Some((start, end)) => slots.extend((start..=end).filter(|slot| *slot >= 1)),
            None => tracing::debug!("Skipping malformed range token '{}'", token),
        }
    }

    slots
}

fn parse_token(token: &str) -> Option<(u32, u32)> {
    match token.split_once('-') {
        Some((start, end)) => {
            let start: u32 = start.trim().parse().ok()?;
            let end: u32 = end.trim().parse().ok()?;
            if end < start || end - start > MAX_RANGE_SPAN {
                return None;
            }
            Some((start, end))
        }
        None => {
            let value: u32 = token.parse().ok()?;
            Some((value, value))
        }
    }
}

/// Collapses slot numbers into ascending display ranges (`"01-03"`, `"07"`).
pub fn format_range_list<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = u32>,
{
    let mut sorted: Vec<u32> = values.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut ranges = Vec::new();
    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return ranges;
    };

    let (mut start, mut prev) = (first, first);
    for value in iter {
        if prev.checked_add(1) == Some(value) {
            prev = value;
        } else {
            ranges.push(format_run(start, prev));
            start = value;
            prev = value;
        }
    }
    ranges.push(format_run(start, prev));
    ranges
}

fn format_run(start: u32, end: u32) -> String {
    if start == end {
        format!("{:02}", start)
    } else {
        format!("{:02}-{:02}", start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u32]) -> BTreeSet<u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_parse_mixed_separators() {
        assert_eq!(parse_range_expression("1-5,10,12-14"), set(&[1, 2, 3, 4, 5, 10, 12, 13, 14]));
        assert_eq!(parse_range_expression("3/5"), set(&[3, 4, 5]));
        assert_eq!(parse_range_expression("7\\8 11"), set(&[7, 8, 11]));
    }

    #[test]
    fn test_parse_skips_bad_tokens() {
        assert_eq!(parse_range_expression("1-5, bad, 9"), set(&[1, 2, 3, 4, 5, 9]));
        assert_eq!(parse_range_expression("5-3"), BTreeSet::new());
        assert_eq!(parse_range_expression("3-5-7"), BTreeSet::new());
        assert_eq!(parse_range_expression("x2, 4"), set(&[4]));
        assert_eq!(parse_range_expression("-"), BTreeSet::new());
        assert_eq!(parse_range_expression(""), BTreeSet::new());
    }

    #[test]
    fn test_parse_never_yields_zero_or_huge_ranges() {
        assert_eq!(parse_range_expression("0-2"), set(&[1, 2]));
        assert_eq!(parse_range_expression("1-4000000000"), BTreeSet::new());
    }

    #[test]
    fn test_format_merges_runs() {
        assert_eq!(format_range_list([1, 2, 3, 7, 9, 10]), vec!["01-03", "07", "09-10"]);
        assert_eq!(format_range_list([12, 4, 4]), vec!["04", "12"]);
        assert!(format_range_list(Vec::new()).is_empty());
        assert_eq!(format_range_list([100, 101]), vec!["100-101"]);
    }

    #[test]
    fn test_round_trip_is_semantic() {
        let original = set(&[1, 2, 3, 5, 8, 9, 10, 42]);
        let text = format_range_list(original.iter().copied()).join(",");
        assert_eq!(text, "01-03,05,08-10,42");
        assert_eq!(parse_range_expression(&text), original);
    }

    #[test]
    fn test_round_trip_over_many_sets() {
        let mut cases = vec![
            BTreeSet::new(),
            set(&[1]),
            set(&[7]),
            set(&[99, 100, 101]),
            set(&[100, 250, 251, 9999]),
            (1..=12).collect(),
            (1..=40).filter(|n| n % 3 != 0).collect(),
        ];
        // Deterministic pseudo-random sets, mixing runs and isolated slots.
        let mut seed = 0x2545_f491_u32;
        for _ in 0..50 {
            let mut case = BTreeSet::new();
            for _ in 0..(seed % 30) {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                case.insert(1 + (seed >> 8) % 500);
            }
            cases.push(case);
        }

        for original in cases {
            let text = format_range_list(original.iter().copied()).join(",");
            assert_eq!(parse_range_expression(&text), original, "via '{}'", text);
        }
    }
}
