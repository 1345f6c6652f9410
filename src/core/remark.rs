//! Splitting of free-text location remarks.
//!
//! The container id and the detail are cut at different characters: ids end
//! at a hyphen, slash, backslash or space, while the detail starts after the
//! first hyphen or space only, so `B07/12-14` has id `B07` and detail `14`.

/// Placeholder detail for units stored in a container's primary slot.
pub const MAIN_SLOT: &str = "Main";

pub fn extract_container_id(remark: &str) -> &str {
    let remark = remark.trim();
    remark
        .split(['-', '/', '\\', ' '])
        .next()
        .unwrap_or(remark)
}

pub fn extract_detail(remark: &str) -> &str {
    remark
        .trim()
        .split_once(['-', ' '])
        .map(|(_, rest)| rest)
        .unwrap_or(MAIN_SLOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_id() {
        assert_eq!(extract_container_id("42-3"), "42");
        assert_eq!(extract_container_id("B07/12-14"), "B07");
        assert_eq!(extract_container_id("C3\\4"), "C3");
        assert_eq!(extract_container_id("  0451  "), "0451");
        assert_eq!(extract_container_id("Box 0451 extra"), "Box");
    }

    #[test]
    fn test_detail() {
        assert_eq!(extract_detail("42-3"), "3");
        assert_eq!(extract_detail("A12 top shelf"), "top shelf");
        assert_eq!(extract_detail("0451"), MAIN_SLOT);
        assert_eq!(extract_detail("42-"), "");
    }

    #[test]
    fn test_detail_and_id_split_differently() {
        let remark = "B07/12-14";
        assert_eq!(extract_container_id(remark), "B07");
        assert_eq!(extract_detail(remark), "14");

        assert_eq!(extract_container_id("D5/2"), "D5");
        assert_eq!(extract_detail("D5/2"), MAIN_SLOT);
    }
}
