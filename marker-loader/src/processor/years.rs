//! Year extraction from marker text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YEAR_PATTERN: Regex = Regex::new(r"[0-9]{4}").expect("valid year pattern");
}

/// Find every run of four ASCII digits in `text`, left to right.
///
/// Matches do not overlap, so `"12345"` yields `[1234]`. Absent text yields an
/// empty list.
///
/// # Example
///
/// ```
/// use marker_loader::processor::find_years;
///
/// let years = find_years(Some("Founded 1836, rebuilt 1936 after fire"));
/// assert_eq!(years, vec![1836, 1936]);
/// ```
pub fn find_years(text: Option<&str>) -> Vec<u16> {
    let Some(text) = text else {
        return Vec::new();
    };

    YEAR_PATTERN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<u16>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_years_in_order() {
        assert_eq!(
            find_years(Some("Founded 1836, rebuilt 1936 after fire")),
            vec![1836, 1936]
        );
    }

    #[test]
    fn test_absent_text() {
        assert!(find_years(None).is_empty());
    }

    #[test]
    fn test_no_years() {
        assert!(find_years(Some("")).is_empty());
        assert!(find_years(Some("Built in the 80s, 123 Main")).is_empty());
    }

    #[test]
    fn test_non_overlapping_greedy_scan() {
        assert_eq!(find_years(Some("12345")), vec![1234]);
        assert_eq!(find_years(Some("18361936")), vec![1836, 1936]);
        assert_eq!(find_years(Some("123456789")), vec![1234, 5678]);
    }

    #[test]
    fn test_duplicates_kept() {
        assert_eq!(
            find_years(Some("1845 annexed; statehood 1845")),
            vec![1845, 1845]
        );
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(find_years(Some("lot 0042")), vec![42]);
    }

    #[test]
    fn test_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not years.
        assert!(find_years(Some("\u{0661}\u{0668}\u{0663}\u{0666}")).is_empty());
    }

    #[test]
    fn test_matches_are_verbatim_substrings() {
        let text = "Erected 1964. Marker 5507, replaced 2001 (c.1890s)";
        let years = find_years(Some(text));

        assert_eq!(years, vec![1964, 5507, 2001, 1890]);
        for year in years {
            assert!(text.contains(&format!("{:04}", year)));
        }
    }
}
