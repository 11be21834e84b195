//! Heading and line classification heuristics
//!
//! The generated documents carry no explicit heading markup; a heading is
//! an all-uppercase line. The preview target styles *every* such line as a
//! heading, while the export targets only accept all-caps lines containing
//! one of a fixed set of expected keywords. That divergence comes from the
//! observed behavior of the system this replaces and is deliberately kept
//! visible as a single configurable [`HeadingPolicy`], so each renderer
//! states which rule it uses and tests can pin the difference.

use crate::segmenter::{FOOTER_CLOSE, FOOTER_OPEN, TABLE_CLOSE, TABLE_OPEN};

/// Keywords an export-target heading must contain (substring match on the
/// uppercased line)
const HEADING_KEYWORDS: &[&str] = &[
    "CIRCULAR",
    "NOTICE",
    "TIME TABLE",
    "TIMETABLE",
    "EXAMINATION",
    "SCHEDULE",
    "DEPARTMENT",
    "IMPORTANT",
    "INSTRUCTIONS",
    "HOLIDAY",
];

/// Heading detection rule for one render target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingPolicy {
    /// Any all-caps line with at least one letter (preview target)
    AllCaps,
    /// All-caps line that also contains an expected keyword (export targets)
    Keyword,
}

impl HeadingPolicy {
    /// Whether `line` should be styled as a section heading under this policy
    pub fn is_heading(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() || is_marker_line(trimmed) {
            return false;
        }
        if !trimmed.chars().any(|c| c.is_alphabetic()) {
            return false;
        }
        if trimmed != trimmed.to_uppercase() {
            return false;
        }
        match self {
            HeadingPolicy::AllCaps => true,
            HeadingPolicy::Keyword => {
                HEADING_KEYWORDS.iter().any(|keyword| trimmed.contains(keyword))
            }
        }
    }
}

/// True when the trimmed line is one of the markup markers
pub fn is_marker_line(line: &str) -> bool {
    matches!(line, TABLE_OPEN | TABLE_CLOSE | FOOTER_OPEN | FOOTER_CLOSE)
}

/// Reference-number or date line, styled distinctly by the canvas target
/// (e.g. `Ref. No: GFGC/2024/117` or `Date: 12.08.2024`)
pub fn is_reference_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("Ref") || trimmed.starts_with("No.") || trimmed.contains("Date:")
}

/// Numbered list item (`1. text` or `1) text`), indented by the canvas target
pub fn is_numbered_item(line: &str) -> bool {
    let trimmed = line.trim_start();
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return false;
    }
    let rest = &trimmed[digits..];
    rest.starts_with(". ") || rest.starts_with(") ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_caps_policy_accepts_any_uppercase_line() {
        assert!(HeadingPolicy::AllCaps.is_heading("ANNUAL SPORTS MEET"));
        assert!(HeadingPolicy::AllCaps.is_heading("CIRCULAR"));
    }

    #[test]
    fn test_keyword_policy_requires_keyword() {
        // The two policies deliberately disagree on generic all-caps lines.
        assert!(HeadingPolicy::AllCaps.is_heading("ANNUAL SPORTS MEET"));
        assert!(!HeadingPolicy::Keyword.is_heading("ANNUAL SPORTS MEET"));
        assert!(HeadingPolicy::Keyword.is_heading("EXAMINATION TIME TABLE"));
        assert!(HeadingPolicy::Keyword.is_heading("CIRCULAR"));
    }

    #[test]
    fn test_mixed_case_is_not_heading() {
        assert!(!HeadingPolicy::AllCaps.is_heading("Circular"));
        assert!(!HeadingPolicy::Keyword.is_heading("Examination Time Table"));
    }

    #[test]
    fn test_non_alphabetic_lines_rejected() {
        assert!(!HeadingPolicy::AllCaps.is_heading("2024-25"));
        assert!(!HeadingPolicy::AllCaps.is_heading("----"));
        assert!(!HeadingPolicy::AllCaps.is_heading("   "));
    }

    #[test]
    fn test_marker_lines_rejected() {
        assert!(!HeadingPolicy::AllCaps.is_heading("[TABLE]"));
        assert!(!HeadingPolicy::AllCaps.is_heading("  [/FOOTER_ROW]  "));
    }

    #[test]
    fn test_reference_line() {
        assert!(is_reference_line("Ref. No: GFGC/2024/117"));
        assert!(is_reference_line("  Date: 12.08.2024"));
        assert!(!is_reference_line("All students must attend."));
    }

    #[test]
    fn test_numbered_item() {
        assert!(is_numbered_item("1. Report by 9 AM"));
        assert!(is_numbered_item("  12) Bring hall tickets"));
        assert!(!is_numbered_item("Report by 9 AM"));
        assert!(!is_numbered_item("1.No space after dot"));
    }
}
