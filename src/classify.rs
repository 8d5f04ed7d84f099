//! Structural classification of manuscript lines.
//!
//! Body lines carry no markup, so headings are recognised by their leading
//! section number: a dotted Arabic numeral (`1`, `2.1`, `2.1.3`) or a run
//! of CJK numerals (`一`, `十二`), immediately followed by `.`, `、` or
//! whitespace.

use regex::Regex;
use std::sync::OnceLock;

/// Leading section number followed by a separator.
///
/// `[0-9]` rather than `\d`, which would also accept non-ASCII digits.
/// U+FEFF counts as whitespace, so a byte-order mark before the number is skipped.
const HEADING_PATTERN: &str =
    r"^[\s\x{FEFF}]*([0-9]+(?:\.[0-9]+)*|[一二三四五六七八九十]+)[.、\s\x{FEFF}]";

fn heading_regex() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| Regex::new(HEADING_PATTERN).unwrap())
}

/// Check whether a body line is a section heading.
///
/// Bracketed numerals such as `[1]` are not headings; they only appear as
/// reference markers and references are never classified.
pub fn is_heading(line: &str) -> bool {
    heading_regex().is_match(line)
}

/// Outline depth of a heading line, or `None` for ordinary text.
///
/// `2.1.3 ...` is level 3; a CJK numeral heading is level 1.
pub fn heading_level(line: &str) -> Option<u8> {
    let caps = heading_regex().captures(line)?;
    let number = caps.get(1)?.as_str();

    if number.starts_with(|c: char| c.is_ascii_digit()) {
        let depth = number.split('.').count();
        Some(depth.min(usize::from(u8::MAX)) as u8)
    } else {
        Some(1)
    }
}

/// Structural role of a paragraph in the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphRole {
    /// Thesis title
    Title,
    /// Abstract block, label included
    Abstract,
    /// Keywords block, label included
    Keywords,
    /// Numbered section heading inside the body
    Heading,
    /// Ordinary body paragraph
    Body,
    /// The "参考文献" heading
    ReferenceTitle,
    /// One citation entry
    ReferenceItem,
}

impl ParagraphRole {
    /// Classify a body line.
    pub fn for_body_line(line: &str) -> Self {
        if is_heading(line) {
            ParagraphRole::Heading
        } else {
            ParagraphRole::Body
        }
    }

    /// Check if this role belongs to the reference section.
    pub fn is_reference(&self) -> bool {
        matches!(
            self,
            ParagraphRole::ReferenceTitle | ParagraphRole::ReferenceItem
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_headings() {
        assert!(is_heading("1. 引言"));
        assert!(is_heading("2.1 字体处理"));
        assert!(is_heading("2.1.3 Details"));
        assert!(is_heading("  3 结论"));
    }

    #[test]
    fn test_cjk_headings() {
        assert!(is_heading("一、概述"));
        assert!(is_heading("十二、附录"));
        assert!(is_heading("三 方法"));
    }

    #[test]
    fn test_non_headings() {
        assert!(!is_heading("普通段落文本"));
        assert!(!is_heading("123"));
        assert!(!is_heading("[1] 张三. 网页自动化技术"));
        assert!(!is_heading("Text 123"));
        assert!(!is_heading(""));
        assert!(!is_heading("一二三"));
    }

    #[test]
    fn test_leading_byte_order_mark() {
        assert!(is_heading("\u{FEFF}1. 引言"));
        assert_eq!(heading_level("\u{FEFF}2.1 字体处理"), Some(2));
        assert!(!is_heading("\u{FEFF}正文"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(!is_heading("١. مقدمة"));
        assert!(!is_heading("１．引言"));
    }

    #[test]
    fn test_numbered_prefix_inside_sentence() {
        // "1.5倍" still opens with "1." so the line counts as a heading.
        assert!(is_heading("1.5倍行距的说明"));
        assert_eq!(heading_level("1.5倍行距的说明"), Some(1));
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("1. 引言"), Some(1));
        assert_eq!(heading_level("2.1 字体处理"), Some(2));
        assert_eq!(heading_level("2.1.3 细节"), Some(3));
        assert_eq!(heading_level("一、概述"), Some(1));
        assert_eq!(heading_level("正文"), None);
    }

    #[test]
    fn test_role_for_body_line() {
        assert_eq!(ParagraphRole::for_body_line("1. 引言"), ParagraphRole::Heading);
        assert_eq!(ParagraphRole::for_body_line("正文内容"), ParagraphRole::Body);
        assert!(ParagraphRole::ReferenceItem.is_reference());
        assert!(!ParagraphRole::Heading.is_reference());
    }
}
