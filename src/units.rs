//! Unit conversions between manuscript settings and layout units.
//!
//! Word-processor files store margins, indents and spacing in twips
//! (1/20 pt) and font sizes in half-points. Chinese typography names font
//! sizes by label (e.g. 小四) rather than number.

/// Twips per centimeter, rounded.
pub const TWIPS_PER_CM: f64 = 567.0;

/// Line-spacing value representing single spacing.
pub const SINGLE_LINE_SPACING: u32 = 240;

/// First-line indent of a body paragraph (two CJK characters at 12pt).
pub const BODY_FIRST_LINE_INDENT: u32 = 480;

/// Space after the keywords block and the reference heading.
pub const SECTION_SPACE_AFTER: u32 = 240;

/// Point size used when a named size is unknown or absent.
pub const DEFAULT_FONT_SIZE_PT: f64 = 12.0;

/// Named Chinese font sizes and their point sizes, largest first.
pub const FONT_SIZES: [(&str, f64); 8] = [
    ("二号", 22.0),
    ("小二", 18.0),
    ("三号", 16.0),
    ("小三", 15.0),
    ("四号", 14.0),
    ("小四", 12.0),
    ("五号", 10.5),
    ("小五", 9.0),
];

/// Convert centimeters to twips, rounding half away from zero.
pub fn cm_to_twips(cm: f64) -> i32 {
    (cm * TWIPS_PER_CM).round() as i32
}

/// Look up the point size of a named font size.
///
/// Labels match exactly; unknown or absent labels resolve to
/// [`DEFAULT_FONT_SIZE_PT`].
pub fn font_size_points(name: Option<&str>) -> f64 {
    let Some(name) = name else {
        return DEFAULT_FONT_SIZE_PT;
    };

    match FONT_SIZES.iter().find(|(label, _)| *label == name) {
        Some((_, pt)) => *pt,
        None => {
            log::warn!(
                "Unknown font size '{}', falling back to {}pt",
                name,
                DEFAULT_FONT_SIZE_PT
            );
            DEFAULT_FONT_SIZE_PT
        }
    }
}

/// Convert a named font size to half-points.
pub fn named_size_to_half_points(name: Option<&str>) -> u32 {
    (font_size_points(name) * 2.0).round() as u32
}

/// Line-spacing value for a multiplier of single spacing.
pub fn line_spacing_rule(multiplier: f64) -> u32 {
    (f64::from(SINGLE_LINE_SPACING) * multiplier).round().max(0.0) as u32
}

/// Check whether a label is present in the font-size table.
pub fn is_known_size(name: &str) -> bool {
    FONT_SIZES.iter().any(|(label, _)| *label == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_to_twips() {
        assert_eq!(cm_to_twips(2.5), 1418);
        assert_eq!(cm_to_twips(3.0), 1701);
        assert_eq!(cm_to_twips(2.0), 1134);
        assert_eq!(cm_to_twips(0.0), 0);
    }

    #[test]
    fn test_named_sizes() {
        assert_eq!(named_size_to_half_points(Some("二号")), 44);
        assert_eq!(named_size_to_half_points(Some("小二")), 36);
        assert_eq!(named_size_to_half_points(Some("小四")), 24);
        assert_eq!(named_size_to_half_points(Some("五号")), 21);
        assert_eq!(named_size_to_half_points(Some("小五")), 18);
    }

    #[test]
    fn test_unknown_size_falls_back() {
        let unknown = named_size_to_half_points(Some("不存在的尺寸"));
        let absent = named_size_to_half_points(None);
        assert_eq!(unknown, 24);
        assert_eq!(unknown, absent);
        assert_eq!(named_size_to_half_points(Some("")), 24);
    }

    #[test]
    fn test_line_spacing_rule() {
        assert_eq!(line_spacing_rule(1.0), 240);
        assert_eq!(line_spacing_rule(1.5), 360);
        assert_eq!(line_spacing_rule(2.0), 480);
        assert_eq!(line_spacing_rule(1.25), 300);
    }

    #[test]
    fn test_padded_label_is_unknown() {
        assert_eq!(named_size_to_half_points(Some(" 小三")), 24);
        assert_eq!(named_size_to_half_points(Some("小三 ")), 24);
        assert_eq!(named_size_to_half_points(Some("小三")), 30);
        assert!(!is_known_size(" 小三"));
    }

    #[test]
    fn test_is_known_size() {
        assert!(is_known_size("小三"));
        assert!(!is_known_size("六号"));
    }
}
