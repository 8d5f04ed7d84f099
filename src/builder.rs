//! Paragraph construction for each manuscript section.
//!
//! Sections are built in fixed order (title, abstract, keywords, body,
//! references) and appended to one sequence. Optional sections whose text is
//! blank are omitted.

use crate::classify::{heading_level, is_heading, ParagraphRole};
use crate::config::{is_blank, non_blank_lines, ThesisConfig, ThesisContent};
use crate::model::{Alignment, Paragraph};
use crate::segment::build_runs;
use crate::units::{
    line_spacing_rule, named_size_to_half_points, BODY_FIRST_LINE_INDENT, SECTION_SPACE_AFTER,
};

/// Label opening the abstract paragraph.
pub const ABSTRACT_LABEL: &str = "摘要：";

/// Label opening the keywords paragraph.
pub const KEYWORDS_LABEL: &str = "关键词：";

/// Heading of the reference section.
pub const REFERENCES_TITLE: &str = "参考文献";

/// Builds paragraphs from content under one configuration.
#[derive(Debug, Clone)]
pub struct ParagraphBuilder<'a> {
    config: &'a ThesisConfig,
    line_spacing: u32,
}

impl<'a> ParagraphBuilder<'a> {
    /// Create a builder. Line spacing is derived once from the body settings.
    pub fn new(config: &'a ThesisConfig) -> Self {
        Self {
            config,
            line_spacing: line_spacing_rule(config.body.line_spacing),
        }
    }

    /// Line spacing shared by every paragraph.
    pub fn line_spacing(&self) -> u32 {
        self.line_spacing
    }

    /// Build all paragraphs in emission order.
    pub fn build(&self, content: &ThesisContent) -> Vec<Paragraph> {
        let mut paragraphs = vec![self.title(&content.title)];
        paragraphs.extend(self.abstract_block(&content.abstract_text));
        paragraphs.extend(self.keywords(&content.keywords));
        paragraphs.extend(self.body(&content.body));
        paragraphs.extend(self.references(&content.refs));
        paragraphs
    }

    /// The title paragraph. Always emitted, even for an empty title.
    pub fn title(&self, title: &str) -> Paragraph {
        let style = &self.config.title;
        let alignment = if style.center {
            Alignment::Center
        } else {
            Alignment::Left
        };

        Paragraph::new(ParagraphRole::Title)
            .with_runs(build_runs(
                title,
                named_size_to_half_points(style.size.as_deref()),
                style.bold,
                &self.config.fonts,
            ))
            .with_alignment(alignment)
            .with_line_spacing(self.line_spacing)
            .with_space_after(self.line_spacing)
    }

    /// The "摘要：" paragraph, if the abstract has text.
    pub fn abstract_block(&self, text: &str) -> Option<Paragraph> {
        self.labeled(ParagraphRole::Abstract, ABSTRACT_LABEL, text)
    }

    /// The "关键词：" paragraph, if keywords have text.
    pub fn keywords(&self, text: &str) -> Option<Paragraph> {
        let paragraph = self.labeled(ParagraphRole::Keywords, KEYWORDS_LABEL, text)?;
        Some(paragraph.with_space_after(SECTION_SPACE_AFTER))
    }

    /// One paragraph per non-blank body line.
    ///
    /// Headings are flush-left and always bold; other lines get a two-character
    /// first-line indent and are bold only if the body style says so.
    pub fn body(&self, text: &str) -> Vec<Paragraph> {
        let style = &self.config.body;
        let size = named_size_to_half_points(style.size.as_deref());

        let paragraphs: Vec<Paragraph> = non_blank_lines(text)
            .map(|line| {
                let heading = is_heading(line);
                let (role, indent) = if heading {
                    (ParagraphRole::Heading, 0)
                } else {
                    (ParagraphRole::Body, BODY_FIRST_LINE_INDENT)
                };

                Paragraph::new(role)
                    .with_runs(build_runs(line, size, heading || style.bold, &self.config.fonts))
                    .with_line_spacing(self.line_spacing)
                    .with_first_line_indent(indent)
                    .with_heading_level(heading_level(line))
            })
            .collect();

        log::debug!(
            "Body: {} paragraphs, {} headings",
            paragraphs.len(),
            paragraphs.iter().filter(|p| p.is_heading()).count()
        );

        paragraphs
    }

    /// The reference heading plus one paragraph per entry.
    ///
    /// Entries are kept verbatim and never run through heading detection.
    pub fn references(&self, text: &str) -> Vec<Paragraph> {
        if is_blank(text) {
            log::debug!("References: empty, section omitted");
            return Vec::new();
        }

        let style = &self.config.references;
        let fonts = &self.config.fonts;

        let heading = Paragraph::new(ParagraphRole::ReferenceTitle)
            .with_runs(build_runs(
                REFERENCES_TITLE,
                named_size_to_half_points(style.title_size.as_deref()),
                style.title_bold,
                fonts,
            ))
            .with_alignment(Alignment::Center)
            .with_page_break_before()
            .with_line_spacing(self.line_spacing)
            .with_space_after(SECTION_SPACE_AFTER);

        let size = named_size_to_half_points(style.content_size.as_deref());
        let mut paragraphs = vec![heading];
        paragraphs.extend(non_blank_lines(text).map(|entry| {
            Paragraph::new(ParagraphRole::ReferenceItem)
                .with_runs(build_runs(entry, size, false, fonts))
                .with_line_spacing(self.line_spacing)
        }));

        log::debug!("References: {} entries", paragraphs.len() - 1);
        paragraphs
    }

    /// A paragraph made of a styled label followed by plain text.
    fn labeled(&self, role: ParagraphRole, label: &str, text: &str) -> Option<Paragraph> {
        if is_blank(text) {
            log::debug!("{:?}: empty, section omitted", role);
            return None;
        }

        let style = &self.config.abstract_style;
        let fonts = &self.config.fonts;
        let size = named_size_to_half_points(style.size.as_deref());

        Some(
            Paragraph::new(role)
                .with_runs(build_runs(label, size, style.title_bold, fonts))
                .with_runs(build_runs(text, size, false, fonts))
                .with_line_spacing(self.line_spacing),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_config() -> ThesisConfig {
        ThesisConfig::default()
    }

    #[test]
    fn test_title_paragraph() {
        let config = builder_config();
        let builder = ParagraphBuilder::new(&config);
        let title = builder.title("测试Test");

        assert_eq!(title.role, ParagraphRole::Title);
        assert_eq!(title.style.alignment, Alignment::Center);
        assert_eq!(title.style.line_spacing, 360);
        assert_eq!(title.style.space_after, Some(360));
        assert_eq!(title.runs.len(), 2);
        assert!(title.runs.iter().all(|r| r.bold && r.size_half_points == 36));
    }

    #[test]
    fn test_title_left_aligned() {
        let config = builder_config().with_title_centered(false);
        let title = ParagraphBuilder::new(&config).title("Title");
        assert_eq!(title.style.alignment, Alignment::Left);
    }

    #[test]
    fn test_empty_title_still_emitted() {
        let config = builder_config();
        let title = ParagraphBuilder::new(&config).title("");
        assert!(title.runs.is_empty());
        assert_eq!(title.role, ParagraphRole::Title);
    }

    #[test]
    fn test_abstract_label_styling() {
        let config = builder_config();
        let p = ParagraphBuilder::new(&config)
            .abstract_block("本文研究排版。")
            .unwrap();

        assert_eq!(p.plain_text(), "摘要：本文研究排版。");
        assert_eq!(p.runs[0].text, "摘要：");
        assert!(p.runs[0].bold);
        assert!(p.runs[1..].iter().all(|r| !r.bold));
        assert_eq!(p.style.space_after, None);
    }

    #[test]
    fn test_abstract_whitespace_omitted() {
        let config = builder_config();
        let builder = ParagraphBuilder::new(&config);
        assert!(builder.abstract_block("").is_none());
        assert!(builder.abstract_block("  \n ").is_none());
    }

    #[test]
    fn test_keywords_space_after() {
        let config = builder_config();
        let p = ParagraphBuilder::new(&config).keywords("排版; Rust").unwrap();

        assert_eq!(p.role, ParagraphRole::Keywords);
        assert!(p.plain_text().starts_with(KEYWORDS_LABEL));
        assert_eq!(p.style.space_after, Some(240));
    }

    #[test]
    fn test_body_headings_and_indent() {
        let config = builder_config();
        let body = ParagraphBuilder::new(&config).body("1. 引言\n\n  \n正文内容123\n2.1 字体处理");

        assert_eq!(body.len(), 3);
        assert_eq!(body[0].role, ParagraphRole::Heading);
        assert_eq!(body[0].style.first_line_indent, 0);
        assert_eq!(body[0].style.heading_level, Some(1));
        assert!(body[0].is_bold());

        assert_eq!(body[1].role, ParagraphRole::Body);
        assert_eq!(body[1].style.first_line_indent, 480);
        assert!(body[1].runs.iter().all(|r| !r.bold));

        assert_eq!(body[2].style.heading_level, Some(2));
    }

    #[test]
    fn test_body_bold_config() {
        let config = builder_config().with_body_bold(true);
        let body = ParagraphBuilder::new(&config).body("普通段落");
        assert!(body[0].is_bold());
        assert_eq!(body[0].style.first_line_indent, 480);
    }

    #[test]
    fn test_references_section() {
        let config = builder_config();
        let refs = ParagraphBuilder::new(&config).references("[1] 张三. 论文.\n\n1. Not a heading");

        assert_eq!(refs.len(), 3);
        let title = &refs[0];
        assert_eq!(title.plain_text(), REFERENCES_TITLE);
        assert!(title.style.page_break_before);
        assert_eq!(title.style.alignment, Alignment::Center);
        assert_eq!(title.style.space_after, Some(240));

        for item in &refs[1..] {
            assert_eq!(item.role, ParagraphRole::ReferenceItem);
            assert_eq!(item.style.alignment, Alignment::Left);
            assert_eq!(item.style.first_line_indent, 0);
            assert!(!item.style.page_break_before);
            assert!(item.runs.iter().all(|r| !r.bold));
        }
        assert_eq!(refs[2].plain_text(), "1. Not a heading");
    }

    #[test]
    fn test_references_title_uses_title_settings() {
        let mut config = builder_config();
        config.references.title_size = Some("三号".to_string());
        config.references.content_size = Some("小五".to_string());
        config.references.title_bold = false;

        let refs = ParagraphBuilder::new(&config).references("[1] Doe J. 论文[J]. 2023.");
        let title = &refs[0];
        assert_eq!(title.role, ParagraphRole::ReferenceTitle);
        assert!(title.runs.iter().all(|r| r.size_half_points == 32 && !r.bold));

        assert_eq!(refs.len(), 2);
        assert!(refs[1].runs.iter().all(|r| r.size_half_points == 18 && !r.bold));
    }

    #[test]
    fn test_labels_follow_abstract_settings() {
        let mut config = builder_config();
        config.abstract_style.size = Some("五号".to_string());
        config.abstract_style.title_bold = false;
        let builder = ParagraphBuilder::new(&config);

        let paragraphs = [
            (builder.abstract_block("本文研究排版。").unwrap(), ABSTRACT_LABEL),
            (builder.keywords("排版; Rust").unwrap(), KEYWORDS_LABEL),
        ];
        for (paragraph, label) in &paragraphs {
            assert_eq!(paragraph.runs[0].text, *label);
            assert!(paragraph.runs.iter().all(|r| r.size_half_points == 21 && !r.bold));
        }
    }

    #[test]
    fn test_byte_order_mark_lines() {
        let config = builder_config();
        let body = ParagraphBuilder::new(&config).body("\u{FEFF}1. 引言\n\u{FEFF}\n正文");

        assert_eq!(body.len(), 2);
        assert_eq!(body[0].role, ParagraphRole::Heading);
        assert_eq!(body[0].style.first_line_indent, 0);
        assert_eq!(body[1].role, ParagraphRole::Body);
    }

    #[test]
    fn test_references_empty() {
        let config = builder_config();
        let builder = ParagraphBuilder::new(&config);
        assert!(builder.references("").is_empty());
        assert!(builder.references(" \n\t").is_empty());
    }

    #[test]
    fn test_unknown_size_falls_back() {
        let config = builder_config().with_body_size("不存在的尺寸");
        let body = ParagraphBuilder::new(&config).body("正文");
        assert_eq!(body[0].runs[0].size_half_points, 24);
    }

    #[test]
    fn test_build_order() {
        let config = builder_config();
        let content = ThesisContent::sample();
        let paragraphs = ParagraphBuilder::new(&config).build(&content);

        let roles: Vec<_> = paragraphs.iter().map(|p| p.role).collect();
        assert_eq!(roles[0], ParagraphRole::Title);
        assert_eq!(roles[1], ParagraphRole::Abstract);
        assert_eq!(roles[2], ParagraphRole::Keywords);
        assert_eq!(roles[roles.len() - 3], ParagraphRole::ReferenceTitle);
        assert_eq!(roles[roles.len() - 1], ParagraphRole::ReferenceItem);
        assert!(paragraphs.iter().all(|p| p.style.line_spacing == 360));
    }
}
