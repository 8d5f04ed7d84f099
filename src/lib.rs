//! # thesisfmt
//!
//! Deterministic formatting engine for plain-text thesis manuscripts.
//!
//! The engine takes unmarked manuscript text (title, abstract, keywords,
//! body, references) and a formatting configuration, and produces a styled
//! document model: page margins plus paragraphs with alignment, indentation,
//! spacing and script-homogeneous font runs. Writing the actual
//! word-processor file is left to a [`render::DocumentSerializer`].
//!
//! ## Quick Start
//!
//! ```
//! use thesisfmt::{build_document, ThesisConfig, ThesisContent};
//!
//! let content = ThesisContent::new()
//!     .with_title("测试Test")
//!     .with_body("1. 引言\n正文内容123");
//!
//! let doc = build_document(&content, &ThesisConfig::default());
//! assert_eq!(doc.paragraph_count(), 3);
//! assert_eq!(doc.paragraphs[2].style.first_line_indent, 480);
//! ```
//!
//! ## Features
//!
//! - **Heading detection**: numbered lines (`1.`, `2.1`, `一、`) become bold, flush-left headings
//! - **Script segmentation**: CJK and Latin text get separate runs and fonts
//! - **Named font sizes**: Chinese size labels (小四, 五号, ...) with a 12pt fallback
//! - **Pure and stateless**: safe to call from any number of threads

pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod segment;
pub mod units;

// Re-export commonly used types
pub use builder::ParagraphBuilder;
pub use classify::{heading_level, is_heading, ParagraphRole};
pub use config::{
    AbstractStyle, BodyStyle, FontConfig, Margins, ReferenceStyle, ThesisConfig, ThesisContent,
    TitleStyle,
};
pub use error::{Error, Result};
pub use model::{Alignment, Document, PageMargins, Paragraph, ParagraphStyle, TextRun};
pub use render::{DocumentSerializer, JsonFormat, JsonSerializer, SerializerRegistry};
pub use segment::{build_runs, segment, Script, Segment};

use std::path::Path;

/// Format a manuscript into a document model.
///
/// Never fails: unknown font sizes fall back to 12pt and blank optional
/// sections are left out.
///
/// # Example
///
/// ```
/// use thesisfmt::{build_document, ParagraphRole, ThesisConfig, ThesisContent};
///
/// let doc = build_document(&ThesisContent::sample(), &ThesisConfig::default());
/// assert_eq!(doc.paragraphs[0].role, ParagraphRole::Title);
/// ```
pub fn build_document(content: &ThesisContent, config: &ThesisConfig) -> Document {
    let paragraphs = ParagraphBuilder::new(config).build(content);
    let page_margins = config.margins.to_page_margins();

    log::debug!(
        "Built document: {} paragraphs, margins {:?}",
        paragraphs.len(),
        page_margins
    );

    Document::new(page_margins, paragraphs)
}

/// Format a manuscript given as JSON strings.
///
/// Fails with [`Error::InvalidInput`] if either input cannot be decoded.
pub fn build_document_from_json(content: &str, config: &str) -> Result<Document> {
    let content = ThesisContent::from_json(content)?;
    let config = ThesisConfig::from_json(config)?;
    Ok(build_document(&content, &config))
}

/// Format a manuscript from JSON files.
///
/// Without a config path the default configuration is used.
pub fn build_document_from_paths<P: AsRef<Path>, Q: AsRef<Path>>(
    content: P,
    config: Option<Q>,
) -> Result<Document> {
    let content = ThesisContent::from_path(content)?;
    let config = match config {
        Some(path) => ThesisConfig::from_path(path)?,
        None => ThesisConfig::default(),
    };
    Ok(build_document(&content, &config))
}

/// Builder for formatting and serializing a manuscript.
///
/// # Example
///
/// ```
/// use thesisfmt::{Formatter, ThesisConfig, ThesisContent};
///
/// let json = Formatter::new()
///     .with_config(ThesisConfig::new().with_line_spacing(2.0))
///     .build(&ThesisContent::sample())
///     .to_json()?;
/// assert!(json.contains("\"line_spacing\": 480"));
/// # Ok::<(), thesisfmt::Error>(())
/// ```
pub struct Formatter {
    config: ThesisConfig,
    registry: SerializerRegistry,
}

impl Formatter {
    /// Create a formatter with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ThesisConfig::default(),
            registry: SerializerRegistry::with_defaults(),
        }
    }

    /// Set the formatting configuration.
    pub fn with_config(mut self, config: ThesisConfig) -> Self {
        self.config = config;
        self
    }

    /// Register an additional serializer.
    pub fn with_serializer(mut self, serializer: std::sync::Arc<dyn DocumentSerializer>) -> Self {
        self.registry.register(serializer);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &ThesisConfig {
        &self.config
    }

    /// Format a manuscript.
    pub fn build(&self, content: &ThesisContent) -> FormatResult<'_> {
        FormatResult {
            document: build_document(content, &self.config),
            registry: &self.registry,
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

/// A formatted document together with the formatter's serializers.
pub struct FormatResult<'a> {
    /// The formatted document
    pub document: Document,
    registry: &'a SerializerRegistry,
}

impl FormatResult<'_> {
    /// Convert to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        render::to_json(&self.document, JsonFormat::Pretty)
    }

    /// Render a plain-text preview.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document, 0)
    }

    /// Serialize with a registered serializer, by name or extension.
    pub fn serialize_with(&self, key: &str) -> Result<Vec<u8>> {
        self.registry.serialize(&self.document, key)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take ownership of the document.
    pub fn into_document(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== End-to-End Tests ====================

    #[test]
    fn test_build_document_minimal() {
        let content = ThesisContent::new()
            .with_title("测试Test")
            .with_body("1. 引言\n正文内容123");
        let doc = build_document(&content, &ThesisConfig::default());

        assert_eq!(doc.paragraph_count(), 3);

        let title = &doc.paragraphs[0];
        assert_eq!(title.runs[0].text, "测试");
        assert_eq!(title.runs[0].font_family, "SimSun");
        assert_eq!(title.runs[1].text, "Test");
        assert_eq!(title.runs[1].font_family, "Times New Roman");

        let heading = &doc.paragraphs[1];
        assert_eq!(heading.style.first_line_indent, 0);
        assert!(heading.is_bold());

        assert_eq!(doc.paragraphs[2].style.first_line_indent, 480);
    }

    #[test]
    fn test_build_document_margins() {
        let doc = build_document(&ThesisContent::new(), &ThesisConfig::default());
        assert_eq!(
            doc.page_margins,
            PageMargins {
                top: 1418,
                bottom: 1418,
                left: 1701,
                right: 1134,
            }
        );
        // Title is always present
        assert_eq!(doc.paragraph_count(), 1);
    }

    #[test]
    fn test_build_document_from_json() {
        let doc = build_document_from_json(
            r#"{"title": "T", "body": "一、概述\n内容"}"#,
            r#"{"body": {"lineSpacing": 1.0}}"#,
        )
        .unwrap();

        assert_eq!(doc.paragraph_count(), 3);
        assert!(doc.paragraphs.iter().all(|p| p.style.line_spacing == 240));
    }

    #[test]
    fn test_build_document_from_json_invalid() {
        let result = build_document_from_json("not json", "{}");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    // ==================== Builder Pattern Tests ====================

    #[test]
    fn test_formatter_default() {
        let formatter = Formatter::default();
        assert_eq!(formatter.config(), &ThesisConfig::default());
    }

    #[test]
    fn test_formatter_serialize_missing() {
        let formatter = Formatter::new();
        let result = formatter.build(&ThesisContent::sample()).serialize_with("docx");
        assert!(matches!(result, Err(Error::MissingDependency(_))));
    }

    #[test]
    fn test_formatter_preview() {
        let formatter = Formatter::new();
        let text = formatter.build(&ThesisContent::sample()).to_text();
        assert!(text.contains("摘要："));
        assert!(text.contains("参考文献"));
    }
}
