//! Generation inputs: formatting configuration and manuscript content.
//!
//! Both types use camelCase JSON so values produced by an external editor or
//! inference step can be fed in unchanged. Missing sections and fields fall
//! back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::units::{self, cm_to_twips};

/// Page margins in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    /// Top margin
    pub top: f64,

    /// Bottom margin
    pub bottom: f64,

    /// Left (binding side) margin
    pub left: f64,

    /// Right margin
    pub right: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 2.5,
            bottom: 2.5,
            left: 3.0,
            right: 2.0,
        }
    }
}

impl Margins {
    /// Same margin on every side.
    pub fn uniform(cm: f64) -> Self {
        Self {
            top: cm,
            bottom: cm,
            left: cm,
            right: cm,
        }
    }

    /// Convert to layout units.
    pub fn to_page_margins(&self) -> crate::model::PageMargins {
        crate::model::PageMargins {
            top: cm_to_twips(self.top),
            bottom: cm_to_twips(self.bottom),
            left: cm_to_twips(self.left),
            right: cm_to_twips(self.right),
        }
    }
}

/// Font families for the two script classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Family for non-ASCII (CJK) text
    pub cn: String,

    /// Family for ASCII (Latin, digits) text
    pub en: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            cn: "SimSun".to_string(),
            en: "Times New Roman".to_string(),
        }
    }
}

/// Title styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleStyle {
    /// Named font size of the title
    pub size: Option<String>,

    /// Bold title
    pub bold: bool,

    /// Center the title, otherwise left-align
    pub center: bool,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            size: Some("小二".to_string()),
            bold: true,
            center: true,
        }
    }
}

/// Abstract and keywords styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AbstractStyle {
    /// Named font size of labels and text
    pub size: Option<String>,

    /// Bold the "摘要：" / "关键词：" labels
    pub title_bold: bool,
}

impl Default for AbstractStyle {
    fn default() -> Self {
        Self {
            size: Some("小四".to_string()),
            title_bold: true,
        }
    }
}

/// Body text styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyStyle {
    /// Named font size of body paragraphs and headings
    pub size: Option<String>,

    /// Bold every body paragraph, not only headings
    pub bold: bool,

    /// Multiple of single line spacing, applied to every paragraph
    pub line_spacing: f64,
}

impl Default for BodyStyle {
    fn default() -> Self {
        Self {
            size: Some("小四".to_string()),
            bold: false,
            line_spacing: 1.5,
        }
    }
}

/// Reference section styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferenceStyle {
    /// Named font size of the "参考文献" heading
    pub title_size: Option<String>,

    /// Bold the "参考文献" heading
    pub title_bold: bool,

    /// Named font size of citation entries
    pub content_size: Option<String>,
}

impl Default for ReferenceStyle {
    fn default() -> Self {
        Self {
            title_size: Some("小四".to_string()),
            title_bold: true,
            content_size: Some("小四".to_string()),
        }
    }
}

/// Formatting configuration for one generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThesisConfig {
    /// Page margins
    pub margins: Margins,

    /// Font families per script
    pub fonts: FontConfig,

    /// Title styling
    pub title: TitleStyle,

    /// Abstract and keywords styling
    #[serde(rename = "abstract")]
    pub abstract_style: AbstractStyle,

    /// Body styling and global line spacing
    pub body: BodyStyle,

    /// Reference section styling
    pub references: ReferenceStyle,
}

impl ThesisConfig {
    /// Create a configuration with the default thesis layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Set page margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the CJK and Western font families.
    pub fn with_fonts(mut self, cn: impl Into<String>, en: impl Into<String>) -> Self {
        self.fonts = FontConfig {
            cn: cn.into(),
            en: en.into(),
        };
        self
    }

    /// Set the line-spacing multiplier.
    pub fn with_line_spacing(mut self, multiplier: f64) -> Self {
        self.body.line_spacing = multiplier;
        self
    }

    /// Set the body font size label.
    pub fn with_body_size(mut self, size: impl Into<String>) -> Self {
        self.body.size = Some(size.into());
        self
    }

    /// Bold all body text.
    pub fn with_body_bold(mut self, bold: bool) -> Self {
        self.body.bold = bold;
        self
    }

    /// Center or left-align the title.
    pub fn with_title_centered(mut self, center: bool) -> Self {
        self.title.center = center;
        self
    }

    /// Labels in the configuration that are missing from the size table.
    ///
    /// These still format (at the fallback size); this is only for reporting.
    pub fn unknown_sizes(&self) -> Vec<&str> {
        [
            &self.title.size,
            &self.abstract_style.size,
            &self.body.size,
            &self.references.title_size,
            &self.references.content_size,
        ]
        .into_iter()
        .filter_map(|s| s.as_deref())
        .filter(|s| !units::is_known_size(s))
        .collect()
    }
}

/// Manuscript text for one generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThesisContent {
    /// Thesis title
    pub title: String,

    /// Abstract text, without the "摘要：" label
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    /// Keyword list, without the "关键词：" label
    pub keywords: String,

    /// Newline-delimited paragraphs
    pub body: String,

    /// Newline-delimited citation entries
    pub refs: String,
}

impl ThesisContent {
    /// Create empty content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse content from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load content from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// A short demonstration manuscript.
    pub fn sample() -> Self {
        Self {
            title: "基于Web的自动化排版系统".to_string(),
            abstract_text: "本文介绍了一种在线排版工具，能够自动生成符合学术规范的Word文档。能够严格控制字体、字号和间距。".to_string(),
            keywords: "自动化; 排版; Rust; 文档生成".to_string(),
            body: "1. 引言\n\
                   传统的论文排版需要大量的手工调整，非常耗时。使用本工具，您可以专注于写作，格式问题交给程序。\n\
                   \n\
                   2. 系统设计\n\
                   这里演示第二段内容。可以看到，\"2. 系统设计\"这一行会自动加粗且顶格，而普通正文段落会首行缩进两字符。\n\
                   \n\
                   2.1 字体处理\n\
                   所有的中文都会自动应用配置的字体（如宋体），而数字如 123 和英文 Text 都会应用西文字体。\n\
                   \n\
                   3. 结论\n\
                   自动识别功能让排版更轻松。"
                .to_string(),
            refs: "[1] 张三. 网页自动化技术[J]. 软件学报, 2024.\n\
                   [2] Doe J. Web Document Generation[M]. IEEE Press, 2023."
                .to_string(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the abstract.
    pub fn with_abstract(mut self, text: impl Into<String>) -> Self {
        self.abstract_text = text.into();
        self
    }

    /// Set the keywords.
    pub fn with_keywords(mut self, text: impl Into<String>) -> Self {
        self.keywords = text.into();
        self
    }

    /// Set the body text.
    pub fn with_body(mut self, text: impl Into<String>) -> Self {
        self.body = text.into();
        self
    }

    /// Set the reference list.
    pub fn with_refs(mut self, text: impl Into<String>) -> Self {
        self.refs = text.into();
        self
    }
}

/// Check whether text is empty or whitespace only.
///
/// A byte-order mark (U+FEFF) counts as whitespace.
pub(crate) fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}

/// Non-blank lines of a multi-line field, untrimmed.
pub(crate) fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !is_blank(line))
}
