//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

use crate::classify::ParagraphRole;
use crate::segment::Script;

/// A paragraph ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Structural role the paragraph was built for
    pub role: ParagraphRole,

    /// Text runs in order
    pub runs: Vec<TextRun>,

    /// Paragraph layout
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create an empty paragraph with default layout.
    pub fn new(role: ParagraphRole) -> Self {
        Self {
            role,
            runs: Vec::new(),
            style: ParagraphStyle::default(),
        }
    }

    /// Append runs.
    pub fn with_runs(mut self, runs: impl IntoIterator<Item = TextRun>) -> Self {
        self.runs.extend(runs);
        self
    }

    /// Set alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    /// Set the line-spacing value.
    pub fn with_line_spacing(mut self, line_spacing: u32) -> Self {
        self.style.line_spacing = line_spacing;
        self
    }

    /// Set the first-line indent in twips.
    pub fn with_first_line_indent(mut self, indent: u32) -> Self {
        self.style.first_line_indent = indent;
        self
    }

    /// Set the spacing after the paragraph in twips.
    pub fn with_space_after(mut self, space: u32) -> Self {
        self.style.space_after = Some(space);
        self
    }

    /// Start the paragraph on a new page.
    pub fn with_page_break_before(mut self) -> Self {
        self.style.page_break_before = true;
        self
    }

    /// Record the outline level of a heading.
    pub fn with_heading_level(mut self, level: Option<u8>) -> Self {
        self.style.heading_level = level;
        self
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Check if the paragraph has no text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(TextRun::is_empty)
    }

    /// Check if every run is bold. An empty paragraph is not bold.
    pub fn is_bold(&self) -> bool {
        !self.runs.is_empty() && self.runs.iter().all(|run| run.bold)
    }

    /// Check if this is a body heading.
    pub fn is_heading(&self) -> bool {
        self.role == ParagraphRole::Heading
    }
}

/// A run of text in one script with uniform styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content, never mixing ASCII and non-ASCII characters
    pub text: String,

    /// Bold text
    pub bold: bool,

    /// Font size in half-points
    pub size_half_points: u32,

    /// Resolved font family for this run's script
    pub font_family: String,

    /// Script class, selects the east-asian or ascii font slot
    pub script: Script,
}

impl TextRun {
    /// Font size in points.
    pub fn size_points(&self) -> f64 {
        f64::from(self.size_half_points) / 2.0
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Paragraph layout. Lengths are in twips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Text alignment
    pub alignment: Alignment,

    /// First line indent
    pub first_line_indent: u32,

    /// Line spacing (240 = single)
    pub line_spacing: u32,

    /// Space after the paragraph
    pub space_after: Option<u32>,

    /// Start on a new page
    pub page_break_before: bool,

    /// Outline level for headings
    pub heading_level: Option<u8>,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justified,
}
