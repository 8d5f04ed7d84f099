//! Document-level types.

use serde::{Deserialize, Serialize};

use super::Paragraph;
use crate::classify::ParagraphRole;

/// A formatted thesis, ready to hand to a serializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Page margins in twips
    pub page_margins: PageMargins,

    /// Paragraphs in emission order
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Assemble a document from margins and an ordered paragraph list.
    pub fn new(page_margins: PageMargins, paragraphs: Vec<Paragraph>) -> Self {
        Self {
            page_margins,
            paragraphs,
        }
    }

    /// Get the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Iterate over paragraphs with the given role.
    pub fn paragraphs_with_role(&self, role: ParagraphRole) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs.iter().filter(move |p| p.role == role)
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Page margins in twips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMargins {
    /// Top margin
    pub top: i32,

    /// Bottom margin
    pub bottom: i32,

    /// Left margin
    pub left: i32,

    /// Right margin
    pub right: i32,
}
