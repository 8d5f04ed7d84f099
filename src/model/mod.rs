//! Document model produced by the formatting engine.
//!
//! This is the hand-off format for serializers: page margins plus an ordered
//! list of paragraphs, each with layout and script-homogeneous text runs.
//! All lengths are twips and all font sizes are half-points.

mod document;
mod paragraph;

pub use document::{Document, PageMargins};
pub use paragraph::{Alignment, Paragraph, ParagraphStyle, TextRun};
