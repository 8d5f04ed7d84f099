//! Plain-text preview of formatted documents.

use crate::model::{Alignment, Document};

/// Prefix marking an indented first line (two ideographic spaces).
const INDENT_MARK: &str = "\u{3000}\u{3000}";

/// Page break marker.
const PAGE_BREAK: char = '\u{000C}';

/// Render a document as a plain-text preview.
///
/// Indented paragraphs start with two ideographic spaces and page-break
/// paragraphs are preceded by a form feed. Centered paragraphs are padded to
/// `width` columns when `width` is non-zero.
pub fn to_text(doc: &Document, width: usize) -> String {
    let mut output = String::new();

    for paragraph in &doc.paragraphs {
        if paragraph.style.page_break_before && !output.is_empty() {
            output.push(PAGE_BREAK);
            output.push('\n');
        }

        let text = paragraph.plain_text();
        if paragraph.style.first_line_indent > 0 {
            output.push_str(INDENT_MARK);
        } else if paragraph.style.alignment == Alignment::Center && width > 0 {
            let columns = display_width(&text);
            if columns < width {
                output.push_str(&" ".repeat((width - columns) / 2));
            }
        }
        output.push_str(&text);
        output.push('\n');

        if paragraph.style.space_after.is_some() {
            output.push('\n');
        }
    }

    output
}

/// Approximate column width: non-ASCII characters take two columns.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}
