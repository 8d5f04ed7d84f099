//! Script-aware segmentation of text into font runs.
//!
//! Word processors need an explicit font family for CJK and Latin glyphs.
//! A composite font spec on a single run renders inconsistently, so text is
//! split at every ASCII / non-ASCII boundary and each piece carries its own
//! resolved family.

use serde::{Deserialize, Serialize};

use crate::config::FontConfig;
use crate::model::TextRun;

/// Script class of a character, used to pick a font family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    /// 7-bit ASCII: Latin letters, digits, ASCII punctuation
    #[default]
    Western,
    /// Everything outside ASCII: CJK, full-width punctuation, etc.
    EastAsian,
}

impl Script {
    /// Classify a single character.
    pub fn of(c: char) -> Self {
        if c.is_ascii() {
            Script::Western
        } else {
            Script::EastAsian
        }
    }

    /// Check if this is the non-ASCII class.
    pub fn is_east_asian(&self) -> bool {
        matches!(self, Script::EastAsian)
    }

    /// Resolve the configured font family for this script.
    pub fn font_family<'a>(&self, fonts: &'a FontConfig) -> &'a str {
        match self {
            Script::Western => &fonts.en,
            Script::EastAsian => &fonts.cn,
        }
    }
}

/// A maximal run of characters sharing one script class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Borrowed slice of the source text
    pub text: &'a str,

    /// Script class of every character in `text`
    pub script: Script,
}

/// Split text into maximal single-script segments.
///
/// Scans by `char`, so multi-byte characters are never split. Segments are
/// never empty and adjacent segments always differ in script; joining them
/// reproduces the input.
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut chars = text.char_indices();

    let Some((_, first)) = chars.next() else {
        return segments;
    };

    let mut start = 0;
    let mut current = Script::of(first);

    for (idx, c) in chars {
        let script = Script::of(c);
        if script != current {
            segments.push(Segment {
                text: &text[start..idx],
                script: current,
            });
            start = idx;
            current = script;
        }
    }

    segments.push(Segment {
        text: &text[start..],
        script: current,
    });

    segments
}

/// Build styled runs for a piece of text.
///
/// Boldness and size apply uniformly; only the font family depends on the
/// script of each segment. Empty text yields no runs.
pub fn build_runs(
    text: &str,
    size_half_points: u32,
    bold: bool,
    fonts: &FontConfig,
) -> Vec<TextRun> {
    segment(text)
        .into_iter()
        .map(|seg| TextRun {
            text: seg.text.to_string(),
            bold,
            size_half_points,
            font_family: seg.script.font_family(fonts).to_string(),
            script: seg.script,
        })
        .collect()
}
