//! Section extraction: recovers `## Problem` / `## Solution` / `## Results`
//! blocks from a free-text completion reply.
//!
//! The header text lives in `SectionLabel::header` and is shared with the
//! case-study prompt template. Change both together or not at all.

use std::sync::OnceLock;

use regex::Regex;

/// Markdown marker that opens a section line.
pub const SECTION_MARKER: &str = "##";

/// The three sections a case study is split into, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLabel {
    Problem,
    Solution,
    Results,
}

impl SectionLabel {
    pub const ALL: [SectionLabel; 3] = [
        SectionLabel::Problem,
        SectionLabel::Solution,
        SectionLabel::Results,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionLabel::Problem => "Problem",
            SectionLabel::Solution => "Solution",
            SectionLabel::Results => "Results",
        }
    }

    /// The full header line, e.g. `## Problem`.
    pub fn header(self) -> String {
        format!("{SECTION_MARKER} {}", self.label())
    }

    fn index(self) -> usize {
        match self {
            SectionLabel::Problem => 0,
            SectionLabel::Solution => 1,
            SectionLabel::Results => 2,
        }
    }

    /// `## <label>` followed by its whitespace separator. Compiled once.
    fn pattern(self) -> &'static Regex {
        static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
        let patterns = PATTERNS.get_or_init(|| {
            SectionLabel::ALL.map(|label| {
                Regex::new(&format!(r"{}\s+", regex::escape(&label.header())))
                    .expect("section header pattern must compile")
            })
        });
        &patterns[self.index()]
    }
}

/// Extracts the body of the first `## <label>` section in `reply`.
///
/// The header must be followed by at least one whitespace character, which is
/// consumed as a separator. The body runs until the next line starting with
/// `##` or the end of the string, and is trimmed. A missing header yields an
/// empty string.
pub fn extract_section(reply: &str, label: SectionLabel) -> String {
    let Some(m) = label.pattern().find(reply) else {
        return String::new();
    };

    // Next section line, searched from the header itself so that a header
    // directly followed by another header line yields an empty body.
    let next_line = format!("\n{SECTION_MARKER}");
    let end = reply[m.start()..]
        .find(&next_line)
        .map(|offset| m.start() + offset)
        .unwrap_or(reply.len());

    if end <= m.end() {
        return String::new();
    }

    reply[m.end()..end].trim().to_string()
}
