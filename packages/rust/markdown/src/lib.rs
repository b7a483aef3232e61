//! Pitch document parsing.
//!
//! Splits a `pitch.md` document into its five narrative sections using the
//! `## THE <NAME>` second-level headings as markers. Matching is a single
//! forward pass of literal, ASCII case-insensitive scans.

mod scan;

use tracing::{debug, instrument};

use pitchdeck_shared::{PitchSections, Section};

use scan::{find_ignore_ascii_case, find_next_h2};

/// Heading marker for a section, e.g. `## THE HOOK`.
pub fn heading_marker(section: Section) -> String {
    format!("## {}", section.label())
}

/// Split raw pitch text into its five sections.
///
/// For each section in [`Section::ALL`] order:
/// 1. Find the first occurrence of its heading marker anywhere in `raw`.
///    If there is none, the section stays empty.
/// 2. The body runs from just after the marker up to the next section's
///    marker, searched only in the text after the current one. If that
///    marker is absent, the next declared section that is present ends it
///    instead. The last section stops at the next `\n## ` + uppercase
///    heading. With no terminator the body runs to the end.
/// 3. The body is trimmed.
///
/// Headings that appear out of order are not detected and may leave sections
/// empty or truncated.
#[instrument(skip_all, fields(len = raw.len()))]
pub fn parse_pitch_sections(raw: &str) -> PitchSections {
    let mut sections = PitchSections::default();

    for section in Section::ALL {
        let marker = heading_marker(section);
        let Some(found) = find_ignore_ascii_case(raw, &marker) else {
            debug!(section = %section, "heading not found");
            continue;
        };

        let start = found + marker.len();
        let rest = &raw[start..];

        let mut following = section.following().peekable();
        let end = if following.peek().is_some() {
            following.find_map(|next| find_ignore_ascii_case(rest, &heading_marker(next)))
        } else {
            find_next_h2(rest)
        };
        let body = &rest[..end.unwrap_or(rest.len())];

        *sections.get_mut(section) = trim_section(body).to_string();
    }

    sections
}

/// Trim whitespace and any stray byte-order mark from both ends.
///
/// NEL (U+0085) is kept; it is content, not padding, in pitch text.
fn trim_section(text: &str) -> &str {
    text.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
