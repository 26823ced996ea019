//! # Document Lines
//!
//! Splits a document into lines, classifies each one, and filters out the
//! lines that are not meant to be displayed.
//!
//! ## Classification
//! Each line is judged on its trimmed text, independently of its neighbours:
//! - empty → `Blank` (kept, separates stanzas)
//! - starts with `{` → `Directive` (dropped)
//! - starts with `#` or `%` → `Comment` (dropped)
//! - anything else → `Content` (kept)
//!
//! Kept lines are returned with their original, untrimmed text. Because no
//! dropped-kind line can survive a pass, filtering is idempotent.
//!
//! ## Line terminators
//! Lines are split on `\n`, and trailing `\r` characters are removed, so both
//! `\n` and `\r\n` documents produce the same lines.

use serde::Serialize;

/// What a line is, judged on its trimmed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Directive,
    Comment,
    Content,
    Blank,
}

impl LineKind {
    /// Whether lines of this kind appear in display output
    pub fn is_displayed(self) -> bool {
        matches!(self, LineKind::Content | LineKind::Blank)
    }
}

/// One line of a document, tagged with its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentLine<'a> {
    /// 1-based line number in the source text
    pub number: usize,
    pub text: &'a str,
    pub kind: LineKind,
}

/// A chord (if any) and the lyric text it sits above
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSegment {
    pub chord: Option<String>,
    pub lyric: String,
}

fn raw_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    // "".split('\n') yields one empty line; an empty document has none
    let skip_all = text.is_empty();
    text.split('\n')
        .filter(move |_| !skip_all)
        .map(|line| line.trim_end_matches('\r'))
}

/// Split on `\n` / `\r\n`. An empty string has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    raw_lines(text).collect()
}

pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with('{') {
        LineKind::Directive
    } else if trimmed.starts_with('#') || trimmed.starts_with('%') {
        LineKind::Comment
    } else {
        LineKind::Content
    }
}

/// Lazily tag every line of `text`. Calling again restarts from the top.
pub fn document_lines(text: &str) -> impl Iterator<Item = DocumentLine<'_>> + '_ {
    raw_lines(text).enumerate().map(|(index, line)| DocumentLine {
        number: index + 1,
        text: line,
        kind: classify_line(line),
    })
}

/// Lines to show on screen: content and blank lines, original text.
///
/// # Examples
/// ```
/// use chordsheet::to_display_lines;
///
/// let lines = to_display_lines("{title: Test}\n# note\n[C]Line1\n\nLine2");
/// assert_eq!(lines, vec!["[C]Line1", "", "Line2"]);
/// ```
pub fn to_display_lines(text: &str) -> Vec<&str> {
    document_lines(text)
        .filter(|line| line.kind.is_displayed())
        .map(|line| line.text)
        .collect()
}

/// Display lines joined back into a document with `\n`.
///
/// # Examples
/// ```
/// use chordsheet::strip_chordpro_directives;
///
/// assert_eq!(
///     strip_chordpro_directives("{title: Test}\nLine1\n\nLine2"),
///     "Line1\n\nLine2"
/// );
/// ```
pub fn strip_chordpro_directives(text: &str) -> String {
    to_display_lines(text).join("\n")
}

/// Break one line into chord/lyric pairs for chords-over-lyrics rendering.
///
/// Text before the first chord gets `chord: None`. An unclosed `[` is treated
/// as lyric text. Writing each segment back as `[chord]lyric` reproduces the line.
///
/// # Examples
/// ```
/// use chordsheet::line_segments;
///
/// let segments = line_segments("Oh [G]say can you [D/F#]see");
/// assert_eq!(segments[0].chord, None);
/// assert_eq!(segments[0].lyric, "Oh ");
/// assert_eq!(segments[1].chord.as_deref(), Some("G"));
/// assert_eq!(segments[2].chord.as_deref(), Some("D/F#"));
/// assert_eq!(segments[2].lyric, "see");
/// ```
pub fn line_segments(line: &str) -> Vec<LineSegment> {
    let mut segments = Vec::new();
    let mut current = LineSegment { chord: None, lyric: String::new() };
    let mut rest = line;

    while let Some(open) = rest.find('[') {
        let inner = &rest[open + 1..];
        let Some(close) = inner.find(']') else {
            break;
        };
        current.lyric.push_str(&rest[..open]);
        if current.chord.is_some() || !current.lyric.is_empty() {
            segments.push(current);
        }
        current = LineSegment {
            chord: Some(inner[..close].to_string()),
            lyric: String::new(),
        };
        rest = &inner[close + 1..];
    }

    current.lyric.push_str(rest);
    if current.chord.is_some() || !current.lyric.is_empty() {
        segments.push(current);
    }
    segments
}
