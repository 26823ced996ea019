//! # Public API
//!
//! One-shot preparation of a chord sheet for display.
//!
//! The individual operations live in their own modules and are re-exported at
//! the crate root:
//!
//! - [`transpose_chord_token()`](crate::transpose_chord_token) - transpose one chord annotation
//! - [`transpose_chordpro()`](crate::transpose_chordpro) - transpose every `[chord]` in a document
//! - [`strip_chordpro_directives()`](crate::strip_chordpro_directives) - drop directive and comment lines
//! - [`extract_meta()`](crate::extract_meta) - collect `{key: value}` directives
//! - [`split_lines()`](crate::split_lines) / [`to_display_lines()`](crate::to_display_lines) - line model
//!
//! [`prepare_song()`] combines them into the shape a rendering layer needs.
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordsheet::prepare_song;
//!
//! let source = "{title: Amazing Grace}\n{key: G}\n\n[G]Amazing [G7]grace";
//!
//! let song = prepare_song(source, 2);
//! assert_eq!(song.title.as_deref(), Some("Amazing Grace"));
//! assert_eq!(song.key.as_deref(), Some("A"));
//! assert_eq!(song.lines[1].text, "[A]Amazing [A7]grace");
//! ```

use crate::directive::{extract_meta, Metadata};
use crate::lines::{document_lines, line_segments, LineKind, LineSegment};
use crate::transpose::{normalize_steps, transpose_chordpro, transposed_key};
use serde::Serialize;

/// A displayed line with its chord/lyric breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongLine {
    pub text: String,
    pub kind: LineKind,
    pub segments: Vec<LineSegment>,
}

/// A chord sheet ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Song {
    pub title: Option<String>,
    pub artist: Option<String>,
    /// The `key` directive, transposed along with the chords
    pub key: Option<String>,
    pub capo: Option<u8>,
    /// Applied shift, reduced to `0..12`
    pub steps: u8,
    /// Directives as written in the source
    pub metadata: Metadata,
    pub lines: Vec<SongLine>,
}

/// Extract metadata, transpose, and split a document into display lines.
///
/// Metadata comes from the untransposed source; only the `key` field is
/// shifted. Never fails: malformed input degrades the same way the
/// individual operations do.
pub fn prepare_song(source: &str, steps: i32) -> Song {
    let metadata = extract_meta(source);
    let transposed = transpose_chordpro(source, steps);

    let lines = document_lines(&transposed)
        .filter(|line| line.kind.is_displayed())
        .map(|line| SongLine {
            text: line.text.to_string(),
            kind: line.kind,
            segments: line_segments(line.text),
        })
        .collect();

    log::debug!(
        "prepared song {:?}: {} directives, shifted {} steps",
        metadata.title(),
        metadata.len(),
        steps
    );

    Song {
        title: metadata.title().map(str::to_string),
        artist: metadata.artist().map(str::to_string),
        key: transposed_key(&metadata, steps),
        capo: metadata.capo(),
        steps: normalize_steps(steps),
        metadata,
        lines,
    }
}
