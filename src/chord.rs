//! # Chord Token Parsing
//!
//! Decomposes the text between one pair of brackets (`[F#m7/C#]`) into a root,
//! an opaque suffix, and an optional bass note.
//!
//! ## Grammar
//! ```text
//! token  := root suffix ( '/' root bass-tail )?
//! root   := [A-G] [#b]?
//! suffix := any characters, kept verbatim
//! ```
//!
//! The accidental is matched greedily, so `Cb5` reads as root `Cb` (which is
//! not a recognized spelling) rather than `C` + `b5`. `Db5` reads as root `Db`
//! with suffix `5`.
//!
//! The bass is taken from the last `/` whose tail starts with `A`-`G`. Any
//! other slash (`C6/9`) stays in the suffix. Characters after the bass root are
//! kept verbatim as `bass_tail`.
//!
//! Parsing never fails. Anything that does not fit the grammar, or that uses a
//! spelling the pitch tables do not know, comes back as [`ParsedToken::Unparsed`]
//! holding the original text, so directional or annotation brackets like
//! `[N.C.]` or `[x2]` survive unchanged.

use crate::pitch::{normalize, PitchClass};
use std::fmt;

/// A chord annotation decomposed into transposable parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    pub root: PitchClass,
    /// Quality/extension text (`m7`, `sus4`, `maj7(#11)`), never interpreted
    pub suffix: String,
    pub bass: Option<PitchClass>,
    /// Text after the bass root; empty for a bare bass note
    pub bass_tail: String,
}

/// Result of parsing one bracket interior
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedToken<'a> {
    Chord(ChordToken),
    /// Original text, to be echoed unchanged
    Unparsed(&'a str),
}

impl fmt::Display for ChordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)?;
        if let Some(bass) = self.bass {
            write!(f, "/{}{}", bass, self.bass_tail)?;
        }
        Ok(())
    }
}

impl fmt::Display for ParsedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedToken::Chord(chord) => fmt::Display::fmt(chord, f),
            ParsedToken::Unparsed(raw) => f.write_str(raw),
        }
    }
}

/// Split a leading `[A-G][#b]?` off `s`.
///
/// Returns `(root, rest)`, or `None` if `s` does not start with `A`-`G`.
fn split_root(s: &str) -> Option<(&str, &str)> {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b'A'..=b'G') => {}
        _ => return None,
    }
    // Both candidate bytes are ASCII, so these are char boundaries
    let len = match bytes.get(1) {
        Some(b'#') | Some(b'b') => 2,
        _ => 1,
    };
    Some(s.split_at(len))
}

/// Parse one chord annotation (the text between `[` and `]`).
///
/// # Examples
/// ```
/// use chordsheet::chord::{parse_token, ParsedToken};
///
/// match parse_token("F#m7") {
///     ParsedToken::Chord(chord) => {
///         assert_eq!(chord.root.name(), "F#");
///         assert_eq!(chord.suffix, "m7");
///         assert_eq!(chord.bass, None);
///     }
///     ParsedToken::Unparsed(_) => unreachable!(),
/// }
///
/// assert_eq!(parse_token("N.C."), ParsedToken::Unparsed("N.C."));
/// ```
pub fn parse_token(raw: &str) -> ParsedToken<'_> {
    let Some((root_name, rest)) = split_root(raw) else {
        log::trace!("not a chord, passing through: {:?}", raw);
        return ParsedToken::Unparsed(raw);
    };
    let Some(root) = normalize(root_name) else {
        log::debug!("unrecognized root {:?} in {:?}, passing through", root_name, raw);
        return ParsedToken::Unparsed(raw);
    };

    let mut suffix = rest;
    let mut bass = None;
    let mut bass_tail = "";

    if let Some(slash) = rest.rfind('/') {
        if let Some((bass_name, tail)) = split_root(&rest[slash + 1..]) {
            let Some(pitch) = normalize(bass_name) else {
                log::debug!("unrecognized bass {:?} in {:?}, passing through", bass_name, raw);
                return ParsedToken::Unparsed(raw);
            };
            suffix = &rest[..slash];
            bass = Some(pitch);
            bass_tail = tail;
        }
    }

    ParsedToken::Chord(ChordToken {
        root,
        suffix: suffix.to_string(),
        bass,
        bass_tail: bass_tail.to_string(),
    })
}
