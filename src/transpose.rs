//! # Transposition
//!
//! Shifts chord annotations by a signed number of semitones.
//!
//! Roots and bass notes move independently through pitch-class arithmetic and
//! are always re-spelled with sharps, so a flat-spelled chord changes bytes
//! even at 0 or 12 steps (`[Bb]` becomes `[A#]`). Suffixes are copied verbatim.
//! Bracket contents that do not parse as a chord are echoed unchanged, and every
//! byte outside the brackets is copied as-is.

use crate::chord::{parse_token, ChordToken, ParsedToken};
use crate::directive::Metadata;

impl ChordToken {
    /// Same chord moved by `steps` semitones, suffix untouched
    pub fn transpose(&self, steps: i32) -> ChordToken {
        ChordToken {
            root: self.root.transpose(steps),
            suffix: self.suffix.clone(),
            bass: self.bass.map(|bass| bass.transpose(steps)),
            bass_tail: self.bass_tail.clone(),
        }
    }
}

/// Reduce a step count to `0..12` (floored modulo).
///
/// ```
/// use chordsheet::transpose::normalize_steps;
///
/// assert_eq!(normalize_steps(14), 2);
/// assert_eq!(normalize_steps(-1), 11);
/// ```
pub fn normalize_steps(steps: i32) -> u8 {
    steps.rem_euclid(12) as u8
}

/// Transpose a single chord annotation.
///
/// # Examples
/// ```
/// use chordsheet::transpose_chord_token;
///
/// assert_eq!(transpose_chord_token("C", 2), "D");
/// assert_eq!(transpose_chord_token("Db", 1), "D");
/// assert_eq!(transpose_chord_token("F#m7", 3), "Am7");
/// assert_eq!(transpose_chord_token("G/D", 2), "A/E");
/// assert_eq!(transpose_chord_token("N.C.", 5), "N.C.");
/// ```
pub fn transpose_chord_token(token: &str, steps: i32) -> String {
    match parse_token(token) {
        ParsedToken::Chord(chord) => chord.transpose(steps).to_string(),
        ParsedToken::Unparsed(raw) => raw.to_string(),
    }
}

/// Transpose every `[...]` annotation in a document.
///
/// Each `[` is paired with the next `]`; an unclosed `[` and everything after
/// it is copied through.
///
/// # Examples
/// ```
/// use chordsheet::transpose_chordpro;
///
/// assert_eq!(transpose_chordpro("[C]Hello [G]world", 2), "[D]Hello [A]world");
/// assert_eq!(transpose_chordpro("[C]Hello [G]world", -12), "[C]Hello [G]world");
/// ```
pub fn transpose_chordpro(text: &str, steps: i32) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        let inner = &rest[open + 1..];
        let Some(close) = inner.find(']') else {
            break;
        };
        out.push_str(&rest[..=open]);
        out.push_str(&transpose_chord_token(&inner[..close], steps));
        out.push(']');
        rest = &inner[close + 1..];
    }

    out.push_str(rest);
    out
}

/// The document's `key` directive after transposing by `steps`.
///
/// Uses the chord-token rules, so `Bbm` at +2 is `Cm` and a key the parser
/// does not recognize is returned unchanged. `None` if there is no `key`.
pub fn transposed_key(meta: &Metadata, steps: i32) -> Option<String> {
    meta.key().map(|key| transpose_chord_token(key, steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::extract_meta;

    #[test]
    fn test_transpose_token_basic() {
        assert_eq!(transpose_chord_token("C", 2), "D");
        assert_eq!(transpose_chord_token("B", 1), "C");
        assert_eq!(transpose_chord_token("C", -1), "B");
        assert_eq!(transpose_chord_token("A", 3), "C");
    }

    #[test]
    fn test_transpose_token_respells_flats() {
        assert_eq!(transpose_chord_token("Db", 1), "D");
        assert_eq!(transpose_chord_token("Bb", 0), "A#");
        assert_eq!(transpose_chord_token("Eb", 12), "D#");
        assert_eq!(transpose_chord_token("C", 1), "C#");
    }

    #[test]
    fn test_transpose_token_keeps_suffix() {
        assert_eq!(transpose_chord_token("F#m7", 3), "Am7");
        assert_eq!(transpose_chord_token("Csus4", 5), "Fsus4");
        assert_eq!(transpose_chord_token("Ebmaj7(#11)", 2), "Fmaj7(#11)");
        assert_eq!(transpose_chord_token("C6/9", 2), "D6/9");
    }

    #[test]
    fn test_transpose_token_slash_chords() {
        assert_eq!(transpose_chord_token("G/D", 2), "A/E");
        assert_eq!(transpose_chord_token("Am/G", -2), "Gm/F");
        assert_eq!(transpose_chord_token("D/F#", 1), "D#/G");
    }

    #[test]
    fn test_transpose_token_passthrough() {
        assert_eq!(transpose_chord_token("N.C.", 5), "N.C.");
        assert_eq!(transpose_chord_token("", 5), "");
        assert_eq!(transpose_chord_token("Cb", 5), "Cb");
        assert_eq!(transpose_chord_token("x2", -3), "x2");
    }

    #[test]
    fn test_octave_identity() {
        for name in crate::pitch::SHARP_NAMES.iter().chain(crate::pitch::FLAT_NAMES.iter()) {
            let zero = transpose_chord_token(name, 0);
            for k in [-36, -24, -12, 12, 24, 36] {
                assert_eq!(transpose_chord_token(name, k), zero, "{} by {}", name, k);
            }
        }
    }

    #[test]
    fn test_transpose_document() {
        assert_eq!(transpose_chordpro("[C]Hello [G]world", 2), "[D]Hello [A]world");
        assert_eq!(transpose_chordpro("[C]Hello [G]world", -12), "[C]Hello [G]world");
        assert_eq!(
            transpose_chordpro("{key: G}\n[G]Amazing [G7]grace, how [C]sweet", 2),
            "{key: G}\n[A]Amazing [A7]grace, how [D]sweet"
        );
    }

    #[test]
    fn test_transpose_document_leaves_text_alone() {
        let text = "No chords here,\r\njust words & (punctuation).\n";
        assert_eq!(transpose_chordpro(text, 7), text);
        assert_eq!(transpose_chordpro("", 7), "");
    }

    #[test]
    fn test_transpose_document_odd_brackets() {
        assert_eq!(transpose_chordpro("[N.C.] then [C]go", 2), "[N.C.] then [D]go");
        assert_eq!(transpose_chordpro("[]", 2), "[]");
        assert_eq!(transpose_chordpro("open [C", 2), "open [C");
        assert_eq!(transpose_chordpro("[C] open [G", 2), "[D] open [G");
        assert_eq!(transpose_chordpro("close ]C[D]", 2), "close ]C[E]");
        assert_eq!(transpose_chordpro("[[C]", 2), "[[C]");
    }

    #[test]
    fn test_transpose_document_multibyte_lyrics() {
        assert_eq!(transpose_chordpro("[Am]Señor, [E]añá", 3), "[Cm]Señor, [G]añá");
    }

    #[test]
    fn test_normalize_steps() {
        assert_eq!(normalize_steps(0), 0);
        assert_eq!(normalize_steps(12), 0);
        assert_eq!(normalize_steps(-13), 11);
        assert_eq!(normalize_steps(i32::MIN), (i32::MIN as i64).rem_euclid(12) as u8);
    }

    #[test]
    fn test_transposed_key() {
        let meta = extract_meta("{title: Song}{key: Bb}");
        assert_eq!(transposed_key(&meta, 2), Some("C".to_string()));
        assert_eq!(transposed_key(&meta, 1), Some("B".to_string()));

        let minor = extract_meta("{key: Bbm}");
        assert_eq!(transposed_key(&minor, 2), Some("Cm".to_string()));

        assert_eq!(transposed_key(&extract_meta("{title: x}"), 2), None);
        assert_eq!(transposed_key(&extract_meta("{key: dorian}"), 2), Some("dorian".to_string()));
    }
}
