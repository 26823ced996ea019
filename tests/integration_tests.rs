//! Integration tests for the chordsheet engine
//!
//! Exercises the public operations end-to-end on realistic chord sheets.

use chordsheet::{
    extract_meta, prepare_song, split_lines, strip_chordpro_directives, to_display_lines,
    transpose_chord_token, transpose_chordpro,
};

const SONG: &str = "{title: House of the Rising Sun}
{artist: Traditional}
{key: Am}
# capo optional

[Am]There is a [C]house in [D]New Orle[F]ans
They [Am]call the [C]Rising [E]Sun

% second verse
[Am]And it's been the [C]ruin of [D]many a poor [F]boy
[Am]And God, I [E]know I'm [Am]one
";

#[test]
fn test_token_examples() {
    assert_eq!(transpose_chord_token("C", 2), "D");
    assert_eq!(transpose_chord_token("Db", 1), "D");
    assert_eq!(transpose_chord_token("F#m7", 3), "Am7");
    assert_eq!(transpose_chord_token("G/D", 2), "A/E");
    assert_eq!(transpose_chord_token("N.C.", 5), "N.C.");
}

#[test]
fn test_token_octave_is_identity_on_pitch_class() {
    for name in ["C", "C#", "Db", "E", "F#", "Gb", "Ab", "B", "Bbm7", "D/F#"] {
        let base = transpose_chord_token(name, 0);
        assert_eq!(transpose_chord_token(name, 12), base);
        assert_eq!(transpose_chord_token(name, -12), base);
        for k in -30..30 {
            assert_eq!(
                transpose_chord_token(name, k),
                transpose_chord_token(name, k + 12),
                "{} at {}",
                name,
                k
            );
        }
    }
}

#[test]
fn test_transpose_up_then_down_restores_sharp_spelling() {
    let sharp = transpose_chordpro(SONG, 0);
    for k in [-7, -1, 1, 5, 11] {
        assert_eq!(transpose_chordpro(&transpose_chordpro(SONG, k), -k), sharp);
    }
}

#[test]
fn test_document_octave_down() {
    assert_eq!(transpose_chordpro("[C]Hello [G]world", -12), "[C]Hello [G]world");
}

#[test]
fn test_document_transpose_touches_only_brackets() {
    let transposed = transpose_chordpro(SONG, 3);
    assert!(transposed.contains("[Cm]There is a [D#]house in [F]New Orle[G#]ans"));
    assert!(transposed.contains("{title: House of the Rising Sun}"));
    assert!(transposed.contains("{key: Am}"));

    let strip_chords = |s: &str| {
        let mut out = String::new();
        let mut depth = false;
        for c in s.chars() {
            match c {
                '[' => depth = true,
                ']' => depth = false,
                _ if !depth => out.push(c),
                _ => {}
            }
        }
        out
    };
    assert_eq!(strip_chords(&transposed), strip_chords(SONG));
}

#[test]
fn test_flat_input_respelled_at_zero() {
    assert_eq!(transpose_chordpro("[Bb]la [Eb/G]la", 0), "[A#]la [D#/G]la");
    assert_eq!(transpose_chordpro("[Bb]la [Eb/G]la", 12), "[A#]la [D#/G]la");
}

#[test]
fn test_strip_directives_example() {
    assert_eq!(
        strip_chordpro_directives("{title: Test}\nLine1\n\nLine2"),
        "Line1\n\nLine2"
    );
}

#[test]
fn test_strip_song() {
    let stripped = strip_chordpro_directives(SONG);
    assert!(!stripped.contains("{title"));
    assert!(!stripped.contains("# capo"));
    assert!(!stripped.contains("% second"));
    assert!(stripped.starts_with("\n[Am]There is a"));
    assert!(stripped.contains("[C]Rising [E]Sun\n\n[Am]And it's"));
}

#[test]
fn test_extract_meta_example() {
    let meta = extract_meta("{key: C}{title: My Song}");
    let pairs: Vec<(&str, &str)> = meta.iter().collect();
    assert_eq!(pairs, vec![("key", "C"), ("title", "My Song")]);
}

#[test]
fn test_extract_meta_song() {
    let meta = extract_meta(SONG);
    assert_eq!(meta.title(), Some("House of the Rising Sun"));
    assert_eq!(meta.artist(), Some("Traditional"));
    assert_eq!(meta.key(), Some("Am"));
    assert_eq!(meta.len(), 3);
}

#[test]
fn test_duplicate_directive_last_wins() {
    let meta = extract_meta("{key: C}\n{title: Draft}\n{key: D}");
    assert_eq!(meta.key(), Some("D"));
    let keys: Vec<&str> = meta.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["key", "title"]);
}

#[test]
fn test_display_lines_idempotent_on_song() {
    let texts = [SONG, "", "\r\n", "{a: b}", "#x\n\n %y\n z ", "[C]la\r\n{t: x}\r\n\r\n"];
    for text in texts {
        let first = to_display_lines(text);
        assert_eq!(to_display_lines(&first.join("\n")), first);
    }
}

#[test]
fn test_crlf_and_lf_agree() {
    let crlf = SONG.replace('\n', "\r\n");
    assert_eq!(split_lines(&crlf), split_lines(SONG));
    assert_eq!(to_display_lines(&crlf), to_display_lines(SONG));
}

#[test]
fn test_empty_input_everywhere() {
    assert_eq!(transpose_chord_token("", 3), "");
    assert_eq!(transpose_chordpro("", 3), "");
    assert_eq!(strip_chordpro_directives(""), "");
    assert!(extract_meta("").is_empty());
    assert!(split_lines("").is_empty());
    assert!(to_display_lines("").is_empty());
}

#[test]
fn test_prepare_song_end_to_end() {
    let song = prepare_song(SONG, -2);
    assert_eq!(song.key.as_deref(), Some("Gm"));
    assert_eq!(song.steps, 10);
    assert_eq!(song.lines[1].text, "[Gm]There is a [A#]house in [C]New Orle[D#]ans");
    assert_eq!(song.lines[1].segments[0].chord.as_deref(), Some("Gm"));
    assert_eq!(song.lines[1].segments[0].lyric, "There is a ");

    let json = serde_json::to_value(&song).unwrap();
    assert_eq!(json["metadata"]["key"], "Am");
    assert_eq!(json["lines"][0]["kind"], "blank");
}
