//! Text engine for ChordPro-style chord sheets: lyrics with inline `[chord]`
//! annotations and `{key: value}` directives.
//!
//! Every operation is a pure function of its input and never fails. Input it
//! does not understand is echoed verbatim or, for lines, filtered out.

pub mod api;
pub mod chord;
pub mod directive;
pub mod error;
pub mod lines;
pub mod pitch;
pub mod transpose;

pub use api::{prepare_song, Song, SongLine};
pub use chord::{parse_token, ChordToken, ParsedToken};
pub use directive::{extract_meta, Directive, Metadata};
pub use error::{parse_steps, ChordsheetError};
pub use lines::{
    classify_line, document_lines, line_segments, split_lines, strip_chordpro_directives,
    to_display_lines, DocumentLine, LineKind, LineSegment,
};
pub use pitch::{normalize, steps_between, PitchClass};
pub use transpose::{normalize_steps, transpose_chord_token, transpose_chordpro, transposed_key};
