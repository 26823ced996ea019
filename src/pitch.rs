//! # Pitch Classes
//!
//! The 12-tone naming tables and note-name normalization used by every other
//! module.
//!
//! ## Spelling
//! Two parallel tables are kept, indexed by pitch class (0 = C ... 11 = B):
//! - `SHARP_NAMES` - canonical spelling, used for all output
//! - `FLAT_NAMES` - alternate spelling, accepted on input only
//!
//! A flat spelling always folds to the sharp entry at the same index, so `Db`
//! and `C#` both normalize to pitch class 1 and both print as `C#`.
//!
//! Spellings outside the two tables (`Cb`, `E#`, `C##`, lowercase roots) are
//! not recognized. Callers treat the enclosing chord token as opaque text.

/// Canonical sharp spelling, indexed by pitch class
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Alternate flat spelling, indexed by pitch class
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// One of the 12 equivalence classes of notes under octave and enharmonic identity.
///
/// Always holds a value in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Pitch class for an arbitrary semitone index (floored modulo 12).
    ///
    /// ```
    /// use chordsheet::pitch::PitchClass;
    ///
    /// assert_eq!(PitchClass::from_index(14).index(), 2);
    /// assert_eq!(PitchClass::from_index(-1).index(), 11);
    /// ```
    pub fn from_index(index: i32) -> Self {
        Self(index.rem_euclid(12) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Canonical (sharp) name
    pub fn name(self) -> &'static str {
        SHARP_NAMES[self.0 as usize]
    }

    /// Shift by a signed number of semitones, wrapping into `0..12`
    pub fn transpose(self, steps: i32) -> Self {
        // i64 so that i32::MIN / i32::MAX steps cannot overflow
        let shifted = (self.0 as i64 + steps as i64).rem_euclid(12);
        Self(shifted as u8)
    }
}

impl std::fmt::Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up a note name (`C`, `F#`, `Bb`, ...) in the spelling tables.
///
/// The flat table is checked first; its index is returned as the pitch class,
/// which is the same as returning the sharp entry at that index. Returns `None`
/// for anything neither table contains.
///
/// ```
/// use chordsheet::pitch::normalize;
///
/// assert_eq!(normalize("Db").map(|p| p.name()), Some("C#"));
/// assert_eq!(normalize("F#").map(|p| p.name()), Some("F#"));
/// assert_eq!(normalize("C##"), None);
/// ```
pub fn normalize(note: &str) -> Option<PitchClass> {
    FLAT_NAMES
        .iter()
        .position(|&name| name == note)
        .or_else(|| SHARP_NAMES.iter().position(|&name| name == note))
        .map(|index| PitchClass(index as u8))
}

/// Smallest upward distance in semitones from one note name to another.
///
/// Returns a value in `0..12`, or `None` if either name is unrecognized.
pub fn steps_between(from: &str, to: &str) -> Option<i32> {
    let from = normalize(from)?;
    let to = normalize(to)?;
    Some((to.index() as i32 - from.index() as i32).rem_euclid(12))
}
