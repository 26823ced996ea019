//! # Error Types
//!
//! The text engine itself never fails: every operation degrades to passthrough
//! on input it does not understand. These errors belong to the surfaces around
//! it, the command-line tool and the bindings, which read files, parse
//! arguments, and serialize results.
//!
//! ## Usage
//! ```rust
//! use chordsheet::ChordsheetError;
//!
//! fn parse_steps(arg: &str) -> Result<i32, ChordsheetError> {
//!     arg.parse()
//!         .map_err(|_| ChordsheetError::InvalidSteps(arg.to_string()))
//! }
//!
//! match parse_steps("up") {
//!     Ok(steps) => println!("{}", steps),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordsheetError {
    /// A file could not be read or written.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordsheetError;
    /// let err = ChordsheetError::Io {
    ///     path: "song.cho".to_string(),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    /// };
    /// assert_eq!(err.to_string(), "I/O error on 'song.cho': not found");
    /// ```
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The command line did not match any supported form.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordsheetError;
    /// let err = ChordsheetError::Usage("unknown command 'play'".to_string());
    /// assert_eq!(err.to_string(), "Usage error: unknown command 'play'");
    /// ```
    #[error("Usage error: {0}")]
    Usage(String),

    /// A transposition amount that is not a signed integer.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordsheetError;
    /// let err = ChordsheetError::InvalidSteps("+one".to_string());
    /// assert_eq!(err.to_string(), "Invalid semitone count: +one");
    /// ```
    #[error("Invalid semitone count: {0}")]
    InvalidSteps(String),

    /// Metadata or song data could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for ChordsheetError {
    fn from(e: serde_json::Error) -> Self {
        ChordsheetError::Serialize(e.to_string())
    }
}

impl From<serde_yaml::Error> for ChordsheetError {
    fn from(e: serde_yaml::Error) -> Self {
        ChordsheetError::Serialize(e.to_string())
    }
}

/// Parse a signed semitone count such as `3`, `-2`, or `+5`.
///
/// ```
/// use chordsheet::parse_steps;
///
/// assert_eq!(parse_steps("+5").unwrap(), 5);
/// assert_eq!(parse_steps("-2").unwrap(), -2);
/// assert!(parse_steps("up").is_err());
/// ```
pub fn parse_steps(arg: &str) -> Result<i32, ChordsheetError> {
    arg.trim()
        .parse()
        .map_err(|_| ChordsheetError::InvalidSteps(arg.to_string()))
}
