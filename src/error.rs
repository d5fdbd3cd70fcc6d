//! # Error Types
//!
//! This module defines the error type shared by the parsers in this crate.
//!
//! The theory and fretboard engines are total over their typed inputs and never
//! fail. Errors only come from turning text into values: note/key/chord tokens
//! and preset libraries.
//!
//! ## Error Types
//! - `InvalidNote` - a note token that is not a letter A-G with optional `#`/`b`
//! - `InvalidKey` - a key token that is not `<note>-major` or `<note>-minor`
//! - `InvalidChord` - a chord token with an unknown quality or extension suffix
//! - `Preset` - a preset library that deserialized but failed validation
//! - `Yaml` - a preset library that is not valid YAML for the preset schema
//!
//! ## Usage
//! ```rust
//! use chordwise::{Chord, TheoryError};
//!
//! match "Hm7".parse::<Chord>() {
//!     Ok(chord) => println!("parsed {}", chord),
//!     Err(TheoryError::InvalidNote(token)) => eprintln!("bad root in {}", token),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TheoryError {
    /// Note token could not be parsed.
    ///
    /// # Example
    /// ```
    /// # use chordwise::TheoryError;
    /// let err = TheoryError::InvalidNote("H#".to_string());
    /// assert_eq!(err.to_string(), "Invalid note: H#");
    /// ```
    #[error("Invalid note: {0}")]
    InvalidNote(String),

    /// Key token could not be parsed.
    ///
    /// # Example
    /// ```
    /// # use chordwise::TheoryError;
    /// let err = TheoryError::InvalidKey("C-dorian".to_string());
    /// assert_eq!(err.to_string(), "Invalid key: C-dorian");
    /// ```
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Chord token could not be parsed.
    #[error("Invalid chord: {0}")]
    InvalidChord(String),

    /// Preset library failed validation (bad degree, duplicate id, ...).
    ///
    /// # Example
    /// ```
    /// # use chordwise::TheoryError;
    /// let err = TheoryError::Preset {
    ///     id: "fifties".to_string(),
    ///     message: "degree 9 is outside 1-7".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid preset 'fifties': degree 9 is outside 1-7");
    /// ```
    #[error("Invalid preset '{id}': {message}")]
    Preset { id: String, message: String },

    /// Preset library is not valid YAML.
    #[error("Invalid preset library: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
