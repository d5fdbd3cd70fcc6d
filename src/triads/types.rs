//! Triad trainer type definitions

use std::fmt;

use serde::Serialize;

use crate::note::{Note, NoteName};

/// The twelve keys offered by the triad trainer, one spelling per pitch class
pub const TRIAD_KEYS: [Note; 12] = [
    Note::natural(NoteName::C),
    Note::flat(NoteName::D),
    Note::natural(NoteName::D),
    Note::flat(NoteName::E),
    Note::natural(NoteName::E),
    Note::natural(NoteName::F),
    Note::sharp(NoteName::F),
    Note::natural(NoteName::G),
    Note::flat(NoteName::A),
    Note::natural(NoteName::A),
    Note::flat(NoteName::B),
    Note::natural(NoteName::B),
];

/// Which triad member sits on the lowest string of the set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Root on the bottom: 1-3-5
    Root,
    /// Third on the bottom: 3-5-1
    First,
    /// Fifth on the bottom: 5-1-3
    Second,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Root, Position::First, Position::Second];

    /// Scale-degree role of the low, middle and high string
    pub fn roles(self) -> [u8; 3] {
        match self {
            Position::Root => [1, 3, 5],
            Position::First => [3, 5, 1],
            Position::Second => [5, 1, 3],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Root => "root",
            Position::First => "first",
            Position::Second => "second",
        }
    }

    /// Parse "root", "first"/"1st" or "second"/"2nd"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "root" => Some(Position::Root),
            "first" | "1st" => Some(Position::First),
            "second" | "2nd" => Some(Position::Second),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three adjacent strings of a guitar in standard tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringSet {
    /// G, B, high e
    High,
    /// D, G, B
    Low,
}

impl StringSet {
    pub const ALL: [StringSet; 2] = [StringSet::High, StringSet::Low];

    /// Open-string pitch classes, lowest string first
    pub fn open_pitch_classes(self) -> [u8; 3] {
        match self {
            StringSet::High => [7, 11, 4],
            StringSet::Low => [2, 7, 11],
        }
    }

    pub fn string_names(self) -> [&'static str; 3] {
        match self {
            StringSet::High => ["G", "B", "e"],
            StringSet::Low => ["D", "G", "B"],
        }
    }

    /// Guitar string numbers (1 = high e) for string indices 0-2
    pub fn guitar_strings(self) -> [u8; 3] {
        match self {
            StringSet::High => [3, 2, 1],
            StringSet::Low => [4, 3, 2],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StringSet::High => "high",
            StringSet::Low => "low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" | "gbe" => Some(StringSet::High),
            "low" | "dgb" => Some(StringSet::Low),
            _ => None,
        }
    }
}

impl fmt::Display for StringSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fretted note of a triad voicing
///
/// # Fields
/// - `string_index`: 0 = lowest string of the set, 2 = highest
/// - `fret`: fret number, 0 = open
/// - `degree`: role in the triad, 1 (root), 3 (third) or 5 (fifth)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriadPosition {
    pub string_index: u8,
    pub fret: u8,
    pub degree: u8,
}

/// Inclusive fret range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FretWindow {
    pub min: u8,
    pub max: u8,
}

impl FretWindow {
    pub fn contains(&self, fret: u8) -> bool {
        self.min <= fret && fret <= self.max
    }

    /// Number of frets covered; an inverted window covers one
    pub fn span(&self) -> u8 {
        self.max.saturating_sub(self.min) + 1
    }
}

impl fmt::Display for FretWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
