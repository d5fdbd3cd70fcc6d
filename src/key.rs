//! Keys and their diatonic scales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::note::{Note, NoteName};

/// Mode for a key. Minor is natural minor only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

impl Mode {
    /// Semitone offsets of degrees 1-7 above the tonic
    pub fn steps(self) -> [u8; 7] {
        match self {
            Mode::Major => [0, 2, 4, 5, 7, 9, 11],
            Mode::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }

    /// Parse "major" or "minor" (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" => Some(Mode::Major),
            "minor" => Some(Mode::Minor),
            _ => None,
        }
    }
}

/// Tonics whose keys are spelled with flats
const FLAT_TONICS: [Note; 7] = [
    Note::natural(NoteName::F),
    Note::flat(NoteName::B),
    Note::flat(NoteName::E),
    Note::flat(NoteName::A),
    Note::flat(NoteName::D),
    Note::flat(NoteName::G),
    Note::flat(NoteName::C),
];

/// A tonic and a mode, e.g. Bb major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Key {
    pub tonic: Note,
    pub mode: Mode,
}

impl Key {
    pub const fn new(tonic: Note, mode: Mode) -> Self {
        Self { tonic, mode }
    }

    pub const fn major(tonic: Note) -> Self {
        Self::new(tonic, Mode::Major)
    }

    pub const fn minor(tonic: Note) -> Self {
        Self::new(tonic, Mode::Minor)
    }

    /// Pitch classes of scale degrees 1-7 (index 0 is the tonic)
    ///
    /// ```
    /// use chordwise::{Key, Note, NoteName};
    ///
    /// let a_minor = Key::minor(Note::natural(NoteName::A));
    /// assert_eq!(a_minor.scale_pitch_classes(), [9, 11, 0, 2, 4, 5, 7]);
    /// ```
    pub fn scale_pitch_classes(&self) -> [u8; 7] {
        let tonic = self.tonic.pitch_class();
        self.mode.steps().map(|step| (tonic + step) % 12)
    }

    /// Whether chromatic notes in this key are spelled with flats.
    ///
    /// Tonics F, Bb, Eb, Ab, Db, Gb and Cb use flats, whatever the mode.
    /// Every other tonic uses sharps.
    pub fn prefers_flats(&self) -> bool {
        FLAT_TONICS.contains(&self.tonic)
    }

    /// Spell a pitch class the way this key would
    pub fn spell(&self, pitch_class: i32) -> Note {
        Note::from_pitch_class(pitch_class, self.prefers_flats())
    }
}

/// Scale pitch classes of a key (free-function form)
pub fn key_scale_pitch_classes(key: &Key) -> [u8; 7] {
    key.scale_pitch_classes()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.tonic, self.mode.as_str())
    }
}

impl FromStr for Key {
    type Err = TheoryError;

    /// Parse the compact `"<note>-<mode>"` form, e.g. `"C-major"` or `"F#-minor"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || TheoryError::InvalidKey(trimmed.to_string());

        let (tonic, mode) = trimmed.split_once('-').ok_or_else(invalid)?;
        let tonic: Note = tonic.parse().map_err(|_| invalid())?;
        let mode = Mode::from_str(mode).ok_or_else(invalid)?;
        Ok(Key { tonic, mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Accidental;

    fn all_keys() -> Vec<Key> {
        let mut keys = Vec::new();
        for name in NoteName::ALL {
            for accidental in [None, Some(Accidental::Sharp), Some(Accidental::Flat)] {
                for mode in [Mode::Major, Mode::Minor] {
                    keys.push(Key::new(Note { name, accidental }, mode));
                }
            }
        }
        keys
    }

    #[test]
    fn test_c_major_scale() {
        let key = Key::major(Note::natural(NoteName::C));
        assert_eq!(key.scale_pitch_classes(), [0, 2, 4, 5, 7, 9, 11]);
    }

    #[test]
    fn test_scale_wraps_octave() {
        let key = Key::major(Note::natural(NoteName::B));
        assert_eq!(key.scale_pitch_classes(), [11, 1, 3, 4, 6, 8, 10]);
    }

    #[test]
    fn test_scale_has_seven_distinct_pitch_classes() {
        for key in all_keys() {
            let scale = key.scale_pitch_classes();
            let mut sorted = scale.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 7, "{} produced {:?}", key, scale);
            assert!(scale.iter().all(|pc| *pc < 12));
        }
    }

    #[test]
    fn test_flat_preference() {
        for tonic in ["F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb"] {
            let key = Key::major(tonic.parse().unwrap());
            assert!(key.prefers_flats(), "{} major should prefer flats", tonic);
        }
        for tonic in ["C", "G", "D", "A", "E", "B", "F#", "C#"] {
            let key = Key::major(tonic.parse().unwrap());
            assert!(!key.prefers_flats(), "{} major should prefer sharps", tonic);
        }
        // Mode plays no part: only the tonic spelling counts
        assert!(Key::minor(Note::natural(NoteName::F)).prefers_flats());
        assert!(Key::minor(Note::flat(NoteName::B)).prefers_flats());
        for tonic in ["D", "G", "C", "A", "E"] {
            let key = Key::minor(tonic.parse().unwrap());
            assert!(!key.prefers_flats(), "{} minor should prefer sharps", tonic);
        }
        // A flat-spelled tonic outside the list still uses sharps
        assert!(!Key::major(Note::flat(NoteName::F)).prefers_flats());
    }

    #[test]
    fn test_key_from_str() {
        let key: Key = "Bb-minor".parse().unwrap();
        assert_eq!(key, Key::minor(Note::flat(NoteName::B)));
        assert_eq!(key.to_string(), "Bb-minor");

        assert!("C".parse::<Key>().is_err());
        assert!("C-dorian".parse::<Key>().is_err());
        assert!("X-major".parse::<Key>().is_err());
    }
}
