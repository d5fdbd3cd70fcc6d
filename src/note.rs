//! Spelled note names and pitch classes.
//!
//! A [`Note`] is a letter with an optional sharp or flat. Arithmetic is always
//! done on pitch classes (0-11, C = 0), so `F#` and `Gb` behave identically
//! everywhere except when a note is displayed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Note names A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NoteName {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    pub const ALL: [NoteName; 7] = [
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
        NoteName::A,
        NoteName::B,
    ];

    /// Pitch class of the natural note
    pub fn pitch_class(self) -> u8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
            NoteName::A => 'A',
            NoteName::B => 'B',
        }
    }
}

/// Sharp or flat. A natural note carries no accidental at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    #[serde(rename = "#")]
    Sharp,
    #[serde(rename = "b")]
    Flat,
}

impl Accidental {
    /// Semitone offset applied to the natural pitch
    pub fn offset(self) -> i8 {
        match self {
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _ => None,
        }
    }

    /// ASCII symbol, `#` or `b`
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// A spelled pitch name such as `C`, `F#` or `Bb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Note {
    pub name: NoteName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accidental: Option<Accidental>,
}

impl Note {
    pub const fn natural(name: NoteName) -> Self {
        Self { name, accidental: None }
    }

    pub const fn sharp(name: NoteName) -> Self {
        Self { name, accidental: Some(Accidental::Sharp) }
    }

    pub const fn flat(name: NoteName) -> Self {
        Self { name, accidental: Some(Accidental::Flat) }
    }

    /// Pitch class 0-11 with C = 0
    ///
    /// ```
    /// use chordwise::{Note, NoteName};
    ///
    /// assert_eq!(Note::flat(NoteName::C).pitch_class(), 11);
    /// assert_eq!(Note::sharp(NoteName::F).pitch_class(), Note::flat(NoteName::G).pitch_class());
    /// ```
    pub fn pitch_class(&self) -> u8 {
        let acc = self.accidental.map(Accidental::offset).unwrap_or(0);
        (self.name.pitch_class() as i8 + acc).rem_euclid(12) as u8
    }

    /// Spell a pitch class, using flats or sharps for the black keys.
    /// Values outside 0-11 are reduced mod 12.
    pub fn from_pitch_class(pitch_class: i32, prefer_flats: bool) -> Self {
        // 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B
        match pitch_class.rem_euclid(12) {
            0 => Note::natural(NoteName::C),
            1 => if prefer_flats { Note::flat(NoteName::D) } else { Note::sharp(NoteName::C) },
            2 => Note::natural(NoteName::D),
            3 => if prefer_flats { Note::flat(NoteName::E) } else { Note::sharp(NoteName::D) },
            4 => Note::natural(NoteName::E),
            5 => Note::natural(NoteName::F),
            6 => if prefer_flats { Note::flat(NoteName::G) } else { Note::sharp(NoteName::F) },
            7 => Note::natural(NoteName::G),
            8 => if prefer_flats { Note::flat(NoteName::A) } else { Note::sharp(NoteName::G) },
            9 => Note::natural(NoteName::A),
            10 => if prefer_flats { Note::flat(NoteName::B) } else { Note::sharp(NoteName::A) },
            _ => Note::natural(NoteName::B),
        }
    }

    /// Parse a note from the front of `s`, returning the note and the rest of the input.
    pub(crate) fn parse_prefix(s: &str) -> Option<(Self, &str)> {
        let mut chars = s.chars();
        let name = NoteName::from_char(chars.next()?)?;
        let rest = chars.as_str();
        match rest.chars().next().and_then(Accidental::from_char) {
            Some(accidental) => Some((Note { name, accidental: Some(accidental) }, &rest[1..])),
            None => Some((Note::natural(name), rest)),
        }
    }
}

/// Pitch class of a note (free-function form used by the engines)
pub fn note_to_pitch_class(note: &Note) -> u8 {
    note.pitch_class()
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name.as_char())?;
        if let Some(acc) = self.accidental {
            f.write_str(acc.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match Note::parse_prefix(trimmed) {
            Some((note, "")) => Ok(note),
            _ => Err(TheoryError::InvalidNote(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_classes() {
        assert_eq!(Note::natural(NoteName::C).pitch_class(), 0);
        assert_eq!(Note::natural(NoteName::B).pitch_class(), 11);
        assert_eq!(Note::sharp(NoteName::B).pitch_class(), 0); // B# wraps to C
        assert_eq!(Note::flat(NoteName::F).pitch_class(), 4); // Fb = E
        assert_eq!(Note::flat(NoteName::B).pitch_class(), 10);
    }

    #[test]
    fn test_enharmonic_spellings_share_pitch_class() {
        let pairs = [("C#", "Db"), ("D#", "Eb"), ("F#", "Gb"), ("G#", "Ab"), ("A#", "Bb")];
        for (sharp, flat) in pairs {
            let a: Note = sharp.parse().unwrap();
            let b: Note = flat.parse().unwrap();
            assert_eq!(a.pitch_class(), b.pitch_class(), "{} vs {}", sharp, flat);
        }
    }

    #[test]
    fn test_spelling_preference() {
        assert_eq!(Note::from_pitch_class(10, true).to_string(), "Bb");
        assert_eq!(Note::from_pitch_class(10, false).to_string(), "A#");
        assert_eq!(Note::from_pitch_class(4, true).to_string(), "E");
        assert_eq!(Note::from_pitch_class(-1, false).to_string(), "B");
        assert_eq!(Note::from_pitch_class(13, true).to_string(), "Db");
    }

    #[test]
    fn test_spelling_preserves_pitch_class() {
        for pc in 0..12 {
            assert_eq!(Note::from_pitch_class(pc, true).pitch_class() as i32, pc);
            assert_eq!(Note::from_pitch_class(pc, false).pitch_class() as i32, pc);
        }
    }

    #[test]
    fn test_parse_note() {
        assert_eq!("F#".parse::<Note>().unwrap(), Note::sharp(NoteName::F));
        assert_eq!(" Bb ".parse::<Note>().unwrap(), Note::flat(NoteName::B));
        assert!("H".parse::<Note>().is_err());
        assert!("".parse::<Note>().is_err());
        assert!("C##".parse::<Note>().is_err());
        assert!("c".parse::<Note>().is_err());
    }

    #[test]
    fn test_parse_prefix_leaves_suffix() {
        let (note, rest) = Note::parse_prefix("Bbdim7").unwrap();
        assert_eq!(note, Note::flat(NoteName::B));
        assert_eq!(rest, "dim7");

        let (note, rest) = Note::parse_prefix("Dm/G").unwrap();
        assert_eq!(note, Note::natural(NoteName::D));
        assert_eq!(rest, "m/G");
    }
}
