//! Chord values: a root, a triad quality, an optional seventh and an optional
//! slash bass.
//!
//! The slash bass is display-only. Roman-numeral analysis always works from
//! the root.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::note::Note;

/// Triad quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    #[default]
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 6] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::Sus2,
        ChordQuality::Sus4,
    ];

    /// Compact code used in chord tokens (`""`, `m`, `dim`, `aug`, `sus2`, `sus4`)
    pub fn code(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Sus2 => "sus2",
            ChordQuality::Sus4 => "sus4",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ChordQuality::ALL.into_iter().find(|q| q.code() == code)
    }

    /// Semitones above the root for the triad tones
    pub fn intervals(self) -> [u8; 3] {
        match self {
            ChordQuality::Major => [0, 4, 7],
            ChordQuality::Minor => [0, 3, 7],
            ChordQuality::Diminished => [0, 3, 6],
            ChordQuality::Augmented => [0, 4, 8],
            ChordQuality::Sus2 => [0, 2, 7],
            ChordQuality::Sus4 => [0, 5, 7],
        }
    }
}

/// Seventh-chord extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordExtension {
    #[serde(rename = "7")]
    Seventh,
    #[serde(rename = "maj7")]
    Maj7,
    #[serde(rename = "m7")]
    Min7,
    #[serde(rename = "dim7")]
    Dim7,
    #[serde(rename = "m7b5")]
    HalfDim7,
}

impl ChordExtension {
    pub const ALL: [ChordExtension; 5] = [
        ChordExtension::Seventh,
        ChordExtension::Maj7,
        ChordExtension::Min7,
        ChordExtension::Dim7,
        ChordExtension::HalfDim7,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ChordExtension::Seventh => "7",
            ChordExtension::Maj7 => "maj7",
            ChordExtension::Min7 => "m7",
            ChordExtension::Dim7 => "dim7",
            ChordExtension::HalfDim7 => "m7b5",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ChordExtension::ALL.into_iter().find(|e| e.code() == code)
    }

    /// The triad quality this extension is normally written on top of.
    /// `Cm7` means minor + m7, `Cdim7` means diminished + dim7, and so on.
    pub fn implied_quality(self) -> ChordQuality {
        match self {
            ChordExtension::Seventh | ChordExtension::Maj7 => ChordQuality::Major,
            ChordExtension::Min7 => ChordQuality::Minor,
            ChordExtension::Dim7 | ChordExtension::HalfDim7 => ChordQuality::Diminished,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    pub root: Note,
    pub quality: ChordQuality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<ChordExtension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slash_bass: Option<Note>,
}

impl Chord {
    pub const fn new(root: Note, quality: ChordQuality) -> Self {
        Self {
            root,
            quality,
            extension: None,
            slash_bass: None,
        }
    }

    pub fn with_extension(mut self, extension: ChordExtension) -> Self {
        self.extension = Some(extension);
        self
    }

    pub fn with_bass(mut self, bass: Note) -> Self {
        self.slash_bass = Some(bass);
        self
    }

    /// Half-diminished chords are spelled with the `m7b5` extension
    pub fn is_half_diminished(&self) -> bool {
        self.extension == Some(ChordExtension::HalfDim7)
    }

    /// Chord suffix without root or bass, e.g. `m7`, `dim`, `m(maj7)`.
    ///
    /// A quality and extension that belong together collapse to the usual
    /// symbol; any other pairing spells the quality and puts the extension
    /// in parentheses, so every combination has its own suffix.
    pub fn suffix(&self) -> String {
        match self.extension {
            None => self.quality.code().to_string(),
            Some(ext) if ext.implied_quality() == self.quality => ext.code().to_string(),
            Some(ext) => format!("{}({})", self.quality.code(), ext.code()),
        }
    }
}

/// Split a suffix produced by [`Chord::suffix`] back into quality and extension.
fn parse_suffix(suffix: &str) -> Option<(ChordQuality, Option<ChordExtension>)> {
    if let Some(ext) = ChordExtension::from_code(suffix) {
        return Some((ext.implied_quality(), Some(ext)));
    }
    match suffix.split_once('(') {
        Some((quality, rest)) => {
            let ext = rest.strip_suffix(')').and_then(ChordExtension::from_code)?;
            Some((ChordQuality::from_code(quality)?, Some(ext)))
        }
        None => Some((ChordQuality::from_code(suffix)?, None)),
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix())?;
        if let Some(bass) = self.slash_bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

impl FromStr for Chord {
    type Err = TheoryError;

    /// Parse a compact chord token such as `"Bbdim7"`, `"Dm/G"` or `"Cm(maj7)"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (body, bass) = match trimmed.split_once('/') {
            Some((body, bass)) => {
                let bass: Note = bass
                    .parse()
                    .map_err(|_| TheoryError::InvalidChord(trimmed.to_string()))?;
                (body, Some(bass))
            }
            None => (trimmed, None),
        };

        let (root, suffix) =
            Note::parse_prefix(body).ok_or_else(|| TheoryError::InvalidNote(trimmed.to_string()))?;
        let (quality, extension) =
            parse_suffix(suffix).ok_or_else(|| TheoryError::InvalidChord(trimmed.to_string()))?;

        Ok(Chord {
            root,
            quality,
            extension,
            slash_bass: bass,
        })
    }
}
