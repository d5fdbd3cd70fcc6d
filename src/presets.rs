//! # Preset Progressions
//!
//! Named progressions (50s, Andalusian, 12-bar blues, ...) stored as scale
//! degrees so they can be realised in any key.
//!
//! The built-in library is the YAML document `presets.yaml`, compiled into the
//! crate. Callers can load their own library with [`parse_presets`]; the same
//! schema and validation apply.
//!
//! ## Schema
//! ```yaml
//! - id: fifties
//!   name: 50s Progression
//!   mode: major
//!   steps:
//!     - { degree: 1, quality: major }
//!     - { degree: 6, quality: minor, extension: "m7" }
//!     - { degree: 7, quality: major, accidental: "b" }
//! ```
//!
//! ## Example
//! ```rust
//! use chordwise::presets::{builtin_presets, find_preset};
//! use chordwise::{chords_to_param, Note, NoteName};
//!
//! let presets = builtin_presets()?;
//! let fifties = find_preset(&presets, "fifties").unwrap();
//! let chords = fifties.build(Note::natural(NoteName::G));
//! assert_eq!(chords_to_param(&chords), "G,Em,C,D");
//! # Ok::<(), chordwise::TheoryError>(())
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::chord::{Chord, ChordExtension, ChordQuality};
use crate::error::TheoryError;
use crate::key::{Key, Mode};
use crate::note::{Accidental, Note};
use crate::roman::chord_from_degree;

const BUILTIN_PRESETS: &str = include_str!("presets.yaml");

/// One chord of a preset, relative to the key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetStep {
    pub degree: u8,
    pub quality: ChordQuality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accidental: Option<Accidental>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<ChordExtension>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mode: Mode,
    pub steps: Vec<PresetStep>,
}

impl Preset {
    /// Key the preset is realised in for a given tonic
    pub fn key_for(&self, tonic: Note) -> Key {
        Key::new(tonic, self.mode)
    }

    /// Realise the progression on `tonic`
    pub fn build(&self, tonic: Note) -> Vec<Chord> {
        let key = self.key_for(tonic);
        self.steps
            .iter()
            .map(|step| {
                let chord = chord_from_degree(&key, step.degree, step.quality, step.accidental);
                match step.extension {
                    Some(ext) => chord.with_extension(ext),
                    None => chord,
                }
            })
            .collect()
    }

    fn validate(&self) -> Result<(), TheoryError> {
        let invalid = |message: String| TheoryError::Preset {
            id: self.id.clone(),
            message,
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id must not be empty".to_string()));
        }
        if self.steps.is_empty() {
            return Err(invalid("a preset needs at least one step".to_string()));
        }
        for (i, step) in self.steps.iter().enumerate() {
            if !(1..=7).contains(&step.degree) {
                return Err(invalid(format!(
                    "step {}: degree {} is outside 1-7",
                    i + 1,
                    step.degree
                )));
            }
        }
        Ok(())
    }
}

/// Parse and validate a preset library
pub fn parse_presets(yaml: &str) -> Result<Vec<Preset>, TheoryError> {
    let presets: Vec<Preset> = serde_yaml::from_str(yaml)?;

    let mut ids = HashSet::new();
    for preset in &presets {
        if let Err(e) = preset.validate() {
            log::warn!("rejecting preset library: {}", e);
            return Err(e);
        }
        if !ids.insert(preset.id.as_str()) {
            log::warn!("rejecting preset library: duplicate id '{}'", preset.id);
            return Err(TheoryError::Preset {
                id: preset.id.clone(),
                message: "duplicate id".to_string(),
            });
        }
    }
    Ok(presets)
}

/// The presets shipped with the crate
pub fn builtin_presets() -> Result<Vec<Preset>, TheoryError> {
    parse_presets(BUILTIN_PRESETS)
}

pub fn find_preset<'a>(presets: &'a [Preset], id: &str) -> Option<&'a Preset> {
    presets.iter().find(|p| p.id == id)
}
