//! # Roman Numeral Analysis
//!
//! Expresses chords as scale degrees of a key and renders them as Roman
//! numerals (`I`, `ii`, `bVII`, `#iv°`, `iiø7`, ...).
//!
//! ## Degree Resolution
//! A chord root is matched against the key's seven scale pitch classes:
//! 1. An exact match is a plain degree.
//! 2. Otherwise the degrees one semitone away are candidates: a root one
//!    semitone above a scale tone is a sharpened degree, one below is flattened.
//! 3. When both a sharp and a flat reading exist the sharp one wins, except
//!    that `b7` beats `#6`.
//! 4. A scale with no neighbouring tone falls back to a proportional estimate.
//!    Seven-note diatonic scales never get here.
//!
//! Only ASCII `b` and `#` are emitted; swapping in `♭`/`♯` is left to the caller.
//!
//! ## Example
//! ```rust
//! use chordwise::{roman_from_chord, Chord, ChordQuality, Key, Note, NoteName};
//!
//! let key = Key::major(Note::natural(NoteName::C));
//! let chord = Chord::new(Note::flat(NoteName::B), ChordQuality::Major);
//! assert_eq!(roman_from_chord(&key, &chord), "bVII");
//! ```

use serde::Serialize;

use crate::chord::{Chord, ChordExtension, ChordQuality};
use crate::key::{Key, Mode};
use crate::note::Accidental;

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// A chord root expressed relative to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreeResult {
    /// Scale degree 1-7
    pub degree: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accidental: Option<Accidental>,
}

/// A diatonic triad paired with its numeral
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiatonicChord {
    pub chord: Chord,
    pub roman: String,
}

/// Triad quality on each degree of the mode
fn diatonic_qualities(mode: Mode) -> [ChordQuality; 7] {
    use ChordQuality::*;
    match mode {
        Mode::Major => [Major, Minor, Minor, Major, Major, Minor, Diminished],
        Mode::Minor => [Minor, Diminished, Major, Minor, Minor, Major, Major],
    }
}

/// Signed distance from `from` to `to`, wrapped into (-6, 6]
fn wrapped_delta(to: u8, from: u8) -> i8 {
    let diff = (to as i8 - from as i8).rem_euclid(12);
    if diff > 6 {
        diff - 12
    } else {
        diff
    }
}

/// Degree of `pitch_class` relative to the key
///
/// ```
/// use chordwise::{degree_from_pitch_class, Accidental, Key, Note, NoteName};
///
/// let key = Key::major(Note::natural(NoteName::C));
/// let result = degree_from_pitch_class(&key, 10);
/// assert_eq!(result.degree, 7);
/// assert_eq!(result.accidental, Some(Accidental::Flat));
/// ```
pub fn degree_from_pitch_class(key: &Key, pitch_class: u8) -> DegreeResult {
    degree_in_scale(&key.scale_pitch_classes(), pitch_class % 12)
}

fn degree_in_scale(scale: &[u8; 7], pitch_class: u8) -> DegreeResult {
    if let Some(idx) = scale.iter().position(|pc| *pc == pitch_class) {
        return DegreeResult { degree: idx as u8 + 1, accidental: None };
    }

    let mut sharp: Option<u8> = None;
    let mut flat: Option<u8> = None;
    for (idx, scale_pc) in scale.iter().enumerate() {
        let degree = idx as u8 + 1;
        match wrapped_delta(pitch_class, *scale_pc) {
            1 if sharp.is_none() => sharp = Some(degree),
            -1 if flat.is_none() => flat = Some(degree),
            _ => {}
        }
    }

    match (sharp, flat) {
        (Some(s), Some(f)) => {
            if s + 1 == f && f == 7 {
                DegreeResult { degree: f, accidental: Some(Accidental::Flat) }
            } else {
                DegreeResult { degree: s, accidental: Some(Accidental::Sharp) }
            }
        }
        (Some(s), None) => DegreeResult { degree: s, accidental: Some(Accidental::Sharp) },
        (None, Some(f)) => DegreeResult { degree: f, accidental: Some(Accidental::Flat) },
        (None, None) => estimate_degree(scale, pitch_class),
    }
}

/// Proportional fallback for scales with no tone a semitone away.
fn estimate_degree(scale: &[u8; 7], pitch_class: u8) -> DegreeResult {
    let offset = (pitch_class as i32 - scale[0] as i32).rem_euclid(12);
    let estimate = (offset as f64 * 7.0 / 12.0).round() as i32;
    let idx = estimate.rem_euclid(7) as usize;
    let accidental = match wrapped_delta(pitch_class, scale[idx]) {
        d if d > 0 => Some(Accidental::Sharp),
        d if d < 0 => Some(Accidental::Flat),
        _ => None,
    };
    log::trace!(
        "estimated degree {} for pitch class {} in {:?}",
        idx + 1,
        pitch_class,
        scale
    );
    DegreeResult { degree: idx as u8 + 1, accidental }
}

/// Render a chord as a Roman numeral in `key`. The slash bass is ignored.
pub fn roman_from_chord(key: &Key, chord: &Chord) -> String {
    let DegreeResult { degree, accidental } = degree_from_pitch_class(key, chord.root.pitch_class());
    let half_diminished = chord.is_half_diminished();

    let upper = !half_diminished
        && matches!(
            chord.quality,
            ChordQuality::Major | ChordQuality::Augmented | ChordQuality::Sus2 | ChordQuality::Sus4
        );

    let mut out = String::new();
    if let Some(acc) = accidental {
        out.push_str(acc.symbol());
    }

    let numeral = NUMERALS[(degree as usize - 1) % 7];
    if upper {
        out.push_str(numeral);
    } else {
        out.push_str(&numeral.to_lowercase());
    }

    let quality_suffix = if half_diminished {
        "ø"
    } else {
        match chord.quality {
            ChordQuality::Diminished => "°",
            ChordQuality::Augmented => "+",
            ChordQuality::Sus2 => "sus2",
            ChordQuality::Sus4 => "sus4",
            ChordQuality::Major | ChordQuality::Minor => "",
        }
    };
    out.push_str(quality_suffix);

    match chord.extension {
        Some(ChordExtension::Maj7) => out.push_str("maj7"),
        Some(_) => out.push('7'),
        None => {}
    }

    out
}

/// Whether the chord belongs to the key's diatonic triads.
///
/// Roots outside the scale, augmented and suspended chords are never diatonic.
/// A half-diminished seventh counts as a diminished triad.
pub fn is_chord_diatonic(key: &Key, chord: &Chord) -> bool {
    let DegreeResult { degree, accidental } = degree_from_pitch_class(key, chord.root.pitch_class());
    if accidental.is_some() {
        return false;
    }
    if matches!(
        chord.quality,
        ChordQuality::Augmented | ChordQuality::Sus2 | ChordQuality::Sus4
    ) {
        return false;
    }

    let quality = if chord.is_half_diminished() {
        ChordQuality::Diminished
    } else {
        chord.quality
    };
    diatonic_qualities(key.mode)[degree as usize - 1] == quality
}

/// The seven diatonic triads of a key with their numerals
///
/// ```
/// use chordwise::{get_diatonic_chords, Key, Note, NoteName};
///
/// let numerals: Vec<String> = get_diatonic_chords(&Key::major(Note::natural(NoteName::C)))
///     .into_iter()
///     .map(|c| c.roman)
///     .collect();
/// assert_eq!(numerals, ["I", "ii", "iii", "IV", "V", "vi", "vii°"]);
/// ```
pub fn get_diatonic_chords(key: &Key) -> Vec<DiatonicChord> {
    let scale = key.scale_pitch_classes();
    diatonic_qualities(key.mode)
        .iter()
        .zip(scale.iter())
        .map(|(quality, pc)| {
            let chord = Chord::new(key.spell(*pc as i32), *quality);
            let roman = roman_from_chord(key, &chord);
            DiatonicChord { chord, roman }
        })
        .collect()
}

/// Build a chord on a (possibly altered) scale degree. Degrees wrap, so 8 is 1.
pub fn chord_from_degree(
    key: &Key,
    degree: u8,
    quality: ChordQuality,
    accidental: Option<Accidental>,
) -> Chord {
    let scale = key.scale_pitch_classes();
    let idx = (degree as usize + 6) % 7;
    let shift = accidental.map(Accidental::offset).unwrap_or(0) as i32;
    Chord::new(key.spell(scale[idx] as i32 + shift), quality)
}
