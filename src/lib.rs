pub mod chord;
pub mod codec;
pub mod error;
pub mod key;
pub mod note;
pub mod presets;
pub mod roman;
pub mod triads;

pub use chord::{Chord, ChordExtension, ChordQuality};
pub use codec::{
    chord_to_param, chords_to_param, key_to_param, param_to_chord, param_to_chords, param_to_key,
};
pub use error::*;
pub use key::{key_scale_pitch_classes, Key, Mode};
pub use note::{note_to_pitch_class, Accidental, Note, NoteName};
pub use presets::Preset;
pub use roman::{
    chord_from_degree, degree_from_pitch_class, get_diatonic_chords, is_chord_diatonic,
    roman_from_chord, DegreeResult, DiatonicChord,
};

/// Analyse a progression given as URL parameters.
///
/// Returns `None` if the key does not parse; chords that do not parse are
/// skipped.
///
/// ```
/// let numerals = chordwise::analyze_progression("C-major", "C,Am,Bb,G7").unwrap();
/// assert_eq!(numerals, ["I", "vi", "bVII", "V7"]);
/// ```
pub fn analyze_progression(key_param: &str, chords_param: &str) -> Option<Vec<String>> {
    let key = param_to_key(key_param)?;
    Some(
        param_to_chords(chords_param)
            .iter()
            .map(|chord| roman_from_chord(&key, chord))
            .collect(),
    )
}
