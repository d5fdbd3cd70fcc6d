//! # URL Parameter Codec
//!
//! Compact string forms for keys (`k=`) and chord progressions (`c=`).
//!
//! ## Formats
//! - Key: `<tonic>-<mode>`, e.g. `C-major`, `Bb-minor`
//! - Chord: `<root><suffix>[/<bass>]`, e.g. `C`, `Dm/G`, `Bbdim7`, `Cm(maj7)`
//! - Progression: chords joined with `,`
//!
//! Decoding is total: a bad key or chord decodes to `None`, and bad tokens in
//! a progression are dropped. Nothing here knows about URLs themselves;
//! percent-encoding `#` is up to the caller.
//!
//! ## Example
//! ```rust
//! use chordwise::codec::{chords_to_param, param_to_chords};
//!
//! let chords = param_to_chords("C,Am,nonsense,F,G7");
//! assert_eq!(chords.len(), 4);
//! assert_eq!(chords_to_param(&chords), "C,Am,F,G7");
//! ```

use crate::chord::Chord;
use crate::key::Key;

const LIST_SEPARATOR: char = ',';

pub fn key_to_param(key: &Key) -> String {
    key.to_string()
}

pub fn param_to_key(param: &str) -> Option<Key> {
    match param.parse() {
        Ok(key) => Some(key),
        Err(e) => {
            log::debug!("dropping key param: {}", e);
            None
        }
    }
}

pub fn chord_to_param(chord: &Chord) -> String {
    chord.to_string()
}

pub fn param_to_chord(param: &str) -> Option<Chord> {
    match param.parse() {
        Ok(chord) => Some(chord),
        Err(e) => {
            log::debug!("dropping chord param: {}", e);
            None
        }
    }
}

pub fn chords_to_param(chords: &[Chord]) -> String {
    chords
        .iter()
        .map(chord_to_param)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn param_to_chords(param: &str) -> Vec<Chord> {
    param
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(param_to_chord)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::{ChordExtension, ChordQuality};
    use crate::key::Mode;
    use crate::note::{Accidental, Note, NoteName};

    fn all_notes() -> Vec<Note> {
        let mut notes = Vec::new();
        for name in NoteName::ALL {
            for accidental in [None, Some(Accidental::Sharp), Some(Accidental::Flat)] {
                notes.push(Note { name, accidental });
            }
        }
        notes
    }

    #[test]
    fn test_key_params() {
        let key = Key::major(Note::natural(NoteName::C));
        assert_eq!(key_to_param(&key), "C-major");
        assert_eq!(param_to_key("C-major"), Some(key));
        assert_eq!(param_to_key("Bb-minor"), Some(Key::minor(Note::flat(NoteName::B))));
        assert_eq!(param_to_key(""), None);
        assert_eq!(param_to_key("C"), None);
        assert_eq!(param_to_key("Q-major"), None);
        assert_eq!(param_to_key("C-lydian"), None);
    }

    #[test]
    fn test_key_round_trip() {
        for tonic in all_notes() {
            for mode in [Mode::Major, Mode::Minor] {
                let key = Key::new(tonic, mode);
                assert_eq!(param_to_key(&key_to_param(&key)), Some(key));
            }
        }
    }

    #[test]
    fn test_chord_params() {
        let bbdim7 = Chord::new(Note::flat(NoteName::B), ChordQuality::Diminished)
            .with_extension(ChordExtension::Dim7);
        assert_eq!(chord_to_param(&bbdim7), "Bbdim7");

        let dm_over_g = Chord::new(Note::natural(NoteName::D), ChordQuality::Minor)
            .with_bass(Note::natural(NoteName::G));
        assert_eq!(chord_to_param(&dm_over_g), "Dm/G");
        assert_eq!(param_to_chord("Dm/G"), Some(dm_over_g));

        assert_eq!(param_to_chord("Xm"), None);
        assert_eq!(param_to_chord("Dm/"), None);
    }

    #[test]
    fn test_chord_round_trip() {
        let extensions = std::iter::once(None).chain(ChordExtension::ALL.map(Some));
        let extensions: Vec<_> = extensions.collect();
        let basses: Vec<Option<Note>> = std::iter::once(None)
            .chain([Some(Note::natural(NoteName::G)), Some(Note::sharp(NoteName::F))])
            .collect();

        for root in all_notes() {
            for quality in ChordQuality::ALL {
                for extension in &extensions {
                    for bass in &basses {
                        let chord = Chord {
                            root,
                            quality,
                            extension: *extension,
                            slash_bass: *bass,
                        };
                        let param = chord_to_param(&chord);
                        assert_eq!(param_to_chord(&param), Some(chord), "param {}", param);
                    }
                }
            }
        }
    }

    #[test]
    fn test_progression_drops_invalid_tokens() {
        let chords = param_to_chords("C, ,Am,??,F,G7,");
        let params: Vec<String> = chords.iter().map(chord_to_param).collect();
        assert_eq!(params, ["C", "Am", "F", "G7"]);
        assert!(param_to_chords("").is_empty());
    }

    #[test]
    fn test_progression_round_trip() {
        let chords = vec![
            Chord::new(Note::natural(NoteName::C), ChordQuality::Major),
            Chord::new(Note::natural(NoteName::A), ChordQuality::Minor)
                .with_extension(ChordExtension::Min7),
            Chord::new(Note::flat(NoteName::E), ChordQuality::Sus2)
                .with_bass(Note::flat(NoteName::B)),
            Chord::new(Note::sharp(NoteName::G), ChordQuality::Augmented)
                .with_extension(ChordExtension::Maj7),
        ];
        let param = chords_to_param(&chords);
        assert_eq!(param, "C,Am7,Ebsus2/Bb,G#aug(maj7)");
        assert_eq!(param_to_chords(&param), chords);
    }
}
