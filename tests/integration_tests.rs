//! Integration tests for chordwise
//!
//! Exercises the public API the way the practice widgets use it: URL
//! parameters in, numerals and fret positions out.

use chordwise::presets::{builtin_presets, find_preset};
use chordwise::triads::{prompt_fret_window, triad_positions, Position, StringSet, TRIAD_KEYS};
use chordwise::{
    analyze_progression, chord_to_param, chords_to_param, get_diatonic_chords, is_chord_diatonic,
    key_to_param, param_to_chord, param_to_chords, param_to_key, roman_from_chord, Chord,
    ChordExtension, ChordQuality, Key, Mode, Note, NoteName,
};

#[test]
fn test_roman_numerals_from_url_params() {
    let numerals = analyze_progression("C-major", "C,Dm,G,Bb,F#dim").unwrap();
    assert_eq!(numerals, ["I", "ii", "V", "bVII", "#iv°"]);

    let numerals = analyze_progression("A-minor", "Am,G,F,E").unwrap();
    assert_eq!(numerals, ["i", "VII", "VI", "V"]);
}

#[test]
fn test_half_diminished_literal() {
    let key = param_to_key("C-major").unwrap();
    let chord = Chord::new(Note::natural(NoteName::D), ChordQuality::Minor)
        .with_extension(ChordExtension::HalfDim7);
    assert_eq!(roman_from_chord(&key, &chord), "iiø7");
    assert_eq!(param_to_chord(&chord_to_param(&chord)), Some(chord));
}

#[test]
fn test_invalid_key_param() {
    assert_eq!(analyze_progression("H-major", "C,F"), None);
    assert_eq!(analyze_progression("C-major", ""), Some(vec![]));
}

#[test]
fn test_diatonic_predicate() {
    let key = Key::major(Note::natural(NoteName::C));
    assert!(is_chord_diatonic(&key, &param_to_chord("F").unwrap()));
    assert!(!is_chord_diatonic(&key, &param_to_chord("Fm").unwrap()));
    assert!(!is_chord_diatonic(&key, &param_to_chord("Bb").unwrap()));
}

#[test]
fn test_diatonic_chords_round_trip_through_params() {
    for tonic in TRIAD_KEYS {
        for mode in [Mode::Major, Mode::Minor] {
            let key = Key::new(tonic, mode);
            assert_eq!(param_to_key(&key_to_param(&key)), Some(key));

            let chords: Vec<Chord> = get_diatonic_chords(&key).into_iter().map(|d| d.chord).collect();
            assert_eq!(chords.len(), 7);
            assert_eq!(param_to_chords(&chords_to_param(&chords)), chords);
            assert!(chords.iter().all(|c| is_chord_diatonic(&key, c)), "{}", key);
        }
    }
}

#[test]
fn test_preset_progression_into_url() {
    let presets = builtin_presets().unwrap();
    let blues = find_preset(&presets, "twelve-bar-blues").unwrap();
    let key = blues.key_for(Note::natural(NoteName::E));
    let param = chords_to_param(&blues.build(key.tonic));
    assert_eq!(param, "E7,E7,E7,E7,A7,A7,E7,E7,B7,A7,E7,B7");

    let numerals = analyze_progression(&key_to_param(&key), &param).unwrap();
    assert_eq!(numerals[4], "IV7");
    assert_eq!(numerals[8], "V7");
}

#[test]
fn test_fretboard_vectors() {
    let cases = [
        ("C", Position::Root, [5u8, 5, 3]),
        ("C", Position::Second, [12, 13, 12]),
        ("G", Position::Root, [12, 12, 10]),
        ("B", Position::Second, [11, 12, 11]),
        ("E", Position::Second, [4, 5, 4]),
    ];
    for (key, position, expected) in cases {
        let root: Note = key.parse().unwrap();
        let frets = triad_positions(root, position, StringSet::High).map(|p| p.fret);
        assert_eq!(frets, expected, "{} {}", key, position);
    }
}

#[test]
fn test_prompt_window_contains_voicing_for_all_keys() {
    for key in TRIAD_KEYS {
        for position in Position::ALL {
            for strings in StringSet::ALL {
                let positions = triad_positions(key, position, strings);
                let window = prompt_fret_window(key, position, &positions);
                assert!(
                    positions.iter().all(|p| window.contains(p.fret)),
                    "{} {} {}: {:?} not inside {}",
                    key,
                    position,
                    strings,
                    positions,
                    window
                );
            }
        }
    }
}

#[test]
fn test_values_serialize_for_the_web_ui() {
    let chord = param_to_chord("Bbm7/F").unwrap();
    let json = serde_json::to_value(chord).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "root": { "name": "B", "accidental": "b" },
            "quality": "minor",
            "extension": "m7",
            "slashBass": { "name": "F" }
        })
    );

    let positions = triad_positions(Note::natural(NoteName::C), Position::Root, StringSet::High);
    let json = serde_json::to_value(positions).unwrap();
    assert_eq!(json[0], serde_json::json!({ "stringIndex": 0, "fret": 5, "degree": 1 }));
}
