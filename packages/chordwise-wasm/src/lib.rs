use serde::Serialize;
use wasm_bindgen::prelude::*;

use chordwise::presets::{builtin_presets, find_preset};
use chordwise::triads::{Position, StringSet, TriadCard, TriadPosition, FretWindow};
use chordwise::{Key, Note};

#[derive(Serialize)]
struct BindingError {
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzedChord {
    chord: String,
    roman: String,
    diatonic: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TriadCardData {
    id: String,
    positions: [TriadPosition; 3],
    answer_window: FretWindow,
    prompt_window: FretWindow,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PresetData {
    id: String,
    name: String,
    key: String,
    chords: String,
    roman: Vec<String>,
}

fn error(message: impl Into<String>) -> JsValue {
    let err = BindingError { message: message.into() };
    match serde_json::to_string(&err) {
        Ok(json) => JsValue::from_str(&json),
        Err(_) => JsValue::from_str(&err.message),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| error(e.to_string()))
}

fn parse_key(param: &str) -> Result<Key, JsValue> {
    chordwise::param_to_key(param).ok_or_else(|| error(format!("Invalid key: {}", param)))
}

fn parse_note(s: &str) -> Result<Note, JsValue> {
    s.parse::<Note>().map_err(|e| error(e.to_string()))
}

#[wasm_bindgen(start)]
pub fn start() {
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("chordwise module initialized");
    }
}

/// Analyse a `c=` progression in a `k=` key; returns a JSON array of
/// `{ chord, roman, diatonic }`
#[wasm_bindgen]
pub fn analyze_progression(key: &str, chords: &str) -> Result<String, JsValue> {
    let key = parse_key(key)?;
    let rows: Vec<AnalyzedChord> = chordwise::param_to_chords(chords)
        .iter()
        .map(|chord| AnalyzedChord {
            chord: chord.to_string(),
            roman: chordwise::roman_from_chord(&key, chord),
            diatonic: chordwise::is_chord_diatonic(&key, chord),
        })
        .collect();
    to_json(&rows)
}

/// The seven diatonic chords of a key as JSON
#[wasm_bindgen]
pub fn diatonic_chords(key: &str) -> Result<String, JsValue> {
    let key = parse_key(key)?;
    to_json(&chordwise::get_diatonic_chords(&key))
}

/// Re-encode a `c=` parameter, dropping tokens that do not parse
#[wasm_bindgen]
pub fn normalize_progression(chords: &str) -> String {
    chordwise::chords_to_param(&chordwise::param_to_chords(chords))
}

/// Positions and windows for one triad flashcard as JSON
#[wasm_bindgen]
pub fn triad_card(key: &str, position: &str, strings: &str) -> Result<String, JsValue> {
    let key = parse_note(key)?;
    let position =
        Position::from_str(position).ok_or_else(|| error(format!("Unknown position: {}", position)))?;
    let strings =
        StringSet::from_str(strings).ok_or_else(|| error(format!("Unknown string set: {}", strings)))?;

    let card = TriadCard::new(key, position, strings);
    to_json(&TriadCardData {
        id: card.id(),
        positions: card.positions(),
        answer_window: card.answer_window(),
        prompt_window: card.prompt_window(),
    })
}

/// Ids of every triad flashcard, in deck order
#[wasm_bindgen]
pub fn triad_deck() -> Vec<String> {
    TriadCard::deck().iter().map(TriadCard::id).collect()
}

/// Realise a built-in preset on a tonic
#[wasm_bindgen]
pub fn preset_progression(id: &str, tonic: &str) -> Result<String, JsValue> {
    let presets = builtin_presets().map_err(|e| error(e.to_string()))?;
    let preset = find_preset(&presets, id).ok_or_else(|| error(format!("Unknown preset: {}", id)))?;
    let tonic = parse_note(tonic)?;

    let key = preset.key_for(tonic);
    let chords = preset.build(tonic);
    to_json(&PresetData {
        id: preset.id.clone(),
        name: preset.name.clone(),
        key: chordwise::key_to_param(&key),
        chords: chordwise::chords_to_param(&chords),
        roman: chords
            .iter()
            .map(|c| chordwise::roman_from_chord(&key, c))
            .collect(),
    })
}

/// Swap ASCII accidentals in a numeral for display glyphs: `bVII` -> `♭VII`.
///
/// Only a leading accidental is replaced, so suffixes such as `m7b5` stay intact.
#[wasm_bindgen]
pub fn display_accidentals(numeral: &str) -> String {
    if let Some(rest) = numeral.strip_prefix('b') {
        format!("♭{}", rest)
    } else if let Some(rest) = numeral.strip_prefix('#') {
        format!("♯{}", rest)
    } else {
        numeral.to_string()
    }
}
