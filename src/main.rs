use std::env;
use std::fs;
use std::process;

use chordwise::presets::{builtin_presets, find_preset, parse_presets, Preset};
use chordwise::triads::{Position, StringSet, TriadCard};
use chordwise::{
    chords_to_param, get_diatonic_chords, is_chord_diatonic, param_to_chords, param_to_key,
    roman_from_chord, Note,
};

const USAGE: &str = "Usage: chordwise [--json] roman <key> <chords>
       chordwise [--json] diatonic <key>
       chordwise [--json] triad <note> <root|first|second> <high|low>
       chordwise [--json] preset <id> <note> [--presets <file.yaml>]

  <key>    e.g. C-major, Bb-minor
  <chords> comma-separated, e.g. C,Am,F,G7";

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

fn usage() -> ! {
    fail(USAGE)
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(&format!("Error encoding JSON: {}", e)),
    }
}

fn parse_note(s: &str) -> Note {
    s.parse()
        .unwrap_or_else(|e| fail(&format!("{}", e)))
}

fn run_roman(args: &[String], json: bool) {
    let (key_param, chords_param) = match args {
        [key, chords] => (key, chords),
        _ => usage(),
    };
    let key = param_to_key(key_param)
        .unwrap_or_else(|| fail(&format!("Invalid key '{}' (expected e.g. C-major)", key_param)));
    let chords = param_to_chords(chords_param);
    if chords.is_empty() {
        fail(&format!("No valid chords in '{}'", chords_param));
    }

    let rows: Vec<(String, String, bool)> = chords
        .iter()
        .map(|chord| {
            (
                chord.to_string(),
                roman_from_chord(&key, chord),
                is_chord_diatonic(&key, chord),
            )
        })
        .collect();

    if json {
        let rows: Vec<serde_json::Value> = rows
            .iter()
            .map(|(chord, roman, diatonic)| {
                serde_json::json!({ "chord": chord, "roman": roman, "diatonic": diatonic })
            })
            .collect();
        print_json(&rows);
    } else {
        for (chord, roman, diatonic) in rows {
            let marker = if diatonic { "" } else { "  (non-diatonic)" };
            println!("{:<10} {}{}", chord, roman, marker);
        }
    }
}

fn run_diatonic(args: &[String], json: bool) {
    let key_param = match args {
        [key] => key,
        _ => usage(),
    };
    let key = param_to_key(key_param)
        .unwrap_or_else(|| fail(&format!("Invalid key '{}' (expected e.g. C-major)", key_param)));
    let chords = get_diatonic_chords(&key);

    if json {
        print_json(&chords);
    } else {
        for entry in chords {
            println!("{:<10} {}", entry.chord.to_string(), entry.roman);
        }
    }
}

fn run_triad(args: &[String], json: bool) {
    let (note, position, strings) = match args {
        [note, position, strings] => (note, position, strings),
        _ => usage(),
    };
    let key = parse_note(note);
    let position = Position::from_str(position)
        .unwrap_or_else(|| fail(&format!("Unknown position '{}'", position)));
    let strings = StringSet::from_str(strings)
        .unwrap_or_else(|| fail(&format!("Unknown string set '{}'", strings)));

    let card = TriadCard::new(key, position, strings);
    let positions = card.positions();

    if json {
        print_json(&serde_json::json!({
            "card": card.id(),
            "positions": positions,
            "answerWindow": card.answer_window(),
            "promptWindow": card.prompt_window(),
        }));
    } else {
        let names = strings.string_names();
        for p in positions.iter() {
            println!(
                "{} string: fret {:>2} ({})",
                names[p.string_index as usize], p.fret, p.degree
            );
        }
        println!("answer window: {}", card.answer_window());
        println!("prompt window: {}", card.prompt_window());
    }
}

fn load_presets(path: Option<&String>) -> Vec<Preset> {
    let result = match path {
        Some(path) => {
            let source = fs::read_to_string(path)
                .unwrap_or_else(|e| fail(&format!("Error reading file '{}': {}", path, e)));
            parse_presets(&source)
        }
        None => builtin_presets(),
    };
    result.unwrap_or_else(|e| fail(&format!("{}", e)))
}

fn run_preset(args: &[String], json: bool) {
    let (id, note, presets_path) = match args {
        [id, note] => (id, note, None),
        [id, note, flag, path] if flag == "--presets" => (id, note, Some(path)),
        _ => usage(),
    };
    let presets = load_presets(presets_path);
    let preset = find_preset(&presets, id).unwrap_or_else(|| {
        let known: Vec<&str> = presets.iter().map(|p| p.id.as_str()).collect();
        fail(&format!("Unknown preset '{}' (available: {})", id, known.join(", ")))
    });

    let tonic = parse_note(note);
    let key = preset.key_for(tonic);
    let chords = preset.build(tonic);

    if json {
        let numerals: Vec<String> = chords.iter().map(|c| roman_from_chord(&key, c)).collect();
        print_json(&serde_json::json!({
            "preset": preset.id,
            "k": key.to_string(),
            "c": chords_to_param(&chords),
            "roman": numerals,
        }));
    } else {
        println!("{} in {}", preset.name, key);
        println!("k={}&c={}", key, chords_to_param(&chords));
    }
}

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    // Parse flags
    let json = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");

    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.as_str(), rest),
        None => usage(),
    };

    match command {
        "roman" => run_roman(rest, json),
        "diatonic" => run_diatonic(rest, json),
        "triad" => run_triad(rest, json),
        "preset" => run_preset(rest, json),
        "-h" | "--help" => println!("{}", USAGE),
        _ => usage(),
    }
}
