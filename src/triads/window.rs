//! Fret windows for drawing part of the neck.
//!
//! The tight window is what the answer occupies. The prompt window is a
//! fixed five-fret slice shown with the flashcard; it always contains the
//! answer, and which slice is shown depends only on the card, so a retried
//! card shows the same clue.

use crate::note::Note;

use super::types::{FretWindow, Position, TriadPosition};

/// Width of a prompt window in frets
pub const PROMPT_WINDOW_FRETS: u8 = 5;

const HASH_MULTIPLIER: u32 = 31;

/// Smallest window holding every fret of the voicing
pub fn fret_window(positions: &[TriadPosition]) -> FretWindow {
    let min = positions.iter().map(|p| p.fret).min().unwrap_or(0);
    let max = positions.iter().map(|p| p.fret).max().unwrap_or(0);
    FretWindow { min, max }
}

/// Every five-fret window that contains the voicing, lowest first.
///
/// A voicing wider than five frets gets its tight window as the only option.
pub fn prompt_fret_window_options(positions: &[TriadPosition]) -> Vec<FretWindow> {
    let tight = fret_window(positions);
    let width = PROMPT_WINDOW_FRETS - 1;
    let first = tight.max.saturating_sub(width);

    let options: Vec<FretWindow> = (first..=tight.min)
        .map(|start| FretWindow { min: start, max: start + width })
        .collect();

    if options.is_empty() {
        vec![tight]
    } else {
        options
    }
}

/// Polynomial rolling hash over the bytes of `s`
fn stable_hash(s: &str) -> u32 {
    s.bytes().fold(0u32, |hash, b| {
        hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(b as u32)
    })
}

/// The prompt window shown for a card, picked from
/// [`prompt_fret_window_options`] by a hash of `"{key}|{position}"`
pub fn prompt_fret_window(key: Note, position: Position, positions: &[TriadPosition]) -> FretWindow {
    let options = prompt_fret_window_options(positions);
    let seed = format!("{}|{}", key, position);
    let idx = stable_hash(&seed) as usize % options.len();
    options[idx]
}
