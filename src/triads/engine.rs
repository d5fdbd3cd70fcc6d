//! Triad voicing calculation
//!
//! Finds the frets for a major triad on three adjacent strings, then moves
//! voicings that would use open strings or stretch across the neck up an
//! octave.

use crate::note::Note;

use super::types::{Position, StringSet, TriadPosition};

/// Frets below this are candidates for the octave shift
const LOW_FRET_LIMIT: u8 = 5;
/// A voicing reaching this fret while also using a low fret is too wide
const HIGH_FRET_LIMIT: u8 = 10;

/// Pitch class of a triad member (1, 3 or 5) above `root`
fn member_pitch_class(root: u8, degree: u8) -> u8 {
    let interval = match degree {
        3 => 4,
        5 => 7,
        _ => 0,
    };
    (root + interval) % 12
}

/// First fret at or above 0 where `open` sounds `target`
fn lowest_fret(open: u8, target: u8) -> u8 {
    (target + 12 - open) % 12
}

/// Whether the voicing should move up an octave.
///
/// Any open string triggers the shift. Root position and first inversion also
/// shift when the raw voicing mixes frets at 10+ with frets below 5; second
/// inversion does not.
fn needs_octave_shift(frets: &[u8; 3], position: Position) -> bool {
    let has_open = frets.contains(&0);
    let mixed = frets.iter().any(|f| *f >= HIGH_FRET_LIMIT)
        && frets.iter().any(|f| *f < LOW_FRET_LIMIT);

    match position {
        Position::Root | Position::First => has_open || mixed,
        Position::Second => has_open,
    }
}

/// Frets for a major triad on `root`, one per string of `strings`, low string first.
///
/// # Examples
/// ```
/// use chordwise::triads::{triad_positions, Position, StringSet};
/// use chordwise::{Note, NoteName};
///
/// let c = triad_positions(Note::natural(NoteName::C), Position::Root, StringSet::High);
/// let frets: Vec<u8> = c.iter().map(|p| p.fret).collect();
/// assert_eq!(frets, [5, 5, 3]);
///
/// // G major would use open strings, so it moves up to the 12th fret
/// let g = triad_positions(Note::natural(NoteName::G), Position::Root, StringSet::High);
/// let frets: Vec<u8> = g.iter().map(|p| p.fret).collect();
/// assert_eq!(frets, [12, 12, 10]);
/// ```
pub fn triad_positions(root: Note, position: Position, strings: StringSet) -> [TriadPosition; 3] {
    let root_pc = root.pitch_class();
    let roles = position.roles();
    let open = strings.open_pitch_classes();

    let mut frets = [0u8; 3];
    for i in 0..3 {
        frets[i] = lowest_fret(open[i], member_pitch_class(root_pc, roles[i]));
    }

    if needs_octave_shift(&frets, position) {
        log::trace!(
            "shifting {} {} triad on {} strings up an octave: {:?}",
            root,
            position,
            strings,
            frets
        );
        for fret in frets.iter_mut() {
            if *fret < LOW_FRET_LIMIT {
                *fret += 12;
            }
        }
    }

    [0usize, 1, 2].map(|i| TriadPosition {
        string_index: i as u8,
        fret: frets[i],
        degree: roles[i],
    })
}
