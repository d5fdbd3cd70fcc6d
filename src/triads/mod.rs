//! # Triad Trainer
//!
//! Guitar triad positions for the flashcard trainer.
//!
//! ## Purpose
//! Given a key, an inversion and a set of three adjacent strings, compute the
//! exact frets of the nearest playable major triad, plus the windows of the
//! neck used to draw the prompt and the answer.
//!
//! ## Sub-modules
//! - `types` - Position, StringSet, TriadPosition, FretWindow
//! - `engine` - Voicing calculation and the octave-shift rule
//! - `window` - Tight and prompt fret windows
//!
//! ## Voicing Rule
//! Each string takes the lowest fret (0-11) that sounds its triad member. If
//! that uses an open string, the notes below the 5th fret move up an octave.
//! Root position and first inversion also move when the voicing mixes frets
//! at 10+ with frets below 5. Second inversion only moves for open strings.
//!
//! | Key | Position | Strings | Frets      |
//! |-----|----------|---------|------------|
//! | C   | root     | G B e   | 5 5 3      |
//! | C   | second   | G B e   | 12 13 12   |
//! | G   | root     | G B e   | 12 12 10   |
//! | B   | second   | G B e   | 11 12 11   |
//! | E   | second   | G B e   | 4 5 4      |
//!
//! ## Example
//! ```rust
//! use chordwise::triads::{Position, StringSet, TriadCard};
//! use chordwise::{Note, NoteName};
//!
//! let card = TriadCard::new(Note::natural(NoteName::C), Position::Second, StringSet::High);
//! let window = card.prompt_window();
//! assert!(card.positions().iter().all(|p| window.contains(p.fret)));
//! ```

mod engine;
mod types;
mod window;


use crate::note::Note;

pub use engine::triad_positions;
pub use types::{FretWindow, Position, StringSet, TriadPosition, TRIAD_KEYS};
pub use window::{fret_window, prompt_fret_window, prompt_fret_window_options, PROMPT_WINDOW_FRETS};

/// One flashcard of the trainer: a key, an inversion and a string set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriadCard {
    pub key: Note,
    pub position: Position,
    pub strings: StringSet,
}

impl TriadCard {
    pub fn new(key: Note, position: Position, strings: StringSet) -> Self {
        Self { key, position, strings }
    }

    /// Every card, ordered by key, then position, then string set
    pub fn deck() -> Vec<TriadCard> {
        let mut cards = Vec::with_capacity(TRIAD_KEYS.len() * 6);
        for key in TRIAD_KEYS {
            for position in Position::ALL {
                for strings in StringSet::ALL {
                    cards.push(TriadCard::new(key, position, strings));
                }
            }
        }
        cards
    }

    /// Stable identifier, e.g. `"C|root|high"`
    pub fn id(&self) -> String {
        format!("{}|{}|{}", self.key, self.position, self.strings)
    }

    pub fn positions(&self) -> [TriadPosition; 3] {
        triad_positions(self.key, self.position, self.strings)
    }

    pub fn answer_window(&self) -> FretWindow {
        fret_window(&self.positions())
    }

    pub fn prompt_window(&self) -> FretWindow {
        prompt_fret_window(self.key, self.position, &self.positions())
    }
}
