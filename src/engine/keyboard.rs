//! On-screen keyboard state

use crate::core::LetterScore;

/// Key layout of the on-screen keyboard, top row first
///
/// Enter and Delete sit on the bottom row in the presentation but carry no
/// verdict, so only letters are tracked here.
pub const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best-known verdict for each letter key
///
/// `None` until the letter has appeared in a scored guess. A key's verdict is
/// only ever upgraded (`Correct > Misplaced > Absent`); a letter that once
/// scored green stays green even if a later guess uses it in a gray spot.
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    scores: [Option<LetterScore>; 26],
}

impl Keyboard {
    /// Create a keyboard with no verdicts recorded
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all verdicts
    pub fn reset(&mut self) {
        self.scores = [None; 26];
    }

    /// The verdict recorded for a letter, if any
    #[must_use]
    pub fn score_of(&self, letter: char) -> Option<LetterScore> {
        Self::index(letter).and_then(|i| self.scores[i])
    }

    /// Record a verdict for a letter, never downgrading
    pub(super) fn record(&mut self, letter: char, score: LetterScore) {
        let Some(i) = Self::index(letter) else {
            return;
        };
        match self.scores[i] {
            Some(existing) if existing >= score => {}
            _ => self.scores[i] = Some(score),
        }
    }

    fn index(letter: char) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| letter as usize - 'a' as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterScore::{Absent, Correct, Misplaced};

    #[test]
    fn keyboard_starts_neutral() {
        let keyboard = Keyboard::new();
        for letter in 'a'..='z' {
            assert_eq!(keyboard.score_of(letter), None);
        }
    }

    #[test]
    fn keyboard_records_verdicts() {
        let mut keyboard = Keyboard::new();
        keyboard.record('a', Misplaced);
        keyboard.record('b', Absent);

        assert_eq!(keyboard.score_of('a'), Some(Misplaced));
        assert_eq!(keyboard.score_of('b'), Some(Absent));
        assert_eq!(keyboard.score_of('c'), None);
    }

    #[test]
    fn keyboard_upgrades_verdicts() {
        let mut keyboard = Keyboard::new();
        keyboard.record('a', Absent);
        keyboard.record('a', Misplaced);
        assert_eq!(keyboard.score_of('a'), Some(Misplaced));

        keyboard.record('a', Correct);
        assert_eq!(keyboard.score_of('a'), Some(Correct));
    }

    #[test]
    fn keyboard_never_downgrades() {
        let mut keyboard = Keyboard::new();
        keyboard.record('e', Correct);
        keyboard.record('e', Absent);
        keyboard.record('e', Misplaced);

        assert_eq!(keyboard.score_of('e'), Some(Correct));
    }

    #[test]
    fn keyboard_ignores_non_letters() {
        let mut keyboard = Keyboard::new();
        keyboard.record('!', Correct);
        keyboard.record('A', Correct); // Uppercase not tracked; engine lowercases

        assert_eq!(keyboard.score_of('!'), None);
        assert_eq!(keyboard.score_of('A'), None);
    }

    #[test]
    fn keyboard_reset_forgets_everything() {
        let mut keyboard = Keyboard::new();
        keyboard.record('q', Correct);
        keyboard.reset();

        assert_eq!(keyboard.score_of('q'), None);
    }

    #[test]
    fn key_rows_cover_alphabet() {
        let letters: String = KEY_ROWS.concat();
        assert_eq!(letters.len(), 26);
        for letter in 'a'..='z' {
            assert!(letters.contains(letter));
        }
    }
}
