//! Guess scoring against the target word
//!
//! A feedback holds one verdict per letter position:
//! - `Absent` (gray): the letter has no unconsumed occurrence in the target
//! - `Misplaced` (yellow): the letter occurs in the target at another position
//! - `Correct` (green): the letter matches the target at this position

use super::{WORD_LENGTH, Word};

/// Verdict for a single letter of a guess
///
/// Ordered by strength: `Absent < Misplaced < Correct`. The keyboard uses
/// this ordering to only ever upgrade a key's recorded verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterScore {
    /// Letter not in the target, or all its occurrences already consumed
    Absent,
    /// Letter in the target, wrong position
    Misplaced,
    /// Letter in the correct position
    Correct,
}

/// Feedback for a complete guess: one verdict per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterScore; WORD_LENGTH]);

impl Feedback {
    /// All greens (winning guess)
    pub const WIN: Self = Self([LetterScore::Correct; WORD_LENGTH]);

    /// Score `guess` against `target`
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches (greens) and consume the matched
    ///    target letters
    /// 2. Second pass: left to right, mark misplaced letters (yellows) while
    ///    unconsumed occurrences remain
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Feedback, LetterScore, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// assert_eq!(feedback.scores()[2], LetterScore::Correct);
    /// assert_eq!(feedback.scores()[4], LetterScore::Correct);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut scores = [LetterScore::Absent; WORD_LENGTH];
        let mut remaining = target.char_counts();

        // First pass: mark greens (exact position matches)
        // Allow: index needed to access guess[i], target[i], and set scores[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.chars()[i] == target.chars()[i] {
                scores[i] = LetterScore::Correct;

                // Consume from the remaining pool
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: mark yellows (wrong position, but letter remains)
        // Allow: index needed to access guess[i] and check/set scores[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if scores[i] == LetterScore::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    scores[i] = LetterScore::Misplaced;
                    *count -= 1;
                }
            }
        }

        Self(scores)
    }

    /// Get the per-position verdicts
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a winning guess (all greens)
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::WIN
    }

    /// Count the number of green verdicts
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterScore::Correct)
            .count()
    }

    /// Count the number of yellow verdicts
    #[must_use]
    pub fn count_misplaced(self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterScore::Misplaced)
            .count()
    }
}
