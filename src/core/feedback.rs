//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as:
//! - Correct (green): same letter at the same position in the target
//! - Present (amber): letter occurs elsewhere in the target
//! - Absent (gray): letter is not credited
//!
//! Duplicate letters are credited left to right: the n-th occurrence of a letter in the
//! guess can only be Present if the target holds at least n copies of it.

use std::ops::Index;

/// Feedback category for a single cell
///
/// Variants are declared lowest first so the derived order is
/// `Absent < Present < Correct`, which is also the keyboard upgrade priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Absent,
    Present,
    Correct,
}

impl Classification {
    /// Emoji square used in logs
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Classification of every position of a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Classification>);

impl Feedback {
    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// For each position `i`, left to right:
    /// 1. Correct if `guess[i] == target[i]`
    /// 2. Present if the count of `guess[i]` in `guess[..=i]` does not exceed its count
    ///    in `target`
    /// 3. Absent otherwise
    ///
    /// The prefix count includes letters that were themselves Correct, and a letter
    /// credited Present early is not withdrawn when a later copy turns out Correct.
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::core::{Classification::*, Feedback};
    ///
    /// let feedback = Feedback::calculate(b"EERIE", b"SPEED");
    /// assert_eq!(feedback.as_slice(), &[Present, Present, Absent, Absent, Absent]);
    /// ```
    ///
    /// # Panics
    /// Panics in debug mode if the lengths differ
    #[must_use]
    pub fn calculate(guess: &[u8], target: &[u8]) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

        let occurrences =
            |letters: &[u8], letter: u8| letters.iter().filter(|&&c| c == letter).count();

        let cells = guess
            .iter()
            .zip(target)
            .enumerate()
            .map(|(i, (&letter, &expected))| {
                if letter == expected {
                    Classification::Correct
                } else if occurrences(&guess[..=i], letter) <= occurrences(target, letter) {
                    Classification::Present
                } else {
                    Classification::Absent
                }
            })
            .collect();

        Self(cells)
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&c| c == Classification::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Classification::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Classification::Present)
    }

    fn count(&self, wanted: Classification) -> usize {
        self.0.iter().filter(|&&c| c == wanted).count()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Classification] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Classification> + '_ {
        self.0.iter().copied()
    }

    /// Render as a row of emoji squares, e.g. "🟨⬜⬜🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = Classification;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::Classification::{Absent, Correct, Present};
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classification_order() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!([Present, Correct, Absent].iter().max(), Some(&Correct));
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = Feedback::calculate(b"ABCDE", b"FGHIJ");
        assert_eq!(feedback.as_slice(), &[Absent; 5]);
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
        assert!(!feedback.is_solved());
    }

    #[test]
    fn feedback_all_correct() {
        let feedback = Feedback::calculate(b"CRANE", b"CRANE");
        assert!(feedback.is_solved());
        assert_eq!(feedback.count_correct(), 5);
    }

    #[test]
    fn feedback_real_wordle_example() {
        // CRANE vs SLATE: A and E green, nothing yellow
        let feedback = Feedback::calculate(b"CRANE", b"SLATE");
        assert_eq!(feedback.as_slice(), &[Absent, Absent, Correct, Absent, Correct]);
    }

    #[test]
    fn feedback_duplicate_letters_left_to_right() {
        // Target SPEED has two E's, so only the first two E's of EERIE are credited
        let feedback = Feedback::calculate(b"EERIE", b"SPEED");
        assert_eq!(feedback.as_slice(), &[Present, Present, Absent, Absent, Absent]);
        assert_eq!(feedback.to_emoji(), "🟨🟨⬜⬜⬜");
    }

    #[test]
    fn feedback_erase_against_speed() {
        // The second E is the 2nd occurrence and SPEED holds two, so it is still credited
        let feedback = Feedback::calculate(b"ERASE", b"SPEED");
        assert_eq!(feedback.as_slice(), &[Present, Absent, Absent, Present, Present]);
    }

    #[test]
    fn feedback_duplicate_both_credited() {
        // SPEED vs ERASE: ERASE holds two E's, so both E's of SPEED are Present
        let feedback = Feedback::calculate(b"SPEED", b"ERASE");
        assert_eq!(feedback.as_slice(), &[Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn feedback_prefix_rule_ignores_later_correct() {
        // Only one A in the target, yet the first A is credited before the second
        // turns out Correct
        let feedback = Feedback::calculate(b"AAZZZ", b"XAYYY");
        assert_eq!(feedback.as_slice(), &[Present, Correct, Absent, Absent, Absent]);
    }

    #[test]
    fn feedback_correct_counts_toward_prefix() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let feedback = Feedback::calculate(b"ROBOT", b"FLOOR");
        assert_eq!(feedback.as_slice(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn feedback_indexing() {
        let feedback = Feedback::calculate(b"AB", b"BA");
        assert_eq!(feedback[0], Present);
        assert_eq!(feedback[1], Present);
        assert_eq!(feedback.len(), 2);
        assert_eq!(feedback.iter().count(), 2);
    }

    fn letters(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(b'A'..=b'F', len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn self_match_is_all_correct(word in letters(1..9)) {
            let feedback = Feedback::calculate(&word, &word);
            prop_assert!(feedback.is_solved());
        }

        #[test]
        fn correct_exactly_where_letters_match((guess, target) in (1usize..9).prop_flat_map(|n| (letters(n..n + 1), letters(n..n + 1)))) {
            let feedback = Feedback::calculate(&guess, &target);
            for i in 0..guess.len() {
                prop_assert_eq!(feedback[i] == Correct, guess[i] == target[i]);
            }
        }

        #[test]
        fn absent_letters_missing_from_target_stay_absent((guess, target) in (1usize..9).prop_flat_map(|n| (letters(n..n + 1), letters(n..n + 1)))) {
            let feedback = Feedback::calculate(&guess, &target);
            for (i, &letter) in guess.iter().enumerate() {
                if !target.contains(&letter) {
                    prop_assert_eq!(feedback[i], Absent);
                }
            }
        }

        #[test]
        fn present_credit_bounded_by_target_count((guess, target) in (1usize..9).prop_flat_map(|n| (letters(n..n + 1), letters(n..n + 1)))) {
            let feedback = Feedback::calculate(&guess, &target);
            for letter in b'A'..=b'F' {
                let present = guess
                    .iter()
                    .zip(feedback.iter())
                    .filter(|&(&g, c)| g == letter && c == Present)
                    .count();
                let in_target = target.iter().filter(|&&t| t == letter).count();
                prop_assert!(present <= in_target);
            }
        }

        #[test]
        fn swapping_in_unused_letter_leaves_other_letters_alone(
            (guess, target, i) in (1usize..9).prop_flat_map(|n| (letters(n..n + 1), letters(n..n + 1), 0..n))
        ) {
            // Z is outside the generated alphabet, so it occurs in neither word
            let mut changed = guess.clone();
            changed[i] = b'Z';

            let before = Feedback::calculate(&guess, &target);
            let after = Feedback::calculate(&changed, &target);

            prop_assert_eq!(after[i], Absent);
            for j in (0..guess.len()).filter(|&j| j != i && guess[j] != guess[i]) {
                prop_assert_eq!(before[j], after[j], "position {} changed", j);
            }
        }
    }
}
