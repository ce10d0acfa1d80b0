//! Word lists for Wordle
//!
//! A `WordList` keeps the words in file order (targets are chosen and reported by
//! their 1-based position) alongside a hash set for guess validation.

pub mod loader;

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Ordered word list with fast membership checks
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    lookup: FxHashSet<String>,
}

impl WordList {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let lookup = words.iter().map(|w| w.text().to_string()).collect();
        Self { words, lookup }
    }

    /// Build a list from string slices, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::wordlists::WordList;
    ///
    /// let words = WordList::from_slice(&["crane", "sl4te", "irate"]);
    /// assert_eq!(words.len(), 2);
    /// assert!(words.contains("IRATE"));
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `text` (already upper-case) is a listed word
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.lookup.contains(text)
    }

    /// Word at 1-based position `number`
    #[must_use]
    pub fn by_number(&self, number: usize) -> Option<&Word> {
        number.checked_sub(1).and_then(|i| self.words.get(i))
    }

    /// 1-based position of the first occurrence of `word`
    #[must_use]
    pub fn number_of(&self, word: &Word) -> Option<usize> {
        self.words.iter().position(|w| w == word).map(|i| i + 1)
    }

    /// Uniformly random word, `None` for an empty list
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn from_slice_converts_valid_words() {
        let words = WordList::from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        let texts: Vec<_> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn from_slice_skips_invalid() {
        let words = WordList::from_slice(&["crane", "to long", "", "slate"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn from_slice_empty() {
        let words = WordList::from_slice(&[]);
        assert!(words.is_empty());
        assert!(words.choose(&mut SmallRng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn membership_is_exact() {
        let words = WordList::from_slice(&["crane"]);
        assert!(words.contains("CRANE"));
        assert!(!words.contains("crane"));
        assert!(!words.contains("CRAN"));
    }

    #[test]
    fn numbering_is_one_based() {
        let words = WordList::from_slice(&["crane", "slate", "crane"]);
        assert!(words.by_number(0).is_none());
        assert_eq!(words.by_number(3).unwrap().text(), "CRANE");
        assert!(words.by_number(4).is_none());

        // First occurrence wins for duplicates
        let crane = Word::new("crane").unwrap();
        assert_eq!(words.number_of(&crane), Some(1));
        assert_eq!(words.number_of(&Word::new("irate").unwrap()), None);
    }

    #[test]
    fn bundled_word_list_is_valid() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/words.txt");
        let words = loader::load_from_file(path).unwrap();

        assert!(words.len() > 100);
        for word in words.iter() {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
        }
    }

    #[test]
    fn choose_returns_listed_word() {
        let words = WordList::from_slice(&["crane", "slate", "irate"]);
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = words.choose(&mut rng).unwrap();
            assert!(words.contains(word.text()));
        }
    }
}
