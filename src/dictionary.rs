pub mod trie;
pub mod pattern;

use fst::{IntoStreamer, Set, Streamer};

use super::Error;
use trie::Trie;
use pattern::PatternMatcher;

/// The words that can be played
///
/// Words are stored uppercase in an fst set, used for membership and automaton
/// searches, and in two tries: one read forward, one read from the end of each
/// word. Built once before the game and then only read.
pub struct Dictionary {
    words: Set<Vec<u8>>,
    forward: Trie,
    reversed: Trie,
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "<Dictionary: {} words>", self.words.len())
    }
}

fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() {
        return None
    }
    if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        log::warn!("skipping dictionary entry that is not only ascii letters: {:?}", word);
        return None
    }
    Some(word.to_ascii_uppercase())
}

impl Dictionary {
    /// Build from a list of words in any case and order
    ///
    /// Entries with anything else than ascii letters are skipped.
    pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item=S>) -> Result<Self, Error> {
        let mut words = words.into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect::<Vec<_>>();
        words.sort_unstable();
        words.dedup();

        let mut forward = Trie::new();
        let mut reversed = Trie::new();
        for word in &words {
            forward.insert(word);
            reversed.reverse_insert(word);
        }

        Ok(Self {
            words: Set::from_iter(words)?,
            forward,
            reversed,
        })
    }

    /// Load a set precompiled with `make_fst`
    ///
    /// A set holding anything else than uppercase ascii words is rebuilt the
    /// way [`from_words`](Self::from_words) builds one.
    pub fn from_fst(bytes: Vec<u8>) -> Result<Self, Error> {
        let words = Set::new(bytes)?;
        let list = words.stream().into_strs()?;

        if list.iter().any(|w| !w.bytes().all(|b| b.is_ascii_uppercase())) {
            log::warn!("the words fst is not only uppercase words, rebuilding it");
            return Self::from_words(list)
        }

        let mut forward = Trie::new();
        let mut reversed = Trie::new();
        for word in &list {
            forward.insert(word);
            reversed.reverse_insert(word);
        }

        Ok(Self { words, forward, reversed })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case insensitive membership
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(word.to_ascii_uppercase())
    }

    /// The words of the same length as `pattern` matching it letter by letter,
    /// where `.` matches any letter
    pub fn words_matching_pattern(&self, pattern: &str) -> Vec<String> {
        let pattern = pattern.to_ascii_uppercase();
        let mut matches = self.words.search(PatternMatcher::new(pattern.as_bytes())).into_stream();
        let mut acc = vec![];
        while let Some(word) = matches.next() {
            acc.push(String::from_utf8_lossy(word).into_owned());
        }
        acc
    }

    /// Whether some word starts with `prefix`
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.forward.includes(&prefix.to_ascii_uppercase())
    }

    /// Whether some word ends with `suffix`
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.reversed.includes(&reverse(&suffix.to_ascii_uppercase()))
    }

    /// All the words starting with `prefix`
    pub fn find_words_with(&self, prefix: &str) -> Vec<String> {
        self.forward.find_words_with(&prefix.to_ascii_uppercase())
    }

    /// All the words ending with `suffix`, ordered by their reversed spelling
    pub fn find_words_ending_with(&self, suffix: &str) -> Vec<String> {
        self.reversed
            .find_words_with(&reverse(&suffix.to_ascii_uppercase()))
            .iter()
            .map(|w| reverse(w))
            .collect()
    }

    /// All the words spelled with each of `letters` used at most once
    pub fn words_from_letters(&self, letters: &str) -> Vec<String> {
        self.forward.words_from_letters(letters.to_ascii_uppercase().as_bytes())
    }

    pub fn forward(&self) -> &Trie {
        &self.forward
    }

    pub fn reversed(&self) -> &Trie {
        &self.reversed
    }

    /// The underlying set, for automaton searches
    pub fn set(&self) -> &Set<Vec<u8>> {
        &self.words
    }
}

fn reverse(word: &str) -> String {
    word.chars().rev().collect()
}
