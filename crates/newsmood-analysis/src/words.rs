//! Word frequencies for word-cloud rendering.
//!
//! Tokenization follows the usual word-cloud conventions: tokens match
//! `\w[\w']+`, a trailing possessive `'s` is dropped, pure numbers and stop
//! words are skipped, and words are compared lowercased.

use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']+").expect("valid token pattern"));

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "else",
    "ever", "few", "for", "from", "further", "get", "had", "has", "have", "having", "he", "her",
    "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "itself", "just", "like", "me", "more", "most", "my", "myself",
    "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other", "ought", "our", "ours",
    "ourselves", "out", "over", "own", "same", "says", "she", "should", "so", "some", "such",
    "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "would", "you", "your", "yours", "yourself", "yourselves",
];

/// Words excluded from frequency counts.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty stop list.
    pub fn none() -> Self {
        Self::default()
    }

    /// Common English function words.
    pub fn english() -> Self {
        let mut stop_words = Self::default();
        stop_words.extend(ENGLISH_STOP_WORDS);
        stop_words
    }

    /// Add words to the list; matching is case-insensitive.
    pub fn extend<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    /// Builder form of [`StopWords::extend`].
    pub fn with<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.extend(words);
        self
    }

    /// Returns true if `word` is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Occurrences of one word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordFrequency {
    /// Lowercased word
    pub word: String,
    /// Number of occurrences
    pub count: usize,
    /// Count relative to the most frequent word, in `(0, 1]`
    pub weight: f64,
}

/// Split `text` into normalized tokens, dropping stop words and numbers.
pub fn tokenize(text: &str, stop_words: &StopWords) -> Vec<String> {
    TOKEN_PATTERN
        .find_iter(text)
        .filter_map(|m| {
            let mut word = m.as_str().to_lowercase();
            if word.ends_with("'s") {
                word.truncate(word.len() - 2);
            }
            let keep = word.chars().count() > 1
                && !word.chars().all(|c| c.is_ascii_digit())
                && !stop_words.contains(&word);
            keep.then_some(word)
        })
        .collect()
}

/// Word counts of `text`, most frequent first, ties broken alphabetically.
pub fn word_frequencies(text: &str, stop_words: &StopWords) -> Vec<WordFrequency> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in tokenize(text, stop_words) {
        *counts.entry(word).or_insert(0) += 1;
    }

    let max = counts.values().copied().max().unwrap_or(0);
    let mut frequencies: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(word, count)| WordFrequency {
            word,
            count,
            weight: count as f64 / max as f64,
        })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    frequencies
}
