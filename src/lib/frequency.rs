//! Word frequency table.

use std::collections::HashMap;
use std::hash::Hash;

/// Rough average bytes per word, separator included.
const BYTES_PER_WORD: u64 = 8;
/// Rough share of words that are distinct, as a divisor.
const UNIQUE_WORD_RATIO: u64 = 4;

/// Estimated distinct words in a corpus of `file_size` bytes.
///
/// Only used to reserve table capacity up front; a wrong guess costs a few
/// rehashes, never correctness.
pub fn approx_unique_words(file_size: u64) -> usize {
    let approx_total_words = file_size / BYTES_PER_WORD;
    usize::try_from(approx_total_words / UNIQUE_WORD_RATIO).unwrap_or(usize::MAX)
}

/// Word to occurrence count. Every stored count is at least 1.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: HashMap<K, u32>,
}

impl<K: Eq + Hash> FrequencyTable<K> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Empty table pre-sized for a corpus of `file_size` bytes.
    pub fn for_corpus_size(file_size: u64) -> Self {
        let capacity = approx_unique_words(file_size);
        tracing::debug!(file_size, capacity, "reserving frequency table");
        Self {
            counts: HashMap::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, word: K) {
        *self.counts.entry(word).or_insert(0) += 1;
    }

    pub fn get<Q>(&self, word: &Q) -> Option<u32>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of words recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn capacity(&self) -> usize {
        self.counts.capacity()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u32)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }

    /// Hand the entries over, in hash-table order.
    pub fn into_entries(self) -> Vec<(K, u32)> {
        self.counts.into_iter().collect()
    }
}

impl<K: Eq + Hash> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> Extend<K> for FrequencyTable<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, words: I) {
        for word in words {
            self.record(word);
        }
    }
}

impl<K: Eq + Hash> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(words: I) -> Self {
        let mut table = Self::new();
        table.extend(words);
        table
    }
}

impl<K: Eq + Hash> PartialEq for FrequencyTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}
