//! Corpus word statistics and top-word selection

use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Word counts in first-seen order
///
/// With deduplication each count is a document frequency: the number of
/// messages containing the word at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment a word's count by one
    pub fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    /// Count for a word, 0 if never seen
    pub fn get(&self, word: &str) -> u32 {
        self.index
            .get(word)
            .map(|&i| self.entries[i].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Words and counts in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }
}

/// Count words across a corpus of token lists.
///
/// With `deduplicate`, each message contributes at most 1 to a word.
pub fn count_words<L: AsRef<[String]>>(word_lists: &[L], deduplicate: bool) -> WordCounts {
    let mut counts = WordCounts::new();

    for list in word_lists {
        let list = list.as_ref();
        if deduplicate {
            let mut seen = HashSet::with_capacity(list.len());
            for word in list {
                if seen.insert(word.as_str()) {
                    counts.add(word);
                }
            }
        } else {
            for word in list {
                counts.add(word);
            }
        }
    }

    debug!(
        messages = word_lists.len(),
        distinct_words = counts.len(),
        deduplicate,
        "Counted words"
    );

    counts
}

/// Pick the most frequent words.
///
/// Keeps words with a count strictly greater than `threshold`, at most
/// `maximum` of them (0 for unlimited), ordered by count descending. Equal
/// counts keep first-seen order.
pub fn select_top(counts: &WordCounts, threshold: u32, maximum: usize) -> Vec<String> {
    let mut ranked: Vec<(&str, u32)> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let limit = if maximum == 0 { usize::MAX } else { maximum };

    let top: Vec<String> = ranked
        .into_iter()
        .take_while(|(_, count)| *count > threshold)
        .take(limit)
        .map(|(word, _)| word.to_string())
        .collect();

    debug!(
        candidates = counts.len(),
        selected = top.len(),
        threshold,
        maximum,
        "Selected top words"
    );

    top
}
