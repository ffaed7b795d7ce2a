//! Stateless title matching.
//!
//! Two stages, cheapest first:
//! - [`find`] / [`contains`]: case-insensitive substring prefilter using a
//!   Boyer-Moore-Horspool bad-character table.
//! - [`similarity`] / [`Matcher::similarity`]: Jaro-Winkler score in `[0, 1]`
//!   for entries that passed the prefilter.

use crate::config::SearchConfig;
use simdex_core::{Error, Result};

const ALPHABET: usize = 256;

/// Returns true if `needle` occurs in `haystack`, ignoring case.
///
/// A blank needle matches every haystack.
pub fn contains(haystack: &str, needle: &str) -> bool {
    find(haystack, needle).is_some()
}

/// Byte offset of the first case-insensitive occurrence of `needle`.
///
/// Offsets refer to the lowercased haystack. A blank needle is found at 0.
pub fn find(haystack: &str, needle: &str) -> Option<usize> {
    find_folded(&haystack.to_lowercase(), &needle.to_lowercase())
}

/// [`find`] for inputs that are already lowercased.
pub(crate) fn find_folded(text: &str, pattern: &str) -> Option<usize> {
    if pattern.trim().is_empty() {
        return Some(0);
    }

    let text = text.as_bytes();
    let pattern = pattern.as_bytes();
    let n = text.len();
    let m = pattern.len();
    if m > n {
        return None;
    }

    let shift = bad_character_table(pattern);

    let mut s = 0;
    while s <= n - m {
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[s + j - 1] {
            j -= 1;
        }
        if j == 0 {
            return Some(s);
        }
        s += shift[text[s + m - 1] as usize];
    }
    None
}

fn bad_character_table(pattern: &[u8]) -> [usize; ALPHABET] {
    let m = pattern.len();
    let mut table = [m; ALPHABET];
    for (i, &b) in pattern.iter().enumerate().take(m - 1) {
        table[b as usize] = m - i - 1;
    }
    table
}

/// Jaro-Winkler similarity with the default parameters.
///
/// Fails with [`Error::EmptyTitle`] when `haystack` is empty.
pub fn similarity(haystack: &str, needle: &str) -> Result<f64> {
    Matcher::default().similarity(haystack, needle)
}

/// Similarity scorer parameterised by a [`SearchConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matcher {
    boost_threshold: f64,
    prefix_size: usize,
    prefix_scale: f64,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl Matcher {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            boost_threshold: config.boost_threshold,
            prefix_size: config.prefix_size,
            prefix_scale: config.prefix_scale,
        }
    }

    pub fn similarity(&self, haystack: &str, needle: &str) -> Result<f64> {
        if haystack.is_empty() {
            return Err(Error::EmptyTitle);
        }
        Ok(jaro_winkler(
            needle,
            haystack,
            self.boost_threshold,
            self.prefix_size,
            self.prefix_scale,
        ))
    }
}

/// Jaro similarity over `char`s.
pub fn jaro(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, ca) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window).min(b.len() - 1);
        for j in start..=end {
            if !b_matched[j] && *ca == b[j] {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let a_seq = a.iter().zip(&a_matched).filter_map(|(c, &m)| m.then_some(c));
    let b_seq = b.iter().zip(&b_matched).filter_map(|(c, &m)| m.then_some(c));
    let transpositions = a_seq.zip(b_seq).filter(|(x, y)| x != y).count();

    let m = matches as f64;
    let t = transpositions as f64 / 2.0;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}

/// Jaro-Winkler similarity.
///
/// The prefix boost only applies once the Jaro score reaches
/// `boost_threshold`; at most `prefix_size` leading chars count.
pub fn jaro_winkler(
    a: &str,
    b: &str,
    boost_threshold: f64,
    prefix_size: usize,
    prefix_scale: f64,
) -> f64 {
    let sim = jaro(a, b);
    if sim < boost_threshold {
        return sim;
    }

    let prefix = a
        .chars()
        .zip(b.chars())
        .take(prefix_size)
        .take_while(|(x, y)| x == y)
        .count();

    (sim + prefix_scale * prefix as f64 * (1.0 - sim)).min(1.0)
}
