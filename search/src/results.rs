//! Search results types.

use std::cmp::Ordering;

/// One ranked match: the stored payload and its similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<T> {
    pub payload: T,
    /// Jaro-Winkler similarity in `[0, 1]`, higher is closer.
    pub similarity: f64,
}

impl<T> SearchHit<T> {
    pub fn into_payload(self) -> T {
        self.payload
    }

    /// Orders hits most-similar first.
    pub(crate) fn by_similarity_desc(a: &Self, b: &Self) -> Ordering {
        b.similarity.total_cmp(&a.similarity)
    }
}

impl<T: Clone> SearchHit<&T> {
    pub(crate) fn cloned(self) -> SearchHit<T> {
        SearchHit {
            payload: self.payload.clone(),
            similarity: self.similarity,
        }
    }
}
