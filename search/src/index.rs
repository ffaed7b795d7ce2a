//! Concurrent title index.

use crate::config::SearchConfig;
use crate::matcher::{Matcher, find_folded};
use crate::results::SearchHit;
use parking_lot::RwLock;
use simdex_core::{BatchError, BatchFailure, Document, Error, Result, Title};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, trace, warn};

/// Maps unique titles to opaque payloads behind one reader/writer lock.
///
/// Writers (`add`, each item of `batch`) take the lock exclusively for a
/// single insert. Readers (`search`, `len`) share it for a whole scan, so
/// a concurrent batch may be observed partially applied.
#[derive(Debug)]
pub struct Index<T> {
    entries: RwLock<HashMap<Title, Stored<T>>>,
    matcher: Matcher,
    config: SearchConfig,
}

#[derive(Debug)]
struct Stored<T> {
    /// Lowercased title, the form the substring prefilter compares against.
    folded: String,
    payload: T,
}

impl<T> Default for Index<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Create operations.
impl<T> Index<T> {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Invalid config fields are replaced with their defaults.
    pub fn with_config(config: SearchConfig) -> Self {
        let config = config.with_defaults_for_invalid();
        Self {
            entries: RwLock::new(HashMap::new()),
            matcher: Matcher::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Mutation operations.
impl<T> Index<T> {
    /// Inserts a document, replacing the payload of an existing title.
    ///
    /// `None` fails with [`Error::NilDocument`] without touching the index.
    pub fn add(&self, document: impl Into<Option<Document<T>>>) -> Result<()> {
        let Some(document) = document.into() else {
            return Err(Error::NilDocument);
        };

        let (title, payload) = document.into_parts();
        let stored = Stored {
            folded: title.to_lowercase(),
            payload,
        };

        let mut entries = self.entries.write();
        match entries.entry(title) {
            Entry::Occupied(mut slot) => {
                debug!(title = %slot.key(), "replacing document");
                slot.insert(stored);
            }
            Entry::Vacant(slot) => {
                debug!(title = %slot.key(), "adding document");
                slot.insert(stored);
            }
        }

        Ok(())
    }

    /// Adds every document in order, one lock acquisition each.
    ///
    /// A failing item never stops the batch; all failures come back together
    /// as [`Error::Batch`]. An empty input fails with [`Error::NilDocument`].
    pub fn batch<I, D>(&self, documents: I) -> Result<()>
    where
        I: IntoIterator<Item = D>,
        D: Into<Option<Document<T>>>,
    {
        let mut documents = documents.into_iter().peekable();
        if documents.peek().is_none() {
            return Err(Error::NilDocument);
        }

        let mut total = 0;
        let mut failures = Vec::new();
        for (position, document) in documents.enumerate() {
            total += 1;
            if let Err(error) = self.add(document) {
                failures.push(BatchFailure { position, error });
            }
        }

        if failures.is_empty() {
            debug!(total, "batch applied");
            return Ok(());
        }

        warn!(total, failed = failures.len(), "batch applied with failures");
        Err(BatchError { total, failures }.into())
    }
}

/// Search operations.
impl<T> Index<T> {
    /// Returns up to `limit` payloads whose titles contain `query`, most
    /// similar first.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<T>>
    where
        T: Clone,
    {
        let hits = self.search_hits(query, limit)?;
        Ok(hits.into_iter().map(SearchHit::into_payload).collect())
    }

    /// Like [`Index::search`], keeping each similarity next to its payload.
    ///
    /// Fails with [`Error::EmptyQuery`] for an empty query and
    /// [`Error::NotFound`] when no title contains it. The result holds
    /// `min(limit, matches)` hits.
    pub fn search_hits(&self, query: &str, limit: usize) -> Result<Vec<SearchHit<T>>>
    where
        T: Clone,
    {
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }
        let needle = query.to_lowercase();

        let entries = self.entries.read();
        let mut ranked = Vec::new();
        for (title, stored) in entries.iter() {
            if find_folded(&stored.folded, &needle).is_none() {
                continue;
            }
            match self.matcher.similarity(title.as_str(), query) {
                Ok(similarity) => ranked.push(SearchHit {
                    payload: &stored.payload,
                    similarity,
                }),
                Err(error) => trace!(title = %title, %error, "skipping unscorable entry"),
            }
        }

        if ranked.is_empty() {
            debug!(query, "search found nothing");
            return Err(Error::NotFound);
        }

        let matched = ranked.len();
        ranked.sort_unstable_by(SearchHit::by_similarity_desc);
        ranked.truncate(limit);

        debug!(query, matched, returned = ranked.len(), "search completed");
        Ok(ranked.into_iter().map(SearchHit::cloned).collect())
    }
}

/// Inspection operations.
impl<T> Index<T> {
    /// Number of distinct titles currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Exact membership check; `title` is trimmed like on insert.
    pub fn contains_title(&self, title: &str) -> bool {
        Title::try_new(title.to_string())
            .is_ok_and(|title| self.entries.read().contains_key(&title))
    }
}
