//! Simdex fuzzy title search.
//!
//! Callers register titled documents in an [`Index`] and query it with an
//! approximate title fragment.
//!
//! # Design
//!
//! - Search runs in two stages per stored title:
//!   - a case-insensitive substring prefilter ([`matcher::find`]) rejects
//!     titles that do not contain the query at all;
//!   - survivors are scored with Jaro-Winkler ([`Matcher`]) and ranked.
//! - Scores are recomputed on every search from the current contents.
//! - One reader/writer lock guards the title map. Searches share it;
//!   each insert takes it exclusively.

mod config;
mod index;
pub mod matcher;
mod results;

pub use config::{ConfigError, SearchConfig};
pub use index::Index;
pub use matcher::Matcher;
pub use results::SearchHit;
pub use simdex_core::{BatchError, BatchFailure, Document, Error, Result, Title};
