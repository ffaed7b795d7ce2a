//! Core types for the simdex title index.
//!
//! Holds the validated [`Title`] key, the [`Document`] handed to the index,
//! and the error taxonomy shared by every simdex crate.

pub mod error;
pub mod types;

pub use error::{BatchError, BatchFailure, Error, Result, ValidationError};
pub use types::{Document, MAX_TITLE_LENGTH, Title, TitleError};
