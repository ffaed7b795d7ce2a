use crate::error::{Result, ValidationError};
use crate::types::Title;
use serde::{Deserialize, Serialize};

/// A titled payload handed to the index.
///
/// The index keys on `title` and stores `payload` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document<T> {
    pub title: Title,
    pub payload: T,
}

impl<T> Document<T> {
    /// Validates `title` and pairs it with `payload`.
    pub fn new(title: impl Into<String>, payload: T) -> Result<Self> {
        let title = Title::try_new(title.into())
            .map_err(|e| ValidationError::InvalidTitle(e.to_string()))?;
        Ok(Self { title, payload })
    }

    pub fn from_title(title: Title, payload: T) -> Self {
        Self { title, payload }
    }

    pub fn into_parts(self) -> (Title, T) {
        (self.title, self.payload)
    }
}
