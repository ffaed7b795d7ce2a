use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Similarity was requested against an empty title.
    #[error("title is empty")]
    EmptyTitle,

    #[error("query is empty")]
    EmptyQuery,

    /// An absent document, or an empty batch.
    #[error("document is nil")]
    NilDocument,

    #[error("not found")]
    NotFound,

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("batch error: {0}")]
    Batch(#[from] BatchError),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid title: {0}")]
    InvalidTitle(String),
}

/// Every item that failed during a batch insert.
///
/// A batch never stops on the first bad item, so this carries one
/// [`BatchFailure`] per rejected position.
#[derive(Debug)]
pub struct BatchError {
    pub total: usize,
    pub failures: Vec<BatchFailure>,
}

impl BatchError {
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BatchFailure> {
        self.failures.iter()
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} documents failed",
            self.failures.len(),
            self.total
        )?;
        for failure in &self.failures {
            write!(f, "; {failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for BatchError {}

#[derive(Debug)]
pub struct BatchFailure {
    /// Zero-based position of the item in the batch input.
    pub position: usize,
    pub error: Error,
}

impl fmt::Display for BatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}: {}", self.position, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_error_lists_every_failure() {
        let err = BatchError {
            total: 5,
            failures: vec![
                BatchFailure {
                    position: 1,
                    error: Error::NilDocument,
                },
                BatchFailure {
                    position: 4,
                    error: Error::NilDocument,
                },
            ],
        };

        assert_eq!(err.len(), 2);
        assert_eq!(
            err.to_string(),
            "2 of 5 documents failed; #1: document is nil; #4: document is nil"
        );
    }

    #[test]
    fn batch_error_converts_into_error() {
        let err: Error = BatchError {
            total: 1,
            failures: vec![],
        }
        .into();

        assert!(matches!(err, Error::Batch(ref batch) if batch.is_empty()));
    }
}
