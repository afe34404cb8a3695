use std::fmt::Debug;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An interval or update range whose start is after its end
    #[error("invalid range [{start}, {end}]: start is after end")]
    InvalidRange { start: String, end: String },

    /// Some key between the series bounds is not represented
    #[error("{0}")]
    Continuity(String),

    /// Some key is represented by more than one interval
    #[error("{0}")]
    Overlap(String),

    /// Attempt to step past the smallest or largest key of the type
    #[error("{0}")]
    BoundaryOverflow(String),

    #[error("{0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_range<K: Debug>(start: &K, end: &K) -> Self {
        Error::InvalidRange {
            start: format!("{start:?}"),
            end: format!("{end:?}"),
        }
    }
}
