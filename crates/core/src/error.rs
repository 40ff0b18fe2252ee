use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid window configuration")]
    Config(#[from] ConfigErrorKind),

    #[error("histogram must have exactly {expected} buckets, got {actual}")]
    HistogramLength { expected: usize, actual: usize },

    #[error("invalid hour label: '{0}' (expected \"HH:00\")")]
    HourLabelInvalid(String),
}

/// Reasons a [`crate::WindowConfig`] is rejected at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigErrorKind {
    #[error("slice count must be greater than zero")]
    SlicesZero,

    #[error("slice count {0} does not divide 24 hours evenly")]
    SlicesUneven(usize),

    #[error("window duration must be at least one hour")]
    DurationZero,

    #[error("window duration of {0} hours is longer than a day")]
    DurationTooLong(usize),
}
