use thiserror::Error;

pub type SelectorResult<T> = Result<T, SelectorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A required timestamp was absent, for example a deserialized interval
    /// without its `start` or `end` field.
    #[error("missing timestamp: {0}")]
    MissingTimestamp(&'static str),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },
}

impl SelectorError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
