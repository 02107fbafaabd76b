use thiserror::Error;

/// Validation and contract errors exposed by `tickboard-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid series '{value}', expected one of intraday, daily, weekly, monthly, daily-adjusted, weekly-adjusted, monthly-adjusted")]
    InvalidSeries { value: String },
    #[error("invalid role '{value}', expected one of user, admin")]
    InvalidRole { value: String },
}

/// Auth-provider boundary failure.
///
/// Gate callers never propagate this: a failed session lookup resolves to the
/// anonymous session (fail closed).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("auth provider unavailable: {message}")]
    Unavailable { message: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
