//! Data-fetch boundary.
//!
//! Sources supply raw records keyed by the upstream field-key spellings the
//! column tables expect. The core never validates record shape beyond
//! field-key lookup; missing keys degrade to empty cells in the renderer.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use tickboard_core::{Record, SeriesKind, Symbol};

/// Request for one series window.
#[derive(Debug, Clone)]
pub struct SeriesRequest {
    pub kind: SeriesKind,
    pub symbol: Symbol,
    pub limit: usize,
}

/// Ordered records, newest first.
#[derive(Debug, Clone, Default)]
pub struct SeriesBatch {
    pub records: Vec<Record>,
}

/// Source-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    RateLimited,
    InvalidRequest,
    Internal,
}

/// Structured fetch error surfaced to the web layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    retryable: bool,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::RateLimited,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SourceError {}

pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<SeriesBatch, SourceError>> + Send + 'a>>;

/// A provider of time-series records for the dashboard tables.
pub trait SeriesSource: Send + Sync {
    fn name(&self) -> &'static str;

    fn fetch<'a>(&'a self, req: SeriesRequest) -> FetchFuture<'a>;
}
