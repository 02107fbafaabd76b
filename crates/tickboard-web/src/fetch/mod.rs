pub mod alphavantage;
pub mod sample;
pub mod source;

pub use alphavantage::AlphaVantageSource;
pub use sample::SampleSource;
pub use source::{SeriesBatch, SeriesRequest, SeriesSource, SourceError, SourceErrorKind};
