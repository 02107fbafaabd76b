use std::sync::Arc;

use crate::config::ServeArgs;
use crate::fetch::{AlphaVantageSource, SampleSource, SeriesSource};
use crate::sessions::SessionStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub source: Arc<dyn SeriesSource>,
}

impl AppState {
    pub fn new(sessions: SessionStore, source: Arc<dyn SeriesSource>) -> Self {
        Self {
            sessions: Arc::new(sessions),
            source,
        }
    }

    pub fn from_args(args: &ServeArgs) -> Self {
        let source: Arc<dyn SeriesSource> = match (&args.alphavantage_key, args.offline) {
            (Some(key), false) => Arc::new(AlphaVantageSource::new(key.clone())),
            _ => Arc::new(SampleSource::default()),
        };

        Self::new(SessionStore::new(args.credentials()), source)
    }
}
