//! Live Alpha Vantage time-series source.
//!
//! Records keep the upstream field-key spellings verbatim ("1. open",
//! "7. dividend amount"); the keyed time-series object is flattened into
//! newest-first records with the stamp under "timestamp"/"date".

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tickboard_core::{Record, SeriesKind};

use super::source::{FetchFuture, SeriesBatch, SeriesRequest, SeriesSource, SourceError};

const BASE_URL: &str = "https://www.alphavantage.co/query";
const INTRADAY_INTERVAL: &str = "5min";

pub struct AlphaVantageSource {
    client: Client,
    api_key: String,
}

impl AlphaVantageSource {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    fn request_url(&self, kind: SeriesKind, symbol: &str) -> String {
        let mut url = format!(
            "{BASE_URL}?function={}&symbol={}",
            query_function(kind),
            urlencoding::encode(symbol)
        );
        if kind.is_intraday() {
            url.push_str("&interval=");
            url.push_str(INTRADAY_INTERVAL);
        }
        url.push_str("&apikey=");
        url.push_str(&self.api_key);
        url
    }
}

impl SeriesSource for AlphaVantageSource {
    fn name(&self) -> &'static str {
        "alphavantage"
    }

    fn fetch<'a>(&'a self, req: SeriesRequest) -> FetchFuture<'a> {
        Box::pin(async move {
            if req.limit == 0 {
                return Err(SourceError::invalid_request(
                    "series request limit must be greater than zero",
                ));
            }

            let url = self.request_url(req.kind, req.symbol.as_str());
            tracing::debug!(series = req.kind.as_str(), symbol = %req.symbol, "alphavantage fetch");

            let response = self.client.get(url).send().await.map_err(|error| {
                SourceError::unavailable(format!("alphavantage transport error: {error}"))
            })?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                return Err(SourceError::rate_limited(
                    "alphavantage request quota exceeded",
                ));
            }
            if !response.status().is_success() {
                return Err(SourceError::unavailable(format!(
                    "alphavantage upstream returned status {}",
                    response.status()
                )));
            }

            let payload: Value = response.json().await.map_err(|error| {
                SourceError::internal(format!("alphavantage returned malformed JSON: {error}"))
            })?;

            // Throttle notices and symbol errors arrive inside a 200 body.
            if let Some(note) = payload.get("Note").and_then(Value::as_str) {
                return Err(SourceError::rate_limited(note));
            }
            if let Some(message) = payload.get("Error Message").and_then(Value::as_str) {
                return Err(SourceError::invalid_request(message));
            }

            let records = flatten_series(&payload, req.kind, req.limit)?;
            Ok(SeriesBatch { records })
        })
    }
}

const fn query_function(kind: SeriesKind) -> &'static str {
    match kind {
        SeriesKind::Intraday => "TIME_SERIES_INTRADAY",
        SeriesKind::Daily => "TIME_SERIES_DAILY",
        SeriesKind::Weekly => "TIME_SERIES_WEEKLY",
        SeriesKind::Monthly => "TIME_SERIES_MONTHLY",
        SeriesKind::DailyAdjusted => "TIME_SERIES_DAILY_ADJUSTED",
        SeriesKind::WeeklyAdjusted => "TIME_SERIES_WEEKLY_ADJUSTED",
        SeriesKind::MonthlyAdjusted => "TIME_SERIES_MONTHLY_ADJUSTED",
    }
}

/// Object key holding the keyed time series in the response payload.
const fn payload_key(kind: SeriesKind) -> &'static str {
    match kind {
        SeriesKind::Intraday => "Time Series (5min)",
        SeriesKind::Daily | SeriesKind::DailyAdjusted => "Time Series (Daily)",
        SeriesKind::Weekly => "Weekly Time Series",
        SeriesKind::Monthly => "Monthly Time Series",
        SeriesKind::WeeklyAdjusted => "Weekly Adjusted Time Series",
        SeriesKind::MonthlyAdjusted => "Monthly Adjusted Time Series",
    }
}

const fn stamp_key(kind: SeriesKind) -> &'static str {
    if kind.is_intraday() {
        "timestamp"
    } else {
        "date"
    }
}

fn flatten_series(
    payload: &Value,
    kind: SeriesKind,
    limit: usize,
) -> Result<Vec<Record>, SourceError> {
    let series = payload
        .get(payload_key(kind))
        .and_then(Value::as_object)
        .ok_or_else(|| {
            SourceError::internal(format!(
                "alphavantage payload missing '{}' object",
                payload_key(kind)
            ))
        })?;

    // Stamps are ISO dates, so lexicographic descending is newest first.
    let mut entries = series.iter().collect::<Vec<_>>();
    entries.sort_by(|left, right| right.0.cmp(left.0));

    let records = entries
        .into_iter()
        .take(limit)
        .map(|(stamp, fields)| {
            let mut record = fields.as_object().cloned().unwrap_or_default();
            record.insert(stamp_key(kind).to_owned(), Value::String(stamp.clone()));
            record
        })
        .collect();

    Ok(records)
}
