//! Deterministic offline source.
//!
//! Generates schema-faithful records seeded from the symbol bytes, for
//! `--offline` mode and tests. Field-key spellings match the column tables
//! exactly, values are serialized as strings the way the live upstream does.

use serde_json::Value;
use tickboard_core::{Record, SeriesKind};
use time::{Duration, OffsetDateTime};

use super::source::{FetchFuture, SeriesBatch, SeriesRequest, SeriesSource, SourceError};

#[derive(Debug, Default)]
pub struct SampleSource;

impl SeriesSource for SampleSource {
    fn name(&self) -> &'static str {
        "sample"
    }

    fn fetch<'a>(&'a self, req: SeriesRequest) -> FetchFuture<'a> {
        Box::pin(async move {
            if req.limit == 0 {
                return Err(SourceError::invalid_request(
                    "series request limit must be greater than zero",
                ));
            }

            let records = generate(req.kind, req.symbol.as_str(), req.limit);
            Ok(SeriesBatch { records })
        })
    }
}

fn generate(kind: SeriesKind, symbol: &str, limit: usize) -> Vec<Record> {
    let seed = symbol_seed(symbol);
    let now = OffsetDateTime::now_utc();
    let step = step_for(kind);

    (0..limit)
        .map(|index| {
            let base = 84.0 + ((seed + index as u64 * 7) % 600) as f64 / 10.0;
            let stamp = now - step * (index as i32);

            let mut record = Record::new();
            record.insert(stamp_key(kind).to_owned(), Value::String(render_stamp(kind, stamp)));
            record.insert(String::from("1. open"), price(base));
            record.insert(String::from("2. high"), price(base + 1.25));
            record.insert(String::from("3. low"), price(base - 0.85));
            record.insert(String::from("4. close"), price(base + 0.40));

            if kind.is_adjusted() {
                record.insert(String::from("5. adjusted close"), price(base + 0.40));
                record.insert(
                    String::from("6. volume"),
                    Value::String((21_000 + index as u64 * 35).to_string()),
                );
                let dividend = if (seed + index as u64) % 13 == 0 {
                    "0.2400"
                } else {
                    "0.0000"
                };
                record.insert(
                    String::from("7. dividend amount"),
                    Value::String(dividend.to_owned()),
                );
                if kind == SeriesKind::DailyAdjusted {
                    record.insert(
                        String::from("8. split coefficient"),
                        Value::String(String::from("1.0")),
                    );
                }
            } else {
                record.insert(
                    String::from("5. volume"),
                    Value::String((21_000 + index as u64 * 35).to_string()),
                );
            }

            record
        })
        .collect()
}

fn price(value: f64) -> Value {
    Value::String(format!("{value:.4}"))
}

fn step_for(kind: SeriesKind) -> Duration {
    match kind {
        SeriesKind::Intraday => Duration::minutes(5),
        SeriesKind::Daily | SeriesKind::DailyAdjusted => Duration::days(1),
        SeriesKind::Weekly | SeriesKind::WeeklyAdjusted => Duration::weeks(1),
        SeriesKind::Monthly | SeriesKind::MonthlyAdjusted => Duration::days(30),
    }
}

const fn stamp_key(kind: SeriesKind) -> &'static str {
    if kind.is_intraday() {
        "timestamp"
    } else {
        "date"
    }
}

fn render_stamp(kind: SeriesKind, stamp: OffsetDateTime) -> String {
    let date = format!(
        "{:04}-{:02}-{:02}",
        stamp.year(),
        u8::from(stamp.month()),
        stamp.day()
    );

    if kind.is_intraday() {
        format!(
            "{date} {:02}:{:02}:{:02}",
            stamp.hour(),
            stamp.minute(),
            stamp.second()
        )
    } else {
        date
    }
}

fn symbol_seed(symbol: &str) -> u64 {
    symbol.bytes().fold(17_u64, |acc, byte| {
        acc.wrapping_mul(31).wrapping_add(byte as u64)
    })
}
