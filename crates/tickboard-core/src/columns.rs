//! Series-to-column mapping.
//!
//! Each [`SeriesKind`] maps onto a fixed, display-ordered column table. The
//! mapping is an explicit exhaustive match rather than anything derived from
//! data: upstream field-key spellings vary per granularity (adjusted series
//! insert an extra field between close and volume), so the tables here are
//! the single source of truth for those spellings.

use serde::Serialize;
use serde_json::Value;

use crate::domain::SeriesKind;
use crate::format;

/// Value formatter a column applies before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellFormat {
    /// Two-decimal price.
    Fixed2,
    /// One-decimal split coefficient.
    Fixed1,
    /// Four-decimal dividend amount.
    Fixed4,
    /// Thousands-grouped integer volume, no decimals.
    GroupedInt,
    /// US currency with the `"$0.00"` non-numeric placeholder.
    Usd,
}

impl CellFormat {
    pub fn apply(self, value: &Value) -> String {
        match self {
            Self::Fixed2 => format::format_fixed(value, 2),
            Self::Fixed1 => format::format_fixed(value, 1),
            Self::Fixed4 => format::format_fixed(value, 4),
            Self::GroupedInt => format::format_grouped_int(value),
            Self::Usd => format::format_currency(value),
        }
    }
}

/// One table column: display label, upstream field key, optional formatter.
///
/// `field_key` must match the upstream record spelling exactly, ordinal
/// prefix and unit text included ("1. open", "7. dividend amount"). A
/// mismatch is not an error here; the consuming renderer degrades missing
/// keys to empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    pub label: &'static str,
    pub field_key: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<CellFormat>,
}

const fn col(
    label: &'static str,
    field_key: &'static str,
    format: Option<CellFormat>,
) -> ColumnDescriptor {
    ColumnDescriptor {
        label,
        field_key,
        format,
    }
}

const INTRADAY_COLUMNS: [ColumnDescriptor; 6] = [
    col("Timestamp", "timestamp", None),
    col("Open", "1. open", Some(CellFormat::Fixed2)),
    col("High", "2. high", Some(CellFormat::Fixed2)),
    col("Low", "3. low", Some(CellFormat::Fixed2)),
    col("Close", "4. close", Some(CellFormat::Fixed2)),
    col("Volume", "5. volume", Some(CellFormat::GroupedInt)),
];

const OHLCV_COLUMNS: [ColumnDescriptor; 6] = [
    col("Date", "date", None),
    col("Open", "1. open", Some(CellFormat::Fixed2)),
    col("High", "2. high", Some(CellFormat::Fixed2)),
    col("Low", "3. low", Some(CellFormat::Fixed2)),
    col("Close", "4. close", Some(CellFormat::Fixed2)),
    col("Volume", "5. volume", Some(CellFormat::GroupedInt)),
];

// Adjusted kinds carry no date column: upstream keys those records by date
// and the consuming shell renders the record key as the row label.
const DAILY_ADJUSTED_COLUMNS: [ColumnDescriptor; 8] = [
    col("Open", "1. open", Some(CellFormat::Fixed2)),
    col("High", "2. high", Some(CellFormat::Fixed2)),
    col("Low", "3. low", Some(CellFormat::Fixed2)),
    col("Close", "4. close", Some(CellFormat::Fixed2)),
    col("Adjusted Close", "5. adjusted close", Some(CellFormat::Fixed2)),
    col("Volume", "6. volume", Some(CellFormat::GroupedInt)),
    col("Dividend Amount", "7. dividend amount", Some(CellFormat::Fixed4)),
    col("Split Coefficient", "8. split coefficient", Some(CellFormat::Fixed1)),
];

const ADJUSTED_COLUMNS: [ColumnDescriptor; 7] = [
    col("Open", "1. open", Some(CellFormat::Fixed2)),
    col("High", "2. high", Some(CellFormat::Fixed2)),
    col("Low", "3. low", Some(CellFormat::Fixed2)),
    col("Close", "4. close", Some(CellFormat::Fixed2)),
    col("Adjusted Close", "5. adjusted close", Some(CellFormat::Fixed2)),
    col("Volume", "6. volume", Some(CellFormat::GroupedInt)),
    col("Dividend Amount", "7. dividend amount", Some(CellFormat::Fixed4)),
];

/// Display-ordered columns for a series kind.
///
/// Total over the enumeration; repeated calls return the same table.
pub const fn columns_for(kind: SeriesKind) -> &'static [ColumnDescriptor] {
    match kind {
        SeriesKind::Intraday => &INTRADAY_COLUMNS,
        SeriesKind::Daily | SeriesKind::Weekly | SeriesKind::Monthly => &OHLCV_COLUMNS,
        SeriesKind::DailyAdjusted => &DAILY_ADJUSTED_COLUMNS,
        SeriesKind::WeeklyAdjusted | SeriesKind::MonthlyAdjusted => &ADJUSTED_COLUMNS,
    }
}

/// Resolves columns from a raw series identifier.
///
/// Unrecognized identifiers get the empty column set; that is the documented
/// fallback policy for open inputs, not an error.
pub fn columns_for_key(raw: &str) -> &'static [ColumnDescriptor] {
    raw.parse::<SeriesKind>().map(columns_for).unwrap_or(&[])
}
