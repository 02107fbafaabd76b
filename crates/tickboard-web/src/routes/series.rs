//! Series catalog, column, and table endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tickboard_core::{columns_for, columns_for_key, render_row, ColumnDescriptor, SeriesKind, Symbol};

use crate::error::WebError;
use crate::fetch::SeriesRequest;
use crate::responses::ResponseMeta;
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 30;
const MAX_LIMIT: usize = 500;

#[derive(Debug, Serialize)]
pub struct SeriesKindInfo {
    pub code: &'static str,
    pub adjusted: bool,
    pub intraday: bool,
}

#[derive(Debug, Serialize)]
pub struct SeriesList {
    pub kinds: Vec<SeriesKindInfo>,
}

/// GET /api/series
pub async fn list() -> Json<SeriesList> {
    let kinds = SeriesKind::ALL
        .into_iter()
        .map(|kind| SeriesKindInfo {
            code: kind.as_str(),
            adjusted: kind.is_adjusted(),
            intraday: kind.is_intraday(),
        })
        .collect();
    Json(SeriesList { kinds })
}

#[derive(Debug, Serialize)]
pub struct ColumnsResponse {
    pub series: String,
    pub columns: &'static [ColumnDescriptor],
}

/// GET /api/series/:kind/columns
///
/// Unrecognized kinds answer 200 with an empty column set — the documented
/// fallback policy — rather than 404.
pub async fn columns(Path(kind): Path<String>) -> Json<ColumnsResponse> {
    let columns = columns_for_key(&kind);
    Json(ColumnsResponse {
        series: kind,
        columns,
    })
}

#[derive(Debug, Deserialize)]
pub struct TableQuery {
    pub symbol: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TableResponse {
    pub meta: ResponseMeta,
    pub series: SeriesKind,
    pub symbol: String,
    pub columns: &'static [ColumnDescriptor],
    pub rows: Vec<Vec<String>>,
}

/// GET /api/dashboard/series/:kind/table?symbol=SYM&limit=N
///
/// The fetch endpoint is strict about its inputs: an unknown kind or bad
/// symbol is a 400, unlike the column lookup's empty fallback.
pub async fn table(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<TableQuery>,
) -> Result<Json<TableResponse>, WebError> {
    let series = kind.parse::<SeriesKind>()?;
    let symbol = Symbol::parse(&query.symbol)?;
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    if limit == 0 {
        return Err(WebError::BadRequest(String::from(
            "limit must be greater than zero",
        )));
    }

    let batch = state
        .source
        .fetch(SeriesRequest {
            kind: series,
            symbol: symbol.clone(),
            limit,
        })
        .await?;

    let columns = columns_for(series);
    let rows = batch
        .records
        .iter()
        .map(|record| render_row(record, columns))
        .collect();

    Ok(Json(TableResponse {
        meta: ResponseMeta::new(state.source.name()),
        series,
        symbol: symbol.as_str().to_owned(),
        columns,
        rows,
    }))
}
