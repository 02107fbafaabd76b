//! Row rendering over column descriptors.

use serde_json::{Map, Value};

use crate::columns::ColumnDescriptor;

/// Raw upstream record: field key to JSON value, spellings preserved.
pub type Record = Map<String, Value>;

/// Renders one cell. A missing field key degrades to an empty cell; the
/// core never validates record shape beyond this lookup.
pub fn render_cell(record: &Record, column: &ColumnDescriptor) -> String {
    let Some(value) = record.get(column.field_key) else {
        return String::new();
    };

    match column.format {
        Some(format) => format.apply(value),
        None => plain(value),
    }
}

/// Renders a full row in column display order.
pub fn render_row(record: &Record, columns: &[ColumnDescriptor]) -> Vec<String> {
    columns
        .iter()
        .map(|column| render_cell(record, column))
        .collect()
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::columns_for;
    use crate::domain::SeriesKind;
    use serde_json::json;

    fn record(entries: &[(&str, Value)]) -> Record {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_owned(), value.clone()))
            .collect()
    }

    #[test]
    fn renders_daily_row_in_column_order() {
        let columns = columns_for(SeriesKind::Daily);
        let row = render_row(
            &record(&[
                ("date", json!("2026-08-05")),
                ("1. open", json!("227.9200")),
                ("2. high", json!("231.4700")),
                ("3. low", json!("226.6500")),
                ("4. close", json!("230.5600")),
                ("5. volume", json!("46184700")),
            ]),
            columns,
        );

        assert_eq!(
            row,
            [
                "2026-08-05",
                "227.92",
                "231.47",
                "226.65",
                "230.56",
                "46,184,700",
            ]
        );
    }

    #[test]
    fn missing_field_key_renders_empty_cell() {
        let columns = columns_for(SeriesKind::Daily);
        let row = render_row(&record(&[("date", json!("2026-08-05"))]), columns);
        assert_eq!(row[0], "2026-08-05");
        assert!(row[1..].iter().all(String::is_empty));
    }

    #[test]
    fn misspelled_field_key_degrades_silently() {
        // "open" without the ordinal prefix must not match "1. open".
        let columns = columns_for(SeriesKind::Daily);
        let row = render_row(&record(&[("open", json!("227.9200"))]), columns);
        assert!(row.iter().all(String::is_empty));
    }
}
