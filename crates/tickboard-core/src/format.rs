//! Display formatting helpers shared by the column tables.
//!
//! All functions here are total: invalid input degrades to a display-safe
//! string instead of an error.

use serde_json::Value;

/// Renders a value as US-convention currency: `$` symbol, thousands
/// separators, exactly two fraction digits. Non-numeric input renders the
/// fixed `"$0.00"` placeholder.
///
/// Strings are not coerced here; only JSON numbers count as numeric.
pub fn format_currency(value: &Value) -> String {
    match value.as_f64() {
        Some(amount) => format_usd(amount),
        None => String::from("$0.00"),
    }
}

/// Fixed-precision numeric rendering; non-numeric input renders the empty
/// string (empty-cell degrade).
pub fn format_fixed(value: &Value, decimals: usize) -> String {
    match numeric(value) {
        Some(amount) => format!("{amount:.decimals$}"),
        None => String::new(),
    }
}

/// Thousands-grouped integer rendering, no decimals; non-numeric input
/// renders the empty string.
pub fn format_grouped_int(value: &Value) -> String {
    match numeric(value) {
        Some(amount) => {
            let rounded = amount.round();
            let sign = if rounded < 0.0 { "-" } else { "" };
            let digits = format!("{:.0}", rounded.abs());
            format!("{sign}{}", group_thousands(&digits))
        }
        None => String::new(),
    }
}

fn format_usd(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let rendered = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some(parts) => parts,
        None => (rendered.as_str(), "00"),
    };
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// Numeric view of a JSON value: numbers directly, plus strings that parse
/// as finite floats (upstream serializes every field as a string).
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite()),
        _ => None,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
