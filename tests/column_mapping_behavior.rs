//! Behavior-driven tests for the series-to-column mapping.

use tickboard_core::{columns_for, columns_for_key, CellFormat, SeriesKind};

// =============================================================================
// Column Mapper: Shapes per kind
// =============================================================================

#[test]
fn intraday_maps_to_six_descriptors_in_display_order() {
    let columns = columns_for(SeriesKind::Intraday);

    assert_eq!(columns.len(), 6);
    assert_eq!(
        columns.iter().map(|c| c.label).collect::<Vec<_>>(),
        ["Timestamp", "Open", "High", "Low", "Close", "Volume"]
    );
    assert_eq!(columns[0].format, None);
    assert_eq!(columns[5].format, Some(CellFormat::GroupedInt));
}

#[test]
fn unadjusted_non_intraday_kinds_share_the_dated_ohlcv_shape() {
    let daily = columns_for(SeriesKind::Daily);

    assert_eq!(daily[0].field_key, "date");
    assert_eq!(columns_for(SeriesKind::Weekly), daily);
    assert_eq!(columns_for(SeriesKind::Monthly), daily);
}

#[test]
fn daily_adjusted_maps_to_eight_descriptors_ending_in_split_coefficient() {
    let columns = columns_for(SeriesKind::DailyAdjusted);

    assert_eq!(columns.len(), 8);
    let last = columns.last().expect("non-empty");
    assert_eq!(last.label, "Split Coefficient");
    assert_eq!(last.format, Some(CellFormat::Fixed1));
}

#[test]
fn weekly_and_monthly_adjusted_map_to_seven_descriptors_without_split() {
    for kind in [SeriesKind::WeeklyAdjusted, SeriesKind::MonthlyAdjusted] {
        let columns = columns_for(kind);
        assert_eq!(columns.len(), 7, "{kind}");
        assert!(columns.iter().all(|c| c.field_key != "8. split coefficient"));
        assert_eq!(
            columns.last().map(|c| c.format),
            Some(Some(CellFormat::Fixed4))
        );
    }
}

#[test]
fn adjusted_series_insert_adjusted_close_between_close_and_volume() {
    let columns = columns_for(SeriesKind::DailyAdjusted);
    let keys = columns.iter().map(|c| c.field_key).collect::<Vec<_>>();

    let close = keys.iter().position(|k| *k == "4. close").expect("close");
    let adjusted = keys
        .iter()
        .position(|k| *k == "5. adjusted close")
        .expect("adjusted close");
    let volume = keys.iter().position(|k| *k == "6. volume").expect("volume");

    assert!(close < adjusted && adjusted < volume);
}

// =============================================================================
// Column Mapper: Field-key fidelity
// =============================================================================

#[test]
fn field_keys_embed_the_ordinal_and_unit_spellings_verbatim() {
    // The upstream record keys carry a leading ordinal; dropping it would
    // silently blank every cell downstream.
    let daily = columns_for(SeriesKind::Daily);
    assert_eq!(
        daily.iter().skip(1).map(|c| c.field_key).collect::<Vec<_>>(),
        ["1. open", "2. high", "3. low", "4. close", "5. volume"]
    );

    let adjusted = columns_for(SeriesKind::WeeklyAdjusted);
    assert!(adjusted.iter().any(|c| c.field_key == "7. dividend amount"));
}

// =============================================================================
// Column Mapper: Fallback and stability
// =============================================================================

#[test]
fn unrecognized_identifiers_map_to_the_empty_sequence_not_an_error() {
    assert!(columns_for_key("quarterly").is_empty());
    assert!(columns_for_key("DAILY_ADJUSTED ").is_empty());
    assert!(columns_for_key("").is_empty());
}

#[test]
fn recognized_identifiers_agree_with_the_typed_lookup() {
    for kind in SeriesKind::ALL {
        assert_eq!(columns_for_key(kind.as_str()), columns_for(kind));
    }
}

#[test]
fn consecutive_lookups_return_structurally_equal_sequences() {
    for kind in SeriesKind::ALL {
        let first = columns_for(kind);
        let second = columns_for(kind);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.field_key, b.field_key);
            assert_eq!(a.label, b.label);
            assert_eq!(a.format, b.format);
        }
    }
}
