use super::*;

#[test]
fn format_timestamp_renders_utc_minutes() {
    assert_eq!(format_timestamp("2024-01-01T00:00:00Z"), "2024-01-01 00:00 UTC");
}

#[test]
fn format_timestamp_normalizes_offsets_to_utc() {
    assert_eq!(format_timestamp("2024-03-10T09:30:15+02:00"), "2024-03-10 07:30 UTC");
}

#[test]
fn format_timestamp_accepts_fractional_seconds() {
    assert_eq!(format_timestamp("2024-06-01T12:05:59.123Z"), "2024-06-01 12:05 UTC");
}

#[test]
fn format_timestamp_passes_through_unparseable_input() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert_eq!(format_timestamp(""), "");
}

#[test]
fn format_timestamp_keeps_raw_when_utc_shift_leaves_year_range() {
    assert_eq!(format_timestamp("9999-12-31T23:30:00-01:00"), "9999-12-31T23:30:00-01:00");
}

#[test]
fn format_timestamp_handles_year_range_edges_in_utc() {
    assert_eq!(format_timestamp("9999-12-31T23:59:00Z"), "9999-12-31 23:59 UTC");
}

#[test]
fn format_optional_timestamp_uses_never_placeholder() {
    assert_eq!(format_optional_timestamp(None), "Never");
    assert_eq!(format_optional_timestamp(Some("2024-01-01T00:00:00Z")), "2024-01-01 00:00 UTC");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn now_rfc3339_round_trips_through_parser() {
    let now = now_rfc3339();
    assert!(OffsetDateTime::parse(&now, &Rfc3339).is_ok(), "{now}");
}
