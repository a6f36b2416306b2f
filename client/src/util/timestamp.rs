//! Timestamp display helpers for deployment views.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Render an RFC 3339 timestamp as `YYYY-MM-DD HH:MM UTC`.
///
/// Anything that does not parse is shown as-is so odd backend values stay
/// visible instead of disappearing.
pub fn format_timestamp(raw: &str) -> String {
    let Ok(parsed) = OffsetDateTime::parse(raw.trim(), &Rfc3339) else {
        return raw.to_owned();
    };
    // Shifting to UTC can leave the supported year range near its edges.
    let Some(utc) = parsed.checked_to_offset(UtcOffset::UTC) else {
        return raw.to_owned();
    };
    utc.format(format_description!("[year]-[month]-[day] [hour]:[minute] UTC"))
        .unwrap_or_else(|_| raw.to_owned())
}

/// Optional timestamp with a placeholder for "never".
pub fn format_optional_timestamp(raw: Option<&str>) -> String {
    raw.map_or_else(|| "Never".to_owned(), format_timestamp)
}

/// Current time as RFC 3339, from the browser clock under `hydrate`.
pub fn now_rfc3339() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().to_iso_string().into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
    }
}
