//! Canonical wire format for timestamps: `YYYY-MM-DDTHH:MM:SS`, UTC,
//! second precision. Rows store the canonical text, so lexicographic
//! comparison in SQL equals chronological comparison.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime, error};

pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Parses an incoming timestamp and re-renders it in the canonical form.
/// Anything that does not match the grammar exactly is rejected.
pub fn normalize(raw: &str) -> Result<String, error::Parse> {
    let parsed = PrimitiveDateTime::parse(raw, TIMESTAMP_FORMAT)?;

    Ok(parsed
        .format(TIMESTAMP_FORMAT)
        .expect("canonical description renders any datetime"))
}

pub fn now() -> String {
    format_offset(OffsetDateTime::now_utc())
}

pub fn now_plus_hours(hours: i64) -> String {
    format_offset(OffsetDateTime::now_utc() + Duration::hours(hours))
}

fn format_offset(datetime: OffsetDateTime) -> String {
    PrimitiveDateTime::new(datetime.date(), datetime.time())
        .format(TIMESTAMP_FORMAT)
        .expect("canonical description renders any datetime")
}
