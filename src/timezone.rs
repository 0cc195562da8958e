use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Get the UTC offset of `canonical_timezone` at the instant `date_time`.
///
/// Returns `None` if `canonical_timezone` is not a known timezone name, e.g. "America/Sao_Paulo".
pub fn get_offset_at(canonical_timezone: &str, date_time: &OffsetDateTime) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(date_time).to_utc())
}

/// Whether `canonical_timezone` names a known timezone.
pub fn is_valid_timezone(canonical_timezone: &str) -> bool {
    time_tz::timezones::get_by_name(canonical_timezone).is_some()
}
