//! Resolves canonical timezone names to UTC offsets.

use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// Get the current UTC offset for a canonical timezone name such as
/// "Asia/Jakarta".
///
/// # Errors
/// Returns [Error::InvalidTimezone] if `canonical_timezone` does not name a
/// known timezone.
pub fn get_local_offset(canonical_timezone: &str) -> Result<UtcOffset, Error> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|timezone| timezone.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
        .ok_or_else(|| Error::InvalidTimezone(canonical_timezone.to_owned()))
}

#[cfg(test)]
mod timezone_tests {
    use super::get_local_offset;
    use crate::Error;

    #[test]
    fn known_timezone_resolves() {
        let offset = get_local_offset("Asia/Jakarta").expect("Could not resolve timezone");

        assert_eq!(offset.whole_hours(), 7);
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        let result = get_local_offset("Mars/Olympus_Mons");

        assert_eq!(
            result,
            Err(Error::InvalidTimezone("Mars/Olympus_Mons".to_owned()))
        );
    }
}
