// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::Timestamp;
use jiff::civil::Time;
use jiff::tz::Offset;

/// Serializes `timestamp` into its textual form.
///
/// When `allow_short_form` is true and the UTC time of day is exactly
/// midnight, the date-only form `YYYY-MM-DD` is produced. In every other
/// case the full form is produced: date, time, subsecond digits with
/// trailing zeros trimmed (omitted entirely when the fraction is zero),
/// and the `Z` zone designator.
///
/// Eligibility for the short form inspects the time of day only; the
/// calendar date never plays a part. Either output parses back through
/// [`parse_timestamp`][crate::parse_timestamp] to the identical instant.
///
/// # Examples
///
/// ```
/// use timeform::{format_timestamp, parse_timestamp};
///
/// let midnight = parse_timestamp("2023-01-01")?;
/// assert_eq!(format_timestamp(midnight, true), "2023-01-01");
/// assert_eq!(format_timestamp(midnight, false), "2023-01-01T00:00:00Z");
///
/// let ts = parse_timestamp("1981-03-04T11:01:59.123Z")?;
/// assert_eq!(format_timestamp(ts, true), "1981-03-04T11:01:59.123Z");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn format_timestamp(timestamp: Timestamp, allow_short_form: bool) -> String {
    if allow_short_form {
        let datetime = Offset::UTC.to_datetime(timestamp);
        if datetime.time() == Time::midnight() {
            return datetime.date().to_string();
        }
    }

    // jiff renders a timestamp as RFC 3339 in UTC with the fraction
    // trimmed, which is exactly the full form.
    timestamp.to_string()
}
