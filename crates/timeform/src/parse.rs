// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::Timestamp;
use jiff::civil::{Date, DateTime, Time};
use jiff::tz::Offset;

use crate::{Error, Result};

// Layouts for the accepted token shapes, in strptime syntax.
const LAYOUT_DATE: &str = "%Y-%m-%d";
const LAYOUT_MINUTES: &str = "%Y-%m-%dT%H:%M";
const LAYOUT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const LAYOUT_SECONDS_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%:z";
const LAYOUT_SUBSEC: &str = "%Y-%m-%dT%H:%M:%S%.f";
const LAYOUT_SUBSEC_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

// Token lengths that select a layout outright.
const LEN_DATE: usize = "1970-01-01".len();
const LEN_MINUTES: usize = "1970-01-01T00:00".len();
const LEN_SECONDS: usize = "1970-01-01T00:00:00".len();

/// Parses a timestamp token in one of the accepted shapes into a
/// UTC [`Timestamp`].
///
/// The accepted shapes, selected by exact token length before any
/// content is inspected:
///
/// | Token shape | Example | Parsed as (UTC) |
/// |---|---|---|
/// | `YYYY-MM-DD` | `2023-01-01` | `2023-01-01T00:00:00Z` |
/// | `YYYY-MM-DDTHH:MM` | `1981-03-04T23:45` | `1981-03-04T23:45:00Z` |
/// | `YYYY-MM-DDTHH:MM:SS` | `1981-03-04T20:45:11` | `1981-03-04T20:45:11Z` |
/// | `YYYY-MM-DDTHH:MM:SS` + zone | `1981-03-04T20:45:11+03:00` | `1981-03-04T17:45:11Z` |
/// | `YYYY-MM-DDTHH:MM:SS.f+` | `1981-03-04T11:01:59.123` | `1981-03-04T11:01:59.123Z` |
/// | `YYYY-MM-DDTHH:MM:SS.f+` + zone | `1981-03-04T11:01:59.123-03:00` | `1981-03-04T14:01:59.123Z` |
///
/// The zone suffix is either `Z` or a numeric `±HH:MM` offset. Missing
/// time components default to zero and a missing zone defaults to UTC.
///
/// # UTC and time zones
///
/// The result is always normalized to UTC: a token carrying a non-zero
/// offset has its wall-clock time shifted, so all parsed timestamps are
/// directly comparable.
///
/// # Examples
///
/// ```
/// use timeform::parse_timestamp;
///
/// let ts = parse_timestamp("2023-01-01")?;
/// assert_eq!(ts.to_string(), "2023-01-01T00:00:00Z");
///
/// let ts = parse_timestamp("1981-03-04T20:45:11+03:00")?;
/// assert_eq!(ts.to_string(), "1981-03-04T17:45:11Z");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns an error if the token length matches none of the accepted
/// shapes, or if any date, time, fraction, or offset component is
/// malformed. There is no partial recovery.
pub fn parse_timestamp(token: &str) -> Result<Timestamp> {
    match token.len() {
        LEN_DATE => {
            let date = Date::strptime(LAYOUT_DATE, token).map_err(Error::parse)?;
            to_utc(date.to_datetime(Time::midnight()))
        }
        LEN_MINUTES => to_utc(DateTime::strptime(LAYOUT_MINUTES, token).map_err(Error::parse)?),
        LEN_SECONDS => to_utc(DateTime::strptime(LAYOUT_SECONDS, token).map_err(Error::parse)?),
        len if len < LEN_SECONDS => Err(Error::invalid_format()),
        _ => parse_suffixed(token),
    }
}

// Tokens longer than the seconds shape carry a subsecond part, a zone
// suffix, or both. The byte right after the seconds decides which.
fn parse_suffixed(token: &str) -> Result<Timestamp> {
    let bytes = token.as_bytes();
    if bytes[LEN_SECONDS] == b'.' {
        if bytes[LEN_SECONDS + 1..].iter().any(|&b| matches!(b, b'Z' | b'+' | b'-')) {
            parse_zoned(LAYOUT_SUBSEC, LAYOUT_SUBSEC_OFFSET, token)
        } else {
            to_utc(DateTime::strptime(LAYOUT_SUBSEC, token).map_err(Error::parse)?)
        }
    } else {
        parse_zoned(LAYOUT_SECONDS, LAYOUT_SECONDS_OFFSET, token)
    }
}

// A trailing `Z` goes through the civil layout with a zero offset; a
// numeric offset goes through the offset layout and is shifted to UTC.
fn parse_zoned(civil_layout: &str, offset_layout: &str, token: &str) -> Result<Timestamp> {
    match token.strip_suffix('Z') {
        Some(prefix) => to_utc(DateTime::strptime(civil_layout, prefix).map_err(Error::parse)?),
        None => Timestamp::strptime(offset_layout, token).map_err(Error::parse),
    }
}

fn to_utc(datetime: DateTime) -> Result<Timestamp> {
    Offset::UTC.to_timestamp(datetime).map_err(Error::parse)
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn parsed(token: &str) -> String {
        parse_timestamp(token).unwrap().to_string()
    }

    #[test]
    fn parse_date_only() {
        assert_eq!(parsed("2023-01-01"), "2023-01-01T00:00:00Z");
    }

    #[test]
    fn parse_minutes() {
        assert_eq!(parsed("1981-03-04T23:45"), "1981-03-04T23:45:00Z");
    }

    #[test]
    fn parse_seconds() {
        assert_eq!(parsed("1981-03-04T20:45:11"), "1981-03-04T20:45:11Z");
    }

    #[test]
    fn parse_seconds_zulu() {
        assert_eq!(parsed("1981-03-04T20:45:11Z"), "1981-03-04T20:45:11Z");
    }

    #[test]
    fn parse_seconds_offset_applied() {
        assert_eq!(parsed("1981-03-04T20:45:11+03:00"), "1981-03-04T17:45:11Z");
    }

    #[test]
    fn parse_seconds_negative_offset_crosses_midnight() {
        assert_eq!(parsed("1981-03-04T20:45:11-03:30"), "1981-03-05T00:15:11Z");
    }

    #[test]
    fn parse_subsec_implicit_utc() {
        assert_eq!(parsed("1981-03-04T11:01:59.123"), "1981-03-04T11:01:59.123Z");
    }

    #[test]
    fn parse_subsec_zulu() {
        assert_eq!(parsed("1981-03-04T11:01:59.123Z"), "1981-03-04T11:01:59.123Z");
    }

    #[test]
    fn parse_subsec_offset_applied() {
        assert_eq!(parsed("1981-03-04T11:01:59.123-03:00"), "1981-03-04T14:01:59.123Z");
    }

    #[test]
    fn parse_subsec_full_precision() {
        assert_eq!(
            parsed("1981-03-04T11:01:59.123456789+00:00"),
            "1981-03-04T11:01:59.123456789Z"
        );
    }

    #[test]
    fn parse_empty() {
        parse_timestamp("").unwrap_err();
    }

    #[test]
    fn parse_slash_date() {
        parse_timestamp("1/1/2023").unwrap_err();
    }

    #[test]
    fn parse_unrecognized_lengths() {
        // Everything strictly shorter than the seconds shape is selected
        // by exact length alone.
        for token in ["2023-01-1", "2023-01-011", "2023-01-01T00:0", "2023-01-01T00:00:0"] {
            parse_timestamp(token).unwrap_err();
        }
    }

    #[test]
    fn parse_out_of_range_components() {
        parse_timestamp("2023-41-01").unwrap_err();
        parse_timestamp("2023-01-32").unwrap_err();
        parse_timestamp("2023-01-01T25:00").unwrap_err();
        parse_timestamp("2023-02-29T00:00:00").unwrap_err();
    }

    #[test]
    fn parse_space_separator_rejected() {
        parse_timestamp("2023-01-01 00:00").unwrap_err();
        parse_timestamp("2023-01-01 00:00:00Z").unwrap_err();
    }

    #[test]
    fn parse_lowercase_zulu_rejected() {
        parse_timestamp("2023-01-01T00:00:00z").unwrap_err();
    }

    #[test]
    fn parse_offset_requires_colon() {
        parse_timestamp("2023-01-01T00:00:00+0300").unwrap_err();
        parse_timestamp("2023-01-01T00:00:00+03").unwrap_err();
    }

    #[test]
    fn parse_empty_fraction_rejected() {
        parse_timestamp("2023-01-01T00:00:00.").unwrap_err();
        parse_timestamp("2023-01-01T00:00:00.Z").unwrap_err();
    }

    #[test]
    fn parse_trailing_garbage_rejected() {
        parse_timestamp("2023-01-01T00:00:00abc").unwrap_err();
        parse_timestamp("2023-01-01T00:00:00.123x").unwrap_err();
        parse_timestamp("2023-01-01T00:00:00ZZ").unwrap_err();
    }

    #[test]
    fn parse_offset_inside_fraction_rejected() {
        parse_timestamp("2023-01-01T00:00:00.1Z3").unwrap_err();
    }

    #[test]
    fn parse_normalizes_to_comparable_instants() {
        let utc = parse_timestamp("1981-03-04T17:45:11Z").unwrap();
        let offset = parse_timestamp("1981-03-04T20:45:11+03:00").unwrap();

        assert_eq!(utc, offset);
    }
}
