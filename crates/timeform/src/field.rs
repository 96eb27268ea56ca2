// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use jiff::Timestamp;

use crate::{Error, format_timestamp, parse_timestamp};

// Token that decodes to an absent field, alongside the empty string.
const NULL_SENTINEL: &str = "null";

/// A document field holding one optional UTC timestamp, with the
/// serialization policy selected by the `COMPACT` parameter.
///
/// Decoding accepts every shape [`parse_timestamp`] accepts, plus the
/// sentinel tokens (the empty string and the literal `null`) which decode
/// to an absent field. Encoding renders an absent field as the empty
/// string; a held timestamp is rendered by [`format_timestamp`] with the
/// policy flag passed through, so `TimeField<true>` emits the date-only
/// form when the time of day is exactly midnight and `TimeField<false>`
/// always emits the full form.
///
/// Use the [`CompactTime`] and [`FullTime`] aliases rather than naming
/// the parameter directly.
///
/// # Serialization and deserialization
///
/// `TimeField` implements the `Serialize` and `Deserialize` traits from
/// the `serde_core` crate. The timestamp round-trips through a string
/// token; document `null` decodes to an absent field, and any non-string
/// token is rejected by the document layer. The serialization support is
/// available when the `serde` feature is enabled.
///
/// # Examples
///
/// ```
/// use timeform::{CompactTime, FullTime};
///
/// let created: CompactTime = "2023-01-01".parse()?;
/// assert_eq!(created.to_string(), "2023-01-01");
///
/// let shipped: FullTime = "2023-01-01".parse()?;
/// assert_eq!(shipped.to_string(), "2023-01-01T00:00:00Z");
///
/// let missing: CompactTime = "null".parse()?;
/// assert!(missing.is_absent());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeField<const COMPACT: bool>(Option<Timestamp>);

/// A field that emits the date-only form when the held timestamp falls
/// exactly on midnight UTC.
pub type CompactTime = TimeField<true>;

/// A field that always emits the full timestamp form, for interchange
/// with systems that do not understand abbreviated forms.
pub type FullTime = TimeField<false>;

impl<const COMPACT: bool> TimeField<COMPACT> {
    /// A field holding no timestamp. Encodes as the empty string.
    pub const ABSENT: Self = Self(None);

    /// Creates a field holding `timestamp`.
    #[must_use]
    pub const fn new(timestamp: Timestamp) -> Self {
        Self(Some(timestamp))
    }

    /// Returns the held timestamp, or `None` when the field is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeform::CompactTime;
    ///
    /// let field: CompactTime = "1981-03-04T20:45:11Z".parse()?;
    /// assert_eq!(field.get().map(|ts| ts.as_second()), Some(352586711));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub const fn get(self) -> Option<Timestamp> {
        self.0
    }

    /// Returns `true` when the field holds no timestamp.
    #[must_use]
    pub const fn is_absent(self) -> bool {
        self.0.is_none()
    }
}

impl<const COMPACT: bool> FromStr for TimeField<COMPACT> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == NULL_SENTINEL {
            return Ok(Self(None));
        }

        parse_timestamp(s).map(|timestamp| Self(Some(timestamp)))
    }
}

impl<const COMPACT: bool> Display for TimeField<COMPACT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(timestamp) => f.write_str(&format_timestamp(timestamp, COMPACT)),
            None => Ok(()),
        }
    }
}

impl<const COMPACT: bool> From<Timestamp> for TimeField<COMPACT> {
    fn from(value: Timestamp) -> Self {
        Self::new(value)
    }
}

impl From<CompactTime> for FullTime {
    fn from(value: CompactTime) -> Self {
        Self(value.0)
    }
}

impl From<FullTime> for CompactTime {
    fn from(value: FullTime) -> Self {
        Self(value.0)
    }
}

#[cfg(any(feature = "serde", test))]
impl<const COMPACT: bool> serde_core::Serialize for TimeField<COMPACT> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde_core::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(any(feature = "serde", test))]
impl<'de, const COMPACT: bool> serde_core::Deserialize<'de> for TimeField<COMPACT> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde_core::Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(token) => token.parse::<Self>().map_err(serde_core::de::Error::custom),
            None => Ok(Self(None)),
        }
    }
}
