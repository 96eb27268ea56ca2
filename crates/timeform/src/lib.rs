// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Parsing, UTC normalization, and serialization of a fixed family of
//! ISO 8601 timestamp forms.
//!
//! # Quick Start
//!
//! ```
//! use timeform::{format_timestamp, parse_timestamp};
//!
//! let ts = parse_timestamp("1981-03-04T20:45:11+03:00")?;
//! assert_eq!(ts.to_string(), "1981-03-04T17:45:11Z");
//!
//! assert_eq!(format_timestamp(ts, false), "1981-03-04T17:45:11Z");
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Why?
//!
//! Interchange documents rarely carry one timestamp shape. The same feed
//! mixes plain dates, minute-precision times, and full timestamps with
//! fractions and offsets, and a lenient parser that guesses among
//! arbitrary grammars is both slow and ambiguous. This crate instead
//! recognizes a closed family of six shapes, selected by exact token
//! length before any content is inspected, so dispatch is a single O(1)
//! branch rather than trial-and-error matching:
//!
//! | Token shape | Example | Parsed as (UTC) |
//! |---|---|---|
//! | `YYYY-MM-DD` | `2023-01-01` | `2023-01-01T00:00:00Z` |
//! | `YYYY-MM-DDTHH:MM` | `1981-03-04T23:45` | `1981-03-04T23:45:00Z` |
//! | `YYYY-MM-DDTHH:MM:SS` | `1981-03-04T20:45:11` | `1981-03-04T20:45:11Z` |
//! | `YYYY-MM-DDTHH:MM:SS` + zone | `1981-03-04T20:45:11+03:00` | `1981-03-04T17:45:11Z` |
//! | `YYYY-MM-DDTHH:MM:SS.f+` | `1981-03-04T11:01:59.123` | `1981-03-04T11:01:59.123Z` |
//! | `YYYY-MM-DDTHH:MM:SS.f+` + zone | `1981-03-04T11:01:59.123-03:00` | `1981-03-04T14:01:59.123Z` |
//!
//! Every parsed timestamp is normalized to UTC, so all results compare
//! directly. Tokens matching none of the shapes fail with a single
//! invalid-format error; nothing is parsed on a best-effort basis.
//!
//! # Overview
//!
//! - [`parse_timestamp`] - Parses a token in one of the accepted shapes
//!   into a UTC [`jiff::Timestamp`].
//! - [`format_timestamp`] - Serializes a timestamp into the full form, or
//!   the date-only short form when allowed and the time of day is exactly
//!   midnight UTC.
//! - [`TimeField`] - A document field holding one optional timestamp,
//!   generic over the short-form policy. Use it through the
//!   [`CompactTime`] and [`FullTime`] aliases.
//! - [`Error`] - The single invalid-format error. Provides limited
//!   introspection capabilities.
//!
//! # Document fields
//!
//! The field types plug the parser into structured documents. Both accept
//! every input shape plus the absent sentinels (the empty string and the
//! literal `null`); they differ only in how they encode:
//!
//! ```
//! use timeform::{CompactTime, FullTime};
//!
//! let created: CompactTime = "2023-01-01".parse()?;
//! assert_eq!(created.to_string(), "2023-01-01");
//!
//! let shipped: FullTime = "2023-01-01".parse()?;
//! assert_eq!(shipped.to_string(), "2023-01-01T00:00:00Z");
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//!
//! This crate provides one optional feature that can be enabled in your
//! `Cargo.toml`:
//!
//! - **`serde`** - Adds serialization and deserialization support for the
//!   field types via [serde](https://serde.rs/). The timestamp
//!   round-trips through a string token; document `null` and the sentinel
//!   strings decode to an absent field. See the `fields` example.

mod error;
mod field;
mod parse;
mod serialize;

pub use error::{Error, Result};
pub use field::{CompactTime, FullTime, TimeField};
pub use parse::parse_timestamp;
pub use serialize::format_timestamp;
