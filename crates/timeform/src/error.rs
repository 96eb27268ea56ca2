// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

/// The result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error produced when a timestamp token does not match any of the
/// accepted shapes.
///
/// Every failure is an invalid-format failure: either the token length
/// selects none of the recognized layouts, or one of the layout
/// sub-parsers (date, time, fraction, or offset) rejects the content.
/// There is no partial or best-effort result.
///
/// # Limited introspection
///
/// Other than implementing the [`std::error::Error`] and [`core::fmt::Debug`]
/// traits, this error type currently provides no introspection
/// capabilities. When a sub-parser rejected the token, its error is
/// exposed through [`source`][std::error::Error::source].
///
/// # Examples
///
/// ```
/// use timeform::parse_timestamp;
///
/// parse_timestamp("not a timestamp").unwrap_err();
/// ```
#[derive(Debug)]
pub struct Error(ErrorKind);

#[derive(Debug)]
enum ErrorKind {
    InvalidFormat,
    Parse(jiff::Error),
}

impl Error {
    pub(crate) const fn invalid_format() -> Self {
        Self(ErrorKind::InvalidFormat)
    }

    pub(crate) const fn parse(error: jiff::Error) -> Self {
        Self(ErrorKind::Parse(error))
    }

    #[cfg(test)]
    const fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ErrorKind::InvalidFormat => write!(f, "invalid time format"),
            ErrorKind::Parse(err) => write!(f, "invalid time format: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.0 {
            ErrorKind::InvalidFormat => None,
            ErrorKind::Parse(err) => Some(err),
        }
    }
}
