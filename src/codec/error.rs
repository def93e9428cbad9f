//! Error type of the codec.

use crate::base::scan::ScanError;
use crate::base::wire::{FormError, ParseError};
use core::fmt;
use octseq::builder::ShortBuf;

//------------ Error ---------------------------------------------------------

/// An error happened while converting record data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input isn’t valid record data for its type.
    Form(FormError),

    /// A numeric field isn’t a number.
    BadNumber,

    /// A numeric field is too large for its width.
    Range,

    /// Memory for an owned copy of the data could not be allocated.
    OutOfMemory,

    /// The target buffer is too small.
    ShortBuf,

    /// The conversion isn’t available for the record type.
    NotImplemented,
}

impl Error {
    /// Creates a form error with the given diagnostic message.
    #[must_use]
    pub const fn form(msg: &'static str) -> Self {
        Error::Form(FormError::new(msg))
    }

    /// Returns whether this is a form error.
    #[must_use]
    pub fn is_form(&self) -> bool {
        matches!(*self, Error::Form(_))
    }
}

//--- From

impl From<FormError> for Error {
    fn from(err: FormError) -> Self {
        Error::Form(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::ShortInput => Error::form("short record data"),
            ParseError::Form(err) => Error::Form(err),
            ParseError::OutOfMemory => Error::OutOfMemory,
        }
    }
}

impl From<ScanError> for Error {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::Syntax(msg) => Error::form(msg),
            ScanError::BadNumber => Error::BadNumber,
            ScanError::Range => Error::Range,
            ScanError::UnexpectedEnd => Error::form("unexpected end of input"),
            ScanError::TrailingTokens => Error::form("trailing data"),
            ScanError::NotImplemented => Error::NotImplemented,
        }
    }
}

impl From<ShortBuf> for Error {
    fn from(_: ShortBuf) -> Self {
        Error::ShortBuf
    }
}

//--- Display and Error

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Form(ref err) => write!(f, "format error: {}", err),
            Error::BadNumber => f.write_str("bad number"),
            Error::Range => f.write_str("number out of range"),
            Error::OutOfMemory => f.write_str("out of memory"),
            Error::ShortBuf => f.write_str("buffer too short"),
            Error::NotImplemented => f.write_str("not implemented"),
        }
    }
}

impl std::error::Error for Error {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(
            Error::from(ParseError::ShortInput),
            Error::form("short record data")
        );
        assert_eq!(Error::from(ScanError::Range), Error::Range);
        assert_eq!(
            Error::from(ScanError::NotImplemented),
            Error::NotImplemented
        );
        assert!(Error::from(ScanError::TrailingTokens).is_form());
        assert_eq!(Error::from(ShortBuf), Error::ShortBuf);
        assert_eq!(
            Error::form("empty record data").to_string(),
            "format error: empty record data"
        );
    }
}
