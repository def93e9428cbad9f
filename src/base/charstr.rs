//! Character strings.
//!
//! The somewhat ill-named `<character-string>` is defined in [RFC 1035] as
//! binary information of up to 255 octets. As such, it doesn’t necessarily
//! contain (ASCII-) characters nor is it a string in a Rust-sense.
//!
//! In wire format, a character string is preceded by a single octet with
//! its length. In presentation format, it is a single token, quoted or not,
//! with `\X` and `\DDD` escapes for octets that aren’t printable ASCII.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::cursor::{copy_bytes, WireCursor};
use super::scan::{ScanError, Symbol, Token};
use super::wire::{Compose, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ CharStr -------------------------------------------------------

/// The content of a DNS character string.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Bytes")
)]
pub struct CharStr(Bytes);

impl CharStr {
    /// The maximum length of the content.
    pub const MAX_LEN: usize = 255;

    /// Creates a character string from its content.
    ///
    /// Returns an error if the content is too long.
    pub fn from_octets(octets: Bytes) -> Result<Self, CharStrError> {
        if octets.len() > Self::MAX_LEN {
            Err(CharStrError)
        } else {
            Ok(CharStr(octets))
        }
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, CharStrError> {
        Self::from_octets(Bytes::copy_from_slice(slice))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Takes a length-prefixed character string from the cursor.
    pub fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        let len = cursor.parse_u8()?;
        cursor.take_bytes(usize::from(len)).map(CharStr)
    }

    /// Converts the content of a token into a character string.
    pub fn from_token(token: &Token) -> Result<Self, ScanError> {
        let mut res = Vec::new();
        for symbol in token.symbols() {
            if res.len() == Self::MAX_LEN {
                return Err(ScanError::Syntax("long character string"));
            }
            res.push(symbol?.into_octet()?);
        }
        copy_bytes(&res)
            .map(CharStr)
            .map_err(|_| ScanError::Syntax("out of memory"))
    }

    /// Returns an object that displays the content without quotes.
    ///
    /// Spaces are escaped so that the result is a single token.
    #[must_use]
    pub fn display_unquoted(&self) -> impl fmt::Display + '_ {
        struct Unquoted<'a>(&'a [u8]);

        impl fmt::Display for Unquoted<'_> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                for &ch in self.0 {
                    fmt::Display::fmt(&Symbol::from_octet(ch), f)?;
                }
                Ok(())
            }
        }

        Unquoted(self.as_slice())
    }
}

//--- TryFrom

impl TryFrom<Bytes> for CharStr {
    type Error = CharStrError;

    fn try_from(octets: Bytes) -> Result<Self, Self::Error> {
        Self::from_octets(octets)
    }
}

//--- Compose

impl Compose for CharStr {
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        // The length is guaranteed to fit.
        (self.0.len() as u8).compose(target)?;
        target.append_slice(self.as_slice())
    }
}

//--- Display and Debug

/// Displays the content in double quotes.
impl fmt::Display for CharStr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"")?;
        for &ch in self.as_slice() {
            if ch == b' ' {
                f.write_str(" ")?;
            } else {
                fmt::Display::fmt(&Symbol::from_octet(ch), f)?;
            }
        }
        f.write_str("\"")
    }
}

impl fmt::Debug for CharStr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CharStr({})", self)
    }
}

//============ Error Types ===================================================

//------------ CharStrError --------------------------------------------------

/// A byte sequence does not represent a valid character string.
///
/// This can only mean that the sequence is longer than 255 bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CharStrError;

impl fmt::Display for CharStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("long character string")
    }
}

impl std::error::Error for CharStrError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_token() {
        let token = Token::new(r#"a b\"\\\255"#, true);
        assert_eq!(
            CharStr::from_token(&token).unwrap().as_slice(),
            b"a b\"\\\xff"
        );
        assert!(CharStr::from_token(&Token::new("", true)).unwrap().is_empty());
        assert!(CharStr::from_token(&Token::new("x".repeat(255), false)).is_ok());
        assert_eq!(
            CharStr::from_token(&Token::new("x".repeat(256), false)),
            Err(ScanError::Syntax("long character string"))
        );
        assert!(CharStr::from_token(&Token::new("\u{e4}", false)).is_err());
    }

    #[test]
    fn parse_and_compose() {
        let mut cursor = WireCursor::from_rdata(b"\x03foo\x00").unwrap();
        let foo = CharStr::parse(&mut cursor).unwrap();
        let empty = CharStr::parse(&mut cursor).unwrap();
        assert_eq!(foo.as_slice(), b"foo");
        assert!(empty.is_empty());
        assert!(cursor.is_empty());

        let mut buf = Vec::new();
        foo.compose(&mut buf).unwrap();
        empty.compose(&mut buf).unwrap();
        assert_eq!(buf, b"\x03foo\x00");

        let mut cursor = WireCursor::from_rdata(b"\x04foo").unwrap();
        assert_eq!(CharStr::parse(&mut cursor), Err(ParseError::ShortInput));
    }

    #[test]
    fn display() {
        let s = CharStr::from_slice(b"a b\"\\;\x00").unwrap();
        assert_eq!(s.to_string(), r#""a b\"\\\;\000""#);
        assert_eq!(s.display_unquoted().to_string(), r#"a\ b\"\\\;\000"#);
    }

    #[test]
    fn long_octets() {
        assert!(CharStr::from_slice(&[0; 255]).is_ok());
        assert_eq!(CharStr::from_slice(&[0; 256]), Err(CharStrError));
    }
}
