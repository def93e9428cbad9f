//! Record data for the TXT record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::charstr::CharStr;
use crate::base::cursor::WireCursor;
use crate::base::iana::Rtype;
use crate::base::rdata::RecordDataCodec;
use crate::base::scan::{ScanError, Tokens};
use crate::base::wire::{Compose, ParseError};
use core::{fmt, slice};
use octseq::builder::OctetsBuilder;

//------------ Txt ----------------------------------------------------------

/// TXT record data.
///
/// TXT records hold descriptive text. While it may appear as a single text,
/// it internally consists of a sequence of one or more character strings.
/// The type holds these strings in order.
///
/// The TXT record type is defined in [RFC 1035, section 3.3.14][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.14
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "TxtFields")
)]
pub struct Txt {
    strings: Vec<CharStr>,
}

impl Txt {
    /// Creates new TXT record data from its character strings.
    ///
    /// Returns an error if there are no strings.
    pub fn new(strings: Vec<CharStr>) -> Result<Self, TxtError> {
        if strings.is_empty() {
            Err(TxtError(()))
        } else {
            Ok(Txt { strings })
        }
    }

    /// Creates TXT record data from a single string.
    #[must_use]
    pub fn from_charstr(string: CharStr) -> Self {
        Txt {
            strings: vec![string],
        }
    }

    /// Returns an iterator over the character strings.
    pub fn iter(&self) -> slice::Iter<'_, CharStr> {
        self.strings.iter()
    }

    /// Returns the content of all strings concatenated.
    #[must_use]
    pub fn text(&self) -> Vec<u8> {
        self.strings
            .iter()
            .flat_map(|s| s.as_slice().iter().copied())
            .collect()
    }
}

//--- IntoIterator

impl<'a> IntoIterator for &'a Txt {
    type Item = &'a CharStr;
    type IntoIter = slice::Iter<'a, CharStr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- Deserialize

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TxtFields {
    strings: Vec<CharStr>,
}

#[cfg(feature = "serde")]
impl TryFrom<TxtFields> for Txt {
    type Error = TxtError;

    fn try_from(fields: TxtFields) -> Result<Self, Self::Error> {
        Txt::new(fields.strings)
    }
}

//--- RecordDataCodec

impl RecordDataCodec for Txt {
    const RTYPE: Rtype = Rtype::TXT;

    fn parse_rdata(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        let mut strings = Vec::new();
        while !cursor.is_empty() {
            strings.push(CharStr::parse(cursor)?);
        }
        Txt::new(strings).map_err(|_| ParseError::form_error("empty TXT"))
    }

    fn scan_rdata(tokens: &mut Tokens<'_>) -> Result<Self, ScanError> {
        let mut strings = vec![tokens.scan_charstr()?];
        while !tokens.is_exhausted()? {
            strings.push(tokens.scan_charstr()?);
        }
        Ok(Txt { strings })
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        for string in &self.strings {
            string.compose(target)?;
        }
        Ok(())
    }
}

//--- Display

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for string in &self.strings {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(string, f)?;
        }
        Ok(())
    }
}

//============ Error Types ===================================================

//------------ TxtError ------------------------------------------------------

/// TXT record data needs at least one character string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TxtError(());

impl fmt::Display for TxtError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("empty TXT record")
    }
}

impl std::error::Error for TxtError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Class;
    use crate::base::rdata::test::{
        test_compose_parse, test_display_scan, test_scan,
    };
    use crate::rdata::RecordData;

    fn txt(strings: &[&[u8]]) -> Txt {
        Txt::new(
            strings
                .iter()
                .map(|s| CharStr::from_slice(s).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn txt_compose_parse_scan() {
        let rdata = txt(&[b"foo", b"bar baz", b""]);
        test_compose_parse(&rdata);
        test_scan(&["foo", "\"bar baz\"", "\"\""], &rdata);
        test_display_scan(&rdata);
        assert_eq!(rdata.to_string(), "\"foo\" \"bar baz\" \"\"");
        assert_eq!(rdata.text(), b"foobar baz");
    }

    #[test]
    fn txt_empty() {
        assert!(Txt::new(Vec::new()).is_err());
        let mut cursor = WireCursor::from_rdata(b"").unwrap();
        assert!(Txt::parse_rdata(&mut cursor).is_err());
    }

    #[test]
    fn txt_empty_struct_rejected() {
        let mut buf = vec![0; 64];
        let err = crate::codec::from_struct(
            &RecordData::from(Txt { strings: Vec::new() }),
            Class::IN,
            &mut buf,
        )
        .unwrap_err();
        assert!(err.is_form());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn txt_deserialize_needs_strings() {
        assert!(serde_json::from_str::<Txt>(r#"{"strings":[]}"#).is_err());
        let rdata =
            serde_json::from_str::<Txt>(r#"{"strings":[[102,111,111]]}"#)
                .unwrap();
        assert_eq!(rdata.text(), b"foo");
    }

    #[test]
    fn txt_short_string() {
        let mut cursor = WireCursor::from_rdata(b"\x03foo\x02a").unwrap();
        assert_eq!(Txt::parse_rdata(&mut cursor), Err(ParseError::ShortInput));
    }
}
