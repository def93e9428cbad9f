//! Resource record data.
//!
//! Each resource record type has it’s own definition of the content and
//! formatting of its data. This module provides the basics for implementing
//! specific types for this record data. The concrete implementations for
//! well-known record types live in the top-level [rdata][crate::rdata]
//! module.
//!
//! Every such type implements [`RecordDataCodec`] which ties it to its
//! record type and provides the conversions from wire format and
//! presentation format and back into wire format.
//!
//! The module also provides a type, [`UnknownRecordData`], that can be used
//! to deal with record types whose specification is not known (or has not
//! been implemented yet), as well as the generic presentation format of
//! [RFC 3597].
//!
//! [RFC 3597]: https://tools.ietf.org/html/rfc3597

use super::cursor::{copy_bytes, WireCursor, MAX_RDLEN};
use super::iana::Rtype;
use super::name::Compression;
use super::scan::{ScanError, Token, Tokens};
use super::wire::ParseError;
use crate::utils::base16;
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;

//----------- RecordDataCodec ------------------------------------------------

/// A type representing the record data of one record type.
pub trait RecordDataCodec: Sized + fmt::Display {
    /// The record type of the data.
    const RTYPE: Rtype;

    /// Whether domain names in the data may be compressed.
    ///
    /// Only the record types of RFC 1035 permit compression.
    const COMPRESSION: Compression = Compression::Forbidden;

    /// Parses the record data.
    ///
    /// The cursor is positioned at the beginning of the record data and is
    /// limited to the length of the data. The caller deals with data left in
    /// the cursor afterwards.
    fn parse_rdata(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError>;

    /// Scans the record data from its presentation format.
    ///
    /// The caller deals with tokens left afterwards.
    fn scan_rdata(tokens: &mut Tokens<'_>) -> Result<Self, ScanError>;

    /// Appends the uncompressed wire format of the record data.
    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

//------------ UnknownRecordData ---------------------------------------------

/// A type for any type of record data.
///
/// This type accepts any record type and stores the plain, unparsed record
/// data as an octets sequence.
///
/// Because some record types allow compressed domain names in their record
/// data, this type cannot be used safely with these record types. For these
/// record types, the structure of the content needs to be known.
#[derive(Clone, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnknownRecordData {
    /// The record type of this data.
    rtype: Rtype,

    /// The record data.
    data: Bytes,
}

impl UnknownRecordData {
    /// Creates generic record data from a bytes value contain the data.
    pub fn from_octets(
        rtype: Rtype,
        data: Bytes,
    ) -> Result<Self, LongRecordData> {
        if data.len() > MAX_RDLEN {
            Err(LongRecordData::new())
        } else {
            Ok(UnknownRecordData { rtype, data })
        }
    }

    /// Returns the record type this data is for.
    #[must_use]
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns a reference to the record data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Takes all the remaining record data from the cursor.
    pub fn parse(
        rtype: Rtype,
        cursor: &mut WireCursor<'_>,
    ) -> Result<Self, ParseError> {
        copy_bytes(cursor.take_rest()).map(|data| Self { rtype, data })
    }

    /// Scans the record data.
    ///
    /// The data has to be in the generic format starting with `\#`.
    pub fn scan(
        rtype: Rtype,
        tokens: &mut Tokens<'_>,
    ) -> Result<Self, ScanError> {
        let data = scan_generic(tokens)?;
        Ok(UnknownRecordData {
            rtype,
            data: data.into(),
        })
    }

    pub fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.data.as_ref())
    }
}

//--- Display

impl fmt::Display for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_generic(&self.data, f)
    }
}

//--- Debug

impl fmt::Debug for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("UnknownRecordData(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

//------------ Generic Presentation Format -----------------------------------

/// Returns whether the token is the `\#` marker of the generic format.
#[must_use]
pub fn is_generic_marker(token: &Token) -> bool {
    !token.is_quoted() && token.as_str() == "\\#"
}

/// Scans record data in the generic format.
///
/// This is the `\#` marker, the length of the data as a decimal number, and
/// the data itself in hex digits, possibly spread over several tokens.
pub fn scan_generic(tokens: &mut Tokens<'_>) -> Result<Vec<u8>, ScanError> {
    let marker = tokens.expect_token()?;
    if !is_generic_marker(&marker) {
        return Err(ScanError::Syntax("'\\#' expected"));
    }
    scan_generic_without_marker(tokens)
}

/// Scans record data in generic format after the marker.
pub fn scan_generic_without_marker(
    tokens: &mut Tokens<'_>,
) -> Result<Vec<u8>, ScanError> {
    let len = tokens.scan_u16()?;
    let mut decoder = base16::Decoder::new();
    while let Some(token) = tokens.next_token()? {
        for ch in token.as_str().chars() {
            decoder
                .push(ch)
                .map_err(|_| ScanError::Syntax("illegal hex data"))?;
        }
    }
    let data = decoder
        .finalize()
        .map_err(|_| ScanError::Syntax("uneven number of hex digits"))?;
    if data.len() != usize::from(len) {
        return Err(ScanError::Syntax("generic data has incorrect length"));
    }
    Ok(data)
}

/// Writes record data in generic format.
pub fn fmt_generic(data: &[u8], f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "\\# {}", data.len())?;
    if !data.is_empty() {
        f.write_str(" ")?;
        base16::display(data, f)?;
    }
    Ok(())
}

//------------ LongRecordData ------------------------------------------------

/// The octets sequence to be used for record data is too long.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongRecordData(());

impl LongRecordData {
    pub(crate) fn new() -> Self {
        LongRecordData(())
    }
}

impl fmt::Display for LongRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("record data too long")
    }
}

impl std::error::Error for LongRecordData {}

//============ Testing ======================================================
