//! Record data for the NULL record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::cursor::{copy_bytes, WireCursor, MAX_RDLEN};
use crate::base::iana::Rtype;
use crate::base::rdata::{fmt_generic, LongRecordData, RecordDataCodec};
use crate::base::scan::{ScanError, Tokens};
use crate::base::wire::ParseError;
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ Null ---------------------------------------------------------

/// Null record data.
///
/// Null records can contain whatever data. They are experimental and not
/// allowed in zone files. Consequently, the only presentation format is
/// the generic one.
///
/// The Null record type is defined in [RFC 1035, section 3.3.10][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.10
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Null {
    data: Bytes,
}

impl Null {
    /// Creates new NULL record data from the given octets.
    ///
    /// The function will fail if `data` is longer than 65,535 octets.
    pub fn from_octets(data: Bytes) -> Result<Self, LongRecordData> {
        if data.len() > MAX_RDLEN {
            Err(LongRecordData::new())
        } else {
            Ok(Null { data })
        }
    }

    /// The raw content of the record.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }
}

//--- RecordDataCodec

impl RecordDataCodec for Null {
    const RTYPE: Rtype = Rtype::NULL;

    fn parse_rdata(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        copy_bytes(cursor.take_rest()).map(|data| Null { data })
    }

    fn scan_rdata(_tokens: &mut Tokens<'_>) -> Result<Self, ScanError> {
        Err(ScanError::Syntax("NULL records have no presentation format"))
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.data.as_ref())
    }
}

//--- Display

impl fmt::Display for Null {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_generic(&self.data, f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::test_compose_parse;

    #[test]
    fn null_compose_parse() {
        let rdata = Null::from_octets(Bytes::from_static(b"foo")).unwrap();
        test_compose_parse(&rdata);
        test_compose_parse(&Null::default());
        assert_eq!(rdata.to_string(), r"\# 3 666F6F");
    }

    #[test]
    fn null_too_long() {
        assert!(Null::from_octets(vec![0; MAX_RDLEN + 1].into()).is_err());
    }
}
