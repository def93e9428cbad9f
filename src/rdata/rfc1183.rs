//! Record data from [RFC 1183]: ISDN records.
//!
//! RFC 1183 defines a set of experimental record types. Of these, only the
//! ISDN record is implemented here.
//!
//! [RFC 1183]: https://tools.ietf.org/html/rfc1183

use crate::base::charstr::CharStr;
use crate::base::cursor::WireCursor;
use crate::base::iana::Rtype;
use crate::base::rdata::RecordDataCodec;
use crate::base::scan::{ScanError, Tokens};
use crate::base::wire::{Compose, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ Isdn ---------------------------------------------------------

/// Isdn record data.
///
/// The ISDN record maps a name to an ISDN telephone number. It consists of
/// the ISDN address and an optional subaddress, both character strings.
///
/// The ISDN record type is defined in [RFC 1183, section 3.2][1].
///
/// [1]: https://tools.ietf.org/html/rfc1183#section-3.2
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Isdn {
    address: CharStr,
    subaddress: Option<CharStr>,
}

impl Isdn {
    #[must_use]
    pub fn new(address: CharStr, subaddress: Option<CharStr>) -> Self {
        Isdn {
            address,
            subaddress,
        }
    }

    #[must_use]
    pub fn address(&self) -> &CharStr {
        &self.address
    }

    #[must_use]
    pub fn subaddress(&self) -> Option<&CharStr> {
        self.subaddress.as_ref()
    }
}

//--- RecordDataCodec

impl RecordDataCodec for Isdn {
    const RTYPE: Rtype = Rtype::ISDN;

    fn parse_rdata(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        let address = CharStr::parse(cursor)?;
        let subaddress = if cursor.is_empty() {
            None
        } else {
            Some(CharStr::parse(cursor)?)
        };
        Ok(Self::new(address, subaddress))
    }

    fn scan_rdata(tokens: &mut Tokens<'_>) -> Result<Self, ScanError> {
        let address = tokens.scan_charstr()?;
        let subaddress = if tokens.is_exhausted()? {
            None
        } else {
            Some(tokens.scan_charstr()?)
        };
        Ok(Self::new(address, subaddress))
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.address.compose(target)?;
        if let Some(subaddress) = self.subaddress.as_ref() {
            subaddress.compose(target)?;
        }
        Ok(())
    }
}

//--- Display

impl fmt::Display for Isdn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.address, f)?;
        if let Some(subaddress) = self.subaddress.as_ref() {
            write!(f, " {}", subaddress)?;
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{
        test_compose_parse, test_display_scan, test_scan,
    };

    #[test]
    fn isdn_compose_parse_scan() {
        let rdata = Isdn::new(
            CharStr::from_slice(b"150862028003217").unwrap(),
            Some(CharStr::from_slice(b"004").unwrap()),
        );
        test_compose_parse(&rdata);
        test_scan(&["150862028003217", "004"], &rdata);
        test_display_scan(&rdata);

        let rdata =
            Isdn::new(CharStr::from_slice(b"150862028003217").unwrap(), None);
        test_compose_parse(&rdata);
        test_scan(&["\"150862028003217\""], &rdata);
        test_display_scan(&rdata);
    }

    #[test]
    fn isdn_wire() {
        let mut cursor = WireCursor::from_rdata(b"\x01\x01\x00").unwrap();
        let isdn = Isdn::parse_rdata(&mut cursor).unwrap();
        assert_eq!(isdn.address().as_slice(), b"\x01");
        assert!(isdn.subaddress().unwrap().is_empty());

        let mut cursor = WireCursor::from_rdata(b"\x01").unwrap();
        assert!(Isdn::parse_rdata(&mut cursor).is_err());
        let mut cursor = WireCursor::from_rdata(b"\x01\x01\x01").unwrap();
        assert!(Isdn::parse_rdata(&mut cursor).is_err());
    }
}
