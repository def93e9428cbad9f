//! Record data from [RFC 7477]: child-to-parent synchronization.
//!
//! This RFC defines the CSYNC record type.
//!
//! [RFC 7477]: https://tools.ietf.org/html/rfc7477

use super::rfc4034::RtypeBitmap;
use crate::base::cursor::WireCursor;
use crate::base::iana::Rtype;
use crate::base::rdata::RecordDataCodec;
use crate::base::scan::{ScanError, Tokens};
use crate::base::wire::{Compose, Parse, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ Csync --------------------------------------------------------

/// Csync record data.
///
/// The CSYNC record lets a child zone tell its parent which records should
/// be copied into the parent zone. It consists of the SOA serial of the
/// child zone, flags, and a type bitmap of the records to synchronize. In
/// contrast to NSEC, the bitmap may be empty.
///
/// The CSYNC record type is defined in [RFC 7477, section 2.1][1].
///
/// [1]: https://tools.ietf.org/html/rfc7477#section-2.1
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Csync {
    serial: u32,
    flags: u16,
    types: RtypeBitmap,
}

impl Csync {
    /// The flag requesting that the SOA serial is checked.
    pub const FLAG_IMMEDIATE: u16 = 0x0001;

    /// The flag requesting that the SOA minimum is used.
    pub const FLAG_SOAMINIMUM: u16 = 0x0002;

    #[must_use]
    pub fn new(serial: u32, flags: u16, types: RtypeBitmap) -> Self {
        Csync {
            serial,
            flags,
            types,
        }
    }

    #[must_use]
    pub fn serial(&self) -> u32 {
        self.serial
    }

    #[must_use]
    pub fn flags(&self) -> u16 {
        self.flags
    }

    #[must_use]
    pub fn immediate(&self) -> bool {
        self.flags & Self::FLAG_IMMEDIATE != 0
    }

    #[must_use]
    pub fn soa_minimum(&self) -> bool {
        self.flags & Self::FLAG_SOAMINIMUM != 0
    }

    #[must_use]
    pub fn types(&self) -> &RtypeBitmap {
        &self.types
    }
}

//--- RecordDataCodec

impl RecordDataCodec for Csync {
    const RTYPE: Rtype = Rtype::CSYNC;

    fn parse_rdata(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        Ok(Self::new(
            u32::parse(cursor)?,
            u16::parse(cursor)?,
            RtypeBitmap::parse(cursor, true)?,
        ))
    }

    fn scan_rdata(tokens: &mut Tokens<'_>) -> Result<Self, ScanError> {
        Ok(Self::new(
            tokens.scan_u32()?,
            tokens.scan_u16()?,
            RtypeBitmap::scan(tokens, true)?,
        ))
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.serial.compose(target)?;
        self.flags.compose(target)?;
        self.types.compose(target)
    }
}

//--- Display

impl fmt::Display for Csync {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.serial, self.flags)?;
        if !self.types.is_empty() {
            write!(f, " {}", self.types)?;
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
    fn csync_compose_parse_scan() {
        let rdata = Csync::new(
            66,
            Csync::FLAG_IMMEDIATE,
            RtypeBitmap::from_types([Rtype::A, Rtype::NS, Rtype::AAAA]),
        );
        assert!(rdata.immediate());
        assert!(!rdata.soa_minimum());
        test_compose_parse(&rdata);
        test_scan(&["66", "1", "A", "NS", "AAAA"], &rdata);
        test_display_scan(&rdata);
        assert_eq!(rdata.to_string(), "66 1 A NS AAAA");
    }

    #[test]
    fn csync_empty_bitmap() {
        let rdata = Csync::new(0, 0, RtypeBitmap::default());
        test_compose_parse(&rdata);
        test_scan(&["0", "0"], &rdata);
        test_display_scan(&rdata);
        assert_eq!(rdata.to_string(), "0 0");
    }
}
