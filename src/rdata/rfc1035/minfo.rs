//! Record data for the MINFO record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::cursor::WireCursor;
use crate::base::iana::Rtype;
use crate::base::name::{Compression, Dname};
use crate::base::rdata::RecordDataCodec;
use crate::base::scan::{ScanError, Tokens};
use crate::base::wire::{Compose, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ Minfo --------------------------------------------------------

/// Minfo record data.
///
/// The Minfo record specifies a mailbox which is responsible for the mailing
/// list or mailbox and a mailbox that receives error messages related to the
/// list or box.
///
/// The Minfo record is experimental.
///
/// The Minfo record type is defined in [RFC 1035, section 3.3.7][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.7
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minfo {
    rmailbx: Dname,
    emailbx: Dname,
}

impl Minfo {
    /// Creates a new Minfo record data from the components.
    #[must_use]
    pub fn new(rmailbx: Dname, emailbx: Dname) -> Self {
        Minfo { rmailbx, emailbx }
    }

    /// The responsible mail box.
    ///
    /// The domain name specifies the mailbox which is responsible for the
    /// mailing list or mailbox. If this domain name is the root, the owner
    /// of the Minfo record is responsible for itself.
    #[must_use]
    pub fn rmailbx(&self) -> &Dname {
        &self.rmailbx
    }

    /// The error mail box.
    ///
    /// The domain name specifies a mailbox which is to receive error
    /// messages related to the mailing list or mailbox specified by the
    /// owner of the record. If this is the root domain name, errors should
    /// be returned to the sender of the message.
    #[must_use]
    pub fn emailbx(&self) -> &Dname {
        &self.emailbx
    }
}

//--- RecordDataCodec

impl RecordDataCodec for Minfo {
    const RTYPE: Rtype = Rtype::MINFO;
    const COMPRESSION: Compression = Compression::Allowed;

    fn parse_rdata(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        Ok(Self::new(
            Dname::parse(cursor, Self::COMPRESSION)?,
            Dname::parse(cursor, Self::COMPRESSION)?,
        ))
    }

    fn scan_rdata(tokens: &mut Tokens<'_>) -> Result<Self, ScanError> {
        Ok(Self::new(tokens.scan_dname()?, tokens.scan_dname()?))
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.rmailbx.compose(target)?;
        self.emailbx.compose(target)
    }
}

//--- Display

impl fmt::Display for Minfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.rmailbx, self.emailbx)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{test_compose_parse, test_scan};
    use core::str::FromStr;

    #[test]
    fn minfo_compose_parse_scan() {
        let rdata = Minfo::new(
            Dname::from_str("r.example.com").unwrap(),
            Dname::from_str("e.example.com").unwrap(),
        );
        test_compose_parse(&rdata);
        test_scan(&["r.example.com.", "e.example.com."], &rdata);
    }
}
