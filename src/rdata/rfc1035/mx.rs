//! Record data for the MX record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::cursor::WireCursor;
use crate::base::iana::Rtype;
use crate::base::name::{Compression, Dname};
use crate::base::rdata::RecordDataCodec;
use crate::base::scan::{ScanError, Tokens};
use crate::base::wire::{Compose, Parse, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ Mx -----------------------------------------------------------

/// Mx record data.
///
/// The Mx record specifies a host willing to serve as a mail exchange for
/// the owner name.
///
/// The Mx record type is defined in [RFC 1035, section 3.3.9][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.9
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mx {
    preference: u16,
    exchange: Dname,
}

impl Mx {
    /// Creates a new Mx record data from the components.
    #[must_use]
    pub fn new(preference: u16, exchange: Dname) -> Self {
        Mx {
            preference,
            exchange,
        }
    }

    /// The preference for this record.
    ///
    /// Defines an order if there are several Mx records for the same owner.
    /// Lower values are preferred.
    #[must_use]
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The name of the host that is the exchange.
    #[must_use]
    pub fn exchange(&self) -> &Dname {
        &self.exchange
    }
}

//--- RecordDataCodec

impl RecordDataCodec for Mx {
    const RTYPE: Rtype = Rtype::MX;
    const COMPRESSION: Compression = Compression::Allowed;

    fn parse_rdata(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        Ok(Self::new(
            u16::parse(cursor)?,
            Dname::parse(cursor, Self::COMPRESSION)?,
        ))
    }

    fn scan_rdata(tokens: &mut Tokens<'_>) -> Result<Self, ScanError> {
        Ok(Self::new(tokens.scan_u16()?, tokens.scan_dname()?))
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.preference.compose(target)?;
        self.exchange.compose(target)
    }
}

//--- Display

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{
        test_compose_parse, test_display_scan, test_scan,
    };
    use core::str::FromStr;

    #[test]
    fn mx_compose_parse_scan() {
        let rdata = Mx::new(12, Dname::from_str("mail.example.com").unwrap());
        test_compose_parse(&rdata);
        test_scan(&["12", "mail.example.com."], &rdata);
        test_display_scan(&rdata);
    }

    #[test]
    fn mx_relative_exchange() {
        let origin = Dname::from_str("example.com").unwrap();
        let mut scanner = crate::base::scan::IterScanner::new(["10", "mail"]);
        let mut tokens = Tokens::new(&mut scanner, &origin);
        assert_eq!(
            Mx::scan_rdata(&mut tokens).unwrap(),
            Mx::new(10, Dname::from_str("mail.example.com.").unwrap())
        );
    }
}
