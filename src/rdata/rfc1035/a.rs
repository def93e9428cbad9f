//! Record data for the A record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::cursor::WireCursor;
use crate::base::iana::Rtype;
use crate::base::rdata::RecordDataCodec;
use crate::base::scan::{ScanError, Tokens};
use crate::base::wire::{Compose, Parse, ParseError};
use core::fmt;
use core::str::FromStr;
use octseq::builder::OctetsBuilder;
use std::net::Ipv4Addr;

//------------ A ------------------------------------------------------------

/// A record data.
///
/// A records convey the IPv4 address of a host. The wire format is the 32
/// bit IPv4 address in network byte order. The representation file format
/// is the usual dotted notation.
///
/// The A record type is defined in [RFC 1035, section 3.4.1][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.4.1
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct A {
    addr: Ipv4Addr,
}

impl A {
    /// Creates a new A record data from an IPv4 address.
    #[must_use]
    pub fn new(addr: Ipv4Addr) -> A {
        A { addr }
    }

    /// Creates a new A record from the IPv4 address components.
    #[must_use]
    pub fn from_octets(a: u8, b: u8, c: u8, d: u8) -> A {
        A::new(Ipv4Addr::new(a, b, c, d))
    }

    #[must_use]
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn set_addr(&mut self, addr: Ipv4Addr) {
        self.addr = addr
    }
}

//--- From and FromStr

impl From<Ipv4Addr> for A {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new(addr)
    }
}

impl From<A> for Ipv4Addr {
    fn from(a: A) -> Self {
        a.addr
    }
}

impl FromStr for A {
    type Err = <Ipv4Addr as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Addr::from_str(s).map(A::new)
    }
}

//--- RecordDataCodec

impl RecordDataCodec for A {
    const RTYPE: Rtype = Rtype::A;

    fn parse_rdata(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        Ipv4Addr::parse(cursor).map(Self::new)
    }

    fn scan_rdata(tokens: &mut Tokens<'_>) -> Result<Self, ScanError> {
        let token = tokens.expect_token()?;
        A::from_str(token.as_str())
            .map_err(|_| ScanError::Syntax("expected IPv4 address"))
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.addr.compose(target)
    }
}

//--- Display

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.addr, f)
    }
}

//--- AsRef and AsMut

impl AsRef<Ipv4Addr> for A {
    fn as_ref(&self) -> &Ipv4Addr {
        &self.addr
    }
}

impl AsMut<Ipv4Addr> for A {
    fn as_mut(&mut self) -> &mut Ipv4Addr {
        &mut self.addr
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
    fn a_compose_parse_scan() {
        let rdata = A::from_octets(1, 2, 3, 4);
        test_compose_parse(&rdata);
        test_scan(&["1.2.3.4"], &rdata);
        test_display_scan(&rdata);
    }

    #[test]
    fn a_short_and_bad() {
        let mut cursor = WireCursor::from_rdata(b"\x01\x02\x03").unwrap();
        assert_eq!(A::parse_rdata(&mut cursor), Err(ParseError::ShortInput));
        assert!("1.2.3".parse::<A>().is_err());
    }
}
