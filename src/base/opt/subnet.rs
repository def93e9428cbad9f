//! EDNS option for carrying client subnet information.
//!
//! The option in this module – [`ClientSubnet`] – can be used by a resolver
//! to include information about the network a query originated from in its
//! own query to an authoritative server so it can tailor its response for
//! that network.
//!
//! The option is defined in [RFC 7871](https://tools.ietf.org/html/rfc7871)
//! which also includes some guidance on its use.

use super::OptData;
use crate::base::cursor::WireCursor;
use crate::base::iana::OptionCode;
use crate::base::wire::{Compose, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;
use std::net::IpAddr;

//------------ ClientSubnet --------------------------------------------------

/// Option data for the client subnet option.
///
/// The option identifies the network through an address prefix, i.e., an
/// IP address of which only a certain number of left-side bits is
/// interpreted. The option uses two such numbers: The _source prefix length_
/// is the number of bits provided by the client when describing its network
/// and the _scope prefix length_ is the number of bits that the server
/// considered when providing the answer.
///
/// Address family 0 carries no address at all. Both prefix lengths are
/// zero then.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientSubnet {
    /// The source prefix length.
    source_prefix_len: u8,

    /// The scope prefix length.
    scope_prefix_len: u8,

    /// The address or `None` for family 0.
    addr: Option<IpAddr>,
}

impl ClientSubnet {
    /// Creates a new client subnet value.
    ///
    /// The function is very forgiving regarding the arguments and corrects
    /// illegal values. That is, it limits the prefix lengths given to a
    /// number meaningful for the address family. It will also set all bits
    /// not covered by the source prefix length in the address to zero.
    #[must_use]
    pub fn new(
        source_prefix_len: u8,
        scope_prefix_len: u8,
        addr: IpAddr,
    ) -> ClientSubnet {
        let source_prefix_len = normalize_prefix_len(addr, source_prefix_len);
        let scope_prefix_len = normalize_prefix_len(addr, scope_prefix_len);
        let (addr, _) = addr_apply_mask(addr, source_prefix_len);

        ClientSubnet {
            source_prefix_len,
            scope_prefix_len,
            addr: Some(addr),
        }
    }

    /// Creates a value of address family 0.
    #[must_use]
    pub fn without_address() -> Self {
        ClientSubnet {
            source_prefix_len: 0,
            scope_prefix_len: 0,
            addr: None,
        }
    }

    /// Returns the address family.
    #[must_use]
    pub fn family(&self) -> u16 {
        match self.addr {
            None => 0,
            Some(IpAddr::V4(_)) => 1,
            Some(IpAddr::V6(_)) => 2,
        }
    }

    #[must_use]
    pub fn source_prefix_len(&self) -> u8 {
        self.source_prefix_len
    }

    #[must_use]
    pub fn scope_prefix_len(&self) -> u8 {
        self.scope_prefix_len
    }

    #[must_use]
    pub fn addr(&self) -> Option<IpAddr> {
        self.addr
    }
}

//--- OptData

impl OptData for ClientSubnet {
    const CODE: OptionCode = OptionCode::CLIENT_SUBNET;

    fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        const ERR_ADDR_LEN: &str =
            "invalid address length in client subnet option";

        if cursor.remaining() < 4 {
            return Err(ParseError::form_error("short client subnet option"));
        }
        let family = cursor.parse_u16_be()?;
        let source_prefix_len = cursor.parse_u8()?;
        let scope_prefix_len = cursor.parse_u8()?;

        let max_prefix_len = match family {
            0 => 0,
            1 => 32,
            2 => 128,
            _ => {
                return Err(ParseError::form_error(
                    "invalid client subnet address family",
                ))
            }
        };
        if source_prefix_len > max_prefix_len
            || scope_prefix_len > max_prefix_len
        {
            return Err(ParseError::form_error(
                "invalid prefix length in client subnet option",
            ));
        }

        // https://tools.ietf.org/html/rfc7871#section-6
        //
        // | ADDRESS, variable number of octets, contains either an IPv4 or
        // | IPv6 address, depending on FAMILY, which MUST be truncated to
        // | the number of bits indicated by the SOURCE PREFIX-LENGTH field,
        // | padding with 0 bits to pad to the end of the last octet needed.
        let prefix_bytes = prefix_bytes(source_prefix_len);
        if cursor.remaining() != prefix_bytes {
            return Err(ParseError::form_error(ERR_ADDR_LEN));
        }

        let addr = match family {
            1 => {
                let mut buf = [0; 4];
                cursor.parse_buf(&mut buf[..prefix_bytes])?;
                Some(IpAddr::from(buf))
            }
            2 => {
                let mut buf = [0; 16];
                cursor.parse_buf(&mut buf[..prefix_bytes])?;
                Some(IpAddr::from(buf))
            }
            _ => None,
        };

        if let Some(addr) = addr {
            if addr_apply_mask(addr, source_prefix_len).1 {
                return Err(ParseError::form_error(
                    "client subnet address has bits beyond prefix",
                ));
            }
        }

        Ok(ClientSubnet {
            source_prefix_len,
            scope_prefix_len,
            addr,
        })
    }

    fn compose_len(&self) -> u16 {
        // At most 16 octets of address.
        prefix_bytes(self.source_prefix_len) as u16 + 4
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        let prefix_bytes = prefix_bytes(self.source_prefix_len);
        self.family().compose(target)?;
        self.source_prefix_len.compose(target)?;
        self.scope_prefix_len.compose(target)?;
        match self.addr {
            Some(IpAddr::V4(addr)) => {
                target.append_slice(&addr.octets()[..prefix_bytes])
            }
            Some(IpAddr::V6(addr)) => {
                target.append_slice(&addr.octets()[..prefix_bytes])
            }
            None => Ok(()),
        }
    }
}

//--- Display

impl fmt::Display for ClientSubnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.addr {
            Some(addr) => write!(f, "{}", addr)?,
            None => f.write_str("0")?,
        }
        if self.scope_prefix_len != 0 {
            write!(f, "/{}/{}", self.source_prefix_len, self.scope_prefix_len)
        } else {
            write!(f, "/{}", self.source_prefix_len)
        }
    }
}

//------------ Helper Functions ----------------------------------------------

/// Returns the number of bytes needed for a prefix of a given length
fn prefix_bytes(bits: u8) -> usize {
    (usize::from(bits) + 7) / 8
}

/// Only keeps the left-most `mask` bits and zeros out the rest.
///
/// Returns whether the buffer has been modified.
fn apply_bit_mask(buf: &mut [u8], mask: usize) -> bool {
    let mut modified = false;

    // skip full bytes covered by prefix length
    let mut p = mask / 8;
    if p >= buf.len() {
        return modified;
    }

    // clear extra bits in a byte
    let bits = mask % 8;
    if bits != 0 {
        let keep = 0xffu8 << (8 - bits);
        if buf[p] & !keep != 0 {
            buf[p] &= keep;
            modified = true;
        }
        p += 1;
    }

    for octet in &mut buf[p..] {
        if *octet != 0 {
            *octet = 0;
            modified = true;
        }
    }

    modified
}

/// Zeros out unused bits in a address prefix of the given length
///
/// Returns the new address and whether it was changed.
fn addr_apply_mask(addr: IpAddr, len: u8) -> (IpAddr, bool) {
    match addr {
        IpAddr::V4(a) => {
            let mut array = a.octets();
            let m = apply_bit_mask(&mut array, len.into());
            (array.into(), m)
        }
        IpAddr::V6(a) => {
            let mut array = a.octets();
            let m = apply_bit_mask(&mut array, len.into());
            (array.into(), m)
        }
    }
}

/// Limits a prefix length for the given address.
fn normalize_prefix_len(addr: IpAddr, len: u8) -> u8 {
    let max = match addr {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };

    core::cmp::min(len, max)
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn parse(data: &[u8]) -> Result<ClientSubnet, ParseError> {
        let mut cursor = WireCursor::from_rdata(data).unwrap();
        let res = ClientSubnet::parse(&mut cursor)?;
        assert!(cursor.is_empty());
        Ok(res)
    }

    #[rstest]
    #[case::too_short(b"\x00\x01\x00", false)]
    #[case::family0(b"\x00\x00\x00\x00", true)]
    #[case::family0_source(b"\x00\x00\x01\x00", false)]
    #[case::family0_scope(b"\x00\x00\x00\x01", false)]
    #[case::family0_extra(b"\x00\x00\x00\x00\x00", false)]
    #[case::v4_no_addr(b"\x00\x01\x00\x00", true)]
    #[case::v4_source_max(b"\x00\x01\x20\x00\x01\x02\x03\x04", true)]
    #[case::v4_source_too_long(b"\x00\x01\x21\x00\x01\x02\x03\x04", false)]
    #[case::v4_scope_too_long(b"\x00\x01\x00\x21", false)]
    #[case::v4_short_addr(b"\x00\x01\x10\x00\x01", false)]
    #[case::v4_extra_addr(b"\x00\x01\x08\x00\x01\x02", false)]
    #[case::v4_bits_beyond(b"\x00\x01\x07\x00\x01", false)]
    #[case::v4_bits_ok(b"\x00\x01\x07\x00\x02", true)]
    #[case::v6_source_max(
        b"\x00\x02\x80\x00\x20\x01\x0d\xb8\x00\x00\x00\x00\
          \x00\x00\x00\x00\x00\x00\x00\x01",
        true
    )]
    #[case::v6_source_too_long(b"\x00\x02\x81\x00", false)]
    #[case::v6_scope_too_long(b"\x00\x02\x00\x81", false)]
    #[case::bad_family(b"\x00\x03\x00\x00", false)]
    fn parse_vectors(#[case] data: &[u8], #[case] ok: bool) {
        assert_eq!(parse(data).is_ok(), ok, "{:?}", data);
    }

    #[test]
    fn compose_parse() {
        for opt in [
            ClientSubnet::new(4, 6, "127.0.0.1".parse().unwrap()),
            ClientSubnet::new(56, 0, "2001:db8::1".parse().unwrap()),
            ClientSubnet::without_address(),
        ] {
            let mut buf = Vec::new();
            opt.compose_option(&mut buf).unwrap();
            assert_eq!(buf.len(), usize::from(opt.compose_len()));
            assert_eq!(parse(&buf), Ok(opt));
        }
    }

    #[test]
    fn new_normalizes() {
        let opt = ClientSubnet::new(22, 0, "192.0.2.0".parse().unwrap());
        assert_eq!(opt.addr(), Some("192.0.0.0".parse().unwrap()));
        let opt = ClientSubnet::new(100, 0, "192.0.2.0".parse().unwrap());
        assert_eq!(opt.source_prefix_len(), 32);
        assert_eq!(opt.family(), 1);
    }

    #[test]
    fn display() {
        let opt = ClientSubnet::new(24, 0, "192.0.2.0".parse().unwrap());
        assert_eq!(opt.to_string(), "192.0.2.0/24");
        let opt = ClientSubnet::new(24, 16, "192.0.2.0".parse().unwrap());
        assert_eq!(opt.to_string(), "192.0.2.0/24/16");
    }
}
