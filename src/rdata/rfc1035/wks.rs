//! Record data for the WKS record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::cursor::{copy_bytes, WireCursor};
use crate::base::iana::Rtype;
use crate::base::rdata::RecordDataCodec;
use crate::base::scan::{parse_uint32, ScanError, Tokens};
use crate::base::wire::{Compose, Parse, ParseError};
use crate::utils::netdb::{ProtoEnt, ServEnt};
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;
use std::net::Ipv4Addr;

//------------ Wks ----------------------------------------------------------

/// Wks record data.
///
/// The WKS record describes the well known services supported by a
/// particular protocol on a particular internet address. The services are
/// given as a bitmap where bit _n_ set means that port _n_ is served.
///
/// The WKS record type is defined in [RFC 1035, section 3.4.2][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.4.2
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "WksFields")
)]
pub struct Wks {
    address: Ipv4Addr,
    protocol: u8,
    bitmap: Bytes,
}

impl Wks {
    /// The maximum length of the bitmap, covering all 65536 ports.
    pub const MAX_BITMAP_LEN: usize = 8192;

    /// Creates WKS record data from its parts.
    ///
    /// Returns an error if the bitmap is longer than
    /// [`MAX_BITMAP_LEN`][Self::MAX_BITMAP_LEN].
    pub fn new(
        address: Ipv4Addr,
        protocol: u8,
        bitmap: Bytes,
    ) -> Result<Self, ParseError> {
        if bitmap.len() > Self::MAX_BITMAP_LEN {
            return Err(ParseError::form_error("long WKS bitmap"));
        }
        Ok(Wks {
            address,
            protocol,
            bitmap,
        })
    }

    /// Creates WKS record data for a set of ports.
    ///
    /// The bitmap is made just long enough for the highest port.
    #[must_use]
    pub fn from_ports(
        address: Ipv4Addr,
        protocol: u8,
        ports: impl IntoIterator<Item = u16>,
    ) -> Self {
        let mut bitmap = Vec::new();
        for port in ports {
            set_port(&mut bitmap, port);
        }
        Wks {
            address,
            protocol,
            bitmap: bitmap.into(),
        }
    }

    #[must_use]
    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    #[must_use]
    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    #[must_use]
    pub fn bitmap(&self) -> &[u8] {
        self.bitmap.as_ref()
    }

    /// Returns whether the given port is marked in the bitmap.
    #[must_use]
    pub fn serves(&self, port: u16) -> bool {
        let (octet, mask) = port_position(port);
        self.bitmap
            .get(octet)
            .map(|bits| bits & mask != 0)
            .unwrap_or(false)
    }

    /// Returns an iterator over all ports marked in the bitmap.
    ///
    /// Octets beyond the range of port numbers are skipped.
    pub fn ports(&self) -> impl Iterator<Item = u16> + '_ {
        self.bitmap.iter().enumerate().flat_map(|(octet, &bits)| {
            let base = octet
                .checked_mul(8)
                .and_then(|base| u16::try_from(base).ok());
            (0..8u16).filter_map(move |bit| {
                let port = base?.checked_add(bit)?;
                (bits & (0x80 >> bit) != 0).then_some(port)
            })
        })
    }
}

//--- Deserialize

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct WksFields {
    address: Ipv4Addr,
    protocol: u8,
    bitmap: Bytes,
}

#[cfg(feature = "serde")]
impl TryFrom<WksFields> for Wks {
    type Error = ParseError;

    fn try_from(fields: WksFields) -> Result<Self, Self::Error> {
        Wks::new(fields.address, fields.protocol, fields.bitmap)
    }
}

//--- RecordDataCodec

impl RecordDataCodec for Wks {
    const RTYPE: Rtype = Rtype::WKS;

    fn parse_rdata(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        let address = Ipv4Addr::parse(cursor)?;
        let protocol = u8::parse(cursor)?;
        let bitmap = cursor.take_rest();
        if bitmap.len() > Self::MAX_BITMAP_LEN {
            return Err(ParseError::form_error("long WKS bitmap"));
        }
        Ok(Wks {
            address,
            protocol,
            bitmap: copy_bytes(bitmap)?,
        })
    }

    fn scan_rdata(tokens: &mut Tokens<'_>) -> Result<Self, ScanError> {
        let address = tokens
            .expect_token()?
            .as_str()
            .parse::<Ipv4Addr>()
            .map_err(|_| ScanError::Syntax("expected IPv4 address"))?;

        let token = tokens.expect_token()?;
        let protocol = match ProtoEnt::by_name(token.as_str()) {
            Some(ent) => ent.proto,
            None => u8::try_from(parse_uint32(token.as_str(), 10)?)
                .map_err(|_| ScanError::Range)?,
        };
        let proto_name = match protocol {
            6 => Some("tcp"),
            17 => Some("udp"),
            _ => None,
        };

        let mut bitmap = Vec::new();
        while let Some(token) = tokens.next_token()? {
            let port = match proto_name
                .and_then(|proto| ServEnt::by_name(token.as_str(), proto))
            {
                Some(ent) => ent.port,
                None => u16::try_from(parse_uint32(token.as_str(), 10)?)
                    .map_err(|_| ScanError::Range)?,
            };
            set_port(&mut bitmap, port);
        }
        Ok(Wks {
            address,
            protocol,
            bitmap: bitmap.into(),
        })
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.address.compose(target)?;
        self.protocol.compose(target)?;
        target.append_slice(self.bitmap.as_ref())
    }
}

//--- Display

/// The services are printed as port numbers. Zero octets at the end of the
/// bitmap leave no trace, so scanning the output again yields the shortest
/// bitmap for the same ports.
impl fmt::Display for Wks {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.address, self.protocol)?;
        for port in self.ports() {
            write!(f, " {}", port)?;
        }
        Ok(())
    }
}

//------------ Helpers -------------------------------------------------------

fn port_position(port: u16) -> (usize, u8) {
    (usize::from(port / 8), 0x80 >> (port % 8))
}

fn set_port(bitmap: &mut Vec<u8>, port: u16) {
    let (octet, mask) = port_position(port);
    if bitmap.len() <= octet {
        bitmap.resize(octet + 1, 0);
    }
    bitmap[octet] |= mask;
}

//============ Testing =======================================================
