//! Record data from [RFC 2782]: SRV records.
//!
//! This RFC defines the Srv record type.
//!
//! [RFC 2782]: https://tools.ietf.org/html/rfc2782

use crate::base::cursor::WireCursor;
use crate::base::iana::Rtype;
use crate::base::name::Dname;
use crate::base::rdata::RecordDataCodec;
use crate::base::scan::{ScanError, Tokens};
use crate::base::wire::{Compose, Parse, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ Srv ---------------------------------------------------------

/// Srv record data.
///
/// The Srv record specifies the location of the server(s) for a specific
/// protocol and domain. The target name must not be compressed.
///
/// The Srv record type is defined in [RFC 2782][1].
///
/// [1]: https://tools.ietf.org/html/rfc2782
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srv {
    priority: u16,
    weight: u16,
    port: u16,
    target: Dname,
}

impl Srv {
    #[must_use]
    pub fn new(priority: u16, weight: u16, port: u16, target: Dname) -> Self {
        Srv {
            priority,
            weight,
            port,
            target,
        }
    }

    #[must_use]
    pub fn priority(&self) -> u16 {
        self.priority
    }

    #[must_use]
    pub fn weight(&self) -> u16 {
        self.weight
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub fn target(&self) -> &Dname {
        &self.target
    }
}

//--- RecordDataCodec

impl RecordDataCodec for Srv {
    const RTYPE: Rtype = Rtype::SRV;

    fn parse_rdata(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        Ok(Self::new(
            u16::parse(cursor)?,
            u16::parse(cursor)?,
            u16::parse(cursor)?,
            Dname::parse(cursor, Self::COMPRESSION)?,
        ))
    }

    fn scan_rdata(tokens: &mut Tokens<'_>) -> Result<Self, ScanError> {
        Ok(Self::new(
            tokens.scan_u16()?,
            tokens.scan_u16()?,
            tokens.scan_u16()?,
            tokens.scan_dname()?,
        ))
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.priority.compose(target)?;
        self.weight.compose(target)?;
        self.port.compose(target)?;
        self.target.compose(target)
    }
}

//--- Display

impl fmt::Display for Srv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority, self.weight, self.port, self.target
        )
    }
}

//============ Testing =======================================================
