//! Record data for the SOA record.
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

//------------ Soa ----------------------------------------------------------

/// Soa record data.
///
/// Soa records mark the top of a zone and contain information pertinent to
/// name server maintenance operations.
///
/// The Soa record type is defined in [RFC 1035, section 3.3.13][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.13
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Soa {
    mname: Dname,
    rname: Dname,
    serial: u32,
    refresh: u32,
    retry: u32,
    expire: u32,
    minimum: u32,
}

impl Soa {
    /// Creates new Soa record data from content.
    #[must_use]
    pub fn new(
        mname: Dname,
        rname: Dname,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Self {
        Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// The primary name server for the zone.
    #[must_use]
    pub fn mname(&self) -> &Dname {
        &self.mname
    }

    /// The mailbox for the person responsible for this zone.
    #[must_use]
    pub fn rname(&self) -> &Dname {
        &self.rname
    }

    /// The serial number of the original copy of the zone.
    #[must_use]
    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// The time interval in seconds before the zone should be refreshed.
    #[must_use]
    pub fn refresh(&self) -> u32 {
        self.refresh
    }

    /// The time in seconds before a failed refresh is retried.
    #[must_use]
    pub fn retry(&self) -> u32 {
        self.retry
    }

    /// The upper limit of time in seconds the zone is authoritative.
    #[must_use]
    pub fn expire(&self) -> u32 {
        self.expire
    }

    /// The minimum TTL to be exported with any RR from this zone.
    #[must_use]
    pub fn minimum(&self) -> u32 {
        self.minimum
    }
}

//--- RecordDataCodec

impl RecordDataCodec for Soa {
    const RTYPE: Rtype = Rtype::SOA;
    const COMPRESSION: Compression = Compression::Allowed;

    fn parse_rdata(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        Ok(Self::new(
            Dname::parse(cursor, Self::COMPRESSION)?,
            Dname::parse(cursor, Self::COMPRESSION)?,
            u32::parse(cursor)?,
            u32::parse(cursor)?,
            u32::parse(cursor)?,
            u32::parse(cursor)?,
            u32::parse(cursor)?,
        ))
    }

    fn scan_rdata(tokens: &mut Tokens<'_>) -> Result<Self, ScanError> {
        Ok(Self::new(
            tokens.scan_dname()?,
            tokens.scan_dname()?,
            tokens.scan_u32()?,
            tokens.scan_u32()?,
            tokens.scan_u32()?,
            tokens.scan_u32()?,
            tokens.scan_u32()?,
        ))
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.mname.compose(target)?;
        self.rname.compose(target)?;
        self.serial.compose(target)?;
        self.refresh.compose(target)?;
        self.retry.compose(target)?;
        self.expire.compose(target)?;
        self.minimum.compose(target)
    }
}

//--- Display

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname,
            self.rname,
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}

//============ Testing =======================================================
