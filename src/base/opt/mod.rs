//! EDNS options.
//!
//! The record data of an OPT record, introduced by [RFC 6891], is a
//! sequence of options. Each option consists of a 16 bit option code, a 16
//! bit length and that many octets of option data.
//!
//! This module contains [`OptOption`], the generic form of a single option,
//! and types for those options whose content is validated when record data
//! is read: client subnet, expire, cookie, TCP keepalive and key tag. All
//! other options are kept as opaque octets.
//!
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

//============ Sub-modules and Re-exports ====================================

pub use self::cookie::Cookie;
pub use self::expire::Expire;
pub use self::keepalive::TcpKeepalive;
pub use self::keytag::KeyTag;
pub use self::subnet::ClientSubnet;

pub mod cookie;
pub mod expire;
pub mod keepalive;
pub mod keytag;
pub mod subnet;

//============ Module Content ================================================

use super::cursor::{copy_bytes, WireCursor};
use super::iana::OptionCode;
use super::wire::{Compose, ParseError};
use crate::utils::base16;
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ OptData -------------------------------------------------------

/// A type representing the data of a specific option.
pub trait OptData: Sized {
    /// The option code of the option.
    const CODE: OptionCode;

    /// Parses the option data.
    ///
    /// The cursor covers exactly the option data. Implementations must
    /// reject data of an invalid length rather than leave octets behind.
    fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError>;

    /// Returns the length of the option data.
    fn compose_len(&self) -> u16;

    /// Appends the option data to the target.
    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

//------------ OptOption -----------------------------------------------------

/// A single option in its generic form.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptOption {
    code: OptionCode,
    data: Bytes,
}

impl OptOption {
    /// Creates an option from its code and data.
    ///
    /// The data is validated if the option is one of the known ones.
    pub fn new(code: OptionCode, data: Bytes) -> Result<Self, ParseError> {
        if data.len() > usize::from(u16::MAX) {
            return Err(ParseError::form_error("long option data"));
        }
        let mut cursor = WireCursor::from_rdata(&data)?;
        check_option(code, &mut cursor)?;
        Ok(OptOption { code, data })
    }

    /// Creates an option from a value of one of the option types.
    pub fn from_data<Data: OptData>(data: &Data) -> Result<Self, ParseError> {
        let mut buf = Vec::new();
        data.compose_option(&mut buf)
            .map_err(|_| ParseError::OutOfMemory)?;
        Ok(OptOption {
            code: Data::CODE,
            data: buf.into(),
        })
    }

    #[must_use]
    pub fn code(&self) -> OptionCode {
        self.code
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Converts the option into a value of a specific option type.
    ///
    /// Returns `None` if the option has a different code.
    pub fn to_data<Data: OptData>(&self) -> Option<Result<Data, ParseError>> {
        if self.code != Data::CODE {
            return None;
        }
        Some(
            WireCursor::from_rdata(&self.data)
                .and_then(|mut cursor| Data::parse(&mut cursor)),
        )
    }

    /// Takes an option from the beginning of the cursor.
    pub fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        let code = OptionCode::parse(cursor)?;
        let len = cursor.parse_u16_be()?;
        if usize::from(len) > cursor.remaining() {
            return Err(ParseError::form_error("option exceeds record data"));
        }
        let mut data = cursor.take_cursor(usize::from(len))?;
        let start = data.clone().take_rest();
        check_option(code, &mut data)?;
        Ok(OptOption {
            code,
            data: copy_bytes(start)?,
        })
    }

    /// Returns the length of the option including code and length.
    #[must_use]
    pub fn compose_len(&self) -> usize {
        4 + self.data.len()
    }
}

//--- Compose

impl Compose for OptOption {
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.code.compose(target)?;
        // The constructors limit the length.
        (self.data.len() as u16).compose(target)?;
        target.append_slice(&self.data)
    }
}

//--- Display

impl fmt::Display for OptOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:", self.code)?;
        base16::display(&self.data, f)
    }
}

//------------ check_option --------------------------------------------------

/// Checks that the option data is valid for the given option code.
///
/// The cursor has to cover exactly the option data. Options without
/// specific rules are always valid.
pub fn check_option(
    code: OptionCode,
    cursor: &mut WireCursor<'_>,
) -> Result<(), ParseError> {
    match code {
        OptionCode::CLIENT_SUBNET => ClientSubnet::parse(cursor).map(drop)?,
        OptionCode::EXPIRE => Expire::parse(cursor).map(drop)?,
        OptionCode::COOKIE => Cookie::parse(cursor).map(drop)?,
        OptionCode::TCP_KEEPALIVE => TcpKeepalive::parse(cursor).map(drop)?,
        OptionCode::KEY_TAG => KeyTag::parse(cursor).map(drop)?,
        _ => {
            cursor.take_rest();
        }
    }
    cursor.check_done()
}

//============ Testing =======================================================

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    /// Parses the complete data as option data of the given type.
    pub(crate) fn parse_option<Data: OptData>(
        data: &[u8],
    ) -> Result<Data, ParseError> {
        let mut cursor = WireCursor::from_rdata(data)?;
        let res = Data::parse(&mut cursor)?;
        cursor.check_done()?;
        Ok(res)
    }

    #[test]
    fn parse_options() {
        let data = b"\x00\x08\x00\x04\x00\x01\x00\x00\
                     \x00\x0c\x00\x02\x00\x00";
        let mut cursor = WireCursor::from_rdata(data).unwrap();
        let ecs = OptOption::parse(&mut cursor).unwrap();
        let padding = OptOption::parse(&mut cursor).unwrap();
        assert!(cursor.is_empty());
        assert_eq!(ecs.code(), OptionCode::CLIENT_SUBNET);
        assert_eq!(
            ecs.to_data::<ClientSubnet>().unwrap().unwrap().family(),
            1
        );
        assert!(ecs.to_data::<Expire>().is_none());
        assert_eq!(padding.code(), OptionCode::PADDING);
        assert_eq!(padding.data(), b"\x00\x00");

        let mut buf = Vec::new();
        ecs.compose(&mut buf).unwrap();
        padding.compose(&mut buf).unwrap();
        assert_eq!(buf, data);
    }

    #[test]
    fn option_beyond_data() {
        let mut cursor =
            WireCursor::from_rdata(b"\x00\x0c\x00\x03\x00\x00").unwrap();
        assert!(OptOption::parse(&mut cursor).is_err());
    }

    #[test]
    fn invalid_known_option() {
        let mut cursor =
            WireCursor::from_rdata(b"\x00\x09\x00\x01\x00").unwrap();
        assert!(OptOption::parse(&mut cursor).is_err());
        assert!(OptOption::new(
            OptionCode::COOKIE,
            Bytes::from_static(b"\x00")
        )
        .is_err());
    }

    #[test]
    fn from_data() {
        let opt = OptOption::from_data(&Expire::new(Some(10))).unwrap();
        assert_eq!(opt.code(), OptionCode::EXPIRE);
        assert_eq!(opt.data(), b"\x00\x00\x00\x0a");
        assert_eq!(opt.to_string(), "EXPIRE:0000000A");
    }
}
