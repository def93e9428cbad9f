//! EDNS Options for signalling zone expire times.
//!
//! The option in this module, [`Expire`], allows a authoritative server to
//! signal when a zone expires independently of the SOA’s expire field.
//!
//! This option is defined in [RFC 7314](https://tools.ietf.org/html/rfc7314).

use super::OptData;
use crate::base::cursor::WireCursor;
use crate::base::iana::OptionCode;
use crate::base::wire::{Compose, Parse, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ Expire --------------------------------------------------------

/// Option data for the Expire EDNS option.
///
/// The option’s data consists of an optional `u32`. The value is omitted if
/// the option is added to a query to request it being included by the server
/// in an answer.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expire(Option<u32>);

impl Expire {
    #[must_use]
    pub fn new(expire: Option<u32>) -> Self {
        Expire(expire)
    }

    /// Returns the content of the optional expire value.
    #[must_use]
    pub fn expire(self) -> Option<u32> {
        self.0
    }
}

//--- OptData

impl OptData for Expire {
    const CODE: OptionCode = OptionCode::EXPIRE;

    fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        match cursor.remaining() {
            0 => Ok(Expire::new(None)),
            4 => u32::parse(cursor).map(|res| Expire::new(Some(res))),
            _ => Err(ParseError::form_error("invalid expire option length")),
        }
    }

    fn compose_len(&self) -> u16 {
        match self.0 {
            Some(_) => u32::COMPOSE_LEN,
            None => 0,
        }
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        if let Some(value) = self.0 {
            value.compose(target)?;
        }
        Ok(())
    }
}

//--- Display

impl fmt::Display for Expire {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(expire) => fmt::Display::fmt(&expire, f),
            None => Ok(()),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::opt::test::parse_option;

    #[test]
    fn lengths() {
        assert_eq!(parse_option::<Expire>(b""), Ok(Expire::new(None)));
        assert_eq!(
            parse_option::<Expire>(b"\x00\x00\x0e\x10"),
            Ok(Expire::new(Some(3600)))
        );
        assert!(parse_option::<Expire>(b"\x00\x00").is_err());
        assert!(parse_option::<Expire>(b"\x00\x00\x00\x00\x00").is_err());
    }
}
