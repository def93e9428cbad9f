//! EDNS option to signal the TCP keepalive idle timeout.
//!
//! The option in this module, [`TcpKeepalive`], is defined in
//! [RFC 7828](https://tools.ietf.org/html/rfc7828). A client sends it
//! without a value, a server answers with the idle timeout in units of
//! 100 milliseconds.

use super::OptData;
use crate::base::cursor::WireCursor;
use crate::base::iana::OptionCode;
use crate::base::wire::{Compose, Parse, ParseError};
use core::fmt;
use core::time::Duration;
use octseq::builder::OctetsBuilder;

//------------ TcpKeepalive --------------------------------------------------

/// Option data for the edns-tcp-keepalive option.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TcpKeepalive(Option<u16>);

impl TcpKeepalive {
    #[must_use]
    pub fn new(timeout: Option<u16>) -> Self {
        TcpKeepalive(timeout)
    }

    /// Returns the raw timeout in units of 100 milliseconds.
    #[must_use]
    pub fn timeout(self) -> Option<u16> {
        self.0
    }

    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        self.0
            .map(|value| Duration::from_millis(u64::from(value) * 100))
    }
}

//--- OptData

impl OptData for TcpKeepalive {
    const CODE: OptionCode = OptionCode::TCP_KEEPALIVE;

    fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        match cursor.remaining() {
            0 => Ok(Self::new(None)),
            2 => u16::parse(cursor).map(|res| Self::new(Some(res))),
            _ => Err(ParseError::form_error(
                "invalid edns-tcp-keepalive option length",
            )),
        }
    }

    fn compose_len(&self) -> u16 {
        match self.0 {
            Some(_) => u16::COMPOSE_LEN,
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

impl fmt::Display for TcpKeepalive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
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
        assert_eq!(parse_option::<TcpKeepalive>(b""), Ok(TcpKeepalive(None)));
        let opt = parse_option::<TcpKeepalive>(b"\x00\x96").unwrap();
        assert_eq!(opt.duration(), Some(Duration::from_secs(15)));
        assert!(parse_option::<TcpKeepalive>(b"\x00").is_err());
        assert!(parse_option::<TcpKeepalive>(b"\x00\x00\x00").is_err());
    }
}
