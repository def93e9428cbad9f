//! EDNS Option for DNS cookies.
//!
//! The option in this module – [`Cookie`] –  is part of a simple mechanism
//! that helps DNS servers to mitigate denial-of-service and amplification
//! attacks called DNS cookies.
//!
//! The client creates a client cookie and includes it in its request to a
//! server. When answering, the server generates a server cookie from the
//! client cookie and a secret and includes it in the response.
//!
//! The DNS Cookie mechanism is defined in [RFC 7873].
//!
//! [RFC 7873]: https://tools.ietf.org/html/rfc7873

use super::OptData;
use crate::base::cursor::{copy_bytes, WireCursor};
use crate::base::iana::OptionCode;
use crate::base::wire::ParseError;
use crate::utils::base16;
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ Cookie --------------------------------------------------------

/// Option data for a DNS cookie.
///
/// A value of this type carries two parts: A mandatory client cookie of
/// exactly eight octets and an optional server cookie of between 8 and 32
/// octets.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cookie {
    /// The client cookie.
    client: [u8; 8],

    /// The optional server cookie.
    server: Option<Bytes>,
}

impl Cookie {
    pub fn new(
        client: [u8; 8],
        server: Option<Bytes>,
    ) -> Result<Self, ParseError> {
        if let Some(server) = server.as_ref() {
            if !(8..=32).contains(&server.len()) {
                return Err(ParseError::form_error(
                    "invalid server cookie length",
                ));
            }
        }
        Ok(Cookie { client, server })
    }

    #[must_use]
    pub fn client(&self) -> [u8; 8] {
        self.client
    }

    #[must_use]
    pub fn server(&self) -> Option<&[u8]> {
        self.server.as_ref().map(AsRef::as_ref)
    }
}

//--- OptData

impl OptData for Cookie {
    const CODE: OptionCode = OptionCode::COOKIE;

    fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        let len = cursor.remaining();
        if len != 8 && !(16..=40).contains(&len) {
            return Err(ParseError::form_error("invalid cookie option length"));
        }
        let mut client = [0u8; 8];
        cursor.parse_buf(&mut client)?;
        let server = if cursor.is_empty() {
            None
        } else {
            Some(copy_bytes(cursor.take_rest())?)
        };
        Ok(Cookie { client, server })
    }

    fn compose_len(&self) -> u16 {
        // The server cookie is at most 32 octets.
        8 + self.server.as_ref().map(|s| s.len() as u16).unwrap_or(0)
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.client)?;
        if let Some(server) = self.server.as_ref() {
            target.append_slice(server)?;
        }
        Ok(())
    }
}

//--- Display

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        base16::display(&self.client, f)?;
        if let Some(server) = self.server.as_ref() {
            base16::display(server, f)?;
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::opt::test::parse_option;
    use rstest::rstest;

    #[rstest]
    #[case(0, false)]
    #[case(7, false)]
    #[case(8, true)]
    #[case(9, false)]
    #[case(15, false)]
    #[case(16, true)]
    #[case(40, true)]
    #[case(41, false)]
    fn lengths(#[case] len: usize, #[case] ok: bool) {
        let data = vec![0x5a; len];
        assert_eq!(parse_option::<Cookie>(&data).is_ok(), ok);
    }

    #[test]
    fn parts() {
        let cookie = parse_option::<Cookie>(
            b"\x01\x02\x03\x04\x05\x06\x07\x08\
              \x11\x12\x13\x14\x15\x16\x17\x18",
        )
        .unwrap();
        assert_eq!(cookie.client(), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(cookie.server().unwrap().len(), 8);
        assert_eq!(
            cookie.to_string(),
            "01020304050607081112131415161718"
        );
    }
}
