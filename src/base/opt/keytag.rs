//! EDNS option for signalling DNSSEC key tags.
//!
//! The option in this module, [`KeyTag`], allows a validating resolver to
//! tell a server which trust anchors it uses.
//!
//! The option is defined in [RFC 8145](https://tools.ietf.org/html/rfc8145).

use super::OptData;
use crate::base::cursor::WireCursor;
use crate::base::iana::OptionCode;
use crate::base::wire::{Compose, Parse, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ KeyTag --------------------------------------------------------

/// Option data for the edns-key-tag option.
///
/// The option contains at least one 16 bit key tag.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyTag(Vec<u16>);

impl KeyTag {
    /// Creates the option from a list of key tags.
    ///
    /// Returns an error if the list is empty or too long for an option.
    pub fn new(tags: Vec<u16>) -> Result<Self, ParseError> {
        if tags.is_empty() || tags.len() > usize::from(u16::MAX / 2) {
            Err(ParseError::form_error("invalid edns-key-tag option length"))
        } else {
            Ok(KeyTag(tags))
        }
    }

    #[must_use]
    pub fn tags(&self) -> &[u16] {
        &self.0
    }
}

//--- OptData

impl OptData for KeyTag {
    const CODE: OptionCode = OptionCode::KEY_TAG;

    fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        let len = cursor.remaining();
        if len == 0 || len % 2 != 0 {
            return Err(ParseError::form_error(
                "invalid edns-key-tag option length",
            ));
        }
        let mut tags = Vec::new();
        tags.try_reserve_exact(len / 2)
            .map_err(|_| ParseError::OutOfMemory)?;
        while !cursor.is_empty() {
            tags.push(u16::parse(cursor)?);
        }
        Ok(KeyTag(tags))
    }

    fn compose_len(&self) -> u16 {
        // The constructor limits the length.
        (self.0.len() * 2) as u16
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        for tag in &self.0 {
            tag.compose(target)?;
        }
        Ok(())
    }
}

//--- Display

impl fmt::Display for KeyTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for tag in &self.0 {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::opt::test::parse_option;

    #[test]
    fn lengths() {
        assert!(parse_option::<KeyTag>(b"").is_err());
        assert!(parse_option::<KeyTag>(b"\x00").is_err());
        assert!(parse_option::<KeyTag>(b"\x00\x01\x02").is_err());
        let opt = parse_option::<KeyTag>(b"\x4f\x66\x00\x01").unwrap();
        assert_eq!(opt.tags(), &[20326, 1]);
        assert_eq!(opt.to_string(), "20326 1");
    }
}
