//! Record data from [RFC 4034]: NSEC records and type bitmaps.
//!
//! This RFC defines the record types for DNSSEC. Only the NSEC record is
//! implemented here together with the type bitmap it uses. The bitmap is
//! shared with other record types, CSYNC among them.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034

use crate::base::cursor::{copy_bytes, WireCursor};
use crate::base::iana::Rtype;
use crate::base::name::Dname;
use crate::base::rdata::RecordDataCodec;
use crate::base::scan::{ScanError, Tokens};
use crate::base::wire::{Compose, ParseError};
use bytes::Bytes;
use core::fmt;
use octseq::builder::OctetsBuilder;

//------------ Nsec ---------------------------------------------------------

/// Nsec record data.
///
/// The NSEC record lists the next owner name in the canonical ordering of
/// a zone and the record types present at its own owner name. The next
/// name is never compressed and the type bitmap must not be empty.
///
/// The NSEC record type is defined in [RFC 4034, section 4][1].
///
/// [1]: https://tools.ietf.org/html/rfc4034#section-4
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsec {
    next_name: Dname,
    types: RtypeBitmap,
}

impl Nsec {
    /// Creates NSEC record data from its parts.
    ///
    /// Returns an error if the bitmap is empty.
    pub fn new(
        next_name: Dname,
        types: RtypeBitmap,
    ) -> Result<Self, ParseError> {
        if types.is_empty() {
            return Err(ParseError::form_error("empty NSEC type bitmap"));
        }
        Ok(Nsec { next_name, types })
    }

    #[must_use]
    pub fn next_name(&self) -> &Dname {
        &self.next_name
    }

    #[must_use]
    pub fn types(&self) -> &RtypeBitmap {
        &self.types
    }
}

//--- RecordDataCodec

impl RecordDataCodec for Nsec {
    const RTYPE: Rtype = Rtype::NSEC;

    fn parse_rdata(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        let next_name = Dname::parse(cursor, Self::COMPRESSION)?;
        let types = RtypeBitmap::parse(cursor, false)?;
        Ok(Nsec { next_name, types })
    }

    fn scan_rdata(tokens: &mut Tokens<'_>) -> Result<Self, ScanError> {
        let next_name = tokens.scan_dname()?;
        let types = RtypeBitmap::scan(tokens, false)?;
        Ok(Nsec { next_name, types })
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.next_name.compose(target)?;
        self.types.compose(target)
    }
}

//--- Display

impl fmt::Display for Nsec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.next_name, self.types)
    }
}

//------------ RtypeBitmap ---------------------------------------------------

/// A set of record types in the type bitmap format.
///
/// The types are split into windows of 256 types each. Each present
/// window is given by its number, the length of its bitmap, and the bitmap
/// itself, where the most significant bit of the first octet is the
/// first type of the window. Windows appear in increasing order, bitmaps
/// are between 1 and 32 octets long and end in a non-zero octet.
///
/// The format is defined in [RFC 4034, section 4.1.2][1].
///
/// [1]: https://tools.ietf.org/html/rfc4034#section-4.1.2
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RtypeBitmap(Bytes);

impl RtypeBitmap {
    /// Creates a bitmap from its wire format.
    pub fn from_octets(
        octets: Bytes,
        allow_empty: bool,
    ) -> Result<Self, ParseError> {
        check_bitmap(&octets, allow_empty)?;
        Ok(RtypeBitmap(octets))
    }

    /// Creates a bitmap containing the given types.
    #[must_use]
    pub fn from_types(types: impl IntoIterator<Item = Rtype>) -> Self {
        let mut windows = [[0u8; 32]; 256];
        let mut present = [false; 256];
        for rtype in types {
            let (window, octet, mask) = split_rtype(rtype);
            windows[window][octet] |= mask;
            present[window] = true;
        }
        let mut res = Vec::new();
        for (window, bits) in windows.iter().enumerate() {
            if !present[window] {
                continue;
            }
            let len = bits
                .iter()
                .rposition(|&octet| octet != 0)
                .map(|pos| pos + 1)
                .unwrap_or(0);
            // Window numbers and lengths fit into an octet.
            res.push(window as u8);
            res.push(len as u8);
            res.extend_from_slice(&bits[..len]);
        }
        RtypeBitmap(res.into())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether the bitmap contains the given type.
    #[must_use]
    pub fn contains(&self, rtype: Rtype) -> bool {
        let (window, octet, mask) = split_rtype(rtype);
        let mut data = self.as_slice();
        while let [number, len, rest @ ..] = data {
            let len = usize::from(*len);
            if usize::from(*number) == window {
                return rest
                    .get(octet)
                    .filter(|_| octet < len)
                    .map(|bits| bits & mask != 0)
                    .unwrap_or(false);
            }
            data = rest.get(len..).unwrap_or_default();
        }
        false
    }

    /// Returns an iterator over the types in ascending order.
    #[must_use]
    pub fn iter(&self) -> RtypeBitmapIter<'_> {
        RtypeBitmapIter {
            data: self.as_slice(),
            window: 0,
            octet: 0,
            bit: 0,
        }
    }

    /// Takes a bitmap from all the remaining data of the cursor.
    pub fn parse(
        cursor: &mut WireCursor<'_>,
        allow_empty: bool,
    ) -> Result<Self, ParseError> {
        let data = cursor.take_rest();
        check_bitmap(data, allow_empty)?;
        copy_bytes(data).map(RtypeBitmap)
    }

    /// Scans a bitmap from all the remaining tokens.
    ///
    /// Each token is a type mnemonic or the generic `TYPEnnn` form.
    pub fn scan(
        tokens: &mut Tokens<'_>,
        allow_empty: bool,
    ) -> Result<Self, ScanError> {
        let mut types = Vec::new();
        while let Some(token) = tokens.next_token()? {
            let rtype = Rtype::from_bytes(token.as_str().as_bytes())
                .ok_or(ScanError::Syntax("unknown record type"))?;
            types.push(rtype);
        }
        if types.is_empty() && !allow_empty {
            return Err(ScanError::Syntax("empty type bitmap"));
        }
        Ok(Self::from_types(types))
    }
}

//--- Compose

impl Compose for RtypeBitmap {
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.as_slice())
    }
}

//--- IntoIterator

impl<'a> IntoIterator for &'a RtypeBitmap {
    type Item = Rtype;
    type IntoIter = RtypeBitmapIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- Display

impl fmt::Display for RtypeBitmap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(rtype) = iter.next() {
            fmt::Display::fmt(&rtype, f)?;
        }
        for rtype in iter {
            write!(f, " {}", rtype)?;
        }
        Ok(())
    }
}

//------------ RtypeBitmapIter -----------------------------------------------

/// An iterator over the types of a bitmap.
#[derive(Clone, Debug)]
pub struct RtypeBitmapIter<'a> {
    /// The data starting at the current window.
    data: &'a [u8],

    /// The number of the current window.
    window: u16,

    /// The index of the current octet within the window bitmap.
    octet: usize,

    /// The next bit to look at in the current octet.
    bit: u16,
}

impl Iterator for RtypeBitmapIter<'_> {
    type Item = Rtype;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (&number, rest) = self.data.split_first()?;
            let (&len, bits) = rest.split_first()?;
            self.window = u16::from(number);
            let bits = bits.get(..usize::from(len))?;
            while self.octet < bits.len() {
                let octet = bits[self.octet];
                while self.bit < 8 {
                    let bit = self.bit;
                    self.bit += 1;
                    if octet & (0x80 >> bit) != 0 {
                        // The octet index is below 32.
                        return Some(Rtype::from_int(
                            (self.window << 8)
                                | ((self.octet as u16) << 3)
                                | bit,
                        ));
                    }
                }
                self.bit = 0;
                self.octet += 1;
            }
            self.octet = 0;
            self.data = &self.data[2 + bits.len()..];
        }
    }
}

//------------ Helpers -------------------------------------------------------

/// Splits a type into window number, octet index, and bit mask.
fn split_rtype(rtype: Rtype) -> (usize, usize, u8) {
    let value = rtype.to_int();
    (
        usize::from(value >> 8),
        usize::from((value & 0xFF) >> 3),
        0x80 >> (value & 0x07),
    )
}

/// Checks that the data is a well-formed type bitmap.
fn check_bitmap(mut data: &[u8], allow_empty: bool) -> Result<(), ParseError> {
    if data.is_empty() && !allow_empty {
        return Err(ParseError::form_error("empty type bitmap"));
    }
    let mut last_window = None;
    while !data.is_empty() {
        let (window, len) = match *data {
            [window, len, ..] => (window, usize::from(len)),
            _ => return Err(ParseError::form_error("short type bitmap")),
        };
        if last_window.map(|last| window <= last).unwrap_or(false) {
            return Err(ParseError::form_error(
                "type bitmap windows out of order",
            ));
        }
        if len == 0 || len > 32 {
            return Err(ParseError::form_error(
                "invalid type bitmap window length",
            ));
        }
        let bits = data
            .get(2..2 + len)
            .ok_or(ParseError::form_error("short type bitmap"))?;
        if bits[len - 1] == 0 {
            return Err(ParseError::form_error(
                "type bitmap window ends in zero octet",
            ));
        }
        last_window = Some(window);
        data = &data[2 + len..];
    }
    Ok(())
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{
        test_compose_parse, test_display_scan, test_scan,
    };
    use core::str::FromStr;
    use rstest::rstest;

    #[test]
    fn bitmap_from_types() {
        let bitmap = RtypeBitmap::from_types([
            Rtype::A,
            Rtype::MX,
            Rtype::RRSIG,
            Rtype::NSEC,
            Rtype::from_int(1234),
        ]);
        let mut expected = b"\x00\x06\x40\x01\x00\x00\x00\x03\x04\x1b".to_vec();
        expected.extend_from_slice(&[0; 26]);
        expected.push(0x20);
        assert_eq!(bitmap.as_slice(), expected);
        assert!(bitmap.contains(Rtype::MX));
        assert!(bitmap.contains(Rtype::from_int(1234)));
        assert!(!bitmap.contains(Rtype::NS));
        assert!(!bitmap.contains(Rtype::from_int(4000)));
        assert_eq!(
            bitmap.iter().collect::<Vec<_>>(),
            [
                Rtype::A,
                Rtype::MX,
                Rtype::RRSIG,
                Rtype::NSEC,
                Rtype::from_int(1234)
            ]
        );
        assert_eq!(bitmap.to_string(), "A MX RRSIG NSEC TYPE1234");
        assert!(RtypeBitmap::from_octets(bitmap.0.clone(), false).is_ok());
    }

    #[rstest]
    #[case(b"", true, true)]
    #[case(b"", false, false)]
    #[case(b"\x00", true, false)]
    #[case(b"\x00\x00", true, false)]
    #[case(b"\x00\x01\x02", true, true)]
    #[case(b"\x00\x01\x00", true, false)]
    #[case(b"\x00\x02\x02", true, false)]
    #[case(b"\x01\x01\x01\x00\x01\x01", true, false)]
    #[case(b"\x01\x01\x01\x01\x01\x01", true, false)]
    #[case(b"\x00\x01\x01\x01\x01\x01", true, true)]
    fn bitmap_wire(
        #[case] data: &[u8],
        #[case] allow_empty: bool,
        #[case] ok: bool,
    ) {
        assert_eq!(
            RtypeBitmap::from_octets(Bytes::copy_from_slice(data), allow_empty)
                .is_ok(),
            ok
        );
    }

    #[test]
    fn bitmap_long_window() {
        let mut data = vec![0, 33];
        data.extend_from_slice(&[1; 33]);
        assert!(RtypeBitmap::from_octets(data.into(), false).is_err());
        let mut data = vec![0, 32];
        data.extend_from_slice(&[1; 32]);
        assert!(RtypeBitmap::from_octets(data.into(), false).is_ok());
    }

    #[test]
    fn nsec_compose_parse_scan() {
        let rdata = Nsec::new(
            Dname::from_str("example.com").unwrap(),
            RtypeBitmap::from_types([Rtype::A, Rtype::RRSIG, Rtype::NSEC]),
        )
        .unwrap();
        test_compose_parse(&rdata);
        test_scan(&["example.com.", "A", "NSEC", "RRSIG"], &rdata);
        test_scan(&["example.com.", "TYPE1", "RRSIG", "nsec"], &rdata);
        test_display_scan(&rdata);
        assert_eq!(rdata.to_string(), "example.com. A RRSIG NSEC");
    }

    #[test]
    fn nsec_empty_bitmap() {
        assert!(Nsec::new(Dname::root(), RtypeBitmap::default()).is_err());
        let mut cursor = WireCursor::from_rdata(b"\x00").unwrap();
        assert!(Nsec::parse_rdata(&mut cursor).is_err());
        let mut cursor = WireCursor::from_rdata(b"\x00\x00\x01\x02").unwrap();
        assert!(Nsec::parse_rdata(&mut cursor).is_ok());
    }

    #[test]
    fn nsec_unknown_mnemonic() {
        let origin = Dname::root();
        let mut scanner = crate::base::scan::IterScanner::new([".", "BOGUS"]);
        let mut tokens = Tokens::new(&mut scanner, &origin);
        assert!(Nsec::scan_rdata(&mut tokens).is_err());
    }
}
