//! Domain names.
//!
//! Record data only ever needs absolute domain names in their uncompressed
//! wire format. The [`Dname`] type keeps exactly that in a [`Bytes`] value.
//! Reading names from wire format, possibly following compression
//! pointers, is done by the [`Decompressor`].

pub use self::decompress::{Compression, Decompress, Decompressor};

mod decompress;

use super::cursor::{copy_bytes, WireCursor};
use super::scan::{ScanError, Symbol, Token};
use super::wire::{Compose, ParseError};
use bytes::Bytes;
use core::{fmt, hash, str};
use octseq::builder::OctetsBuilder;

//------------ Dname ---------------------------------------------------------

/// An uncompressed, absolute domain name.
///
/// Comparison and hashing ignore ASCII case.
#[derive(Clone)]
pub struct Dname(Bytes);

impl Dname {
    /// The maximum length of a domain name in wire format.
    pub const MAX_LEN: usize = 255;

    /// The maximum length of a label.
    pub const MAX_LABEL_LEN: usize = 63;

    /// Returns the root name.
    #[must_use]
    pub fn root() -> Self {
        Dname(Bytes::from_static(b"\0"))
    }

    /// Creates a domain name from its wire format.
    pub fn from_octets(octets: Bytes) -> Result<Self, DnameError> {
        check_name(&octets)?;
        Ok(Dname(octets))
    }

    /// Creates a domain name from a slice with its wire format.
    pub fn from_slice(slice: &[u8]) -> Result<Self, DnameError> {
        check_name(slice)?;
        copy_bytes(slice)
            .map(Dname)
            .map_err(|_| DnameError::OutOfMemory)
    }

    pub(super) fn from_octets_unchecked(octets: Bytes) -> Self {
        Dname(octets)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Returns the length of the wire format of the name.
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    /// Returns an iterator over the labels, excluding the root label.
    #[must_use]
    pub fn labels(&self) -> Labels<'_> {
        Labels { slice: &self.0 }
    }

    /// Takes a name from the cursor.
    ///
    /// Whether a compression pointer is acceptable depends on both the
    /// field’s `compression` and the cursor’s decompression policy.
    pub fn parse(
        cursor: &mut WireCursor<'_>,
        compression: Compression,
    ) -> Result<Self, ParseError> {
        Decompressor::new(compression, cursor.decompress()).read(cursor)
    }

    /// Converts a presentation format token into a name.
    ///
    /// A name that doesn’t end in an unescaped dot is relative and gets
    /// `origin` appended. A sole `@` is the origin itself.
    pub fn from_token(token: &Token, origin: &Dname) -> Result<Self, ScanError> {
        match token.as_str() {
            "@" if !token.is_quoted() => return Ok(origin.clone()),
            "." => return Ok(Dname::root()),
            "" => return Err(ScanError::Syntax("empty domain name")),
            _ => {}
        }

        let mut name = Vec::new();
        name.try_reserve_exact(Dname::MAX_LEN)
            .map_err(|_| ScanError::Syntax("out of memory"))?;
        let mut label = Vec::with_capacity(Dname::MAX_LABEL_LEN);
        let mut absolute = false;
        for symbol in token.symbols() {
            match symbol? {
                Symbol::Char('.') => {
                    push_label(&mut name, &label)?;
                    label.clear();
                    absolute = true;
                }
                symbol => {
                    absolute = false;
                    if label.len() == Dname::MAX_LABEL_LEN {
                        return Err(ScanError::Syntax("long label"));
                    }
                    label.push(symbol.into_octet()?);
                }
            }
        }
        if absolute {
            name.push(0);
        } else {
            push_label(&mut name, &label)?;
            if name.len() + origin.len() > Dname::MAX_LEN {
                return Err(ScanError::Syntax("long domain name"));
            }
            name.extend_from_slice(origin.as_slice());
        }
        Ok(Dname(name.into()))
    }
}

fn push_label(name: &mut Vec<u8>, label: &[u8]) -> Result<(), ScanError> {
    if label.is_empty() {
        return Err(ScanError::Syntax("empty label"));
    }
    if name.len() + label.len() + 2 > Dname::MAX_LEN {
        return Err(ScanError::Syntax("long domain name"));
    }
    // Label length is checked while collecting.
    name.push(label.len() as u8);
    name.extend_from_slice(label);
    Ok(())
}

fn check_name(slice: &[u8]) -> Result<(), DnameError> {
    if slice.len() > Dname::MAX_LEN {
        return Err(DnameError::LongName);
    }
    let mut pos = 0;
    loop {
        let len = match slice.get(pos) {
            Some(&len) => usize::from(len),
            None => return Err(DnameError::ShortInput),
        };
        if len == 0 {
            break;
        }
        if len > Dname::MAX_LABEL_LEN {
            return Err(DnameError::BadLabel);
        }
        pos += len + 1;
    }
    if pos + 1 != slice.len() {
        return Err(DnameError::TrailingData);
    }
    Ok(())
}

//--- Compose

impl Compose for Dname {
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.as_slice())
    }
}

//--- FromStr

impl str::FromStr for Dname {
    type Err = ScanError;

    /// Scans a name relative to the root.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dname::from_token(&Token::new(s, false), &Dname::root())
    }
}

//--- PartialEq, Eq, and Hash

impl PartialEq for Dname {
    fn eq(&self, other: &Self) -> bool {
        // Length octets are never letters, so this compares labels.
        self.as_slice().eq_ignore_ascii_case(other.as_slice())
    }
}

impl Eq for Dname {}

impl hash::Hash for Dname {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for ch in self.as_slice() {
            hash::Hash::hash(&ch.to_ascii_lowercase(), state)
        }
    }
}

//--- Display and Debug

impl fmt::Display for Dname {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for label in self.labels() {
            for &ch in label {
                match ch {
                    b'.' | b'(' | b')' | b'@' | b'$' => {
                        write!(f, "{}", Symbol::SimpleEscape(ch))?
                    }
                    _ => write!(f, "{}", Symbol::from_octet(ch))?,
                }
            }
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Dname {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Dname({})", self)
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for Dname {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Dname {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//------------ Labels --------------------------------------------------------

/// An iterator over the content of the non-root labels of a name.
#[derive(Clone, Debug)]
pub struct Labels<'a> {
    slice: &'a [u8],
}

impl<'a> Iterator for Labels<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, rest) = self.slice.split_first()?;
        if len == 0 {
            return None;
        }
        let (label, rest) = rest.split_at(usize::from(len));
        self.slice = rest;
        Some(label)
    }
}

//============ Error Types ===================================================

//------------ DnameError ----------------------------------------------------

/// An octets slice isn’t the wire format of an uncompressed domain name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DnameError {
    /// A label was longer than 63 octets or of an unsupported type.
    BadLabel,

    /// The name was longer than 255 octets.
    LongName,

    /// The root label was missing.
    ShortInput,

    /// There was data after the root label.
    TrailingData,

    /// Memory for the name could not be allocated.
    OutOfMemory,
}

//--- Display and Error

impl fmt::Display for DnameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            DnameError::BadLabel => "invalid label",
            DnameError::LongName => "long domain name",
            DnameError::ShortInput => "unexpected end of input",
            DnameError::TrailingData => "trailing data",
            DnameError::OutOfMemory => "out of memory",
        })
    }
}

impl std::error::Error for DnameError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    fn scan(text: &str, origin: &str) -> Result<Dname, ScanError> {
        Dname::from_token(
            &Token::new(text, false),
            &Dname::from_str(origin).unwrap(),
        )
    }

    #[test]
    fn from_token() {
        assert_eq!(
            scan("www.example.com.", "org.").unwrap().as_slice(),
            b"\x03www\x07example\x03com\x00"
        );
        assert_eq!(
            scan("www", "example.com.").unwrap().as_slice(),
            b"\x03www\x07example\x03com\x00"
        );
        assert_eq!(scan("@", "example.com.").unwrap().to_string(), "example.com.");
        assert!(scan(".", "example.com.").unwrap().is_root());
        assert_eq!(
            scan(r"a\.b.c.", ".").unwrap().as_slice(),
            b"\x03a.b\x01c\x00"
        );
        assert_eq!(
            scan(r"\065\000.", ".").unwrap().as_slice(),
            b"\x02A\x00\x00"
        );
    }

    #[test]
    fn from_token_errors() {
        assert!(scan("a..b.", ".").is_err());
        assert!(scan(".a.", ".").is_err());
        assert!(scan("..", ".").is_err());
        assert!(scan("a\\", ".").is_err());
        assert!(scan("ä.", ".").is_err());
        let long_label = "x".repeat(64);
        assert_eq!(
            scan(&long_label, "."),
            Err(ScanError::Syntax("long label"))
        );
        let ok_label = "x".repeat(63);
        assert!(scan(&ok_label, ".").is_ok());
        let long_name = format!("{0}.{0}.{0}.{0}.", ok_label);
        assert_eq!(
            scan(&long_name, "."),
            Err(ScanError::Syntax("long domain name"))
        );
        // Fits on its own, but not with the origin appended.
        let relative = format!("{0}.{0}.{0}", ok_label);
        assert!(scan(&relative, ".").is_ok());
        assert_eq!(
            scan(&relative, &format!("{}.", "y".repeat(62))),
            Err(ScanError::Syntax("long domain name"))
        );
    }

    #[test]
    fn display() {
        assert_eq!(Dname::root().to_string(), ".");
        assert_eq!(
            Dname::from_slice(b"\x03a.b\x04c d\"\x01\x00\x00")
                .unwrap()
                .to_string(),
            "a\\.b.c\\ d\\\".\\000."
        );
        let name = Dname::from_str("Example.COM").unwrap();
        assert_eq!(name.to_string(), "Example.COM.");
        assert_eq!(format!("{:?}", name), "Dname(Example.COM.)");
    }

    #[test]
    fn display_round_trip() {
        let name =
            Dname::from_slice(b"\x05a.@$(\x03\xff ;\x00").unwrap();
        assert_eq!(Dname::from_str(&name.to_string()).unwrap(), name);
    }

    #[test]
    fn eq_ignores_case() {
        assert_eq!(
            Dname::from_str("example.com").unwrap(),
            Dname::from_str("EXAMPLE.com.").unwrap()
        );
        assert_ne!(
            Dname::from_str("example.com").unwrap(),
            Dname::from_str("example.net").unwrap()
        );
    }

    #[test]
    fn from_slice_checks() {
        assert!(Dname::from_slice(b"\x00").is_ok());
        assert_eq!(Dname::from_slice(b""), Err(DnameError::ShortInput));
        assert_eq!(Dname::from_slice(b"\x03ab"), Err(DnameError::ShortInput));
        assert_eq!(Dname::from_slice(b"\x00\x00"), Err(DnameError::TrailingData));
        assert_eq!(Dname::from_slice(b"\xc0\x00"), Err(DnameError::BadLabel));
    }

    #[test]
    fn labels() {
        let name = Dname::from_str("www.example.com").unwrap();
        let labels: Vec<_> = name.labels().collect();
        assert_eq!(labels, [&b"www"[..], b"example", b"com"]);
        assert_eq!(Dname::root().labels().count(), 0);
    }
}
