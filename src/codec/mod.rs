//! Converting record data between its forms.
//!
//! Record data comes in three forms. The *wire form* is the record data as
//! it appears in a DNS message, the *text form* is the presentation format
//! used by zone files, and the *struct form* is the [`RecordData`] enum with
//! one typed variant per supported record type.
//!
//! The codec converts between these forms with the canonical wire form as
//! the pivot. Decoding from wire or text form validates the input and
//! writes its canonical, uncompressed wire form into a buffer provided by
//! the caller. The result is an [`Rdata`] handle referencing that buffer
//! and remembering class and record type. The handle can then be turned
//! into the text or struct form.
//!
//! ```
//! use rrcodec::base::{Class, Dname, Rtype};
//! use rrcodec::base::scan::StrScanner;
//! use rrcodec::codec;
//!
//! let origin = Dname::root();
//! let mut buf = [0u8; 512];
//! let rdata = codec::from_text(
//!     Class::IN,
//!     Rtype::MX,
//!     &mut StrScanner::new("10 mail"),
//!     &origin,
//!     &mut buf,
//! ).unwrap();
//! assert_eq!(rdata.data(), b"\x00\x0a\x04mail\x00");
//! assert_eq!(rdata.to_string(), "10 mail.");
//! ```
//!
//! Record types are looked up in the [registry]. Types without an entry
//! are treated as opaque data which only has the generic text form of
//! [RFC 3597].
//!
//! [RFC 3597]: https://tools.ietf.org/html/rfc3597

pub use self::error::Error;

pub mod error;
pub mod registry;

use self::registry::Descriptor;
use crate::base::cursor::{WireBuf, WireCursor};
use crate::base::iana::{Class, Rtype};
use crate::base::name::{Decompress, Dname};
use crate::base::rdata::{
    fmt_generic, is_generic_marker, scan_generic_without_marker,
};
use crate::base::scan::{Scanner, Tokens};
use crate::rdata::RecordData;
use core::fmt;
use tracing::{debug, trace};

//------------ Config --------------------------------------------------------

/// Options for decoding record data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// The policy for compressed domain names in wire format.
    ///
    /// With [`Decompress::Allowed`], compression pointers are followed in
    /// the fields of record types that permit them. With
    /// [`Decompress::Never`], every pointer is an error.
    pub decompress: Decompress,

    /// Whether the generic text format is accepted for known types.
    ///
    /// Data of unknown record types can only be given in generic format,
    /// so it is always accepted for those.
    pub generic_text: bool,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_decompress(mut self, decompress: Decompress) -> Self {
        self.decompress = decompress;
        self
    }

    #[must_use]
    pub fn with_generic_text(mut self, generic_text: bool) -> Self {
        self.generic_text = generic_text;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            decompress: Decompress::Allowed,
            generic_text: true,
        }
    }
}

//------------ Rdata ---------------------------------------------------------

/// Record data in canonical wire form.
///
/// A value of this type can only be created by the codec functions. It
/// references the buffer the canonical wire form was written to and is
/// guaranteed to be valid record data for its class and type.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Rdata<'a> {
    class: Class,
    rtype: Rtype,
    data: &'a [u8],
}

impl<'a> Rdata<'a> {
    #[must_use]
    pub fn class(&self) -> Class {
        self.class
    }

    #[must_use]
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the canonical wire form.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn descriptor(&self) -> &'static Descriptor {
        registry::descriptor(self.class, self.rtype)
    }
}

//--- Display

impl fmt::Display for Rdata<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match to_text(self) {
            Ok(text) => f.write_str(&text),
            Err(_) => fmt_generic(self.data, f),
        }
    }
}

//--- Debug

impl fmt::Debug for Rdata<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Rdata")
            .field("class", &self.class)
            .field("rtype", &self.rtype)
            .field("data", &self.data)
            .finish()
    }
}

//------------ Wire Form -----------------------------------------------------

/// Decodes record data in wire form.
///
/// The cursor must cover exactly the record data. It needs to view the
/// complete message if the record data contains compressed domain names.
/// The canonical wire form is written into `buf`, whose content is
/// undefined if the function fails.
pub fn from_wire<'a>(
    class: Class,
    rtype: Rtype,
    cursor: &mut WireCursor<'_>,
    decompress: Decompress,
    buf: &'a mut [u8],
) -> Result<Rdata<'a>, Error> {
    let config = Config::default().with_decompress(decompress);
    from_wire_with(class, rtype, cursor, &config, buf)
}

/// Decodes record data in wire form using explicit options.
pub fn from_wire_with<'a>(
    class: Class,
    rtype: Rtype,
    cursor: &mut WireCursor<'_>,
    config: &Config,
    buf: &'a mut [u8],
) -> Result<Rdata<'a>, Error> {
    trace!(
        "from_wire: {class} {rtype}, {} octets at {}",
        cursor.remaining(),
        cursor.pos()
    );
    let res = decode_wire(class, rtype, cursor, config.decompress, buf);
    if let Err(ref err) = res {
        debug!("rejected {class} {rtype} wire data: {err}");
    }
    res
}

fn decode_wire<'a>(
    class: Class,
    rtype: Rtype,
    cursor: &mut WireCursor<'_>,
    decompress: Decompress,
    buf: &'a mut [u8],
) -> Result<Rdata<'a>, Error> {
    let desc = registry::descriptor(class, rtype);
    if cursor.is_empty() && !desc.empty_ok() {
        return Err(Error::form("empty record data"));
    }
    let mut sub = cursor
        .take_cursor(cursor.remaining())?
        .with_decompress(decompress);
    let mut target = WireBuf::new(buf);
    desc.from_wire(rtype, &mut sub, &mut target)?;
    Ok(Rdata {
        class,
        rtype,
        data: target.freeze(),
    })
}

//------------ Text Form -----------------------------------------------------

/// Decodes record data in presentation format.
///
/// The scanner provides the tokens of the record data only. Relative
/// domain names are made absolute by appending `origin`.
pub fn from_text<'a>(
    class: Class,
    rtype: Rtype,
    scanner: &mut dyn Scanner,
    origin: &Dname,
    buf: &'a mut [u8],
) -> Result<Rdata<'a>, Error> {
    from_text_with(class, rtype, scanner, origin, &Config::default(), buf)
}

/// Decodes record data in presentation format using explicit options.
pub fn from_text_with<'a>(
    class: Class,
    rtype: Rtype,
    scanner: &mut dyn Scanner,
    origin: &Dname,
    config: &Config,
    buf: &'a mut [u8],
) -> Result<Rdata<'a>, Error> {
    trace!("from_text: {class} {rtype}, origin {origin}");
    let mut tokens = Tokens::new(scanner, origin);
    let res = decode_text(class, rtype, &mut tokens, config, buf);
    if let Err(ref err) = res {
        debug!("rejected {class} {rtype} text data: {err}");
    }
    res
}

fn decode_text<'a>(
    class: Class,
    rtype: Rtype,
    tokens: &mut Tokens<'_>,
    config: &Config,
    buf: &'a mut [u8],
) -> Result<Rdata<'a>, Error> {
    let desc = registry::descriptor(class, rtype);
    let generic = match tokens.peek()? {
        Some(token) => {
            is_generic_marker(token)
                && (config.generic_text || desc.is_opaque())
        }
        None => return Err(Error::form("empty record data")),
    };
    let mut target = WireBuf::new(buf);
    if generic {
        let _ = tokens.next_token()?;
        let data = scan_generic_without_marker(tokens)?;
        trace!("generic data for {rtype}, {} octets", data.len());
        if data.is_empty() && !desc.empty_ok() {
            return Err(Error::form("empty record data"));
        }
        let mut cursor =
            WireCursor::from_rdata(&data)?.with_decompress(Decompress::Never);
        desc.from_wire(rtype, &mut cursor, &mut target)?;
    } else {
        desc.from_text(rtype, tokens, &mut target)?;
        tokens.check_exhausted()?;
        if target.is_empty() && !desc.empty_ok() {
            return Err(Error::form("empty record data"));
        }
    }
    Ok(Rdata {
        class,
        rtype,
        data: target.freeze(),
    })
}

/// Converts record data into presentation format.
///
/// Record types without a presentation format of their own, such as OPT
/// and NULL, as well as unknown types are given in generic format.
pub fn to_text(rdata: &Rdata) -> Result<String, Error> {
    trace!("to_text: {} {}", rdata.class, rdata.rtype);
    rdata.descriptor().to_text(rdata.rtype, rdata.data)
}

//------------ Struct Form ---------------------------------------------------

/// Converts record data into the struct form.
///
/// All fields of the returned value are owned copies.
pub fn to_struct(rdata: &Rdata) -> Result<RecordData, Error> {
    trace!("to_struct: {} {}", rdata.class, rdata.rtype);
    rdata.descriptor().to_struct(rdata.rtype, rdata.data)
}

/// Converts the struct form into canonical wire form.
///
/// The record type is taken from `data`. The `Other` variant is accepted
/// for known record types, too, if its content is valid for the type.
pub fn from_struct<'a>(
    data: &RecordData,
    class: Class,
    buf: &'a mut [u8],
) -> Result<Rdata<'a>, Error> {
    let rtype = data.rtype();
    trace!("from_struct: {class} {rtype}");
    let desc = registry::descriptor(class, rtype);
    let mut target = WireBuf::new(buf);
    if let Err(err) = desc.from_struct(data, &mut target) {
        debug!("rejected {class} {rtype} struct data: {err}");
        return Err(err);
    }
    Ok(Rdata {
        class,
        rtype,
        data: target.freeze(),
    })
}

//============ Testing =======================================================

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::base::scan::{IterScanner, StrScanner};
    use crate::rdata::{Mx, A};
    use rstest::rstest;

    const BUF_LEN: usize = 0x10000;

    /// Checks that the struct form reproduces the canonical wire form.
    fn check_struct(rdata: &Rdata) {
        let data = to_struct(rdata).unwrap();
        let mut buf = vec![0; BUF_LEN];
        let back = from_struct(&data, rdata.class(), &mut buf).unwrap();
        assert_eq!(back.data(), rdata.data());
    }

    /// Checks that the text form reproduces the canonical wire form.
    fn check_display(rdata: &Rdata) {
        let text = rdata.to_string();
        let mut buf = vec![0; BUF_LEN];
        let back = from_text(
            rdata.class(),
            rdata.rtype(),
            &mut StrScanner::new(&text),
            &Dname::root(),
            &mut buf,
        )
        .unwrap();
        assert_eq!(back.data(), rdata.data(), "{}", text);
    }

    /// Checks decoding wire data and returns the canonical form.
    ///
    /// Accepted data is put through the struct and text round trips.
    pub(crate) fn check_wire(
        class: Class,
        rtype: Rtype,
        data: &[u8],
        ok: bool,
    ) -> Option<Vec<u8>> {
        let mut cursor = WireCursor::from_rdata(data).unwrap();
        let mut buf = vec![0; BUF_LEN];
        match from_wire(class, rtype, &mut cursor, Decompress::Allowed, &mut buf)
        {
            Ok(rdata) => {
                assert!(ok, "{rtype} wire data {data:02x?} accepted");
                check_struct(&rdata);
                check_display(&rdata);
                Some(rdata.data().to_vec())
            }
            Err(err) => {
                assert!(!ok, "{rtype} wire data {data:02x?} rejected: {err}");
                None
            }
        }
    }

    /// Checks decoding text data and returns the canonical form.
    pub(crate) fn check_text(
        class: Class,
        rtype: Rtype,
        text: &str,
        ok: bool,
    ) -> Option<Vec<u8>> {
        let mut buf = vec![0; BUF_LEN];
        match from_text(
            class,
            rtype,
            &mut StrScanner::new(text),
            &Dname::root(),
            &mut buf,
        ) {
            Ok(rdata) => {
                assert!(ok, "{rtype} text {text:?} accepted");
                check_struct(&rdata);
                check_display(&rdata);
                Some(rdata.data().to_vec())
            }
            Err(err) => {
                assert!(!ok, "{rtype} text {text:?} rejected: {err}");
                None
            }
        }
    }

    #[rstest]
    #[case(Rtype::A, b"\xc0\x00\x02\x01", true)]
    #[case(Rtype::A, b"\xc0\x00\x02", false)]
    #[case(Rtype::A, b"\xc0\x00\x02\x01\x00", false)]
    #[case(Rtype::NS, b"\x03ns1\x00", true)]
    #[case(Rtype::NS, b"\x03ns1", false)]
    #[case(Rtype::TXT, b"\x00", true)]
    #[case(Rtype::TXT, b"", false)]
    #[case(Rtype::NULL, b"", true)]
    #[case(Rtype::OPT, b"", true)]
    #[case(Rtype::from_int(4711), b"", true)]
    #[case(Rtype::from_int(4711), b"\x01\x02", true)]
    fn wire(#[case] rtype: Rtype, #[case] data: &[u8], #[case] ok: bool) {
        check_wire(Class::IN, rtype, data, ok);
    }

    #[rstest]
    #[case(Rtype::A, "192.0.2.1", true)]
    #[case(Rtype::A, "192.0.2.1 1", false)]
    #[case(Rtype::A, "", false)]
    #[case(Rtype::MX, "10 mail.example.com.", true)]
    #[case(Rtype::MX, "10", false)]
    #[case(Rtype::TXT, r#""hello world" foo"#, true)]
    #[case(Rtype::OPT, "", false)]
    #[case(Rtype::from_int(4711), "foo", false)]
    #[case(Rtype::from_int(4711), r"\# 2 0102", true)]
    #[case(Rtype::from_int(4711), r"\# 0", true)]
    #[case(Rtype::A, r"\# 4 C0000201", true)]
    #[case(Rtype::A, r"\# 3 C00002", false)]
    #[case(Rtype::TXT, r"\# 0", false)]
    #[case(Rtype::OPT, r"\# 0", true)]
    fn text(#[case] rtype: Rtype, #[case] input: &str, #[case] ok: bool) {
        check_text(Class::IN, rtype, input, ok);
    }

    #[test]
    fn generic_matches_typed() {
        assert_eq!(
            check_text(Class::IN, Rtype::A, r"\# 4 C0000201", true),
            check_text(Class::IN, Rtype::A, "192.0.2.1", true),
        );
    }

    #[test]
    fn generic_text_disabled() {
        let config = Config::new().with_generic_text(false);
        let origin = Dname::root();
        let mut buf = [0u8; 64];
        assert!(from_text_with(
            Class::IN,
            Rtype::A,
            &mut StrScanner::new(r"\# 4 C0000201"),
            &origin,
            &config,
            &mut buf
        )
        .is_err());
        let rdata = from_text_with(
            Class::IN,
            Rtype::from_int(4711),
            &mut StrScanner::new(r"\# 1 FF"),
            &origin,
            &config,
            &mut buf,
        )
        .unwrap();
        assert_eq!(rdata.data(), b"\xff");
    }

    #[test]
    fn class_specific_types() {
        // A in class CH is opaque data.
        let data = check_wire(Class::CH, Rtype::A, b"\x01\x02", true).unwrap();
        assert_eq!(data, b"\x01\x02");
        let mut buf = [0u8; 16];
        let mut cursor = WireCursor::from_rdata(b"\x01\x02").unwrap();
        let rdata = from_wire(
            Class::CH,
            Rtype::A,
            &mut cursor,
            Decompress::Allowed,
            &mut buf,
        )
        .unwrap();
        assert_eq!(rdata.to_string(), r"\# 2 0102");
        assert!(matches!(to_struct(&rdata), Ok(RecordData::Other(_))));
    }

    #[test]
    fn compressed_names_expanded() {
        // The MX exchange points back to the name at the message start.
        let msg = b"\x04mail\x07example\x00\x00\x0a\xc0\x00";
        let mut cursor = WireCursor::new(msg, 14, 4).unwrap();
        let mut buf = [0u8; 64];
        let rdata = from_wire(
            Class::IN,
            Rtype::MX,
            &mut cursor,
            Decompress::Allowed,
            &mut buf,
        )
        .unwrap();
        assert_eq!(rdata.data(), b"\x00\x0a\x04mail\x07example\x00");
        assert_eq!(rdata.to_string(), "10 mail.example.");
        assert!(cursor.is_empty());

        let mut cursor = WireCursor::new(msg, 14, 4).unwrap();
        assert!(from_wire(
            Class::IN,
            Rtype::MX,
            &mut cursor,
            Decompress::Never,
            &mut buf,
        )
        .unwrap_err()
        .is_form());
    }

    #[test]
    fn short_buffer() {
        let mut buf = [0u8; 3];
        let mut cursor = WireCursor::from_rdata(b"\xc0\x00\x02\x01").unwrap();
        assert_eq!(
            from_wire(
                Class::IN,
                Rtype::A,
                &mut cursor,
                Decompress::Allowed,
                &mut buf
            ),
            Err(Error::ShortBuf)
        );
        assert_eq!(
            from_struct(
                &RecordData::from(A::from_octets(192, 0, 2, 1)),
                Class::IN,
                &mut buf
            ),
            Err(Error::ShortBuf)
        );
    }

    #[test]
    fn struct_form() {
        let mx = Mx::new(10, "mail.example.".parse().unwrap());
        let mut buf = [0u8; 64];
        let rdata =
            from_struct(&RecordData::from(mx.clone()), Class::IN, &mut buf)
                .unwrap();
        assert_eq!(rdata.rtype(), Rtype::MX);
        assert_eq!(to_struct(&rdata), Ok(RecordData::from(mx)));

        // A in class CH is opaque and accepts any struct.
        let a = RecordData::from(A::from_octets(192, 0, 2, 1));
        let rdata = from_struct(&a, Class::CH, &mut buf).unwrap();
        assert_eq!(rdata.data(), b"\xc0\x00\x02\x01");
    }

    #[test]
    fn struct_form_other() {
        use crate::base::rdata::UnknownRecordData;
        use bytes::Bytes;

        let mut buf = [0u8; 64];
        let good = UnknownRecordData::from_octets(
            Rtype::A,
            Bytes::from_static(b"\xc0\x00\x02\x01"),
        )
        .unwrap();
        let rdata =
            from_struct(&RecordData::from(good), Class::IN, &mut buf).unwrap();
        assert_eq!(rdata.to_string(), "192.0.2.1");

        let bad = UnknownRecordData::from_octets(
            Rtype::A,
            Bytes::from_static(b"\xc0\x00"),
        )
        .unwrap();
        assert!(from_struct(&RecordData::from(bad), Class::IN, &mut buf)
            .unwrap_err()
            .is_form());
    }

    #[test]
    fn long_text() {
        // 300 strings of 255 octets each exceed the record data limit.
        let chunk = "x".repeat(255);
        let tokens: Vec<String> = (0..300).map(|_| chunk.clone()).collect();
        let mut buf = vec![0u8; 0x20000];
        let res = from_text(
            Class::IN,
            Rtype::TXT,
            &mut IterScanner::new(tokens.iter()),
            &Dname::root(),
            &mut buf,
        );
        assert_eq!(res, Err(Error::form("record data too long")));
    }

    #[test]
    fn opt_text() {
        let mut buf = [0u8; 16];
        let mut cursor = WireCursor::from_rdata(b"").unwrap();
        let rdata = from_wire(
            Class::IN,
            Rtype::OPT,
            &mut cursor,
            Decompress::Allowed,
            &mut buf,
        )
        .unwrap();
        assert_eq!(to_text(&rdata).unwrap(), r"\# 0");

        let mut buf = [0u8; 16];
        assert_eq!(
            from_text(
                Class::IN,
                Rtype::OPT,
                &mut StrScanner::new("8 0"),
                &Dname::root(),
                &mut buf
            ),
            Err(Error::NotImplemented)
        );
    }
}
