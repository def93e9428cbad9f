//! The table of supported record types.
//!
//! Each supported combination of class and record type has a
//! [`Descriptor`] with a few properties of the type and the functions
//! converting between the forms of its record data. The descriptors live
//! in a static table sorted by class and type, so finding one is a binary
//! search. Types that are defined for a single class only are registered
//! for that class. All others are registered for any class.
//!
//! Record types without an entry are handled by the [opaque
//! descriptor][opaque] which treats record data as an uninterpreted blob.

use super::error::Error;
use crate::base::cursor::{copy_bytes, WireBuf, WireCursor};
use crate::base::iana::{Class, Rtype};
use crate::base::name::{Compression, Decompress};
use crate::base::rdata::{RecordDataCodec, UnknownRecordData};
use crate::base::scan::Tokens;
use crate::rdata::{
    Aaaa, Cname, Csync, Hinfo, Hip, Isdn, Mb, Md, Mf, Mg, Minfo, Mr, Mx,
    Ns, Nsec, Null, Opt, Ptr, RecordData, Soa, Srv, Txt, Variant, Wks, A,
};
use core::{fmt, mem};

//------------ Function Types ------------------------------------------------

/// Converts wire format into canonical wire format.
///
/// The cursor covers the record data. The function must consume all of it.
pub type FromWireFn = fn(
    rtype: Rtype,
    cursor: &mut WireCursor<'_>,
    target: &mut WireBuf<'_>,
) -> Result<(), Error>;

/// Converts presentation format into canonical wire format.
///
/// Checking for trailing tokens is left to the caller.
pub type FromTextFn = fn(
    rtype: Rtype,
    tokens: &mut Tokens<'_>,
    target: &mut WireBuf<'_>,
) -> Result<(), Error>;

/// Converts canonical wire format into presentation format.
pub type ToTextFn = fn(rtype: Rtype, data: &[u8]) -> Result<String, Error>;

/// Converts canonical wire format into the struct form.
pub type ToStructFn =
    fn(rtype: Rtype, data: &[u8]) -> Result<RecordData, Error>;

/// Converts the struct form into canonical wire format.
pub type FromStructFn =
    fn(data: &RecordData, target: &mut WireBuf<'_>) -> Result<(), Error>;

//------------ Descriptor ----------------------------------------------------

/// The description of one supported record type.
#[derive(Clone, Copy)]
pub struct Descriptor {
    /// The class the type is registered for or `None` for any class.
    class: Option<Class>,
    rtype: Rtype,
    struct_size: usize,
    empty_ok: bool,
    compression: Compression,
    from_wire: FromWireFn,
    from_text: FromTextFn,
    to_text: ToTextFn,
    to_struct: ToStructFn,
    from_struct: FromStructFn,
}

impl Descriptor {
    /// Creates the descriptor for a record data type.
    const fn typed<T>(class: Option<Class>) -> Self
    where
        T: RecordDataCodec + Variant,
    {
        Descriptor {
            class,
            rtype: T::RTYPE,
            struct_size: mem::size_of::<T>(),
            empty_ok: false,
            compression: T::COMPRESSION,
            from_wire: from_wire::<T>,
            from_text: from_text::<T>,
            to_text: to_text::<T>,
            to_struct: to_struct::<T>,
            from_struct: from_struct::<T>,
        }
    }

    /// Creates the descriptor for a type registered for any class.
    const fn any<T: RecordDataCodec + Variant>() -> Self {
        Self::typed::<T>(None)
    }

    /// Creates the descriptor for a type registered for class IN only.
    const fn internet<T: RecordDataCodec + Variant>() -> Self {
        Self::typed::<T>(Some(Class::IN))
    }

    /// Allows the record data to be empty.
    const fn allow_empty(mut self) -> Self {
        self.empty_ok = true;
        self
    }

    /// Returns the class the type is registered for.
    ///
    /// This is `None` if the descriptor applies to all classes.
    #[must_use]
    pub fn class(&self) -> Option<Class> {
        self.class
    }

    #[must_use]
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the size of the struct form of the record data.
    #[must_use]
    pub fn struct_size(&self) -> usize {
        self.struct_size
    }

    /// Returns whether the record data may be empty.
    #[must_use]
    pub fn empty_ok(&self) -> bool {
        self.empty_ok
    }

    /// Returns whether domain names in the record data may be compressed.
    #[must_use]
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns whether this is the opaque descriptor.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        core::ptr::eq(self, &OPAQUE)
    }

    pub fn from_wire(
        &self,
        rtype: Rtype,
        cursor: &mut WireCursor<'_>,
        target: &mut WireBuf<'_>,
    ) -> Result<(), Error> {
        (self.from_wire)(rtype, cursor, target)
    }

    pub fn from_text(
        &self,
        rtype: Rtype,
        tokens: &mut Tokens<'_>,
        target: &mut WireBuf<'_>,
    ) -> Result<(), Error> {
        (self.from_text)(rtype, tokens, target)
    }

    pub fn to_text(&self, rtype: Rtype, data: &[u8]) -> Result<String, Error> {
        (self.to_text)(rtype, data)
    }

    pub fn to_struct(
        &self,
        rtype: Rtype,
        data: &[u8],
    ) -> Result<RecordData, Error> {
        (self.to_struct)(rtype, data)
    }

    pub fn from_struct(
        &self,
        data: &RecordData,
        target: &mut WireBuf<'_>,
    ) -> Result<(), Error> {
        (self.from_struct)(data, target)
    }

    fn key(&self) -> (Option<Class>, Rtype) {
        (self.class, self.rtype)
    }
}

//--- Debug

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("class", &self.class)
            .field("rtype", &self.rtype)
            .field("struct_size", &self.struct_size)
            .field("empty_ok", &self.empty_ok)
            .field("compression", &self.compression)
            .finish()
    }
}

//------------ The Table -----------------------------------------------------

/// All registered record types.
///
/// The table must be sorted by class, with `None` first, and then type.
static DESCRIPTORS: [Descriptor; 23] = [
    Descriptor::any::<Ns>(),
    Descriptor::any::<Md>(),
    Descriptor::any::<Mf>(),
    Descriptor::any::<Cname>(),
    Descriptor::any::<Soa>(),
    Descriptor::any::<Mb>(),
    Descriptor::any::<Mg>(),
    Descriptor::any::<Mr>(),
    Descriptor::any::<Null>().allow_empty(),
    Descriptor::any::<Ptr>(),
    Descriptor::any::<Hinfo>(),
    Descriptor::any::<Minfo>(),
    Descriptor::any::<Mx>(),
    Descriptor::any::<Txt>(),
    Descriptor::any::<Isdn>(),
    Descriptor::any::<Opt>().allow_empty(),
    Descriptor::any::<Nsec>(),
    Descriptor::any::<Hip>(),
    Descriptor::any::<Csync>(),
    Descriptor::internet::<A>(),
    Descriptor::internet::<Wks>(),
    Descriptor::internet::<Aaaa>(),
    Descriptor::internet::<Srv>(),
];

/// The descriptor for record types without an entry.
static OPAQUE: Descriptor = Descriptor {
    class: None,
    rtype: Rtype::from_int(0),
    struct_size: mem::size_of::<UnknownRecordData>(),
    empty_ok: true,
    compression: Compression::Forbidden,
    from_wire: opaque_from_wire,
    from_text: opaque_from_text,
    to_text: opaque_to_text,
    to_struct: opaque_to_struct,
    from_struct: opaque_from_struct,
};

/// Looks up the descriptor for a class and record type.
///
/// A descriptor registered for the specific class takes precedence over
/// one registered for any class. Returns [`Error::NotImplemented`] if there
/// is no descriptor.
pub fn lookup(class: Class, rtype: Rtype) -> Result<&'static Descriptor, Error> {
    find(Some(class), rtype)
        .or_else(|| find(None, rtype))
        .ok_or(Error::NotImplemented)
}

/// Returns the descriptor to use for a class and record type.
///
/// This is the registered descriptor or the opaque descriptor if there is
/// none.
#[must_use]
pub fn descriptor(class: Class, rtype: Rtype) -> &'static Descriptor {
    lookup(class, rtype).unwrap_or(&OPAQUE)
}

/// Returns the opaque descriptor.
#[must_use]
pub fn opaque() -> &'static Descriptor {
    &OPAQUE
}

/// Returns an iterator over all registered descriptors.
pub fn iter() -> impl Iterator<Item = &'static Descriptor> {
    DESCRIPTORS.iter()
}

fn find(class: Option<Class>, rtype: Rtype) -> Option<&'static Descriptor> {
    DESCRIPTORS
        .binary_search_by_key(&(class, rtype), Descriptor::key)
        .ok()
        .map(|idx| &DESCRIPTORS[idx])
}

//------------ Typed Operations ----------------------------------------------

/// Appends data to the target, translating a failure.
///
/// If the target has hit the record data ceiling, the data is too long
/// rather than the buffer too short.
fn compose<T: RecordDataCodec>(
    data: &T,
    target: &mut WireBuf<'_>,
) -> Result<(), Error> {
    data.compose_rdata(target).map_err(|_| compose_error(target))
}

pub(super) fn compose_error(target: &WireBuf<'_>) -> Error {
    if target.hit_ceiling() {
        Error::form("record data too long")
    } else {
        Error::ShortBuf
    }
}

/// Parses record data that has to cover all of the cursor.
fn parse_all<T: RecordDataCodec>(
    cursor: &mut WireCursor<'_>,
) -> Result<T, Error> {
    let data = T::parse_rdata(cursor)?;
    cursor.check_done()?;
    Ok(data)
}

/// Parses canonical record data.
fn parse_canonical<T: RecordDataCodec>(data: &[u8]) -> Result<T, Error> {
    let mut cursor =
        WireCursor::from_rdata(data)?.with_decompress(Decompress::Never);
    parse_all(&mut cursor)
}

fn from_wire<T: RecordDataCodec>(
    _rtype: Rtype,
    cursor: &mut WireCursor<'_>,
    target: &mut WireBuf<'_>,
) -> Result<(), Error> {
    compose(&parse_all::<T>(cursor)?, target)
}

fn from_text<T: RecordDataCodec>(
    _rtype: Rtype,
    tokens: &mut Tokens<'_>,
    target: &mut WireBuf<'_>,
) -> Result<(), Error> {
    compose(&T::scan_rdata(tokens)?, target)
}

fn to_text<T: RecordDataCodec>(
    _rtype: Rtype,
    data: &[u8],
) -> Result<String, Error> {
    parse_canonical::<T>(data).map(|data| data.to_string())
}

fn to_struct<T: RecordDataCodec + Variant>(
    _rtype: Rtype,
    data: &[u8],
) -> Result<RecordData, Error> {
    parse_canonical::<T>(data).map(Variant::into_all)
}

/// Composes the struct form.
///
/// The `Other` variant is accepted for the type, too. Its data is
/// validated first. Typed values may have been built without their
/// constructors, so their composed data is parsed again.
fn from_struct<T: RecordDataCodec + Variant>(
    data: &RecordData,
    target: &mut WireBuf<'_>,
) -> Result<(), Error> {
    if let Some(data) = T::from_all(data) {
        compose(data, target)?;
        return parse_canonical::<T>(target.as_slice()).map(drop);
    }
    match *data {
        RecordData::Other(ref other) if other.rtype() == T::RTYPE => {
            compose(&parse_canonical::<T>(other.data())?, target)
        }
        _ => Err(Error::form("record data of wrong type")),
    }
}

//------------ Opaque Operations ---------------------------------------------

fn opaque_from_wire(
    rtype: Rtype,
    cursor: &mut WireCursor<'_>,
    target: &mut WireBuf<'_>,
) -> Result<(), Error> {
    let data = UnknownRecordData::parse(rtype, cursor)?;
    data.compose_rdata(target)
        .map_err(|_| compose_error(target))
}

fn opaque_from_text(
    rtype: Rtype,
    tokens: &mut Tokens<'_>,
    target: &mut WireBuf<'_>,
) -> Result<(), Error> {
    let data = UnknownRecordData::scan(rtype, tokens)?;
    data.compose_rdata(target)
        .map_err(|_| compose_error(target))
}

fn opaque_to_text(rtype: Rtype, data: &[u8]) -> Result<String, Error> {
    opaque_to_struct(rtype, data).map(|data| data.to_string())
}

fn opaque_to_struct(rtype: Rtype, data: &[u8]) -> Result<RecordData, Error> {
    let data = UnknownRecordData::from_octets(rtype, copy_bytes(data)?)
        .map_err(|_| Error::form("record data too long"))?;
    Ok(RecordData::Other(data))
}

/// Composes any struct form as opaque data.
///
/// This happens for types registered for a specific class only that are
/// used with a different class.
fn opaque_from_struct(
    data: &RecordData,
    target: &mut WireBuf<'_>,
) -> Result<(), Error> {
    data.compose_rdata(target)
        .map_err(|_| compose_error(target))
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn table_sorted() {
        for pair in DESCRIPTORS.windows(2) {
            assert!(
                pair[0].key() < pair[1].key(),
                "{:?} before {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn lookup_types() {
        let desc = lookup(Class::IN, Rtype::MX).unwrap();
        assert_eq!(desc.rtype(), Rtype::MX);
        assert_eq!(desc.class(), None);
        assert_eq!(desc.compression(), Compression::Allowed);
        assert!(!desc.empty_ok());

        let desc = lookup(Class::IN, Rtype::A).unwrap();
        assert_eq!(desc.class(), Some(Class::IN));
        assert_eq!(desc.struct_size(), mem::size_of::<A>());

        assert!(matches!(
            lookup(Class::CH, Rtype::A),
            Err(Error::NotImplemented)
        ));
        assert!(descriptor(Class::CH, Rtype::A).is_opaque());
        assert!(matches!(
            lookup(Class::IN, Rtype::from_int(4711)),
            Err(Error::NotImplemented)
        ));
        assert!(lookup(Class::CH, Rtype::TXT).is_ok());
    }

    #[test]
    fn compression_flags() {
        for desc in iter() {
            let allowed = matches!(
                desc.rtype(),
                Rtype::NS
                    | Rtype::MD
                    | Rtype::MF
                    | Rtype::CNAME
                    | Rtype::SOA
                    | Rtype::MB
                    | Rtype::MG
                    | Rtype::MR
                    | Rtype::PTR
                    | Rtype::MINFO
                    | Rtype::MX
            );
            assert_eq!(
                desc.compression() == Compression::Allowed,
                allowed,
                "{:?}",
                desc
            );
        }
    }

    #[test]
    fn empty_ok_flags() {
        let empty: Vec<_> = iter()
            .filter(|desc| desc.empty_ok())
            .map(Descriptor::rtype)
            .collect();
        assert_eq!(empty, [Rtype::NULL, Rtype::OPT]);
        assert!(opaque().empty_ok());
    }
}
