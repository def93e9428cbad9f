//! Record data for well-known record types.
//!
//! This module provides types for the record data of the record types the
//! codec knows about. The types are grouped into sub-modules named after
//! the RFC that defines them, while all of them are re-exported here.
//!
//! Each type implements [`RecordDataCodec`], which provides parsing from
//! wire format, scanning from presentation format, and composing back into
//! wire format, as well as [`Display`] for the presentation format.
//!
//! The [`RecordData`] enum collects all these types and adds an `Other`
//! variant for record types without a specific implementation. It is the
//! struct form used by the [codec][crate::codec].
//!
//! [`RecordDataCodec`]: crate::base::rdata::RecordDataCodec
//! [`Display`]: core::fmt::Display

#[macro_use]
mod macros;

// The rdata_types! macro (defined in self::macros) reexports the record data
// types here and creates the RecordData enum over all of them.
rdata_types! {
    rfc1035::{
        A,
        Cname,
        Hinfo,
        Mb,
        Md,
        Mf,
        Mg,
        Minfo,
        Mr,
        Mx,
        Ns,
        Null,
        Ptr,
        Soa,
        Txt,
        Wks,
    }
    rfc1183::{
        Isdn,
    }
    rfc2782::{
        Srv,
    }
    rfc3596::{
        Aaaa,
    }
    rfc4034::{
        Nsec,
    }
    rfc6891::{
        Opt,
    }
    rfc7477::{
        Csync,
    }
    rfc8005::{
        Hip,
    }
}

pub use self::rfc4034::{RtypeBitmap, RtypeBitmapIter};

pub mod rfc1035;
pub mod rfc1183;
pub mod rfc2782;
pub mod rfc3596;
pub mod rfc4034;
pub mod rfc6891;
pub mod rfc7477;
pub mod rfc8005;

//------------ Variant -------------------------------------------------------

/// A record data type that is a variant of [`RecordData`].
pub trait Variant: Sized {
    /// Converts the value into the all-types enum.
    fn into_all(self) -> RecordData;

    /// Returns the value if the enum holds this type.
    fn from_all(data: &RecordData) -> Option<&Self>;
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Rtype;
    use crate::base::rdata::UnknownRecordData;
    use bytes::Bytes;

    #[test]
    fn variants() {
        let a = A::from_octets(192, 0, 2, 1);
        let all = a.clone().into_all();
        assert_eq!(all.rtype(), Rtype::A);
        assert_eq!(A::from_all(&all), Some(&a));
        assert_eq!(Aaaa::from_all(&all), None);
        assert_eq!(all, RecordData::from(a));
        assert_eq!(all.to_string(), "192.0.2.1");

        let mut buf = Vec::new();
        all.compose_rdata(&mut buf).unwrap();
        assert_eq!(buf, b"\xc0\x00\x02\x01");
    }

    #[test]
    fn other() {
        let data = UnknownRecordData::from_octets(
            Rtype::from_int(4711),
            Bytes::from_static(b"\x01"),
        )
        .unwrap();
        let all = RecordData::from(data);
        assert_eq!(all.rtype(), Rtype::from_int(4711));
        assert_eq!(all.to_string(), r"\# 1 01");
    }
}
