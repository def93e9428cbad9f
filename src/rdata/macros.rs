//! Macros for use in rdata definitions.
//!
//! These macros are not public but are used by the super module only. This
//! is why `rdata_types!` is defined at the top of the module.

//------------ rdata_types! --------------------------------------------------

/// Creates the `RecordData` enum over all record data types.
///
/// The macro takes a list of modules and the record data types they
/// define. It re-exports the types, creates an enum with one variant per
/// type plus `Other` for everything else, and implements [`Variant`] for
/// each type.
///
/// [`Variant`]: super::Variant
macro_rules! rdata_types {
    ( $(
        $module:ident::{
            $( $rtype:ident, )*
        }
    )* ) => {
        $(
            pub use self::$module::{ $( $rtype, )* };
        )*


        //------------- RecordData -------------------------------------------

        /// Record data for all record types.
        ///
        /// This enum collects the record data types for all currently
        /// implemented record types. Data of all other types is kept as
        /// [`UnknownRecordData`] in the `Other` variant.
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        #[non_exhaustive]
        pub enum RecordData {
            $( $(
                $rtype($rtype),
            )* )*
            Other($crate::base::rdata::UnknownRecordData),
        }

        impl RecordData {
            /// Returns the record type of the data.
            #[must_use]
            pub fn rtype(&self) -> $crate::base::iana::Rtype {
                match *self {
                    $( $(
                        RecordData::$rtype(_) => {
                            <$rtype as $crate::base::rdata::RecordDataCodec>
                                ::RTYPE
                        }
                    )* )*
                    RecordData::Other(ref inner) => inner.rtype(),
                }
            }

            /// Appends the uncompressed wire format of the data.
            pub fn compose_rdata<Target>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError>
            where
                Target: octseq::builder::OctetsBuilder + ?Sized,
            {
                use $crate::base::rdata::RecordDataCodec;

                match *self {
                    $( $(
                        RecordData::$rtype(ref inner) => {
                            inner.compose_rdata(target)
                        }
                    )* )*
                    RecordData::Other(ref inner) => {
                        inner.compose_rdata(target)
                    }
                }
            }
        }


        //--- From

        $( $(
            impl From<$rtype> for RecordData {
                fn from(value: $rtype) -> Self {
                    RecordData::$rtype(value)
                }
            }
        )* )*

        impl From<$crate::base::rdata::UnknownRecordData> for RecordData {
            fn from(value: $crate::base::rdata::UnknownRecordData) -> Self {
                RecordData::Other(value)
            }
        }


        //--- Variant

        $( $(
            impl Variant for $rtype {
                fn into_all(self) -> RecordData {
                    RecordData::$rtype(self)
                }

                fn from_all(data: &RecordData) -> Option<&Self> {
                    match *data {
                        RecordData::$rtype(ref inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )* )*


        //--- Display

        impl core::fmt::Display for RecordData {
            fn fmt(
                &self, f: &mut core::fmt::Formatter
            ) -> core::fmt::Result {
                match *self {
                    $( $(
                        RecordData::$rtype(ref inner) => {
                            core::fmt::Display::fmt(inner, f)
                        }
                    )* )*
                    RecordData::Other(ref inner) => {
                        core::fmt::Display::fmt(inner, f)
                    }
                }
            }
        }
    }
}

//------------ name_type! ----------------------------------------------------

/// A macro for implementing a record data type with a single domain name.
///
/// Implements some basic methods plus the `RecordDataCodec`, `FromStr`, and
/// `Display` traits. Names in these types may be compressed.
macro_rules! name_type {
    ($(#[$attr:meta])* ( $target:ident, $rtype:ident, $field:ident ) ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        pub struct $target {
            $field: Dname,
        }

        impl $target {
            #[must_use]
            pub fn new($field: Dname) -> Self {
                $target { $field }
            }

            #[must_use]
            pub fn $field(&self) -> &Dname {
                &self.$field
            }
        }

        //--- From and FromStr

        impl From<Dname> for $target {
            fn from(name: Dname) -> Self {
                Self::new(name)
            }
        }

        impl FromStr for $target {
            type Err = <Dname as FromStr>::Err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Dname::from_str(s).map(Self::new)
            }
        }

        //--- RecordDataCodec

        impl RecordDataCodec for $target {
            const RTYPE: Rtype = Rtype::$rtype;
            const COMPRESSION: Compression = Compression::Allowed;

            fn parse_rdata(
                cursor: &mut WireCursor<'_>,
            ) -> Result<Self, ParseError> {
                Dname::parse(cursor, Self::COMPRESSION).map(Self::new)
            }

            fn scan_rdata(tokens: &mut Tokens<'_>) -> Result<Self, ScanError> {
                tokens.scan_dname().map(Self::new)
            }

            fn compose_rdata<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                self.$field.compose(target)
            }
        }

        //--- Display

        impl fmt::Display for $target {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::Display::fmt(&self.$field, f)
            }
        }
    };
}
