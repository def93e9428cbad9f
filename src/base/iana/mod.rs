//! IANA Definitions for DNS.
//!
//! This module contains types for parameters defined in IANA registries
//! that are relevant for record data.
//!
//! All types defined hereunder follow the same basic structure. They are
//! newtypes around the raw integer value with associated constants for all
//! well-defined values. There are two methods `from_int()` and `to_int()`
//! to convert from and to raw integer values as well as implementations of
//! the `From` trait for these. Where a presentation format exists,
//! `FromStr` and `Display` convert between mnemonics and values.
//!
//! Types also implement `parse()` and `compose()` for the wire format.

pub use self::class::Class;
pub use self::opt::OptionCode;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod opt;
pub mod rtype;
