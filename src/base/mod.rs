//! Basics.
//!
//! This module provides the types and traits that all record data types
//! are built upon.
//!
//!
//! ## Parsing and Composing
//!
//! In order to easily distinguish the process of disecting wire-format
//! data from other forms of representation conversion such as reading
//! presentation format, we use the term *parsing* for extracting data from
//! a wire-format representation and *composing* for producing such a
//! representation. The term *scanning* is used for reading presentation
//! format.
//!
//! Parsing happens through a [`WireCursor`] that views the complete message
//! the record data is part of, since domain names in the record data may
//! be compressed by referencing other parts of the message. Composing
//! happens into any octets builder. The [`WireBuf`] builder writes into a
//! caller-provided buffer and never exceeds the maximum length of record
//! data.
//!
//!
//! # Types for DNS Data
//!
//! The module contains a number of types for DNS data. Because they often
//! come with a number of support types, they are arranged in submodules.
//! These are:
//!
//! * [charstr] for DNS character strings,
//! * [iana] for parameters maintained in IANA registries,
//! * [name] for domain names and name compression,
//! * [opt] for the options contained in OPT record data, and
//! * [rdata] for the traits shared by all record data types.
//!
//! The [scan] module provides the tokens presentation format is read from
//! and [wire] the traits and error types for the wire format.

//--- Re-exports

pub use self::charstr::CharStr;
pub use self::cursor::{WireBuf, WireCursor};
pub use self::iana::{Class, OptionCode, Rtype};
pub use self::name::{Compression, Decompress, Dname};
pub use self::rdata::{RecordDataCodec, UnknownRecordData};
pub use self::scan::{ScanError, Scanner, Token, Tokens};
pub use self::wire::{Compose, FormError, Parse, ParseError};

//--- Modules

pub mod charstr;
pub mod cursor;
pub mod iana;
pub mod name;
pub mod opt;
pub mod rdata;
pub mod scan;
pub mod wire;
