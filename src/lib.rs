//! Conversion of DNS record data.
//!
//! This crate converts the record data of DNS resource records between
//! three forms: the wire format found in DNS messages, the presentation
//! format used by zone files, and typed Rust values. Decoding validates
//! its input strictly. Anything that isn’t valid record data for its type
//! is rejected with an error rather than passed on.
//!
//! # Modules
//!
//! * [codec] contains the conversion functions and the registry of
//!   supported record types,
//! * [rdata] contains the types for the record data of these record
//!   types,
//! * [base] contains the building blocks these are made of, such as
//!   domain names, character strings, and the cursor used for parsing wire
//!   format, and
//! * [utils] contains helpers for the encodings used by presentation
//!   format.
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Enables serde serialization for a number of basic types as
//!   well as the types of the [rdata] module.
//!
//! # Logging
//!
//! The crate logs via [tracing](https://docs.rs/tracing). Every entry
//! point of the codec logs at trace level, rejected input is logged at
//! debug level. No subscriber is installed by the crate itself.

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
pub mod codec;
pub mod rdata;
pub mod utils;
