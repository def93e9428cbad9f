//! Creating and consuming data in wire format.

use super::cursor::WireCursor;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::ShortInput;
use std::net::{Ipv4Addr, Ipv6Addr};

//------------ Compose -------------------------------------------------------

/// A type that can append its wire format to an octets builder.
pub trait Compose {
    const COMPOSE_LEN: u16 = 0;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

impl<'a, T: Compose + ?Sized> Compose for &'a T {
    const COMPOSE_LEN: u16 = T::COMPOSE_LEN;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (*self).compose(target)
    }
}

impl Compose for u8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&[*self])
    }
}

macro_rules! compose_to_be_bytes {
    ( $type:ident ) => {
        impl Compose for $type {
            const COMPOSE_LEN: u16 = ($type::BITS >> 3) as u16;

            fn compose<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                target.append_slice(&self.to_be_bytes())
            }
        }
    };
}

compose_to_be_bytes!(u16);
compose_to_be_bytes!(u32);

impl Compose for Ipv4Addr {
    const COMPOSE_LEN: u16 = 4;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.octets())
    }
}

impl Compose for Ipv6Addr {
    const COMPOSE_LEN: u16 = 16;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.octets())
    }
}

//------------ Parse ---------------------------------------------------------

/// A type that can extract a value from a wire cursor.
///
/// All reads are limited to the record data the cursor was created for.
/// Reading beyond its end results in [`ParseError::ShortInput`].
pub trait Parse: Sized {
    /// Extracts a value from the beginning of `cursor`.
    ///
    /// If parsing fails and an error is returned, the cursor’s position
    /// should be considered to be undefined.
    fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError>;
}

impl Parse for u8 {
    fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        cursor.parse_u8()
    }
}

impl Parse for u16 {
    fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        cursor.parse_u16_be()
    }
}

impl Parse for u32 {
    fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        cursor.parse_u32_be()
    }
}

impl Parse for Ipv4Addr {
    fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        let mut buf = [0u8; 4];
        cursor.parse_buf(&mut buf)?;
        Ok(buf.into())
    }
}

impl Parse for Ipv6Addr {
    fn parse(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        let mut buf = [0u8; 16];
        cursor.parse_buf(&mut buf)?;
        Ok(buf.into())
    }
}

//============ Error Types ===================================================

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An attempt was made to go beyond the end of the record data.
    ShortInput,

    /// A formatting error occurred.
    Form(FormError),

    /// Memory for an owned copy of the data could not be allocated.
    OutOfMemory,
}

impl ParseError {
    /// Creates a new parse error as a form error with the given message.
    pub fn form_error(msg: &'static str) -> Self {
        FormError::new(msg).into()
    }
}

//--- From

impl From<ShortInput> for ParseError {
    fn from(_: ShortInput) -> Self {
        ParseError::ShortInput
    }
}

impl From<FormError> for ParseError {
    fn from(err: FormError) -> Self {
        ParseError::Form(err)
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::ShortInput => f.write_str("unexpected end of input"),
            ParseError::Form(ref err) => fmt::Display::fmt(err, f),
            ParseError::OutOfMemory => f.write_str("out of memory"),
        }
    }
}

impl std::error::Error for ParseError {}

//------------ FormError -----------------------------------------------------

/// A formatting error occured.
///
/// This is a generic error for all kinds of error cases that result in data
/// not being accepted. For diagnostics, the error is being given a static
/// string describing the error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormError(&'static str);

impl FormError {
    /// Creates a new form error value with the given diagnostics string.
    #[must_use]
    pub const fn new(msg: &'static str) -> Self {
        FormError(msg)
    }

    /// Returns the diagnostics string.
    #[must_use]
    pub fn message(self) -> &'static str {
        self.0
    }
}

//--- Display and Error

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for FormError {}

//============ Testing =======================================================
