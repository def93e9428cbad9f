//! Bounds-checked access to record data in wire format.
//!
//! Record data is never processed in isolation: domain names inside it may
//! be compressed and point to earlier parts of the surrounding message.
//! A [`WireCursor`] therefore always views the whole message but limits
//! reading to the record data itself. A [`WireBuf`] is the writing
//! counterpart: an octets builder over a caller-provided, fixed-size
//! buffer.

use super::name::Decompress;
use super::wire::ParseError;
use bytes::Bytes;
use core::fmt;
use octseq::builder::{OctetsBuilder, ShortBuf, Truncate};
use octseq::parse::Parser;

/// The largest possible length of record data.
pub const MAX_RDLEN: usize = 0xFFFF;

//------------ WireCursor ----------------------------------------------------

/// A read cursor over the record data of a message.
///
/// The cursor is created for a message, the position where the record data
/// starts, and its length. All reading methods fail with
/// [`ParseError::ShortInput`] rather than read past the end of the record
/// data. The full message stays available through [`message`][Self::message]
/// for following compression pointers.
#[derive(Clone)]
pub struct WireCursor<'a> {
    /// The complete message.
    message: &'a [u8],

    /// A parser over the message up to the end of the record data.
    parser: Parser<'a, [u8]>,

    /// The caller’s policy for compressed names.
    decompress: Decompress,
}

impl<'a> WireCursor<'a> {
    /// Creates a cursor for `rdlen` octets of record data at `pos`.
    ///
    /// Returns an error if the record data doesn’t fit into the message.
    pub fn new(
        message: &'a [u8],
        pos: usize,
        rdlen: u16,
    ) -> Result<Self, ParseError> {
        let end = pos
            .checked_add(usize::from(rdlen))
            .filter(|&end| end <= message.len())
            .ok_or(ParseError::ShortInput)?;
        let mut parser = Parser::from_ref(&message[..end]);
        parser.seek(pos)?;
        Ok(WireCursor {
            message,
            parser,
            decompress: Decompress::Allowed,
        })
    }

    /// Creates a cursor for a slice containing nothing but record data.
    ///
    /// Since there is no surrounding message, any compression pointer in
    /// the data will fail to resolve.
    pub fn from_rdata(data: &'a [u8]) -> Result<Self, ParseError> {
        let rdlen = u16::try_from(data.len())
            .map_err(|_| ParseError::form_error("long record data"))?;
        Self::new(data, 0, rdlen)
    }

    /// Sets the policy for compressed names.
    #[must_use]
    pub fn with_decompress(mut self, decompress: Decompress) -> Self {
        self.decompress = decompress;
        self
    }

    /// Returns the policy for compressed names.
    #[must_use]
    pub fn decompress(&self) -> Decompress {
        self.decompress
    }

    /// Returns the complete message.
    #[must_use]
    pub fn message(&self) -> &'a [u8] {
        self.message
    }

    /// Returns the current position within the message.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.parser.pos()
    }

    /// Returns the number of octets left in the record data.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.parser.remaining()
    }

    /// Returns whether all of the record data has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns an error if any record data is left.
    pub fn check_done(&self) -> Result<(), ParseError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ParseError::form_error("trailing data"))
        }
    }

    pub fn parse_u8(&mut self) -> Result<u8, ParseError> {
        self.parser.parse_u8().map_err(Into::into)
    }

    pub fn parse_u16_be(&mut self) -> Result<u16, ParseError> {
        self.parser.parse_u16_be().map_err(Into::into)
    }

    pub fn parse_u32_be(&mut self) -> Result<u32, ParseError> {
        self.parser.parse_u32_be().map_err(Into::into)
    }

    /// Fills `buf` with the next octets of record data.
    pub fn parse_buf(&mut self, buf: &mut [u8]) -> Result<(), ParseError> {
        self.parser.parse_buf(buf).map_err(Into::into)
    }

    /// Returns the next octet without advancing.
    pub fn peek_u8(&self) -> Result<u8, ParseError> {
        Ok(self.parser.peek(1)?[0])
    }

    /// Takes the next `len` octets of record data.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], ParseError> {
        let start = self.parser.pos();
        self.parser.advance(len)?;
        Ok(&self.parser.octets_ref()[start..start + len])
    }

    /// Takes all the remaining record data.
    pub fn take_rest(&mut self) -> &'a [u8] {
        let len = self.remaining();
        self.take(len).unwrap_or_default()
    }

    /// Takes the next `len` octets as an owned copy.
    pub fn take_bytes(&mut self, len: usize) -> Result<Bytes, ParseError> {
        let data = self.take(len)?;
        copy_bytes(data)
    }

    /// Creates a cursor reading the message from `pos` to its end.
    ///
    /// This is used for the labels a compression pointer leads to. These
    /// may live anywhere in the message.
    pub(crate) fn at_message_pos(
        message: &'a [u8],
        pos: usize,
    ) -> Result<Self, ParseError> {
        let mut parser = Parser::from_ref(message);
        parser.seek(pos)?;
        Ok(WireCursor {
            message,
            parser,
            decompress: Decompress::Allowed,
        })
    }

    /// Takes a cursor over the next `len` octets.
    ///
    /// The returned cursor shares the message and the decompression policy
    /// with `self`.
    pub fn take_cursor(&mut self, len: usize) -> Result<Self, ParseError> {
        let start = self.parser.pos();
        self.parser.advance(len)?;
        let mut parser = Parser::from_ref(&self.message[..start + len]);
        parser.seek(start)?;
        Ok(WireCursor {
            message: self.message,
            parser,
            decompress: self.decompress,
        })
    }
}

//--- Debug

impl fmt::Debug for WireCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("WireCursor")
            .field("pos", &self.pos())
            .field("remaining", &self.remaining())
            .field("decompress", &self.decompress)
            .finish()
    }
}

//------------ copy_bytes ----------------------------------------------------

/// Creates an owned copy of some octets.
///
/// Allocation failure is reported as [`ParseError::OutOfMemory`].
pub fn copy_bytes(data: &[u8]) -> Result<Bytes, ParseError> {
    let mut res = Vec::new();
    res.try_reserve_exact(data.len())
        .map_err(|_| ParseError::OutOfMemory)?;
    res.extend_from_slice(data);
    Ok(res.into())
}

//------------ WireBuf -------------------------------------------------------

/// An octets builder writing into a caller-provided buffer.
///
/// The usable capacity is the smaller of the buffer’s length and
/// [`MAX_RDLEN`]. Appending beyond it fails with [`ShortBuf`] and leaves
/// the content unchanged. [`hit_ceiling`][Self::hit_ceiling] tells whether
/// a failure was due to the record data limit rather than the buffer.
pub struct WireBuf<'a> {
    buf: &'a mut [u8],
    len: usize,
    capacity: usize,
}

impl<'a> WireBuf<'a> {
    /// Creates a new, empty builder atop the given buffer.
    pub fn new(buf: &'a mut [u8]) -> Self {
        let capacity = buf.len().min(MAX_RDLEN);
        WireBuf {
            buf,
            len: 0,
            capacity,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns whether the capacity is limited by the record data ceiling.
    #[must_use]
    pub fn hit_ceiling(&self) -> bool {
        self.buf.len() > MAX_RDLEN
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Converts the builder into the written part of the buffer.
    #[must_use]
    pub fn freeze(self) -> &'a [u8] {
        let buf: &'a [u8] = self.buf;
        &buf[..self.len]
    }
}

//--- OctetsBuilder and Truncate

impl OctetsBuilder for WireBuf<'_> {
    type AppendError = ShortBuf;

    fn append_slice(&mut self, slice: &[u8]) -> Result<(), Self::AppendError> {
        let end = self.len + slice.len();
        if end > self.capacity {
            return Err(ShortBuf);
        }
        self.buf[self.len..end].copy_from_slice(slice);
        self.len = end;
        Ok(())
    }
}

impl Truncate for WireBuf<'_> {
    fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len
        }
    }
}

//--- AsRef

impl AsRef<[u8]> for WireBuf<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- Debug

impl fmt::Debug for WireBuf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("WireBuf")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .finish()
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cursor_limited_to_rdata() {
        let msg = b"\x01\x02\x03\x04\x05\x06";
        let mut cursor = WireCursor::new(msg, 2, 3).unwrap();
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.take(2).unwrap(), b"\x03\x04");
        assert_eq!(cursor.parse_u16_be(), Err(ParseError::ShortInput));
        assert_eq!(cursor.take_rest(), b"\x05");
        assert!(cursor.check_done().is_ok());
        assert_eq!(cursor.message().len(), 6);
    }

    #[test]
    fn cursor_outside_message() {
        assert!(WireCursor::new(b"\x01\x02", 1, 2).is_err());
        assert!(WireCursor::new(b"\x01\x02", 3, 0).is_err());
        assert!(WireCursor::new(b"\x01\x02", 2, 0).is_ok());
    }

    #[test]
    fn cursor_trailing_data() {
        let cursor = WireCursor::from_rdata(b"\x00").unwrap();
        assert_eq!(
            cursor.check_done(),
            Err(ParseError::form_error("trailing data"))
        );
    }

    #[test]
    fn sub_cursor() {
        let mut cursor = WireCursor::from_rdata(b"\x01\x02\x03").unwrap();
        let mut sub = cursor.take_cursor(2).unwrap();
        assert_eq!(sub.parse_u16_be(), Ok(0x0102));
        assert!(sub.parse_u8().is_err());
        assert_eq!(cursor.parse_u8(), Ok(3));
    }

    #[test]
    fn buf_capacity() {
        let mut storage = [0u8; 4];
        let mut buf = WireBuf::new(&mut storage);
        buf.append_slice(b"abc").unwrap();
        assert_eq!(buf.append_slice(b"de"), Err(ShortBuf));
        assert!(!buf.hit_ceiling());
        buf.append_slice(b"d").unwrap();
        assert_eq!(buf.freeze(), b"abcd");
    }

    #[test]
    fn buf_ceiling() {
        let mut storage = vec![0u8; MAX_RDLEN + 10];
        let mut buf = WireBuf::new(&mut storage);
        assert_eq!(buf.capacity(), MAX_RDLEN);
        assert!(buf.hit_ceiling());
        assert!(buf.append_slice(&[0; MAX_RDLEN + 1]).is_err());
        assert!(buf.is_empty());
    }
}
