//! Decoding and encoding of Base 64.
//!
//! The Base 64 encoding is defined in [RFC 4648]. Of the two variants
//! defined there, the DNS uses only the original *base64* variant, so this
//! is what is implemented by the module.
//!
//! The module defines the type [`Decoder`] which keeps the state necessary
//! for decoding. Encoding happens directly into a format stream.
//!
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use core::fmt;

//------------ Convenience Functions -----------------------------------------

/// Decodes a string with *base64* encoded data into a vec.
pub fn decode_vec(s: &str) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = Decoder::new();
    for ch in s.chars() {
        decoder.push(ch)?;
    }
    decoder.finalize()
}

/// Encodes binary data in *base64* and writes it into a format stream.
///
/// This function is intended to be used in implementations of formatting
/// traits.
pub fn display<B, W>(bytes: &B, f: &mut W) -> fmt::Result
where
    B: AsRef<[u8]> + ?Sized,
    W: fmt::Write,
{
    fn ch(i: u8) -> char {
        char::from(ALPHABET[usize::from(i)])
    }

    for chunk in bytes.as_ref().chunks(3) {
        match *chunk {
            [a] => {
                f.write_char(ch(a >> 2))?;
                f.write_char(ch((a & 0x03) << 4))?;
                f.write_char(PAD)?;
                f.write_char(PAD)?;
            }
            [a, b] => {
                f.write_char(ch(a >> 2))?;
                f.write_char(ch((a & 0x03) << 4 | b >> 4))?;
                f.write_char(ch((b & 0x0F) << 2))?;
                f.write_char(PAD)?;
            }
            [a, b, c] => {
                f.write_char(ch(a >> 2))?;
                f.write_char(ch((a & 0x03) << 4 | b >> 4))?;
                f.write_char(ch((b & 0x0F) << 2 | c >> 6))?;
                f.write_char(ch(c & 0x3F))?;
            }
            _ => {}
        }
    }
    Ok(())
}

/// Encodes binary data in *base64* and returns the encoded data as a string.
pub fn encode_string<B: AsRef<[u8]> + ?Sized>(bytes: &B) -> String {
    let mut res = String::with_capacity((bytes.as_ref().len() + 2) / 3 * 4);
    // Writing to a string never fails.
    let _ = display(bytes, &mut res);
    res
}

//------------ Decoder -------------------------------------------------------

/// A base 64 decoder.
///
/// This type keeps all the state for decoding a sequence of characters
/// representing data encoded in base 64. Upon success, the decoder returns
/// the decoded data in a vec.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    /// A buffer for up to four characters.
    ///
    /// We only keep `u8`s here because only ASCII characters are used by
    /// Base64.
    buf: [u8; 4],

    /// The index in `buf` where we place the next character.
    ///
    /// We also abuse this to mark when we are done (because there was
    /// padding, in which case we set it to 0xF0).
    next: usize,

    /// The decoded data.
    target: Vec<u8>,
}

impl Decoder {
    /// Creates a new empty decoder.
    #[must_use]
    pub fn new() -> Self {
        Default::default()
    }

    /// Finalizes decoding and returns the decoded data.
    pub fn finalize(self) -> Result<Vec<u8>, DecodeError> {
        // next is either 0 or 0xF0 for a completed group.
        if self.next & 0x0F != 0 {
            Err(DecodeError::ShortInput)
        } else {
            Ok(self.target)
        }
    }

    /// Decodes one more character of data.
    ///
    /// Returns an error as soon as the encoded data is determined to be
    /// illegal.
    pub fn push(&mut self, ch: char) -> Result<(), DecodeError> {
        if self.next == 0xF0 {
            return Err(DecodeError::TrailingInput);
        }

        let val = if ch == PAD {
            // Only up to two padding characters possible.
            if self.next < 2 {
                return Err(DecodeError::IllegalChar(ch));
            }
            0x80 // Acts as a marker later on.
        } else {
            decode_char(ch).ok_or(DecodeError::IllegalChar(ch))?
        };
        self.buf[self.next] = val;
        self.next += 1;

        if self.next == 4 {
            self.target.push(self.buf[0] << 2 | self.buf[1] >> 4);
            if self.buf[2] != 0x80 {
                self.target.push(self.buf[1] << 4 | self.buf[2] >> 2);
            }
            if self.buf[3] != 0x80 {
                if self.buf[2] == 0x80 {
                    return Err(DecodeError::TrailingInput);
                }
                self.target.push((self.buf[2] << 6) | self.buf[3]);
                self.next = 0
            } else {
                self.next = 0xF0
            }
        }

        Ok(())
    }
}

//============ Error Types ===================================================

//------------ DecodeError ---------------------------------------------------

/// An error happened while decoding a base 64 or base 16 encoded string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// A character was pushed that isn’t allowed in the encoding.
    IllegalChar(char),

    /// There was trailing data after a padding sequence.
    TrailingInput,

    /// The input ended with an incomplete sequence.
    ShortInput,
}

//--- Display and Error

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::TrailingInput => f.write_str("trailing input"),
            DecodeError::IllegalChar(ch) => {
                write!(f, "illegal character '{}'", ch)
            }
            DecodeError::ShortInput => f.write_str("incomplete input"),
        }
    }
}

impl std::error::Error for DecodeError {}

//============ Alphabet ======================================================

/// The characters of the encoding in the order of their value.
const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Returns the value of an encoding character.
fn decode_char(ch: char) -> Option<u8> {
    let value = match ch {
        'A'..='Z' => u32::from(ch) - u32::from('A'),
        'a'..='z' => u32::from(ch) - u32::from('a') + 26,
        '0'..='9' => u32::from(ch) - u32::from('0') + 52,
        '+' => 62,
        '/' => 63,
        _ => return None,
    };
    u8::try_from(value).ok()
}

/// The padding character
const PAD: char = '=';

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_str() {
        assert_eq!(&decode_vec("").unwrap(), b"");
        assert_eq!(&decode_vec("Zg==").unwrap(), b"f");
        assert_eq!(&decode_vec("Zm8=").unwrap(), b"fo");
        assert_eq!(&decode_vec("Zm9v").unwrap(), b"foo");
        assert_eq!(&decode_vec("Zm9vYg==").unwrap(), b"foob");
        assert_eq!(&decode_vec("Zm9vYmE=").unwrap(), b"fooba");
        assert_eq!(&decode_vec("Zm9vYmFy").unwrap(), b"foobar");

        assert_eq!(decode_vec("FPucA").unwrap_err(), DecodeError::ShortInput);
        assert_eq!(
            decode_vec("FPucA=").unwrap_err(),
            DecodeError::IllegalChar('=')
        );
        assert_eq!(
            decode_vec("FPucAw=").unwrap_err(),
            DecodeError::ShortInput
        );
        assert_eq!(
            decode_vec("FPucAw=a").unwrap_err(),
            DecodeError::TrailingInput
        );
        assert_eq!(
            decode_vec("Zm9v\u{e4}").unwrap_err(),
            DecodeError::IllegalChar('\u{e4}')
        );
    }

    #[test]
    fn alphabet() {
        for (value, &ch) in ALPHABET.iter().enumerate() {
            assert_eq!(decode_char(char::from(ch)), Some(value as u8));
        }
        assert_eq!(decode_char('='), None);
    }

    #[test]
    fn display_bytes() {
        assert_eq!(encode_string(b""), "");
        assert_eq!(encode_string(b"f"), "Zg==");
        assert_eq!(encode_string(b"fo"), "Zm8=");
        assert_eq!(encode_string(b"foo"), "Zm9v");
        assert_eq!(encode_string(b"foob"), "Zm9vYg==");
        assert_eq!(encode_string(b"fooba"), "Zm9vYmE=");
        assert_eq!(encode_string(b"foobar"), "Zm9vYmFy");
    }
}
