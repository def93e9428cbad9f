//! Reading possibly compressed domain names.
//!
//! Within a message, a domain name may end in a pointer to a place earlier
//! in the message where the name continues. Record types differ in whether
//! they permit this: the types of RFC 1035 do, most later ones don’t. The
//! caller may forbid compression altogether on top of that.

use super::Dname;
use crate::base::cursor::WireCursor;
use crate::base::wire::ParseError;
use tracing::trace;

//------------ Decompress ----------------------------------------------------

/// The caller’s policy for compressed domain names in record data.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Decompress {
    /// Follow compression pointers where the record type permits them.
    #[default]
    Allowed,

    /// Reject all compression pointers.
    Never,
}

//------------ Compression ---------------------------------------------------

/// Whether a domain name field of a record type may be compressed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Compression {
    Allowed,
    Forbidden,
}

//------------ Decompressor --------------------------------------------------

/// The state of reading a single domain name.
///
/// The decompressor reads labels until it finds the root label. Upon a
/// compression pointer it continues at the pointer’s target. Each target
/// must be smaller than the previous one, with the position the name
/// started at as the first limit. This guarantees that reading ends even
/// for malicious data.
#[derive(Clone, Debug)]
pub struct Decompressor {
    /// Whether pointers are acceptable at all.
    pointers_allowed: bool,

    /// Where we are.
    state: State,

    /// Every pointer target must be below this position.
    limit: usize,

    /// The uncompressed wire format of the name read so far.
    name: Vec<u8>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// Reading labels at the current position.
    Reading,

    /// A pointer was found, reading continues at the target.
    Following(usize),

    /// The root label was read.
    Done,
}

impl Decompressor {
    #[must_use]
    pub fn new(compression: Compression, decompress: Decompress) -> Self {
        Decompressor {
            pointers_allowed: compression == Compression::Allowed
                && decompress == Decompress::Allowed,
            state: State::Reading,
            limit: 0,
            name: Vec::new(),
        }
    }

    /// Reads a domain name starting at the cursor’s position.
    ///
    /// Afterwards, the cursor is positioned after the name’s last label or
    /// after its first compression pointer.
    pub fn read(
        mut self,
        cursor: &mut WireCursor<'_>,
    ) -> Result<Dname, ParseError> {
        self.name
            .try_reserve_exact(Dname::MAX_LEN)
            .map_err(|_| ParseError::OutOfMemory)?;
        self.limit = cursor.pos();
        let mut chase: Option<WireCursor<'_>> = None;
        loop {
            match self.state {
                State::Reading => {
                    let reader = match chase.as_mut() {
                        Some(chase) => chase,
                        None => &mut *cursor,
                    };
                    self.step(reader)?;
                }
                State::Following(target) => {
                    trace!("following compression pointer to {target}");
                    chase = Some(WireCursor::at_message_pos(
                        cursor.message(),
                        target,
                    )?);
                    self.state = State::Reading;
                }
                State::Done => break,
            }
        }
        Ok(Dname::from_octets_unchecked(self.name.into()))
    }

    /// Processes the next label.
    fn step(&mut self, reader: &mut WireCursor<'_>) -> Result<(), ParseError> {
        let ltype = reader.parse_u8()?;
        match ltype {
            0 => {
                self.name.push(0);
                self.state = State::Done;
            }
            1..=0x3F => {
                let label = reader.take(usize::from(ltype))?;
                // Leave room for the root label.
                if self.name.len() + label.len() + 2 > Dname::MAX_LEN {
                    return Err(ParseError::form_error("long domain name"));
                }
                self.name.push(ltype);
                self.name.extend_from_slice(label);
            }
            0xC0..=0xFF => {
                if !self.pointers_allowed {
                    return Err(ParseError::form_error(
                        "compressed domain name not allowed",
                    ));
                }
                let target = (usize::from(ltype & 0x3F) << 8)
                    | usize::from(reader.parse_u8()?);
                if target >= self.limit {
                    return Err(ParseError::form_error(
                        "compression pointer not pointing backwards",
                    ));
                }
                self.limit = target;
                self.state = State::Following(target);
            }
            _ => return Err(ParseError::form_error("invalid label type")),
        }
        Ok(())
    }
}

//============ Testing =======================================================
