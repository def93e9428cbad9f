//! Record data from [RFC 8005]: HIP records.
//!
//! This RFC defines the HIP record type for the Host Identity Protocol.
//!
//! [RFC 8005]: https://tools.ietf.org/html/rfc8005

use crate::base::cursor::WireCursor;
use crate::base::iana::Rtype;
use crate::base::name::Dname;
use crate::base::rdata::RecordDataCodec;
use crate::base::scan::{ScanError, Tokens};
use crate::base::wire::{Compose, Parse, ParseError};
use crate::utils::{base16, base64};
use bytes::Bytes;
use core::{fmt, slice};
use octseq::builder::OctetsBuilder;

//------------ Hip ----------------------------------------------------------

/// Hip record data.
///
/// The HIP record stores a host identity tag (HIT), the public key it was
/// derived from together with its algorithm, and an optional list of
/// rendezvous servers. The server names must not be compressed.
///
/// The HIP record type is defined in [RFC 8005, section 5][1].
///
/// [1]: https://tools.ietf.org/html/rfc8005#section-5
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "HipFields")
)]
pub struct Hip {
    algorithm: u8,
    hit: Bytes,
    public_key: Bytes,
    servers: Vec<Dname>,
}

impl Hip {
    /// Creates HIP record data from its parts.
    ///
    /// The HIT must be between 1 and 255 octets long and the public key
    /// between 1 and 65535 octets.
    pub fn new(
        algorithm: u8,
        hit: Bytes,
        public_key: Bytes,
        servers: Vec<Dname>,
    ) -> Result<Self, ParseError> {
        if hit.is_empty() || hit.len() > usize::from(u8::MAX) {
            return Err(ParseError::form_error("invalid HIT length"));
        }
        if public_key.is_empty() || public_key.len() > usize::from(u16::MAX)
        {
            return Err(ParseError::form_error("invalid public key length"));
        }
        Ok(Hip {
            algorithm,
            hit,
            public_key,
            servers,
        })
    }

    /// The public key algorithm.
    #[must_use]
    pub fn algorithm(&self) -> u8 {
        self.algorithm
    }

    /// The host identity tag.
    #[must_use]
    pub fn hit(&self) -> &[u8] {
        self.hit.as_ref()
    }

    #[must_use]
    pub fn public_key(&self) -> &[u8] {
        self.public_key.as_ref()
    }

    /// Returns an iterator over the rendezvous servers.
    pub fn servers(&self) -> slice::Iter<'_, Dname> {
        self.servers.iter()
    }
}

//--- Deserialize

/// The unchecked fields of a deserialized HIP record.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HipFields {
    algorithm: u8,
    hit: Bytes,
    public_key: Bytes,
    servers: Vec<Dname>,
}

#[cfg(feature = "serde")]
impl TryFrom<HipFields> for Hip {
    type Error = ParseError;

    fn try_from(fields: HipFields) -> Result<Self, Self::Error> {
        Hip::new(
            fields.algorithm,
            fields.hit,
            fields.public_key,
            fields.servers,
        )
    }
}

//--- RecordDataCodec

impl RecordDataCodec for Hip {
    const RTYPE: Rtype = Rtype::HIP;

    fn parse_rdata(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        let hit_len = u8::parse(cursor)?;
        let algorithm = u8::parse(cursor)?;
        let key_len = u16::parse(cursor)?;
        if hit_len == 0 {
            return Err(ParseError::form_error("empty HIT"));
        }
        if key_len == 0 {
            return Err(ParseError::form_error("empty public key"));
        }
        let hit = cursor.take_bytes(usize::from(hit_len))?;
        let public_key = cursor.take_bytes(usize::from(key_len))?;
        let mut servers = Vec::new();
        while !cursor.is_empty() {
            servers.push(Dname::parse(cursor, Self::COMPRESSION)?);
        }
        Ok(Hip {
            algorithm,
            hit,
            public_key,
            servers,
        })
    }

    fn scan_rdata(tokens: &mut Tokens<'_>) -> Result<Self, ScanError> {
        let algorithm = tokens.scan_u8()?;
        let hit = base16::decode_vec(tokens.expect_token()?.as_str())
            .map_err(|_| ScanError::Syntax("illegal HIT"))?;
        if hit.is_empty() || hit.len() > usize::from(u8::MAX) {
            return Err(ScanError::Syntax("invalid HIT length"));
        }
        let public_key = base64::decode_vec(tokens.expect_token()?.as_str())
            .map_err(|_| ScanError::Syntax("illegal public key"))?;
        if public_key.is_empty() || public_key.len() > usize::from(u16::MAX)
        {
            return Err(ScanError::Syntax("invalid public key length"));
        }
        let mut servers = Vec::new();
        while !tokens.is_exhausted()? {
            servers.push(tokens.scan_dname()?);
        }
        Ok(Hip {
            algorithm,
            hit: hit.into(),
            public_key: public_key.into(),
            servers,
        })
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        // The constructors limit the lengths. Should they be exceeded
        // anyway, the length fields saturate and the data fails to parse.
        u8::try_from(self.hit.len())
            .unwrap_or(u8::MAX)
            .compose(target)?;
        self.algorithm.compose(target)?;
        u16::try_from(self.public_key.len())
            .unwrap_or(u16::MAX)
            .compose(target)?;
        target.append_slice(&self.hit)?;
        target.append_slice(&self.public_key)?;
        for server in &self.servers {
            server.compose(target)?;
        }
        Ok(())
    }
}

//--- Display

impl fmt::Display for Hip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", self.algorithm)?;
        base16::display(&self.hit, f)?;
        f.write_str(" ")?;
        base64::display(&self.public_key, f)?;
        for server in &self.servers {
            write!(f, " {}", server)?;
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Class;
    use crate::base::rdata::test::{
        test_compose_parse, test_display_scan, test_scan,
    };
    use crate::rdata::RecordData;
    use core::str::FromStr;

    fn hip() -> Hip {
        Hip::new(
            2,
            Bytes::from_static(b"\x20\x01\x00\x10"),
            Bytes::from_static(b"\x03\x01\x00\x01"),
            vec![
                Dname::from_str("rvs1.example.com").unwrap(),
                Dname::from_str("rvs2.example.com").unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn hip_compose_parse_scan() {
        let rdata = hip();
        test_compose_parse(&rdata);
        test_scan(
            &[
                "2",
                "20010010",
                "AwEAAQ==",
                "rvs1.example.com.",
                "rvs2.example.com.",
            ],
            &rdata,
        );
        test_display_scan(&rdata);
        assert_eq!(
            rdata.to_string(),
            "2 20010010 AwEAAQ== rvs1.example.com. rvs2.example.com."
        );
    }

    #[test]
    fn hip_empty_fields() {
        let mut cursor =
            WireCursor::from_rdata(b"\x00\x02\x00\x01\x05").unwrap();
        assert!(Hip::parse_rdata(&mut cursor).is_err());
        let mut cursor =
            WireCursor::from_rdata(b"\x01\x02\x00\x00\x05").unwrap();
        assert!(Hip::parse_rdata(&mut cursor).is_err());
        assert!(Hip::new(2, Bytes::new(), Bytes::from_static(b"k"), vec![])
            .is_err());
    }

    #[test]
    fn hip_oversized_hit_rejected() {
        let rdata = Hip {
            algorithm: 2,
            hit: Bytes::from(vec![0xaa; 256]),
            public_key: Bytes::from_static(b"\x03\x01\x00\x01"),
            servers: Vec::new(),
        };
        let mut buf = vec![0; 1024];
        let err = crate::codec::from_struct(
            &RecordData::from(rdata),
            Class::IN,
            &mut buf,
        )
        .unwrap_err();
        assert!(err.is_form());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn hip_deserialize_checks_lengths() {
        let hit = vec![0xaa_u8; 256];
        let json = format!(
            r#"{{"algorithm":2,"hit":{:?},"public_key":[3,1,0,1],"servers":[]}}"#,
            hit
        );
        assert!(serde_json::from_str::<Hip>(&json).is_err());
        let json = r#"{"algorithm":2,"hit":[],"public_key":[3,1,0,1],"servers":[]}"#;
        assert!(serde_json::from_str::<Hip>(json).is_err());
        let json = r#"{"algorithm":2,"hit":[32,1],"public_key":[3,1,0,1],"servers":[]}"#;
        let rdata = serde_json::from_str::<Hip>(json).unwrap();
        assert_eq!(rdata.hit(), b"\x20\x01");
    }

    #[test]
    fn hip_servers_not_compressed() {
        // "example." at 0, then the record data with a pointer to it.
        let msg = b"\x07example\x00\x01\x02\x00\x01\xaa\xbb\xc0\x00";
        let mut cursor = WireCursor::new(msg, 9, 8).unwrap();
        assert!(Hip::parse_rdata(&mut cursor).is_err());
    }
}
