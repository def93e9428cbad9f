//! EDNS option codes.

use core::fmt;

//------------ OptionCode ----------------------------------------------------

int_enum! {
    /// EDNS option codes.
    ///
    /// The record data of OPT records is a sequence of options, each
    /// introduced by a 16 bit option code.
    ///
    /// The list of assigned values is maintained in an [IANA registry].
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-11
    =>
    OptionCode, u16;

    /// Long-Lived Queries.
    (LLQ => 1, "LLQ")

    /// Update lease.
    (UL => 2, "UL")

    /// Name server identifier, RFC 5001.
    (NSID => 3, "NSID")

    /// DNSSEC algorithm understood, RFC 6975.
    (DAU => 5, "DAU")

    /// DS hash understood, RFC 6975.
    (DHU => 6, "DHU")

    /// NSEC3 hash understood, RFC 6975.
    (N3U => 7, "N3U")

    /// Client subnet, RFC 7871.
    (CLIENT_SUBNET => 8, "ECS")

    /// Zone expiry timer, RFC 7314.
    (EXPIRE => 9, "EXPIRE")

    /// Cookie, RFC 7873.
    (COOKIE => 10, "COOKIE")

    /// TCP keepalive timeout, RFC 7828.
    (TCP_KEEPALIVE => 11, "TCP-KEEPALIVE")

    /// Padding, RFC 7830.
    (PADDING => 12, "PADDING")

    /// CHAIN query requests, RFC 7901.
    (CHAIN => 13, "CHAIN")

    /// Signalled trust anchor key tags, RFC 8145.
    (KEY_TAG => 14, "KEY-TAG")

    /// Extended DNS error, RFC 8914.
    (EXTENDED_ERROR => 15, "EDE")
}

//--- Display

impl fmt::Display for OptionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_mnemonic_str() {
            Some(m) => f.write_str(m),
            None => write!(f, "{}", self.to_int()),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OptionCode {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_int(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OptionCode {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        <u16 as serde::Deserialize>::deserialize(deserializer).map(Into::into)
    }
}
