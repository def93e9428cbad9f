//! Resource record types.

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource record types.
    ///
    /// Every resource record carries a 16 bit type value that determines the
    /// format of its record data. Values without a mnemonic are displayed
    /// and scanned using the generic `TYPEnnn` form of RFC 3597.
    ///
    /// See the [IANA registry] for the assigned values.
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16;

    (A => 1, "A")
    (NS => 2, "NS")
    (MD => 3, "MD")
    (MF => 4, "MF")
    (CNAME => 5, "CNAME")
    (SOA => 6, "SOA")
    (MB => 7, "MB")
    (MG => 8, "MG")
    (MR => 9, "MR")
    (NULL => 10, "NULL")
    (WKS => 11, "WKS")
    (PTR => 12, "PTR")
    (HINFO => 13, "HINFO")
    (MINFO => 14, "MINFO")
    (MX => 15, "MX")
    (TXT => 16, "TXT")
    (RP => 17, "RP")
    (AFSDB => 18, "AFSDB")
    (X25 => 19, "X25")
    (ISDN => 20, "ISDN")
    (RT => 21, "RT")
    (NSAP => 22, "NSAP")
    (NSAPPTR => 23, "NSAPPTR")
    (SIG => 24, "SIG")
    (KEY => 25, "KEY")
    (PX => 26, "PX")
    (GPOS => 27, "GPOS")
    (AAAA => 28, "AAAA")
    (LOC => 29, "LOC")
    (NXT => 30, "NXT")
    (EID => 31, "EID")
    (NIMLOC => 32, "NIMLOC")
    (SRV => 33, "SRV")
    (ATMA => 34, "ATMA")
    (NAPTR => 35, "NAPTR")
    (KX => 36, "KX")
    (CERT => 37, "CERT")
    (A6 => 38, "A6")
    (DNAME => 39, "DNAME")
    (SINK => 40, "SINK")
    (OPT => 41, "OPT")
    (APL => 42, "APL")
    (DS => 43, "DS")
    (SSHFP => 44, "SSHFP")
    (IPSECKEY => 45, "IPSECKEY")
    (RRSIG => 46, "RRSIG")
    (NSEC => 47, "NSEC")
    (DNSKEY => 48, "DNSKEY")
    (DHCID => 49, "DHCID")
    (NSEC3 => 50, "NSEC3")
    (NSEC3PARAM => 51, "NSEC3PARAM")
    (TLSA => 52, "TLSA")
    (SMIMEA => 53, "SMIMEA")
    (HIP => 55, "HIP")
    (NINFO => 56, "NINFO")
    (RKEY => 57, "RKEY")
    (TALINK => 58, "TALINK")
    (CDS => 59, "CDS")
    (CDNSKEY => 60, "CDNSKEY")
    (OPENPGPKEY => 61, "OPENPGPKEY")
    (CSYNC => 62, "CSYNC")
    (ZONEMD => 63, "ZONEMD")
    (SVCB => 64, "SVCB")
    (HTTPS => 65, "HTTPS")
    (SPF => 99, "SPF")
    (UINFO => 100, "UINFO")
    (UID => 101, "UID")
    (GID => 102, "GID")
    (UNSPEC => 103, "UNSPEC")
    (NID => 104, "NID")
    (L32 => 105, "L32")
    (L64 => 106, "L64")
    (LP => 107, "LP")
    (EUI48 => 108, "EUI48")
    (EUI64 => 109, "EUI64")
    (TKEY => 249, "TKEY")
    (TSIG => 250, "TSIG")
    (IXFR => 251, "IXFR")
    (AXFR => 252, "AXFR")
    (MAILB => 253, "MAILB")
    (MAILA => 254, "MAILA")
    (ANY => 255, "ANY")
    (URI => 256, "URI")
    (CAA => 257, "CAA")
    (AVC => 258, "AVC")
    (DOA => 259, "DOA")
    (TA => 32768, "TA")
    (DLV => 32769, "DLV")
}

int_enum_str_with_prefix!(Rtype, "TYPE", b"TYPE", u16, "unknown record type");

impl Rtype {
    /// Returns whether the type is a meta or query type.
    ///
    /// These are OPT, the range 128 to 255, and nothing else. Records of
    /// these types never appear in zone data.
    #[must_use]
    pub fn is_pseudo(self) -> bool {
        self == Rtype::OPT || (128..=255).contains(&self.to_int())
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::Rtype;
    use core::str::FromStr;

    #[test]
    fn mnemonics_and_generic_form() {
        assert_eq!(Rtype::from_str("nsec").unwrap(), Rtype::NSEC);
        assert_eq!(Rtype::from_str("TYPE47").unwrap(), Rtype::NSEC);
        assert_eq!(Rtype::from_str("type65534").unwrap(), Rtype(65534));
        assert!(Rtype::from_str("TYPE65536").is_err());
        assert!(Rtype::from_str("TYPE+1").is_err());
        assert!(Rtype::from_str("TYPE").is_err());
        assert!(Rtype::from_str("BOGUS").is_err());
        assert_eq!(format!("{}", Rtype::CSYNC), "CSYNC");
        assert_eq!(format!("{}", Rtype(65534)), "TYPE65534");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Rtype::HIP), "Rtype::HIP");
        assert_eq!(format!("{:?}", Rtype(1234)), "Rtype(1234)");
    }

    #[test]
    fn pseudo_types() {
        assert!(Rtype::OPT.is_pseudo());
        assert!(Rtype::ANY.is_pseudo());
        assert!(Rtype::TSIG.is_pseudo());
        assert!(!Rtype::A.is_pseudo());
        assert!(!Rtype::URI.is_pseudo());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        let json = serde_json::to_string(&Rtype::AAAA).unwrap();
        assert_eq!(json, "\"AAAA\"");
        let back: Rtype = serde_json::from_str("\"TYPE999\"").unwrap();
        assert_eq!(back, Rtype(999));
        let back: Rtype = serde_json::from_str("62").unwrap();
        assert_eq!(back, Rtype::CSYNC);
    }
}
