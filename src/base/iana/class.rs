//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes. Only the
    /// IN class is relevant in practice, and it is the only class for which
    /// the address carrying record types A, AAAA, WKS, and SRV have a
    /// defined format.
    ///
    /// Classes are represented by a 16 bit value. Values without a mnemonic
    /// use the generic `CLASSnnn` form of RFC 3597.
    ///
    /// [DNS CLASSes IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-2
    =>
    Class, u16;

    /// Internet (IN).
    (IN => 1, "IN")

    /// Chaosnet (CH).
    (CH => 3, "CH")

    /// Hesiod (HS).
    (HS => 4, "HS")

    /// Query class None.
    ///
    /// Used in UPDATE messages, see RFC 2136.
    (NONE => 0xFE, "NONE")

    /// Query class * (ANY).
    (ANY => 0xFF, "ANY")
}

int_enum_str_with_prefix!(Class, "CLASS", b"CLASS", u16, "unknown class");

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::Class;
    use core::str::FromStr;

    #[test]
    fn from_str() {
        assert_eq!(Class::from_str("in").unwrap(), Class::IN);
        assert_eq!(Class::from_str("CLASS1").unwrap(), Class::IN);
        assert_eq!(Class::from_str("class4711").unwrap(), Class(4711));
        assert!(Class::from_str("CLASS").is_err());
        assert!(Class::from_str("CLASS1x").is_err());
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Class::IN), "Class::IN");
        assert_eq!(format!("{:?}", Class(69)), "Class(69)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        assert_eq!(serde_json::to_string(&Class::CH).unwrap(), "\"CH\"");
        assert_eq!(serde_json::to_string(&Class(5)).unwrap(), "\"CLASS5\"");
        let back: Class = serde_json::from_str("\"CLASS5\"").unwrap();
        assert_eq!(back, Class(5));
    }
}
