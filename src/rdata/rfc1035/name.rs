//! Record data types consisting of a single domain name.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::cursor::WireCursor;
use crate::base::iana::Rtype;
use crate::base::name::{Compression, Dname};
use crate::base::rdata::RecordDataCodec;
use crate::base::scan::{ScanError, Tokens};
use crate::base::wire::{Compose, ParseError};
use core::fmt;
use core::str::FromStr;
use octseq::builder::OctetsBuilder;

//------------ Cname --------------------------------------------------------

name_type! {
    /// CNAME record data.
    ///
    /// The CNAME record specifies the canonical or primary name for domain
    /// name alias.
    ///
    /// The CNAME type is defined in RFC 1035, section 3.3.1.
    (Cname, CNAME, cname)
}

//------------ Mb -----------------------------------------------------------

name_type! {
    /// MB record data.
    ///
    /// The experimental MB record specifies a host that serves a mailbox.
    ///
    /// The MB record type is defined in RFC 1035, section 3.3.3.
    (Mb, MB, madname)
}

//------------ Md -----------------------------------------------------------

name_type! {
    /// MD record data.
    ///
    /// The MD record specifices a host which has a mail agent for
    /// the domain which should be able to deliver mail for the domain.
    ///
    /// The MD record is obsolete. It is recommended to either reject the
    /// record or convert them into an Mx record at preference 0.
    ///
    /// The MD record type is defined in RFC 1035, section 3.3.4.
    (Md, MD, madname)
}

//------------ Mf -----------------------------------------------------------

name_type! {
    /// MF record data.
    ///
    /// The MF record specifices a host which has a mail agent for
    /// the domain which will be accept mail for forwarding to the domain.
    ///
    /// The MF record is obsolete. It is recommended to either reject the
    /// record or convert them into an Mx record at preference 10.
    ///
    /// The MF record type is defined in RFC 1035, section 3.3.5.
    (Mf, MF, madname)
}

//------------ Mg -----------------------------------------------------------

name_type! {
    /// MG record data.
    ///
    /// The MG record specifices a mailbox which is a member of the mail group
    /// specified by the domain name.
    ///
    /// The MG record is experimental.
    ///
    /// The MG record type is defined in RFC 1035, section 3.3.6.
    (Mg, MG, mgmname)
}

//------------ Mr -----------------------------------------------------------

name_type! {
    /// MR record data.
    ///
    /// The MR record specifices a mailbox which is the proper rename of the
    /// specified mailbox.
    ///
    /// The MR record is experimental.
    ///
    /// The MR record type is defined in RFC 1035, section 3.3.8.
    (Mr, MR, newname)
}

//------------ Ns -----------------------------------------------------------

name_type! {
    /// NS record data.
    ///
    /// NS records specify hosts that are authoritative for a class and domain.
    ///
    /// The NS record type is defined in RFC 1035, section 3.3.11.
    (Ns, NS, nsdname)
}

//------------ Ptr ----------------------------------------------------------

name_type! {
    /// PTR record data.
    ///
    /// PRT records are used in special domains to point to some other
    /// location in the domain space.
    ///
    /// The PTR record type is defined in RFC 1035, section 3.3.12.
    (Ptr, PTR, ptrdname)
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::name::Decompress;
    use crate::base::rdata::test::{
        test_compose_parse, test_display_scan, test_scan,
    };

    #[test]
    fn ns_compose_parse_scan() {
        let rdata = Ns::from_str("ns.example.com.").unwrap();
        test_compose_parse(&rdata);
        test_scan(&["ns.example.com."], &rdata);
        test_display_scan(&rdata);
        assert_eq!(rdata.to_string(), "ns.example.com.");
    }

    #[test]
    fn cname_follows_pointer() {
        // A message with "example." at offset 2 and a record data consisting
        // of "www" plus a pointer to it.
        let msg = b"\x00\x00\x07example\x00\x03www\xc0\x02";
        let mut cursor = WireCursor::new(msg, 11, 6).unwrap();
        let cname = Cname::parse_rdata(&mut cursor).unwrap();
        assert!(cursor.is_empty());
        assert_eq!(cname.cname().to_string(), "www.example.");

        let mut cursor = WireCursor::new(msg, 11, 6)
            .unwrap()
            .with_decompress(Decompress::Never);
        assert!(Cname::parse_rdata(&mut cursor).is_err());
    }
}
