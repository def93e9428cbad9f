//! The network database.
//!
//! This module provides a small, built-in version of the protocol and
//! service databases of POSIX’s network database. It is used for parsing
//! WKS records, so it only knows the handful of protocols and services
//! that commonly appear there. Lookups by name ignore ASCII case.

//------------ ProtoEnt -----------------------------------------------------

/// An entry of the protocol database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProtoEnt {
    pub name: &'static str,
    pub proto: u8,
}

impl ProtoEnt {
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        Self::iter().find(|ent| ent.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn by_number(number: u8) -> Option<Self> {
        Self::iter().find(|ent| ent.proto == number)
    }

    pub fn iter() -> impl Iterator<Item = ProtoEnt> {
        PROTOCOLS
            .iter()
            .map(|&(name, proto)| ProtoEnt { name, proto })
    }
}

//------------ ServEnt ------------------------------------------------------

/// An entry of the services database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ServEnt {
    pub name: &'static str,
    pub port: u16,
    pub proto: &'static str,
}

impl ServEnt {
    /// Looks up a service by its name for the given protocol.
    #[must_use]
    pub fn by_name(name: &str, proto: &str) -> Option<Self> {
        Self::iter().find(|ent| {
            ent.name.eq_ignore_ascii_case(name)
                && ent.proto.eq_ignore_ascii_case(proto)
        })
    }

    #[must_use]
    pub fn by_port(port: u16, proto: &str) -> Option<Self> {
        Self::iter().find(|ent| {
            ent.port == port && ent.proto.eq_ignore_ascii_case(proto)
        })
    }

    pub fn iter() -> impl Iterator<Item = ServEnt> {
        SERVICES.iter().flat_map(|&(name, port, tcp, udp)| {
            let tcp = tcp.then_some(ServEnt {
                name,
                port,
                proto: "tcp",
            });
            let udp = udp.then_some(ServEnt {
                name,
                port,
                proto: "udp",
            });
            tcp.into_iter().chain(udp)
        })
    }
}

//------------ Constants -----------------------------------------------------

const PROTOCOLS: &[(&str, u8)] = &[("icmp", 1), ("tcp", 6), ("udp", 17)];

/// Services as name, port, and whether they exist for TCP and UDP.
const SERVICES: &[(&str, u16, bool, bool)] = &[
    ("echo", 7, true, true),
    ("discard", 9, true, true),
    ("daytime", 13, true, true),
    ("ftp-data", 20, true, false),
    ("ftp", 21, true, false),
    ("ssh", 22, true, false),
    ("telnet", 23, true, false),
    ("smtp", 25, true, false),
    ("time", 37, true, true),
    ("domain", 53, true, true),
    ("tftp", 69, false, true),
    ("finger", 79, true, false),
    ("http", 80, true, false),
    ("kerberos", 88, true, true),
    ("pop3", 110, true, false),
    ("sunrpc", 111, true, true),
    ("nntp", 119, true, false),
    ("ntp", 123, false, true),
    ("imap", 143, true, false),
    ("snmp", 161, false, true),
    ("ldap", 389, true, false),
    ("https", 443, true, false),
    ("submission", 587, true, false),
    ("domain-s", 853, true, true),
];

//============ Test ==========================================================
