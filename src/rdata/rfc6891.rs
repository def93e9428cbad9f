//! Record data from [RFC 6891]: EDNS OPT records.
//!
//! The OPT record is a pseudo record type that carries EDNS options. Its
//! record data is a sequence of options. The options themselves live in
//! [`base::opt`][crate::base::opt].
//!
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

use crate::base::cursor::WireCursor;
use crate::base::iana::Rtype;
use crate::base::opt::{OptData, OptOption};
use crate::base::rdata::{fmt_generic, RecordDataCodec};
use crate::base::scan::{ScanError, Tokens};
use crate::base::wire::{Compose, ParseError};
use core::{fmt, slice};
use octseq::builder::OctetsBuilder;

//------------ Opt ----------------------------------------------------------

/// OPT record data.
///
/// The data consists of zero or more options. Options of a known type are
/// validated when the data is parsed. OPT records never appear in zone
/// files, so there is no presentation format other than the generic one
/// used for display.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opt {
    options: Vec<OptOption>,
}

impl Opt {
    /// Creates OPT record data from a list of options.
    ///
    /// Returns an error if the options together exceed the record data
    /// size limit.
    pub fn new(options: Vec<OptOption>) -> Result<Self, ParseError> {
        let len: usize = options.iter().map(OptOption::compose_len).sum();
        if len > usize::from(u16::MAX) {
            return Err(ParseError::form_error("record data too long"));
        }
        Ok(Opt { options })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns an iterator over the options.
    pub fn iter(&self) -> slice::Iter<'_, OptOption> {
        self.options.iter()
    }

    /// Returns the first option of the given type, if present.
    ///
    /// Options have been validated upon parsing, so this only fails for
    /// options added through [`new`][Self::new].
    #[must_use]
    pub fn first<Data: OptData>(&self) -> Option<Result<Data, ParseError>> {
        self.options.iter().find_map(OptOption::to_data::<Data>)
    }
}

//--- IntoIterator

impl<'a> IntoIterator for &'a Opt {
    type Item = &'a OptOption;
    type IntoIter = slice::Iter<'a, OptOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- RecordDataCodec

impl RecordDataCodec for Opt {
    const RTYPE: Rtype = Rtype::OPT;

    fn parse_rdata(cursor: &mut WireCursor<'_>) -> Result<Self, ParseError> {
        let mut options = Vec::new();
        while !cursor.is_empty() {
            options.push(OptOption::parse(cursor)?);
        }
        Ok(Opt { options })
    }

    fn scan_rdata(_tokens: &mut Tokens<'_>) -> Result<Self, ScanError> {
        Err(ScanError::NotImplemented)
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        for option in &self.options {
            option.compose(target)?;
        }
        Ok(())
    }
}

//--- Display

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut data = Vec::new();
        for option in &self.options {
            option.compose(&mut data).map_err(|_| fmt::Error)?;
        }
        fmt_generic(&data, f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::OptionCode;
    use crate::base::opt::{ClientSubnet, Expire};
    use crate::base::rdata::test::test_compose_parse;

    #[test]
    fn opt_compose_parse() {
        let rdata = Opt::new(vec![
            OptOption::from_data(&Expire::new(Some(7))).unwrap(),
            OptOption::new(OptionCode::PADDING, vec![0; 3].into()).unwrap(),
        ])
        .unwrap();
        test_compose_parse(&rdata);
        test_compose_parse(&Opt::default());
        assert_eq!(rdata.first::<Expire>(), Some(Ok(Expire::new(Some(7)))));
        assert!(rdata.first::<ClientSubnet>().is_none());
        assert_eq!(rdata.iter().count(), 2);
    }

    #[test]
    fn opt_display() {
        let mut cursor =
            WireCursor::from_rdata(b"\x00\x08\x00\x04\x00\x01\x00\x00")
                .unwrap();
        let rdata = Opt::parse_rdata(&mut cursor).unwrap();
        assert_eq!(rdata.to_string(), r"\# 8 0008000400010000");
        assert_eq!(Opt::default().to_string(), r"\# 0");

        let rdata = Opt::new(vec![
            OptOption::from_data(&Expire::new(Some(7))).unwrap(),
            OptOption::new(OptionCode::PADDING, vec![0; 3].into()).unwrap(),
        ])
        .unwrap();
        assert_eq!(
            rdata.to_string(),
            r"\# 15 0009000400000007000C0003000000"
        );
    }

    #[test]
    fn opt_no_presentation_format() {
        let origin = crate::base::name::Dname::root();
        let mut scanner = crate::base::scan::IterScanner::new(["1"]);
        let mut tokens = Tokens::new(&mut scanner, &origin);
        assert_eq!(Opt::scan_rdata(&mut tokens), Err(ScanError::NotImplemented));
    }
}
