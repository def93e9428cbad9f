//! Scanning the presentation format of record data.
//!
//! Record data in presentation format arrives as a sequence of tokens for a
//! single entry. Splitting the text into tokens is the job of a
//! [`Scanner`]. Two scanners are provided: [`IterScanner`] for input that
//! has already been split and [`StrScanner`] for a single line of text.
//!
//! Tokens keep their escape sequences. How an escape is interpreted depends
//! on the field: an escaped dot is part of a label in a domain name but a
//! plain dot in a character string. The [`Symbol`] type decodes them.
//!
//! Record data types receive their tokens through [`Tokens`] which adds
//! lookahead, the origin for relative domain names, and helpers for the
//! common field types.

use super::charstr::CharStr;
use super::name::Dname;
use core::fmt;
use core::num::IntErrorKind;

//------------ Token ---------------------------------------------------------

/// A single word of presentation format.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// The text of the token with escape sequences intact.
    ///
    /// For quoted tokens, the quotes are not included.
    text: String,

    /// Whether the token was enclosed in double quotes.
    quoted: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, quoted: bool) -> Self {
        Token {
            text: text.into(),
            quoted,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Returns an iterator over the symbols of the token.
    #[must_use]
    pub fn symbols(&self) -> TokenSymbols<'_> {
        TokenSymbols {
            text: &self.text,
            pos: 0,
        }
    }
}

//--- Display

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.quoted {
            write!(f, "\"{}\"", self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}

//------------ TokenSymbols --------------------------------------------------

/// An iterator over the symbols of a token.
#[derive(Clone, Debug)]
pub struct TokenSymbols<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for TokenSymbols<'_> {
    type Item = Result<Symbol, SymbolError>;

    fn next(&mut self) -> Option<Self::Item> {
        match Symbol::from_str_index(self.text, self.pos) {
            Ok(Some((symbol, pos))) => {
                self.pos = pos;
                Some(Ok(symbol))
            }
            Ok(None) => None,
            Err(err) => {
                // Stop after the first error.
                self.pos = self.text.len();
                Some(Err(err))
            }
        }
    }
}

//------------ Scanner -------------------------------------------------------

/// A source of tokens for a single record data entry.
pub trait Scanner {
    /// Returns the next token or `None` at the end of the entry.
    fn next_token(&mut self) -> Result<Option<Token>, ScanError>;
}

impl<S: Scanner + ?Sized> Scanner for &mut S {
    fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        (**self).next_token()
    }
}

//------------ IterScanner ---------------------------------------------------

/// A scanner over an iterator of pre-split tokens.
///
/// An item enclosed in double quotes becomes a quoted token without the
/// quotes. Everything else is taken as is.
#[derive(Clone, Debug)]
pub struct IterScanner<Iter> {
    iter: Iter,
}

impl<Iter> IterScanner<Iter> {
    pub fn new<I>(iter: I) -> Self
    where
        I: IntoIterator<IntoIter = Iter>,
    {
        IterScanner {
            iter: iter.into_iter(),
        }
    }
}

impl<Iter, Item> Scanner for IterScanner<Iter>
where
    Iter: Iterator<Item = Item>,
    Item: AsRef<str>,
{
    fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        Ok(self.iter.next().map(|item| {
            let item = item.as_ref();
            match item
                .strip_prefix('"')
                .and_then(|item| item.strip_suffix('"'))
            {
                Some(inner) => Token::new(inner, true),
                None => Token::new(item, false),
            }
        }))
    }
}

//------------ StrScanner ----------------------------------------------------

/// A scanner splitting a line of presentation format text.
///
/// Tokens are separated by white space. Parentheses are ignored so that
/// record data copied from a multi-line zone file entry can be used. A
/// semicolon starts a comment that lasts until the end of the input. Text
/// in double quotes is a single token. Within tokens, a backslash escapes
/// the following character.
#[derive(Clone, Debug)]
pub struct StrScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> StrScanner<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        StrScanner { input, pos: 0 }
    }
}

impl Scanner for StrScanner<'_> {
    fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        let input = self.input;
        let rest = &input[self.pos..];
        let mut chars = rest.char_indices().peekable();

        let start = loop {
            match chars.peek() {
                None | Some(&(_, ';')) => {
                    self.pos = input.len();
                    return Ok(None);
                }
                Some(&(_, ch)) if is_separator(ch) => {
                    chars.next();
                }
                Some(&(idx, _)) => break idx,
            }
        };

        if rest[start..].starts_with('"') {
            chars.next();
            let mut escaped = false;
            for (idx, ch) in chars {
                if escaped {
                    escaped = false
                } else if ch == '\\' {
                    escaped = true
                } else if ch == '"' {
                    self.pos += idx + 1;
                    return Ok(Some(Token::new(&rest[start + 1..idx], true)));
                }
            }
            Err(ScanError::Syntax("unterminated quoted string"))
        } else {
            let mut end = rest.len();
            let mut escaped = false;
            for (idx, ch) in chars {
                if escaped {
                    escaped = false
                } else if ch == '\\' {
                    escaped = true
                } else if is_separator(ch) || ch == ';' || ch == '"' {
                    end = idx;
                    break;
                }
            }
            self.pos += end;
            Ok(Some(Token::new(&rest[start..end], false)))
        }
    }
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '(' || ch == ')'
}

//------------ Tokens --------------------------------------------------------

/// The tokens of a record data entry as seen by a record type.
pub struct Tokens<'a> {
    scanner: &'a mut dyn Scanner,
    origin: &'a Dname,
    pending: Option<Token>,
}

impl<'a> Tokens<'a> {
    pub fn new(scanner: &'a mut dyn Scanner, origin: &'a Dname) -> Self {
        Tokens {
            scanner,
            origin,
            pending: None,
        }
    }

    /// Returns the name relative domain names are appended to.
    #[must_use]
    pub fn origin(&self) -> &Dname {
        self.origin
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<Option<&Token>, ScanError> {
        if self.pending.is_none() {
            self.pending = self.scanner.next_token()?;
        }
        Ok(self.pending.as_ref())
    }

    /// Returns the next token or `None` at the end of the entry.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        match self.pending.take() {
            Some(token) => Ok(Some(token)),
            None => self.scanner.next_token(),
        }
    }

    /// Returns the next token, which must exist.
    pub fn expect_token(&mut self) -> Result<Token, ScanError> {
        self.next_token()?.ok_or(ScanError::UnexpectedEnd)
    }

    pub fn is_exhausted(&mut self) -> Result<bool, ScanError> {
        Ok(self.peek()?.is_none())
    }

    /// Returns an error if there are tokens left.
    pub fn check_exhausted(&mut self) -> Result<(), ScanError> {
        if self.is_exhausted()? {
            Ok(())
        } else {
            Err(ScanError::TrailingTokens)
        }
    }

    pub fn scan_u8(&mut self) -> Result<u8, ScanError> {
        self.scan_int()
    }

    pub fn scan_u16(&mut self) -> Result<u16, ScanError> {
        self.scan_int()
    }

    pub fn scan_u32(&mut self) -> Result<u32, ScanError> {
        self.scan_int()
    }

    fn scan_int<T: TryFrom<u32>>(&mut self) -> Result<T, ScanError> {
        let token = self.expect_token()?;
        let value = parse_uint32(token.as_str(), 10)?;
        T::try_from(value).map_err(|_| ScanError::Range)
    }

    /// Scans a domain name, appending the origin if it is relative.
    pub fn scan_dname(&mut self) -> Result<Dname, ScanError> {
        let token = self.expect_token()?;
        Dname::from_token(&token, self.origin)
    }

    pub fn scan_charstr(&mut self) -> Result<CharStr, ScanError> {
        let token = self.expect_token()?;
        CharStr::from_token(&token)
    }
}

//--- Debug

impl fmt::Debug for Tokens<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Tokens")
            .field("origin", &self.origin)
            .field("pending", &self.pending)
            .finish()
    }
}

//------------ parse_uint32 --------------------------------------------------

/// Parses an unsigned 32 bit integer from text.
///
/// The text must start with an alphanumeric character, which rules out
/// signs and white space, and must consist of digits of `base` only.
/// A `base` of 0 selects the base from the prefix: `0x` for hexadecimal, a
/// leading zero for octal, and decimal otherwise. With a `base` of 16, the
/// `0x` prefix is optional.
///
/// Returns [`ScanError::BadNumber`] if the text isn’t a number and
/// [`ScanError::Range`] if the value doesn’t fit.
pub fn parse_uint32(text: &str, base: u32) -> Result<u32, ScanError> {
    match text.as_bytes().first() {
        Some(ch) if ch.is_ascii_alphanumeric() => {}
        _ => return Err(ScanError::BadNumber),
    }
    let (digits, radix) = match base {
        0 => {
            if let Some(hex) = strip_hex_prefix(text) {
                (hex, 16)
            } else if text.len() > 1 && text.starts_with('0') {
                (&text[1..], 8)
            } else {
                (text, 10)
            }
        }
        16 => (strip_hex_prefix(text).unwrap_or(text), 16),
        2..=36 => (text, base),
        _ => return Err(ScanError::BadNumber),
    };
    if digits.starts_with('+') {
        return Err(ScanError::BadNumber);
    }
    u32::from_str_radix(digits, radix).map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => ScanError::Range,
        _ => ScanError::BadNumber,
    })
}

fn strip_hex_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
}

//------------ Symbol --------------------------------------------------------

/// The presentation format representation of a single character.
///
/// This is either a regular character or an escape sequence. See the
/// variants for more details.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Symbol {
    /// An unescaped Unicode character.
    Char(char),

    /// A character escaped via a preceding backslash.
    ///
    /// This escape sequence is only allowed for printable ASCII characters.
    SimpleEscape(u8),

    /// A raw octet escaped using the decimal escape sequence.
    ///
    /// This escape sequence consists of a backslash followed by exactly
    /// three decimal digits with the value of the octet.
    DecimalEscape(u8),
}

impl Symbol {
    /// Reads a symbol from the given position in a string.
    ///
    /// Returns the symbol and the index of the end of the symbol or
    /// `Ok(None)` if `pos` is at the end of the string.
    pub fn from_str_index(
        text: &str,
        pos: usize,
    ) -> Result<Option<(Symbol, usize)>, SymbolError> {
        let mut chars = match text.get(pos..) {
            Some(rest) => rest.chars(),
            None => return Err(SymbolError::ShortInput),
        };
        let c1 = match chars.next() {
            Some(c1) => c1,
            None => return Ok(None),
        };
        if c1 != '\\' {
            return Ok(Some((Symbol::Char(c1), pos + c1.len_utf8())));
        }

        let c2 = chars.next().ok_or(SymbolError::ShortInput)?;
        if !c2.is_ascii() || c2.is_ascii_control() {
            return Err(SymbolError::BadEscape);
        }
        if !c2.is_ascii_digit() {
            return Ok(Some((Symbol::SimpleEscape(c2 as u8), pos + 2)));
        }

        let mut value = u32::from(c2 as u8 - b'0');
        for _ in 0..2 {
            let digit = chars
                .next()
                .ok_or(SymbolError::ShortInput)?
                .to_digit(10)
                .ok_or(SymbolError::BadEscape)?;
            value = value * 10 + digit;
        }
        let value = u8::try_from(value).map_err(|_| SymbolError::BadEscape)?;
        Ok(Some((Symbol::DecimalEscape(value), pos + 4)))
    }

    /// Provides the best symbol for an octet.
    ///
    /// The function will use the simple escape sequence for octet values
    /// that represent ASCII spaces, quotes, backslashes, and semicolons and
    /// the plain ASCII value for all other printable ASCII characters. Any
    /// other value is escaped using the decimal escape sequence.
    #[must_use]
    pub fn from_octet(ch: u8) -> Self {
        if ch == b' ' || ch == b'"' || ch == b'\\' || ch == b';' {
            Symbol::SimpleEscape(ch)
        } else if !(0x20..0x7F).contains(&ch) {
            Symbol::DecimalEscape(ch)
        } else {
            Symbol::Char(ch.into())
        }
    }

    /// Converts the symbol into an octet if it represents one.
    ///
    /// Domain names and character strings are sequences of octets. These
    /// are represented by printable ASCII characters, plain or through a
    /// simple escape, or by a decimal escape. Any other character is an
    /// error.
    pub fn into_octet(self) -> Result<u8, BadSymbol> {
        match self {
            Symbol::Char(ch) => {
                if (' '..='~').contains(&ch) {
                    Ok(ch as u8)
                } else {
                    Err(BadSymbol(self))
                }
            }
            Symbol::SimpleEscape(ch) | Symbol::DecimalEscape(ch) => Ok(ch),
        }
    }
}

//--- Display

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Symbol::Char(ch) => write!(f, "{}", ch),
            Symbol::SimpleEscape(ch) => write!(f, "\\{}", ch as char),
            Symbol::DecimalEscape(ch) => write!(f, "\\{:03}", ch),
        }
    }
}

//============ Error Types ===================================================

//------------ ScanError -----------------------------------------------------

/// An error happened while scanning presentation format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScanError {
    /// The text doesn’t follow the syntax of the field.
    Syntax(&'static str),

    /// A token isn’t a number.
    BadNumber,

    /// A number doesn’t fit into its field.
    Range,

    /// The entry ended before all fields were scanned.
    UnexpectedEnd,

    /// There are tokens left after the last field.
    TrailingTokens,

    /// The record type has no presentation format of its own.
    NotImplemented,
}

//--- From

impl From<SymbolError> for ScanError {
    fn from(err: SymbolError) -> Self {
        match err {
            SymbolError::BadEscape => {
                ScanError::Syntax("illegal escape sequence")
            }
            SymbolError::ShortInput => {
                ScanError::Syntax("unexpected end of escape sequence")
            }
        }
    }
}

impl From<BadSymbol> for ScanError {
    fn from(_: BadSymbol) -> Self {
        ScanError::Syntax("illegal character")
    }
}

//--- Display and Error

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ScanError::Syntax(msg) => f.write_str(msg),
            ScanError::BadNumber => f.write_str("bad number"),
            ScanError::Range => f.write_str("number out of range"),
            ScanError::UnexpectedEnd => f.write_str("unexpected end of input"),
            ScanError::TrailingTokens => f.write_str("trailing data"),
            ScanError::NotImplemented => f.write_str("not implemented"),
        }
    }
}

impl std::error::Error for ScanError {}

//------------ SymbolError ---------------------------------------------------

/// An error happened when reading a symbol.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SymbolError {
    /// An illegal escape sequence was encountered.
    BadEscape,

    /// The input ended inside an escape sequence.
    ShortInput,
}

//--- Display and Error

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SymbolError::BadEscape => f.write_str("illegal escape sequence"),
            SymbolError::ShortInput => f.write_str("unexpected end of input"),
        }
    }
}

impl std::error::Error for SymbolError {}

//------------ BadSymbol -----------------------------------------------------

/// A symbol with an unexpected value was encountered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BadSymbol(pub Symbol);

//--- Display and Error

impl fmt::Display for BadSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unexpected symbol '{}'", self.0)
    }
}

impl std::error::Error for BadSymbol {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let mut scanner = StrScanner::new(input);
        let mut res = Vec::new();
        while let Some(token) = scanner.next_token().unwrap() {
            res.push(token)
        }
        res
    }

    #[test]
    fn str_scanner() {
        assert_eq!(
            tokens("  10 mail.example.com.\t"),
            [Token::new("10", false), Token::new("mail.example.com.", false)]
        );
        assert_eq!(
            tokens(r#""a b" c\ d "\"" ; comment"#),
            [
                Token::new("a b", true),
                Token::new(r"c\ d", false),
                Token::new(r#"\""#, true),
            ]
        );
        assert_eq!(
            tokens("( 1 2\n 3 )"),
            [
                Token::new("1", false),
                Token::new("2", false),
                Token::new("3", false),
            ]
        );
        assert!(tokens("").is_empty());
        assert!(tokens("; just a comment").is_empty());
        assert_eq!(
            tokens(r#""""#),
            [Token::new("", true)]
        );
    }

    #[test]
    fn str_scanner_unterminated() {
        let mut scanner = StrScanner::new("\"abc");
        assert!(scanner.next_token().is_err());
    }

    #[test]
    fn iter_scanner() {
        let mut scanner = IterScanner::new(["\"a b\"", "c", "\""]);
        assert_eq!(scanner.next_token(), Ok(Some(Token::new("a b", true))));
        assert_eq!(scanner.next_token(), Ok(Some(Token::new("c", false))));
        assert_eq!(scanner.next_token(), Ok(Some(Token::new("\"", false))));
        assert_eq!(scanner.next_token(), Ok(None));
    }

    #[test]
    fn tokens_lookahead() {
        let origin = Dname::root();
        let mut scanner = IterScanner::new(["1", "2"]);
        let mut tokens = Tokens::new(&mut scanner, &origin);
        assert_eq!(tokens.peek().unwrap().unwrap().as_str(), "1");
        assert_eq!(tokens.scan_u8(), Ok(1));
        assert!(!tokens.is_exhausted().unwrap());
        assert_eq!(tokens.check_exhausted(), Err(ScanError::TrailingTokens));
        assert_eq!(tokens.scan_u16(), Ok(2));
        assert!(tokens.is_exhausted().unwrap());
        assert_eq!(tokens.scan_u32(), Err(ScanError::UnexpectedEnd));
    }

    #[test]
    fn tokens_field_range() {
        let origin = Dname::root();
        let mut scanner = IterScanner::new(["256", "65536", "x"]);
        let mut tokens = Tokens::new(&mut scanner, &origin);
        assert_eq!(tokens.scan_u8(), Err(ScanError::Range));
        assert_eq!(tokens.scan_u16(), Err(ScanError::Range));
        assert_eq!(tokens.scan_u32(), Err(ScanError::BadNumber));
    }

    #[test]
    fn uint32() {
        assert_eq!(parse_uint32("0", 10), Ok(0));
        assert_eq!(parse_uint32("4294967295", 10), Ok(u32::MAX));
        assert_eq!(parse_uint32("4294967296", 10), Err(ScanError::Range));
        assert_eq!(parse_uint32("", 10), Err(ScanError::BadNumber));
        assert_eq!(parse_uint32("-1", 10), Err(ScanError::BadNumber));
        assert_eq!(parse_uint32("+1", 10), Err(ScanError::BadNumber));
        assert_eq!(parse_uint32(" 1", 10), Err(ScanError::BadNumber));
        assert_eq!(parse_uint32("12a", 10), Err(ScanError::BadNumber));
        assert_eq!(parse_uint32("ff", 16), Ok(255));
        assert_eq!(parse_uint32("0xff", 16), Ok(255));
        assert_eq!(parse_uint32("0X10", 16), Ok(16));
        assert_eq!(parse_uint32("0x", 16), Err(ScanError::BadNumber));
        assert_eq!(parse_uint32("0x+1", 16), Err(ScanError::BadNumber));
        assert_eq!(parse_uint32("0x10", 10), Err(ScanError::BadNumber));
        assert_eq!(parse_uint32("0x1F", 0), Ok(31));
        assert_eq!(parse_uint32("017", 0), Ok(15));
        assert_eq!(parse_uint32("17", 0), Ok(17));
        assert_eq!(parse_uint32("0x+1", 0), Err(ScanError::BadNumber));
        assert_eq!(parse_uint32("1", 1), Err(ScanError::BadNumber));
    }

    #[test]
    fn symbol_from_str_index() {
        assert_eq!(
            Symbol::from_str_index("aä", 0),
            Ok(Some((Symbol::Char('a'), 1)))
        );
        assert_eq!(
            Symbol::from_str_index("aä", 1),
            Ok(Some((Symbol::Char('ä'), 3)))
        );
        assert_eq!(Symbol::from_str_index("aä", 3), Ok(None));
        assert_eq!(
            Symbol::from_str_index(r"\.", 0),
            Ok(Some((Symbol::SimpleEscape(b'.'), 2)))
        );
        assert_eq!(
            Symbol::from_str_index(r"\255", 0),
            Ok(Some((Symbol::DecimalEscape(255), 4)))
        );
        assert_eq!(
            Symbol::from_str_index(r"\256", 0),
            Err(SymbolError::BadEscape)
        );
        assert_eq!(
            Symbol::from_str_index(r"\12", 0),
            Err(SymbolError::ShortInput)
        );
        assert_eq!(
            Symbol::from_str_index(r"\1a3", 0),
            Err(SymbolError::BadEscape)
        );
        assert_eq!(Symbol::from_str_index("\\", 0), Err(SymbolError::ShortInput));
    }

    #[test]
    fn symbol_octets() {
        for ch in 0..=255u8 {
            let symbol = Symbol::from_octet(ch);
            assert_eq!(symbol.into_octet(), Ok(ch));
            let text = symbol.to_string();
            assert_eq!(
                Symbol::from_str_index(&text, 0),
                Ok(Some((symbol, text.len())))
            );
        }
        assert!(Symbol::Char('ä').into_octet().is_err());
        assert!(Symbol::Char('\t').into_octet().is_err());
    }
}
