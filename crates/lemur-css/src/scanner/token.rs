//! CSS token types per [CSS 2.1 § 4.1.1 Tokenization](https://www.w3.org/TR/CSS21/syndata.html#tokenization).
//!
//! "All levels of CSS (level 1, level 2, and any future levels) use the same
//! core syntax." The scanner reports every production of that core syntax as a
//! [`TokenKind`], and every token keeps the exact source text it was matched
//! from, so concatenating the values of a token stream reproduces the input.

use core::fmt;
use std::borrow::Cow;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use super::escape::unescape;

/// [§ 4.1.1 Tokenization](https://www.w3.org/TR/CSS21/syndata.html#tokenization)
///
/// The closed set of token kinds. `Display` renders the production name used
/// in the CSS 2.1 grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum TokenKind {
    /// "IDENT {ident}"
    #[strum(serialize = "IDENT")]
    Ident,
    /// "FUNCTION {ident}("
    #[strum(serialize = "FUNCTION")]
    Function,
    /// "ATKEYWORD @{ident}"
    #[strum(serialize = "ATKEYWORD")]
    AtKeyword,
    /// "HASH #{name}"
    #[strum(serialize = "HASH")]
    Hash,
    /// "STRING {string}"
    #[strum(serialize = "STRING")]
    String,
    /// "BAD_STRING {badstring}" - a string cut off by a newline or the end of input
    #[strum(serialize = "BAD_STRING")]
    BadString,
    /// "URI url\({w}{string}{w}\)|url\({w}([!#$%&*-\[\]-~]|{nonascii}|{escape})*{w}\)"
    #[strum(serialize = "URI")]
    URI,
    /// "BAD_URI {baduri}" - `url(` without a valid body and closing parenthesis
    #[strum(serialize = "BAD_URI")]
    BadURI,
    /// "UNICODE-RANGE u\+[0-9a-f?]{1,6}(-[0-9a-f]{1,6})?"
    #[strum(serialize = "UNICODE-RANGE")]
    UnicodeRange,
    /// "NUMBER {num}"
    #[strum(serialize = "NUMBER")]
    Number,
    /// "PERCENTAGE {num}%"
    #[strum(serialize = "PERCENTAGE")]
    Percentage,
    /// "DIMENSION {num}{ident}"
    #[strum(serialize = "DIMENSION")]
    Dimension,
    /// "CDO <!--"
    #[strum(serialize = "CDO")]
    CDO,
    /// "CDC -->"
    #[strum(serialize = "CDC")]
    CDC,
    /// "S [ \t\r\n\f]+"
    #[strum(serialize = "S")]
    S,
    /// "COMMENT \/\*[^*]*\*+([^/*][^*]*\*+)*\/"
    #[strum(serialize = "COMMENT")]
    Comment,
    /// "INCLUDES ~="
    #[strum(serialize = "INCLUDES")]
    Includes,
    /// "DASHMATCH |="
    #[strum(serialize = "DASHMATCH")]
    DashMatch,
    /// "PREFIXMATCH ^=" (Selectors Level 3)
    #[strum(serialize = "PREFIXMATCH")]
    PrefixMatch,
    /// "SUFFIXMATCH $=" (Selectors Level 3)
    #[strum(serialize = "SUFFIXMATCH")]
    SuffixMatch,
    /// "SUBSTRINGMATCH *=" (Selectors Level 3)
    #[strum(serialize = "SUBSTRINGMATCH")]
    SubstringMatch,
    /// "DELIM" - any other single character
    #[strum(serialize = "CHAR")]
    Char,
    /// U+FEFF BYTE ORDER MARK at the very start of the input
    #[strum(serialize = "BOM")]
    BOM,
    /// End of input - signals that no more tokens follow
    #[strum(serialize = "EOF")]
    EOF,
    /// A character no production accepts
    #[strum(serialize = "error")]
    Error,
}

impl TokenKind {
    /// Returns true for the kinds that report malformed input.
    #[must_use]
    pub const fn is_malformed(self) -> bool {
        matches!(self, Self::BadString | Self::BadURI | Self::Error)
    }
}

/// A classified, positioned span of source text.
///
/// `value` is the exact lexeme, delimiters included: a string token keeps its
/// quotes and a URI token keeps its `url(` and `)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The production that matched
    pub kind: TokenKind,
    /// The matched source text
    pub value: String,
    /// Line of the first character, starting at 1
    pub line: usize,
    /// Column of the first character in characters, starting at 1
    pub column: usize,
}

impl Token {
    /// Create a new token.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EOF)
    }

    /// Returns true if this token reports malformed input.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        self.kind.is_malformed()
    }

    /// [§ 4.1.3 Characters and case](https://www.w3.org/TR/CSS21/syndata.html#characters)
    ///
    /// The value with backslash escapes decoded, so `te\st` reads as `test`.
    #[must_use]
    pub fn unescaped(&self) -> Cow<'_, str> {
        unescape(&self.value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (line: {}, column: {}): {:?}",
            self.kind, self.line, self.column, self.value
        )
    }
}
