//! Grammar productions per [CSS 2.1 § 4.1.1 Tokenization](https://www.w3.org/TR/CSS21/syndata.html#tokenization).
//!
//! Each matcher looks at the start of the remaining input and returns the
//! longest lexeme its own production allows. The scanner tries them in the
//! order of [`PRODUCTIONS`] and keeps the first one that matches, so the order
//! of that table decides overlaps such as `red-->` (an identifier followed by
//! `>`, never `red` followed by CDC).
//!
//! Matchers only ever report lengths that end on a character boundary.

use super::token::TokenKind;

/// A successful match: the kind and the length of the lexeme in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    /// The token kind the production yields
    pub kind: TokenKind,
    /// Length of the matched text in bytes
    pub len: usize,
}

impl Lexeme {
    const fn new(kind: TokenKind, len: usize) -> Self {
        Self { kind, len }
    }
}

/// One grammar production in the ordered table.
#[derive(Debug, Clone, Copy)]
pub struct Production {
    /// Short name used in trace output
    pub name: &'static str,
    /// Matcher applied to the remaining input
    pub matcher: fn(&str) -> Option<Lexeme>,
}

impl Production {
    const fn new(name: &'static str, matcher: fn(&str) -> Option<Lexeme>) -> Self {
        Self { name, matcher }
    }
}

/// The productions in priority order.
pub static PRODUCTIONS: &[Production] = &[
    Production::new("comment", comment),
    Production::new("whitespace", whitespace),
    Production::new("string", string),
    Production::new("uri", uri),
    Production::new("unicode-range", unicode_range),
    Production::new("cdo-cdc", cdo_cdc),
    Production::new("match", match_operator),
    Production::new("numeric", numeric),
    Production::new("hash", hash),
    Production::new("ident-like", ident_like),
    Production::new("delim", delim),
];

/// Find the first production that matches the start of `input`.
#[must_use]
pub fn match_production(input: &str) -> Option<(&'static Production, Lexeme)> {
    PRODUCTIONS
        .iter()
        .find_map(|production| (production.matcher)(input).map(|lexeme| (production, lexeme)))
}

// =============================================================================
// Character classes
// =============================================================================

/// "wc [\t\n\f\r ]"
pub(crate) const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// "nl \n|\r\n|\r|\f"
pub(crate) const fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\x0C')
}

/// "nonascii": any character from U+0080 up. The CSS 2.1 macro `[^\0-\237]`
/// is octal and would start at U+00A0.
const fn is_nonascii(c: char) -> bool {
    c as u32 >= 0x80
}

/// "nmstart [_a-z]|{nonascii}|{escape}" (without the escape alternative)
const fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || is_nonascii(c)
}

/// "nmchar [_a-z0-9-]|{nonascii}|{escape}" (without the escape alternative)
const fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-'
}

/// "[!#$%&*-\[\]-~]|{nonascii}", the unescaped characters of an unquoted URI
const fn is_url_char(c: char) -> bool {
    matches!(c, '!' | '#'..='&' | '*'..='[' | ']'..='~') || is_nonascii(c)
}

// =============================================================================
// Macros of the grammar
// =============================================================================

/// Number of leading bytes of `bytes` after `from` satisfying `pred`, at most `max`.
fn count_bytes(bytes: &[u8], from: usize, max: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes
        .iter()
        .skip(from)
        .take(max)
        .take_while(|&&b| pred(b))
        .count()
}

/// Length of the whitespace run at the start of `input`.
fn whitespace_len(input: &str) -> usize {
    input.len() - input.trim_start_matches(is_whitespace).len()
}

/// "unicode \\[0-9a-f]{1,6}(\r\n|[ \n\r\t\f])?"
/// "escape {unicode}|\\[^\n\r\f0-9a-f]"
///
/// Length of the escape at the start of `input`, if it starts with one.
fn escape_len(input: &str) -> Option<usize> {
    let rest = input.strip_prefix('\\')?;
    let first = rest.chars().next()?;
    if first.is_ascii_hexdigit() {
        let digits = count_bytes(rest.as_bytes(), 0, 6, |b| b.is_ascii_hexdigit());
        let after = &rest[digits..];
        let trailing = if after.starts_with("\r\n") {
            2
        } else {
            usize::from(after.starts_with(is_whitespace))
        };
        Some(1 + digits + trailing)
    } else if is_newline(first) {
        None
    } else {
        Some(1 + first.len_utf8())
    }
}

/// Length of a run of `nmchar`s (escapes included) at the start of `input`.
fn name_chars_len(input: &str) -> usize {
    let mut len = 0;
    loop {
        let rest = &input[len..];
        match rest.chars().next() {
            Some(c) if is_name_char(c) => len += c.len_utf8(),
            Some('\\') => match escape_len(rest) {
                Some(n) => len += n,
                None => return len,
            },
            _ => return len,
        }
    }
}

/// "ident -?{nmstart}{nmchar}*"
fn ident_len(input: &str) -> Option<usize> {
    let dash = usize::from(input.starts_with('-'));
    let rest = &input[dash..];
    let start = match rest.chars().next()? {
        c if is_name_start(c) => c.len_utf8(),
        '\\' => escape_len(rest)?,
        _ => return None,
    };
    Some(dash + start + name_chars_len(&rest[start..]))
}

/// "num [0-9]+|[0-9]*\.[0-9]+"
fn num_len(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let integer = count_bytes(bytes, 0, usize::MAX, |b| b.is_ascii_digit());
    let fraction = if bytes.get(integer) == Some(&b'.') {
        match count_bytes(bytes, integer + 1, usize::MAX, |b| b.is_ascii_digit()) {
            0 => 0,
            digits => 1 + digits,
        }
    } else {
        0
    };
    match integer + fraction {
        0 => None,
        len => Some(len),
    }
}

/// "string1 \"([^\n\r\f\\"]|\\{nl}|{escape})*\""
/// "string2 \'([^\n\r\f\\']|\\{nl}|{escape})*\'"
///
/// Scans a quoted string and returns its length and whether the closing quote
/// was found. An unterminated string stops before the newline that ends it.
fn string_len(input: &str) -> Option<(usize, bool)> {
    let quote = input.chars().next().filter(|&c| c == '"' || c == '\'')?;
    let mut len = 1;
    loop {
        let rest = &input[len..];
        let Some(c) = rest.chars().next() else {
            return Some((len, false));
        };
        match c {
            c if c == quote => return Some((len + 1, true)),
            '\\' => {
                len += match rest[1..].chars().next() {
                    // A backslash as the last character of the input.
                    None => 1,
                    Some('\r') if rest[1..].starts_with("\r\n") => 3,
                    Some(nl) if is_newline(nl) => 2,
                    Some(other) => escape_len(rest).unwrap_or(1 + other.len_utf8()),
                }
            }
            c if is_newline(c) => return Some((len, false)),
            c => len += c.len_utf8(),
        }
    }
}

/// Length of the unquoted URI body at the start of `input`.
fn url_chars_len(input: &str) -> usize {
    let mut len = 0;
    loop {
        let rest = &input[len..];
        match rest.chars().next() {
            Some(c) if is_url_char(c) => len += c.len_utf8(),
            Some('\\') => match escape_len(rest) {
                Some(n) => len += n,
                None => return len,
            },
            _ => return len,
        }
    }
}

// =============================================================================
// Productions
// =============================================================================

/// "\/\*[^*]*\*+([^/*][^*]*\*+)*\/"
///
/// A comment left open runs to the end of the input.
fn comment(input: &str) -> Option<Lexeme> {
    let body = input.strip_prefix("/*")?;
    let len = body.find("*/").map_or(input.len(), |end| 2 + end + 2);
    Some(Lexeme::new(TokenKind::Comment, len))
}

/// "S [ \t\r\n\f]+"
fn whitespace(input: &str) -> Option<Lexeme> {
    match whitespace_len(input) {
        0 => None,
        len => Some(Lexeme::new(TokenKind::S, len)),
    }
}

/// "STRING {string}" or "BAD_STRING {badstring}"
fn string(input: &str) -> Option<Lexeme> {
    let (len, terminated) = string_len(input)?;
    let kind = if terminated {
        TokenKind::String
    } else {
        TokenKind::BadString
    };
    Some(Lexeme::new(kind, len))
}

/// "URI url\({w}{string}{w}\)|url\({w}([!#$%&*-\[\]-~]|{nonascii}|{escape})*{w}\)"
///
/// The body is consumed here as opaque text: `url(/*x*/pic.png)` is one URI
/// and never contains a comment. Anything that opens with `url(` but is not
/// closed properly becomes a BAD_URI covering what was read.
fn uri(input: &str) -> Option<Lexeme> {
    if !input.get(..4)?.eq_ignore_ascii_case("url(") {
        return None;
    }
    let mut len = 4;
    len += whitespace_len(&input[len..]);
    let body = &input[len..];
    if body.starts_with(['"', '\'']) {
        let (string, terminated) = string_len(body)?;
        len += string;
        if !terminated {
            return Some(Lexeme::new(TokenKind::BadURI, len));
        }
    } else {
        len += url_chars_len(body);
    }
    len += whitespace_len(&input[len..]);
    if input[len..].starts_with(')') {
        Some(Lexeme::new(TokenKind::URI, len + 1))
    } else {
        Some(Lexeme::new(TokenKind::BadURI, len))
    }
}

/// "UNICODE-RANGE u\+[0-9a-f?]{1,6}(-[0-9a-f]{1,6})?"
///
/// Wildcards may only follow the hex digits, and a `-` range is only allowed
/// when no wildcard was used.
fn unicode_range(input: &str) -> Option<Lexeme> {
    let bytes = input.as_bytes();
    if !matches!(bytes, [b'u' | b'U', b'+', ..]) {
        return None;
    }
    let digits = count_bytes(bytes, 2, 6, |b| b.is_ascii_hexdigit());
    let wildcards = count_bytes(bytes, 2 + digits, 6 - digits, |b| b == b'?');
    if digits + wildcards == 0 {
        return None;
    }
    let mut len = 2 + digits + wildcards;
    if wildcards == 0 && bytes.get(len) == Some(&b'-') {
        let end = count_bytes(bytes, len + 1, 6, |b| b.is_ascii_hexdigit());
        if end > 0 {
            len += 1 + end;
        }
    }
    Some(Lexeme::new(TokenKind::UnicodeRange, len))
}

/// "CDO <!--" and "CDC -->"
fn cdo_cdc(input: &str) -> Option<Lexeme> {
    if input.starts_with("<!--") {
        Some(Lexeme::new(TokenKind::CDO, 4))
    } else if input.starts_with("-->") {
        Some(Lexeme::new(TokenKind::CDC, 3))
    } else {
        None
    }
}

/// "INCLUDES ~=", "DASHMATCH |=", and the Selectors Level 3 substring operators
fn match_operator(input: &str) -> Option<Lexeme> {
    let kind = match input.as_bytes() {
        [b'~', b'=', ..] => TokenKind::Includes,
        [b'|', b'=', ..] => TokenKind::DashMatch,
        [b'^', b'=', ..] => TokenKind::PrefixMatch,
        [b'$', b'=', ..] => TokenKind::SuffixMatch,
        [b'*', b'=', ..] => TokenKind::SubstringMatch,
        _ => return None,
    };
    Some(Lexeme::new(kind, 2))
}

/// "NUMBER {num}", "PERCENTAGE {num}%", and "DIMENSION {num}{ident}"
///
/// The number is extended in place: a `%` or an identifier directly after it
/// belongs to the same token, anything else ends it.
fn numeric(input: &str) -> Option<Lexeme> {
    let len = num_len(input)?;
    let rest = &input[len..];
    if rest.starts_with('%') {
        Some(Lexeme::new(TokenKind::Percentage, len + 1))
    } else if let Some(unit) = ident_len(rest) {
        Some(Lexeme::new(TokenKind::Dimension, len + unit))
    } else {
        Some(Lexeme::new(TokenKind::Number, len))
    }
}

/// "HASH #{name}"
fn hash(input: &str) -> Option<Lexeme> {
    let rest = input.strip_prefix('#')?;
    match name_chars_len(rest) {
        0 => None,
        len => Some(Lexeme::new(TokenKind::Hash, 1 + len)),
    }
}

/// "ATKEYWORD @{ident}", "FUNCTION {ident}(", and "IDENT {ident}"
fn ident_like(input: &str) -> Option<Lexeme> {
    if let Some(rest) = input.strip_prefix('@') {
        return ident_len(rest).map(|len| Lexeme::new(TokenKind::AtKeyword, 1 + len));
    }
    let len = ident_len(input)?;
    if input[len..].starts_with('(') {
        Some(Lexeme::new(TokenKind::Function, len + 1))
    } else {
        Some(Lexeme::new(TokenKind::Ident, len))
    }
}

/// "any other character not matched by the above rules"
///
/// Control characters are left for the scanner to report as errors.
fn delim(input: &str) -> Option<Lexeme> {
    let c = input.chars().next()?;
    (!c.is_control()).then(|| Lexeme::new(TokenKind::Char, c.len_utf8()))
}
