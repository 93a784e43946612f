//! Escape decoding per [CSS 2.1 § 4.1.3 Characters and case](https://www.w3.org/TR/CSS21/syndata.html#characters).
//!
//! Token values keep their escapes verbatim; this module turns a lexeme into
//! the text it denotes, so that `te\st` and `test` compare equal.

use std::borrow::Cow;

use super::rules::{is_newline, is_whitespace};

/// "If the number is outside the range allowed by Unicode (e.g., "\110000" is
/// above the maximum 10FFFF allowed in current Unicode), the UA may replace the
/// escape with the 'replacement character' (U+FFFD)."
const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Decode the backslash escapes in `value`.
///
/// - `\` followed by one to six hex digits is that code point; one whitespace
///   character (or `\r\n`) after the digits is part of the escape.
/// - `\` followed by a newline is a line continuation and disappears.
/// - `\` followed by any other character is that character.
///
/// Input without a backslash is returned borrowed.
#[must_use]
pub fn unescape(value: &str) -> Cow<'_, str> {
    if !value.contains('\\') {
        return Cow::Borrowed(value);
    }

    let mut result = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(index) = rest.find('\\') {
        result.push_str(&rest[..index]);
        let after = &rest[index + 1..];
        let Some(first) = after.chars().next() else {
            // A lone backslash at the very end escapes nothing.
            rest = after;
            break;
        };

        if first.is_ascii_hexdigit() {
            let digits = after
                .bytes()
                .take(6)
                .take_while(u8::is_ascii_hexdigit)
                .count();
            result.push(decode_code_point(&after[..digits]));
            let tail = &after[digits..];
            rest = tail
                .strip_prefix("\r\n")
                .or_else(|| tail.strip_prefix(is_whitespace))
                .unwrap_or(tail);
        } else if after.starts_with("\r\n") {
            rest = &after[2..];
        } else if is_newline(first) {
            rest = &after[first.len_utf8()..];
        } else {
            result.push(first);
            rest = &after[first.len_utf8()..];
        }
    }
    result.push_str(rest);

    Cow::Owned(result)
}

/// Interpret hex digits as a code point, replacing zero, surrogates, and
/// out-of-range values.
fn decode_code_point(hex: &str) -> char {
    u32::from_str_radix(hex, 16)
        .ok()
        .filter(|&code| code != 0)
        .and_then(char::from_u32)
        .unwrap_or(REPLACEMENT_CHARACTER)
}
