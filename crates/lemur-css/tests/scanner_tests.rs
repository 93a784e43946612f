//! Integration tests for the CSS scanner.

use lemur_css::{Scanner, ScannerState, Token, TokenKind, tokenize};

/// Helper to scan a string and return (kind, value) pairs, EOF excluded
fn scan(input: &str) -> Vec<(TokenKind, String)> {
    tokenize(input)
        .into_iter()
        .map(|token| {
            assert_ne!(token.kind, TokenKind::Error, "error token in {input:?}");
            (token.kind, token.value)
        })
        .collect()
}

/// Helper to build the expected (kind, value) pairs
fn expect(tokens: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    tokens
        .iter()
        .map(|&(kind, value)| (kind, value.to_string()))
        .collect()
}

#[test]
fn test_single_token_inputs() {
    let cases = [
        ("bar(", TokenKind::Function),
        ("abcd", TokenKind::Ident),
        ("\"abcd\"", TokenKind::String),
        ("'abcd'", TokenKind::String),
        ("#name", TokenKind::Hash),
        ("4.2", TokenKind::Number),
        (".42", TokenKind::Number),
        ("42%", TokenKind::Percentage),
        ("4.2%", TokenKind::Percentage),
        (".42%", TokenKind::Percentage),
        ("42px", TokenKind::Dimension),
        ("url('http://www.google.com/')", TokenKind::URI),
        ("U+0042", TokenKind::UnicodeRange),
        ("<!--", TokenKind::CDO),
        ("-->", TokenKind::CDC),
        ("   \n   \t   \n", TokenKind::S),
        ("/* foo */", TokenKind::Comment),
        ("~=", TokenKind::Includes),
        ("|=", TokenKind::DashMatch),
        ("^=", TokenKind::PrefixMatch),
        ("$=", TokenKind::SuffixMatch),
        ("*=", TokenKind::SubstringMatch),
        ("{", TokenKind::Char),
        ("\u{FEFF}", TokenKind::BOM),
        ("@media", TokenKind::AtKeyword),
    ];
    for (input, kind) in cases {
        assert_eq!(scan(input), expect(&[(kind, input)]), "input {input:?}");
    }
}

#[test]
fn test_number_followed_by_string() {
    assert_eq!(
        scan("42''"),
        expect(&[(TokenKind::Number, "42"), (TokenKind::String, "''")])
    );
}

#[test]
fn test_number_suffixes() {
    assert_eq!(scan("42"), expect(&[(TokenKind::Number, "42")]));
    assert_eq!(scan("42%"), expect(&[(TokenKind::Percentage, "42%")]));
    assert_eq!(scan("42px"), expect(&[(TokenKind::Dimension, "42px")]));
    assert_eq!(scan("1.5-x"), expect(&[(TokenKind::Dimension, "1.5-x")]));
    assert_eq!(
        scan("4.px"),
        expect(&[
            (TokenKind::Number, "4"),
            (TokenKind::Char, "."),
            (TokenKind::Ident, "px"),
        ])
    );
}

#[test]
fn test_non_ascii_identifier() {
    assert_eq!(
        scan("╯︵┻━┻\"stuff\""),
        expect(&[
            (TokenKind::Ident, "╯︵┻━┻"),
            (TokenKind::String, "\"stuff\""),
        ])
    );
}

#[test]
fn test_declarations() {
    assert_eq!(
        scan("color:red"),
        expect(&[
            (TokenKind::Ident, "color"),
            (TokenKind::Char, ":"),
            (TokenKind::Ident, "red"),
        ])
    );
    assert_eq!(
        scan("color:red;background:blue"),
        expect(&[
            (TokenKind::Ident, "color"),
            (TokenKind::Char, ":"),
            (TokenKind::Ident, "red"),
            (TokenKind::Char, ";"),
            (TokenKind::Ident, "background"),
            (TokenKind::Char, ":"),
            (TokenKind::Ident, "blue"),
        ])
    );
    assert_eq!(
        scan("color:#fff"),
        expect(&[
            (TokenKind::Ident, "color"),
            (TokenKind::Char, ":"),
            (TokenKind::Hash, "#fff"),
        ])
    );
}

#[test]
fn test_function_arguments() {
    assert_eq!(
        scan("color:rgb(0,1,2)"),
        expect(&[
            (TokenKind::Ident, "color"),
            (TokenKind::Char, ":"),
            (TokenKind::Function, "rgb("),
            (TokenKind::Number, "0"),
            (TokenKind::Char, ","),
            (TokenKind::Number, "1"),
            (TokenKind::Char, ","),
            (TokenKind::Number, "2"),
            (TokenKind::Char, ")"),
        ])
    );
}

#[test]
fn test_comment_inside_uri_is_not_a_comment() {
    // CSS 2.1 § 4.3.4: "url(/*x*/pic.png)" denotes the URI "/*x*/pic.png", not "pic.png".
    assert_eq!(
        scan("url(/*x*/pic.png)"),
        expect(&[(TokenKind::URI, "url(/*x*/pic.png)")])
    );
}

#[test]
fn test_uri_forms() {
    let cases = [
        "url(/pic.png)",
        "url( /pic.png )",
        "uRl(/pic.png)",
        "url(\"/pic.png\")",
        "url('/pic.png')",
        "url('/pic.png?badchars=\\(\\'\\\"\\)\\ ')",
        "URL(\n/pic.png\t)",
    ];
    for input in cases {
        assert_eq!(scan(input), expect(&[(TokenKind::URI, input)]), "input {input:?}");
    }
}

#[test]
fn test_identifier_swallows_cdc_dashes() {
    // CSS 2.1 § 4.1.1: "red-->" is IDENT "red--" followed by DELIM ">".
    assert_eq!(
        scan("red-->"),
        expect(&[(TokenKind::Ident, "red--"), (TokenKind::Char, ">")])
    );
    assert_eq!(
        scan("red -->"),
        expect(&[
            (TokenKind::Ident, "red"),
            (TokenKind::S, " "),
            (TokenKind::CDC, "-->"),
        ])
    );
}

#[test]
fn test_vendor_prefixed_property() {
    assert_eq!(
        scan("-moz-border:1"),
        expect(&[
            (TokenKind::Ident, "-moz-border"),
            (TokenKind::Char, ":"),
            (TokenKind::Number, "1"),
        ])
    );
}

#[test]
fn test_escaped_identifier_matches_plain_identifier() {
    // CSS 2.1 § 4.1.3: the identifier "te\st" is the same as "test".
    let plain = tokenize("test");
    let escaped = tokenize("te\\st");
    assert_eq!(plain.len(), 1);
    assert_eq!(escaped.len(), 1);
    assert_eq!(escaped[0].kind, TokenKind::Ident);
    assert_eq!(escaped[0].value, "te\\st");
    assert_eq!(escaped[0].unescaped(), plain[0].unescaped());
}

#[test]
fn test_hex_escape_starts_identifier() {
    let tokens = tokenize("\\31 0px");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].unescaped(), "10px");
}

#[test]
fn test_attribute_selector() {
    assert_eq!(
        scan("a[href^='http']"),
        expect(&[
            (TokenKind::Ident, "a"),
            (TokenKind::Char, "["),
            (TokenKind::Ident, "href"),
            (TokenKind::PrefixMatch, "^="),
            (TokenKind::String, "'http'"),
            (TokenKind::Char, "]"),
        ])
    );
}

#[test]
fn test_at_rule() {
    assert_eq!(
        scan("@import url(a.css);"),
        expect(&[
            (TokenKind::AtKeyword, "@import"),
            (TokenKind::S, " "),
            (TokenKind::URI, "url(a.css)"),
            (TokenKind::Char, ";"),
        ])
    );
}

#[test]
fn test_unicode_range_in_font_face() {
    assert_eq!(
        scan("unicode-range:U+0-7F,u+4??"),
        expect(&[
            (TokenKind::Ident, "unicode-range"),
            (TokenKind::Char, ":"),
            (TokenKind::UnicodeRange, "U+0-7F"),
            (TokenKind::Char, ","),
            (TokenKind::UnicodeRange, "u+4??"),
        ])
    );
}

#[test]
fn test_bom_only_at_start() {
    assert_eq!(
        scan("\u{FEFF}a"),
        expect(&[(TokenKind::BOM, "\u{FEFF}"), (TokenKind::Ident, "a")])
    );
    assert_eq!(scan("a\u{FEFF}"), expect(&[(TokenKind::Ident, "a\u{FEFF}")]));
}

#[test]
fn test_whitespace_run_is_one_token() {
    assert_eq!(
        scan(" \t\r\n\x0C a"),
        expect(&[(TokenKind::S, " \t\r\n\x0C "), (TokenKind::Ident, "a")])
    );
}

#[test]
fn test_eof_is_repeated() {
    let mut scanner = Scanner::new("a");
    assert_eq!(scanner.next_token().kind, TokenKind::Ident);
    let eof = scanner.next_token();
    assert_eq!(eof, Token::new(TokenKind::EOF, "", 1, 2));
    assert_eq!(scanner.state(), ScannerState::Finished);
    for _ in 0..3 {
        assert_eq!(scanner.next_token(), eof);
    }
}

#[test]
fn test_empty_input_is_eof() {
    let mut scanner = Scanner::new("");
    assert_eq!(scanner.next_token(), Token::new(TokenKind::EOF, "", 1, 1));
    assert!(tokenize("").is_empty());
}

#[test]
fn test_iterator_stops_before_eof() {
    let mut scanner = Scanner::new("a b");
    let kinds: Vec<TokenKind> = scanner.by_ref().map(|token| token.kind).collect();
    assert_eq!(kinds, [TokenKind::Ident, TokenKind::S, TokenKind::Ident]);
    assert_eq!(scanner.next(), None);
}

#[test]
fn test_values_reconstruct_stylesheet() {
    let css = "@media screen {\n  a:hover { color: #f00 !important; }\n}\n<!-- x -->";
    let joined: String = tokenize(css).iter().map(|token| token.value.as_str()).collect();
    assert_eq!(joined, css);
}
