//! The scanner: one token per call, by maximal munch over the ordered
//! productions in [`rules`](super::rules).

use std::iter::FusedIterator;

use lemur_common::warning::WarningLog;
use strum_macros::Display;

use super::cursor::{Cursor, Position};
use super::rules::{Lexeme, match_production};
use super::token::{Token, TokenKind};
use crate::error::ScanError;

/// U+FEFF BYTE ORDER MARK, only recognized at offset 0.
const BOM: char = '\u{FEFF}';

/// Where the scanner is in its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScannerState {
    /// Matching productions; the initial state.
    Scanning,
    /// The last token was an `Error`; the next call carries on scanning.
    Recovered,
    /// The input is exhausted. Every further call returns EOF.
    Finished,
}

/// CSS 2.1 scanner over a single input.
///
/// A scanner is driven by one caller in order and is discarded after EOF.
/// Independent inputs can be scanned in parallel with one scanner each; a
/// scanner owns all of its state, diagnostics included.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// Position in the input
    cursor: Cursor<'a>,
    /// Current state
    state: ScannerState,
    /// Malformed-input warnings already printed for this input
    warnings: WarningLog,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            state: ScannerState::Scanning,
            warnings: WarningLog::new("CSS"),
        }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> ScannerState {
        self.state
    }

    /// The position the next token will start at.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Return the next token.
    ///
    /// Always makes progress: input no production accepts comes back as a
    /// one-character `Error` token and scanning resumes after it. Once the
    /// input is exhausted every call returns the same EOF token.
    pub fn next_token(&mut self) -> Token {
        let (line, column) = (self.cursor.line(), self.cursor.column());

        if self.cursor.at_end() {
            self.state = ScannerState::Finished;
            return Token::new(TokenKind::EOF, "", line, column);
        }

        let (production, lexeme) = self.match_lexeme();
        let value = self.cursor.advance(lexeme.len);
        let token = Token::new(lexeme.kind, value, line, column);
        trace(production, &token);

        self.state = if token.kind == TokenKind::Error {
            ScannerState::Recovered
        } else {
            ScannerState::Scanning
        };
        if token.is_malformed() {
            self.report_malformed(&token);
        }

        token
    }

    /// Pick the lexeme at the cursor and the name of the production it came from.
    fn match_lexeme(&self) -> (&'static str, Lexeme) {
        let remaining = self.cursor.remaining();

        // A BOM anywhere else is an ordinary identifier character.
        if self.cursor.offset() == 0 && remaining.starts_with(BOM) {
            return (
                "bom",
                Lexeme {
                    kind: TokenKind::BOM,
                    len: BOM.len_utf8(),
                },
            );
        }

        match match_production(remaining) {
            Some((production, lexeme)) => (production.name, lexeme),
            None => (
                "error",
                Lexeme {
                    kind: TokenKind::Error,
                    len: remaining.chars().next().map_or(remaining.len(), char::len_utf8),
                },
            ),
        }
    }

    /// Report a malformed token once per kind of problem in this input.
    fn report_malformed(&mut self, token: &Token) {
        let message = match token.kind {
            TokenKind::BadString => "unterminated string".to_string(),
            TokenKind::BadURI => "malformed url(...)".to_string(),
            _ => format!(
                "unexpected character U+{:04X}",
                token.value.chars().next().map_or(0, u32::from)
            ),
        };
        self.warnings.warn_once(&message);
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yield tokens up to, but not including, EOF.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scan `input` completely and return every token before EOF.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Scanner::new(input).collect()
}

/// Scan `input`, stopping at the first malformed token.
///
/// # Errors
///
/// Returns the [`ScanError`] for the first `BadString`, `BadURI`, or `Error`
/// token in the input.
pub fn tokenize_strict(input: &str) -> Result<Vec<Token>, ScanError> {
    Scanner::new(input)
        .map(|token| ScanError::from_token(&token).map_or(Ok(token), Err))
        .collect()
}

#[cfg(feature = "scan-trace")]
fn trace(production: &str, token: &Token) {
    eprintln!(
        "[SCAN] {production} -> {} at {}:{} ({} bytes)",
        token.kind,
        token.line,
        token.column,
        token.value.len()
    );
}

#[cfg(not(feature = "scan-trace"))]
const fn trace(_production: &str, _token: &Token) {}
