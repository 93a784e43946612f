//! Fail-fast errors for callers that treat malformed tokens as fatal.

use thiserror::Error;

use crate::scanner::{Token, TokenKind};

/// The first malformed token of an input, as reported by
/// [`tokenize_strict`](crate::scanner::tokenize_strict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A quoted string cut off by a newline or the end of input.
    #[error("unterminated string {value:?} at line {line}, column {column}")]
    UnterminatedString {
        /// The text consumed before the string was cut off
        value: String,
        /// Line of the opening quote
        line: usize,
        /// Column of the opening quote
        column: usize,
    },

    /// A `url(` without a valid body and closing parenthesis.
    #[error("malformed url {value:?} at line {line}, column {column}")]
    MalformedUri {
        /// The text consumed before the URI failed
        value: String,
        /// Line of `url(`
        line: usize,
        /// Column of `url(`
        column: usize,
    },

    /// A character no production accepts.
    #[error("unexpected character {value:?} at line {line}, column {column}")]
    UnexpectedCharacter {
        /// The offending character
        value: String,
        /// Line of the character
        line: usize,
        /// Column of the character
        column: usize,
    },
}

impl ScanError {
    /// Build the error a malformed token reports, or `None` for a well-formed one.
    #[must_use]
    pub fn from_token(token: &Token) -> Option<Self> {
        let Token {
            kind,
            value,
            line,
            column,
        } = token.clone();
        match kind {
            TokenKind::BadString => Some(Self::UnterminatedString {
                value,
                line,
                column,
            }),
            TokenKind::BadURI => Some(Self::MalformedUri {
                value,
                line,
                column,
            }),
            TokenKind::Error => Some(Self::UnexpectedCharacter {
                value,
                line,
                column,
            }),
            _ => None,
        }
    }

    /// Line of the offending token.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line, .. }
            | Self::MalformedUri { line, .. }
            | Self::UnexpectedCharacter { line, .. } => *line,
        }
    }

    /// Column of the offending token.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnterminatedString { column, .. }
            | Self::MalformedUri { column, .. }
            | Self::UnexpectedCharacter { column, .. } => *column,
        }
    }
}
