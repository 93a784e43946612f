//! CSS scanner module.

/// The scanner driving the productions.
pub mod engine;
/// Escape decoding for token values.
pub mod escape;
/// Input cursor and position tracking.
pub mod cursor;
/// Grammar productions in priority order.
pub mod rules;
/// Token types per [CSS 2.1 § 4.1.1](https://www.w3.org/TR/CSS21/syndata.html#tokenization).
pub mod token;

pub use cursor::{Cursor, Position};
pub use engine::{Scanner, ScannerState, tokenize, tokenize_strict};
pub use escape::unescape;
pub use token::{Token, TokenKind};
