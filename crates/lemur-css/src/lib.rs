//! CSS 2.1 scanner for the lemur toolchain.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Scanner** ([CSS 2.1 § 4.1.1 Tokenization](https://www.w3.org/TR/CSS21/syndata.html#tokenization))
//!   - Every core-syntax token: ident, function, at-keyword, hash, string, URI,
//!     unicode-range, number, percentage, dimension, CDO/CDC, whitespace,
//!     comments, attribute match operators, and single-character delimiters
//!   - Maximal munch over a fixed, ordered table of productions
//!   - Lossless values: every token keeps its exact source text
//!   - Line and column of every token
//!   - Recovery from malformed input (`BAD_STRING`, `BAD_URI`, `error`)
//!
//! - **Escapes** ([§ 4.1.3 Characters and case](https://www.w3.org/TR/CSS21/syndata.html#characters))
//!   - Decoding of hex and character escapes in token values
//!
//! # Not Yet Implemented
//!
//! - Character encodings other than UTF-8 (`@charset` is an ordinary at-keyword)
//! - CSS Syntax Level 3 tokens (`--custom` identifiers, signed numbers, exponents)
//!
//! # Example
//!
//! ```
//! use lemur_css::{TokenKind, tokenize};
//!
//! let kinds: Vec<TokenKind> = tokenize("a{color:red}").iter().map(|t| t.kind).collect();
//! assert_eq!(kinds[0], TokenKind::Ident);
//! ```

/// Fail-fast errors for malformed input.
pub mod error;
/// CSS scanner per [CSS 2.1 § 4.1.1 Tokenization](https://www.w3.org/TR/CSS21/syndata.html#tokenization).
pub mod scanner;

// Re-exports for convenience
pub use error::ScanError;
pub use scanner::{
    Position, Scanner, ScannerState, Token, TokenKind, tokenize, tokenize_strict, unescape,
};
