//! Common utilities for the lemur CSS scanner.
//!
//! This crate provides shared infrastructure used by the scanner and its front ends:
//! - **Warning System** - colored diagnostics, de-duplicated per input

pub mod warning;
