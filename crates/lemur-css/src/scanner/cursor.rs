//! Input cursor with line and column bookkeeping.

/// A location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number, starting at 1
    pub line: usize,
    /// Column in characters since the last line start, starting at 1
    pub column: usize,
    /// Byte offset into the input
    pub offset: usize,
}

impl Position {
    /// The position of the first character of an input.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

/// Scanning state over one input string.
///
/// The offset only moves forward. Only U+000A LINE FEED starts a new line, so
/// `\r\n` counts as a single line break.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    position: Position,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            position: Position::new(),
        }
    }

    /// The unconsumed part of the input.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.position.offset..]
    }

    /// Returns true once the whole input has been consumed.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.position.offset >= self.input.len()
    }

    /// Consume `n` bytes and return them, updating line and column.
    ///
    /// # Panics
    ///
    /// Panics if `n` runs past the end of the input or does not end on a
    /// character boundary.
    pub fn advance(&mut self, n: usize) -> &'a str {
        let consumed = &self.remaining()[..n];
        for c in consumed.chars() {
            if c == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
        self.position.offset += n;
        consumed
    }

    /// Current byte offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.position.offset
    }

    /// Current line, starting at 1.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.position.line
    }

    /// Current column, starting at 1.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.position.column
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }
}
