//! Index-and-bounds cursor shared by the preprocessor and the reader
//!
//! Every scan in the pipeline walks the source through this cursor, so
//! end-of-input is always an observable condition rather than an
//! out-of-bounds read.

use crate::error::{Error, Result};

/// Bounds-checked scanning cursor over source text
pub struct Cursor {
    /// Source text as character vector
    source: Vec<char>,
    /// Current position in source
    current: usize,
}

impl Cursor {
    /// Creates a new cursor at the start of the given text
    pub fn new(text: &str) -> Self {
        Cursor {
            source: text.chars().collect(),
            current: 0,
        }
    }

    /// True once every character has been consumed
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Current position, used as the offset carried by parse errors
    pub fn offset(&self) -> usize {
        self.current
    }

    /// Character at the given absolute position, if in bounds
    pub fn at(&self, index: usize) -> Option<char> {
        self.source.get(index).copied()
    }

    /// Next character without consuming it
    pub fn peek(&self) -> Option<char> {
        self.at(self.current)
    }

    /// Character after the next one without consuming anything
    pub fn peek_next(&self) -> Option<char> {
        self.at(self.current + 1)
    }

    /// Consumes and returns the next character
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += 1;
        Some(c)
    }

    /// Consumes the next character only if it equals `expected`
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Skips ahead while the next character is a space
    pub fn skip_spaces(&mut self) {
        while self.peek() == Some(' ') {
            self.current += 1;
        }
    }

    /// Copies a string literal verbatim, delimiters included.
    ///
    /// The cursor must sit on the opening quote. A backslash always escapes
    /// exactly the next character, so an escaped quote never terminates the
    /// literal and doubled backslashes cancel out. Reaching end of input
    /// before the closing quote is an error carrying the offset of the
    /// opening quote.
    pub fn scan_string_literal(&mut self) -> Result<String> {
        let start = self.current;
        let mut literal = String::new();

        // opening quote
        match self.advance() {
            Some('"') => literal.push('"'),
            _ => return Err(Error::UnterminatedString { offset: start }),
        }

        loop {
            match self.advance() {
                Some('"') => {
                    literal.push('"');
                    return Ok(literal);
                }
                Some('\\') => {
                    literal.push('\\');
                    match self.advance() {
                        Some(escaped) => literal.push(escaped),
                        None => return Err(Error::UnterminatedString { offset: start }),
                    }
                }
                Some(c) => literal.push(c),
                None => return Err(Error::UnterminatedString { offset: start }),
            }
        }
    }
}
