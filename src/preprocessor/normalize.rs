use crate::cursor::Cursor;
use crate::error::Result;

/// Head word of the synthetic root call wrapping all normalized output
pub const ROOT_HEAD: &str = "^root";

/// Normalizes raw source text into a single wrapped form
///
/// The scan applies one rule per character, left to right: string literals
/// are copied verbatim, `#` is isolated into its own token, `;` comments
/// are stripped, `'(` becomes a `(quote ` call, and newlines fold to
/// spaces. Everything else passes through unchanged.
pub struct Preprocessor {
    cursor: Cursor,
    normalized: String,
}

impl Preprocessor {
    /// Creates a new preprocessor over the given raw source
    pub fn new(source: &str) -> Self {
        Preprocessor {
            cursor: Cursor::new(source),
            normalized: String::with_capacity(source.len() + 16),
        }
    }

    /// Runs the scan and returns the normalized text, wrapped as
    /// `(^root ...)`
    pub fn preprocess(mut self) -> Result<String> {
        self.normalized.push('(');
        self.normalized.push_str(ROOT_HEAD);
        self.normalized.push(' ');

        while let Some(c) = self.cursor.peek() {
            match c {
                '"' => {
                    let literal = self.cursor.scan_string_literal()?;
                    self.normalized.push_str(&literal);
                }

                // The marker becomes its own token; its meaning is left to
                // whichever special form consumes it.
                '#' => {
                    self.cursor.advance();
                    self.normalized.push_str("# ");
                }

                ';' => self.skip_line_comment(),

                '\'' => self.expand_quote_shorthand(),

                '\n' => {
                    self.cursor.advance();
                    self.normalized.push(' ');
                }

                _ => {
                    self.cursor.advance();
                    self.normalized.push(c);
                }
            }
        }

        self.normalized.push(')');
        tracing::debug!(len = self.normalized.len(), "source normalized");
        Ok(self.normalized)
    }

    /// Discards a `;` comment together with its terminating newline. A
    /// comment cut off by end of input is simply truncated.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.cursor.advance() {
            if c == '\n' {
                break;
            }
        }
    }

    /// Rewrites `'(` into `(quote ` unless another quote follows the
    /// opening parenthesis; any other `'` passes through unchanged.
    fn expand_quote_shorthand(&mut self) {
        self.cursor.advance();
        if self.cursor.peek() == Some('(') && self.cursor.peek_next() != Some('\'') {
            self.cursor.advance();
            self.normalized.push_str("(quote ");
        } else {
            self.normalized.push('\'');
        }
    }
}
