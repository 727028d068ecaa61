//! Error types for the lispc front-end

use thiserror::Error;

/// Errors produced by the preprocess/read/expand pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Parse errors
    /// A string literal ran past the end of input
    ///
    /// **Triggered by:** an opening `"` with no matching closer
    /// **Example:** `(print "hello)` (closing quote missing)
    #[error("Unterminated string literal starting at offset {offset}")]
    UnterminatedString {
        /// Offset of the opening quote
        offset: usize,
    },

    /// A list ran past the end of input
    ///
    /// **Triggered by:** an opening `(` with no matching `)`
    /// **Example:** `(if (> x 10)` (closing parenthesis missing)
    #[error("Unterminated list starting at offset {offset}")]
    UnterminatedList {
        /// Offset of the opening parenthesis
        offset: usize,
    },

    /// A vector literal ran past the end of input
    ///
    /// **Triggered by:** an opening `[` with no matching `]`
    #[error("Unterminated vector starting at offset {offset}")]
    UnterminatedVector {
        /// Offset of the opening bracket
        offset: usize,
    },

    /// An array type declaration could not be normalized
    ///
    /// **Triggered by:** a declaration tail with unbalanced dimension
    /// brackets running past the end of input
    /// **Example:** `[1 2]:int[` (dimension bracket never closed)
    #[error("Malformed array declaration at offset {offset}")]
    MalformedDeclaration {
        /// Offset of the declaration's `:` marker
        offset: usize,
    },

    /// Reader input did not start with a list
    ///
    /// **Triggered by:** normalized text whose first non-space character is
    /// not `(`
    #[error("Expected a list at offset {offset}")]
    ExpectedList {
        /// Offset of the offending character
        offset: usize,
    },

    /// Nesting exceeded the reader's recursion bound
    #[error("Nesting depth limit exceeded at offset {offset} (max {limit})")]
    DepthLimitExceeded {
        /// Offset where the construct that crossed the bound began
        offset: usize,
        /// The configured depth limit
        limit: usize,
    },

    // Expansion errors
    /// A special form rejected its node, or expansion recursed too deep
    #[error("Expansion of `{head}` failed: {message}")]
    ExpansionFailure {
        /// Head word of the list being expanded
        head: String,
        /// Failure description
        message: String,
    },
}

impl Error {
    /// Create an expansion failure for the given head word
    pub fn expansion(head: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ExpansionFailure {
            head: head.into(),
            message: message.into(),
        }
    }

    /// Offset where the failing construct began, if this is a parse error
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::UnterminatedString { offset }
            | Error::UnterminatedList { offset }
            | Error::UnterminatedVector { offset }
            | Error::MalformedDeclaration { offset }
            | Error::ExpectedList { offset }
            | Error::DepthLimitExceeded { offset, .. } => Some(*offset),
            Error::ExpansionFailure { .. } => None,
        }
    }
}

/// Result type for lispc operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_carry_offsets() {
        assert_eq!(Error::UnterminatedString { offset: 4 }.offset(), Some(4));
        assert_eq!(Error::UnterminatedList { offset: 0 }.offset(), Some(0));
        assert_eq!(
            Error::DepthLimitExceeded {
                offset: 9,
                limit: 128
            }
            .offset(),
            Some(9)
        );
        assert_eq!(Error::expansion("foo", "bad arity").offset(), None);
    }

    #[test]
    fn test_display_names_the_construct() {
        let err = Error::UnterminatedVector { offset: 12 };
        assert!(err.to_string().contains("vector"));
        assert!(err.to_string().contains("12"));
    }
}
