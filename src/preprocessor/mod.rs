//! Source normalization
//!
//! Strips comments, expands the quote shorthand, folds newlines, and wraps
//! the result in a single root call so the reader always sees one
//! top-level list.

mod normalize;

pub use normalize::{Preprocessor, ROOT_HEAD};
