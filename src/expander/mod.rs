//! Expanding node trees into target-syntax text
//!
//! A post-order walk folds every list into generated text, dispatching
//! each head word to an externally supplied special-form table or to
//! default function-call rendering.

mod expand;
mod forms;

pub use expand::{Expander, MAX_EXPANSION_DEPTH};
pub use forms::{SpecialForm, SpecialFormRegistry};
