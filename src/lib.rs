//! # lispc - a LISP to C transpiler front-end
//!
//! Turns a small S-expression surface syntax into textual output in a
//! C-like target syntax. The pipeline has three stages sharing one
//! recursive-descent discipline and one node data model:
//!
//! ```text
//! Source Code → Preprocessor → Reader → Expander → C-style text
//! ```
//!
//! - [`Preprocessor`] - strips comments, expands the `'(...)` quote
//!   shorthand, folds newlines, and wraps everything in a single root call
//! - [`Reader`] - builds a tree of [`List`] and [`Vect`] nodes, attaching
//!   normalized array-type descriptors to annotated vector literals
//! - [`Expander`] - folds the tree bottom-up into generated text,
//!   dispatching each head word to a [`SpecialFormRegistry`] or to default
//!   `head(arg1,arg2,...)` call rendering
//!
//! The catalog of special forms is supplied by the surrounding system; the
//! registry here starts empty, and anything not registered renders as a
//! plain function call.
//!
//! ## Quick Start
//!
//! ```rust
//! use lispc::{translate, SpecialFormRegistry};
//!
//! # fn main() -> lispc::Result<()> {
//! let mut forms = SpecialFormRegistry::new();
//! forms.register_fn("^root", |list: &lispc::List| {
//!     let mut out = String::new();
//!     for arg in &list.args {
//!         if let Some(text) = arg.as_word() {
//!             out.push_str(text);
//!             out.push(';');
//!         }
//!     }
//!     Ok(out)
//! });
//!
//! let code = translate("(printf \"%d\" (add 1 2))", &forms)?;
//! assert_eq!(code, "printf(\"%d\",add(1,2));");
//! # Ok(())
//! # }
//! ```
//!
//! ## Stage by stage
//!
//! ```rust
//! use lispc::{preprocess, read};
//!
//! # fn main() -> lispc::Result<()> {
//! let normalized = preprocess("(a (b c) [d e]) ; trailing comment")?;
//! let root = read(&normalized)?;
//! assert_eq!(root.head, "^root");
//! assert_eq!(root.args.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Surface syntax
//!
//! - Parenthesized lists `(head arg1 arg2 ...)`
//! - Bracketed vectors `[e1 e2 ...]`, optionally annotated
//!   `[e1 e2]:type-tail` with an array type declaration
//! - Double-quoted strings with backslash escaping
//! - `;` line comments
//! - `'(...)` as shorthand for `(quote (...))`
//!
//! ## Error Handling
//!
//! Every scan is bounds-checked; reaching end of input inside a construct
//! is a structured [`Error`] carrying the offset where the construct
//! began. Expansion failures abort the whole translation unit - there is
//! no partial output.

/// Version of the lispc front-end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cursor;
pub mod error;
pub mod expander;
pub mod preprocessor;
pub mod reader;

// Re-export main types
pub use error::{Error, Result};
pub use expander::{Expander, SpecialForm, SpecialFormRegistry, MAX_EXPANSION_DEPTH};
pub use preprocessor::{Preprocessor, ROOT_HEAD};
pub use reader::{List, Node, Reader, Vect, MAX_DEPTH};

/// Normalizes raw source text into a single wrapped form
pub fn preprocess(source: &str) -> Result<String> {
    Preprocessor::new(source).preprocess()
}

/// Reads normalized text into its root list
pub fn read(normalized: &str) -> Result<List> {
    Reader::new(normalized).read()
}

/// Expands a fully read list into generated text
pub fn expand(list: &List, forms: &SpecialFormRegistry) -> Result<String> {
    Expander::new(forms).expand(list)
}

/// Runs the whole preprocess → read → expand pipeline
pub fn translate(source: &str, forms: &SpecialFormRegistry) -> Result<String> {
    let normalized = preprocess(source)?;
    let root = read(&normalized)?;
    expand(&root, forms)
}
