//! Reading normalized text into node trees
//!
//! A recursive-descent reader builds Word/List/Vect trees, invoking the
//! declaration normalizer whenever a vector literal carries a trailing
//! type annotation.

mod declaration;
mod node;
mod sexpr_reader;

pub use node::{List, Node, Vect};
pub use sexpr_reader::{Reader, MAX_DEPTH};
