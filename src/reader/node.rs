use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in the read tree
///
/// Every value the reader produces is one of these three shapes. Nodes form
/// a strict tree: each node is owned by exactly one parent sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Atomic token: identifier, literal, or operator text
    Word(String),
    /// Parenthesized operator form
    List(List),
    /// Bracketed array literal
    Vect(Vect),
}

/// A parenthesized form: a head operator plus ordered arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// The operator word, first in the written form
    pub head: String,
    /// Arguments in insertion order
    pub args: Vec<Node>,
}

/// A bracketed array literal, optionally carrying a type descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vect {
    /// Elements in insertion order
    pub elems: Vec<Node>,
    /// Normalized type descriptor, present only when the literal was
    /// followed by a `:declaration` tail
    pub decl: Option<String>,
}

impl Node {
    /// True for word nodes
    pub fn is_word(&self) -> bool {
        matches!(self, Node::Word(_))
    }

    /// True for list nodes
    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// True for vector nodes
    pub fn is_vect(&self) -> bool {
        matches!(self, Node::Vect(_))
    }

    /// Word text, if this node is a word
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Node::Word(text) => Some(text),
            _ => None,
        }
    }

    /// Inner list, if this node is a list
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    /// Inner vector, if this node is a vector
    pub fn as_vect(&self) -> Option<&Vect> {
        match self {
            Node::Vect(vect) => Some(vect),
            _ => None,
        }
    }
}

impl List {
    /// Creates a list with the given head and no arguments
    pub fn new(head: impl Into<String>) -> Self {
        List {
            head: head.into(),
            args: Vec::new(),
        }
    }

    /// Creates a list with the given head and arguments
    pub fn with_args(head: impl Into<String>, args: Vec<Node>) -> Self {
        List {
            head: head.into(),
            args,
        }
    }
}

impl Vect {
    /// Creates an empty vector with no type descriptor
    pub fn new() -> Self {
        Vect {
            elems: Vec::new(),
            decl: None,
        }
    }
}

impl Default for Vect {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Word(text) => write!(f, "{}", text),
            Node::List(list) => write!(f, "{}", list),
            Node::Vect(vect) => write!(f, "{}", vect),
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}", self.head)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Vect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.elems.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", elem)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        let word = Node::Word("x".to_string());
        assert!(word.is_word());
        assert_eq!(word.as_word(), Some("x"));
        assert!(!word.is_list());

        let list = Node::List(List::new("foo"));
        assert!(list.is_list());
        assert_eq!(list.as_list().unwrap().head, "foo");
    }

    #[test]
    fn test_display_round_trips_surface_shape() {
        let list = List::with_args(
            "a",
            vec![
                Node::Word("b".to_string()),
                Node::Vect(Vect {
                    elems: vec![Node::Word("1".to_string()), Node::Word("2".to_string())],
                    decl: None,
                }),
            ],
        );
        assert_eq!(list.to_string(), "(a b [1 2])");
    }
}
