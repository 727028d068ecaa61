use super::declaration::normalize_declaration;
use super::node::{List, Node, Vect};
use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// Maximum nesting depth of lists and vectors
pub const MAX_DEPTH: usize = 128;

/// Recursive-descent reader building the node tree from normalized text
///
/// Two mutually recursive productions do all the work: `read_list`,
/// entered on `(`, and `read_vect`, entered on `[`. Both accumulate
/// pending word text between boundary characters and drop blank words, so
/// inter-token whitespace is free-form. A `:` marks the current scope as
/// inside an array-type declaration, where brackets are declaration syntax
/// rather than nested vectors.
pub struct Reader {
    cursor: Cursor,
    depth: usize,
}

impl Reader {
    /// Creates a new reader over normalized text
    pub fn new(text: &str) -> Self {
        Reader {
            cursor: Cursor::new(text),
            depth: 0,
        }
    }

    /// Reads the single top-level list
    ///
    /// For preprocessor output this is the `^root` wrapper call. Input
    /// whose first non-space character is not `(` is rejected.
    pub fn read(mut self) -> Result<List> {
        self.cursor.skip_spaces();
        let offset = self.cursor.offset();
        if !self.cursor.match_char('(') {
            return Err(Error::ExpectedList { offset });
        }
        tracing::debug!(offset, "reading top-level list");
        self.read_list(offset)
    }

    /// Reads a list body; the opening `(` at `open_offset` is already
    /// consumed.
    fn read_list(&mut self, open_offset: usize) -> Result<List> {
        self.enter(open_offset)?;

        let mut head: Option<String> = None;
        let mut args: Vec<Node> = Vec::new();
        let mut word = String::new();
        let mut in_decl = false;
        let mut decl_balance = 0usize;

        loop {
            let c = match self.cursor.peek() {
                Some(c) => c,
                None => return Err(Error::UnterminatedList { offset: open_offset }),
            };

            match c {
                '"' => {
                    let literal = self.cursor.scan_string_literal()?;
                    word.push_str(&literal);
                }

                ':' => {
                    self.cursor.advance();
                    in_decl = true;
                    word.push(':');
                }

                '(' => {
                    flush_word(&mut word, &mut head, &mut args);
                    let nested_offset = self.cursor.offset();
                    self.cursor.advance();
                    let nested = self.read_list(nested_offset)?;
                    args.push(Node::List(nested));
                }

                '[' if !in_decl => {
                    flush_word(&mut word, &mut head, &mut args);
                    let nested_offset = self.cursor.offset();
                    self.cursor.advance();
                    let nested = self.read_vect(nested_offset)?;
                    args.push(Node::Vect(nested));
                }

                // Declaration syntax: brackets stay part of the word.
                '[' => {
                    self.cursor.advance();
                    decl_balance += 1;
                    word.push('[');
                }
                ']' if decl_balance > 0 => {
                    self.cursor.advance();
                    decl_balance -= 1;
                    word.push(']');
                    if decl_balance == 0 {
                        in_decl = false;
                    }
                }

                // Stray closer in list scope: ends any declaration context
                // and is discarded.
                ']' => {
                    self.cursor.advance();
                    flush_word(&mut word, &mut head, &mut args);
                    in_decl = false;
                }

                ' ' | ',' => {
                    self.cursor.advance();
                    flush_word(&mut word, &mut head, &mut args);
                }

                ')' => {
                    self.cursor.advance();
                    flush_word(&mut word, &mut head, &mut args);
                    self.leave();
                    return Ok(List {
                        head: head.unwrap_or_default(),
                        args,
                    });
                }

                _ => {
                    self.cursor.advance();
                    word.push(c);
                }
            }
        }
    }

    /// Reads a vector body; the opening `[` at `open_offset` is already
    /// consumed. A trailing `:declaration` is normalized and attached
    /// before returning.
    fn read_vect(&mut self, open_offset: usize) -> Result<Vect> {
        self.enter(open_offset)?;

        let mut vect = Vect::new();
        let mut word = String::new();
        let mut in_decl = false;
        let mut decl_balance = 0usize;

        loop {
            let c = match self.cursor.peek() {
                Some(c) => c,
                None => {
                    return Err(Error::UnterminatedVector {
                        offset: open_offset,
                    })
                }
            };

            match c {
                '"' => {
                    let literal = self.cursor.scan_string_literal()?;
                    word.push_str(&literal);
                }

                ':' => {
                    self.cursor.advance();
                    in_decl = true;
                    word.push(':');
                }

                '(' => {
                    flush_elem(&mut word, &mut vect.elems);
                    let nested_offset = self.cursor.offset();
                    self.cursor.advance();
                    let nested = self.read_list(nested_offset)?;
                    vect.elems.push(Node::List(nested));
                }

                '[' if !in_decl => {
                    flush_elem(&mut word, &mut vect.elems);
                    let nested_offset = self.cursor.offset();
                    self.cursor.advance();
                    let nested = self.read_vect(nested_offset)?;
                    vect.elems.push(Node::Vect(nested));
                }

                '[' => {
                    self.cursor.advance();
                    decl_balance += 1;
                    word.push('[');
                }
                ']' if decl_balance > 0 => {
                    self.cursor.advance();
                    decl_balance -= 1;
                    word.push(']');
                    if decl_balance == 0 {
                        in_decl = false;
                    }
                }

                ']' => {
                    self.cursor.advance();
                    flush_elem(&mut word, &mut vect.elems);
                    break;
                }

                ' ' | ',' => {
                    self.cursor.advance();
                    flush_elem(&mut word, &mut vect.elems);
                }

                _ => {
                    self.cursor.advance();
                    word.push(c);
                }
            }
        }

        // The descriptor is computed exactly once, immediately after the
        // closing bracket.
        if self.cursor.peek() == Some(':') {
            let colon_offset = self.cursor.offset();
            self.cursor.advance();
            let decl = normalize_declaration(&mut self.cursor, open_offset, colon_offset)?;
            vect.decl = Some(decl);
        }

        self.leave();
        Ok(vect)
    }

    fn enter(&mut self, offset: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Error::DepthLimitExceeded {
                offset,
                limit: MAX_DEPTH,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Emits the pending word into a list, as head if none is set yet. Blank
/// words are dropped, never promoted.
fn flush_word(word: &mut String, head: &mut Option<String>, args: &mut Vec<Node>) {
    if word.chars().all(|c| c == ' ') {
        word.clear();
        return;
    }
    let text = std::mem::take(word);
    if head.is_none() {
        *head = Some(text);
    } else {
        args.push(Node::Word(text));
    }
}

/// Emits the pending word into a vector's elements, dropping blanks
fn flush_elem(word: &mut String, elems: &mut Vec<Node>) {
    if word.chars().all(|c| c == ' ') {
        word.clear();
        return;
    }
    elems.push(Node::Word(std::mem::take(word)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<List> {
        Reader::new(text).read()
    }

    #[test]
    fn test_head_and_args_structural() {
        let list = read("(a (b c) [d e])").unwrap();
        assert_eq!(list.head, "a");
        assert_eq!(list.args.len(), 2);

        let nested = list.args[0].as_list().unwrap();
        assert_eq!(nested.head, "b");
        assert_eq!(nested.args, vec![Node::Word("c".to_string())]);

        let vect = list.args[1].as_vect().unwrap();
        assert_eq!(
            vect.elems,
            vec![Node::Word("d".to_string()), Node::Word("e".to_string())]
        );
        assert_eq!(vect.decl, None);
    }

    #[test]
    fn test_blank_words_dropped() {
        let list = read("(  a   b  ,  c )").unwrap();
        assert_eq!(list.head, "a");
        assert_eq!(
            list.args,
            vec![Node::Word("b".to_string()), Node::Word("c".to_string())]
        );
    }

    #[test]
    fn test_commas_are_boundaries() {
        let list = read("(f x,y,z)").unwrap();
        assert_eq!(list.args.len(), 3);
    }

    #[test]
    fn test_string_literal_in_list() {
        let list = read(r#"(print "a b c")"#).unwrap();
        assert_eq!(list.args, vec![Node::Word(r#""a b c""#.to_string())]);
    }

    #[test]
    fn test_string_literal_in_vect() {
        let list = read(r#"(f ["x y" z])"#).unwrap();
        let vect = list.args[0].as_vect().unwrap();
        assert_eq!(
            vect.elems,
            vec![
                Node::Word(r#""x y""#.to_string()),
                Node::Word("z".to_string())
            ]
        );
    }

    #[test]
    fn test_escaped_quote_in_literal() {
        let list = read(r#"(print "a\"b")"#).unwrap();
        assert_eq!(list.args, vec![Node::Word(r#""a\"b""#.to_string())]);
    }

    #[test]
    fn test_vect_type_declaration_attached() {
        let list = read("(f [1 2 3]:my-type)").unwrap();
        let vect = list.args[0].as_vect().unwrap();
        assert_eq!(vect.elems.len(), 3);
        assert_eq!(vect.decl.as_deref(), Some("my type "));
    }

    #[test]
    fn test_nested_vects() {
        let list = read("(f [[1 2] [3]])").unwrap();
        let outer = list.args[0].as_vect().unwrap();
        assert_eq!(outer.elems.len(), 2);
        assert!(outer.elems[0].is_vect());
        assert!(outer.elems[1].is_vect());
    }

    #[test]
    fn test_nested_vect_with_declaration_inside_vect() {
        let list = read("(f [[1 2]:int 3])").unwrap();
        let outer = list.args[0].as_vect().unwrap();
        assert_eq!(outer.elems.len(), 2);
        let inner = outer.elems[0].as_vect().unwrap();
        assert_eq!(inner.decl.as_deref(), Some("int "));
        assert_eq!(outer.elems[1], Node::Word("3".to_string()));
    }

    #[test]
    fn test_declaration_brackets_stay_in_word() {
        let list = read("(declare x:int[5] y)").unwrap();
        assert_eq!(list.head, "declare");
        assert_eq!(
            list.args,
            vec![
                Node::Word("x:int[5]".to_string()),
                Node::Word("y".to_string())
            ]
        );
    }

    #[test]
    fn test_list_inside_vect() {
        let list = read("(f [(g 1) 2])").unwrap();
        let vect = list.args[0].as_vect().unwrap();
        assert_eq!(vect.elems[0].as_list().unwrap().head, "g");
    }

    #[test]
    fn test_root_wrapper_reads_as_list() {
        let list = read("(^root (a b) (c))").unwrap();
        assert_eq!(list.head, "^root");
        assert_eq!(list.args.len(), 2);
    }

    #[test]
    fn test_unterminated_list_offset() {
        let err = read("(a (b").unwrap_err();
        assert_eq!(err, Error::UnterminatedList { offset: 3 });
    }

    #[test]
    fn test_unterminated_vect_offset() {
        let err = read("(a [1 2").unwrap_err();
        assert_eq!(err, Error::UnterminatedVector { offset: 3 });
    }

    #[test]
    fn test_unterminated_string_offset() {
        let err = read(r#"(a "b"#).unwrap_err();
        assert_eq!(err, Error::UnterminatedString { offset: 3 });
    }

    #[test]
    fn test_non_list_input_rejected() {
        let err = read("  word").unwrap_err();
        assert_eq!(err, Error::ExpectedList { offset: 2 });
    }

    #[test]
    fn test_depth_limit() {
        let mut text = String::new();
        for _ in 0..(MAX_DEPTH + 8) {
            text.push_str("(a ");
        }
        let err = read(&text).unwrap_err();
        assert!(matches!(err, Error::DepthLimitExceeded { .. }));
    }

    #[test]
    fn test_deep_but_legal_nesting() {
        let mut text = String::new();
        for _ in 0..(MAX_DEPTH - 1) {
            text.push_str("(a ");
        }
        text.push_str("(b)");
        for _ in 0..(MAX_DEPTH - 1) {
            text.push(')');
        }
        assert!(read(&text).is_ok());
    }
}
