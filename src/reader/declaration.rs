use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// Normalizes a vector's trailing type declaration into one descriptor
/// string.
///
/// The cursor sits just past the `:`; `open_offset` is the vector's opening
/// bracket and `colon_offset` the `:` itself. The forward scan collects the
/// declaration tail, rewriting `-` to a space so multi-word type names can
/// be written `unsigned-int`. Each `[` in the tail adds an extra array
/// dimension; a `]` is consumed as tail content only while those brackets
/// are still open, so a balance-zero `]` (the closer of an enclosing
/// vector) terminates the scan unconsumed. The backward scan then recovers
/// the identifier declared before the opening bracket, if any, and the
/// descriptor assembles as
/// `tail_type_text + " " + qualifier_prefix + "[]" * extra_dimensions`.
pub(crate) fn normalize_declaration(
    cursor: &mut Cursor,
    open_offset: usize,
    colon_offset: usize,
) -> Result<String> {
    let mut descriptor = String::new();
    let mut extra_dims = 0usize;
    let mut balance = 0usize;

    loop {
        match cursor.peek() {
            Some(c) if c.is_alphanumeric() || matches!(c, '_' | '?' | '!' | '*') => {
                cursor.advance();
                descriptor.push(c);
            }
            Some('-') => {
                cursor.advance();
                descriptor.push(' ');
            }
            Some('[') => {
                cursor.advance();
                extra_dims += 1;
                balance += 1;
            }
            Some(']') if balance > 0 => {
                cursor.advance();
                balance -= 1;
            }
            Some(_) => break,
            None => {
                if balance > 0 {
                    return Err(Error::MalformedDeclaration {
                        offset: colon_offset,
                    });
                }
                break;
            }
        }
    }

    descriptor.push(' ');

    // Walk back over the declared identifier, then forward to the `:`
    // collecting the qualifier prefix. Hyphens are not rewritten here.
    let mut start = open_offset;
    while start > 0 {
        match cursor.at(start - 1) {
            Some(c) if c.is_alphanumeric() || c == '*' => start -= 1,
            _ => break,
        }
    }
    if start < open_offset {
        for index in start..colon_offset {
            match cursor.at(index) {
                Some(c) => descriptor.push(c),
                None => {
                    return Err(Error::MalformedDeclaration {
                        offset: colon_offset,
                    })
                }
            }
        }
    }

    for _ in 0..extra_dims {
        descriptor.push_str("[]");
    }

    Ok(descriptor)
}
