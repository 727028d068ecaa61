use super::forms::SpecialFormRegistry;
use crate::error::{Error, Result};
use crate::reader::{List, Node};

/// Maximum expansion recursion depth
///
/// Trees built by the reader are already bounded, but hand-built trees are
/// not, so the walk carries its own guard.
pub const MAX_EXPANSION_DEPTH: usize = 128;

/// Post-order expansion of a node tree into target-syntax text
///
/// Every child list is expanded first and its text takes the child's place
/// as an opaque word in a fresh argument sequence; the input tree is never
/// mutated. The head word then either dispatches to a registered special
/// form or falls back to default function-call rendering.
pub struct Expander<'a> {
    forms: &'a SpecialFormRegistry,
}

impl<'a> Expander<'a> {
    /// Creates an expander dispatching against the given registry
    pub fn new(forms: &'a SpecialFormRegistry) -> Self {
        Expander { forms }
    }

    /// Expands a fully read list into generated text
    pub fn expand(&self, list: &List) -> Result<String> {
        self.expand_at(list, 0)
    }

    fn expand_at(&self, list: &List, depth: usize) -> Result<String> {
        if depth >= MAX_EXPANSION_DEPTH {
            return Err(Error::expansion(
                &list.head,
                format!("expansion depth limit exceeded (max {})", MAX_EXPANSION_DEPTH),
            ));
        }

        let mut folded = List {
            head: list.head.clone(),
            args: Vec::with_capacity(list.args.len()),
        };
        for arg in &list.args {
            match arg {
                Node::List(inner) => {
                    let text = self.expand_at(inner, depth + 1)?;
                    folded.args.push(Node::Word(text));
                }
                other => folded.args.push(other.clone()),
            }
        }

        match self.forms.get(&folded.head) {
            Some(form) => {
                tracing::trace!(head = %folded.head, "dispatching special form");
                form.expand(&folded)
            }
            None => Ok(render_call(&folded)),
        }
    }
}

/// Default rendering: `head(arg1,arg2,...,argN)` in original order
///
/// Vector arguments have no call syntax of their own and render as opaque
/// elements.
fn render_call(list: &List) -> String {
    let mut code = String::from(&list.head);
    code.push('(');
    for (i, arg) in list.args.iter().enumerate() {
        if i > 0 {
            code.push(',');
        }
        match arg {
            Node::Word(text) => code.push_str(text),
            other => code.push_str(&other.to_string()),
        }
    }
    code.push(')');
    code
}
