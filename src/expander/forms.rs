use crate::error::Result;
use crate::reader::List;
use std::collections::HashMap;
use std::sync::Arc;

/// A named construct with a custom expansion rule
///
/// Handlers receive the full list node with every child list already
/// folded to its generated text, and return target-syntax text verbatim.
/// The catalog of forms is supplied by the surrounding system; this crate
/// only performs the lookup.
pub trait SpecialForm: Send + Sync {
    /// Head word this form is dispatched on
    fn name(&self) -> &str;

    /// Short human-readable description
    fn description(&self) -> &str {
        ""
    }

    /// Produce target-syntax text for the node
    fn expand(&self, list: &List) -> Result<String>;
}

/// Name→handler table consulted before default call rendering
pub struct SpecialFormRegistry {
    forms: HashMap<String, Arc<dyn SpecialForm>>,
}

impl SpecialFormRegistry {
    /// Creates an empty registry; entries always come from outside
    pub fn new() -> Self {
        SpecialFormRegistry {
            forms: HashMap::new(),
        }
    }

    /// Registers a form under its own name, replacing any previous entry
    pub fn register(&mut self, form: Arc<dyn SpecialForm>) {
        self.forms.insert(form.name().to_string(), form);
    }

    /// Registers a closure as a form named `name`
    pub fn register_fn<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&List) -> Result<String> + Send + Sync + 'static,
    {
        let form = FnForm {
            name: name.into(),
            handler: Box::new(handler),
        };
        self.forms.insert(form.name.clone(), Arc::new(form));
    }

    /// Looks up a form by head word
    pub fn get(&self, name: &str) -> Option<&Arc<dyn SpecialForm>> {
        self.forms.get(name)
    }

    /// True when a form is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.forms.contains_key(name)
    }

    /// Number of registered forms
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// True when no forms are registered
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl Default for SpecialFormRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Closure-backed form used by `register_fn`
struct FnForm {
    name: String,
    handler: Box<dyn Fn(&List) -> Result<String> + Send + Sync>,
}

impl SpecialForm for FnForm {
    fn name(&self) -> &str {
        &self.name
    }

    fn expand(&self, list: &List) -> Result<String> {
        (self.handler)(list)
    }
}
