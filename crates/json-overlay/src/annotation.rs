//! Annotations as delivered by the annotation framework: a name plus
//! ordered keyword pairs.

use indexmap::IndexMap;
use overlay_expression::EvalValue;

pub const ANNOTATION_INSERT: &str = "overlay/insert";

/// A keyword argument. The key arrives as an evaluator string value and is
/// unwrapped by whoever consumes it.
pub type Kwarg = (EvalValue, EvalValue);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotation {
    pub kwargs: Vec<Kwarg>,
}

impl Annotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a keyword argument. Repeated keys are kept in order.
    pub fn kwarg(mut self, key: impl Into<EvalValue>, value: impl Into<EvalValue>) -> Self {
        self.kwargs.push((key.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotations {
    entries: IndexMap<String, Annotation>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Keyword arguments of `name`, empty when the annotation is absent.
    pub fn kwargs(&self, name: &str) -> &[Kwarg] {
        self.entries
            .get(name)
            .map(|a| a.kwargs.as_slice())
            .unwrap_or(&[])
    }

    pub fn set(&mut self, name: impl Into<String>, annotation: Annotation) {
        self.entries.insert(name.into(), annotation);
    }
}
