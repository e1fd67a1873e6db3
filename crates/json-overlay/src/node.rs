use crate::annotation::{Annotation, Annotations};
use serde_json::Value;

/// A document node: a JSON value plus the annotations attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    value: Value,
    annotations: Annotations,
}

impl Node {
    pub fn new(value: Value) -> Self {
        Node {
            value,
            annotations: Annotations::new(),
        }
    }

    pub fn annotate(mut self, name: impl Into<String>, annotation: Annotation) -> Self {
        self.annotations.set(name, annotation);
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Returns a node that shares no mutable state with `self`.
    pub fn deep_copy(&self) -> Node {
        Node {
            value: self.value.clone(),
            annotations: self.annotations.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::ANNOTATION_INSERT;
    use serde_json::json;

    #[test]
    fn test_deep_copy_is_independent() {
        let original = Node::new(json!({"arr": [1, 2, {"k": "v"}]}))
            .annotate(ANNOTATION_INSERT, Annotation::new().kwarg("before", true));
        let mut copy = original.deep_copy();
        assert_eq!(copy, original);

        copy.value_mut()["arr"][2]["k"] = json!("changed");
        assert_eq!(original.value()["arr"][2]["k"], json!("v"));
        assert!(copy.annotations().has(ANNOTATION_INSERT));
    }

    #[test]
    fn test_deep_copy_preserves_key_order() {
        let node = Node::new(json!({"z": 1, "a": 2, "m": 3}));
        let copied = node.deep_copy().into_value();
        let keys: Vec<_> = copied.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
