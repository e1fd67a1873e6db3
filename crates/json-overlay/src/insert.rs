//! The parsed form of an `overlay/insert` annotation.

use crate::annotation::ANNOTATION_INSERT;
use crate::error::{OverlayError, OverlayResult};
use crate::kwargs::parse_insert_kwargs;
use crate::node::Node;
use crate::options::InsertOptions;
use crate::resolve::Via;
use tracing::debug;

/// Placement flags and optional transform for one overlay item.
///
/// Holds its own copy of the item, so the overlay tree it came from can be
/// changed or dropped afterwards. Deciding where the value lands (including
/// what to do when both flags are set) is left to the merge engine.
#[derive(Debug, Clone)]
pub struct InsertDirective {
    pub(crate) new_item: Node,
    pub(crate) before: bool,
    pub(crate) after: bool,
    pub(crate) via: Option<Via>,
}

impl InsertDirective {
    pub fn new(new_item: &Node) -> OverlayResult<Self> {
        Self::with_options(new_item, &InsertOptions::default())
    }

    pub fn with_options(new_item: &Node, options: &InsertOptions) -> OverlayResult<Self> {
        let annotations = new_item.annotations();
        if !annotations.has(ANNOTATION_INSERT) {
            return Err(OverlayError::Config(format!(
                "Expected item to have '{}' annotation",
                ANNOTATION_INSERT
            )));
        }

        let kwargs = parse_insert_kwargs(annotations.kwargs(ANNOTATION_INSERT))?;
        if options.strict_placement && kwargs.before && kwargs.after {
            return Err(OverlayError::Config(format!(
                "Expected '{}' annotation to set at most one of 'before' or 'after'",
                ANNOTATION_INSERT
            )));
        }

        debug!(
            before = kwargs.before,
            after = kwargs.after,
            via = kwargs.via.is_some(),
            "parsed insert directive"
        );
        Ok(InsertDirective {
            new_item: new_item.deep_copy(),
            before: kwargs.before,
            after: kwargs.after,
            via: kwargs.via,
        })
    }

    pub fn is_before(&self) -> bool {
        self.before
    }

    pub fn is_after(&self) -> bool {
        self.after
    }

    pub fn new_item(&self) -> &Node {
        &self.new_item
    }

    pub fn via(&self) -> Option<&Via> {
        self.via.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Annotation;
    use serde_json::json;

    fn item(annotation: Annotation) -> Node {
        Node::new(json!({"name": "new"})).annotate(ANNOTATION_INSERT, annotation)
    }

    #[test]
    fn test_missing_annotation() {
        let err = InsertDirective::new(&Node::new(json!(1))).unwrap_err();
        assert_eq!(
            err,
            OverlayError::Config("Expected item to have 'overlay/insert' annotation".to_string())
        );
    }

    #[test]
    fn test_empty_annotation() {
        let err = InsertDirective::new(&item(Annotation::new())).unwrap_err();
        assert!(matches!(err, OverlayError::Config(_)));
    }

    #[test]
    fn test_both_flags_pass_through_by_default() {
        let node = item(Annotation::new().kwarg("before", true).kwarg("after", true));
        let directive = InsertDirective::new(&node).unwrap();
        assert!(directive.is_before());
        assert!(directive.is_after());
    }

    #[test]
    fn test_both_flags_rejected_when_strict() {
        let node = item(Annotation::new().kwarg("before", true).kwarg("after", true));
        let err = InsertDirective::with_options(&node, &InsertOptions::strict()).unwrap_err();
        assert!(matches!(err, OverlayError::Config(_)));

        let node = item(Annotation::new().kwarg("before", true).kwarg("after", false));
        let directive = InsertDirective::with_options(&node, &InsertOptions::strict()).unwrap();
        assert!(directive.is_before());
    }

    #[test]
    fn test_owns_copy_of_item() {
        let mut node = item(Annotation::new().kwarg("after", true));
        let directive = InsertDirective::new(&node).unwrap();
        node.value_mut()["name"] = json!("mutated");
        assert_eq!(directive.new_item().value(), &json!({"name": "new"}));
    }
}
