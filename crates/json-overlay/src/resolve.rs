//! Computing the value an insert directive splices into the base document.

use crate::annotation::ANNOTATION_INSERT;
use crate::error::{OverlayError, OverlayResult};
use crate::insert::InsertDirective;
use crate::kwargs::KWARG_VIA;
use crate::node::Node;
use overlay_expression::{Callable, EvalValue, Evaluator};
use serde_json::Value;
use tracing::debug;

/// The `via` keyword value, split on whether it can be called.
///
/// The split happens at parse time but only the `Callable` branch is usable;
/// `Other` is reported when the value is actually needed.
#[derive(Debug, Clone, PartialEq)]
pub enum Via {
    Callable(Callable),
    Other(EvalValue),
}

impl From<EvalValue> for Via {
    fn from(value: EvalValue) -> Self {
        match value {
            EvalValue::Callable(c) => Via::Callable(c),
            other => Via::Other(other),
        }
    }
}

impl InsertDirective {
    /// Computes the value to insert.
    ///
    /// Without `via` this is a fresh copy of the configured item. With `via`,
    /// the callable is invoked once on `evaluator` with a copy of `existing`
    /// (or `None` when nothing is there) and its result is converted back.
    /// The callable may have whatever side effects the evaluator allows;
    /// `existing` and the directive itself are never modified.
    pub fn value(
        &self,
        existing: Option<&Node>,
        evaluator: &mut dyn Evaluator,
    ) -> OverlayResult<Value> {
        let via = match &self.via {
            None => return Ok(self.new_item.deep_copy().into_value()),
            Some(via) => via,
        };

        let callable = match via {
            Via::Callable(c) => c,
            Via::Other(value) => {
                return Err(OverlayError::TypeMismatch(format!(
                    "Expected '{}' annotation keyword argument '{}' to be function, but was {}",
                    ANNOTATION_INSERT,
                    KWARG_VIA,
                    value.type_name()
                )))
            }
        };

        // Conversion builds a new tree, so user code never sees the base document.
        let existing_val = existing
            .map(|node| EvalValue::from_json(node.value()))
            .unwrap_or(EvalValue::None);

        debug!(
            callable = callable.name(),
            existing = existing.is_some(),
            "invoking insert via"
        );
        let result = evaluator.call(callable, &[existing_val], &[])?;
        result
            .to_json()
            .map_err(|e| OverlayError::TypeMismatch(e.to_string()))
    }
}
