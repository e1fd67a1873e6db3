//! Operator definitions.

pub mod arithmetic;
pub mod branching;
pub mod comparison;
pub mod container;
pub mod function;
pub mod input;
pub mod logical;
pub mod state;
pub mod string;

use crate::types::{operators_to_map, OperatorDefinition, OperatorMap};
use std::sync::Arc;

/// All operators combined.
pub fn all_operators() -> Vec<Arc<OperatorDefinition>> {
    let mut ops = Vec::new();
    ops.extend(arithmetic::operators());
    ops.extend(comparison::operators());
    ops.extend(logical::operators());
    ops.extend(container::operators());
    ops.extend(string::operators());
    ops.extend(branching::operators());
    ops.extend(input::operators());
    ops.extend(function::operators());
    ops.extend(state::operators());
    ops
}

/// Build the operator map from all operators.
pub fn operators_map() -> OperatorMap {
    operators_to_map(all_operators())
}
