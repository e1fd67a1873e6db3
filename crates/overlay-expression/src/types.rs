use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::value::EvalValue;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Operator arity.
#[derive(Debug, Clone, PartialEq)]
pub enum Arity {
    /// Fixed arity: exactly `n` operands.
    Fixed(usize),
    /// Variadic: at least 2 operands.
    Variadic,
    /// Range: between `min` and `max` operands. `None` for max = unlimited.
    Range(usize, Option<usize>),
}

/// The type of an operator evaluation function.
///
/// `expr` is the full expression array (including the operator name at index 0).
/// Operands are at `expr[1..]`.
pub type EvalFn = for<'a> fn(&[Value], &mut EvalCtx<'a>) -> Result<EvalValue, EvalError>;

pub struct OperatorDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub arity: Arity,
    pub eval_fn: EvalFn,
}

/// Map of operator name/alias -> definition.
pub type OperatorMap = HashMap<String, Arc<OperatorDefinition>>;

/// Asserts that an expression has the correct arity.
pub fn assert_arity(operator: &str, arity: &Arity, expr_len: usize) -> Result<(), EvalError> {
    match arity {
        Arity::Fixed(n) => {
            if expr_len != n + 1 {
                return Err(EvalError::ArityError(format!(
                    "\"{}\" operator expects {} operands.",
                    operator, n
                )));
            }
            Ok(())
        }
        Arity::Variadic => {
            if expr_len < 3 {
                return Err(EvalError::ArityError(format!(
                    "\"{}\" operator expects at least two operands.",
                    operator
                )));
            }
            Ok(())
        }
        Arity::Range(min, max) => {
            if expr_len < min + 1 {
                return Err(EvalError::ArityError(format!(
                    "\"{}\" operator expects at least {} operands.",
                    operator, min
                )));
            }
            match max {
                Some(max) if expr_len > max + 1 => Err(EvalError::ArityError(format!(
                    "\"{}\" operator expects at most {} operands.",
                    operator, max
                ))),
                _ => Ok(()),
            }
        }
    }
}

/// Builds an `OperatorMap` from a list of operator definitions.
pub fn operators_to_map(operators: Vec<Arc<OperatorDefinition>>) -> OperatorMap {
    let mut map = HashMap::new();
    for op in operators {
        map.insert(op.name.to_string(), Arc::clone(&op));
        for alias in op.aliases {
            map.insert(alias.to_string(), Arc::clone(&op));
        }
    }
    map
}
