//! Parameter access operators.

use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::util;
use crate::value::EvalValue;
use serde_json::Value;
use std::sync::Arc;

fn resolve_var(ctx: &EvalCtx<'_>, varname_val: &EvalValue) -> Result<Option<EvalValue>, EvalError> {
    let varname = varname_val.as_str().ok_or(EvalError::VarnameMustBeString)?;
    let (name, pointer) = util::parse_var(varname);
    let path = util::parse_pointer(pointer);
    Ok(ctx
        .lookup(name)
        .and_then(|data| data.get_path(&path))
        .cloned())
}

fn get_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let varname_val = crate::evaluate(&expr[1], ctx)?;
    let defval = if expr.len() >= 3 {
        Some(crate::evaluate(&expr[2], ctx)?)
    } else {
        None
    };
    match resolve_var(ctx, &varname_val)? {
        Some(value) => Ok(value),
        None => defval.ok_or(EvalError::NotFound),
    }
}

fn defined_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let varname_val = crate::evaluate(&expr[1], ctx)?;
    Ok(EvalValue::Bool(resolve_var(ctx, &varname_val)?.is_some()))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "$",
            aliases: &["get"],
            arity: Arity::Range(1, Some(2)),
            eval_fn: get_eval,
        }),
        Arc::new(OperatorDefinition {
            name: "$?",
            aliases: &["get?"],
            arity: Arity::Fixed(1),
            eval_fn: defined_eval,
        }),
    ]
}
