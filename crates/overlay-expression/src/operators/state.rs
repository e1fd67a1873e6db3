//! Access to thread globals. `set_global` is the one operator with a side
//! effect that outlives the call it runs in.

use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::util;
use crate::value::EvalValue;
use serde_json::Value;
use std::sync::Arc;

fn global_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let name = util::expect_string("global", crate::evaluate(&expr[1], ctx)?)?;
    if let Some(value) = ctx.thread.global(&name) {
        return Ok(value.clone());
    }
    match expr.get(2) {
        Some(default) => crate::evaluate(default, ctx),
        None => Err(EvalError::NotFound),
    }
}

fn set_global_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let name = util::expect_string("set_global", crate::evaluate(&expr[1], ctx)?)?;
    let value = crate::evaluate(&expr[2], ctx)?;
    ctx.thread.set_global(name, value.clone());
    Ok(value)
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition { name: "global", aliases: &[], arity: Arity::Range(1, Some(2)), eval_fn: global_eval }),
        Arc::new(OperatorDefinition { name: "set_global", aliases: &[], arity: Arity::Fixed(2), eval_fn: set_global_eval }),
    ]
}
