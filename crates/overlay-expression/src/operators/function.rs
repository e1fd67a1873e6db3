//! Function definition and invocation.

use crate::callable::Callable;
use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::thread::Evaluator;
use crate::types::{Arity, OperatorDefinition};
use crate::value::EvalValue;
use serde_json::Value;
use std::sync::Arc;

/// `["fn", ["a", "b"], body]` builds a lambda; `body` is kept unevaluated.
fn fn_eval(expr: &[Value], _ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let params = expr[1]
        .as_array()
        .and_then(|params| {
            params
                .iter()
                .map(|p| p.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        })
        .ok_or_else(|| {
            EvalError::TypeError("\"fn\" operator expects a list of parameter names.".to_string())
        })?;
    Ok(EvalValue::Callable(Callable::lambda(
        "lambda",
        params,
        expr[2].clone(),
    )))
}

fn call_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let target = crate::evaluate(&expr[1], ctx)?;
    let callable = match target {
        EvalValue::Callable(c) => c,
        other => return Err(EvalError::NotCallable(other.type_name())),
    };
    let args = expr[2..]
        .iter()
        .map(|operand| crate::evaluate(operand, ctx))
        .collect::<Result<Vec<_>, _>>()?;
    ctx.thread.call(&callable, &args, &[])
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition { name: "fn", aliases: &["lambda"], arity: Arity::Fixed(2), eval_fn: fn_eval }),
        Arc::new(OperatorDefinition { name: "call", aliases: &[], arity: Arity::Range(1, None), eval_fn: call_eval }),
    ]
}
