use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::util;
use crate::value::EvalValue;
use serde_json::Value;
use std::sync::Arc;

fn if_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let condition = crate::evaluate(&expr[1], ctx)?;
    if condition.truth() {
        crate::evaluate(&expr[2], ctx)
    } else {
        crate::evaluate(&expr[3], ctx)
    }
}

fn throw_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let val = crate::evaluate(&expr[1], ctx)?;
    Err(EvalError::Thrown(util::str_val(&val)))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition { name: "?", aliases: &["if"], arity: Arity::Fixed(3), eval_fn: if_eval }),
        Arc::new(OperatorDefinition { name: "throw", aliases: &[], arity: Arity::Fixed(1), eval_fn: throw_eval }),
    ]
}
