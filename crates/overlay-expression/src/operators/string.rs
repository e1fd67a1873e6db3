use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::util;
use crate::value::EvalValue;
use serde_json::Value;
use std::sync::Arc;

fn cat_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let mut out = String::new();
    for operand in &expr[1..] {
        let val = crate::evaluate(operand, ctx)?;
        out.push_str(&util::str_val(&val));
    }
    Ok(EvalValue::String(out))
}

fn str_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let val = crate::evaluate(&expr[1], ctx)?;
    Ok(EvalValue::String(util::str_val(&val)))
}

fn upper_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let val = crate::evaluate(&expr[1], ctx)?;
    Ok(EvalValue::String(util::expect_string("upper", val)?.to_uppercase()))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition { name: "cat", aliases: &["."], arity: Arity::Variadic, eval_fn: cat_eval }),
        Arc::new(OperatorDefinition { name: "str", aliases: &[], arity: Arity::Fixed(1), eval_fn: str_eval }),
        Arc::new(OperatorDefinition { name: "upper", aliases: &[], arity: Arity::Fixed(1), eval_fn: upper_eval }),
    ]
}
