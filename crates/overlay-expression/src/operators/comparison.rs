use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::util;
use crate::value::EvalValue;
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::Arc;

fn order(op: &str, a: &EvalValue, b: &EvalValue) -> Result<Ordering, EvalError> {
    let ordering = match (a, b) {
        (EvalValue::Int(x), EvalValue::Int(y)) => Some(x.cmp(y)),
        (EvalValue::Int(x), EvalValue::Float(y)) => (*x as f64).partial_cmp(y),
        (EvalValue::Float(x), EvalValue::Int(y)) => x.partial_cmp(&(*y as f64)),
        (EvalValue::Float(x), EvalValue::Float(y)) => x.partial_cmp(y),
        (EvalValue::String(x), EvalValue::String(y)) => Some(x.cmp(y)),
        _ => return Err(util::unsupported(op, a, b)),
    };
    Ok(ordering.unwrap_or(Ordering::Equal))
}

fn eq_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let left = crate::evaluate(&expr[1], ctx)?;
    let right = crate::evaluate(&expr[2], ctx)?;
    Ok(EvalValue::Bool(left == right))
}

fn ne_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let left = crate::evaluate(&expr[1], ctx)?;
    let right = crate::evaluate(&expr[2], ctx)?;
    Ok(EvalValue::Bool(left != right))
}

fn lt_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let left = crate::evaluate(&expr[1], ctx)?;
    let right = crate::evaluate(&expr[2], ctx)?;
    Ok(EvalValue::Bool(order("<", &left, &right)? == Ordering::Less))
}

fn gt_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let left = crate::evaluate(&expr[1], ctx)?;
    let right = crate::evaluate(&expr[2], ctx)?;
    Ok(EvalValue::Bool(order(">", &left, &right)? == Ordering::Greater))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition { name: "==", aliases: &["eq"], arity: Arity::Fixed(2), eval_fn: eq_eval }),
        Arc::new(OperatorDefinition { name: "!=", aliases: &["ne"], arity: Arity::Fixed(2), eval_fn: ne_eval }),
        Arc::new(OperatorDefinition { name: "<", aliases: &["lt"], arity: Arity::Fixed(2), eval_fn: lt_eval }),
        Arc::new(OperatorDefinition { name: ">", aliases: &["gt"], arity: Arity::Fixed(2), eval_fn: gt_eval }),
    ]
}
