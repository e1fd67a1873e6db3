//! Arithmetic operators. Integer arithmetic stays integral and fails on
//! overflow; mixing in a float promotes the result.

use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::util;
use crate::value::EvalValue;
use serde_json::Value;
use std::sync::Arc;

fn overflow(op: &str) -> EvalError {
    EvalError::TypeError(format!("integer overflow in {}", op))
}

fn numeric(
    op: &str,
    a: EvalValue,
    b: EvalValue,
    int_op: fn(i128, i128) -> Option<i128>,
    float_op: fn(f64, f64) -> f64,
) -> Result<EvalValue, EvalError> {
    match (&a, &b) {
        (EvalValue::Int(x), EvalValue::Int(y)) => int_op(*x, *y).map(EvalValue::Int).ok_or_else(|| overflow(op)),
        (EvalValue::Int(x), EvalValue::Float(y)) => Ok(EvalValue::Float(float_op(*x as f64, *y))),
        (EvalValue::Float(x), EvalValue::Int(y)) => Ok(EvalValue::Float(float_op(*x, *y as f64))),
        (EvalValue::Float(x), EvalValue::Float(y)) => Ok(EvalValue::Float(float_op(*x, *y))),
        _ => Err(util::unsupported(op, &a, &b)),
    }
}

fn add(a: EvalValue, b: EvalValue) -> Result<EvalValue, EvalError> {
    match (a, b) {
        (EvalValue::String(mut x), EvalValue::String(y)) => {
            x.push_str(&y);
            Ok(EvalValue::String(x))
        }
        (EvalValue::List(mut x), EvalValue::List(y)) => {
            x.extend(y);
            Ok(EvalValue::List(x))
        }
        (a, b) => numeric("+", a, b, i128::checked_add, |x, y| x + y),
    }
}

fn fold(
    expr: &[Value],
    ctx: &mut EvalCtx<'_>,
    step: impl Fn(EvalValue, EvalValue) -> Result<EvalValue, EvalError>,
) -> Result<EvalValue, EvalError> {
    let mut acc = crate::evaluate(&expr[1], ctx)?;
    for operand in &expr[2..] {
        let next = crate::evaluate(operand, ctx)?;
        acc = step(acc, next)?;
    }
    Ok(acc)
}

fn add_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    fold(expr, ctx, add)
}

fn subtract_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    fold(expr, ctx, |a, b| numeric("-", a, b, i128::checked_sub, |x, y| x - y))
}

fn multiply_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    fold(expr, ctx, |a, b| numeric("*", a, b, i128::checked_mul, |x, y| x * y))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition { name: "+", aliases: &["add"], arity: Arity::Variadic, eval_fn: add_eval }),
        Arc::new(OperatorDefinition { name: "-", aliases: &["subtract"], arity: Arity::Variadic, eval_fn: subtract_eval }),
        Arc::new(OperatorDefinition { name: "*", aliases: &["multiply"], arity: Arity::Variadic, eval_fn: multiply_eval }),
    ]
}
