//! Logical operators. `&&` and `||` short-circuit and yield the last operand
//! they evaluated, not a coerced bool.

use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::value::EvalValue;
use serde_json::Value;
use std::sync::Arc;

fn not_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let val = crate::evaluate(&expr[1], ctx)?;
    Ok(EvalValue::Bool(!val.truth()))
}

fn and_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let mut last = EvalValue::Bool(true);
    for operand in &expr[1..] {
        last = crate::evaluate(operand, ctx)?;
        if !last.truth() {
            break;
        }
    }
    Ok(last)
}

fn or_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let mut last = EvalValue::Bool(false);
    for operand in &expr[1..] {
        last = crate::evaluate(operand, ctx)?;
        if last.truth() {
            break;
        }
    }
    Ok(last)
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition { name: "!", aliases: &["not"], arity: Arity::Fixed(1), eval_fn: not_eval }),
        Arc::new(OperatorDefinition { name: "&&", aliases: &["and"], arity: Arity::Variadic, eval_fn: and_eval }),
        Arc::new(OperatorDefinition { name: "||", aliases: &["or"], arity: Arity::Variadic, eval_fn: or_eval }),
    ]
}
