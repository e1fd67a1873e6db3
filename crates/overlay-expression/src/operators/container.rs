//! List and dict operators. All of them build new values; operands are
//! never modified in place.

use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::util;
use crate::value::EvalValue;
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

fn len_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let val = crate::evaluate(&expr[1], ctx)?;
    let len = match &val {
        EvalValue::String(s) => s.chars().count(),
        EvalValue::List(items) => items.len(),
        EvalValue::Dict(map) => map.len(),
        other => {
            return Err(EvalError::TypeError(format!(
                "value of type '{}' has no len()",
                other.type_name()
            )))
        }
    };
    Ok(EvalValue::Int(len as i128))
}

fn type_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let val = crate::evaluate(&expr[1], ctx)?;
    Ok(EvalValue::from(val.type_name()))
}

fn list_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let items = expr[1..]
        .iter()
        .map(|operand| crate::evaluate(operand, ctx))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(EvalValue::List(items))
}

fn push_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let mut items = match crate::evaluate(&expr[1], ctx)? {
        EvalValue::List(items) => items,
        EvalValue::None => Vec::new(),
        other => {
            return Err(EvalError::TypeError(format!(
                "\"push\" operator expects a list, got '{}'",
                other.type_name()
            )))
        }
    };
    for operand in &expr[2..] {
        items.push(crate::evaluate(operand, ctx)?);
    }
    Ok(EvalValue::List(items))
}

fn dict_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let operands = &expr[1..];
    if operands.len() % 2 != 0 {
        return Err(EvalError::ArityError(
            "\"dict\" operator expects key/value pairs.".to_string(),
        ));
    }
    let mut map = IndexMap::new();
    for pair in operands.chunks(2) {
        let key = util::expect_string("dict", crate::evaluate(&pair[0], ctx)?)?;
        let value = crate::evaluate(&pair[1], ctx)?;
        map.insert(key, value);
    }
    Ok(EvalValue::Dict(map))
}

fn merge_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let mut merged = match crate::evaluate(&expr[1], ctx)? {
        EvalValue::None => IndexMap::new(),
        other => util::expect_dict("merge", other)?,
    };
    for operand in &expr[2..] {
        let next = util::expect_dict("merge", crate::evaluate(operand, ctx)?)?;
        merged.extend(next);
    }
    Ok(EvalValue::Dict(merged))
}

fn put_eval(expr: &[Value], ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    let mut map = match crate::evaluate(&expr[1], ctx)? {
        EvalValue::None => IndexMap::new(),
        other => util::expect_dict("put", other)?,
    };
    let key = util::expect_string("put", crate::evaluate(&expr[2], ctx)?)?;
    let value = crate::evaluate(&expr[3], ctx)?;
    map.insert(key, value);
    Ok(EvalValue::Dict(map))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition { name: "len", aliases: &[], arity: Arity::Fixed(1), eval_fn: len_eval }),
        Arc::new(OperatorDefinition { name: "type", aliases: &[], arity: Arity::Fixed(1), eval_fn: type_eval }),
        Arc::new(OperatorDefinition { name: "list", aliases: &[], arity: Arity::Range(1, None), eval_fn: list_eval }),
        Arc::new(OperatorDefinition { name: "push", aliases: &[], arity: Arity::Range(2, None), eval_fn: push_eval }),
        Arc::new(OperatorDefinition { name: "dict", aliases: &[], arity: Arity::Range(2, None), eval_fn: dict_eval }),
        Arc::new(OperatorDefinition { name: "merge", aliases: &[], arity: Arity::Variadic, eval_fn: merge_eval }),
        Arc::new(OperatorDefinition { name: "put", aliases: &[], arity: Arity::Fixed(3), eval_fn: put_eval }),
    ]
}
