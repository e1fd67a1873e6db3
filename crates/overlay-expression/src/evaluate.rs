use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::types::assert_arity;
use crate::value::EvalValue;
use serde_json::Value;

/// Evaluates an expression against an execution context.
///
/// - Non-array values are returned as literals.
/// - Single-element arrays `[x]` return `x` as a literal.
/// - Multi-element arrays `[operator, ...operands]` dispatch to the matching operator.
///
/// Every call counts against the thread's step budget.
pub fn evaluate(expr: &Value, ctx: &mut EvalCtx<'_>) -> Result<EvalValue, EvalError> {
    ctx.thread.tick()?;
    match expr {
        Value::Array(arr) => {
            if arr.is_empty() {
                return Ok(EvalValue::List(vec![]));
            }
            if arr.len() == 1 {
                return Ok(EvalValue::from_json(&arr[0]));
            }

            let op_key = match &arr[0] {
                Value::String(s) => s.as_str(),
                _ => return Err(EvalError::UnknownExpression(expr.to_string())),
            };
            let def = ctx
                .thread
                .operators()
                .get(op_key)
                .cloned()
                .ok_or_else(|| EvalError::UnknownExpression(expr.to_string()))?;

            assert_arity(def.name, &def.arity, arr.len())?;
            (def.eval_fn)(arr, ctx)
        }
        other => Ok(EvalValue::from_json(other)),
    }
}
