//! Helpers shared by the operators.

use crate::error::EvalError;
use crate::value::EvalValue;

/// Splits `name/pointer` into the variable name and a JSON Pointer suffix.
pub fn parse_var(name: &str) -> (&str, &str) {
    match name.find('/') {
        None => (name, ""),
        Some(idx) => (&name[..idx], &name[idx..]),
    }
}

/// Parses a JSON Pointer (RFC 6901) into unescaped steps.
pub fn parse_pointer(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer[1..]
        .split('/')
        .map(|step| step.replace("~1", "/").replace("~0", "~"))
        .collect()
}

/// Converts a value to the text `cat` and `throw` use.
pub fn str_val(value: &EvalValue) -> String {
    match value {
        EvalValue::String(s) => s.clone(),
        other => repr(other),
    }
}

/// Source-like rendering of a value.
pub fn repr(value: &EvalValue) -> String {
    match value {
        EvalValue::None => "None".to_string(),
        EvalValue::Bool(true) => "True".to_string(),
        EvalValue::Bool(false) => "False".to_string(),
        EvalValue::Int(i) => i.to_string(),
        EvalValue::Float(f) => format!("{f:?}"),
        EvalValue::String(s) => format!("{s:?}"),
        EvalValue::List(items) => {
            let parts: Vec<String> = items.iter().map(repr).collect();
            format!("[{}]", parts.join(", "))
        }
        EvalValue::Dict(map) => {
            let parts: Vec<String> = map.iter().map(|(k, v)| format!("{k:?}: {}", repr(v))).collect();
            format!("{{{}}}", parts.join(", "))
        }
        EvalValue::Callable(c) => format!("<{} {}>", c.type_name(), c.name()),
    }
}

pub fn unsupported(op: &str, a: &EvalValue, b: &EvalValue) -> EvalError {
    EvalError::TypeError(format!(
        "unsupported operand type(s) for {}: '{}' and '{}'",
        op,
        a.type_name(),
        b.type_name()
    ))
}

pub fn expect_dict(
    op: &str,
    value: EvalValue,
) -> Result<indexmap::IndexMap<String, EvalValue>, EvalError> {
    match value {
        EvalValue::Dict(map) => Ok(map),
        other => Err(EvalError::TypeError(format!(
            "\"{}\" operator expects a dict, got '{}'",
            op,
            other.type_name()
        ))),
    }
}

pub fn expect_string(op: &str, value: EvalValue) -> Result<String, EvalError> {
    match value {
        EvalValue::String(s) => Ok(s),
        other => Err(EvalError::TypeError(format!(
            "\"{}\" operator expects a string, got '{}'",
            op,
            other.type_name()
        ))),
    }
}
