//! The evaluator's value representation and its conversions to and from host
//! JSON values.

use crate::callable::Callable;
use crate::error::EvalError;
use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

/// Any value the evaluator can produce or consume.
///
/// `None` is the canonical "no value" and is what callables receive when
/// there is nothing at the insertion point.
#[derive(Debug, Clone)]
pub enum EvalValue {
    None,
    Bool(bool),
    /// Covers both the i64 and u64 ranges of host JSON integers.
    Int(i128),
    Float(f64),
    String(String),
    List(Vec<EvalValue>),
    Dict(IndexMap<String, EvalValue>),
    Callable(Callable),
}

impl PartialEq for EvalValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EvalValue::None, EvalValue::None) => true,
            (EvalValue::Bool(a), EvalValue::Bool(b)) => a == b,
            (EvalValue::Int(a), EvalValue::Int(b)) => a == b,
            (EvalValue::Float(a), EvalValue::Float(b)) => a == b,
            (EvalValue::Int(a), EvalValue::Float(b)) | (EvalValue::Float(b), EvalValue::Int(a)) => {
                *a as f64 == *b
            }
            (EvalValue::String(a), EvalValue::String(b)) => a == b,
            (EvalValue::List(a), EvalValue::List(b)) => a == b,
            (EvalValue::Dict(a), EvalValue::Dict(b)) => a == b,
            (EvalValue::Callable(a), EvalValue::Callable(b)) => a == b,
            _ => false,
        }
    }
}

impl EvalValue {
    /// Returns the evaluator-level type name, as shown in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            EvalValue::None => "NoneType",
            EvalValue::Bool(_) => "bool",
            EvalValue::Int(_) => "int",
            EvalValue::Float(_) => "float",
            EvalValue::String(_) => "string",
            EvalValue::List(_) => "list",
            EvalValue::Dict(_) => "dict",
            EvalValue::Callable(c) => c.type_name(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, EvalValue::None)
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            EvalValue::Callable(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            EvalValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Strict boolean coercion: only `Bool` converts.
    pub fn as_bool(&self) -> Result<bool, EvalError> {
        match self {
            EvalValue::Bool(b) => Ok(*b),
            other => Err(EvalError::TypeError(format!(
                "Expected value to be a bool, but was {}",
                other.type_name()
            ))),
        }
    }

    /// Truthiness used by branching and logical operators.
    pub fn truth(&self) -> bool {
        match self {
            EvalValue::None => false,
            EvalValue::Bool(b) => *b,
            EvalValue::Int(i) => *i != 0,
            EvalValue::Float(f) => *f != 0.0,
            EvalValue::String(s) => !s.is_empty(),
            EvalValue::List(l) => !l.is_empty(),
            EvalValue::Dict(d) => !d.is_empty(),
            EvalValue::Callable(_) => true,
        }
    }

    /// Follows already-parsed JSON Pointer steps through lists and dicts.
    pub fn get_path(&self, path: &[String]) -> Option<&EvalValue> {
        let mut current = self;
        for step in path {
            current = match current {
                EvalValue::List(items) => items.get(step.parse::<usize>().ok()?)?,
                EvalValue::Dict(map) => map.get(step)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Converts a host JSON value into the evaluator's representation.
    pub fn from_json(value: &Value) -> EvalValue {
        match value {
            Value::Null => EvalValue::None,
            Value::Bool(b) => EvalValue::Bool(*b),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => EvalValue::Int(i128::from(i)),
                (None, Some(u)) => EvalValue::Int(i128::from(u)),
                (None, None) => EvalValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => EvalValue::String(s.clone()),
            Value::Array(arr) => EvalValue::List(arr.iter().map(EvalValue::from_json).collect()),
            Value::Object(obj) => EvalValue::Dict(
                obj.iter()
                    .map(|(k, v)| (k.clone(), EvalValue::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Converts back to a host JSON value.
    ///
    /// Callables and non-finite floats have no host representation.
    pub fn to_json(&self) -> Result<Value, EvalError> {
        match self {
            EvalValue::None => Ok(Value::Null),
            EvalValue::Bool(b) => Ok(Value::Bool(*b)),
            EvalValue::Int(i) => {
                if let Ok(i) = i64::try_from(*i) {
                    Ok(Value::Number(Number::from(i)))
                } else if let Ok(u) = u64::try_from(*i) {
                    Ok(Value::Number(Number::from(u)))
                } else {
                    Err(EvalError::TypeError(format!(
                        "Unable to convert int value {i} to a host value: out of range"
                    )))
                }
            }
            EvalValue::Float(f) => Number::from_f64(*f).map(Value::Number).ok_or_else(|| {
                EvalError::TypeError(format!("Unable to convert float value {f} to a host value"))
            }),
            EvalValue::String(s) => Ok(Value::String(s.clone())),
            EvalValue::List(items) => items
                .iter()
                .map(EvalValue::to_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            EvalValue::Dict(map) => {
                let mut obj = Map::new();
                for (k, v) in map {
                    obj.insert(k.clone(), v.to_json()?);
                }
                Ok(Value::Object(obj))
            }
            EvalValue::Callable(c) => Err(EvalError::TypeError(format!(
                "Unable to convert value of type '{}' to a host value",
                c.type_name()
            ))),
        }
    }
}

impl From<Value> for EvalValue {
    fn from(v: Value) -> Self {
        EvalValue::from_json(&v)
    }
}

impl From<bool> for EvalValue {
    fn from(b: bool) -> Self {
        EvalValue::Bool(b)
    }
}

impl From<i64> for EvalValue {
    fn from(i: i64) -> Self {
        EvalValue::Int(i128::from(i))
    }
}

impl From<&str> for EvalValue {
    fn from(s: &str) -> Self {
        EvalValue::String(s.to_string())
    }
}

impl From<String> for EvalValue {
    fn from(s: String) -> Self {
        EvalValue::String(s)
    }
}

impl From<Callable> for EvalValue {
    fn from(c: Callable) -> Self {
        EvalValue::Callable(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(EvalValue::from(json!(3)), EvalValue::Int(3));
        assert_eq!(EvalValue::from(json!(1.5)), EvalValue::Float(1.5));
        assert_eq!(EvalValue::from(json!(u64::MAX)), EvalValue::Int(u64::MAX as i128));
        assert_eq!(EvalValue::from(json!(i64::MIN)), EvalValue::Int(i64::MIN as i128));
        assert_eq!(EvalValue::from(json!(u64::MAX)).type_name(), "int");
    }

    #[test]
    fn test_integer_range_roundtrip() {
        for doc in [json!(u64::MAX), json!(i64::MIN), json!(i64::MAX as u64 + 1), json!({"id": u64::MAX})] {
            let back = EvalValue::from_json(&doc).to_json().unwrap();
            assert_eq!(back, doc);
        }
        assert!(EvalValue::from_json(&json!(u64::MAX)).to_json().unwrap().is_u64());
    }

    #[test]
    fn test_int_outside_host_range_is_rejected() {
        let err = EvalValue::Int(-(u64::MAX as i128)).to_json().unwrap_err();
        assert!(err.to_string().contains("out of range"), "got: {}", err);
        assert!(EvalValue::Int(u64::MAX as i128 + 1).to_json().is_err());
    }

    #[test]
    fn test_json_roundtrip_preserves_key_order() {
        let doc = json!({"z": 1, "a": [true, null, "s"], "m": {"k": 2.5}});
        let back = EvalValue::from_json(&doc).to_json().unwrap();
        assert_eq!(back, doc);
        let keys: Vec<_> = back.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_non_finite_float_is_rejected() {
        let err = EvalValue::Float(f64::INFINITY).to_json().unwrap_err();
        assert!(err.to_string().contains("Unable to convert float"));
    }

    #[test]
    fn test_as_bool_is_strict() {
        assert_eq!(EvalValue::Bool(true).as_bool(), Ok(true));
        let err = EvalValue::from("yes").as_bool().unwrap_err();
        assert!(err.to_string().contains("string"), "got: {}", err);
        assert!(EvalValue::Int(1).as_bool().is_err());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(EvalValue::None.type_name(), "NoneType");
        assert_eq!(EvalValue::Int(3).type_name(), "int");
        assert_eq!(EvalValue::from(json!({})).type_name(), "dict");
        assert_eq!(EvalValue::from(json!([])).type_name(), "list");
    }

    #[test]
    fn test_get_path() {
        let v = EvalValue::from(json!({"a": {"b": [10, 20]}}));
        let path = vec!["a".to_string(), "b".to_string(), "1".to_string()];
        assert_eq!(v.get_path(&path), Some(&EvalValue::Int(20)));
        assert_eq!(v.get_path(&["x".to_string()]), None);
        assert_eq!(v.get_path(&[]), Some(&v));
    }
}
