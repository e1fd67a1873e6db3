//! Keyword arguments of the `overlay/insert` annotation.

use crate::annotation::{Kwarg, ANNOTATION_INSERT};
use crate::error::{OverlayError, OverlayResult};
use crate::resolve::Via;
use overlay_expression::EvalValue;

pub const KWARG_BEFORE: &str = "before";
pub const KWARG_AFTER: &str = "after";
pub const KWARG_VIA: &str = "via";

/// Parsed keyword arguments. Keys are already unwrapped; only the `via`
/// value stays in evaluator form, and its type is not checked here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsertKwargs {
    pub before: bool,
    pub after: bool,
    pub via: Option<Via>,
}

/// Parses `before`/`after`/`via`. A repeated key overwrites the earlier one.
pub fn parse_insert_kwargs(kwargs: &[Kwarg]) -> OverlayResult<InsertKwargs> {
    if kwargs.is_empty() {
        return Err(OverlayError::Config(format!(
            "Expected '{}' annotation to have at least one keyword argument (before=..., after=...)",
            ANNOTATION_INSERT
        )));
    }

    let mut parsed = InsertKwargs::default();
    for (key, value) in kwargs {
        let name = key.as_str().ok_or_else(|| {
            OverlayError::Config(format!(
                "Expected '{}' annotation keyword argument name to be a string, but was {}",
                ANNOTATION_INSERT,
                key.type_name()
            ))
        })?;

        match name {
            KWARG_BEFORE => parsed.before = kwarg_bool(name, value)?,
            KWARG_AFTER => parsed.after = kwarg_bool(name, value)?,
            KWARG_VIA => parsed.via = Some(Via::from(value.clone())),
            other => {
                return Err(OverlayError::Config(format!(
                    "Unknown '{}' annotation keyword argument '{}'",
                    ANNOTATION_INSERT, other
                )))
            }
        }
    }
    Ok(parsed)
}

fn kwarg_bool(name: &str, value: &EvalValue) -> OverlayResult<bool> {
    value.as_bool().map_err(|_| {
        OverlayError::TypeMismatch(format!(
            "Expected '{}' annotation keyword argument '{}' to be a bool, but was {}",
            ANNOTATION_INSERT,
            name,
            value.type_name()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlay_expression::Callable;
    use serde_json::json;

    fn kw(key: &str, value: impl Into<EvalValue>) -> Kwarg {
        (EvalValue::from(key), value.into())
    }

    #[test]
    fn test_empty_is_config_error() {
        let err = parse_insert_kwargs(&[]).unwrap_err();
        assert!(matches!(err, OverlayError::Config(_)));
        assert!(err.to_string().contains("at least one keyword argument"));
    }

    #[test]
    fn test_flags() {
        let parsed = parse_insert_kwargs(&[kw("before", true)]).unwrap();
        assert!(parsed.before);
        assert!(!parsed.after);
        assert!(parsed.via.is_none());
    }

    #[test]
    fn test_last_occurrence_wins() {
        let parsed =
            parse_insert_kwargs(&[kw("after", true), kw("before", true), kw("after", false)]).unwrap();
        assert!(parsed.before);
        assert!(!parsed.after);
    }

    #[test]
    fn test_unknown_keyword() {
        let err = parse_insert_kwargs(&[kw("befor", true)]).unwrap_err();
        assert_eq!(
            err,
            OverlayError::Config("Unknown 'overlay/insert' annotation keyword argument 'befor'".to_string())
        );
    }

    #[test]
    fn test_non_bool_flag() {
        let err = parse_insert_kwargs(&[kw("before", "yes")]).unwrap_err();
        match err {
            OverlayError::TypeMismatch(msg) => assert!(msg.contains("string"), "got: {}", msg),
            other => panic!("expected type mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_non_string_key() {
        let err = parse_insert_kwargs(&[(EvalValue::Int(1), EvalValue::Bool(true))]).unwrap_err();
        assert!(matches!(err, OverlayError::Config(_)));
        assert!(err.to_string().contains("int"));
    }

    #[test]
    fn test_via_is_stored_unchecked() {
        let parsed = parse_insert_kwargs(&[kw("via", 3i64)]).unwrap();
        assert_eq!(parsed.via, Some(Via::Other(EvalValue::Int(3))));

        let f = Callable::lambda("f", vec!["x".to_string()], json!(["$", "x"]));
        let parsed = parse_insert_kwargs(&[kw("via", f.clone())]).unwrap();
        assert_eq!(parsed.via, Some(Via::Callable(f)));
    }
}
