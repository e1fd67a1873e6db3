use overlay_expression::EvalError;
use thiserror::Error;

/// Errors raised while resolving an overlay annotation.
///
/// Evaluation failures from a `via` callable pass through untouched, so the
/// message the user sees is the evaluator's own.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OverlayError {
    /// The annotation is missing, empty, or has an unrecognized keyword.
    #[error("{0}")]
    Config(String),

    /// A keyword value, or the value a callable returned, has the wrong type.
    #[error("{0}")]
    TypeMismatch(String),

    #[error(transparent)]
    Evaluation(#[from] EvalError),
}

pub type OverlayResult<T> = Result<T, OverlayError>;
