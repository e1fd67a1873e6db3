use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("{0}")]
    ArityError(String),

    #[error("Unknown expression: {0}")]
    UnknownExpression(String),

    #[error("NOT_FOUND")]
    NotFound,

    #[error("value of type '{0}' is not callable")]
    NotCallable(&'static str),

    #[error("{0}")]
    TypeError(String),

    #[error("varname must be a string.")]
    VarnameMustBeString,

    #[error("{0}")]
    Thrown(String),

    #[error("evaluation exceeded step limit of {0}")]
    StepLimitExceeded(usize),

    #[error("evaluation cancelled")]
    Cancelled,

    #[error("maximum call depth of {0} exceeded")]
    RecursionLimit(usize),
}
