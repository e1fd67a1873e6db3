use crate::error::EvalError;
use crate::thread::Thread;
use crate::value::EvalValue;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Signature of a host-provided function exposed to the evaluator.
///
/// Receives the calling thread so that it can re-enter the evaluator or touch
/// evaluator-visible globals.
pub type BuiltinFn = dyn Fn(&mut Thread, &[EvalValue], &[(String, EvalValue)]) -> Result<EvalValue, EvalError>
    + Send
    + Sync;

/// A function defined in the expression language: named positional
/// parameters and an unevaluated body.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub name: String,
    pub params: Vec<String>,
    pub body: Value,
}

/// A value that can be invoked through [`crate::Evaluator::call`].
#[derive(Clone)]
pub enum Callable {
    Builtin { name: String, func: Arc<BuiltinFn> },
    Lambda(Arc<Lambda>),
}

impl Callable {
    pub fn builtin<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut Thread, &[EvalValue], &[(String, EvalValue)]) -> Result<EvalValue, EvalError>
            + Send
            + Sync
            + 'static,
    {
        Callable::Builtin {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn lambda(name: impl Into<String>, params: Vec<String>, body: Value) -> Self {
        Callable::Lambda(Arc::new(Lambda {
            name: name.into(),
            params,
            body,
        }))
    }

    pub fn name(&self) -> &str {
        match self {
            Callable::Builtin { name, .. } => name,
            Callable::Lambda(l) => &l.name,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Callable::Builtin { .. } => "builtin_function_or_method",
            Callable::Lambda(_) => "function",
        }
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Callable::Builtin { func: a, .. }, Callable::Builtin { func: b, .. }) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (Callable::Lambda(a), Callable::Lambda(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", self.type_name(), self.name())
    }
}
