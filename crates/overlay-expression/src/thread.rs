//! The shared execution context callables run on.

use crate::callable::{Callable, Lambda};
use crate::error::EvalError;
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::operators::operators_map;
use crate::types::OperatorMap;
use crate::value::EvalValue;
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::trace;

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Invokes callables. The overlay engine only ever talks to the evaluator
/// through this trait, so tests can substitute a stub.
pub trait Evaluator {
    fn call(
        &mut self,
        callable: &Callable,
        args: &[EvalValue],
        kwargs: &[(String, EvalValue)],
    ) -> Result<EvalValue, EvalError>;
}

/// Evaluator state shared by every call made during one evaluation run.
///
/// Globals are visible to (and mutable by) every callable running on the
/// thread. The step budget and the cancellation flag are the only ways to
/// bound a run; both are off unless configured.
pub struct Thread {
    name: String,
    operators: Arc<OperatorMap>,
    globals: IndexMap<String, EvalValue>,
    max_steps: Option<usize>,
    steps: usize,
    max_depth: usize,
    depth: usize,
    cancelled: Arc<AtomicBool>,
}

impl Thread {
    pub fn new(name: impl Into<String>) -> Self {
        Thread {
            name: name.into(),
            operators: Arc::new(operators_map()),
            globals: IndexMap::new(),
            max_steps: None,
            steps: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            depth: 0,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Fails any evaluation once `max_steps` expression nodes have been visited.
    pub fn with_step_limit(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn operators(&self) -> &OperatorMap {
        &self.operators
    }

    /// Flag that, once set from anywhere, makes the next evaluation step fail
    /// with [`EvalError::Cancelled`].
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    pub fn global(&self, name: &str) -> Option<&EvalValue> {
        self.globals.get(name)
    }

    pub fn set_global(&mut self, name: impl Into<String>, value: EvalValue) {
        self.globals.insert(name.into(), value);
    }

    /// Evaluates a top-level expression with no bound parameters.
    pub fn eval(&mut self, expr: &Value) -> Result<EvalValue, EvalError> {
        let locals = IndexMap::new();
        let mut ctx = EvalCtx::new(self, &locals);
        evaluate(expr, &mut ctx)
    }

    pub(crate) fn tick(&mut self) -> Result<(), EvalError> {
        if self.cancelled.load(Ordering::Relaxed) {
            return Err(EvalError::Cancelled);
        }
        self.steps += 1;
        match self.max_steps {
            Some(max) if self.steps > max => Err(EvalError::StepLimitExceeded(max)),
            _ => Ok(()),
        }
    }

    fn call_lambda(
        &mut self,
        lambda: &Lambda,
        args: &[EvalValue],
        kwargs: &[(String, EvalValue)],
    ) -> Result<EvalValue, EvalError> {
        if args.len() > lambda.params.len() {
            return Err(EvalError::ArityError(format!(
                "function {} accepts at most {} positional arguments ({} given)",
                lambda.name,
                lambda.params.len(),
                args.len()
            )));
        }
        let mut locals: IndexMap<String, EvalValue> = lambda
            .params
            .iter()
            .cloned()
            .zip(args.iter().cloned())
            .collect();
        for (key, value) in kwargs {
            if !lambda.params.contains(key) {
                return Err(EvalError::ArityError(format!(
                    "function {} got an unexpected keyword argument '{}'",
                    lambda.name, key
                )));
            }
            if locals.insert(key.clone(), value.clone()).is_some() {
                return Err(EvalError::ArityError(format!(
                    "function {} got multiple values for parameter '{}'",
                    lambda.name, key
                )));
            }
        }
        if let Some(missing) = lambda.params.iter().find(|p| !locals.contains_key(*p)) {
            return Err(EvalError::ArityError(format!(
                "function {} missing 1 argument ({})",
                lambda.name, missing
            )));
        }
        let mut ctx = EvalCtx::new(self, &locals);
        evaluate(&lambda.body, &mut ctx)
    }
}

impl Evaluator for Thread {
    fn call(
        &mut self,
        callable: &Callable,
        args: &[EvalValue],
        kwargs: &[(String, EvalValue)],
    ) -> Result<EvalValue, EvalError> {
        trace!(thread = %self.name, callable = callable.name(), depth = self.depth, "call");
        if self.depth >= self.max_depth {
            return Err(EvalError::RecursionLimit(self.max_depth));
        }
        self.depth += 1;
        let result = match callable {
            Callable::Builtin { func, .. } => func(self, args, kwargs),
            Callable::Lambda(lambda) => self.call_lambda(lambda, args, kwargs),
        };
        self.depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identity() -> Callable {
        Callable::lambda("identity", vec!["x".to_string()], json!(["$", "x"]))
    }

    #[test]
    fn test_lambda_positional() {
        let mut thread = Thread::new("test");
        let out = thread.call(&identity(), &[EvalValue::Int(7)], &[]).unwrap();
        assert_eq!(out, EvalValue::Int(7));
        assert_eq!(thread.depth, 0);
    }

    #[test]
    fn test_lambda_keyword() {
        let mut thread = Thread::new("test");
        let kwargs = vec![("x".to_string(), EvalValue::from("kw"))];
        let out = thread.call(&identity(), &[], &kwargs).unwrap();
        assert_eq!(out, EvalValue::from("kw"));
    }

    #[test]
    fn test_lambda_arity_errors() {
        let mut thread = Thread::new("test");
        let err = thread
            .call(&identity(), &[EvalValue::None, EvalValue::None], &[])
            .unwrap_err();
        assert!(err.to_string().contains("at most 1"), "got: {}", err);

        let err = thread.call(&identity(), &[], &[]).unwrap_err();
        assert!(err.to_string().contains("missing 1 argument (x)"), "got: {}", err);

        let kwargs = vec![("y".to_string(), EvalValue::None)];
        let err = thread.call(&identity(), &[EvalValue::None], &kwargs).unwrap_err();
        assert!(err.to_string().contains("unexpected keyword argument 'y'"));

        let kwargs = vec![("x".to_string(), EvalValue::None)];
        let err = thread.call(&identity(), &[EvalValue::None], &kwargs).unwrap_err();
        assert!(err.to_string().contains("multiple values"));
        assert_eq!(thread.depth, 0);
    }

    #[test]
    fn test_builtin_sees_thread() {
        let mut thread = Thread::new("test");
        thread.set_global("count", EvalValue::Int(1));
        let bump = Callable::builtin("bump", |t: &mut Thread, _: &[EvalValue], _: &[(String, EvalValue)]| {
            let next = match t.global("count") {
                Some(EvalValue::Int(n)) => n + 1,
                _ => 0,
            };
            t.set_global("count", EvalValue::Int(next));
            Ok(EvalValue::Int(next))
        });
        thread.call(&bump, &[], &[]).unwrap();
        thread.call(&bump, &[], &[]).unwrap();
        assert_eq!(thread.global("count"), Some(&EvalValue::Int(3)));
    }

    #[test]
    fn test_step_limit() {
        let mut thread = Thread::new("test").with_step_limit(3);
        let err = thread.eval(&json!(["+", 1, ["+", 2, 3], 4])).unwrap_err();
        assert_eq!(err, EvalError::StepLimitExceeded(3));
    }

    #[test]
    fn test_cancellation() {
        let mut thread = Thread::new("test");
        thread.cancel_handle().store(true, Ordering::Relaxed);
        assert_eq!(thread.eval(&json!(1)).unwrap_err(), EvalError::Cancelled);
    }

    #[test]
    fn test_recursion_limit() {
        let mut thread = Thread::new("test").with_max_depth(8);
        let rec = Callable::lambda(
            "rec",
            vec!["x".to_string()],
            json!(["call", ["global", "rec"], ["$", "x"]]),
        );
        thread.set_global("rec", EvalValue::Callable(rec.clone()));
        let err = thread.call(&rec, &[EvalValue::None], &[]).unwrap_err();
        assert_eq!(err, EvalError::RecursionLimit(8));
        assert_eq!(thread.depth, 0);
    }
}
