//! Embedded expression evaluator for overlay transform callables.
//!
//! # Overview
//!
//! Expressions are JSON arrays of the form `[operator, ...operands]`. A
//! function is written `["fn", [params...], body]` and is invoked through an
//! [`Evaluator`], normally a [`Thread`].
//!
//! # Example
//!
//! ```
//! use overlay_expression::{EvalValue, Evaluator, Thread};
//! use serde_json::json;
//!
//! let mut thread = Thread::new("example");
//! let double = thread.eval(&json!(["fn", ["x"], ["*", ["$", "x"], 2]])).unwrap();
//! let callable = double.as_callable().unwrap().clone();
//! let result = thread.call(&callable, &[EvalValue::Int(21)], &[]).unwrap();
//!
//! assert_eq!(result, EvalValue::Int(42));
//! ```

pub mod callable;
pub mod error;
pub mod eval_ctx;
pub mod evaluate;
pub mod operators;
pub mod thread;
pub mod types;
pub mod util;
pub mod value;

pub use callable::{BuiltinFn, Callable, Lambda};
pub use error::EvalError;
pub use eval_ctx::EvalCtx;
pub use evaluate::evaluate;
pub use operators::operators_map;
pub use thread::{Evaluator, Thread, DEFAULT_MAX_DEPTH};
pub use types::{Arity, OperatorDefinition, OperatorMap};
pub use value::EvalValue;
