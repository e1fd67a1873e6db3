//! Insert-annotation resolution for JSON document overlays.
//!
//! An overlay item annotated with `overlay/insert` is turned into an
//! [`InsertDirective`]: `before`/`after` placement flags plus an optional
//! `via` callable. The merge engine reads the flags to decide placement and
//! calls [`InsertDirective::value`] to get the JSON value to splice in.
//!
//! # Example
//!
//! ```
//! use json_overlay::{Annotation, InsertDirective, Node, ANNOTATION_INSERT};
//! use overlay_expression::Thread;
//! use serde_json::json;
//!
//! let item = Node::new(json!({"name": "sidecar"}))
//!     .annotate(ANNOTATION_INSERT, Annotation::new().kwarg("after", true));
//! let directive = InsertDirective::new(&item).unwrap();
//!
//! let mut thread = Thread::new("overlay");
//! assert!(directive.is_after());
//! assert_eq!(directive.value(None, &mut thread).unwrap(), json!({"name": "sidecar"}));
//! ```

pub mod annotation;
pub mod error;
pub mod insert;
pub mod kwargs;
pub mod node;
pub mod options;
pub mod resolve;

pub use annotation::{Annotation, Annotations, Kwarg, ANNOTATION_INSERT};
pub use error::{OverlayError, OverlayResult};
pub use insert::InsertDirective;
pub use kwargs::{parse_insert_kwargs, InsertKwargs, KWARG_AFTER, KWARG_BEFORE, KWARG_VIA};
pub use node::Node;
pub use options::InsertOptions;
pub use resolve::Via;
