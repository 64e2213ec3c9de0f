//! Schema-driven form rendering.
//!
//! Walks a resolved JSON-Schema tree and produces bound Leptos controls:
//! scalar inputs with pattern validation, enum selects, object property
//! groups, and repeatable arrays with move/remove controls and a staging
//! sub-form for composing new entries.
//!
//! Entry points: [`SchemaNode::parse`] to resolve a raw schema document and
//! the [`Form`] component to render it.

pub mod array_field;
pub mod container;
pub mod fields;
pub mod resolver;
pub mod store;
pub mod types;
pub mod validate;

pub use container::{Form, SchemaFields, Unsupported};
pub use store::{FieldValidator, FormStore};
pub use types::{FieldPath, PathSegment, SchemaKind, SchemaNode};
