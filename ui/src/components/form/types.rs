//! Core types for schema-driven form rendering: field paths and the
//! resolved schema tree.

use serde_json::Value;
use std::fmt;

// ============================================================================
// Field Path
// ============================================================================

/// Segment of a field path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object property access.
    Property(String),
    /// Array index access.
    Index(usize),
}

/// Ordered list of keys locating one bound value inside a form's value tree.
///
/// Paths are append-only: recursion into objects and arrays builds new paths
/// with [`push_property`](FieldPath::push_property) /
/// [`push_index`](FieldPath::push_index) and never mutates an existing one.
/// The dot-joined display form (`jobs.0.name`) is the bound field's name and
/// the default label for untitled schemas.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Create a root path (empty).
    pub fn root() -> Self {
        Self { segments: vec![] }
    }

    /// Check if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// New path with a property segment appended.
    pub fn push_property(&self, name: &str) -> Self {
        let mut new = self.clone();
        new.segments.push(PathSegment::Property(name.to_string()));
        new
    }

    /// New path with an array index segment appended.
    pub fn push_index(&self, idx: usize) -> Self {
        let mut new = self.clone();
        new.segments.push(PathSegment::Index(idx));
        new
    }

    /// The segments, in order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// True when `self` locates `other` or one of `other`'s ancestors.
    pub fn is_prefix_of(&self, other: &FieldPath) -> bool {
        other.segments.len() >= self.segments.len()
            && self.segments.iter().zip(other.segments.iter()).all(|(a, b)| a == b)
    }

    /// True when one of the two paths contains the other.
    pub fn is_related_to(&self, other: &FieldPath) -> bool {
        self.is_prefix_of(other) || other.is_prefix_of(self)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            match segment {
                PathSegment::Property(name) => write!(f, "{}", name)?,
                PathSegment::Index(idx) => write!(f, "{}", idx)?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// Schema Node
// ============================================================================

/// One resolved schema declaration, possibly nested.
///
/// `raw` keeps the source document so unsupported shapes stay inspectable
/// in the rendered fallback.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaNode {
    pub title: Option<String>,
    pub pattern: Option<String>,
    pub write_only: bool,
    pub raw: Value,
    pub kind: SchemaKind,
}

/// Closed set of shapes the renderer dispatches over.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaKind {
    String,
    Integer,
    Number,
    /// Boolean inputs render as a placeholder marker, not a control.
    Boolean,
    /// Enum-constrained field; members keep their raw JSON form because
    /// non-string members render as an inert option.
    Enum(Vec<Value>),
    Object {
        properties: Vec<(String, SchemaNode)>,
    },
    Array {
        items: Box<SchemaNode>,
        min_items: Option<u64>,
        max_items: Option<u64>,
        unique_items: bool,
    },
    /// Recognized-but-unrenderable shape; shown via the fallback.
    Unsupported { reason: Option<String> },
}

impl SchemaNode {
    /// Resolve a raw JSON-Schema document into a node tree.
    pub fn parse(schema: &Value) -> Self {
        super::resolver::resolve_schema(schema)
    }

    /// Type tag for display purposes.
    pub fn type_name(&self) -> &'static str {
        match &self.kind {
            SchemaKind::String => "string",
            SchemaKind::Integer => "integer",
            SchemaKind::Number => "number",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Enum(_) => "enum",
            SchemaKind::Object { .. } => "object",
            SchemaKind::Array { .. } => "array",
            SchemaKind::Unsupported { .. } => "unsupported",
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(&self.kind, SchemaKind::Object { .. })
    }

    /// Copy of this node with the title replaced.
    pub fn with_title(&self, title: &str) -> Self {
        let mut new = self.clone();
        new.title = Some(title.to_string());
        new
    }

    /// Label for a control bound at `path`: the schema title, or the
    /// dot-joined path when the schema has none.
    pub fn label_for(&self, path: &FieldPath) -> String {
        self.title.clone().unwrap_or_else(|| path.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
