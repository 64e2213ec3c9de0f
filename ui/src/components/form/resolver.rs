//! Resolution of raw JSON-Schema documents into the closed [`SchemaKind`]
//! variant tree.
//!
//! This is the only place that probes raw JSON by property name; everything
//! downstream dispatches by exhaustive `match`. Unsupported shapes never
//! produce an error return — they resolve to [`SchemaKind::Unsupported`]
//! carrying the raw document so the renderer can show them.

use serde_json::Value;

use super::types::{SchemaKind, SchemaNode};

/// Resolve one schema document (or sub-schema) into a node tree.
pub fn resolve_schema(schema: &Value) -> SchemaNode {
    let raw = schema.clone();

    let obj = match schema.as_object() {
        Some(obj) => obj,
        None => {
            // JSON-Schema's `true`/`false` shorthand, or plain garbage.
            let reason = schema
                .is_boolean()
                .then(|| "Boolean-valued schemas are not supported".to_string());
            return unsupported(raw, reason);
        }
    };

    let title = obj.get("title").and_then(|v| v.as_str()).map(String::from);
    let pattern = obj.get("pattern").and_then(|v| v.as_str()).map(String::from);
    let write_only = obj.get("writeOnly").and_then(|v| v.as_bool()).unwrap_or(false);

    let kind = match obj.get("type").and_then(|t| t.as_str()) {
        // Numeric types win over `enum`: the numeric input renders even when
        // an enum is declared, mirroring the scalar selection order.
        Some("integer") => SchemaKind::Integer,
        Some("number") => SchemaKind::Number,
        Some("string") => match obj.get("enum").and_then(|v| v.as_array()) {
            Some(members) => SchemaKind::Enum(members.clone()),
            None => SchemaKind::String,
        },
        Some("boolean") => SchemaKind::Boolean,
        Some("array") => resolve_array(schema),
        Some("object") => resolve_object(schema),
        // `null` and anything unrecognized fall through to the fallback.
        _ => SchemaKind::Unsupported { reason: None },
    };

    SchemaNode {
        title,
        pattern,
        write_only,
        raw,
        kind,
    }
}

fn unsupported(raw: Value, reason: Option<String>) -> SchemaNode {
    SchemaNode {
        title: None,
        pattern: None,
        write_only: false,
        raw,
        kind: SchemaKind::Unsupported { reason },
    }
}

/// Arrays support exactly one non-array `items` schema. Tuple-form `items`
/// and arrays of arrays degrade to the fallback.
fn resolve_array(schema: &Value) -> SchemaKind {
    let items = match schema.get("items") {
        Some(items) if items.is_object() => items,
        Some(items) if items.is_array() => {
            return SchemaKind::Unsupported {
                reason: Some("Tuple-form item schemas are not supported".to_string()),
            }
        }
        _ => return SchemaKind::Unsupported { reason: None },
    };

    if items.get("type").and_then(|t| t.as_str()) == Some("array") {
        return SchemaKind::Unsupported {
            reason: Some("Arrays of arrays are not supported".to_string()),
        };
    }

    SchemaKind::Array {
        items: Box::new(resolve_schema(items)),
        min_items: schema.get("minItems").and_then(|v| v.as_u64()),
        max_items: schema.get("maxItems").and_then(|v| v.as_u64()),
        unique_items: schema
            .get("uniqueItems")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
    }
}

/// Objects are only renderable when they enumerate their properties and do
/// not rely on `additionalProperties`.
fn resolve_object(schema: &Value) -> SchemaKind {
    match schema.get("additionalProperties") {
        None | Some(Value::Bool(false)) | Some(Value::Null) => {}
        Some(_) => {
            return SchemaKind::Unsupported {
                reason: Some("Schemas using additionalProperties are not supported".to_string()),
            }
        }
    }

    let props = match schema.get("properties").and_then(|v| v.as_object()) {
        Some(props) => props,
        None => return SchemaKind::Unsupported { reason: None },
    };

    // Map iteration preserves the document's insertion order; properties
    // render in the order the schema author wrote them.
    let properties = props
        .iter()
        .map(|(name, prop_schema)| (name.clone(), resolve_schema(prop_schema)))
        .collect();

    SchemaKind::Object { properties }
}

// ============================================================================
// Tests
// ============================================================================
