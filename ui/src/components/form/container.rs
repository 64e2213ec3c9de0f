//! The form container, the schema dispatcher, and the object renderer.

use leptos::prelude::*;
use leptos::web_sys;
use serde_json::Value;

use super::array_field::ArrayFields;
use super::fields::ScalarField;
use super::store::FormStore;
use super::types::{FieldPath, SchemaKind, SchemaNode};

// ============================================================================
// Form Container
// ============================================================================

/// Submission boundary around a rendered schema.
///
/// Each `Form` owns its own [`FormStore`]; the nested forms created by the
/// array renderer (item display, the staging sub-form) are fully isolated
/// from the parent's value tree and talk back only through the list
/// operations wired into their handlers.
#[component]
pub fn Form(
    /// Resolved schema to render.
    node: SchemaNode,
    /// Initial value tree; defaults to an empty object.
    #[prop(optional)] initial_values: Option<Value>,
    /// Invoked with the collected value tree and the submit event.
    #[prop(optional)] on_submit: Option<UnsyncCallback<(Value, web_sys::SubmitEvent)>>,
    /// Path the schema root is bound at inside the value tree.
    #[prop(optional)] initial_path: Option<FieldPath>,
    /// Decorative slot rendered before the field tree.
    #[prop(optional, into)] before: ViewFn,
    /// Decorative slot rendered after the field tree.
    #[prop(optional, into)] after: ViewFn,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    let store = FormStore::new(initial_values.unwrap_or_else(|| Value::Object(Default::default())));
    let path = initial_path.unwrap_or_default();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Nested forms live inside the parent's <form> element; keep their
        // submissions from bubbling into the parent's handler.
        ev.stop_propagation();
        if let Some(handler) = on_submit.as_ref() {
            handler.run((store.values(), ev));
        }
    };

    view! {
        <form class="w-full" on:submit=submit>
            {before.run()}
            <SchemaFields store=store node=node path=path readonly=readonly />
            {after.run()}
        </form>
    }
}

// ============================================================================
// Schema Dispatcher
// ============================================================================

/// Selects the renderer for a schema node. Pure dispatch over the closed
/// variant set; every branch degrades locally, so a malformed subtree never
/// takes the rest of the form down.
#[component]
pub fn SchemaFields(
    store: FormStore,
    node: SchemaNode,
    path: FieldPath,
    readonly: bool,
) -> impl IntoView {
    match node.kind.clone() {
        // Placeholder marker; boolean controls are not implemented.
        SchemaKind::Boolean => view! { <span class="text-gray-500">"bool"</span> }.into_any(),
        SchemaKind::String | SchemaKind::Integer | SchemaKind::Number | SchemaKind::Enum(_) => {
            view! { <ScalarField store=store node=node path=path readonly=readonly /> }.into_any()
        }
        SchemaKind::Array { .. } => {
            view! { <ArrayFields store=store node=node path=path readonly=readonly /> }.into_any()
        }
        SchemaKind::Object { .. } => {
            view! { <ObjectFields store=store node=node path=path readonly=readonly /> }.into_any()
        }
        SchemaKind::Unsupported { reason } => match reason {
            Some(message) => view! { <Unsupported node=node error=message /> }.into_any(),
            None => view! { <Unsupported node=node /> }.into_any(),
        },
    }
}

// ============================================================================
// Unsupported fallback
// ============================================================================

/// Fallback for schema shapes the renderer does not handle: shows the raw
/// schema so the problem stays inspectable instead of silently dropped.
#[component]
pub fn Unsupported(node: SchemaNode, #[prop(optional)] error: Option<String>) -> impl IntoView {
    let type_label = node
        .raw
        .get("type")
        .cloned()
        .unwrap_or(Value::Null)
        .to_string();
    let raw = serde_json::to_string_pretty(&node.raw).unwrap_or_default();

    view! {
        <div>
            {error.map(|message| view! { <div class="font-bold text-red-600">{message}</div> })}
            <span>
                "Invalid or unsupported schema entry of type: "
                <b>{type_label}</b>
            </span>
            <pre class="text-xs bg-gray-100 rounded p-2 overflow-auto">
                <code>{raw}</code>
            </pre>
        </div>
    }
}

// ============================================================================
// Object Renderer
// ============================================================================

/// Renders an object schema's properties in document order, recursing into
/// the dispatcher with the property name appended to the path.
#[component]
pub fn ObjectFields(
    store: FormStore,
    node: SchemaNode,
    path: FieldPath,
    readonly: bool,
) -> impl IntoView {
    let SchemaKind::Object { properties } = node.kind.clone() else {
        return view! {
            <span class="text-red-600">
                "Error: cannot render the following as an object."
                <Unsupported node=node />
            </span>
        }
        .into_any();
    };

    let indent = path.depth() * 2;
    view! {
        <div class="w-full">
            {properties
                .into_iter()
                .map(|(name, prop)| {
                    let child_path = path.push_property(&name);
                    view! {
                        <div
                            class="w-full grid grid-cols-1 gap-1"
                            style=format!("padding-left: {}rem", indent)
                        >
                            <span class="text-sm text-gray-700">{name}</span>
                            <SchemaFields
                                store=store
                                node=prop
                                path=child_path
                                readonly=readonly
                            />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
