//! Scalar field rendering: the selection logic and the labeled widgets it
//! binds.

use leptos::prelude::*;
use leptos::web_sys;
use serde_json::Value;
use wasm_bindgen::JsCast;

use super::container::Unsupported;
use super::store::FormStore;
use super::types::{FieldPath, SchemaKind, SchemaNode};
use super::validate::pattern_validator;

// ============================================================================
// Scalar Renderer
// ============================================================================

/// Renders one leaf schema as a bound input.
///
/// Selection order, first match wins: numeric types, enum substitution,
/// password masking for write-only fields, plain text. Pattern validation
/// attaches to every free-text branch; the enum select is exempt because a
/// closed option list cannot produce a violating value.
#[component]
pub fn ScalarField(
    store: FormStore,
    node: SchemaNode,
    path: FieldPath,
    readonly: bool,
) -> impl IntoView {
    let label = node.label_for(&path);

    if let Some(pattern) = &node.pattern {
        if !matches!(node.kind, SchemaKind::Enum(_)) {
            store.register_validator(&path, pattern_validator(pattern));
        }
    }

    match node.kind.clone() {
        SchemaKind::Integer | SchemaKind::Number => view! {
            <TextInput store=store path=path label=label numeric=true readonly=readonly />
        }
        .into_any(),
        SchemaKind::Enum(options) => view! {
            <EnumSelect store=store path=path label=label options=options readonly=readonly />
        }
        .into_any(),
        SchemaKind::String if node.write_only => view! {
            <TextInput store=store path=path label=label input_type="password" readonly=readonly />
        }
        .into_any(),
        SchemaKind::String => view! {
            <TextInput store=store path=path label=label readonly=readonly />
        }
        .into_any(),
        _ => view! {
            <span class="text-red-600">
                "Error: cannot render the following as a text input."
                <Unsupported node=node />
            </span>
        }
        .into_any(),
    }
}

// ============================================================================
// Text Input
// ============================================================================

/// Labeled text control bound to one field path. The value is stored as a
/// JSON string even in numeric mode: the control is a numeric-mode text
/// input, and the collected tree keeps exactly what was typed.
#[component]
pub fn TextInput(
    store: FormStore,
    path: FieldPath,
    label: String,
    #[prop(optional)] numeric: bool,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] readonly: bool,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] placeholder: Option<String>,
) -> impl IntoView {
    let value = store.watch(&path);
    let error = {
        let path = path.clone();
        Memo::new(move |_| store.error_at(&path))
    };

    let on_input = {
        let path = path.clone();
        move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let input: web_sys::HtmlInputElement = target.dyn_into().unwrap();
            store.set(&path, Value::String(input.value()));
        }
    };

    let placeholder = placeholder.unwrap_or_else(|| label.clone());
    let display = move || match value.get() {
        Value::String(s) => s,
        Value::Null => String::new(),
        // Numbers and booleans from initial values render as typed text.
        other => other.to_string(),
    };

    view! {
        <label class="block w-full mb-2">
            <span class="block text-sm text-gray-700 mb-1">{label}</span>
            <input
                type=input_type
                class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                inputmode=numeric.then_some("numeric")
                pattern=numeric.then_some("[0-9.]*")
                placeholder=placeholder
                readonly=readonly
                disabled=disabled
                prop:value=display
                on:input=on_input
            />
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <span class="block text-xs font-bold text-red-600 mt-1">{message}</span>
                        }
                    })
            }}
        </label>
    }
}

// ============================================================================
// Enum Select
// ============================================================================

/// Select control for enum-constrained fields. Only string members become
/// real options; anything else renders an inert "unhandled" marker.
#[component]
pub fn EnumSelect(
    store: FormStore,
    path: FieldPath,
    label: String,
    options: Vec<Value>,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    let value = store.watch(&path);

    let on_change = {
        let path = path.clone();
        move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let select: web_sys::HtmlSelectElement = target.dyn_into().unwrap();
            store.set(&path, Value::String(select.value()));
        }
    };

    view! {
        <label class="block w-full mb-2">
            <span class="block text-sm text-gray-700 mb-1">{label.clone()}</span>
            <select
                aria-label=label
                class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md"
                disabled=readonly
                prop:value=move || match value.get() {
                    Value::String(s) => s,
                    _ => String::new(),
                }
                on:change=on_change
            >
                {options
                    .into_iter()
                    .map(|member| match member {
                        Value::String(option) => {
                            view! { <option value=option.clone()>{option}</option> }.into_any()
                        }
                        _ => view! {
                            <option disabled class="text-red-600">"Item spec unhandled"</option>
                        }
                        .into_any(),
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
