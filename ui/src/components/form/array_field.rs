//! Array field rendering: a repeatable list bound to one array-valued
//! field, with move/remove controls per item and a staging sub-form for
//! composing new entries.

use leptos::prelude::*;
use leptos::web_sys;
use serde_json::{json, Value};

use super::container::{Form, Unsupported};
use super::store::FormStore;
use super::types::{FieldPath, SchemaKind, SchemaNode};
use super::validate::list_validator;

// ============================================================================
// Array Renderer
// ============================================================================

/// Renders a repeatable list of items bound at `path`.
///
/// The list field is registered with the store so uniqueness and length
/// bounds re-run on every mutation. Display index 0 is the bottom of the
/// list: moving an item "up" swaps it toward higher indices.
#[component]
pub fn ArrayFields(
    store: FormStore,
    node: SchemaNode,
    path: FieldPath,
    readonly: bool,
) -> impl IntoView {
    let SchemaKind::Array {
        items,
        min_items,
        max_items,
        unique_items,
    } = node.kind.clone()
    else {
        return view! {
            <span class="text-red-600">
                "Error: cannot render the following as an array."
                <Unsupported node=node />
            </span>
        }
        .into_any();
    };
    let items_node = *items;

    store.register_list(&path, list_validator(min_items, max_items, unique_items));

    let list = store.watch(&path);
    let entries = Memo::new(move |_| match list.get() {
        Value::Array(values) => values,
        _ => Vec::new(),
    });
    let error = {
        let path = path.clone();
        Memo::new(move |_| store.error_at(&path))
    };

    // The staging form composes one new entry in its own value tree, then
    // hands it over through a single append on the parent store.
    let staging_node = items_node.with_title("Add entry");
    let staging_path = FieldPath::root().push_property("entry");
    let on_stage = {
        let list_path = path.clone();
        UnsyncCallback::new(move |(values, _ev): (Value, web_sys::SubmitEvent)| {
            let staged = values.get("entry").cloned().unwrap_or(Value::Null);
            store.push(&list_path, staged);
        })
    };

    let items_for_rows = items_node.clone();
    let list_path = path.clone();

    view! {
        <div class="w-full">
            {move || {
                let values = entries.get();
                let count = values.len();
                if count == 0 {
                    view! { <span class="text-gray-500">"No items"</span> }.into_any()
                } else {
                    values
                        .into_iter()
                        .enumerate()
                        .map(|(idx, item)| {
                            let item_node = items_for_rows.clone();
                            // Scalar items live under a synthetic single-key
                            // record so the nested form has a property to bind.
                            let (initial, item_path) = if item_node.is_object() {
                                (item, FieldPath::root())
                            } else {
                                (json!({ "": item }), FieldPath::root().push_property(""))
                            };
                            view! {
                                <ValueDisplay
                                    store=store
                                    path=list_path.clone()
                                    idx=idx
                                    of=count
                                    readonly=readonly
                                >
                                    <Form
                                        node=item_node
                                        initial_values=initial
                                        initial_path=item_path
                                        readonly=true
                                    />
                                </ValueDisplay>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <span class="block text-xs font-bold text-red-600 mt-1">{message}</span>
                        }
                    })
            }}
            {(!readonly)
                .then(|| {
                    view! {
                        <div class="px-2 w-full">
                            <Form
                                node=staging_node.clone()
                                initial_path=staging_path.clone()
                                on_submit=on_stage
                                before=|| {
                                    view! {
                                        <button
                                            type="submit"
                                            class="px-3 py-1 text-sm border border-gray-300 rounded-md hover:bg-gray-100"
                                        >
                                            "Add ↑"
                                        </button>
                                    }
                                }
                            />
                        </div>
                    }
                })}
        </div>
    }
    .into_any()
}

// ============================================================================
// Value Display
// ============================================================================

/// Row chrome around one array element: the rendered value plus the
/// move/remove controls addressed by display index. Boundary moves are
/// no-ops by disable: the top item cannot move further up, the bottom item
/// cannot move further down.
#[component]
fn ValueDisplay(
    store: FormStore,
    path: FieldPath,
    idx: usize,
    of: usize,
    readonly: bool,
    children: Children,
) -> impl IntoView {
    let top_most = idx + 1 == of;
    let bottom_most = idx == 0;

    let move_up = {
        let path = path.clone();
        move |_| {
            if idx + 1 < of {
                store.swap(&path, idx, idx + 1);
            }
        }
    };
    let move_down = {
        let path = path.clone();
        move |_| {
            if idx > 0 {
                store.swap(&path, idx, idx - 1);
            }
        }
    };
    let remove = {
        let path = path.clone();
        move |_| store.remove(&path, idx)
    };

    view! {
        <div class="flex w-full items-center gap-2">
            {children()}
            <button
                type="button"
                class="px-2 py-1 text-sm border border-gray-300 rounded-md"
                on:click=move_up
                disabled=readonly || top_most
            >
                "↑"
            </button>
            <button
                type="button"
                class="px-2 py-1 text-sm border border-gray-300 rounded-md"
                on:click=move_down
                disabled=readonly || bottom_most
            >
                "↓"
            </button>
            <button
                type="button"
                class="px-2 py-1 text-sm border border-red-300 text-red-600 rounded-md"
                on:click=remove
                disabled=readonly
            >
                "x"
            </button>
        </div>
    }
}
