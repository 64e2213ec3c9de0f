//! Schema Playground: pick a sample schema, inspect it, and preview the
//! rendered form.

use leptos::prelude::*;
use leptos::web_sys;
use serde_json::Value;

use crate::api;
use crate::components::form::{Form, SchemaNode};

#[component]
pub fn Playground() -> impl IntoView {
    let (selected, set_selected) = signal(Option::<String>::None);

    let schemas = LocalResource::new(|| async move { api::list_schemas().await.ok() });

    let document = LocalResource::new(move || {
        let name = selected.get();
        async move {
            match name {
                Some(name) => api::get_schema(&name).await.ok(),
                None => None,
            }
        }
    });

    let on_submit = UnsyncCallback::new(|(values, _ev): (Value, web_sys::SubmitEvent)| {
        log::info!("Submitted form values: {}", values);
    });

    view! {
        <div class="p-6">
            <h1 class="w-full text-center text-2xl font-bold mb-4">"Schema Playground"</h1>

            <Suspense fallback=move || {
                view! { <div class="text-gray-500">"Loading..."</div> }
            }>
                {move || {
                    schemas
                        .get()
                        .map(|data| match data {
                            Some(list) => {
                                view! {
                                    <div class="grid gap-2 m-2 p-2 grid-cols-4 max-w-lg">
                                        {list
                                            .into_iter()
                                            .map(|summary| {
                                                let name = summary.name.clone();
                                                let checked = {
                                                    let name = name.clone();
                                                    move || selected.get().as_deref() == Some(name.as_str())
                                                };
                                                let on_change = {
                                                    let name = name.clone();
                                                    move |_| set_selected.set(Some(name.clone()))
                                                };
                                                view! {
                                                    <label class="flex items-center gap-1 px-2 py-1 border border-gray-300 rounded-md cursor-pointer">
                                                        <input
                                                            type="radio"
                                                            name="schema"
                                                            prop:checked=checked
                                                            on:change=on_change
                                                        />
                                                        {summary.name}
                                                    </label>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! { <div class="text-red-500">"Failed to load schemas"</div> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Suspense fallback=move || {
                view! { <div class="text-gray-500">"Loading..."</div> }
            }>
                {move || {
                    document
                        .get()
                        .and_then(|doc| doc)
                        .map(|schema| {
                            let pretty = serde_json::to_string_pretty(&schema)
                                .unwrap_or_default();
                            let node = SchemaNode::parse(&schema);
                            view! {
                                <div class="grid grid-cols-3 gap-2">
                                    <div class="w-full border border-gray-300 rounded p-2 overflow-auto">
                                        <h3 class="font-bold">"Schema"</h3>
                                        <pre class="text-sm"><code>{pretty}</code></pre>
                                    </div>
                                    <div class="w-full p-2 col-span-2">
                                        <h3 class="font-bold">"Preview"</h3>
                                        <Form
                                            node=node
                                            on_submit=on_submit
                                            after=|| {
                                                view! {
                                                    <button
                                                        type="submit"
                                                        class="mt-2 px-4 py-2 text-sm bg-blue-500 hover:bg-blue-600 text-white rounded-md"
                                                    >
                                                        "Submit"
                                                    </button>
                                                }
                                            }
                                        />
                                    </div>
                                </div>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
