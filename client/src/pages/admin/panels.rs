//! Admin content panels.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::util::format::{format_size, to_int};

/// Name and human-readable size of a picked file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub size: String,
}

#[component]
pub fn ImageUploadPage() -> impl IntoView {
    let picked = RwSignal::new(Vec::<PickedFile>::new());

    let on_change = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::Event| {
                use wasm_bindgen::JsCast;

                let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                    return;
                };
                let Some(files) = input.files() else {
                    return;
                };
                let mut next = Vec::new();
                for index in 0..files.length() {
                    if let Some(file) = files.get(index) {
                        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                        let bytes = file.size() as u64;
                        next.push(PickedFile { name: file.name(), size: format_size(bytes) });
                    }
                }
                picked.set(next);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {
                let _ = format_size;
            }
        }
    };

    view! {
        <section class="panel panel--upload">
            <h2>"Image Upload"</h2>
            <input class="panel__file" type="file" accept="image/*" multiple on:change=on_change/>
            <ul class="panel__files">
                {move || {
                    picked
                        .get()
                        .into_iter()
                        .map(|file| {
                            view! {
                                <li>
                                    <span class="panel__file-name">{file.name}</span>
                                    " "
                                    <span class="panel__file-size">{file.size}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}

#[component]
pub fn ImageManagePage() -> impl IntoView {
    view! {
        <section class="panel panel--images">
            <h2>"Image Management"</h2>
            <p>"No images yet."</p>
        </section>
    }
}

#[component]
pub fn DataManagePage() -> impl IntoView {
    let query = use_query_map();
    let page = move || to_int(query.with(|q| q.get("page")).as_deref(), Some(1)).unwrap_or(1);

    view! {
        <section class="panel panel--data">
            <h2>"Data Management"</h2>
            <p class="panel__page">"Page " {page}</p>
        </section>
    }
}
