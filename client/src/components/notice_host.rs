//! Stack of transient success/error banners.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by the root `App`; renders whatever the request wrappers and
//! pages pushed into the `Notifications` context.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, Notifications};

/// Fixed-position banner stack, newest at the bottom.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = expect_context::<Notifications>();

    view! {
        <div class="notice-host" role="status" aria-live="polite">
            {move || {
                notices
                    .items()
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        let class = match notice.kind {
                            NoticeKind::Success => "notice notice--success",
                            NoticeKind::Error => "notice notice--error",
                        };
                        view! {
                            <div class=class>
                                <div class="notice__title">{notice.kind.title()}</div>
                                <div class="notice__description">{notice.description}</div>
                                <button
                                    class="notice__close"
                                    title="Dismiss"
                                    aria-label="Dismiss"
                                    on:click=move |_| notices.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
