//! Top bar for the public layout.

use leptos::prelude::*;

use crate::pages::admin::ADMIN_HOME;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <div id="Top">
            <a href="/" class="top__brand">"WebSiteName"</a>
            <span class="top__spacer"></span>
            <a href="/p" class="top__link">"Posts"</a>
            <a href=ADMIN_HOME class="top__link">"Admin"</a>
        </div>
    }
}
