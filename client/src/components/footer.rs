//! Site-wide footer for the public layout.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <div id="Bottom">
            <div class="bt">
                <div class="bt-top">
                    <span class="bt-top-txt">"About"</span>
                    <span class="bt-top-txt">"Contact"</span>
                </div>
                <div class="bt-top">"gframe"</div>
            </div>
            <div class="bt">"©2021 WebSiteName"</div>
        </div>
    }
}
