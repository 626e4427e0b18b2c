//! Public-facing layout: header, home content, footer.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::location_listener::LocationListener;
use crate::components::site_header::SiteHeader;

#[component]
pub fn UserLayout() -> impl IntoView {
    view! {
        <div class="user-layout">
            <LocationListener/>
            <SiteHeader/>
            <div id="Wrapper">
                <div id="Content">
                    <Home/>
                </div>
            </div>
            <Footer/>
        </div>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <div class="home">
            <h2>"Welcome"</h2>
            <p>"Nothing has been published yet."</p>
        </div>
    }
}
