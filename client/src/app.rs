//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! The leptos router only owns two catch-all routes so SSR route discovery
//! sees every path. Page composition happens in `NestRoute` over
//! `ROOT_ROUTES`, whose admin entry hands `ADMIN_ROUTES` down to the admin
//! shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::nest_route::{NestRoute, RouteDescriptor};
use crate::components::notice_host::NoticeHost;
use crate::net::request::LOGIN_PATH;
use crate::pages::admin::layout::AdminLayout;
use crate::pages::admin::{ADMIN_HOME, ADMIN_ROUTES};
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::user_layout::UserLayout;
use crate::state::notice::Notifications;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;

/// Top-level route table; order matters, the last entry is the 404 fallback.
pub const ROOT_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::exact("/", render_user_layout),
    RouteDescriptor::exact("/p", render_user_layout),
    RouteDescriptor::prefix(ADMIN_HOME, render_admin_layout).with_children(ADMIN_ROUTES),
    RouteDescriptor::exact(LOGIN_PATH, render_login),
    RouteDescriptor::prefix("/", render_not_found),
];

fn render_user_layout(_: &'static [RouteDescriptor]) -> AnyView {
    view! { <UserLayout/> }.into_any()
}

fn render_admin_layout(children: &'static [RouteDescriptor]) -> AnyView {
    view! { <AdminLayout routes=children/> }.into_any()
}

fn render_login(_: &'static [RouteDescriptor]) -> AnyView {
    view! { <LoginPage/> }.into_any()
}

fn render_not_found(_: &'static [RouteDescriptor]) -> AnyView {
    view! { <NotFoundPage/> }.into_any()
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
fn RootOutlet() -> impl IntoView {
    view! { <NestRoute routes=ROOT_ROUTES/> }
}

/// Root application component.
///
/// Provides the session, notification, and UI contexts and mounts the
/// notification host above the routed content.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionStore::new());
    provide_context(Notifications::new());
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Title text="gframe"/>

        <Router>
            <NoticeHost/>
            <div id="main">
                <Routes fallback=|| view! { <RootOutlet/> }>
                    <Route path=StaticSegment("") view=RootOutlet/>
                    <Route path=WildcardSegment("any") view=RootOutlet/>
                </Routes>
            </div>
        </Router>
    }
}
