//! Gate for admin content.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::notice::Notifications;
use crate::state::session::SessionStore;
use crate::util::auth::install_session_bootstrap;

/// Render `children` only once a user is logged in, fetching the current
/// user from the server when the session is empty.
#[component]
pub fn AdminGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notices = expect_context::<Notifications>();
    install_session_bootstrap(session, notices, use_navigate());

    view! {
        <div class="admin-guard">
            <Show when=move || session.is_logged_in()>{children()}</Show>
        </div>
    }
}
