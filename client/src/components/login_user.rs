//! Current-user widget with a logout button.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::notice::Notifications;
use crate::state::session::SessionStore;

/// Shows who is logged in; Logout ends the server session, then the local one.
#[component]
pub fn LoginUser() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notices = expect_context::<Notifications>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigator = crate::util::auth::router_navigator(navigate.clone());
            leptos::task::spawn_local(async move {
                let done =
                    crate::net::request::wrap_admin::<(), _, _>(&navigator, &notices, crate::net::api::logout).await;
                if done.is_some() {
                    session.logout();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = notices;
        }
    };

    view! {
        <div class="login-user">
            <span class="login-user__name">
                "LoginUser: "
                {move || session.username().unwrap_or_default()}
            </span>
            <button class="btn login-user__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </div>
    }
}
