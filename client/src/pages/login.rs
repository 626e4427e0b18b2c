//! Login page with username + password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

#[cfg(feature = "hydrate")]
use crate::net::request::Notifier;
use crate::state::notice::Notifications;
use crate::state::session::SessionStore;

pub const NAME_REQUIRED: &str = "Please input your username!!!";
pub const PASS_REQUIRED: &str = "Please input your password!!!";

/// Per-field validation messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub pass: Option<&'static str>,
}

/// Check that both fields are filled; the username is trimmed, the password
/// is kept verbatim.
///
/// # Errors
///
/// Returns the message for every empty field.
pub fn validate_login_input(name: &str, pass: &str) -> Result<(String, String), FieldErrors> {
    let name = name.trim();
    let errors = FieldErrors {
        name: name.is_empty().then_some(NAME_REQUIRED),
        pass: pass.is_empty().then_some(PASS_REQUIRED),
    };
    if errors == FieldErrors::default() { Ok((name.to_owned(), pass.to_owned())) } else { Err(errors) }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notices = expect_context::<Notifications>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let pass = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, pass_value) = match validate_login_input(&name.get(), &pass.get()) {
            Ok(values) => values,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);
        leptos::logging::log!("login submitted: {name_value}");

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let user = crate::net::request::wrap_x::<String, _, _>(&notices, || {
                    crate::net::api::login(&name_value, &pass_value)
                })
                .await;
                if let Some(user) = user {
                    session.login(user);
                    notices.success("");
                    navigate(crate::pages::admin::ADMIN_HOME, NavigateOptions::default());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (pass_value, session, notices);
        }
    };

    view! {
        <div class="login-page">
            <header class="login-page__header site-layout-background"></header>
            <div class="login-card">
                <h1>"gframe"</h1>
                <p class="login-card__subtitle">"Admin sign in"</p>
                <form class="login-form" name="basic" on:submit=on_submit>
                    <label class="login-label">
                        "Username"
                        <input
                            class="login-input"
                            type="text"
                            name="Name"
                            autocomplete="username"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || errors.get().name.is_some()>
                        <p class="login-message login-message--error">
                            {move || errors.get().name.unwrap_or_default()}
                        </p>
                    </Show>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            name="Pass"
                            autocomplete="current-password"
                            prop:value=move || pass.get()
                            on:input=move |ev| pass.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || errors.get().pass.is_some()>
                        <p class="login-message login-message--error">
                            {move || errors.get().pass.unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
            </div>
        </div>
    }
}
