//! Admin shell: collapsible sider menu, header with the current user, nested
//! content area, footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the root route table for everything under `/ad`. The content
//! area is another `NestRoute` over the table handed down by the parent.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::guard::AdminGuard;
use crate::components::login_user::LoginUser;
use crate::components::nest_route::{NestRoute, RouteDescriptor, path_matches};
use crate::state::ui::UiState;

pub const FOOTER_TEXT: &str = "shadiaotu ©2021 Created by wd";

/// One sider entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
}

pub const MENU: &[MenuItem] = &[
    MenuItem { key: "1", label: "Image Upload", icon: "⇪", path: "/ad/page1" },
    MenuItem { key: "2", label: "Image Management", icon: "▦", path: "/ad/page2" },
    MenuItem { key: "3", label: "Data Management", icon: "☰", path: "/ad/page3" },
];

/// Route path for a menu key.
#[must_use]
pub fn menu_target(key: &str) -> Option<&'static str> {
    MENU.iter().find(|item| item.key == key).map(|item| item.path)
}

/// Handle a click on menu `key`: select it and return the route to open.
/// Unknown keys leave the selection alone and open nothing.
pub fn select_menu(ui: &mut UiState, key: &str) -> Option<&'static str> {
    let target = menu_target(key)?;
    ui.select(key);
    Some(target)
}

/// Menu key owning `path`, if any.
#[must_use]
pub fn menu_key_for_path(path: &str) -> Option<&'static str> {
    MENU.iter().find(|item| path_matches(item.path, false, path)).map(|item| item.key)
}

/// Sider menu; a click resolves its key through `select_menu` and navigates.
#[component]
fn AdminMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    view! {
        <nav class="admin-menu">
            {MENU
                .iter()
                .map(|item| {
                    let key = item.key;
                    let navigate = navigate.clone();
                    let on_click = move |_| {
                        let mut target = None;
                        ui.update(|u| target = select_menu(u, key));
                        if let Some(path) = target {
                            navigate(path, NavigateOptions::default());
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if ui.get().selected_menu_key == key {
                                    "admin-menu__item admin-menu__item--selected"
                                } else {
                                    "admin-menu__item"
                                }
                            }
                            title=item.label
                            on:click=on_click
                        >
                            <span class="admin-menu__icon">{item.icon}</span>
                            <Show when=move || !ui.get().sider_collapsed>
                                <span class="admin-menu__label">{item.label}</span>
                            </Show>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn AdminLayout(routes: &'static [RouteDescriptor]) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    Effect::new(move || {
        if let Some(key) = menu_key_for_path(&location.pathname.get()) {
            if ui.with_untracked(|u| u.selected_menu_key != key) {
                ui.update(|u| u.select(key));
            }
        }
    });

    let toggle = move |_| ui.update(|u| u.set_collapsed(!u.sider_collapsed));

    view! {
        <AdminGuard>
            <div class="admin-layout">
                <aside class=move || {
                    if ui.get().sider_collapsed { "admin-sider admin-sider--collapsed" } else { "admin-sider" }
                }>
                    <div class="admin-sider__logo">"gframe"</div>
                    <AdminMenu/>
                    <button class="btn admin-sider__trigger" on:click=toggle title="Toggle menu">
                        {move || if ui.get().sider_collapsed { "»" } else { "«" }}
                    </button>
                </aside>
                <div class="admin-main">
                    <header class="admin-header site-layout-background">
                        <LoginUser/>
                    </header>
                    <main class="admin-content site-layout-background">
                        <NestRoute routes=routes/>
                    </main>
                    <footer class="admin-footer">{FOOTER_TEXT}</footer>
                </div>
            </div>
        </AdminGuard>
    }
}
