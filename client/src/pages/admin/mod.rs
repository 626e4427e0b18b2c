//! Admin sub-application: guarded shell plus its nested route table.

pub mod guard;
pub mod layout;
pub mod panels;

use leptos::prelude::*;

use crate::components::nest_route::RouteDescriptor;
use crate::pages::not_found::NotFoundPage;
use panels::{DataManagePage, ImageManagePage, ImageUploadPage};

/// Landing path of the admin shell.
pub const ADMIN_HOME: &str = "/ad";

/// Routes rendered inside the admin content area; the trailing prefix entry
/// is the admin-scoped not-found page.
pub const ADMIN_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::exact(ADMIN_HOME, render_image_upload),
    RouteDescriptor::exact("/ad/page1", render_image_upload),
    RouteDescriptor::exact("/ad/page2", render_image_manage),
    RouteDescriptor::exact("/ad/page3", render_data_manage),
    RouteDescriptor::prefix(ADMIN_HOME, render_not_found),
];

fn render_image_upload(_: &'static [RouteDescriptor]) -> AnyView {
    view! { <ImageUploadPage/> }.into_any()
}

fn render_image_manage(_: &'static [RouteDescriptor]) -> AnyView {
    view! { <ImageManagePage/> }.into_any()
}

fn render_data_manage(_: &'static [RouteDescriptor]) -> AnyView {
    view! { <DataManagePage/> }.into_any()
}

fn render_not_found(_: &'static [RouteDescriptor]) -> AnyView {
    view! { <NotFoundPage/> }.into_any()
}
