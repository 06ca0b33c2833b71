//! Guarded outlet rendering the page for the current location.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route renders through here, so the navigation guard runs on each
//! location change before any page is built.

#[cfg(test)]
#[path = "route_view_test.rs"]
mod route_view_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::app::SharedSession;
use crate::guard::{Decision, before_each};
use crate::pages::{
    bank_card::BankCardPage, binary_data::BinaryDataPage, credentials::CredentialsPage, home::HomePage,
    login::LoginPage, not_found::NotFoundPage, signup::SignupPage,
};
use crate::router::{View, resolve};

/// Rebuild the full path from router location parts.
pub(crate) fn full_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

fn render_view(view: View) -> AnyView {
    match view {
        View::Login => view! { <LoginPage/> }.into_any(),
        View::Signup => view! { <SignupPage/> }.into_any(),
        View::Home => view! { <HomePage/> }.into_any(),
        View::Credentials => view! { <CredentialsPage/> }.into_any(),
        View::BankCard => view! { <BankCardPage/> }.into_any(),
        View::BinaryData => view! { <BinaryDataPage/> }.into_any(),
    }
}

#[component]
pub fn RouteView() -> impl IntoView {
    let store = expect_context::<SharedSession>();
    let location = use_location();

    move || {
        let target = full_path(&location.pathname.get(), &location.search.get());
        let Some(route) = resolve(&target) else {
            return view! { <NotFoundPage/> }.into_any();
        };
        match before_each(&store, &target) {
            Decision::Allow => render_view(route.view),
            Decision::RedirectTo(path) => view! { <Redirect path=path/> }.into_any(),
        }
    }
}
