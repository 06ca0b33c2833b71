//! Top bar with links to the vault sections, the signed-in user, and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::SharedSession;

const LINKS: &[(&str, &str)] =
    &[("/", "Home"), ("/credentials", "Credentials"), ("/bank-card", "Bank cards"), ("/binary-data", "Binary data")];

#[component]
pub fn NavBar() -> impl IntoView {
    let store = expect_context::<SharedSession>();
    let pathname = use_location().pathname;

    let display_name = store.user().map(|u| u.display_name().to_owned()).unwrap_or_default();

    let on_logout = move |_| store.logout();

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Lockbox"</span>
            {LINKS
                .iter()
                .map(|(href, label)| {
                    let href = *href;
                    let class = move || {
                        if pathname.get() == href { "nav-bar__link nav-bar__link--active" } else { "nav-bar__link" }
                    };
                    view! {
                        <a href=href class=class>
                            {*label}
                        </a>
                    }
                })
                .collect_view()}
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__user">{display_name}</span>
            <button class="btn nav-bar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </nav>
    }
}
