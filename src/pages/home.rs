//! Authenticated landing page.

use leptos::prelude::*;

use crate::app::SharedSession;
use crate::components::nav_bar::NavBar;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<SharedSession>();
    let greeting = store
        .user()
        .map(|u| format!("Welcome back, {}.", u.display_name()))
        .unwrap_or_default();

    view! {
        <NavBar/>
        <section class="page home-page">
            <h1>{greeting}</h1>
            <p>"Pick what you want to manage."</p>
            <ul class="home-page__sections">
                <li><a href="/credentials">"Credentials"</a>" - site logins and passwords"</li>
                <li><a href="/bank-card">"Bank cards"</a>" - card numbers and expiry dates"</li>
                <li><a href="/binary-data">"Binary data"</a>" - keys, certificates, and other files"</li>
            </ul>
        </section>
    }
}
