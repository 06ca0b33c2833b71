//! Stored website credentials.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn CredentialsPage() -> impl IntoView {
    view! {
        <NavBar/>
        <section class="page credentials-page">
            <h1>"Credentials"</h1>
            <p>"Logins saved for websites and services."</p>
        </section>
    }
}
